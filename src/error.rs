// src/error.rs
//
// Error type shared by the app's outer layers.
// The curve core is total and never returns these.

pub type CurvevisResult<T> = Result<T, CurvevisError>;

#[derive(thiserror::Error, Debug)]
pub enum CurvevisError {
    #[error("config error: {0}")]
    Config(String),

    #[error("osc error: {0}")]
    Osc(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("export error: {0}")]
    Export(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CurvevisError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn osc(msg: impl Into<String>) -> Self {
        Self::Osc(msg.into())
    }

    pub fn window(msg: impl Into<String>) -> Self {
        Self::Window(msg.into())
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}
