pub mod config_load;
pub mod config_types;

pub use config_load::{Config, ConfigSource};
pub use config_types::{
    AnimationConfig, CurveConfig, GridConfig, LoggingConfig, OscConfig, PathConfig,
    RenderConfig, StyleConfig, WindowConfig,
};
