pub mod curve_sampler;
pub mod frame_export;

pub use curve_sampler::{sample, sample_curve, CurveSamples};
pub use frame_export::FrameExporter;
