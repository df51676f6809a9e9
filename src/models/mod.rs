pub mod curve;
pub mod frame;
pub mod geometry;
pub mod grid_model;

pub use curve::{ButterflyCurve, FnCurve, ParametricCurve};
pub use frame::RenderOutput;
pub use geometry::{CurvePoint, LineSegment};
pub use grid_model::{GridAxis, GridLine, ReferenceGrid};
