// src/models/geometry.rs
// Plain 2D types shared by the sampler, the grid and the frame output

use serde::{Deserialize, Serialize};

/// A point in curve units (not pixels). y points up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f32,
    pub y: f32,
}

impl CurvePoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for CurvePoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A straight segment between two points in curve units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: CurvePoint,
    pub end: CurvePoint,
}

impl LineSegment {
    pub fn new(start: CurvePoint, end: CurvePoint) -> Self {
        Self { start, end }
    }
}
