// src/models/frame.rs
// Everything one frame draws, as plain data

use serde::{Deserialize, Serialize};

use super::geometry::CurvePoint;
use super::grid_model::GridLine;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub frame: u64,
    pub accumulated_value: f32,
    pub speed: f32,
    pub size: f32,
    pub grid: Vec<GridLine>,
    pub curve: Vec<CurvePoint>, // polyline, consecutive points are joined
}

impl RenderOutput {
    /// Number of straight segments in the curve polyline
    pub fn segment_count(&self) -> usize {
        self.curve.len().saturating_sub(1)
    }

    /// Names the first NaN or infinite value, if any.
    /// JSON has no encoding for these.
    pub fn first_non_finite(&self) -> Option<String> {
        let scalars = [
            ("accumulated_value", self.accumulated_value),
            ("speed", self.speed),
            ("size", self.size),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Some(name.to_string());
        }

        let finite = |p: &CurvePoint| p.x.is_finite() && p.y.is_finite();
        if let Some(i) = self.curve.iter().position(|p| !finite(p)) {
            return Some(format!("curve[{}]", i));
        }
        self.grid
            .iter()
            .position(|l| !finite(&l.segment.start) || !finite(&l.segment.end))
            .map(|i| format!("grid[{}]", i))
    }
}
