// src/models/grid_model.rs
// The reference grid drawn behind the curve

use serde::{Deserialize, Serialize};

use super::geometry::{CurvePoint, LineSegment};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GridAxis {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub axis: GridAxis,
    pub segment: LineSegment,
    pub is_origin: bool, // passes through (0, 0)
}

/// Square grid centered on the origin.
/// `extent` cells across, each `spacing` units wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceGrid {
    pub extent: u32,
    pub spacing: f32,
}

impl Default for ReferenceGrid {
    fn default() -> Self {
        Self {
            extent: 10,
            spacing: 1.0,
        }
    }
}

impl ReferenceGrid {
    pub fn new(extent: u32, spacing: f32) -> Self {
        Self { extent, spacing }
    }

    /// Half the grid width in curve units
    pub fn half_width(&self) -> f32 {
        (self.extent / 2) as f32 * self.spacing
    }

    /// All grid lines: vertical lines left to right, then horizontal lines
    /// bottom to top. An extent of `n` gives `n / 2 * 2 + 1` lines per axis.
    pub fn lines(&self) -> Vec<GridLine> {
        let half_slices = (self.extent / 2) as i32;
        let half = self.half_width();
        let per_axis = (2 * half_slices + 1) as usize;
        let mut lines = Vec::with_capacity(per_axis * 2);

        for i in -half_slices..=half_slices {
            let x = i as f32 * self.spacing;
            lines.push(GridLine {
                axis: GridAxis::Vertical,
                segment: LineSegment::new(CurvePoint::new(x, -half), CurvePoint::new(x, half)),
                is_origin: i == 0,
            });
        }

        for i in -half_slices..=half_slices {
            let y = i as f32 * self.spacing;
            lines.push(GridLine {
                axis: GridAxis::Horizontal,
                segment: LineSegment::new(CurvePoint::new(-half, y), CurvePoint::new(half, y)),
                is_origin: i == 0,
            });
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_line_count() {
        let lines = ReferenceGrid::default().lines();
        assert_eq!(lines.len(), 22);

        let vertical = lines
            .iter()
            .filter(|l| l.axis == GridAxis::Vertical)
            .count();
        assert_eq!(vertical, 11);
    }

    #[test]
    fn test_default_grid_extent() {
        let grid = ReferenceGrid::default();
        assert_eq!(grid.half_width(), 5.0);

        let lines = grid.lines();
        let first = lines.first().unwrap();
        assert_eq!(first.segment.start, CurvePoint::new(-5.0, -5.0));
        assert_eq!(first.segment.end, CurvePoint::new(-5.0, 5.0));

        let last = lines.last().unwrap();
        assert_eq!(last.axis, GridAxis::Horizontal);
        assert_eq!(last.segment.start, CurvePoint::new(-5.0, 5.0));
        assert_eq!(last.segment.end, CurvePoint::new(5.0, 5.0));

        for line in &lines {
            let dx = line.segment.end.x - line.segment.start.x;
            let dy = line.segment.end.y - line.segment.start.y;
            assert_eq!(dx + dy, 10.0);
        }
    }

    #[test]
    fn test_origin_lines_flagged() {
        let lines = ReferenceGrid::default().lines();
        let origin: Vec<_> = lines.iter().filter(|l| l.is_origin).collect();
        assert_eq!(origin.len(), 2);
        assert_eq!(origin[0].axis, GridAxis::Vertical);
        assert_eq!(origin[0].segment.start.x, 0.0);
        assert_eq!(origin[1].axis, GridAxis::Horizontal);
        assert_eq!(origin[1].segment.start.y, 0.0);
    }

    #[test]
    fn test_spacing_scales_lines() {
        let grid = ReferenceGrid::new(4, 2.5);
        let lines = grid.lines();
        assert_eq!(lines.len(), 10);
        assert_eq!(grid.half_width(), 5.0);
        assert_eq!(lines[1].segment.start.x, -2.5);
    }

    #[test]
    fn test_zero_extent_is_a_cross() {
        let lines = ReferenceGrid::new(0, 1.0).lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.is_origin && l.segment.start == l.segment.end));
    }
}
