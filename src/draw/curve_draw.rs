// src/draw/curve_draw.rs
// Joins sampled curve points with straight segments

use nannou::lyon::tessellation::LineCap;
use nannou::prelude::*;

use super::{DrawParams, Transform2D};
use crate::models::CurvePoint;

pub fn draw_curve(draw: &Draw, points: &[CurvePoint], transform: &Transform2D, params: &DrawParams) {
    for pair in points.windows(2) {
        let start = transform.to_screen(&pair[0]);
        let end = transform.to_screen(&pair[1]);

        draw.line()
            .points(start, end)
            .color(params.color)
            .stroke_weight(params.stroke_weight)
            .caps(LineCap::Round);
    }
}
