// src/draw/grid_draw.rs
// Draws the reference grid; lines through the origin get their own style

use nannou::prelude::*;

use super::{DrawParams, Transform2D};
use crate::models::GridLine;

pub fn draw_grid(
    draw: &Draw,
    lines: &[GridLine],
    transform: &Transform2D,
    params: &DrawParams,
    axis_params: &DrawParams,
) {
    // regular lines first so the axes sit on top
    for line in lines.iter().filter(|l| !l.is_origin) {
        draw_grid_line(draw, line, transform, params);
    }
    for line in lines.iter().filter(|l| l.is_origin) {
        draw_grid_line(draw, line, transform, axis_params);
    }
}

fn draw_grid_line(draw: &Draw, line: &GridLine, transform: &Transform2D, params: &DrawParams) {
    let start = transform.to_screen(&line.segment.start);
    let end = transform.to_screen(&line.segment.end);

    draw.line()
        .points(start, end)
        .color(params.color)
        .stroke_weight(params.stroke_weight);
}
