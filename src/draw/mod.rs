// src/draw/mod.rs
// Drawing of frame output with Nannou.
// Everything upstream works in curve units; these functions map to pixels.

pub mod curve_draw;
pub mod grid_draw;

use nannou::prelude::*;

use crate::models::CurvePoint;

#[derive(Debug, Clone)]
pub struct Transform2D {
    pub translation: Vec2, // window position of the curve origin, in pixels
    pub scale: f32,        // pixels per curve unit
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform2D {
    pub fn new(scale: f32, offset: [f32; 2]) -> Self {
        Self {
            translation: Vec2::new(offset[0], offset[1]),
            scale,
        }
    }

    /// Curve units to Nannou window coordinates: scale, then translate.
    pub fn to_screen(&self, point: &CurvePoint) -> Point2 {
        pt2(
            self.translation.x + point.x * self.scale,
            self.translation.y + point.y * self.scale,
        )
    }
}

#[derive(Debug, Clone)]
pub struct DrawParams {
    pub color: Rgb<f32>,
    pub stroke_weight: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            color: rgb(1.0, 0.63, 0.0),
            stroke_weight: 2.0,
        }
    }
}

impl DrawParams {
    pub fn from_rgb(color: [f32; 3], stroke_weight: f32) -> Self {
        Self {
            color: rgb(color[0], color[1], color[2]),
            stroke_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_only() {
        let transform = Transform2D::new(50.0, [0.0, 0.0]);
        let p = transform.to_screen(&CurvePoint::new(1.0, -2.0));
        assert_eq!(p.x, 50.0);
        assert_eq!(p.y, -100.0);
    }

    #[test]
    fn test_translation() {
        let transform = Transform2D::new(10.0, [100.0, -40.0]);
        let origin = transform.to_screen(&CurvePoint::new(0.0, 0.0));
        assert_eq!(origin, pt2(100.0, -40.0));

        let p = transform.to_screen(&CurvePoint::new(1.5, 2.0));
        assert_eq!(p, pt2(115.0, -20.0));
    }

    #[test]
    fn test_default_is_identity() {
        let p = Transform2D::default().to_screen(&CurvePoint::new(-3.0, 0.25));
        assert_eq!(p, pt2(-3.0, 0.25));
    }

    #[test]
    fn test_draw_params_from_rgb() {
        let params = DrawParams::from_rgb([0.1, 0.2, 0.3], 4.0);
        assert_eq!(params.color.red, 0.1);
        assert_eq!(params.color.green, 0.2);
        assert_eq!(params.color.blue, 0.3);
        assert_eq!(params.stroke_weight, 4.0);
    }
}
