// src/models/curve.rs
//
// Parametric curve definitions.
// A curve is an immutable value; the simulation rebuilds it from the current
// size every time points are requested.

use super::geometry::CurvePoint;

pub const BUTTERFLY_T_START: f32 = 0.0;
pub const BUTTERFLY_T_END: f32 = 50.0;

/// A curve given by two coordinate functions of a single parameter `t`.
pub trait ParametricCurve {
    fn x(&self, t: f32) -> f32;
    fn y(&self, t: f32) -> f32;

    /// Parameter range `(t_start, t_end)` the curve is drawn over.
    fn t_range(&self) -> (f32, f32);

    fn point_at(&self, t: f32) -> CurvePoint {
        CurvePoint::new(self.x(t), self.y(t))
    }
}

/// Butterfly curve variant:
///
/// ```text
/// g(t) = e^cos(t) - 2cos(4t) - sin(t/12)^5
/// r(t) = (size / 2) * (sin(t) * g(t), cos(t) * g(t))
/// ```
///
/// `size` scales both coordinates uniformly, so changing it never changes
/// the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButterflyCurve {
    pub size: f32,
    pub t_start: f32,
    pub t_end: f32,
}

impl ButterflyCurve {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            t_start: BUTTERFLY_T_START,
            t_end: BUTTERFLY_T_END,
        }
    }

    pub fn with_range(mut self, t_start: f32, t_end: f32) -> Self {
        self.t_start = t_start;
        self.t_end = t_end;
        self
    }

    /// Radial term shared by both coordinates
    pub fn radius(t: f32) -> f32 {
        t.cos().exp() - 2.0 * (4.0 * t).cos() - (t / 12.0).sin().powi(5)
    }

    fn half_size(&self) -> f32 {
        self.size * 0.5
    }
}

impl ParametricCurve for ButterflyCurve {
    fn x(&self, t: f32) -> f32 {
        t.sin() * Self::radius(t) * self.half_size()
    }

    fn y(&self, t: f32) -> f32 {
        t.cos() * Self::radius(t) * self.half_size()
    }

    fn t_range(&self) -> (f32, f32) {
        (self.t_start, self.t_end)
    }
}

/// Adapts a pair of closures into a `ParametricCurve`.
#[derive(Clone)]
pub struct FnCurve<Fx, Fy> {
    fx: Fx,
    fy: Fy,
    t_start: f32,
    t_end: f32,
}

impl<Fx, Fy> FnCurve<Fx, Fy>
where
    Fx: Fn(f32) -> f32,
    Fy: Fn(f32) -> f32,
{
    pub fn new(fx: Fx, fy: Fy, t_start: f32, t_end: f32) -> Self {
        Self {
            fx,
            fy,
            t_start,
            t_end,
        }
    }
}

impl<Fx, Fy> ParametricCurve for FnCurve<Fx, Fy>
where
    Fx: Fn(f32) -> f32,
    Fy: Fn(f32) -> f32,
{
    fn x(&self, t: f32) -> f32 {
        (self.fx)(t)
    }

    fn y(&self, t: f32) -> f32 {
        (self.fy)(t)
    }

    fn t_range(&self) -> (f32, f32) {
        (self.t_start, self.t_end)
    }
}
