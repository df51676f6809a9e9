// src/services/curve_sampler.rs
//
// Turns a parametric curve into a polyline.
// Sampling is lazy: points are evaluated as the iterator is pulled. A clone
// continues from the current position; restart() rewinds to the first sample.

use crate::models::{CurvePoint, FnCurve, ParametricCurve};

/// Fewest points a non-degenerate range is sampled with
pub const MIN_SAMPLES: usize = 2;

/// Uniform samples of a curve over `[t_start, t_end]`, both ends included.
#[derive(Clone)]
pub struct CurveSamples<C> {
    curve: C,
    t_start: f32,
    t_end: f32,
    count: usize,
    index: usize,
}

impl<C: ParametricCurve> CurveSamples<C> {
    fn new(curve: C, samples: usize) -> Self {
        let (t_start, t_end) = curve.t_range();
        let count = if t_start == t_end {
            1
        } else {
            samples.max(MIN_SAMPLES)
        };

        Self {
            curve,
            t_start,
            t_end,
            count,
            index: 0,
        }
    }

    /// Parameter value of the i-th sample. The last sample lands exactly on t_end.
    fn t_at(&self, i: usize) -> f32 {
        if i + 1 >= self.count {
            return self.t_end;
        }
        let progress = i as f32 / (self.count - 1) as f32;
        self.t_start + (self.t_end - self.t_start) * progress
    }

    /// Total number of points, independent of iteration progress
    pub fn total(&self) -> usize {
        self.count
    }

    /// Rewinds to the first sample so the same points can be walked again.
    pub fn restart(&mut self) {
        self.index = 0;
    }
}

impl<C: ParametricCurve> Iterator for CurveSamples<C> {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let t = self.t_at(self.index);
        self.index += 1;
        Some(self.curve.point_at(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<C: ParametricCurve> ExactSizeIterator for CurveSamples<C> {}

/// Samples any `ParametricCurve` over its own range.
pub fn sample_curve<C: ParametricCurve>(curve: C, samples: usize) -> CurveSamples<C> {
    CurveSamples::new(curve, samples)
}

/// Samples two coordinate functions over `[t_start, t_end]`.
///
/// A range with `t_start == t_end` yields exactly one point; a reversed range
/// walks backwards from `t_start` to `t_end`.
pub fn sample<Fx, Fy>(
    fx: Fx,
    fy: Fy,
    t_start: f32,
    t_end: f32,
    samples: usize,
) -> CurveSamples<FnCurve<Fx, Fy>>
where
    Fx: Fn(f32) -> f32,
    Fy: Fn(f32) -> f32,
{
    sample_curve(FnCurve::new(fx, fy, t_start, t_end), samples)
}
