// src/animation/param_tween.rs
//
// Time based tween of a single scalar parameter.
// Used to ease `size` to a new target instead of jumping.

use crate::utilities::easing::EasingType;

#[derive(Debug, Clone)]
pub struct ParamTween {
    start: f32,
    target: f32,
    duration: f32,
    elapsed: f32,
    easing: EasingType,
}

impl ParamTween {
    pub fn new(start: f32, target: f32, duration: f32, easing: EasingType) -> Self {
        Self {
            start,
            target,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advances the tween by `dt` seconds and returns the new value.
    /// Once complete the target is returned exactly.
    pub fn update(&mut self, dt: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.is_complete() {
            return self.target;
        }
        let eased = self.easing.apply(self.elapsed / self.duration);
        self.start + (self.target - self.start) * eased
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_midpoint() {
        let mut tween = ParamTween::new(2.0, 4.0, 1.0, EasingType::Linear);
        assert_eq!(tween.update(0.5), 3.0);
        assert!(!tween.is_complete());
    }

    #[test]
    fn test_completes_on_target() {
        let mut tween = ParamTween::new(2.0, 4.0, 0.5, EasingType::EaseInOut);
        tween.update(0.3);
        assert_eq!(tween.update(0.3), 4.0);
        assert!(tween.is_complete());

        // stays on target after completion
        assert_eq!(tween.update(1.0), 4.0);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let tween = ParamTween::new(1.0, 8.0, 0.0, EasingType::Linear);
        assert!(tween.is_complete());
        assert_eq!(tween.value(), 8.0);
    }

    #[test]
    fn test_negative_dt_does_not_rewind() {
        let mut tween = ParamTween::new(0.0, 10.0, 1.0, EasingType::Linear);
        tween.update(0.5);
        assert_eq!(tween.update(-0.25), 5.0);
    }

    #[test]
    fn test_easing_shapes_progress() {
        let mut ease_in = ParamTween::new(0.0, 1.0, 1.0, EasingType::EaseIn);
        let mut ease_out = ParamTween::new(0.0, 1.0, 1.0, EasingType::EaseOut);
        assert_eq!(ease_in.update(0.5), 0.25);
        assert_eq!(ease_out.update(0.5), 0.75);
    }
}
