//src/utilities/easing.rs

// easing curves for parameter tweens

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum EasingType {
    Linear,
    EaseInOut,
    EaseIn,
    EaseOut,
}

impl EasingType {
    /// Maps normalized progress `t` in [0, 1] to eased progress.
    /// Input outside the range is clamped.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseInOut => ease_in_out(t),
            EasingType::EaseIn => ease_in(t),
            EasingType::EaseOut => ease_out(t),
        }
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::EaseInOut,
        EasingType::EaseIn,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-2.0), 0.0);
            assert_eq!(easing.apply(3.0), 1.0);
        }
    }

    #[test]
    fn test_curve_shapes() {
        assert_eq!(EasingType::Linear.apply(0.25), 0.25);
        assert_eq!(EasingType::EaseIn.apply(0.5), 0.25);
        assert_eq!(EasingType::EaseOut.apply(0.5), 0.75);
        assert_eq!(EasingType::EaseInOut.apply(0.5), 0.5);
        assert!(EasingType::EaseInOut.apply(0.25) < 0.25);
        assert!(EasingType::EaseInOut.apply(0.75) > 0.75);
    }
}
