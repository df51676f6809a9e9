// src/animation/frame_clock.rs
//
// The per-frame animation state: two live parameters and the accumulator
// they drive.

pub const DEFAULT_SPEED: f32 = 1.0;
pub const DEFAULT_SIZE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// multiplier on elapsed time
    pub speed: f32,
    /// uniform scale on the curve radius
    pub size: f32,
    accumulated_value: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED, DEFAULT_SIZE)
    }
}

impl AnimationState {
    pub fn new(speed: f32, size: f32) -> Self {
        Self {
            speed,
            size,
            accumulated_value: 0.0,
        }
    }

    /// Adds `dt * speed` to the accumulator.
    /// Negative `dt` or `speed` are accepted and run the accumulator backwards.
    pub fn advance(&mut self, dt: f32) {
        self.accumulated_value += dt * self.speed;
    }

    pub fn accumulated_value(&self) -> f32 {
        self.accumulated_value
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = AnimationState::default();
        assert_eq!(state.speed, 1.0);
        assert_eq!(state.size, 2.0);
        assert_eq!(state.accumulated_value(), 0.0);
    }

    #[test]
    fn test_unit_speed_one_second() {
        let mut state = AnimationState::default();
        state.advance(1.0);
        assert_eq!(state.accumulated_value(), 1.0);
    }

    #[test]
    fn test_double_speed_half_second() {
        let mut state = AnimationState::default();
        state.speed = 2.0;
        state.advance(0.5);
        assert_eq!(state.accumulated_value(), 1.0);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut state = AnimationState::default();
        state.advance(0.75);
        let before = state.accumulated_value();
        state.advance(0.0);
        assert_eq!(state.accumulated_value(), before);
    }

    #[test]
    fn test_advance_is_additive() {
        let pairs = [(0.0, 0.0), (0.016, 0.017), (0.25, 0.5), (1.0, 3.0), (0.1, 0.2)];
        for &speed in &[0.5_f32, 1.0, 2.0, -1.5] {
            for &(dt1, dt2) in &pairs {
                let mut split = AnimationState::new(speed, 2.0);
                split.advance(dt1);
                split.advance(dt2);

                let mut single = AnimationState::new(speed, 2.0);
                single.advance(dt1 + dt2);

                let diff = (split.accumulated_value() - single.accumulated_value()).abs();
                assert!(diff < 1e-6, "speed={} dt1={} dt2={}", speed, dt1, dt2);
            }
        }
    }

    #[test]
    fn test_negative_inputs_run_backwards() {
        let mut state = AnimationState::new(-1.0, 2.0);
        state.advance(2.0);
        assert_eq!(state.accumulated_value(), -2.0);

        let mut state = AnimationState::default();
        state.advance(-0.5);
        assert_eq!(state.accumulated_value(), -0.5);
    }

    #[test]
    fn test_size_does_not_affect_accumulator() {
        let mut a = AnimationState::new(1.0, 2.0);
        let mut b = AnimationState::new(1.0, 9.0);
        a.advance(0.3);
        b.advance(0.3);
        assert_eq!(a.accumulated_value(), b.accumulated_value());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = AnimationState::new(3.0, 5.0);
        state.advance(10.0);
        state.reset();
        assert_eq!(state, AnimationState::default());
    }
}
