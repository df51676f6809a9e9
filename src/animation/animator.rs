// src/animation/animator.rs
//
// Frame bookkeeping: real elapsed time, frame count and a smoothed FPS.

/// Weight of the newest frame in the FPS average
const FPS_SMOOTHING: f32 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct Animator {
    elapsed: f32,
    frame_count: u64,
    fps: f32,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        self.frame_count += 1;

        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.fps = if self.fps == 0.0 {
                instant_fps
            } else {
                self.fps + (instant_fps - self.fps) * FPS_SMOOTHING
            };
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_frames_and_time() {
        let mut animator = Animator::new();
        animator.update(0.5);
        animator.update(0.25);
        assert_eq!(animator.frame_count(), 2);
        assert_eq!(animator.elapsed(), 0.75);
    }

    #[test]
    fn test_first_frame_sets_fps() {
        let mut animator = Animator::new();
        animator.update(0.02);
        assert!((animator.fps() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_fps_is_smoothed() {
        let mut animator = Animator::new();
        animator.update(1.0 / 60.0);
        animator.update(1.0 / 30.0);
        let fps = animator.fps();
        assert!(fps < 60.0 && fps > 30.0, "fps = {}", fps);
        assert!((fps - 57.0).abs() < 1e-2, "fps = {}", fps);
    }

    #[test]
    fn test_zero_dt_keeps_fps() {
        let mut animator = Animator::new();
        animator.update(0.5);
        animator.update(0.0);
        assert_eq!(animator.fps(), 2.0);
        assert_eq!(animator.frame_count(), 2);
    }
}
