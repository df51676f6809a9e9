pub mod animator;
pub mod frame_clock;
pub mod param_tween;

pub use animator::Animator;
pub use frame_clock::{AnimationState, DEFAULT_SIZE, DEFAULT_SPEED};
pub use param_tween::ParamTween;
