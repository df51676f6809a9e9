// src/views/simulation.rs
//
// The animated curve: owns the frame clock, the reference grid and the
// sampling settings. The host loop calls update(dt) once per frame and then
// draws render_output(); step(dt) does both for headless callers.

use crate::animation::{AnimationState, Animator, ParamTween};
use crate::config::Config;
use crate::models::{ButterflyCurve, ReferenceGrid, RenderOutput};
use crate::services::{sample_curve, CurveSamples};
use crate::utilities::easing::EasingType;

#[derive(Debug, Clone)]
pub struct SimulationSettings {
    pub speed: f32,
    pub size: f32,
    pub t_start: f32,
    pub t_end: f32,
    pub curve_samples: usize,
    pub grid: ReferenceGrid,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        let state = AnimationState::default();
        let curve = ButterflyCurve::new(state.size);
        Self {
            speed: state.speed,
            size: state.size,
            t_start: curve.t_start,
            t_end: curve.t_end,
            curve_samples: 2000,
            grid: ReferenceGrid::default(),
        }
    }
}

impl SimulationSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            speed: config.curve.speed,
            size: config.curve.size,
            t_start: config.curve.t_start,
            t_end: config.curve.t_end,
            curve_samples: config.rendering.curve_samples,
            grid: ReferenceGrid::new(config.grid.extent, config.grid.spacing),
        }
    }
}

pub struct Simulation {
    state: AnimationState,
    animator: Animator,
    settings: SimulationSettings,
    size_tween: Option<ParamTween>,
    pub grid_visible: bool,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationSettings::default())
    }
}

impl Simulation {
    pub fn new(settings: SimulationSettings) -> Self {
        Self {
            state: AnimationState::new(settings.speed, settings.size),
            animator: Animator::new(),
            settings,
            size_tween: None,
            grid_visible: true,
        }
    }

    /************************** Frame update **************************/

    /// Advances one frame: a running size tween first, then the accumulator.
    pub fn update(&mut self, dt: f32) {
        self.animator.update(dt);

        if let Some(tween) = self.size_tween.as_mut() {
            self.state.size = tween.update(dt);
            if tween.is_complete() {
                self.size_tween = None;
            }
        }

        self.state.advance(dt);
    }

    /// update(dt) followed by render_output()
    pub fn step(&mut self, dt: f32) -> RenderOutput {
        self.update(dt);
        self.render_output()
    }

    /************************** Frame output **************************/

    /// The curve for the current size. Rebuilt on every call.
    pub fn curve(&self) -> ButterflyCurve {
        ButterflyCurve::new(self.state.size).with_range(self.settings.t_start, self.settings.t_end)
    }

    pub fn current_curve_points(&self) -> CurveSamples<ButterflyCurve> {
        sample_curve(self.curve(), self.settings.curve_samples)
    }

    pub fn render_output(&self) -> RenderOutput {
        let grid = if self.grid_visible {
            self.settings.grid.lines()
        } else {
            Vec::new()
        };

        RenderOutput {
            frame: self.animator.frame_count(),
            accumulated_value: self.state.accumulated_value(),
            speed: self.state.speed,
            size: self.state.size,
            grid,
            curve: self.current_curve_points().collect(),
        }
    }

    /************************** Controls **************************/

    pub fn set_speed(&mut self, speed: f32) {
        self.state.speed = speed;
    }

    /// Sets size immediately, cancelling any running tween.
    pub fn set_size(&mut self, size: f32) {
        self.size_tween = None;
        self.state.size = size;
    }

    /// Eases size from its current value to `target` over `duration` seconds.
    /// A non-positive duration behaves like set_size.
    pub fn tween_size(&mut self, target: f32, duration: f32, easing: EasingType) {
        if duration <= 0.0 {
            self.set_size(target);
            return;
        }
        self.size_tween = Some(ParamTween::new(self.state.size, target, duration, easing));
    }

    /// Size the curve is heading to: the tween target if one is running.
    pub fn target_size(&self) -> f32 {
        self.size_tween
            .as_ref()
            .map(|tween| tween.target())
            .unwrap_or(self.state.size)
    }

    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
    }

    /// Back to the starting speed and size with a zeroed accumulator.
    pub fn reset(&mut self) {
        self.state = AnimationState::new(self.settings.speed, self.settings.size);
        self.size_tween = None;
        self.animator.reset();
    }

    /************************** Accessors **************************/

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn is_tweening(&self) -> bool {
        self.size_tween.is_some()
    }
}
