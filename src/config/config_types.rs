// src/config/config_types.rs
//
// Config types for the app.
// Every section falls back to its Default so a partial config.toml still loads.

use crate::utilities::easing::EasingType;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "curvevis".to_string(),
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    pub msaa_samples: u32,
    pub curve_samples: usize, // points per curve, rendering quality only
    pub pixels_per_unit: f32,
    pub origin_offset: [f32; 2], // pixels from the window center
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            msaa_samples: 4,
            curve_samples: 2000,
            pixels_per_unit: 50.0,
            origin_offset: [0.0, 0.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GridConfig {
    pub extent: u32, // number of cells across
    pub spacing: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            extent: 10,
            spacing: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CurveConfig {
    pub speed: f32,
    pub size: f32,
    pub t_start: f32,
    pub t_end: f32,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            size: 2.0,
            t_start: 0.0,
            t_end: 50.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StyleConfig {
    pub background_color: [f32; 3],
    pub grid_color: [f32; 3],
    pub axis_color: [f32; 3],
    pub curve_color: [f32; 3],
    pub grid_stroke_weight: f32,
    pub curve_stroke_weight: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: [0.96, 0.96, 0.96],
            grid_color: [0.78, 0.78, 0.78],
            axis_color: [0.55, 0.55, 0.55],
            curve_color: [1.0, 0.63, 0.0],
            grid_stroke_weight: 1.0,
            curve_stroke_weight: 2.0,
        }
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnimationConfig {
    pub size_tween_duration: f32,
    pub size_tween_easing: EasingType,
    pub speed_step: f32, // keyboard increments
    pub size_step: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            size_tween_duration: 0.5,
            size_tween_easing: EasingType::EaseInOut,
            speed_step: 0.25,
            size_step: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OscConfig {
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self { rx_port: 9000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PathConfig {
    pub output_directory: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            output_directory: "output".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
