// src/lib.rs
//
// curvevis: an animated butterfly curve over a reference grid.
// The frame clock, curve sampler and simulation are plain Rust; draw/ and
// controllers/ are the Nannou and OSC edges.

pub mod animation;
pub mod config;
pub mod controllers;
pub mod draw;
pub mod error;
pub mod models;
pub mod services;
pub mod utilities;
pub mod views;

pub use error::{CurvevisError, CurvevisResult};
