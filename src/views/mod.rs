// src/views/mod.rs

pub mod simulation;

pub use simulation::{Simulation, SimulationSettings};
