//! SUBLIGHT simulation — per-tick flight pipeline.
//!
//! `SimulationEngine` owns the hecs ECS world of ships and advances them
//! once per tick: pilot assist (mode arbitration + control law) feeds the
//! rigid-body integrator, and a snapshot of the resulting state is handed
//! back to the hosting harness. Completely headless, enabling
//! deterministic testing.

pub mod brake;
pub mod controller;
pub mod engine;
pub mod systems;
pub mod world_setup;
