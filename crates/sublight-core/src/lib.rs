//! Core types and definitions for the SUBLIGHT flight model.
//!
//! This crate defines the vocabulary shared across all other crates:
//! configuration, components, control intent, relativistic kinematics
//! helpers, telemetry views, and constants. It has no dependency on any
//! runtime framework and no knowledge of who drives the tick loop.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod control;
pub mod enums;
pub mod errors;
pub mod relativity;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
