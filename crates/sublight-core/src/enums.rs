//! Enumeration types used throughout the flight model.

use serde::{Deserialize, Serialize};

/// Persistent flight-assist selection, flipped by an explicit pilot
/// toggle. Brake is deliberately not representable here: it is a per-tick
/// override, never a sticky selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssistMode {
    /// Slip-corrected, rotation-stabilized assisted flight.
    #[default]
    Coupled,
    /// Manual passthrough with yaw jerk limiting only.
    Decoupled,
}

/// The mode actually flown on a given tick. Brake overrides the persistent
/// selection whenever brake input is held, and releases back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightMode {
    Coupled,
    Decoupled,
    Brake,
}

impl From<AssistMode> for FlightMode {
    fn from(mode: AssistMode) -> Self {
        match mode {
            AssistMode::Coupled => FlightMode::Coupled,
            AssistMode::Decoupled => FlightMode::Decoupled,
        }
    }
}

/// Named handling presets carried over from the ship catalog. Each maps to
/// a full [`crate::config::HandlingProfile`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssistPreset {
    #[default]
    Balanced,
    Sport,
    Rally,
    Muscle,
    F1,
    Industrial,
    Truck,
    Warship,
    Liner,
    Recon,
}

/// Top-level engine phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    Paused,
}
