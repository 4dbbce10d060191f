//! Per-tick snapshot views — the read-only state handed to the hosting
//! harness (HUD, rendering, collision) after each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::control::ActuatorCommand;
use crate::enums::FlightMode;
use crate::types::SimTime;

/// Diagnostic snapshot of the control law for one ship and one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ControlTelemetry {
    pub mode: Option<FlightMode>,
    pub autopilot: bool,
    /// Active handling profile name.
    pub profile: String,
    /// Current slip angle (degrees).
    pub slip_deg: f64,
    /// Commanded slip target (degrees).
    pub slip_target_deg: f64,
    /// Lorentz factor from current speed.
    pub gamma: f64,
    pub v_over_c: f64,
    /// True above the HUD relativity threshold (v/c ≥ 0.5).
    pub relativity_active: bool,
    /// Effective commanded accelerations after jerk limiting (m/s²).
    pub forward_accel_mps2: f64,
    pub lateral_accel_mps2: f64,
    /// Whether the jerk limiter clipped this tick's delta.
    pub forward_jerk_clamped: bool,
    pub lateral_jerk_clamped: bool,
    /// Brake boost sub-mode currently raising the deceleration ceiling.
    pub boost_active: bool,
    /// Braking solver reports both speed and spin below epsilon.
    pub brake_finished: bool,
}

/// One ship's visible state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub id: u32,
    pub name: String,
    pub position: DVec2,
    pub velocity: DVec2,
    pub speed: f64,
    pub momentum: DVec2,
    pub orientation: f64,
    pub angular_velocity: f64,
    pub gamma: f64,
    pub camera: DVec2,
    pub command: ActuatorCommand,
    pub telemetry: ControlTelemetry,
}

/// Complete simulation state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub ships: Vec<ShipView>,
}
