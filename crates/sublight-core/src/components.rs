//! ECS components for hecs entities.
//!
//! Components are plain data structs; flight logic lives in the sim
//! crate's systems. Every piece of cross-tick state (jerk history,
//! autopilot timers, boost cooldown) is owned here, per ship — never in
//! module-level statics.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::{InertiaTensor, ShipConfig, ThrustBudget};
use crate::enums::AssistMode;
use crate::errors::ConfigError;

/// Identity tag for a ship entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipLabel {
    pub id: u32,
    pub name: String,
}

/// Mutable per-ship simulation state.
///
/// Momentum is authoritative; `velocity` is re-derived from it every tick,
/// which is what guarantees sub-light speed without a clamp. Mutated
/// exclusively by the integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipDynamics {
    pub position: DVec2,
    /// Derived from `momentum` each tick; stored for readers.
    pub velocity: DVec2,
    /// Relativistic momentum (kg·m/s), the authoritative quantity.
    pub momentum: DVec2,
    /// Yaw orientation (radians, wrapped to (−π, π]).
    pub orientation: f64,
    /// Yaw rate (rad/s).
    pub angular_velocity: f64,
    /// Constant for the session.
    pub mass_kg: f64,
    pub inertia: InertiaTensor,
    /// Effective radius for rim-speed relativistic effects (m).
    pub yaw_radius_m: f64,
    /// Capability envelope, immutable per session.
    pub thrust: ThrustBudget,
    /// Lorentz factor as of the last integration step.
    pub gamma: f64,
}

impl ShipDynamics {
    /// Construct at rest at the origin from a validated configuration.
    /// Fails fast on configuration errors; nothing here is defaulted.
    pub fn new(config: &ShipConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mass_kg = config.mass_kg();
        let inertia = config
            .inertia
            .unwrap_or_else(|| InertiaTensor::from_geometry(mass_kg, &config.geometry));
        Ok(Self {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            momentum: DVec2::ZERO,
            orientation: 0.0,
            angular_velocity: 0.0,
            mass_kg,
            inertia,
            yaw_radius_m: config.geometry.yaw_radius_m(),
            thrust: config.thrust,
            gamma: 1.0,
        })
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

/// Cross-tick state of the coupled flight controller: the previous tick's
/// smoothed accelerations, needed for jerk limiting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CoupledControl {
    pub prev_forward_accel: f64,
    pub prev_lateral_accel: f64,
}

/// Cross-tick state of the flight-mode orchestrator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PilotAssist {
    /// Persistent Coupled/Decoupled selection.
    pub mode: AssistMode,
    /// Autopilot overlay flag (idle station-keeping jitter).
    pub autopilot: bool,
    /// Current autopilot perturbation (command units).
    pub perturbation: DVec2,
    pub perturbation_torque: f64,
    /// Seconds until the perturbation is re-rolled.
    pub reroll_timer: f64,
    /// Remaining boost time; boost is active while positive.
    pub boost_timer: f64,
    /// Remaining boost cooldown; boost requests are ignored while positive.
    pub boost_cooldown: f64,
    /// Previous yaw command, for Decoupled-mode yaw jerk limiting.
    pub prev_yaw_command: f64,
}

/// Follow-camera position, derived from the ship position after each step.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FlightCamera {
    pub position: DVec2,
}

/// The orchestrator's output for the current tick: the actuator command the
/// integrator will apply, plus the telemetry snapshot for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistOutput {
    pub command: crate::control::ActuatorCommand,
    pub telemetry: crate::state::ControlTelemetry,
}
