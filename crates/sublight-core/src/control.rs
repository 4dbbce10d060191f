//! Pilot intent and actuator commands.

use serde::{Deserialize, Serialize};

/// Normalized control intent for one tick, as produced by the (external)
/// input-mapping subsystem. Axes are in [−1, 1]; the toggle fields are
/// edge events, consumed exactly once by the orchestrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlIntent {
    pub thrust_forward: f64,
    pub thrust_right: f64,
    pub torque: f64,
    pub brake: bool,
    pub boost: bool,
    /// Edge: flip the Coupled ⇄ Decoupled selection.
    pub toggle_coupled: bool,
    /// Edge: flip the autopilot overlay.
    pub toggle_autopilot: bool,
}

impl ControlIntent {
    /// True when any manual axis exceeds the autopilot-cancel deadband.
    pub fn has_manual_input(&self) -> bool {
        let eps = crate::constants::MANUAL_INPUT_EPSILON;
        self.thrust_forward.abs() > eps
            || self.thrust_right.abs() > eps
            || self.torque.abs() > eps
            || self.brake
            || self.boost
    }
}

/// Final per-tick actuator command: fraction of the available thrust and
/// torque budget on each axis, each in [−1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActuatorCommand {
    pub thrust_forward: f64,
    pub thrust_right: f64,
    pub torque: f64,
}

impl ActuatorCommand {
    /// Boundary clamp on every axis. The control law is expected to have
    /// already bounded its outputs; the integrator applies this once more
    /// as defense in depth, not as validation.
    pub fn clamped(self) -> Self {
        Self {
            thrust_forward: self.thrust_forward.clamp(-1.0, 1.0),
            thrust_right: self.thrust_right.clamp(-1.0, 1.0),
            torque: self.torque.clamp(-1.0, 1.0),
        }
    }
}
