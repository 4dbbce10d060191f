//! Braking solver.
//!
//! Drives body-frame velocity and angular velocity toward zero within the
//! profile's time constants, using thrust and torque caps reduced by the
//! same relativistic factors the integrator exhibits: γ³ along the
//! direction of motion, γ transverse. The deceleration ceiling comes from
//! the profile's g-targets; the boost sub-mode raises it for a limited
//! duration and then enters a cooldown.

use sublight_core::components::{PilotAssist, ShipDynamics};
use sublight_core::config::{HandlingProfile, SimEnvironment};
use sublight_core::constants::{
    BRAKE_ROT_EPSILON, BRAKE_SPEED_EPSILON, KNM_TO_NM, STANDARD_GRAVITY,
};
use sublight_core::control::ActuatorCommand;
use sublight_core::relativity::gamma_from_speed;
use sublight_core::types::{heading_vec, right_vec};

use crate::controller::accel_from_budget;

/// Result of one braking solve.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrakeSolution {
    pub command: ActuatorCommand,
    /// Both speed and spin are below their stop epsilons.
    pub finished: bool,
    /// The boost sub-mode is currently raising the deceleration ceiling.
    pub boost_active: bool,
    /// The deceleration ceiling in effect this tick (m/s²).
    pub decel_cap_mps2: f64,
}

/// Compute a braking command for this tick.
///
/// Boost timing lives on the orchestrator state: a request is honored only
/// when neither the boost timer nor its cooldown is running; a request
/// during cooldown silently falls back to sustained-g braking.
pub fn solve(
    dynamics: &ShipDynamics,
    profile: &HandlingProfile,
    assist: &mut PilotAssist,
    boost_requested: bool,
    env: &SimEnvironment,
) -> BrakeSolution {
    let brake = &profile.brake;

    if boost_requested && assist.boost_timer <= 0.0 && assist.boost_cooldown <= 0.0 {
        assist.boost_timer = brake.boost_duration_s;
        log::debug!("brake boost engaged for {:.1}s", brake.boost_duration_s);
    }
    let boost_active = assist.boost_timer > 0.0;
    let g_target = if boost_active {
        brake.g_boost
    } else {
        brake.g_sustain
    };
    let decel_cap = g_target * STANDARD_GRAVITY;

    let speed = dynamics.speed();
    let gamma = gamma_from_speed(speed, env.c_mps);
    let gamma3 = gamma * gamma * gamma;

    // Thrust caps as the integrator will actually realize them.
    let forward_cap = accel_from_budget(dynamics.thrust.forward_kn, dynamics.mass_kg) / gamma3;
    let backward_cap = accel_from_budget(dynamics.thrust.backward_kn, dynamics.mass_kg) / gamma3;
    let lateral_cap = accel_from_budget(dynamics.thrust.lateral_kn, dynamics.mass_kg) / gamma;

    let mut command = ActuatorCommand::default();

    // Translational solve. Skipped outright near zero speed: the time
    // constants would otherwise divide a vanishing quantity.
    if speed >= BRAKE_SPEED_EPSILON {
        let forward_speed = dynamics.velocity.dot(heading_vec(dynamics.orientation));
        let right_speed = dynamics.velocity.dot(right_vec(dynamics.orientation));

        let desired_forward = -forward_speed / brake.stop_time_s;
        let desired_right = -right_speed / brake.stop_time_s;

        command.thrust_forward = normalize_accel(
            bound(desired_forward, forward_cap.min(decel_cap), backward_cap.min(decel_cap)),
            forward_cap,
            backward_cap,
        );
        command.thrust_right = normalize_accel(
            bound(desired_right, lateral_cap.min(decel_cap), lateral_cap.min(decel_cap)),
            lateral_cap,
            lateral_cap,
        );
    }

    // Rotational solve, skipped near zero spin for the same reason.
    if dynamics.angular_velocity.abs() >= BRAKE_ROT_EPSILON {
        let gamma_rim = gamma_from_speed(
            dynamics.angular_velocity.abs() * dynamics.yaw_radius_m,
            env.c_mps,
        );
        let moment = dynamics.inertia.izz * env.inertia_scale * gamma_rim;
        let yaw_cap = if dynamics.thrust.yaw_knm > 0.0 && moment > 0.0 {
            dynamics.thrust.yaw_knm * KNM_TO_NM / moment
        } else {
            0.0
        };
        if yaw_cap > 0.0 {
            let desired_alpha = -dynamics.angular_velocity / brake.rot_stop_time_s;
            command.torque = (desired_alpha / yaw_cap).clamp(-1.0, 1.0);
        }
    }

    let finished =
        speed < BRAKE_SPEED_EPSILON && dynamics.angular_velocity.abs() < BRAKE_ROT_EPSILON;
    if finished {
        log::trace!("braking complete at {speed:.3} m/s");
    }

    BrakeSolution {
        command,
        finished,
        boost_active,
        decel_cap_mps2: decel_cap,
    }
}

/// Clamp a desired acceleration to asymmetric positive/negative caps.
fn bound(accel: f64, pos_cap: f64, neg_cap: f64) -> f64 {
    accel.clamp(-neg_cap.max(0.0), pos_cap.max(0.0))
}

/// Normalize an achievable acceleration back into command space against
/// the cap for its sign. A zero cap forces a zero command.
fn normalize_accel(accel: f64, pos_cap: f64, neg_cap: f64) -> f64 {
    if accel >= 0.0 {
        if pos_cap <= 0.0 {
            return 0.0;
        }
        (accel / pos_cap).clamp(-1.0, 1.0)
    } else {
        if neg_cap <= 0.0 {
            return 0.0;
        }
        (accel / neg_cap).clamp(-1.0, 1.0)
    }
}
