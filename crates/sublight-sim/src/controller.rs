//! Coupled flight control law.
//!
//! Translates desired maneuver intent (throttle, strafe, turn) into an
//! actuator command that respects the ship's acceleration and torque
//! budgets, the configured slip-angle behavior, and jerk limits. This is
//! what makes Coupled mode feel like assisted flight rather than raw
//! thruster mixing.
//!
//! There is no speed limiter and no traction modeling here: the sub-light
//! guarantee lives in the momentum formulation, and vacuum flight has no
//! ground contact to lose.

use sublight_core::components::{CoupledControl, ShipDynamics};
use sublight_core::config::{HandlingProfile, SimEnvironment};
use sublight_core::constants::{ACTIVE_TURN_THRESHOLD, ALIGN_TURNING_SCALE, KN_TO_N, KNM_TO_NM};
use sublight_core::control::{ActuatorCommand, ControlIntent};
use sublight_core::types::slip_angle;

/// Command plus the control-law internals the HUD wants to see.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoupledOutput {
    pub command: ActuatorCommand,
    pub slip_deg: f64,
    pub slip_target_deg: f64,
    pub forward_accel_mps2: f64,
    pub lateral_accel_mps2: f64,
    pub forward_jerk_clamped: bool,
    pub lateral_jerk_clamped: bool,
}

/// Run the control law for one tick. `control` carries the jerk history
/// between calls and is owned by exactly one ship.
pub fn update(
    dynamics: &ShipDynamics,
    control: &mut CoupledControl,
    profile: &HandlingProfile,
    intent: &ControlIntent,
    env: &SimEnvironment,
) -> CoupledOutput {
    let dt = env.dt_sec;

    let forward_cap = accel_from_budget(dynamics.thrust.forward_kn, dynamics.mass_kg);
    let backward_cap = accel_from_budget(dynamics.thrust.backward_kn, dynamics.mass_kg);
    let lateral_cap = accel_from_budget(dynamics.thrust.lateral_kn, dynamics.mass_kg);
    let yaw_cap = yaw_accel_cap(dynamics, env);

    let throttle = intent.thrust_forward.clamp(-1.0, 1.0);
    let strafe = intent.thrust_right.clamp(-1.0, 1.0);
    let turn = intent.torque.clamp(-1.0, 1.0);

    let beta = slip_angle(dynamics.velocity, dynamics.orientation);
    let beta_target = solve_slip_target(strafe, turn, profile);
    let slip_error = beta_target - beta;

    // Lateral channel: manual strafe + turn assist + slip correction,
    // capped and jerk-limited as one sum.
    let manual_lat = strafe * lateral_cap;
    let turn_assist = turn * lateral_cap * profile.turn_assist;
    let correction = slip_correction(slip_error, profile, lateral_cap);
    let lat_target = (manual_lat + turn_assist + correction).clamp(-lateral_cap, lateral_cap);
    let (lat_accel, lat_clamped) = apply_jerk(
        control.prev_lateral_accel,
        lat_target,
        profile.jerk.lateral_mps3,
        dt,
    );
    control.prev_lateral_accel = lat_accel;
    let thrust_right = if lateral_cap > 0.0 {
        (lat_accel / lateral_cap).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    // Forward channel: the coupled authority ceiling is an assist
    // conservatism knob, distinct from the raw thrust cap.
    let fwd_target = solve_forward_accel(throttle, forward_cap, backward_cap, profile);
    let (fwd_accel, fwd_clamped) = apply_jerk(
        control.prev_forward_accel,
        fwd_target,
        profile.jerk.forward_mps3,
        dt,
    );
    control.prev_forward_accel = fwd_accel;
    let fwd_divisor = if fwd_accel >= 0.0 {
        forward_cap
    } else {
        backward_cap
    };
    let thrust_forward = if fwd_divisor > 0.0 {
        (fwd_accel / fwd_divisor).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    let torque = solve_yaw_command(turn, slip_error, dynamics.angular_velocity, yaw_cap, profile);

    CoupledOutput {
        command: ActuatorCommand {
            thrust_forward,
            thrust_right,
            torque,
        },
        slip_deg: beta.to_degrees(),
        slip_target_deg: beta_target.to_degrees(),
        forward_accel_mps2: fwd_accel,
        lateral_accel_mps2: lat_accel,
        forward_jerk_clamped: fwd_clamped,
        lateral_jerk_clamped: lat_clamped,
    }
}

/// Target slip angle from strafe and turn intent, clamped to the slip
/// limit, with a soft dead-zone below the threshold to avoid micro-jitter
/// at near-zero input.
fn solve_slip_target(strafe: f64, turn: f64, profile: &HandlingProfile) -> f64 {
    let slip_limit = profile.slip_limit_deg.to_radians();
    let slip_threshold = profile.slip_threshold_deg.to_radians();

    let input_mix = strafe + profile.nose_follow_input * turn;
    let mut target = profile.bias * slip_limit
        + profile.responsiveness * input_mix * profile.slip_target_max_deg.to_radians();
    target = target.clamp(-slip_limit, slip_limit);

    if target.abs() < slip_threshold && slip_threshold > 0.0 {
        let ratio = target.abs() / slip_threshold;
        target *= 0.5 + 0.5 * ratio;
    }
    target
}

/// Convert a slip error into a lateral acceleration, bounded by the
/// profile's lateral authority share of the cap.
fn slip_correction(slip_error: f64, profile: &HandlingProfile, lateral_cap: f64) -> f64 {
    if lateral_cap <= 0.0 {
        return 0.0;
    }
    let slip_limit = profile.slip_limit_deg.to_radians();
    let normalized = (slip_error / slip_limit) * profile.slip_correction_gain;
    let max_correction = lateral_cap * profile.lat_authority;
    (normalized * max_correction).clamp(-max_correction, max_correction)
}

fn solve_forward_accel(
    throttle: f64,
    forward_cap: f64,
    backward_cap: f64,
    profile: &HandlingProfile,
) -> f64 {
    if throttle >= 0.0 {
        let cap = forward_cap * profile.cap_main_coupled;
        (throttle * forward_cap).clamp(-cap, cap)
    } else {
        let cap = backward_cap * profile.cap_main_coupled;
        (throttle * backward_cap).clamp(-cap, cap)
    }
}

/// Yaw command: manual authority, always-on damping, an anticipation lead
/// that only engages while actively turning, and a slip-alignment nudge
/// that is attenuated while the pilot is commanding a turn.
fn solve_yaw_command(
    turn: f64,
    slip_error: f64,
    angular_velocity: f64,
    yaw_cap: f64,
    profile: &HandlingProfile,
) -> f64 {
    if yaw_cap <= 0.0 {
        return 0.0;
    }
    let turning = turn.abs() >= ACTIVE_TURN_THRESHOLD;

    let manual = profile.turn_authority * turn;
    let lead = if turning {
        profile.anticipation_gain * angular_velocity
    } else {
        0.0
    };
    let damping = -profile.stab_damping * angular_velocity;
    let align_scale = if turning { ALIGN_TURNING_SCALE } else { 1.0 };
    let align = profile.nose_align_gain * align_scale * slip_error;
    let bias_term = profile.bias * 0.1;

    let alpha_cmd = manual + lead + profile.stab_gain * (damping + align) + bias_term;
    (alpha_cmd / yaw_cap).clamp(-1.0, 1.0)
}

/// Linear acceleration capacity from a thrust budget (m/s²).
pub fn accel_from_budget(thrust_kn: f64, mass_kg: f64) -> f64 {
    if thrust_kn <= 0.0 || mass_kg <= 0.0 {
        return 0.0;
    }
    thrust_kn * KN_TO_N / mass_kg
}

/// Angular acceleration capacity from the yaw torque budget (rad/s²).
pub fn yaw_accel_cap(dynamics: &ShipDynamics, env: &SimEnvironment) -> f64 {
    let moment = dynamics.inertia.izz * env.inertia_scale;
    if dynamics.thrust.yaw_knm <= 0.0 || moment <= 0.0 {
        return 0.0;
    }
    dynamics.thrust.yaw_knm * KNM_TO_NM / moment
}

/// Rate-limit the change from the previous commanded value.
/// Returns the new value and whether the limiter clipped.
pub fn apply_jerk(prev: f64, target: f64, jerk_limit: f64, dt: f64) -> (f64, bool) {
    if jerk_limit <= 0.0 || dt <= 0.0 {
        return (target, false);
    }
    let max_delta = jerk_limit * dt;
    let delta = target - prev;
    if delta > max_delta {
        (prev + max_delta, true)
    } else if delta < -max_delta {
        (prev - max_delta, true)
    } else {
        (target, false)
    }
}
