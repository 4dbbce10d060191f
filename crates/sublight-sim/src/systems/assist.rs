//! Flight-mode orchestration system (pilot assist).
//!
//! Per-tick entry point of the control pipeline. Consumes toggle edges,
//! arbitrates between Brake / Coupled / Decoupled and the autopilot
//! overlay, delegates to the coupled control law or the braking solver,
//! and writes the final actuator command + telemetry for the integrator
//! and the HUD.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sublight_core::components::{AssistOutput, CoupledControl, PilotAssist, ShipDynamics};
use sublight_core::config::{HandlingProfile, SimEnvironment};
use sublight_core::constants::{
    AUTOPILOT_LINEAR_JITTER, AUTOPILOT_REROLL_SECS, AUTOPILOT_TORQUE_JITTER,
    RELATIVITY_HUD_THRESHOLD,
};
use sublight_core::control::{ActuatorCommand, ControlIntent};
use sublight_core::enums::{AssistMode, FlightMode};
use sublight_core::relativity::gamma_from_speed;
use sublight_core::state::ControlTelemetry;
use sublight_core::types::slip_angle;

use crate::brake;
use crate::controller::{self, apply_jerk, yaw_accel_cap};

/// Run the orchestrator for every ship.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, env: &SimEnvironment) {
    type Query<'a> = (
        &'a ShipDynamics,
        &'a mut ControlIntent,
        &'a mut CoupledControl,
        &'a mut PilotAssist,
        &'a HandlingProfile,
        &'a mut AssistOutput,
    );
    for (_entity, (dynamics, intent, coupled, assist, profile, output)) in
        world.query_mut::<Query<'_>>()
    {
        *output = update_ship(dynamics, intent, coupled, assist, profile, rng, env);
    }
}

fn update_ship(
    dynamics: &ShipDynamics,
    intent: &mut ControlIntent,
    coupled: &mut CoupledControl,
    assist: &mut PilotAssist,
    profile: &HandlingProfile,
    rng: &mut ChaCha8Rng,
    env: &SimEnvironment,
) -> AssistOutput {
    let dt = env.dt_sec;
    tick_boost_timers(assist, profile, dt);

    // Toggle edges are consumed exactly once.
    if intent.toggle_coupled {
        intent.toggle_coupled = false;
        assist.mode = match assist.mode {
            AssistMode::Coupled => AssistMode::Decoupled,
            AssistMode::Decoupled => AssistMode::Coupled,
        };
        log::debug!("assist mode toggled to {:?}", assist.mode);
    }
    if intent.toggle_autopilot {
        intent.toggle_autopilot = false;
        assist.autopilot = !assist.autopilot;
        log::debug!("autopilot toggled to {}", assist.autopilot);
    }

    // Manual control always wins, in the same tick.
    if assist.autopilot && intent.has_manual_input() {
        assist.autopilot = false;
    }
    let intent = *intent;

    let speed = dynamics.speed();
    let gamma = gamma_from_speed(speed, env.c_mps);
    let v_over_c = speed / env.c_mps;
    let mut telemetry = ControlTelemetry {
        autopilot: assist.autopilot,
        profile: profile.name.clone(),
        slip_deg: slip_angle(dynamics.velocity, dynamics.orientation).to_degrees(),
        gamma,
        v_over_c,
        relativity_active: v_over_c >= RELATIVITY_HUD_THRESHOLD,
        ..ControlTelemetry::default()
    };

    // Brake overrides everything for the tick it is held; autopilot is
    // forced off rather than merely suppressed.
    if intent.brake {
        assist.autopilot = false;
        telemetry.autopilot = false;
        let solution = brake::solve(dynamics, profile, assist, intent.boost, env);
        assist.prev_yaw_command = solution.command.torque;
        telemetry.mode = Some(FlightMode::Brake);
        telemetry.boost_active = solution.boost_active;
        telemetry.brake_finished = solution.finished;
        return AssistOutput {
            command: solution.command,
            telemetry,
        };
    }

    // Autopilot idle jitter: small perturbations re-rolled about once per
    // second, simulating idle drift for test scenes.
    if assist.autopilot {
        assist.reroll_timer -= dt;
        if assist.reroll_timer <= 0.0 {
            assist.perturbation.x = rng.gen_range(-1.0..=1.0) * AUTOPILOT_LINEAR_JITTER;
            assist.perturbation.y = rng.gen_range(-1.0..=1.0) * AUTOPILOT_LINEAR_JITTER;
            assist.perturbation_torque = rng.gen_range(-1.0..=1.0) * AUTOPILOT_TORQUE_JITTER;
            assist.reroll_timer = AUTOPILOT_REROLL_SECS;
        }
    } else {
        assist.perturbation = glam::DVec2::ZERO;
        assist.perturbation_torque = 0.0;
        assist.reroll_timer = 0.0;
    }

    let mut command = match assist.mode {
        AssistMode::Coupled => {
            let out = controller::update(dynamics, coupled, profile, &intent, env);
            telemetry.slip_target_deg = out.slip_target_deg;
            telemetry.forward_accel_mps2 = out.forward_accel_mps2;
            telemetry.lateral_accel_mps2 = out.lateral_accel_mps2;
            telemetry.forward_jerk_clamped = out.forward_jerk_clamped;
            telemetry.lateral_jerk_clamped = out.lateral_jerk_clamped;
            out.command
        }
        AssistMode::Decoupled => decoupled_command(dynamics, assist, profile, &intent, env),
    };

    // Perturbation rides on top of whichever command was produced.
    command.thrust_forward += assist.perturbation.y;
    command.thrust_right += assist.perturbation.x;
    command.torque += assist.perturbation_torque;
    let command = command.clamped();
    assist.prev_yaw_command = command.torque;

    telemetry.mode = Some(assist.mode.into());
    AssistOutput { command, telemetry }
}

/// Decoupled mode: manual throttle and strafe pass straight through, but
/// the yaw command alone is still jerk-limited — the one piece of assist
/// retained when decoupled.
fn decoupled_command(
    dynamics: &ShipDynamics,
    assist: &PilotAssist,
    profile: &HandlingProfile,
    intent: &ControlIntent,
    env: &SimEnvironment,
) -> ActuatorCommand {
    let yaw_cap = yaw_accel_cap(dynamics, env);
    let torque = if yaw_cap > 0.0 {
        let jerk_cmd_per_s = profile.jerk.angular_rps3 / yaw_cap;
        let (torque, _) = apply_jerk(
            assist.prev_yaw_command,
            intent.torque.clamp(-1.0, 1.0),
            jerk_cmd_per_s,
            env.dt_sec,
        );
        torque
    } else {
        0.0
    };
    ActuatorCommand {
        thrust_forward: intent.thrust_forward.clamp(-1.0, 1.0),
        thrust_right: intent.thrust_right.clamp(-1.0, 1.0),
        torque,
    }
}

/// Advance the boost duration and cooldown clocks. These run every tick,
/// whether or not the pilot is braking.
fn tick_boost_timers(assist: &mut PilotAssist, profile: &HandlingProfile, dt: f64) {
    if assist.boost_cooldown > 0.0 {
        assist.boost_cooldown = (assist.boost_cooldown - dt).max(0.0);
    }
    if assist.boost_timer > 0.0 {
        assist.boost_timer -= dt;
        if assist.boost_timer <= 0.0 {
            assist.boost_timer = 0.0;
            assist.boost_cooldown = profile.brake.boost_cooldown_s;
            log::debug!(
                "brake boost expired, cooldown {:.1}s",
                profile.brake.boost_cooldown_s
            );
        }
    }
}
