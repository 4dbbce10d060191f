//! Rigid-body integration system.
//!
//! Advances every ship one tick: actuator command → body forces → momentum
//! → velocity (derived, sub-light by construction) → pose. The only
//! explicit clamp in the whole pipeline is on angular velocity, because
//! rotation has no momentum-based formulation in this model and the rim of
//! a fast-spinning hull must stay below c.

use hecs::World;

use sublight_core::components::{AssistOutput, FlightCamera, ShipDynamics};
use sublight_core::config::SimEnvironment;
use sublight_core::constants::{KNM_TO_NM, KN_TO_N, RIM_BETA_MAX};
use sublight_core::control::ActuatorCommand;
use sublight_core::relativity::{gamma_from_speed, update_momentum, velocity_from_momentum};
use sublight_core::types::{heading_vec, right_vec, wrap_angle};

/// Integrate all ships against their current actuator command.
pub fn run(world: &mut World, env: &SimEnvironment) {
    for (_entity, (dynamics, output)) in world.query_mut::<(&mut ShipDynamics, &AssistOutput)>() {
        step(dynamics, output.command, env);
    }
}

/// Advance one ship's state by one tick.
///
/// Malformed command components are clamped at the boundary before use —
/// defense in depth, not validation; the control law has already bounded
/// them.
pub fn step(dynamics: &mut ShipDynamics, command: ActuatorCommand, env: &SimEnvironment) {
    let dt = env.dt_sec;
    let c = env.c_mps;
    let command = command.clamped();

    // Body-frame accelerations from the capability envelope. The main
    // drive and retro thrusters are asymmetric.
    let forward_budget_kn = if command.thrust_forward >= 0.0 {
        dynamics.thrust.forward_kn
    } else {
        dynamics.thrust.backward_kn
    };
    let forward_accel = command.thrust_forward * forward_budget_kn * KN_TO_N / dynamics.mass_kg;
    let lateral_accel = command.thrust_right * dynamics.thrust.lateral_kn * KN_TO_N / dynamics.mass_kg;

    let world_accel = heading_vec(dynamics.orientation) * forward_accel
        + right_vec(dynamics.orientation) * lateral_accel;

    // F = dp/dt with p = γmv: integrate momentum, then derive velocity.
    let force = world_accel * dynamics.mass_kg;
    dynamics.momentum = update_momentum(dynamics.momentum, force, dt);
    let (velocity, gamma) = velocity_from_momentum(dynamics.momentum, dynamics.mass_kg, c);
    dynamics.velocity = velocity;
    dynamics.gamma = gamma;

    // Pose advances with the pre-update angular velocity.
    dynamics.orientation = wrap_angle(dynamics.orientation + dynamics.angular_velocity * dt);

    // Yaw: relativistic increase of rotational inertia uses the rim-speed
    // gamma, not the linear one — spinning extremities approach c
    // independently of translational speed.
    let torque_nm = command.torque * dynamics.thrust.yaw_knm * KNM_TO_NM;
    let gamma_rot = if dynamics.yaw_radius_m > 0.0 {
        gamma_from_speed(
            dynamics.angular_velocity.abs() * dynamics.yaw_radius_m,
            c,
        )
    } else {
        gamma
    };
    let moment = dynamics.inertia.izz * env.inertia_scale * gamma_rot;
    let angular_accel = if moment > 0.0 { torque_nm / moment } else { 0.0 };
    dynamics.angular_velocity += angular_accel * dt;

    // Numerical guard: keep the rim sub-light.
    if dynamics.yaw_radius_m > 0.0 {
        let max_omega = RIM_BETA_MAX * c / dynamics.yaw_radius_m;
        dynamics.angular_velocity = dynamics.angular_velocity.clamp(-max_omega, max_omega);
    }

    dynamics.position += dynamics.velocity * dt;
}

/// Snap follow cameras to the new ship positions. A pure function of the
/// post-step state, run after integration.
pub fn update_cameras(world: &mut World) {
    for (_entity, (dynamics, camera)) in world.query_mut::<(&ShipDynamics, &mut FlightCamera)>() {
        camera.position = dynamics.position;
    }
}
