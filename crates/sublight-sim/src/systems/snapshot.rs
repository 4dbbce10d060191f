//! Snapshot system — builds the per-tick state view handed to the
//! hosting harness (rendering, collision, HUD).

use hecs::World;

use sublight_core::components::{AssistOutput, FlightCamera, ShipDynamics, ShipLabel};
use sublight_core::state::{ShipView, SimSnapshot};
use sublight_core::types::SimTime;

/// Build the complete snapshot for the current tick. Ships are ordered by
/// id so snapshots serialize deterministically.
pub fn build_snapshot(world: &World, time: &SimTime) -> SimSnapshot {
    let mut ships: Vec<ShipView> = world
        .query::<(&ShipLabel, &ShipDynamics, &FlightCamera, &AssistOutput)>()
        .iter()
        .map(|(_entity, (label, dynamics, camera, output))| ShipView {
            id: label.id,
            name: label.name.clone(),
            position: dynamics.position,
            velocity: dynamics.velocity,
            speed: dynamics.speed(),
            momentum: dynamics.momentum,
            orientation: dynamics.orientation,
            angular_velocity: dynamics.angular_velocity,
            gamma: dynamics.gamma,
            camera: camera.position,
            command: output.command,
            telemetry: output.telemetry.clone(),
        })
        .collect();
    ships.sort_by_key(|ship| ship.id);

    SimSnapshot { time: *time, ships }
}
