//! Ship spawning and reference configurations.

use hecs::{Entity, World};

use sublight_core::components::{
    AssistOutput, CoupledControl, FlightCamera, PilotAssist, ShipDynamics, ShipLabel,
};
use sublight_core::config::{HandlingProfile, ShipConfig, ShipGeometry, ThrustBudget};
use sublight_core::control::ControlIntent;
use sublight_core::enums::AssistPreset;
use sublight_core::errors::ConfigError;

/// Spawn a ship entity with the full component set the tick pipeline
/// expects. The configuration is validated here — a flight session never
/// starts with a degenerate ship.
pub fn spawn_ship(world: &mut World, id: u32, config: &ShipConfig) -> Result<Entity, ConfigError> {
    let dynamics = ShipDynamics::new(config)?;
    let entity = world.spawn((
        ShipLabel {
            id,
            name: config.name.clone(),
        },
        dynamics,
        config.profile.clone(),
        ControlIntent::default(),
        CoupledControl::default(),
        PilotAssist::default(),
        FlightCamera::default(),
        AssistOutput::default(),
    ));
    log::debug!("spawned ship {id} ({})", config.name);
    Ok(entity)
}

/// A nimble single-seat fighter: strong main drive, generous RCS.
pub fn light_fighter() -> ShipConfig {
    ShipConfig {
        name: "light fighter".to_string(),
        mass_t: 25.0,
        geometry: ShipGeometry {
            length_m: 16.0,
            width_m: 12.0,
        },
        thrust: ThrustBudget {
            forward_kn: 1_500.0,
            backward_kn: 600.0,
            lateral_kn: 500.0,
            yaw_knm: 900.0,
        },
        inertia: None,
        profile: AssistPreset::Sport.profile(),
    }
}

/// A heavy hauler: sluggish, retro-poor, conservative assist tuning.
pub fn heavy_hauler() -> ShipConfig {
    ShipConfig {
        name: "heavy hauler".to_string(),
        mass_t: 400.0,
        geometry: ShipGeometry {
            length_m: 60.0,
            width_m: 30.0,
        },
        thrust: ThrustBudget {
            forward_kn: 8_800.0,
            backward_kn: 3_200.0,
            lateral_kn: 2_400.0,
            yaw_knm: 48_000.0,
        },
        inertia: None,
        profile: AssistPreset::Truck.profile(),
    }
}

/// Default custom profile on a mid-size hull, handy for tests.
pub fn test_cutter() -> ShipConfig {
    ShipConfig {
        name: "test cutter".to_string(),
        mass_t: 85.0,
        geometry: ShipGeometry {
            length_m: 30.0,
            width_m: 20.0,
        },
        thrust: ThrustBudget {
            forward_kn: 1_020.0,
            backward_kn: 510.0,
            lateral_kn: 340.0,
            yaw_knm: 5_737.5,
        },
        inertia: None,
        profile: HandlingProfile::default(),
    }
}
