//! Tests for the kinematics helpers and configuration validation.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{HandlingProfile, ShipConfig, ShipGeometry, SimEnvironment, ThrustBudget};
use crate::enums::AssistPreset;
use crate::errors::ConfigError;
use crate::relativity::{
    gamma_from_momentum, gamma_from_speed, update_momentum, velocity_from_momentum,
};

fn test_ship() -> ShipConfig {
    ShipConfig {
        name: "test hauler".to_string(),
        mass_t: 85.0,
        geometry: ShipGeometry {
            length_m: 30.0,
            width_m: 20.0,
        },
        thrust: ThrustBudget {
            forward_kn: 1020.0,
            backward_kn: 510.0,
            lateral_kn: 340.0,
            yaw_knm: 5737.5,
        },
        inertia: None,
        profile: HandlingProfile::default(),
    }
}

// ---- Relativistic kinematics ----

#[test]
fn test_sublight_invariant_randomized_momenta() {
    let mass_kg = 50_000.0;
    let c = 1_000.0;
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..2_000 {
        // Magnitudes spanning crawl speed to ultra-relativistic (10^4·m·c).
        let exponent: f64 = rng.gen_range(-3.0..4.0);
        let magnitude = 10f64.powf(exponent) * mass_kg * c;
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let p = DVec2::from_angle(angle) * magnitude;

        let (v, gamma) = velocity_from_momentum(p, mass_kg, c);
        assert!(
            v.length() < c,
            "speed {} reached c for |p| = {}",
            v.length(),
            magnitude
        );
        assert!(gamma >= 1.0);
    }

    // The documented extreme: |p| = 10^4·m·c exactly.
    let p = DVec2::new(1.0e4 * mass_kg * c, 0.0);
    let (v, gamma) = velocity_from_momentum(p, mass_kg, c);
    assert!(v.length() < c);
    assert!(gamma > 9_999.0);
}

#[test]
fn test_momentum_velocity_round_trip_under_zero_force() {
    let mass_kg = 85_000.0;
    let c = 10_000.0;
    let mut p = DVec2::new(3.2e8, -1.1e8);
    let (v0, g0) = velocity_from_momentum(p, mass_kg, c);

    // Repeated zero-force integration must be exactly idempotent.
    for _ in 0..1_000 {
        p = update_momentum(p, DVec2::ZERO, 1.0 / 60.0);
        let (v, g) = velocity_from_momentum(p, mass_kg, c);
        assert_eq!(v, v0);
        assert_eq!(g, g0);
    }
}

#[test]
fn test_gamma_reference_points() {
    let mass_kg = 50_000.0;
    let c = 1_000.0;

    // p = m·c => γ = sqrt(2), v = c/sqrt(2).
    let p = DVec2::new(mass_kg * c, 0.0);
    let (v, gamma) = velocity_from_momentum(p, mass_kg, c);
    assert!((gamma - 2f64.sqrt()).abs() < 1e-12);
    assert!((v.x - c / 2f64.sqrt()).abs() < 1e-9);
    assert!((gamma_from_momentum(p, mass_kg, c) - gamma).abs() < 1e-15);

    // Zero momentum => rest.
    let (v, gamma) = velocity_from_momentum(DVec2::ZERO, mass_kg, c);
    assert_eq!(v, DVec2::ZERO);
    assert_eq!(gamma, 1.0);

    // Speed-based gamma at v = 0.6c is 1.25.
    assert!((gamma_from_speed(600.0, c) - 1.25).abs() < 1e-12);
}

// ---- Configuration validation ----

#[test]
fn test_config_rejects_non_positive_mass() {
    let mut config = test_ship();
    config.mass_t = 0.0;
    assert_eq!(config.validate(), Err(ConfigError::NonPositiveMass(0.0)));
    config.mass_t = -3.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonPositiveMass(_))
    ));
}

#[test]
fn test_environment_rejects_degenerate_values() {
    let mut env = SimEnvironment::default();
    assert!(env.validate().is_ok());

    env.c_mps = 0.0;
    assert_eq!(env.validate(), Err(ConfigError::NonPositiveSpeedLimit(0.0)));

    env = SimEnvironment {
        dt_sec: -1.0,
        ..SimEnvironment::default()
    };
    assert!(matches!(
        env.validate(),
        Err(ConfigError::NonPositiveTimestep(_))
    ));

    env = SimEnvironment {
        inertia_scale: 0.0,
        ..SimEnvironment::default()
    };
    assert!(matches!(
        env.validate(),
        Err(ConfigError::NonPositiveInertiaScale(_))
    ));
}

#[test]
fn test_profile_rejects_out_of_range_fields() {
    let mut profile = HandlingProfile::default();
    profile.slip_limit_deg = 55.0;
    match profile.validate() {
        Err(ConfigError::OutOfRange { field, .. }) => assert_eq!(field, "slip_limit_deg"),
        other => panic!("expected OutOfRange, got {other:?}"),
    }

    let mut profile = HandlingProfile::default();
    profile.brake.g_boost = 2.0;
    profile.brake.g_sustain = 4.0;
    assert!(matches!(
        profile.validate(),
        Err(ConfigError::BoostBelowSustain { .. })
    ));

    let mut profile = HandlingProfile::default();
    profile.stab_damping = f64::NAN;
    assert!(profile.validate().is_err());
}

#[test]
fn test_all_presets_validate() {
    for preset in [
        AssistPreset::Balanced,
        AssistPreset::Sport,
        AssistPreset::Rally,
        AssistPreset::Muscle,
        AssistPreset::F1,
        AssistPreset::Industrial,
        AssistPreset::Truck,
        AssistPreset::Warship,
        AssistPreset::Liner,
        AssistPreset::Recon,
    ] {
        let profile = preset.profile();
        profile
            .validate()
            .unwrap_or_else(|e| panic!("preset {preset:?} invalid: {e}"));
        assert_eq!(profile.name, format!("{preset:?}"));
    }
}

#[test]
fn test_derived_inertia_and_yaw_radius() {
    let config = test_ship();
    let dynamics = crate::components::ShipDynamics::new(&config).unwrap();
    // Rod approximation: Izz = 0.15 · m · L².
    assert!((dynamics.inertia.izz - 0.15 * 85_000.0 * 900.0).abs() < 1e-6);
    assert_eq!(dynamics.yaw_radius_m, 15.0);
    assert_eq!(dynamics.gamma, 1.0);
    assert_eq!(dynamics.velocity, DVec2::ZERO);
}

#[test]
fn test_ship_config_round_trips_through_json() {
    let config = test_ship();
    let json = serde_json::to_string(&config).unwrap();
    let back: ShipConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
