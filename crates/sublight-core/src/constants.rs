//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the default tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Default universe speed limit (m/s).
pub const DEFAULT_C_MPS: f64 = 10_000.0;

// --- Unit conversions ---

/// Kilonewtons to newtons.
pub const KN_TO_N: f64 = 1_000.0;

/// Kilonewton-meters to newton-meters.
pub const KNM_TO_NM: f64 = 1_000.0;

/// Standard gravity (m/s²), used for brake g-targets.
pub const STANDARD_GRAVITY: f64 = 9.80665;

// --- Relativistic rotation guard ---

/// Maximum allowed rim speed as a fraction of c. Rotation has no
/// momentum-based formulation in this model, so the angular velocity
/// magnitude is explicitly clamped to keep the rim sub-light.
pub const RIM_BETA_MAX: f64 = 0.999999;

// --- Braking ---

/// Speed below which the translational brake solve is skipped and the
/// ship counts as stopped (m/s).
pub const BRAKE_SPEED_EPSILON: f64 = 0.3;

/// Angular velocity below which the rotational brake solve is skipped
/// (rad/s).
pub const BRAKE_ROT_EPSILON: f64 = 0.02;

// --- Pilot assist ---

/// Manual input magnitude above which autopilot is cancelled.
pub const MANUAL_INPUT_EPSILON: f64 = 0.05;

/// Turn input magnitude above which the pilot counts as actively turning
/// (gates the anticipation lead and attenuates nose alignment).
pub const ACTIVE_TURN_THRESHOLD: f64 = 0.2;

/// Attenuation applied to the nose-alignment term while actively turning.
pub const ALIGN_TURNING_SCALE: f64 = 0.2;

/// v/c ratio above which the HUD "relativity active" flag is raised.
pub const RELATIVITY_HUD_THRESHOLD: f64 = 0.5;

// --- Autopilot idle perturbations ---

/// Seconds between autopilot perturbation re-rolls.
pub const AUTOPILOT_REROLL_SECS: f64 = 1.0;

/// Peak magnitude of the autopilot linear perturbation (command units).
pub const AUTOPILOT_LINEAR_JITTER: f64 = 0.3;

/// Peak magnitude of the autopilot torque perturbation (command units).
pub const AUTOPILOT_TORQUE_JITTER: f64 = 0.2;
