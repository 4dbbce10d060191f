//! Error taxonomy for the flight model.
//!
//! Only configuration is allowed to fail. Per-tick control inputs are
//! inherently noisy and are recovered by boundary clamping, never
//! propagated as errors; the tick pipeline itself is exception-free.

use thiserror::Error;

/// A configuration value that makes the kinematics formulas undefined or
/// falls outside its documented range. Raised at construction time, never
/// mid-tick.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("ship mass must be positive, got {0} t")]
    NonPositiveMass(f64),

    #[error("universe speed limit must be positive, got {0} m/s")]
    NonPositiveSpeedLimit(f64),

    #[error("simulation timestep must be positive, got {0} s")]
    NonPositiveTimestep(f64),

    #[error("rotational inertia scale must be positive, got {0}")]
    NonPositiveInertiaScale(f64),

    #[error("ship geometry dimensions must be positive ({length_m} x {width_m} m)")]
    DegenerateGeometry { length_m: f64, width_m: f64 },

    #[error("{field} = {value} outside allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("brake boost g-target {boost} must not be below sustained g-target {sustain}")]
    BoostBelowSustain { sustain: f64, boost: f64 },
}
