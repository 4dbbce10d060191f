//! Per-tick systems, run in a fixed order by the engine:
//! assist (mode arbitration + control law) → integrator → snapshot.

pub mod assist;
pub mod integrator;
pub mod snapshot;
