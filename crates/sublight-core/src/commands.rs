//! Commands accepted by the simulation engine.

use serde::{Deserialize, Serialize};

use crate::config::SimEnvironment;
use crate::control::ControlIntent;

/// A command queued for processing at the next tick boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimCommand {
    /// Replace a ship's control intent. The intent persists until the next
    /// `SetIntent` (held keys keep their axes), except for toggle edges,
    /// which are consumed by the orchestrator on the tick they arrive.
    SetIntent { ship_id: u32, intent: ControlIntent },
    /// Replace the per-tick environment. Rejected (logged, previous value
    /// kept) if the new environment fails validation.
    SetEnvironment { env: SimEnvironment },
    Pause,
    Resume,
}
