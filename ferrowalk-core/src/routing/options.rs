use serde::{Deserialize, Serialize};

use crate::WALKING_SPEED_KMH;

/// Parameters shared by every query of a batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Speed of the walking legs, km/h
    pub walking_speed_kmh: f64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            walking_speed_kmh: WALKING_SPEED_KMH,
        }
    }
}

impl SolverOptions {
    pub fn with_walking_speed(walking_speed_kmh: f64) -> Self {
        Self { walking_speed_kmh }
    }
}
