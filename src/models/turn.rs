//! Snapshot of one processed turn.

use crate::models::shot::Shot;
use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Never mutated after the engine appends it to its history.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based.
    pub turn_number: u32,
    pub team_id: TeamId,
    pub shots: [Shot; 2],
    pub cups_removed: u32,
    pub balls_back: bool,
    pub two_balls_one_cup: bool,
    pub timestamp: DateTime<Utc>,
}
