//! Player and per-game player statistics.

use crate::models::game::GameId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in shots, teams and lookups).
pub type PlayerId = Uuid;

/// One player's numbers for a single finished game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameStats {
    pub game_id: GameId,
    pub cups_hit: u32,
    pub shots_taken: u32,
    pub beer_bongs: u32,
    pub date: DateTime<Utc>,
}

/// A player. Totals are cumulative over the whole tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub total_shots_taken: u32,
    pub total_cups_hit: u32,
    /// Punishment drinks.
    pub total_beer_bongs: u32,
    pub game_stats: Vec<PlayerGameStats>,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Create a new player with the given name. Totals start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            total_shots_taken: 0,
            total_cups_hit: 0,
            total_beer_bongs: 0,
            game_stats: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn record_shot(&mut self) {
        self.total_shots_taken += 1;
    }

    pub fn credit_cups(&mut self, cups: u32) {
        self.total_cups_hit += cups;
    }

    pub fn record_beer_bong(&mut self) {
        self.total_beer_bongs += 1;
    }
}
