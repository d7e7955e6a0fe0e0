//! Game between two teams: cup counts, possession, shot log and status.

use crate::models::player::PlayerId;
use crate::models::shot::Shot;
use crate::models::team::{Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for a game.
pub type GameId = Uuid;

/// Cups each team starts with unless configured otherwise.
pub const DEFAULT_CUPS_PER_TEAM: u32 = 6;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
    Paused,
    Finished,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GameStatus::NotStarted => "not started",
            GameStatus::InProgress => "in progress",
            GameStatus::Paused => "paused",
            GameStatus::Finished => "finished",
        };
        f.write_str(s)
    }
}

/// Per-player counters for this game only.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerTally {
    pub cups_hit: u32,
    pub shots_taken: u32,
    pub beer_bongs: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub team_1: TeamId,
    pub team_2: TeamId,
    pub starting_cups: u32,
    pub team_1_cups: u32,
    pub team_2_cups: u32,
    /// Authoritative: the team whose players may shoot next.
    pub team_at_bat: TeamId,
    /// Advisory only. Either player of `team_at_bat` may actually shoot.
    pub suggested_shooter: Option<PlayerId>,
    /// Append-only.
    pub shots: Vec<Shot>,
    pub status: GameStatus,
    /// Set only when `status` is `Finished`.
    pub winner: Option<TeamId>,
    pub team_1_beer_bongs: u32,
    pub team_2_beer_bongs: u32,
    pub tallies: HashMap<PlayerId, PlayerTally>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl Game {
    /// New game; team 1 is at bat first with its first player suggested.
    pub fn new(team_1: &Team, team_2: &Team, starting_cups: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_1: team_1.id,
            team_2: team_2.id,
            starting_cups,
            team_1_cups: starting_cups,
            team_2_cups: starting_cups,
            team_at_bat: team_1.id,
            suggested_shooter: Some(team_1.player_1.id),
            shots: Vec::new(),
            status: GameStatus::NotStarted,
            winner: None,
            team_1_beer_bongs: 0,
            team_2_beer_bongs: 0,
            tallies: HashMap::new(),
            notes: None,
            created_at: Utc::now(),
            started_at: None,
            ended_at: None,
        }
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.team_1 == team || self.team_2 == team
    }

    /// The other team in this game, or `None` if `team` is not playing.
    pub fn opponent_of(&self, team: TeamId) -> Option<TeamId> {
        if team == self.team_1 {
            Some(self.team_2)
        } else if team == self.team_2 {
            Some(self.team_1)
        } else {
            None
        }
    }

    /// Remove cups from `team`'s rack, never below zero. Returns cups left.
    pub fn remove_cups(&mut self, team: TeamId, cups: u32) -> u32 {
        let remaining = if team == self.team_1 {
            &mut self.team_1_cups
        } else {
            &mut self.team_2_cups
        };
        *remaining = remaining.saturating_sub(cups);
        *remaining
    }

    pub fn beer_bongs(&self, team: TeamId) -> u32 {
        if team == self.team_1 {
            self.team_1_beer_bongs
        } else {
            self.team_2_beer_bongs
        }
    }

    pub fn tally(&self, player: PlayerId) -> PlayerTally {
        self.tallies.get(&player).copied().unwrap_or_default()
    }

    pub fn tally_mut(&mut self, player: PlayerId) -> &mut PlayerTally {
        self.tallies.entry(player).or_default()
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Minutes since start (or between start and end once finished).
    pub fn duration_minutes(&self) -> Option<f64> {
        let start = self.started_at?;
        let end = self.ended_at.unwrap_or_else(Utc::now);
        Some((end - start).num_seconds() as f64 / 60.0)
    }
}
