//! Team: a fixed pair of players plus its win/loss record.

use crate::models::game::GameId;
use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub player_1: Player,
    pub player_2: Player,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Ids of finished games this team has played, in the order they were recorded.
    pub games_played: Vec<GameId>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Create a team. An empty or missing name defaults to "<player 1> & <player 2>".
    pub fn new(player_1: Player, player_2: Player, name: Option<String>) -> Self {
        let name = match name.map(|n| n.trim().to_string()) {
            Some(n) if !n.is_empty() => n,
            _ => format!("{} & {}", player_1.name, player_2.name),
        };
        Self {
            id: Uuid::new_v4(),
            name,
            player_1,
            player_2,
            wins: 0,
            losses: 0,
            draws: 0,
            games_played: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Both players, player 1 first.
    pub fn players(&self) -> [&Player; 2] {
        [&self.player_1, &self.player_2]
    }

    pub fn has_player(&self, id: PlayerId) -> bool {
        self.player_1.id == id || self.player_2.id == id
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players().into_iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        if self.player_1.id == id {
            Some(&mut self.player_1)
        } else if self.player_2.id == id {
            Some(&mut self.player_2)
        } else {
            None
        }
    }

    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    pub fn add_loss(&mut self) {
        self.losses += 1;
    }
}
