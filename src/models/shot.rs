//! Shots: the caller-supplied input for one throw and the immutable record kept in the game log.

use crate::models::player::PlayerId;
use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shot type as it appears at the input boundary.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    #[default]
    Normal,
    Bounce,
    Trickshot,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotOutcome {
    #[default]
    Miss,
    Hit,
    Rim,
}

/// Validated shot type. A bounce always carries its bounce count.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shot_type", rename_all = "snake_case")]
pub enum ShotKind {
    Normal,
    Bounce { bounces: u32 },
    Trickshot,
}

impl ShotKind {
    /// Combine the boundary fields. Returns `None` unless a bounce count is present
    /// and non-zero exactly when the type is `Bounce`.
    pub fn from_parts(shot_type: ShotType, bounces: Option<u32>) -> Option<Self> {
        match (shot_type, bounces) {
            (ShotType::Normal, None) => Some(ShotKind::Normal),
            (ShotType::Trickshot, None) => Some(ShotKind::Trickshot),
            (ShotType::Bounce, Some(n)) if n > 0 => Some(ShotKind::Bounce { bounces: n }),
            _ => None,
        }
    }

    pub fn shot_type(&self) -> ShotType {
        match self {
            ShotKind::Normal => ShotType::Normal,
            ShotKind::Bounce { .. } => ShotType::Bounce,
            ShotKind::Trickshot => ShotType::Trickshot,
        }
    }

    pub fn bounces(&self) -> Option<u32> {
        match self {
            ShotKind::Bounce { bounces } => Some(*bounces),
            ShotKind::Normal | ShotKind::Trickshot => None,
        }
    }
}

/// One throw as submitted by the UI. Validated by the engine before it becomes a [`Shot`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShotInput {
    pub player_id: PlayerId,
    pub shot_type: ShotType,
    pub outcome: ShotOutcome,
    #[serde(default)]
    pub bounces: Option<u32>,
    /// Supplied by the violation detector; forces a miss when set.
    #[serde(default)]
    pub elbow_violation: bool,
    #[serde(default)]
    pub cup_position: Option<String>,
}

impl ShotInput {
    pub fn new(player_id: PlayerId, shot_type: ShotType, outcome: ShotOutcome) -> Self {
        Self {
            player_id,
            shot_type,
            outcome,
            bounces: None,
            elbow_violation: false,
            cup_position: None,
        }
    }

    /// Normal shot that went in.
    pub fn hit(player_id: PlayerId) -> Self {
        Self::new(player_id, ShotType::Normal, ShotOutcome::Hit)
    }

    pub fn miss(player_id: PlayerId) -> Self {
        Self::new(player_id, ShotType::Normal, ShotOutcome::Miss)
    }

    /// Bounce shot with the given bounce count.
    pub fn bounce(player_id: PlayerId, bounces: u32, outcome: ShotOutcome) -> Self {
        Self {
            bounces: Some(bounces),
            ..Self::new(player_id, ShotType::Bounce, outcome)
        }
    }

    pub fn at_cup(mut self, cup_position: impl Into<String>) -> Self {
        self.cup_position = Some(cup_position.into());
        self
    }

    pub fn with_elbow_violation(mut self) -> Self {
        self.elbow_violation = true;
        self
    }
}

/// Immutable record of a throw in the game's shot log.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub player_id: PlayerId,
    pub team_id: TeamId,
    #[serde(flatten)]
    pub kind: ShotKind,
    pub outcome: ShotOutcome,
    pub elbow_violation: bool,
    pub cup_position: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Shot {
    /// Build a record from an input whose kind has already been validated.
    pub fn record(input: &ShotInput, kind: ShotKind, team_id: TeamId) -> Self {
        Self {
            player_id: input.player_id,
            team_id,
            kind,
            outcome: input.outcome,
            elbow_violation: input.elbow_violation,
            cup_position: input.cup_position.clone(),
            timestamp: Utc::now(),
        }
    }
}
