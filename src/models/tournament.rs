//! Tournament: teams, the round-robin schedule and the overall result.

use crate::models::game::{Game, GameId};
use crate::models::team::{Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Need at least 2 teams.
    NotEnoughTeams,
    /// Tournament or game is not in a state that allows this action.
    InvalidState,
    /// The schedule has already been generated.
    AlreadyScheduled,
    TeamNotFound(TeamId),
    GameNotFound(GameId),
    /// Game result requested before the game finished.
    GameNotFinished(GameId),
    /// A team with this name already exists (case-insensitive).
    DuplicateTeamName(String),
    /// The same player name appears on more than one roster slot.
    DuplicatePlayer(String),
    /// Team or player name is blank.
    EmptyName,
    /// Roster file could not be read or parsed.
    Roster(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NotEnoughTeams => write!(f, "Need at least 2 teams to start tournament"),
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::AlreadyScheduled => write!(f, "Tournament has already been scheduled"),
            TournamentError::TeamNotFound(id) => write!(f, "Team not found: {}", id),
            TournamentError::GameNotFound(id) => write!(f, "Game not found: {}", id),
            TournamentError::GameNotFinished(id) => write!(f, "Game {} is not finished", id),
            TournamentError::DuplicateTeamName(name) => {
                write!(f, "A team named '{}' already exists", name)
            }
            TournamentError::DuplicatePlayer(name) => {
                write!(f, "Player '{}' is listed more than once", name)
            }
            TournamentError::EmptyName => write!(f, "Team and player names must not be empty"),
            TournamentError::Roster(msg) => write!(f, "Could not read team roster: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Roster order; also the scheduling seed.
    pub teams: Vec<Team>,
    /// Each round lists ids into `games`. A round may be empty.
    pub rounds: Vec<Vec<GameId>>,
    /// All games, round by round.
    pub games: Vec<Game>,
    pub current_round: Option<usize>,
    pub current_game: Option<GameId>,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub winner: Option<TeamId>,
}

impl Tournament {
    /// Create an empty tournament.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            teams: Vec::new(),
            rounds: Vec::new(),
            games: Vec::new(),
            current_round: None,
            current_game: None,
            created_at: Utc::now(),
            started_at: None,
            finished_at: None,
            winner: None,
        }
    }

    /// Create a tournament with an initial roster. Not started or scheduled yet.
    pub fn with_teams(name: impl Into<String>, teams: Vec<Team>) -> Self {
        Self {
            teams,
            ..Self::new(name)
        }
    }

    pub fn is_scheduled(&self) -> bool {
        !self.rounds.is_empty()
    }

    /// Add a team (only before the schedule exists). Team names are unique, case-insensitive.
    pub fn add_team(&mut self, team: Team) -> Result<(), TournamentError> {
        if self.is_scheduled() {
            return Err(TournamentError::AlreadyScheduled);
        }
        if self
            .teams
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(&team.name))
        {
            return Err(TournamentError::DuplicateTeamName(team.name));
        }
        self.teams.push(team);
        Ok(())
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Games of one round, in schedule order.
    pub fn round_games(&self, round: usize) -> Vec<&Game> {
        self.rounds
            .get(round)
            .map(|ids| ids.iter().filter_map(|id| self.game(*id)).collect())
            .unwrap_or_default()
    }

    /// Teams with no game in the given round.
    pub fn bye_teams(&self, round: usize) -> Vec<&Team> {
        let games = self.round_games(round);
        self.teams
            .iter()
            .filter(|t| !games.iter().any(|g| g.involves(t.id)))
            .collect()
    }

    pub fn is_finished(&self) -> bool {
        self.finished_at.is_some()
    }

    /// Teams ordered by wins (desc), losses (asc), then roster order.
    pub fn standings(&self) -> Vec<&Team> {
        let mut teams: Vec<&Team> = self.teams.iter().collect();
        teams.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.losses.cmp(&b.losses)));
        teams
    }
}
