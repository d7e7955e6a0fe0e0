//! Data structures for the beer pong tournament: players, teams, shots, games, tournament.

mod game;
mod player;
mod shot;
mod team;
mod tournament;
mod turn;

pub use game::{Game, GameId, GameStatus, PlayerTally, DEFAULT_CUPS_PER_TEAM};
pub use player::{Player, PlayerGameStats, PlayerId};
pub use shot::{Shot, ShotInput, ShotKind, ShotOutcome, ShotType};
pub use team::{Team, TeamId};
pub use tournament::{Tournament, TournamentError, TournamentId};
pub use turn::TurnRecord;
