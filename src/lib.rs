//! Beer pong tournament tracker: library with models, scheduling and the turn rules engine.

pub mod logic;
pub mod models;

pub use logic::{
    analyze_turn, attribute_cups, create_tournament, engine_for, individual_cups,
    is_individual_hit, read_team_roster, record_game_result, round_robin, schedule_round_robin,
    start_tournament, CupAttribution, GameEngine, SpecialCondition, TeamData, TurnAnalysis,
    TurnError, TurnErrorKind, TurnResult,
};
pub use models::{
    Game, GameId, GameStatus, Player, PlayerGameStats, PlayerId, PlayerTally, Shot, ShotInput,
    ShotKind, ShotOutcome, ShotType, Team, TeamId, Tournament, TournamentError, TournamentId,
    TurnRecord, DEFAULT_CUPS_PER_TEAM,
};
