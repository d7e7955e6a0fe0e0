//! Tournament business logic: setup, scheduling, turn rules and results.

mod analysis;
mod engine;
mod results;
mod schedule;
mod setup;

pub use analysis::{
    analyze_turn, attribute_cups, individual_cups, is_individual_hit, CupAttribution,
    SpecialCondition, TurnAnalysis,
};
pub use engine::{engine_for, GameEngine, TurnError, TurnErrorKind, TurnResult};
pub use results::record_game_result;
pub use schedule::{round_robin, schedule_round_robin};
pub use setup::{create_tournament, read_team_roster, start_tournament, TeamData};
