//! Setup phase: read the team roster, build teams and start the tournament.

use crate::logic::schedule::schedule_round_robin;
use crate::models::{Player, Team, Tournament, TournamentError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;

/// One roster row: team name and its two players.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamData {
    pub team_name: String,
    pub player1_name: String,
    pub player2_name: String,
}

/// Read a CSV roster with the header `team_name,player1_name,player2_name`.
pub fn read_team_roster<R: Read>(reader: R) -> Result<Vec<TeamData>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    rdr.deserialize::<TeamData>()
        .collect::<Result<Vec<TeamData>, _>>()
        .map_err(|e| TournamentError::Roster(e.to_string()))
}

/// Start the tournament: at least 2 teams, and only once.
pub fn start_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.started_at.is_some() {
        return Err(TournamentError::InvalidState);
    }
    if tournament.teams.len() < 2 {
        return Err(TournamentError::NotEnoughTeams);
    }
    tournament.started_at = Some(Utc::now());
    log::info!(
        "Tournament '{}' started with {} teams",
        tournament.name,
        tournament.teams.len()
    );
    Ok(())
}

/// Build a tournament from roster rows, start it and generate the round-robin schedule.
///
/// Team names must be unique (case-insensitive) and no player name may appear twice.
pub fn create_tournament(
    name: impl Into<String>,
    teams_data: &[TeamData],
    cups_per_team: u32,
) -> Result<Tournament, TournamentError> {
    if teams_data.len() < 2 {
        return Err(TournamentError::NotEnoughTeams);
    }

    let mut tournament = Tournament::new(name);
    let mut seen_players = HashSet::new();
    for data in teams_data {
        let p1 = data.player1_name.trim();
        let p2 = data.player2_name.trim();
        if p1.is_empty() || p2.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        for player in [p1, p2] {
            if !seen_players.insert(player.to_lowercase()) {
                return Err(TournamentError::DuplicatePlayer(player.to_string()));
            }
        }
        let team = Team::new(
            Player::new(p1),
            Player::new(p2),
            Some(data.team_name.clone()),
        );
        tournament.add_team(team)?;
    }

    start_tournament(&mut tournament)?;
    schedule_round_robin(&mut tournament, cups_per_team)?;
    Ok(tournament)
}
