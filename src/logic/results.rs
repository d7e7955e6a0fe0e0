//! Results recording: fold a finished game into team records and player history.

use crate::models::{GameId, PlayerGameStats, TeamId, Tournament, TournamentError};
use chrono::Utc;

/// Record a finished game's result and move the tournament on to its next game.
///
/// The winner gets a win, the loser a loss, both teams list the game as played and
/// every player gets a [`PlayerGameStats`] entry. Once every game is recorded the
/// tournament is finished and the top of the standings is its winner.
pub fn record_game_result(tournament: &mut Tournament, game_id: GameId) -> Result<(), TournamentError> {
    let game = tournament
        .game(game_id)
        .ok_or(TournamentError::GameNotFound(game_id))?;
    if !game.is_finished() {
        return Err(TournamentError::GameNotFinished(game_id));
    }
    let winner_id = game.winner.ok_or(TournamentError::InvalidState)?;
    let loser_id = game
        .opponent_of(winner_id)
        .ok_or(TournamentError::TeamNotFound(winner_id))?;
    let date = game.ended_at.unwrap_or_else(Utc::now);
    let tallies = game.tallies.clone();

    for (team_id, won) in [(winner_id, true), (loser_id, false)] {
        let team = tournament
            .team_mut(team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        if team.games_played.contains(&game_id) {
            return Err(TournamentError::InvalidState);
        }
        if won {
            team.add_win();
        } else {
            team.add_loss();
        }
        team.games_played.push(game_id);
        for player in [&mut team.player_1, &mut team.player_2] {
            let tally = tallies.get(&player.id).copied().unwrap_or_default();
            player.game_stats.push(PlayerGameStats {
                game_id,
                cups_hit: tally.cups_hit,
                shots_taken: tally.shots_taken,
                beer_bongs: tally.beer_bongs,
                date,
            });
        }
    }
    log::info!(
        "Recorded result of game {}: {} beat {}",
        game_id,
        team_name(tournament, winner_id),
        team_name(tournament, loser_id)
    );

    advance_schedule(tournament);
    Ok(())
}

fn team_name(tournament: &Tournament, id: TeamId) -> String {
    tournament
        .team(id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn is_recorded(tournament: &Tournament, game_id: GameId) -> bool {
    tournament.game(game_id).is_some_and(|g| {
        tournament
            .team(g.team_1)
            .is_some_and(|t| t.games_played.contains(&game_id))
    })
}

fn next_unrecorded(tournament: &Tournament) -> Option<(usize, GameId)> {
    tournament.rounds.iter().enumerate().find_map(|(round, ids)| {
        ids.iter()
            .find(|id| !is_recorded(tournament, **id))
            .map(|id| (round, *id))
    })
}

/// Point at the first game without a recorded result, or finish the tournament if there is none.
fn advance_schedule(tournament: &mut Tournament) {
    match next_unrecorded(tournament) {
        Some((round, id)) => {
            tournament.current_round = Some(round);
            tournament.current_game = Some(id);
        }
        None => {
            tournament.current_game = None;
            tournament.finished_at = Some(Utc::now());
            let winner = tournament.standings().first().map(|t| t.id);
            tournament.winner = winner;
            if let Some(winner) = tournament.winner {
                log::info!(
                    "Tournament '{}' finished, winner: {}",
                    tournament.name,
                    team_name(tournament, winner)
                );
            }
        }
    }
}
