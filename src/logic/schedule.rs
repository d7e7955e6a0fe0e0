//! Round-robin scheduling (circle method).

use crate::models::{Game, Team, Tournament, TournamentError};

/// Every team plays every other team exactly once.
///
/// With an odd team count a bye slot is added; the team paired with it sits the round
/// out, so odd counts give N rounds and even counts N-1. Fewer than 2 teams gives an
/// empty schedule. Pairings depend only on the order of `teams`.
pub fn round_robin(teams: &[Team], starting_cups: u32) -> Vec<Vec<Game>> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let mut slots: Vec<Option<&Team>> = teams.iter().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let m = slots.len();

    let mut rounds = Vec::with_capacity(m - 1);
    for _ in 0..m - 1 {
        let round: Vec<Game> = (0..m / 2)
            .filter_map(|i| match (slots[i], slots[m - 1 - i]) {
                (Some(home), Some(away)) => Some(Game::new(home, away, starting_cups)),
                _ => None,
            })
            .collect();
        rounds.push(round);

        // Position 0 stays put; the last slot moves to position 1.
        slots[1..].rotate_right(1);
    }
    rounds
}

/// Generate the tournament's schedule once and point at its first game.
/// Fewer than 2 teams leaves the schedule empty and `current_game` unset.
pub fn schedule_round_robin(
    tournament: &mut Tournament,
    starting_cups: u32,
) -> Result<(), TournamentError> {
    if tournament.is_scheduled() {
        return Err(TournamentError::AlreadyScheduled);
    }

    let rounds = round_robin(&tournament.teams, starting_cups);
    tournament.rounds = rounds
        .iter()
        .map(|round| round.iter().map(|g| g.id).collect())
        .collect();
    tournament.games = rounds.into_iter().flatten().collect();

    tournament.current_round = tournament.rounds.iter().position(|r| !r.is_empty());
    tournament.current_game = tournament
        .current_round
        .and_then(|r| tournament.rounds[r].first().copied());

    log::info!(
        "Scheduled '{}': {} teams, {} rounds, {} games",
        tournament.name,
        tournament.teams.len(),
        tournament.rounds.len(),
        tournament.games.len()
    );
    Ok(())
}
