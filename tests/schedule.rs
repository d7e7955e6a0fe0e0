//! Integration tests for round-robin scheduling.

use beer_pong_tournament::{
    round_robin, schedule_round_robin, Player, Team, TeamId, Tournament, TournamentError,
    DEFAULT_CUPS_PER_TEAM,
};
use std::collections::HashSet;

fn teams(n: usize) -> Vec<Team> {
    (0..n)
        .map(|i| {
            Team::new(
                Player::new(format!("P{i}a")),
                Player::new(format!("P{i}b")),
                Some(format!("Team {i}")),
            )
        })
        .collect()
}

fn pair(a: TeamId, b: TeamId) -> (TeamId, TeamId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[test]
fn every_pair_plays_exactly_once() {
    for n in 2..=9 {
        let teams = teams(n);
        let rounds = round_robin(&teams, DEFAULT_CUPS_PER_TEAM);
        let games: Vec<_> = rounds.iter().flatten().collect();
        assert_eq!(games.len(), n * (n - 1) / 2, "game count for {n} teams");

        let pairs: HashSet<_> = games.iter().map(|g| pair(g.team_1, g.team_2)).collect();
        assert_eq!(pairs.len(), games.len(), "a pair repeated for {n} teams");
        for g in &games {
            assert_ne!(g.team_1, g.team_2);
        }
    }
}

#[test]
fn round_count_depends_on_parity() {
    assert_eq!(round_robin(&teams(4), 6).len(), 3);
    assert_eq!(round_robin(&teams(6), 6).len(), 5);
    assert_eq!(round_robin(&teams(3), 6).len(), 3);
    assert_eq!(round_robin(&teams(5), 6).len(), 5);
}

#[test]
fn no_team_plays_twice_in_a_round() {
    let teams = teams(7);
    for round in round_robin(&teams, 6) {
        let mut seen = HashSet::new();
        for g in &round {
            assert!(seen.insert(g.team_1));
            assert!(seen.insert(g.team_2));
        }
        // One team sits out each round with an odd count.
        assert_eq!(round.len(), 3);
    }
}

#[test]
fn fewer_than_two_teams_gives_empty_schedule() {
    assert!(round_robin(&teams(0), 6).is_empty());
    assert!(round_robin(&teams(1), 6).is_empty());
}

#[test]
fn four_team_circle_method_order() {
    let teams = teams(4);
    let ids: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
    let rounds = round_robin(&teams, 6);
    let as_pairs: Vec<Vec<(TeamId, TeamId)>> = rounds
        .iter()
        .map(|r| r.iter().map(|g| (g.team_1, g.team_2)).collect())
        .collect();

    // [0,1,2,3] -> [0,3,1,2] -> [0,2,3,1]
    assert_eq!(as_pairs[0], vec![(ids[0], ids[3]), (ids[1], ids[2])]);
    assert_eq!(as_pairs[1], vec![(ids[0], ids[2]), (ids[3], ids[1])]);
    assert_eq!(as_pairs[2], vec![(ids[0], ids[1]), (ids[2], ids[3])]);
}

#[test]
fn same_input_gives_same_pairings() {
    let teams = teams(6);
    let pairings = |rounds: Vec<Vec<beer_pong_tournament::Game>>| -> Vec<Vec<(TeamId, TeamId)>> {
        rounds
            .iter()
            .map(|r| r.iter().map(|g| (g.team_1, g.team_2)).collect())
            .collect()
    };
    assert_eq!(
        pairings(round_robin(&teams, 6)),
        pairings(round_robin(&teams, 6))
    );
}

#[test]
fn games_start_with_configured_cups() {
    let rounds = round_robin(&teams(2), 10);
    let game = &rounds[0][0];
    assert_eq!(game.starting_cups, 10);
    assert_eq!(game.team_1_cups, 10);
    assert_eq!(game.team_2_cups, 10);
    assert_eq!(game.team_at_bat, game.team_1);
}

#[test]
fn tournament_schedule_is_flattened_and_points_at_first_game() {
    let mut t = Tournament::with_teams("Cup", teams(5));
    schedule_round_robin(&mut t, 6).unwrap();

    assert_eq!(t.rounds.len(), 5);
    assert_eq!(t.games.len(), 10);
    let flattened: Vec<_> = t.rounds.iter().flatten().copied().collect();
    let game_ids: Vec<_> = t.games.iter().map(|g| g.id).collect();
    assert_eq!(flattened, game_ids);

    assert_eq!(t.current_round, Some(0));
    assert_eq!(t.current_game, Some(t.games[0].id));
    for round in 0..t.rounds.len() {
        assert_eq!(t.bye_teams(round).len(), 1);
    }
}

#[test]
fn tournament_schedule_is_generated_once() {
    let mut t = Tournament::with_teams("Cup", teams(4));
    schedule_round_robin(&mut t, 6).unwrap();
    assert_eq!(
        schedule_round_robin(&mut t, 6),
        Err(TournamentError::AlreadyScheduled)
    );
}

#[test]
fn tournament_with_one_team_has_no_current_game() {
    let mut t = Tournament::with_teams("Solo", teams(1));
    schedule_round_robin(&mut t, 6).unwrap();
    assert!(t.games.is_empty());
    assert_eq!(t.current_game, None);
    assert_eq!(t.current_round, None);
}
