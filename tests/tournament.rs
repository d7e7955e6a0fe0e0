//! Integration tests for roster loading, tournament creation and results recording.

use beer_pong_tournament::{
    create_tournament, engine_for, read_team_roster, record_game_result, GameId, ShotInput,
    TeamData, Tournament, TournamentError,
};

fn roster(n: usize) -> Vec<TeamData> {
    (0..n)
        .map(|i| TeamData {
            team_name: format!("Team {i}"),
            player1_name: format!("P{i}a"),
            player2_name: format!("P{i}b"),
        })
        .collect()
}

/// Play a game where the team at bat always sinks both shots.
fn play_out(tournament: &mut Tournament, game_id: GameId) {
    let mut engine = engine_for(tournament, game_id).unwrap();
    engine.start().unwrap();
    while !engine.game().is_finished() {
        let team = engine.team_at_bat();
        let (p1, p2) = (team.player_1.id, team.player_2.id);
        assert!(engine.process_turn(ShotInput::hit(p1), ShotInput::hit(p2)).success);
    }
}

#[test]
fn reads_csv_roster() {
    let csv = "team_name,player1_name,player2_name\nCup Kings, Ann ,Bob\nSplash,Cy,Di\n";
    let teams = read_team_roster(csv.as_bytes()).unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].team_name, "Cup Kings");
    assert_eq!(teams[0].player1_name, "Ann");
}

#[test]
fn malformed_roster_is_an_error() {
    let csv = "team_name,player1_name\nCup Kings,Ann\n";
    assert!(matches!(
        read_team_roster(csv.as_bytes()),
        Err(TournamentError::Roster(_))
    ));
}

#[test]
fn create_requires_two_teams() {
    assert_eq!(
        create_tournament("Cup", &roster(1), 6).unwrap_err(),
        TournamentError::NotEnoughTeams
    );
}

#[test]
fn create_rejects_duplicates() {
    let mut teams = roster(2);
    teams[1].team_name = "team 0".into();
    assert!(matches!(
        create_tournament("Cup", &teams, 6),
        Err(TournamentError::DuplicateTeamName(_))
    ));

    let mut teams = roster(2);
    teams[1].player2_name = "P0a".into();
    assert!(matches!(
        create_tournament("Cup", &teams, 6),
        Err(TournamentError::DuplicatePlayer(_))
    ));
}

#[test]
fn create_schedules_round_robin() {
    let t = create_tournament("Cup", &roster(4), 6).unwrap();
    assert!(t.started_at.is_some());
    assert_eq!(t.teams.len(), 4);
    assert_eq!(t.rounds.len(), 3);
    assert_eq!(t.games.len(), 6);
    assert_eq!(t.current_game, Some(t.games[0].id));
}

#[test]
fn blank_team_name_defaults_to_player_names() {
    let mut teams = roster(2);
    teams[0].team_name = "  ".into();
    let t = create_tournament("Cup", &teams, 6).unwrap();
    assert_eq!(t.teams[0].name, "P0a & P0b");
}

#[test]
fn recording_requires_a_finished_game() {
    let mut t = create_tournament("Cup", &roster(2), 6).unwrap();
    let id = t.games[0].id;
    assert_eq!(
        record_game_result(&mut t, id),
        Err(TournamentError::GameNotFinished(id))
    );
}

#[test]
fn recording_updates_records_and_advances() {
    let mut t = create_tournament("Cup", &roster(3), 6).unwrap();
    let first = t.games[0].id;
    play_out(&mut t, first);
    record_game_result(&mut t, first).unwrap();

    let game = t.game(first).unwrap();
    // Team 1 shoots first and keeps the ball on every balls back.
    let winner = t.team(game.winner.unwrap()).unwrap();
    let loser = t.team(game.team_2).unwrap();
    assert_eq!(winner.id, game.team_1);
    assert_eq!((winner.wins, winner.losses), (1, 0));
    assert_eq!((loser.wins, loser.losses), (0, 1));
    assert_eq!(winner.games_played, vec![first]);
    assert_eq!(loser.games_played, vec![first]);

    let stats = &winner.player_1.game_stats;
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].cups_hit, 3);
    assert_eq!(stats[0].shots_taken, 3);
    assert_eq!(winner.player_1.total_cups_hit, 3);

    assert_eq!(t.current_game, Some(t.games[1].id));
    assert!(!t.is_finished());

    assert_eq!(
        record_game_result(&mut t, first),
        Err(TournamentError::InvalidState)
    );
}

#[test]
fn tournament_finishes_after_last_result() {
    let mut t = create_tournament("Cup", &roster(3), 6).unwrap();
    let ids: Vec<GameId> = t.games.iter().map(|g| g.id).collect();
    for id in ids {
        play_out(&mut t, id);
        record_game_result(&mut t, id).unwrap();
    }

    assert!(t.is_finished());
    assert_eq!(t.current_game, None);
    let standings = t.standings();
    assert_eq!(t.winner, Some(standings[0].id));
    let total_wins: u32 = t.teams.iter().map(|team| team.wins).sum();
    assert_eq!(total_wins, 3);
}

#[test]
fn tournament_serializes_to_json() {
    let t = create_tournament("Cup", &roster(2), 6).unwrap();
    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(json["name"], "Cup");
    assert_eq!(json["games"][0]["status"], "not_started");
}
