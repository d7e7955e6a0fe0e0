//! Command-line tournament runner: reads a team roster, schedules the round robin and
//! optionally simulates every game through the turn engine.
//! Run with: cargo run --bin tournament -- teams.csv
//! Env: TEAMS_CSV (if no argument), TOURNAMENT_NAME, CUPS_PER_TEAM, SIMULATE_SEED, OUTPUT_JSON=1.

use beer_pong_tournament::{
    create_tournament, engine_for, read_team_roster, record_game_result, GameId, PlayerId,
    ShotInput, ShotOutcome, ShotType, Tournament, DEFAULT_CUPS_PER_TEAM,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fs::File;

/// A simulated game that runs this long is abandoned.
const MAX_SIMULATED_TURNS: u32 = 500;

struct Config {
    teams_csv: String,
    name: String,
    cups_per_team: u32,
    simulate_seed: Option<u64>,
    output_json: bool,
}

fn default_name() -> String {
    "Super Pong Tournament".to_string()
}

fn default_cups_per_team() -> u32 {
    DEFAULT_CUPS_PER_TEAM
}

impl Config {
    fn from_env() -> Result<Self, String> {
        let teams_csv = std::env::args()
            .nth(1)
            .or_else(|| std::env::var("TEAMS_CSV").ok())
            .ok_or("No roster given: pass a CSV path or set TEAMS_CSV")?;
        let name = std::env::var("TOURNAMENT_NAME").unwrap_or_else(|_| default_name());
        let cups_per_team = std::env::var("CUPS_PER_TEAM")
            .ok()
            .and_then(|c| c.parse().ok())
            .filter(|c| *c > 0)
            .unwrap_or_else(default_cups_per_team);
        let simulate_seed = std::env::var("SIMULATE_SEED")
            .ok()
            .and_then(|s| s.parse().ok());
        let output_json = std::env::var("OUTPUT_JSON").is_ok_and(|v| v == "1");
        Ok(Self {
            teams_csv,
            name,
            cups_per_team,
            simulate_seed,
            output_json,
        })
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    let roster = read_team_roster(File::open(&config.teams_csv)?)?;
    let mut tournament = create_tournament(config.name.as_str(), &roster, config.cups_per_team)?;
    log_schedule(&tournament);

    if let Some(seed) = config.simulate_seed {
        let mut rng = StdRng::seed_from_u64(seed);
        let game_ids: Vec<GameId> = tournament.games.iter().map(|g| g.id).collect();
        for id in game_ids {
            simulate_game(&mut tournament, id, config.cups_per_team, &mut rng)?;
            record_game_result(&mut tournament, id)?;
        }
        log_standings(&tournament);
    }

    if config.output_json {
        println!("{}", serde_json::to_string_pretty(&tournament)?);
    }
    Ok(())
}

fn log_schedule(tournament: &Tournament) {
    for round in 0..tournament.rounds.len() {
        let games: Vec<String> = tournament
            .round_games(round)
            .iter()
            .map(|g| format!("{} vs {}", team_name(tournament, g.team_1), team_name(tournament, g.team_2)))
            .collect();
        let byes: Vec<&str> = tournament
            .bye_teams(round)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        log::info!("Round {}: {}", round + 1, games.join(", "));
        if !byes.is_empty() {
            log::info!("Round {} bye: {}", round + 1, byes.join(", "));
        }
    }
}

fn log_standings(tournament: &Tournament) {
    for (place, team) in tournament.standings().iter().enumerate() {
        log::info!(
            "{}. {} ({}-{}) {}: {} cups, {}: {} cups",
            place + 1,
            team.name,
            team.wins,
            team.losses,
            team.player_1.name,
            team.player_1.total_cups_hit,
            team.player_2.name,
            team.player_2.total_cups_hit
        );
    }
}

fn team_name(tournament: &Tournament, id: beer_pong_tournament::TeamId) -> &str {
    tournament.team(id).map(|t| t.name.as_str()).unwrap_or("?")
}

fn simulate_game(
    tournament: &mut Tournament,
    game_id: GameId,
    cups: u32,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    let mut engine = engine_for(tournament, game_id)?;
    engine.start()?;
    while !engine.game().is_finished() {
        if engine.turn_number() >= MAX_SIMULATED_TURNS {
            return Err(format!("Game {} did not finish in {} turns", game_id, MAX_SIMULATED_TURNS).into());
        }
        let team = engine.team_at_bat();
        let (first, second) = (team.player_1.id, team.player_2.id);
        let result = engine.process_turn(
            random_shot(rng, first, cups),
            random_shot(rng, second, cups),
        );
        if !result.success {
            return Err(result.error_message.unwrap_or_default().into());
        }
        if rng.gen_bool(0.05) {
            let loser = engine.other_team().id;
            engine.add_beer_bong(loser)?;
        }
    }
    log::info!(
        "Game {} won by {} after {} turns ({:.1} min)",
        game_id,
        engine.team_at_bat().name,
        engine.turn_number(),
        engine.game().duration_minutes().unwrap_or_default()
    );
    Ok(())
}

/// Random throw: mostly normal shots, with the occasional bounce, trick shot or elbow call.
fn random_shot(rng: &mut StdRng, player: PlayerId, cups: u32) -> ShotInput {
    let roll: f64 = rng.gen();
    let mut shot = if roll < 0.08 {
        // Bounce shots are only entered when they land.
        ShotInput::bounce(player, rng.gen_range(1..=2), ShotOutcome::Hit)
    } else {
        let shot_type = if roll < 0.15 { ShotType::Trickshot } else { ShotType::Normal };
        let outcome = match rng.gen_range(0..100) {
            0..=34 => ShotOutcome::Hit,
            35..=49 => ShotOutcome::Rim,
            _ => ShotOutcome::Miss,
        };
        ShotInput::new(player, shot_type, outcome)
    };
    if shot.outcome == ShotOutcome::Hit {
        shot = shot.at_cup(rng.gen_range(1..=cups).to_string());
    }
    if rng.gen_bool(0.03) {
        shot = shot.with_elbow_violation();
    }
    shot
}
