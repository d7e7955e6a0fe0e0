//! Turn engine: drives one game from start to finish, two shots at a time.

use crate::logic::analysis::{
    analyze_turn, attribute_cups, CupAttribution, SpecialCondition, TurnAnalysis,
};
use crate::models::{
    Game, GameId, GameStatus, Player, PlayerId, Shot, ShotInput, ShotKind, ShotOutcome, ShotType,
    Team, TeamId, Tournament, TournamentError, TurnRecord,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Whether a rejected call was wrong for the game's status or carried bad shot data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnErrorKind {
    State,
    Validation,
}

/// Errors from the turn engine. None of them change game state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TurnError {
    /// Turns can only be processed while the game is in progress.
    GameNotInProgress(GameStatus),
    /// Lifecycle action not allowed from the current status.
    InvalidTransition {
        action: &'static str,
        status: GameStatus,
    },
    /// Shooter is not on the team at bat.
    PlayerNotAtBat { player: String, team: String },
    /// Bounce count must be present and non-zero exactly for bounce shots.
    InvalidBounceCount {
        player: String,
        shot_type: ShotType,
        bounces: Option<u32>,
    },
    TeamNotInGame(TeamId),
    PlayerNotInGame(PlayerId),
}

impl TurnError {
    pub fn kind(&self) -> TurnErrorKind {
        match self {
            TurnError::GameNotInProgress(_) | TurnError::InvalidTransition { .. } => {
                TurnErrorKind::State
            }
            TurnError::PlayerNotAtBat { .. }
            | TurnError::InvalidBounceCount { .. }
            | TurnError::TeamNotInGame(_)
            | TurnError::PlayerNotInGame(_) => TurnErrorKind::Validation,
        }
    }
}

impl std::fmt::Display for TurnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnError::GameNotInProgress(_) => write!(f, "Game is not in progress"),
            TurnError::InvalidTransition { action, status } => {
                write!(f, "Cannot {} a game that is {}", action, status)
            }
            TurnError::PlayerNotAtBat { player, team } => {
                write!(f, "{} is not on the team at bat ({})", player, team)
            }
            TurnError::InvalidBounceCount {
                player, shot_type, ..
            } => {
                if *shot_type == ShotType::Bounce {
                    write!(f, "{}: a bounce shot needs a bounce count of at least 1", player)
                } else {
                    write!(f, "{}: only bounce shots may have a bounce count", player)
                }
            }
            TurnError::TeamNotInGame(id) => write!(f, "Team {} is not playing in this game", id),
            TurnError::PlayerNotInGame(id) => {
                write!(f, "Player {} is not playing in this game", id)
            }
        }
    }
}

impl std::error::Error for TurnError {}

/// What a turn did, for the UI and persistence layer to relay.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    pub success: bool,
    pub error_message: Option<String>,
    pub error_kind: Option<TurnErrorKind>,
    pub shots_recorded: u32,
    pub cups_removed: u32,
    /// Shots that counted as individual hits.
    pub hits: u32,
    pub balls_back: bool,
    pub two_balls_one_cup: bool,
    pub special_events: Vec<String>,
    /// Same team shoots again.
    pub continue_turn: bool,
    pub next_team: Option<String>,
    /// Advisory; the UI may let either player of `next_team` shoot.
    pub next_shooter: Option<String>,
    pub team_1_cups: u32,
    pub team_2_cups: u32,
    pub game_over: bool,
    pub winner: Option<String>,
}

impl TurnResult {
    fn failed(error: &TurnError, game: &Game) -> Self {
        Self {
            success: false,
            error_message: Some(error.to_string()),
            error_kind: Some(error.kind()),
            team_1_cups: game.team_1_cups,
            team_2_cups: game.team_2_cups,
            game_over: game.is_finished(),
            ..Self::default()
        }
    }
}

/// Sole mutator of one game and the players of its two teams while it is alive.
///
/// Turn history lives here and is dropped with the engine; persist it from
/// [`GameEngine::history`] if needed.
pub struct GameEngine<'a> {
    game: &'a mut Game,
    team_1: &'a mut Team,
    team_2: &'a mut Team,
    history: Vec<TurnRecord>,
    turn_number: u32,
    consecutive_balls_back: u32,
}

impl<'a> GameEngine<'a> {
    /// Bind an engine to a game. The teams must be the game's teams, in order.
    pub fn new(
        game: &'a mut Game,
        team_1: &'a mut Team,
        team_2: &'a mut Team,
    ) -> Result<Self, TurnError> {
        if game.team_1 != team_1.id {
            return Err(TurnError::TeamNotInGame(team_1.id));
        }
        if game.team_2 != team_2.id {
            return Err(TurnError::TeamNotInGame(team_2.id));
        }
        Ok(Self {
            game,
            team_1,
            team_2,
            history: Vec::new(),
            turn_number: 0,
            consecutive_balls_back: 0,
        })
    }

    pub fn game(&self) -> &Game {
        &*self.game
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn consecutive_balls_back(&self) -> u32 {
        self.consecutive_balls_back
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        if id == self.team_1.id {
            Some(&*self.team_1)
        } else if id == self.team_2.id {
            Some(&*self.team_2)
        } else {
            None
        }
    }

    fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        if id == self.team_1.id {
            Some(&mut *self.team_1)
        } else if id == self.team_2.id {
            Some(&mut *self.team_2)
        } else {
            None
        }
    }

    pub fn team_at_bat(&self) -> &Team {
        if self.game.team_at_bat == self.team_1.id {
            &*self.team_1
        } else {
            &*self.team_2
        }
    }

    pub fn other_team(&self) -> &Team {
        if self.game.team_at_bat == self.team_1.id {
            &*self.team_2
        } else {
            &*self.team_1
        }
    }

    pub fn suggested_shooter(&self) -> Option<&Player> {
        let id = self.game.suggested_shooter?;
        self.team_1.player(id).or_else(|| self.team_2.player(id))
    }

    fn player_name(&self, id: PlayerId) -> String {
        self.team_1
            .player(id)
            .or_else(|| self.team_2.player(id))
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Start the game. Only a game that has not started can be started.
    pub fn start(&mut self) -> Result<(), TurnError> {
        if self.game.status != GameStatus::NotStarted {
            return Err(TurnError::InvalidTransition {
                action: "start",
                status: self.game.status,
            });
        }
        self.game.status = GameStatus::InProgress;
        self.game.started_at = Some(Utc::now());
        log::info!(
            "Game {} started: {} vs {}",
            self.game.id,
            self.team_1.name,
            self.team_2.name
        );
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), TurnError> {
        if self.game.status != GameStatus::InProgress {
            return Err(TurnError::InvalidTransition {
                action: "pause",
                status: self.game.status,
            });
        }
        self.game.status = GameStatus::Paused;
        log::info!("Game {} paused", self.game.id);
        Ok(())
    }

    /// Resume a paused game. Does nothing in any other status.
    pub fn resume(&mut self) {
        if self.game.status == GameStatus::Paused {
            self.game.status = GameStatus::InProgress;
            log::info!("Game {} resumed", self.game.id);
        }
    }

    /// Count a punishment drink for a team. Allowed in any game status.
    pub fn add_beer_bong(&mut self, team: TeamId) -> Result<(), TurnError> {
        if team == self.game.team_1 {
            self.game.team_1_beer_bongs += 1;
        } else if team == self.game.team_2 {
            self.game.team_2_beer_bongs += 1;
        } else {
            return Err(TurnError::TeamNotInGame(team));
        }
        Ok(())
    }

    /// Count a punishment drink for a single player, and for their team.
    pub fn record_beer_bong(&mut self, player: PlayerId) -> Result<(), TurnError> {
        let team_id = if self.team_1.has_player(player) {
            self.team_1.id
        } else if self.team_2.has_player(player) {
            self.team_2.id
        } else {
            return Err(TurnError::PlayerNotInGame(player));
        };
        self.add_beer_bong(team_id)?;
        if let Some(p) = self.team_mut(team_id).and_then(|t| t.player_mut(player)) {
            p.record_beer_bong();
        }
        self.game.tally_mut(player).beer_bongs += 1;
        Ok(())
    }

    /// Process one turn: both shots of the team at bat.
    ///
    /// Failures come back as `success == false` with a message and leave the game,
    /// the players and the history untouched.
    pub fn process_turn(&mut self, first: ShotInput, second: ShotInput) -> TurnResult {
        match self.apply_turn(&first, &second) {
            Ok(result) => result,
            Err(e) => {
                log::warn!("Turn rejected in game {}: {}", self.game.id, e);
                TurnResult::failed(&e, &*self.game)
            }
        }
    }

    fn apply_turn(&mut self, first: &ShotInput, second: &ShotInput) -> Result<TurnResult, TurnError> {
        if self.game.status != GameStatus::InProgress {
            return Err(TurnError::GameNotInProgress(self.game.status));
        }
        let at_bat = self.game.team_at_bat;
        let shots = [self.validate_shot(first, at_bat)?, self.validate_shot(second, at_bat)?];

        // Both shots are valid; nothing below can fail.
        self.turn_number += 1;
        for shot in &shots {
            self.game.shots.push(shot.clone());
            if let Some(p) = self.team_mut(at_bat).and_then(|t| t.player_mut(shot.player_id)) {
                p.record_shot();
            }
            self.game.tally_mut(shot.player_id).shots_taken += 1;
        }

        let analysis = analyze_turn(&shots[0], &shots[1]);
        let attribution = attribute_cups(&analysis);
        for shot in &shots {
            if let ShotKind::Bounce { bounces } = shot.kind {
                if !shot.elbow_violation && shot.outcome != ShotOutcome::Hit {
                    log::debug!(
                        "Bounce shot ({} bounces) by {} counted with outcome {:?}",
                        bounces,
                        self.player_name(shot.player_id),
                        shot.outcome
                    );
                }
            }
        }

        let opponent = self.other_team().id;
        self.game.remove_cups(opponent, attribution.cups_removed);
        for (shot, cups) in shots.iter().zip(attribution.credited) {
            if cups == 0 {
                continue;
            }
            if let Some(p) = self.team_mut(at_bat).and_then(|t| t.player_mut(shot.player_id)) {
                p.credit_cups(cups);
            }
            self.game.tally_mut(shot.player_id).cups_hit += cups;
        }

        log::debug!(
            "Game {} turn {}: {} removed {} cup(s) ({:?}), {} {} / {} {}",
            self.game.id,
            self.turn_number,
            self.team_at_bat().name,
            attribution.cups_removed,
            analysis.special,
            self.team_1.name,
            self.game.team_1_cups,
            self.team_2.name,
            self.game.team_2_cups
        );

        self.history.push(TurnRecord {
            turn_number: self.turn_number,
            team_id: at_bat,
            shots,
            cups_removed: attribution.cups_removed,
            balls_back: analysis.special == SpecialCondition::BallsBack,
            two_balls_one_cup: analysis.special == SpecialCondition::TwoBallsOneCup,
            timestamp: Utc::now(),
        });

        let winner = self.loser().and_then(|t| self.game.opponent_of(t));
        if let Some(winner) = winner {
            self.finish(winner);
            return Ok(self.turn_result(&analysis, &attribution, false));
        }

        let continue_turn = analysis.special.is_special();
        if continue_turn {
            self.consecutive_balls_back += 1;
        } else {
            self.consecutive_balls_back = 0;
            self.game.team_at_bat = opponent;
            self.game.suggested_shooter = self.team(opponent).map(|t| t.player_1.id);
        }
        Ok(self.turn_result(&analysis, &attribution, continue_turn))
    }

    fn validate_shot(&self, input: &ShotInput, at_bat: TeamId) -> Result<Shot, TurnError> {
        let team = self.team_at_bat();
        if !team.has_player(input.player_id) {
            return Err(TurnError::PlayerNotAtBat {
                player: self.player_name(input.player_id),
                team: team.name.clone(),
            });
        }
        let kind = ShotKind::from_parts(input.shot_type, input.bounces).ok_or_else(|| {
            TurnError::InvalidBounceCount {
                player: self.player_name(input.player_id),
                shot_type: input.shot_type,
                bounces: input.bounces,
            }
        })?;
        Ok(Shot::record(input, kind, at_bat))
    }

    /// Team whose cups are gone, if any.
    fn loser(&self) -> Option<TeamId> {
        if self.game.team_1_cups == 0 {
            Some(self.game.team_1)
        } else if self.game.team_2_cups == 0 {
            Some(self.game.team_2)
        } else {
            None
        }
    }

    fn finish(&mut self, winner: TeamId) {
        self.game.status = GameStatus::Finished;
        self.game.winner = Some(winner);
        self.game.ended_at = Some(Utc::now());
        log::info!(
            "Game {} finished after {} turns, winner: {}",
            self.game.id,
            self.turn_number,
            self.team(winner).map(|t| t.name.as_str()).unwrap_or("?")
        );
    }

    fn turn_result(
        &self,
        analysis: &TurnAnalysis,
        attribution: &CupAttribution,
        continue_turn: bool,
    ) -> TurnResult {
        TurnResult {
            success: true,
            error_message: None,
            error_kind: None,
            shots_recorded: 2,
            cups_removed: attribution.cups_removed,
            hits: analysis.hit_count(),
            balls_back: analysis.special == SpecialCondition::BallsBack,
            two_balls_one_cup: analysis.special == SpecialCondition::TwoBallsOneCup,
            special_events: analysis
                .special
                .event_tag()
                .map(|tag| vec![tag.to_string()])
                .unwrap_or_default(),
            continue_turn,
            next_team: Some(self.team_at_bat().name.clone()),
            next_shooter: self.suggested_shooter().map(|p| p.name.clone()),
            team_1_cups: self.game.team_1_cups,
            team_2_cups: self.game.team_2_cups,
            game_over: self.game.is_finished(),
            winner: self
                .game
                .winner
                .and_then(|id| self.team(id))
                .map(|t| t.name.clone()),
        }
    }
}

/// Bind an engine to one of the tournament's scheduled games.
pub fn engine_for(
    tournament: &mut Tournament,
    game_id: GameId,
) -> Result<GameEngine<'_>, TournamentError> {
    let Tournament { teams, games, .. } = tournament;
    let game = games
        .iter_mut()
        .find(|g| g.id == game_id)
        .ok_or(TournamentError::GameNotFound(game_id))?;

    let (mut team_1, mut team_2) = (None, None);
    for team in teams.iter_mut() {
        if team.id == game.team_1 {
            team_1 = Some(team);
        } else if team.id == game.team_2 {
            team_2 = Some(team);
        }
    }
    let team_1 = team_1.ok_or(TournamentError::TeamNotFound(game.team_1))?;
    let team_2 = team_2.ok_or(TournamentError::TeamNotFound(game.team_2))?;

    GameEngine::new(game, team_1, team_2).map_err(|_| TournamentError::InvalidState)
}
