//! Turn analysis and cup attribution: pure functions over the two shots of a turn.

use crate::models::{Shot, ShotKind, ShotOutcome};
use serde::{Deserialize, Serialize};

/// Special outcome of a turn. At most one applies; two balls one cup wins over balls back.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialCondition {
    #[default]
    None,
    /// Both shots hit.
    BallsBack,
    /// Both shots hit the same tagged cup.
    TwoBallsOneCup,
}

impl SpecialCondition {
    pub fn is_special(&self) -> bool {
        !matches!(self, SpecialCondition::None)
    }

    /// Tag reported in turn results, `None` for a regular turn.
    pub fn event_tag(&self) -> Option<&'static str> {
        match self {
            SpecialCondition::None => None,
            SpecialCondition::BallsBack => Some("balls_back"),
            SpecialCondition::TwoBallsOneCup => Some("two_balls_one_cup"),
        }
    }
}

/// Classification of one turn's two shots.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnAnalysis {
    pub individual_hits: [bool; 2],
    /// Cups each shot would remove on its own.
    pub individual_cups: [u32; 2],
    pub special: SpecialCondition,
}

impl TurnAnalysis {
    pub fn hit_count(&self) -> u32 {
        self.individual_hits.iter().filter(|h| **h).count() as u32
    }
}

/// Cups removed this turn and how they are credited to the two shooters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CupAttribution {
    pub cups_removed: u32,
    /// Same order as the shots.
    pub credited: [u32; 2],
}

/// Whether a shot counts as a hit on its own.
///
/// An elbow violation always makes it a miss. Bounce shots count from the bounce
/// count alone and the recorded outcome is not consulted.
pub fn is_individual_hit(shot: &Shot) -> bool {
    if shot.elbow_violation {
        return false;
    }
    match shot.kind {
        ShotKind::Normal | ShotKind::Trickshot => shot.outcome == ShotOutcome::Hit,
        ShotKind::Bounce { bounces } => bounces > 0,
    }
}

/// 0 for a miss, 1 for a normal or trick shot hit, bounces + 1 for a bounce hit.
pub fn individual_cups(shot: &Shot) -> u32 {
    if !is_individual_hit(shot) {
        return 0;
    }
    match shot.kind {
        ShotKind::Normal | ShotKind::Trickshot => 1,
        ShotKind::Bounce { bounces } => bounces + 1,
    }
}

pub fn analyze_turn(first: &Shot, second: &Shot) -> TurnAnalysis {
    let individual_hits = [is_individual_hit(first), is_individual_hit(second)];
    let individual_cups = [individual_cups(first), individual_cups(second)];

    let special = if individual_hits[0] && individual_hits[1] {
        match (&first.cup_position, &second.cup_position) {
            (Some(a), Some(b)) if a == b => SpecialCondition::TwoBallsOneCup,
            _ => SpecialCondition::BallsBack,
        }
    } else {
        SpecialCondition::None
    };

    TurnAnalysis {
        individual_hits,
        individual_cups,
        special,
    }
}

/// Total cups for the turn and per-shooter credit.
///
/// Regular turns credit each shooter with their own cups. Special turns split the
/// fixed total in proportion to the individual cups, truncating each share; the
/// remainder is not handed out.
pub fn attribute_cups(analysis: &TurnAnalysis) -> CupAttribution {
    let [a, b] = analysis.individual_cups;
    let cups_removed = match analysis.special {
        SpecialCondition::TwoBallsOneCup => 3,
        SpecialCondition::BallsBack => 2,
        SpecialCondition::None => a + b,
    };

    let credited = if !analysis.special.is_special() {
        [a, b]
    } else {
        let sum = a + b;
        if sum == 0 {
            [0, 0]
        } else {
            [cups_removed * a / sum, cups_removed * b / sum]
        }
    };

    CupAttribution {
        cups_removed,
        credited,
    }
}
