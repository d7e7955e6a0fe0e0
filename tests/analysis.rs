//! Tests for the turn analyzer and cup attribution, without a live game.

use beer_pong_tournament::{
    analyze_turn, attribute_cups, individual_cups, is_individual_hit, Shot, ShotInput, ShotKind,
    ShotOutcome, ShotType, SpecialCondition,
};
use uuid::Uuid;

fn shot(input: ShotInput) -> Shot {
    let kind = ShotKind::from_parts(input.shot_type, input.bounces).expect("valid shot kind");
    Shot::record(&input, kind, Uuid::new_v4())
}

fn hit() -> Shot {
    shot(ShotInput::hit(Uuid::new_v4()))
}

fn miss() -> Shot {
    shot(ShotInput::miss(Uuid::new_v4()))
}

#[test]
fn shot_kind_requires_bounce_count_only_for_bounces() {
    assert_eq!(
        ShotKind::from_parts(ShotType::Bounce, Some(2)),
        Some(ShotKind::Bounce { bounces: 2 })
    );
    assert_eq!(ShotKind::from_parts(ShotType::Bounce, None), None);
    assert_eq!(ShotKind::from_parts(ShotType::Bounce, Some(0)), None);
    assert_eq!(ShotKind::from_parts(ShotType::Normal, Some(1)), None);
    assert_eq!(ShotKind::from_parts(ShotType::Trickshot, None), Some(ShotKind::Trickshot));
}

#[test]
fn elbow_violation_turns_a_hit_into_a_miss() {
    let s = shot(ShotInput::hit(Uuid::new_v4()).with_elbow_violation());
    assert!(!is_individual_hit(&s));
    assert_eq!(individual_cups(&s), 0);

    let b = shot(ShotInput::bounce(Uuid::new_v4(), 2, ShotOutcome::Hit).with_elbow_violation());
    assert!(!is_individual_hit(&b));
}

#[test]
fn normal_and_trickshot_count_only_on_hit() {
    let rim = shot(ShotInput::new(Uuid::new_v4(), ShotType::Normal, ShotOutcome::Rim));
    assert!(!is_individual_hit(&rim));
    let trick = shot(ShotInput::new(Uuid::new_v4(), ShotType::Trickshot, ShotOutcome::Hit));
    assert!(is_individual_hit(&trick));
    assert_eq!(individual_cups(&trick), 1);
}

#[test]
fn bounce_shot_ignores_outcome() {
    let b = shot(ShotInput::bounce(Uuid::new_v4(), 1, ShotOutcome::Miss));
    assert!(is_individual_hit(&b));
    assert_eq!(individual_cups(&b), 2);
}

#[test]
fn two_hits_without_shared_cup_are_balls_back() {
    let a = analyze_turn(&hit(), &hit());
    assert_eq!(a.special, SpecialCondition::BallsBack);
    assert_eq!(attribute_cups(&a).cups_removed, 2);

    let tagged = shot(ShotInput::hit(Uuid::new_v4()).at_cup("1"));
    let other = shot(ShotInput::hit(Uuid::new_v4()).at_cup("2"));
    assert_eq!(analyze_turn(&tagged, &other).special, SpecialCondition::BallsBack);
    assert_eq!(analyze_turn(&tagged, &hit()).special, SpecialCondition::BallsBack);
}

#[test]
fn two_hits_on_same_cup_remove_three() {
    let a = shot(ShotInput::hit(Uuid::new_v4()).at_cup("5"));
    let b = shot(ShotInput::hit(Uuid::new_v4()).at_cup("5"));
    let analysis = analyze_turn(&a, &b);
    assert_eq!(analysis.special, SpecialCondition::TwoBallsOneCup);
    assert_eq!(analysis.special.event_tag(), Some("two_balls_one_cup"));

    let attribution = attribute_cups(&analysis);
    assert_eq!(attribution.cups_removed, 3);
    // 3 * 1 / 2 truncates to 1 each; the remainder is not handed out.
    assert_eq!(attribution.credited, [1, 1]);
}

#[test]
fn lone_bounce_hit_removes_bounces_plus_one() {
    let b = shot(ShotInput::bounce(Uuid::new_v4(), 2, ShotOutcome::Hit));
    let analysis = analyze_turn(&b, &miss());
    assert_eq!(analysis.special, SpecialCondition::None);
    assert_eq!(analysis.hit_count(), 1);

    let attribution = attribute_cups(&analysis);
    assert_eq!(attribution.cups_removed, 3);
    assert_eq!(attribution.credited, [3, 0]);
}

#[test]
fn balls_back_with_bounce_splits_proportionally() {
    let b = shot(ShotInput::bounce(Uuid::new_v4(), 2, ShotOutcome::Hit));
    let analysis = analyze_turn(&b, &hit());
    assert_eq!(analysis.individual_cups, [3, 1]);
    assert_eq!(analysis.special, SpecialCondition::BallsBack);

    let attribution = attribute_cups(&analysis);
    assert_eq!(attribution.cups_removed, 2);
    // 2 * 3 / 4 = 1, 2 * 1 / 4 = 0
    assert_eq!(attribution.credited, [1, 0]);
}

#[test]
fn two_misses_remove_nothing() {
    let analysis = analyze_turn(&miss(), &miss());
    assert_eq!(analysis.special, SpecialCondition::None);
    assert_eq!(attribute_cups(&analysis).cups_removed, 0);
    assert_eq!(attribute_cups(&analysis).credited, [0, 0]);
}
