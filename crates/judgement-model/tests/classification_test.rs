use std::collections::HashSet;

use judgement_model::{HIT_RESULT_COUNT, HitCategory, HitResult};
use proptest::prelude::*;

fn any_hit_result() -> impl Strategy<Value = HitResult> {
    proptest::sample::select(HitResult::ALL.to_vec())
}

fn any_basic_result() -> impl Strategy<Value = HitResult> {
    proptest::sample::select(vec![
        HitResult::Miss,
        HitResult::Meh,
        HitResult::Ok,
        HitResult::Good,
        HitResult::Great,
        HitResult::Perfect,
    ])
}

proptest! {
    #[test]
    fn basic_and_tick_are_exclusive(result in any_hit_result()) {
        prop_assert!(!(result.is_basic() && result.is_tick()));
        prop_assert!(!(result.is_basic() && result.is_bonus()));
        prop_assert!(!(result.is_tick() && result.is_bonus()));
    }

    #[test]
    fn categories_cover_scorable(result in any_hit_result()) {
        prop_assert_eq!(
            result.is_basic() || result.is_tick() || result.is_bonus(),
            result.is_scorable()
        );
        prop_assert_eq!(result.category().is_some(), result.is_scorable());
    }

    #[test]
    fn accuracy_is_scorable_without_bonus(result in any_hit_result()) {
        prop_assert_eq!(
            result.affects_accuracy(),
            result.is_scorable() && !result.is_bonus()
        );
    }

    #[test]
    fn combo_effect_implies_scorable(result in any_hit_result()) {
        if result.affects_combo() {
            prop_assert!(result.is_scorable());
            prop_assert!(result.affects_accuracy());
        }
    }

    #[test]
    fn none_never_validates(min in any_basic_result(), max in any_basic_result()) {
        let (min, max) = if min.id() <= max.id() { (min, max) } else { (max, min) };
        prop_assert!(!HitResult::None.is_valid_hit_result(min, max));
    }

    #[test]
    fn basic_range_matches_declaration_interval(
        candidate in any_basic_result(),
        a in any_basic_result(),
        b in any_basic_result(),
    ) {
        let (min, max) = if a.id() <= b.id() { (a, b) } else { (b, a) };
        let inside = min.id() <= candidate.id() && candidate.id() <= max.id();
        prop_assert_eq!(candidate.is_valid_hit_result(min, max), inside);
    }

    #[test]
    fn wire_tag_parses_back(result in any_hit_result()) {
        prop_assert_eq!(result.tag().parse::<HitResult>(), Ok(result));
    }
}

#[test]
fn catalog_has_fifteen_unique_entries() {
    assert_eq!(HitResult::ALL.len(), HIT_RESULT_COUNT);
    assert_eq!(HIT_RESULT_COUNT, 15);

    let ids: HashSet<u8> = HitResult::ALL.iter().map(|r| r.id()).collect();
    assert_eq!(ids.len(), HIT_RESULT_COUNT);

    let tags: HashSet<&str> = HitResult::ALL.iter().map(|r| r.tag()).collect();
    assert_eq!(tags.len(), HIT_RESULT_COUNT);
    assert!(tags.iter().all(|t| !t.is_empty()));

    for result in HitResult::ALL {
        assert_eq!(result.label().is_empty(), result == HitResult::None);
    }
}

#[test]
fn catalog_is_in_declaration_order() {
    for pair in HitResult::ALL.windows(2) {
        assert!(pair[0].id() < pair[1].id());
    }
    assert_eq!(HitResult::ALL.first(), Some(&HitResult::None));
    assert_eq!(HitResult::ALL.last(), Some(&HitResult::IgnoreHit));
}

#[test]
fn priority_order_is_total_and_distinct() {
    let sorted = HitResult::by_priority();
    assert_eq!(sorted.first(), Some(&HitResult::Perfect));
    assert_eq!(sorted.last(), Some(&HitResult::None));
    for pair in sorted.windows(2) {
        assert!(pair[0].priority() < pair[1].priority());
    }
    assert_ne!(sorted, HitResult::ALL);
}

#[test]
fn scorable_examples() {
    assert!(!HitResult::None.is_scorable());
    assert!(!HitResult::IgnoreMiss.is_scorable());
    assert!(!HitResult::IgnoreHit.is_scorable());
    assert!(HitResult::Miss.is_scorable());
    assert!(HitResult::Perfect.is_scorable());
}

#[test]
fn hit_examples() {
    assert!(!HitResult::Miss.is_hit());
    assert!(!HitResult::SmallTickMiss.is_hit());
    assert!(!HitResult::LargeTickMiss.is_hit());
    assert!(HitResult::Meh.is_hit());
    assert!(HitResult::SmallBonus.is_hit());
}

#[test]
fn combo_examples() {
    assert!(!HitResult::SmallTickHit.affects_combo());
    assert!(HitResult::LargeTickHit.affects_combo());
    assert!(!HitResult::SmallBonus.affects_combo());
    assert!(HitResult::Miss.affects_combo());
}

#[test]
fn range_examples() {
    assert!(HitResult::Great.is_valid_hit_result(HitResult::Meh, HitResult::Perfect));
    assert!(!HitResult::Meh.is_valid_hit_result(HitResult::Ok, HitResult::Perfect));
    assert!(HitResult::Perfect.is_valid_hit_result(HitResult::Meh, HitResult::Perfect));
    assert!(HitResult::Meh.is_valid_hit_result(HitResult::Meh, HitResult::Perfect));
    assert!(!HitResult::None.is_valid_hit_result(HitResult::Meh, HitResult::Perfect));
}

#[test]
fn categories_of_catalog() {
    let count = |category| {
        HitResult::ALL
            .iter()
            .filter(|r| r.category() == Some(category))
            .count()
    };
    assert_eq!(count(HitCategory::Basic), 6);
    assert_eq!(count(HitCategory::Tick), 4);
    assert_eq!(count(HitCategory::Bonus), 2);
}

#[test]
fn serde_uses_wire_tags() {
    let json = serde_json::to_string(&HitResult::ALL.to_vec()).unwrap();
    assert!(json.starts_with("[\"none\",\"miss\",\"meh\""));
    let back: Vec<HitResult> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, HitResult::ALL.to_vec());
}
