//! Property-based tests for the typewriter animation machine.
//!
//! The machine is driven purely by `tick()` calls, so these tests run a
//! virtual clock: a test is a tick sequence and the properties are
//! checked after every tick. No timers, no terminal.
//!
//! Properties under test:
//! - The visible text is always a prefix of the current phrase and a
//!   valid char-boundary slice.
//! - Each tick changes the visible length by at most one character.
//! - The returned delay is always one of the three mode delays and
//!   matches the mode just entered.
//! - A full cycle over the phrase list returns to the starting state.

use folio::anim::typewriter::{Mode, Typewriter, DELETE_DELAY, HOLD_DELAY, TYPE_DELAY};
use proptest::prelude::*;

// ===== Arbitrary Strategies =====

/// Strategy for a non-empty phrase, including multibyte text.
fn arb_phrase() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ]{1,20}",
        "[a-zéü東 ]{1,10}",
        Just(String::new()),
    ]
}

/// Strategy for a non-empty phrase list.
fn arb_phrases() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_phrase(), 1..=5)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

proptest! {
    #[test]
    fn visible_is_always_a_prefix_of_the_current_phrase(
        phrases in arb_phrases(),
        ticks in 0usize..200,
    ) {
        let mut tw = Typewriter::new(phrases).unwrap();
        for _ in 0..ticks {
            tw.tick();
            let visible = tw.visible();
            let phrase = tw.current_phrase();
            prop_assert!(
                phrase.starts_with(visible),
                "visible {visible:?} is not a prefix of {phrase:?}"
            );
            prop_assert!(char_len(visible) <= char_len(phrase));
        }
    }

    #[test]
    fn each_tick_changes_visible_length_by_at_most_one(
        phrases in arb_phrases(),
        ticks in 1usize..200,
    ) {
        let mut tw = Typewriter::new(phrases).unwrap();
        let mut prev_len = char_len(tw.visible());
        let mut prev_index = tw.phrase_index();
        for _ in 0..ticks {
            tw.tick();
            let len = char_len(tw.visible());
            if tw.phrase_index() == prev_index {
                let delta = len.abs_diff(prev_len);
                prop_assert!(delta <= 1, "visible length jumped by {delta}");
            } else {
                // Phrase advance only happens at an empty display.
                prop_assert_eq!(len, 0);
            }
            prev_len = len;
            prev_index = tw.phrase_index();
        }
    }

    #[test]
    fn delay_always_matches_the_entered_mode(
        phrases in arb_phrases(),
        ticks in 1usize..200,
    ) {
        let mut tw = Typewriter::new(phrases).unwrap();
        for _ in 0..ticks {
            let delay = tw.tick();
            let expected = match tw.mode() {
                Mode::Typing => TYPE_DELAY,
                Mode::Holding => HOLD_DELAY,
                Mode::Deleting => DELETE_DELAY,
            };
            prop_assert_eq!(delay, expected);
        }
    }

    #[test]
    fn phrase_index_stays_in_bounds_and_advances_in_order(
        phrases in arb_phrases(),
        ticks in 0usize..300,
    ) {
        let count = phrases.len();
        let mut tw = Typewriter::new(phrases).unwrap();
        let mut prev = tw.phrase_index();
        for _ in 0..ticks {
            tw.tick();
            let index = tw.phrase_index();
            prop_assert!(index < count);
            prop_assert!(
                index == prev || index == (prev + 1) % count,
                "index {index} does not follow {prev}"
            );
            prev = index;
        }
    }

    #[test]
    fn full_cycle_returns_to_initial_state(phrases in arb_phrases()) {
        let mut tw = Typewriter::new(phrases.clone()).unwrap();
        // One cycle per phrase: chars(p) ticks to type (min 1 for the
        // empty phrase, which holds immediately), 1 hold transition,
        // chars(p) ticks to delete (min 1 to leave Deleting).
        let cycle_ticks: usize = phrases
            .iter()
            .map(|p| 2 * char_len(p).max(1) + 1)
            .sum();
        for _ in 0..cycle_ticks {
            tw.tick();
        }
        prop_assert_eq!(tw.phrase_index(), 0);
        prop_assert_eq!(tw.mode(), Mode::Typing);
        prop_assert_eq!(tw.visible(), "");
    }

    #[test]
    fn hold_is_scheduled_exactly_once_per_phrase_cycle(
        phrase in "[a-z]{1,10}",
    ) {
        let mut tw = Typewriter::new(vec![phrase.clone()]).unwrap();
        let cycle_ticks = 2 * phrase.len() + 1;
        let mut holds = 0;
        for _ in 0..cycle_ticks {
            if tw.tick() == HOLD_DELAY {
                holds += 1;
            }
        }
        prop_assert_eq!(holds, 1);
        prop_assert_eq!(tw.mode(), Mode::Typing);
    }
}
