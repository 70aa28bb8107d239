//! Property-based invariant tests for the segmented code input.
//!
//! Verifies:
//! 1. The aggregate value never exceeds the box count, under any event mix
//! 2. The active index stays inside `[0, len-1]` once a box is focused
//! 3. In numeric mode the value is all ASCII digits after any event mix
//! 4. Typing N accepted characters into N boxes yields a value of length N
//! 5. Paste never mutates boxes before the active index
//! 6. Paste truncates to exactly the remaining box count
//! 7. A disabled input never changes state
//! 8. `handle_event` returns false iff observable state is unchanged

use otpui_core::event::{Event, KeyCode, KeyEvent, PasteEvent};
use otpui_widgets::{OtpInput, OtpMode};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_key_code() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        prop::char::range('0', '9').prop_map(KeyCode::Char),
        prop::char::range('a', 'z').prop_map(KeyCode::Char),
        Just(KeyCode::Backspace),
        Just(KeyCode::Delete),
        Just(KeyCode::Left),
        Just(KeyCode::Right),
        Just(KeyCode::Home),
        Just(KeyCode::End),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => arb_key_code().prop_map(|code| Event::Key(KeyEvent::new(code))),
        1 => "[0-9a-z]{0,10}".prop_map(|text| Event::Paste(PasteEvent::bracketed(text))),
    ]
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(arb_event(), 0..64)
}

fn observable(input: &OtpInput) -> (String, Option<usize>) {
    (input.value(), input.active())
}

// ── Properties ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn value_never_exceeds_box_count(len in 1usize..9, events in arb_events()) {
        let mut input = OtpInput::new(len).with_autofocus(true);
        for event in &events {
            input.handle_event(event);
            prop_assert!(input.value().chars().count() <= len);
        }
    }

    #[test]
    fn active_index_stays_in_bounds(len in 1usize..9, events in arb_events()) {
        let mut input = OtpInput::new(len).with_autofocus(true);
        for event in &events {
            input.handle_event(event);
            let active = input.active();
            prop_assert!(active.is_some_and(|i| i < len), "active = {active:?}");
        }
    }

    #[test]
    fn numeric_mode_value_is_all_digits(len in 1usize..9, events in arb_events()) {
        let mut input = OtpInput::new(len)
            .with_mode(OtpMode::Numeric)
            .with_autofocus(true);
        for event in &events {
            input.handle_event(event);
            prop_assert!(input.value().chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn typing_fills_every_box(len in 1usize..9, seed in "[0-9]{16}") {
        let mut input = OtpInput::new(len).with_autofocus(true);
        for c in seed.chars().take(len) {
            input.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char(c))));
        }
        prop_assert_eq!(input.value().chars().count(), len);
        prop_assert!(input.is_complete());
    }

    #[test]
    fn paste_leaves_earlier_boxes_untouched(
        len in 2usize..9,
        start_frac in 0usize..8,
        text in "[0-9a-z]{1,16}",
    ) {
        let mut input = OtpInput::new(len).with_autofocus(true);
        for i in 0..len {
            let c = char::from(b'0' + (i % 10) as u8);
            input.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char(c))));
        }
        let start = start_frac % len;
        input.focus_box(start);

        let before: Vec<Option<char>> = (0..start).map(|i| input.char_at(i)).collect();
        input.handle_event(&Event::Paste(PasteEvent::bracketed(text)));
        let after: Vec<Option<char>> = (0..start).map(|i| input.char_at(i)).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn paste_truncates_to_remaining(
        len in 1usize..9,
        start_frac in 0usize..8,
        text in "[0-9a-z]{1,32}",
    ) {
        let mut input = OtpInput::new(len).with_autofocus(true);
        let start = start_frac % len;
        input.focus_box(start);
        input.handle_event(&Event::Paste(PasteEvent::bracketed(text.clone())));

        let distributed = text.chars().count().min(len - start);
        for i in 0..len {
            let expected = if i >= start && i < start + distributed {
                text.chars().nth(i - start)
            } else {
                None
            };
            prop_assert_eq!(input.char_at(i), expected, "box {}", i);
        }
    }

    #[test]
    fn disabled_input_is_inert(events in arb_events()) {
        let mut input = OtpInput::new(4)
            .with_value("12")
            .with_autofocus(true)
            .with_disabled(true);
        let before = observable(&input);
        for event in &events {
            prop_assert!(!input.handle_event(event));
            prop_assert_eq!(observable(&input), before.clone());
        }
    }

    #[test]
    fn change_signal_matches_observable_state(len in 1usize..9, events in arb_events()) {
        let mut input = OtpInput::new(len).with_autofocus(true);
        for event in &events {
            let before = observable(&input);
            let changed = input.handle_event(event);
            prop_assert_eq!(changed, observable(&input) != before, "event {:?}", event);
        }
    }
}
