// Restore-on-invalid tests.
//
// When a transformation (or a word boundary) leaves something that is not a
// legal Vietnamese syllable, the engine swaps the word back to the keys as
// typed. Bare consonant clusters are incomplete, not invalid.

use libtelex::{Engine, EngineResult};

fn type_telex(input: &str) -> String {
    Engine::new().process_str(input)
}

#[test]
fn tone_on_sharp_ending_is_restored() {
    assert_eq!(type_telex("hocf"), "hocf");
    assert_eq!(type_telex("hocj"), "học");
    assert_eq!(type_telex("hocs"), "hóc");
}

#[test]
fn restore_replaces_the_whole_word() {
    let mut engine = Engine::new();
    engine.process_str("hoc");
    assert_eq!(
        engine.process_key(0, Some('f'), 0),
        EngineResult::Replace {
            backspace_count: 3,
            replacement: "hocf".to_string()
        }
    );
    // The restored word keeps composing literally.
    assert_eq!(engine.buffer().render(), "hocf");
    assert!(engine.input_method_state().last().is_none());
}

#[test]
fn invalid_initial_is_restored() {
    assert_eq!(type_telex("fas"), "fas");
    assert_eq!(type_telex("was"), "ứa");
}

#[test]
fn restore_after_undo_replays_all_keys() {
    assert_eq!(type_telex("cawws"), "cawws");

    let mut engine = Engine::new();
    engine.process_str("caww");
    assert_eq!(
        engine.process_key(0, Some('s'), 0),
        EngineResult::Replace {
            backspace_count: 3,
            replacement: "cawws".to_string()
        }
    );
}

#[test]
fn open_nucleus_with_final_is_restored() {
    assert_eq!(type_telex("bains"), "bains");
}

#[test]
fn invalid_word_restored_at_boundary() {
    assert_eq!(type_telex("case "), "case ");
    assert_eq!(type_telex("case."), "case.");
}

#[test]
fn valid_words_are_kept() {
    assert_eq!(type_telex("vieetj "), "việt ");
    assert_eq!(type_telex("nguwowif "), "người ");
    assert_eq!(type_telex("khoong "), "không ");
}

#[test]
fn incomplete_cluster_is_not_restored() {
    assert_eq!(type_telex("dd "), "đ ");
    assert_eq!(type_telex("th "), "th ");
}

#[test]
fn restore_disabled_keeps_composition() {
    let mut engine = Engine::new();
    engine.set_restore_if_wrong_spelling(false);
    assert_eq!(engine.process_str("hocf "), "hòc ");
}

#[test]
fn spell_check_disabled_keeps_composition() {
    let mut engine = Engine::new();
    engine.set_spell_check_enabled(false);
    assert_eq!(engine.process_str("hocf"), "hòc");
    assert_eq!(engine.process_str(" case "), " cáe ");
}
