// Simple Telex tests.
//
// Same keystroke simulation as the Telex tests, with the engine switched
// to "simple-telex": `w` needs a vowel to decorate and brackets are plain.

use libtelex::{Engine, InputMethodKind};

fn simple_engine() -> Engine {
    let mut engine = Engine::new();
    engine
        .set_input_method("simple-telex")
        .expect("simple-telex is registered");
    engine
}

fn assert_types(input: &str, expected: &str) {
    assert_eq!(simple_engine().process_str(input), expected, "typing '{}'", input);
}

#[test]
fn registry_lookup() {
    assert_eq!(simple_engine().input_method(), InputMethodKind::SimpleTelex);
    assert_eq!(simple_engine().input_method().name(), "Simple Telex");
}

#[test]
fn w_decorates_preceding_vowel() {
    assert_types("ow", "ơ");
    assert_types("uw", "ư");
    assert_types("aw", "ă");
    assert_types("OW", "Ơ");
    assert_types("tuow", "tươ");
}

#[test]
fn w_alone_stays_literal() {
    assert_types("w", "w");
    assert_types("tw", "tw");
    assert_types("W", "W");
}

#[test]
fn brackets_stay_literal() {
    assert_types("[", "[");
    assert_types("t[", "t[");
    assert_types("{", "{");
}

#[test]
fn repeated_w_undoes() {
    assert_types("aww", "aw");
    assert_types("oww", "ow");
    assert_types("awww", "aww");
}

#[test]
fn other_keys_follow_telex() {
    assert_types("bans", "bán");
    assert_types("tieens", "tiến");
    assert_types("dd", "đ");
    assert_types("awa", "â");
    assert_types("nguwowif", "người");
    assert_types("bass", "bas");
}

#[test]
fn switching_back_to_telex() {
    let mut engine = simple_engine();
    assert_eq!(engine.process_str("w "), "w ");
    engine.set_input_method("telex").unwrap();
    assert_eq!(engine.process_str("w"), "ư");
}
