// Telex engine tests.
//
// Keystroke strings are fed through `Engine::process_str`, which applies
// every `EngineResult` to a simulated text field. Covers tones, modifiers,
// mark placement, undo by repetition, case, backspace and quick telex.

use libtelex::{Engine, EngineResult, MarkStyle, Modifier, TransformationKind};

fn type_telex(input: &str) -> String {
    Engine::new().process_str(input)
}

fn assert_types(input: &str, expected: &str) {
    assert_eq!(type_telex(input), expected, "typing '{}'", input);
}

#[test]
fn tones_on_single_vowel() {
    assert_types("bans", "bán");
    assert_types("banf", "bàn");
    assert_types("banr", "bản");
    assert_types("banx", "bãn");
    assert_types("banj", "bạn");
    assert_types("bansz", "ban");
    assert_types("bansf", "bàn");
}

#[test]
fn qu_and_gi_clusters() {
    assert_types("quas", "quá");
    assert_types("quys", "quý");
    assert_types("gias", "giá");
    assert_types("gis", "gí");
    assert_types("quoocs", "quốc");
}

#[test]
fn modified_vowel_takes_the_mark() {
    assert_types("tieens", "tiến");
    assert_types("cuoons", "cuốn");
    assert_types("nuwowcs", "nước");
    assert_types("dduwowcj", "được");
    assert_types("cuwus", "cứu");
    assert_types("luwus", "lứu");
    assert_types("huwuf", "hừu");
    assert_types("muwur", "mửu");
    assert_types("nguwowif", "người");
    assert_types("ruwowuj", "rượu");
}

#[test]
fn two_and_three_vowel_nuclei() {
    assert_types("hoaf", "hòa");
    assert_types("toans", "toán");
    assert_types("muaf", "mùa");
    assert_types("ngoaif", "ngoài");
    assert_types("khuyeens", "khuyến");
}

#[test]
fn tone_moves_as_word_grows() {
    assert_types("hoafn", "hoàn");
    assert_types("tosan", "toán");
}

#[test]
fn modern_orthography() {
    let mut engine = Engine::new();
    engine.set_mark_style(MarkStyle::Modern);
    assert_eq!(engine.process_str("hoaf "), "hoà ");
    assert_eq!(engine.process_str("thuys "), "thuý ");
    assert_eq!(engine.process_str("muaf"), "mùa");
}

#[test]
fn double_letter_modifiers() {
    assert_types("aa", "â");
    assert_types("ee", "ê");
    assert_types("oo", "ô");
    assert_types("dd", "đ");
    assert_types("aw", "ă");
    assert_types("ow", "ơ");
    assert_types("uw", "ư");
    assert_types("duowcj", "dược");
}

#[test]
fn modifier_replacement() {
    assert_types("aaw", "ă");
    assert_types("awa", "â");
}

#[test]
fn standalone_w_and_brackets() {
    assert_types("w", "ư");
    assert_types("tw", "tư");
    assert_types("[", "ơ");
    assert_types("t]", "tư");
    assert_types("a[", "a[");
}

#[test]
fn circumflex_is_undo_eligible() {
    for v in ['a', 'e', 'o'] {
        let mut engine = Engine::new();
        engine.process_key(0, Some(v), 0);
        let result = engine.process_key(0, Some(v), 0);
        assert!(matches!(result, EngineResult::Replace { backspace_count: 1, .. }));
        let last = engine.input_method_state().last().expect("armed");
        assert_eq!(last.trigger, v);
        assert_eq!(last.kind, TransformationKind::Modifier(Modifier::Circumflex));
    }
}

#[test]
fn undo_by_repetition() {
    assert_types("aaa", "aa");
    assert_types("ddd", "dd");
    assert_types("bass", "bas");
    assert_types("aww", "aw");
    assert_types("oww", "ow");
    assert_types("ww", "w");
}

#[test]
fn disabled_key_does_not_retrigger() {
    assert_types("awww", "aww");
    assert_types("aaaa", "aaa");

    // A different key clears the disable.
    let mut engine = Engine::new();
    engine.set_restore_if_wrong_spelling(false);
    assert_eq!(engine.process_str("awwaw"), "awă");
}

#[test]
fn undo_keeps_every_keystroke() {
    let mut engine = Engine::new();
    assert_eq!(engine.process_str("aww"), "aw");
    assert_eq!(engine.buffer().original_keystrokes(), "aww");

    let mut engine = Engine::new();
    assert_eq!(engine.process_str("caww"), "caw");
    assert_eq!(engine.buffer().original_keystrokes(), "caww");

    // Deleting the literal w drops both w keys.
    assert_eq!(engine.process_str("\u{8}"), "");
    assert_eq!(engine.buffer().original_keystrokes(), "ca");
}

#[test]
fn undo_word_survives_boundary() {
    assert_types("aww ", "aw ");
}

#[test]
fn boundary_clears_disabled_key() {
    let mut engine = Engine::new();
    assert_eq!(engine.process_str("aww "), "aw ");
    assert_eq!(engine.input_method_state().disabled_key(), None);
    assert_eq!(engine.process_str("aw"), "ă");

    assert_types("aww aw", "aw ă");
}

#[test]
fn case_is_preserved() {
    assert_types("DDaays", "Đấy");
    assert_types("VIEETJ", "VIỆT");
    assert_types("{", "Ơ");
    assert_types("}", "Ư");
    assert_types("W", "Ư");
}

#[test]
fn words_are_independent() {
    assert_types("tieengs Vieetj", "tiếng Việt");
    assert_types("xin chaof", "xin chào");
}

#[test]
fn backspace_edits_the_word() {
    assert_types("hoanf\u{8}", "hòa");
    assert_types("tieens\u{8}", "tiế");
    assert_types("tieens\u{8}\u{8}", "ti");
    assert_types("a\u{8}b", "b");
}

#[test]
fn quick_telex_combos() {
    let mut engine = Engine::new();
    engine.set_quick_telex_enabled(true);
    assert_eq!(engine.process_str("cca "), "cha ");
    assert_eq!(engine.process_str("ngge "), "nghe ");
    assert_eq!(engine.process_str("ggaf "), "già ");
    assert_eq!(engine.process_str("kkoong "), "không ");
    assert_eq!(engine.process_str("nnay "), "ngay ");
    assert_eq!(engine.process_str("ppai "), "phai ");
    assert_eq!(engine.process_str("qqas "), "quá ");
    assert_eq!(engine.process_str("ttu "), "thu ");
    // Repeating the key undoes the combo.
    assert_eq!(engine.process_str("ccc"), "cc");
}

#[test]
fn quick_telex_off_by_default() {
    assert_types("cca", "cca");
}

#[test]
fn shortcut_chord_passes_through() {
    let mut engine = Engine::new();
    engine.process_str("ti");
    let command = libtelex::KeyModifiers::COMMAND.bits();
    assert_eq!(engine.process_key(0, Some('s'), command), EngineResult::PassThrough);
    assert!(!engine.is_composing());
}
