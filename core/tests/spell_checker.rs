// Spell checker tests.
//
// Exercises the three-valued result against initial consonants, vowel
// combinations, final consonants and the sharp-ending tone rule.

use libvietnamese_core::{DefaultSpellChecker, SpellCheckResult, SpellChecker};

fn check(word: &str) -> SpellCheckResult {
    DefaultSpellChecker::new().check(word)
}

#[test]
fn valid_words() {
    for word in [
        "a", "ái", "ơi", "ư", "ba", "bán", "tiến", "cuốn", "nước", "được", "cứu", "quá",
        "quý", "giá", "gí", "già", "giếng", "giết", "khuya", "ngoài", "người", "nghiêng",
        "nghĩa", "đường", "đẹp", "thoong", "hoàn", "toán", "rượu", "kêu", "gìn",
    ] {
        assert_eq!(check(word), SpellCheckResult::Valid, "{}", word);
    }
}

#[test]
fn empty_word_is_invalid() {
    assert!(check("").is_invalid());
}

#[test]
fn consonant_only_is_unknown() {
    for word in ["th", "ngh", "đ", "qu", "b"] {
        assert_eq!(check(word), SpellCheckResult::Unknown, "{}", word);
    }
}

#[test]
fn invalid_initial_consonants() {
    for word in ["fa", "ja", "wa", "za", "bha", "dla", "kka"] {
        assert!(check(word).is_invalid(), "{}", word);
    }
    assert_eq!(
        check("fa"),
        SpellCheckResult::Invalid {
            reason: "Invalid initial consonant: f".to_string()
        }
    );
}

#[test]
fn invalid_final_consonants() {
    for ending in ["b", "d", "g", "h", "k", "l", "r", "s", "v", "x", "tr"] {
        let word = format!("ba{}", ending);
        assert!(check(&word).is_invalid(), "{}", word);
    }
}

#[test]
fn ending_not_allowed_after_open_nucleus() {
    assert_eq!(
        check("bain"),
        SpellCheckResult::Invalid {
            reason: "Vowel 'ai' cannot have ending consonant".to_string()
        }
    );
    assert!(check("kêun").is_invalid());
}

#[test]
fn sharp_endings() {
    for ending in ["c", "ch", "p", "t"] {
        for (vowel, ok) in [
            ("a", true),
            ("á", true),
            ("ạ", true),
            ("à", false),
            ("ả", false),
            ("ã", false),
        ] {
            let word = format!("b{}{}", vowel, ending);
            assert_eq!(check(&word).is_valid(), ok, "{}", word);
        }
    }
    assert!(check("bác").is_valid());
    assert!(check("bạc").is_valid());
    assert_eq!(
        check("bàc"),
        SpellCheckResult::Invalid {
            reason: "Invalid tone with sharp ending".to_string()
        }
    );
}

#[test]
fn invalid_vowel_combinations() {
    for word in ["bae", "tuoa", "hiy", "case"] {
        assert!(check(word).is_invalid(), "{}", word);
    }
}

#[test]
fn check_is_idempotent() {
    for word in ["tiến", "bàc", "th", "case"] {
        assert_eq!(check(word), check(word), "{}", word);
    }
}
