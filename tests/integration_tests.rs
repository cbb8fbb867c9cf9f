//! Integration tests - public transliteration API.

use cyrlat::{transliterate, TranslitError};

#[test]
fn test_basic_words() {
    assert_eq!(transliterate("привет", "ru", "en").unwrap(), "privet");
    assert_eq!(transliterate("мир", "ru", "en").unwrap(), "mir");
    assert_eq!(transliterate("спасибо", "ru", "en").unwrap(), "spasibo");
}

#[test]
fn test_capitalization_preserved() {
    assert_eq!(transliterate("Москва", "ru", "en").unwrap(), "Moskva");
    assert_eq!(
        transliterate("Санкт-Петербург", "ru", "en").unwrap(),
        "Sankt-Peterburg"
    );
}

#[test]
fn test_digraph_letters() {
    assert_eq!(transliterate("жизнь", "ru", "en").unwrap(), "zhizn");
    assert_eq!(transliterate("чашка", "ru", "en").unwrap(), "chashka");
    assert_eq!(transliterate("щука", "ru", "en").unwrap(), "shchuka");
    assert_eq!(transliterate("хлеб", "ru", "en").unwrap(), "khleb");
    assert_eq!(transliterate("царь", "ru", "en").unwrap(), "tsar");
}

#[test]
fn test_iotated_vowels() {
    assert_eq!(transliterate("ёлка", "ru", "en").unwrap(), "yolka");
    assert_eq!(transliterate("юбка", "ru", "en").unwrap(), "yubka");
    assert_eq!(transliterate("яблоко", "ru", "en").unwrap(), "yabloko");
}

#[test]
fn test_uppercase_runs() {
    assert_eq!(transliterate("ШУМ", "ru", "en").unwrap(), "SHUM");
    assert_eq!(transliterate("Шум", "ru", "en").unwrap(), "Shum");
    assert_eq!(transliterate("БОРЩ", "ru", "en").unwrap(), "BORSHCH");
}

#[test]
fn test_signs_elided() {
    assert_eq!(transliterate("объём", "ru", "en").unwrap(), "obyom");
    assert_eq!(transliterate("подъезд", "ru", "en").unwrap(), "podezd");
}

#[test]
fn test_mixed_scripts() {
    assert_eq!(transliterate("hello мир", "ru", "en").unwrap(), "hello mir");
    assert_eq!(
        transliterate("git commit -m 'правка'", "ru", "en").unwrap(),
        "git commit -m 'pravka'"
    );
}

#[test]
fn test_ascii_identity() {
    assert_eq!(
        transliterate("nothing to do here", "ru", "en").unwrap(),
        "nothing to do here"
    );
    assert_eq!(transliterate("12:34, ok?", "ru", "en").unwrap(), "12:34, ok?");
}

#[test]
fn test_empty_input() {
    assert_eq!(transliterate("", "ru", "en").unwrap(), "");
}

#[test]
fn test_multiline_text() {
    assert_eq!(
        transliterate("раз\nдва\nтри\n", "ru", "en").unwrap(),
        "raz\ndva\ntri\n"
    );
}

#[test]
fn test_deterministic() {
    let input = "Съешь же ещё этих мягких булок";
    let first = transliterate(input, "ru", "en").unwrap();
    let second = transliterate(input, "ru", "en").unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "Sesh zhe eshchyo etikh myagkikh bulok");
}

#[test]
fn test_unsupported_pair() {
    assert!(matches!(
        transliterate("привет", "ru", "de"),
        Err(TranslitError::UnsupportedLanguagePair { .. })
    ));
    assert!(matches!(
        transliterate("привіт", "uk", "en"),
        Err(TranslitError::UnsupportedLanguagePair { .. })
    ));
}

#[test]
fn test_unmappable_input() {
    let err = transliterate("Київ", "ru", "en").unwrap_err();
    match err {
        TranslitError::UnmappableInput { ch, offset } => {
            assert_eq!(ch, 'ї');
            assert_eq!(offset, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
