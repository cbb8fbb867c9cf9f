//! Russian letter -> Latin replacement mapping.

use crate::core::cyrillic::{fold_lower, is_russian_upper};

/// One classified Russian letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapped {
    /// Letter with a Latin replacement (given in lowercase) and the case of
    /// the source letter.
    Letter { latin: &'static str, upper: bool },
    /// Hard or soft sign (ъ/ь) - no Latin counterpart, dropped from output.
    Sign,
}

impl Mapped {
    /// Replacement text (letters only).
    pub fn latin(&self) -> Option<&'static str> {
        match self {
            Mapped::Letter { latin, .. } => Some(latin),
            Mapped::Sign => None,
        }
    }

    /// Whether the source letter was uppercase (letters only).
    pub fn is_upper(&self) -> bool {
        matches!(self, Mapped::Letter { upper: true, .. })
    }
}

/// Classifies one character of Russian text.
///
/// The scheme is a practical romanization: kh/ts/ch/sh/shch for the
/// fricatives and affricates, yo/yu/ya for the iotated vowels. Characters
/// outside the Russian alphabet (Latin, digits, punctuation, and Cyrillic
/// letters of other repertoires) return `None`.
pub fn map_to_latin(c: char) -> Option<Mapped> {
    let upper = is_russian_upper(c);
    let latin = match fold_lower(c) {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' | 'ь' => return Some(Mapped::Sign),
        'ы' => "y",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(Mapped::Letter { latin, upper })
}

/// Whether `c` is a letter of the Russian alphabet (signs included).
pub fn is_russian_letter(c: char) -> bool {
    map_to_latin(c).is_some()
}
