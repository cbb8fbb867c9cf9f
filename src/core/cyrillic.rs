//! Cyrillic codepoint utilities.

/// First codepoint of the uppercase run (А).
const UPPER_BASE: u32 = 0x0410;
/// First codepoint of the lowercase run (а).
const LOWER_BASE: u32 = 0x0430;
/// Letters per case run (а..я, ё excluded).
const RUN_LEN: u32 = 32;

/// Ё / ё sit outside the contiguous runs.
const UPPER_IO: u32 = 0x0401;
const LOWER_IO: u32 = 0x0451;

/// Whether `c` falls in the Cyrillic or Cyrillic Supplement block.
pub fn is_cyrillic(c: char) -> bool {
    matches!(c as u32, 0x0400..=0x04FF | 0x0500..=0x052F)
}

/// Whether `c` is an uppercase letter of the Russian alphabet.
pub fn is_russian_upper(c: char) -> bool {
    let code = c as u32;
    code == UPPER_IO || (UPPER_BASE..UPPER_BASE + RUN_LEN).contains(&code)
}

/// Folds an uppercase Russian letter to lowercase by codepoint offset.
/// Anything else comes back unchanged.
pub fn fold_lower(c: char) -> char {
    let code = c as u32;
    if code == UPPER_IO {
        '\u{0451}' // ё
    } else if (UPPER_BASE..UPPER_BASE + RUN_LEN).contains(&code) {
        char::from_u32(code + (LOWER_BASE - UPPER_BASE)).unwrap_or(c)
    } else {
        c
    }
}
