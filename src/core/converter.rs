//! Russian -> Latin stream converter.

use crate::core::caser::CaseResolver;
use crate::core::cyrillic::is_cyrillic;
use crate::core::mapper::{map_to_latin, Mapped};
use crate::error::{Result, TranslitError};

/// Converts Russian text to its Latin rendering.
///
/// Non-Cyrillic characters (Latin, digits, punctuation, whitespace) are
/// kept as-is. A Cyrillic character with no entry in the Russian table is
/// rejected with [`TranslitError::UnmappableInput`]; the offset reported is
/// the character index, not the byte index.
pub fn convert(input: &str) -> Result<String> {
    let mut caser = CaseResolver::new();

    for (offset, c) in input.chars().enumerate() {
        match map_to_latin(c) {
            Some(Mapped::Letter { latin, upper }) => caser.feed(latin, upper),
            Some(Mapped::Sign) => caser.feed_sign(),
            None if is_cyrillic(c) => {
                return Err(TranslitError::UnmappableInput { ch: c, offset });
            }
            None => caser.feed_passthrough(c),
        }
    }

    Ok(caser.finish())
}
