//! Language pack registry.
//!
//! A pack implements [`LanguagePack`] for one `(source, target)` code pair;
//! [`transliterate`] picks the pack matching the requested pair. Only the
//! Russian -> Latin pack is installed.

mod pack;
mod russian;

pub use pack::LanguagePack;
pub use russian::RussianToLatin;

use std::sync::LazyLock;

use crate::error::{Result, TranslitError};

/// Installed packs. Lookup is exact-match on the code pair.
static PACKS: LazyLock<Vec<Box<dyn LanguagePack>>> =
    LazyLock::new(|| vec![Box::new(RussianToLatin)]);

/// Transliterates `text` from the `source` script to the `target` script.
pub fn transliterate(text: &str, source: &str, target: &str) -> Result<String> {
    let pack = PACKS
        .iter()
        .find(|p| p.source_code() == source && p.target_code() == target)
        .ok_or_else(|| TranslitError::UnsupportedLanguagePair {
            source: source.to_string(),
            target: target.to_string(),
        })?;

    log::debug!(
        "transliterating {} chars ({} -> {})",
        text.chars().count(),
        source,
        target
    );
    pack.transform(text)
}
