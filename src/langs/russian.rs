//! Russian -> Latin language pack.

use crate::core::converter::convert;
use crate::error::Result;
use crate::langs::pack::LanguagePack;

/// Practical romanization of Russian (kh/ts/ch/sh/shch, yo/yu/ya).
pub struct RussianToLatin;

impl LanguagePack for RussianToLatin {
    fn source_code(&self) -> &'static str {
        "ru"
    }

    fn target_code(&self) -> &'static str {
        "en"
    }

    fn transform(&self, text: &str) -> Result<String> {
        convert(text)
    }
}
