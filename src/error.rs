//! Error types shared by the driver and the conversion engine.

use std::fmt;

#[derive(Debug)]
pub enum TranslitError {
    Io(std::io::Error),

    UnsupportedLanguagePair { source: String, target: String },

    UnmappableInput { ch: char, offset: usize },
}

impl fmt::Display for TranslitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslitError::Io(e) => write!(f, "stream error: {e}"),
            TranslitError::UnsupportedLanguagePair { source, target } => {
                write!(f, "unsupported language pair: {source} -> {target}")
            }
            TranslitError::UnmappableInput { ch, offset } => {
                write!(f, "unmappable character '{ch}' at offset {offset}")
            }
        }
    }
}

impl std::error::Error for TranslitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslitError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TranslitError {
    fn from(e: std::io::Error) -> Self {
        TranslitError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, TranslitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unsupported_pair() {
        let err = TranslitError::UnsupportedLanguagePair {
            source: "ru".to_string(),
            target: "de".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported language pair: ru -> de");
    }

    #[test]
    fn test_display_unmappable() {
        let err = TranslitError::UnmappableInput { ch: 'ї', offset: 4 };
        assert_eq!(err.to_string(), "unmappable character 'ї' at offset 4");
    }
}
