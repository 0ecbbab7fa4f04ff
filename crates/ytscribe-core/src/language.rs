//! Target languages offered by the console.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Language the transcript should be translated into, or auto-detect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TargetLanguage {
    /// No translation requested
    #[default]
    Auto,
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Dutch,
    Polish,
    Russian,
    Japanese,
    Korean,
    Chinese,
}

/// Returned when parsing a code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code: {0}")]
pub struct UnknownLanguage(pub String);

impl TargetLanguage {
    /// Every option, in the order the selector lists them.
    pub const ALL: [TargetLanguage; 13] = [
        Self::Auto,
        Self::English,
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Italian,
        Self::Portuguese,
        Self::Dutch,
        Self::Polish,
        Self::Russian,
        Self::Japanese,
        Self::Korean,
        Self::Chinese,
    ];

    /// Selector value: an ISO 639-1 code, or `"auto"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Italian => "it",
            Self::Portuguese => "pt",
            Self::Dutch => "nl",
            Self::Polish => "pl",
            Self::Russian => "ru",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Chinese => "zh",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Auto => "Auto-detect",
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Italian => "Italian",
            Self::Portuguese => "Portuguese",
            Self::Dutch => "Dutch",
            Self::Polish => "Polish",
            Self::Russian => "Russian",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Chinese => "Chinese",
        }
    }

    /// Value sent as `source_language`: `None` for auto-detect.
    pub fn source_language(&self) -> Option<&'static str> {
        match self {
            Self::Auto => None,
            other => Some(other.code()),
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TargetLanguage {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .ok_or_else(|| UnknownLanguage(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("auto".parse(), Ok(TargetLanguage::Auto));
        assert_eq!("es".parse(), Ok(TargetLanguage::Spanish));
        assert_eq!(" ZH ".parse(), Ok(TargetLanguage::Chinese));
        assert_eq!(
            "xx".parse::<TargetLanguage>(),
            Err(UnknownLanguage("xx".to_string()))
        );
    }

    #[test]
    fn test_source_language() {
        assert_eq!(TargetLanguage::Auto.source_language(), None);
        assert_eq!(TargetLanguage::Spanish.source_language(), Some("es"));
        assert_eq!(TargetLanguage::English.source_language(), Some("en"));
    }

    #[test]
    fn test_selector_order_starts_with_auto() {
        assert_eq!(TargetLanguage::ALL[0], TargetLanguage::default());
        assert_eq!(TargetLanguage::ALL.len(), 13);
        assert!(TargetLanguage::ALL.iter().all(|l| l.code().parse() == Ok(*l)));
    }
}
