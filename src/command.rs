//! Line commands understood by the terminal console.

use std::str::FromStr;

use thiserror::Error;
use ytscribe_core::{TargetLanguage, UnknownLanguage};

use crate::console::ResultSection;

/// Help text for the console prompt.
pub const HELP: &str = "\
commands:
  transcribe <url> [language]   submit a video (alias: t)
  language <code>               select the target language
  languages                     list target languages
  toggle english|original       expand or collapse a result section
  show                          redraw the screen
  help                          show this help
  quit                          exit";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Transcribe {
        url: String,
        language: Option<TargetLanguage>,
    },
    Language(TargetLanguage),
    Languages,
    Toggle(ResultSection),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("no command given")]
    Empty,

    #[error("unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Language(#[from] UnknownLanguage),
}

impl FromStr for ConsoleCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match (name.to_lowercase().as_str(), args.as_slice()) {
            ("transcribe" | "t", [url]) => Ok(Self::Transcribe {
                url: url.to_string(),
                language: None,
            }),
            ("transcribe" | "t", [url, code]) => Ok(Self::Transcribe {
                url: url.to_string(),
                language: Some(code.parse()?),
            }),
            ("transcribe" | "t", _) => Err(CommandError::Usage("transcribe <url> [language]")),
            ("language" | "lang", [code]) => Ok(Self::Language(code.parse()?)),
            ("language" | "lang", _) => Err(CommandError::Usage("language <code>")),
            ("languages", []) => Ok(Self::Languages),
            ("toggle", [section]) => match section.to_lowercase().as_str() {
                "english" | "en" => Ok(Self::Toggle(ResultSection::English)),
                "original" | "orig" => Ok(Self::Toggle(ResultSection::Original)),
                _ => Err(CommandError::Usage("toggle english|original")),
            },
            ("toggle", _) => Err(CommandError::Usage("toggle english|original")),
            ("show", []) => Ok(Self::Show),
            ("help" | "?", []) => Ok(Self::Help),
            ("quit" | "exit" | "q", []) => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcribe() {
        assert_eq!(
            "transcribe https://youtu.be/x".parse(),
            Ok(ConsoleCommand::Transcribe {
                url: "https://youtu.be/x".to_string(),
                language: None,
            })
        );
        assert_eq!(
            "t https://youtu.be/x es".parse(),
            Ok(ConsoleCommand::Transcribe {
                url: "https://youtu.be/x".to_string(),
                language: Some(TargetLanguage::Spanish),
            })
        );
        assert_eq!(
            "transcribe".parse::<ConsoleCommand>(),
            Err(CommandError::Usage("transcribe <url> [language]"))
        );
    }

    #[test]
    fn test_language() {
        assert_eq!(
            "language auto".parse(),
            Ok(ConsoleCommand::Language(TargetLanguage::Auto))
        );
        assert_eq!(
            "lang xx".parse::<ConsoleCommand>(),
            Err(CommandError::Language(UnknownLanguage("xx".to_string())))
        );
    }

    #[test]
    fn test_toggle() {
        assert_eq!(
            "toggle English".parse(),
            Ok(ConsoleCommand::Toggle(ResultSection::English))
        );
        assert_eq!(
            "toggle original".parse(),
            Ok(ConsoleCommand::Toggle(ResultSection::Original))
        );
        assert!("toggle both".parse::<ConsoleCommand>().is_err());
    }

    #[test]
    fn test_misc() {
        assert_eq!("  ".parse::<ConsoleCommand>(), Err(CommandError::Empty));
        assert_eq!("QUIT".parse(), Ok(ConsoleCommand::Quit));
        assert_eq!(
            "dance".parse::<ConsoleCommand>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
