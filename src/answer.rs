//! Turning the model's free-form answer into a boolean.

use std::fmt;
use std::str::FromStr;

use crate::error::{LookupError, LookupResult};

/// Rule used to read `choices[0].text` as "word exists".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerPolicy {
    /// `true` whenever the text contains the substring `"true"` anywhere.
    /// Case sensitive and untrimmed, so `"this is not true at all"` counts as
    /// `true` and `"TRUE"` does not.
    #[default]
    Substring,
    /// Trimmed, lowercased text must be exactly `true` or `false`.
    Strict,
}

impl AnswerPolicy {
    pub fn interpret(self, text: &str) -> LookupResult<bool> {
        match self {
            Self::Substring => Ok(text.contains("true")),
            Self::Strict => match text.trim().to_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(LookupError::AmbiguousAnswer(text.to_string())),
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for AnswerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown answer policy '{other}' (expected 'substring' or 'strict')"
            )),
        }
    }
}
