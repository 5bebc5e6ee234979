use std::fmt;
use std::str::FromStr;

use super::color::Color;
use super::quiz::{QuestionKind, QuizItem};

/// The two buttons a visitor can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Same,
    Different,
}

impl Choice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::Different => "different",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChoiceError(String);

impl fmt::Display for ParseChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected \"same\" or \"different\", got {:?}", self.0)
    }
}

impl std::error::Error for ParseChoiceError {}

impl FromStr for Choice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "same" => Ok(Self::Same),
            "different" => Ok(Self::Different),
            other => Err(ParseChoiceError(other.to_string())),
        }
    }
}

/// Whether `choice` is the right call for a question of `kind`.
pub fn evaluate(kind: QuestionKind, choice: Choice) -> bool {
    matches!(
        (kind, choice),
        (QuestionKind::Same, Choice::Same)
            | (QuestionKind::Different, Choice::Different)
            | (QuestionKind::Distinguished, Choice::Different)
    )
}

/// One answered question. Never changed once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerResult {
    pub correct: bool,
    pub color1: Color,
    pub color2: Color,
    pub kind: QuestionKind,
    pub choice: Choice,
}

impl AnswerResult {
    pub fn new(item: &QuizItem, choice: Choice) -> Self {
        Self {
            correct: evaluate(item.kind, choice),
            color1: item.colors.color1,
            color2: item.colors.color2,
            kind: item.kind,
            choice,
        }
    }
}
