//! Quiz generation, answer evaluation and classification.
//!
//! Nothing in here knows about HTTP. The shell in [`crate::handlers`] owns a
//! [`QuizRun`] per visitor and drives it one answer at a time.

pub mod answer;
pub mod classifier;
pub mod color;
pub mod quiz;
pub mod session;

pub use answer::{evaluate, AnswerResult, Choice, ParseChoiceError};
pub use classifier::{Classifier, ScoringRule, Tally, Thresholds, Verdict};
pub use color::{generate_base_color, shift_color, shift_hex, Color, ParseColorError};
pub use quiz::{generate_quiz, shuffle, ColorPair, QuestionKind, QuizItem};
pub use session::QuizRun;
