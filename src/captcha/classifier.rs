//! Turns a finished run into a verdict.
//!
//! Two running totals are kept: `score` counts answers that show the visitor
//! can see the difference, `human_signal` goes down for answers a person
//! rarely gives. A low `human_signal` wins over a high `score`.

use super::answer::AnswerResult;
use super::quiz::QuestionKind;

/// `human_signal` strictly below this is a bot. One slip is tolerated.
pub const BOT_THRESHOLD: i32 = -1;

/// `score` needed to pass with [`STANDARD_TEMPLATE`](super::quiz::STANDARD_TEMPLATE):
/// all four shifted pairs spotted.
pub const PASS_THRESHOLD: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Bot,
    HumanPass,
    HumanFail,
}

/// Which answers on control (`Same`) questions count against the visitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ScoringRule {
    /// Calling two identical swatches "different" is suspicious. `Same`
    /// questions never add to `score`.
    #[default]
    SameMissIsSuspect,
    /// Calling two identical swatches "same" is suspicious; a person is
    /// expected to second-guess them after the shifted pairs.
    SameHitIsSuspect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub bot: i32,
    pub pass: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            bot: BOT_THRESHOLD,
            pass: PASS_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub score: i32,
    pub human_signal: i32,
}

impl Tally {
    pub fn record(&mut self, rule: ScoringRule, result: &AnswerResult) {
        match (result.kind, result.correct) {
            (QuestionKind::Distinguished, false) => self.human_signal -= 1,
            (QuestionKind::Same, correct) => match rule {
                ScoringRule::SameMissIsSuspect if !correct => self.human_signal -= 1,
                ScoringRule::SameHitIsSuspect if correct => self.human_signal -= 1,
                _ => {}
            },
            (_, true) => self.score += 1,
            (_, false) => {}
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    pub rule: ScoringRule,
    pub thresholds: Thresholds,
}

impl Classifier {
    pub fn new(rule: ScoringRule, thresholds: Thresholds) -> Self {
        Self { rule, thresholds }
    }

    pub fn tally(&self, results: &[AnswerResult]) -> Tally {
        results.iter().fold(Tally::default(), |mut tally, result| {
            tally.record(self.rule, result);
            tally
        })
    }

    pub fn classify(&self, results: &[AnswerResult]) -> Verdict {
        let tally = self.tally(results);

        if tally.human_signal < self.thresholds.bot {
            Verdict::Bot
        } else if tally.score >= self.thresholds.pass {
            Verdict::HumanPass
        } else {
            Verdict::HumanFail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::captcha::answer::Choice;
    use crate::captcha::color::Color;

    fn answer(kind: QuestionKind, correct: bool) -> AnswerResult {
        let choice = if (kind == QuestionKind::Same) == correct {
            Choice::Same
        } else {
            Choice::Different
        };
        AnswerResult {
            correct,
            color1: Color::gray(0x22),
            color2: Color::gray(0x22),
            kind,
            choice,
        }
    }

    #[test]
    fn empty_run_fails_without_being_a_bot() {
        let classifier = Classifier::default();
        assert_eq!(classifier.tally(&[]), Tally::default());
        assert_eq!(classifier.classify(&[]), Verdict::HumanFail);
    }

    #[test]
    fn spotting_every_shift_passes() {
        let results = [
            answer(QuestionKind::Same, true),
            answer(QuestionKind::Distinguished, true),
            answer(QuestionKind::Same, true),
            answer(QuestionKind::Distinguished, true),
            answer(QuestionKind::Distinguished, true),
            answer(QuestionKind::Distinguished, true),
        ];

        let classifier = Classifier::default();
        assert_eq!(
            classifier.tally(&results),
            Tally {
                score: 4,
                human_signal: 0
            }
        );
        assert_eq!(classifier.classify(&results), Verdict::HumanPass);
    }

    #[test]
    fn missing_every_shift_is_a_bot() {
        let results = [
            answer(QuestionKind::Same, true),
            answer(QuestionKind::Same, true),
            answer(QuestionKind::Distinguished, false),
            answer(QuestionKind::Distinguished, false),
            answer(QuestionKind::Distinguished, false),
            answer(QuestionKind::Distinguished, false),
        ];

        let classifier = Classifier::default();
        assert_eq!(classifier.tally(&results).human_signal, -4);
        assert_eq!(classifier.classify(&results), Verdict::Bot);
    }

    #[test]
    fn a_single_slip_is_tolerated() {
        let results = [
            answer(QuestionKind::Same, false),
            answer(QuestionKind::Distinguished, true),
            answer(QuestionKind::Distinguished, true),
            answer(QuestionKind::Distinguished, true),
            answer(QuestionKind::Distinguished, true),
        ];

        assert_eq!(Classifier::default().classify(&results), Verdict::HumanPass);
    }

    #[test]
    fn too_few_spotted_shifts_fail() {
        let results = [
            answer(QuestionKind::Same, true),
            answer(QuestionKind::Distinguished, true),
            answer(QuestionKind::Distinguished, true),
            answer(QuestionKind::Distinguished, false),
        ];

        assert_eq!(Classifier::default().classify(&results), Verdict::HumanFail);
    }

    #[test]
    fn different_answers_only_add_score() {
        let results = [
            answer(QuestionKind::Different, true),
            answer(QuestionKind::Different, false),
        ];

        assert_eq!(
            Classifier::default().tally(&results),
            Tally {
                score: 1,
                human_signal: 0
            }
        );
    }

    #[test]
    fn same_hit_rule_penalizes_correct_controls() {
        let classifier = Classifier::new(ScoringRule::SameHitIsSuspect, Thresholds::default());
        let results = [
            answer(QuestionKind::Same, true),
            answer(QuestionKind::Same, true),
            answer(QuestionKind::Distinguished, true),
            answer(QuestionKind::Distinguished, true),
            answer(QuestionKind::Distinguished, true),
            answer(QuestionKind::Distinguished, true),
        ];

        assert_eq!(
            classifier.tally(&results),
            Tally {
                score: 4,
                human_signal: -2
            }
        );
        assert_eq!(classifier.classify(&results), Verdict::Bot);
    }

    #[test]
    fn same_hit_rule_ignores_missed_controls() {
        let classifier = Classifier::new(ScoringRule::SameHitIsSuspect, Thresholds::default());
        let results = [
            answer(QuestionKind::Same, false),
            answer(QuestionKind::Same, false),
        ];

        assert_eq!(classifier.tally(&results), Tally::default());
    }

    #[test]
    fn classify_is_repeatable() {
        let results = [
            answer(QuestionKind::Distinguished, false),
            answer(QuestionKind::Same, true),
        ];
        let classifier = Classifier::default();
        assert_eq!(classifier.classify(&results), classifier.classify(&results));
    }
}
