use std::time::Duration;

use crate::captcha::{
    classifier::PASS_THRESHOLD,
    quiz::{MIXED_TEMPLATE, STANDARD_TEMPLATE},
    Classifier, QuestionKind, ScoringRule, Thresholds,
};
use crate::names;

/// Score needed to pass with [`MIXED_TEMPLATE`]: its two plain pairs plus
/// three of the four shifted ones.
pub const MIXED_PASS_THRESHOLD: i32 = 5;

/// Which question list a run is drawn from. The pass bar travels with the
/// template so the classifier stays tuned to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TemplatePreset {
    #[default]
    Standard,
    Mixed,
}

impl TemplatePreset {
    pub fn kinds(&self) -> &'static [QuestionKind] {
        match self {
            Self::Standard => &STANDARD_TEMPLATE,
            Self::Mixed => &MIXED_TEMPLATE,
        }
    }

    pub fn pass_threshold(&self) -> i32 {
        match self {
            Self::Standard => PASS_THRESHOLD,
            Self::Mixed => MIXED_PASS_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub template: TemplatePreset,
    pub classifier: Classifier,
    /// How long the right/wrong feedback stays up. Zero skips it.
    pub answer_delay: Duration,
    pub run_ttl: Duration,
}

impl Settings {
    pub fn new(template: TemplatePreset, rule: ScoringRule, answer_delay: Duration) -> Self {
        let thresholds = Thresholds {
            pass: template.pass_threshold(),
            ..Thresholds::default()
        };

        Self {
            template,
            classifier: Classifier::new(rule, thresholds),
            answer_delay,
            run_ttl: Duration::from_secs(names::RUN_TTL_SECS),
        }
    }
}
