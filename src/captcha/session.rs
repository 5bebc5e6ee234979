use rand::Rng;

use super::answer::{AnswerResult, Choice};
use super::classifier::{Classifier, Verdict};
use super::quiz::{generate_quiz, QuestionKind, QuizItem};

/// State of one visitor's pass through a quiz.
///
/// `results` always has exactly `index` entries: one per answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRun {
    items: Vec<QuizItem>,
    results: Vec<AnswerResult>,
    index: usize,
}

impl QuizRun {
    pub fn new<R: Rng + ?Sized>(template: &[QuestionKind], rng: &mut R) -> Self {
        Self::from_items(generate_quiz(template, rng))
    }

    pub fn from_items(items: Vec<QuizItem>) -> Self {
        Self {
            results: Vec::with_capacity(items.len()),
            items,
            index: 0,
        }
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn results(&self) -> &[AnswerResult] {
        &self.results
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.items.len()
    }

    /// The question waiting for an answer, `None` once the run is over.
    pub fn current(&self) -> Option<&QuizItem> {
        self.items.get(self.index)
    }

    /// Records `choice` for the current question and moves on. Returns
    /// `None` when there is nothing left to answer.
    pub fn answer(&mut self, choice: Choice) -> Option<AnswerResult> {
        let result = AnswerResult::new(self.current()?, choice);
        self.results.push(result);
        self.index += 1;
        Some(result)
    }

    pub fn correct_count(&self) -> usize {
        self.results.iter().filter(|r| r.correct).count()
    }

    /// Only defined once every question has been answered.
    pub fn verdict(&self, classifier: &Classifier) -> Option<Verdict> {
        self.is_finished().then(|| classifier.classify(&self.results))
    }

    /// Throws away everything from the current run and starts over with a
    /// freshly drawn quiz.
    pub fn restart<R: Rng + ?Sized>(&mut self, template: &[QuestionKind], rng: &mut R) {
        *self = Self::new(template, rng);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::captcha::quiz::STANDARD_TEMPLATE;

    fn right_choice(kind: QuestionKind) -> Choice {
        match kind {
            QuestionKind::Same => Choice::Same,
            QuestionKind::Different | QuestionKind::Distinguished => Choice::Different,
        }
    }

    #[test]
    fn current_question_is_stable_until_answered() {
        let mut rng = StdRng::seed_from_u64(5);
        let run = QuizRun::new(&STANDARD_TEMPLATE, &mut rng);

        let first = *run.current().unwrap();
        let _ = QuizRun::new(&STANDARD_TEMPLATE, &mut rng);
        assert_eq!(*run.current().unwrap(), first);
        assert_eq!(run.current(), run.items().first());
    }

    #[test]
    fn answering_everything_finishes_the_run() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut run = QuizRun::new(&STANDARD_TEMPLATE, &mut rng);

        while let Some(item) = run.current().copied() {
            assert_eq!(run.verdict(&Classifier::default()), None);
            let result = run.answer(right_choice(item.kind)).unwrap();
            assert!(result.correct);
            assert_eq!(run.results().len(), run.index());
        }

        assert!(run.is_finished());
        assert_eq!(run.correct_count(), STANDARD_TEMPLATE.len());
        assert_eq!(run.answer(Choice::Same), None);
        assert_eq!(run.results().len(), STANDARD_TEMPLATE.len());
        assert_eq!(
            run.verdict(&Classifier::default()),
            Some(Verdict::HumanPass)
        );
    }

    #[test]
    fn restart_clears_progress() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut run = QuizRun::new(&STANDARD_TEMPLATE, &mut rng);
        run.answer(Choice::Same);
        run.answer(Choice::Different);

        run.restart(&STANDARD_TEMPLATE, &mut rng);

        assert_eq!(run.index(), 0);
        assert!(run.results().is_empty());
        assert_eq!(run.len(), STANDARD_TEMPLATE.len());
    }

    #[test]
    fn empty_quiz_is_finished_at_once() {
        let run = QuizRun::from_items(Vec::new());
        assert!(run.is_empty());
        assert!(run.is_finished());
        assert_eq!(run.current(), None);
        assert_eq!(
            run.verdict(&Classifier::default()),
            Some(Verdict::HumanFail)
        );
    }
}
