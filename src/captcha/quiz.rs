use std::fmt;

use rand::Rng;

use super::color::{generate_base_color, shift_color, Color, DEFAULT_SHIFT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuestionKind {
    /// Both swatches are the same color.
    Same,
    /// Two unrelated colors.
    Different,
    /// The second color is the first shifted by [`DEFAULT_SHIFT`]. Hard to
    /// tell apart by eye, but the right answer is always "different".
    Distinguished,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::Different => "different",
            Self::Distinguished => "distinguished",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two control questions and four shifted pairs.
pub const STANDARD_TEMPLATE: [QuestionKind; 6] = [
    QuestionKind::Same,
    QuestionKind::Same,
    QuestionKind::Distinguished,
    QuestionKind::Distinguished,
    QuestionKind::Distinguished,
    QuestionKind::Distinguished,
];

/// The standard template plus two plainly different pairs. Those add two
/// points of score a visitor can earn, so the pass bar is raised with it.
pub const MIXED_TEMPLATE: [QuestionKind; 8] = [
    QuestionKind::Same,
    QuestionKind::Same,
    QuestionKind::Different,
    QuestionKind::Different,
    QuestionKind::Distinguished,
    QuestionKind::Distinguished,
    QuestionKind::Distinguished,
    QuestionKind::Distinguished,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub color1: Color,
    pub color2: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizItem {
    pub kind: QuestionKind,
    pub colors: ColorPair,
}

impl QuizItem {
    /// Draws a color pair that satisfies `kind`.
    pub fn generate<R: Rng + ?Sized>(kind: QuestionKind, rng: &mut R) -> Self {
        let color1 = generate_base_color(rng);
        let color2 = match kind {
            QuestionKind::Same => color1,
            QuestionKind::Different => loop {
                // the palette is narrow enough for accidental repeats
                let candidate = generate_base_color(rng);
                if candidate != color1 {
                    break candidate;
                }
            },
            QuestionKind::Distinguished => shift_color(color1, DEFAULT_SHIFT),
        };

        Self {
            kind,
            colors: ColorPair { color1, color2 },
        }
    }
}

/// In-place exchange shuffle, walking from the last index down to 1.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffles `template` and draws colors for every question up front, so a
/// question shows the same pair however often it is rendered.
pub fn generate_quiz<R: Rng + ?Sized>(template: &[QuestionKind], rng: &mut R) -> Vec<QuizItem> {
    let mut kinds = template.to_vec();
    shuffle(&mut kinds, rng);

    kinds
        .into_iter()
        .map(|kind| QuizItem::generate(kind, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn sorted(kinds: impl IntoIterator<Item = QuestionKind>) -> Vec<QuestionKind> {
        let mut kinds: Vec<_> = kinds.into_iter().collect();
        kinds.sort();
        kinds
    }

    #[test]
    fn quiz_keeps_the_template_multiset() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for template in [&STANDARD_TEMPLATE[..], &MIXED_TEMPLATE[..]] {
                let quiz = generate_quiz(template, &mut rng);
                assert_eq!(quiz.len(), template.len());
                assert_eq!(
                    sorted(quiz.iter().map(|item| item.kind)),
                    sorted(template.iter().copied())
                );
            }
        }
    }

    #[test]
    fn pairs_match_their_kind() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            for item in generate_quiz(&MIXED_TEMPLATE, &mut rng) {
                let ColorPair { color1, color2 } = item.colors;
                match item.kind {
                    QuestionKind::Same => assert_eq!(color1, color2),
                    QuestionKind::Different => assert_ne!(color1, color2),
                    QuestionKind::Distinguished => {
                        assert_ne!(color1, color2);
                        assert_eq!(color2, shift_color(color1, DEFAULT_SHIFT));
                    }
                }
            }
        }
    }

    #[test]
    fn same_seed_gives_same_quiz() {
        let first = generate_quiz(&STANDARD_TEMPLATE, &mut StdRng::seed_from_u64(99));
        let second = generate_quiz(&STANDARD_TEMPLATE, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut one = [1];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [1]);
    }

    #[test]
    fn shuffle_is_unbiased() {
        const TRIALS: usize = 60_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<[u8; 3], usize> = HashMap::new();

        for _ in 0..TRIALS {
            let mut items = [0u8, 1, 2];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_default() += 1;
        }

        assert_eq!(counts.len(), 6, "every permutation should show up");
        let expected = TRIALS / 6;
        for (perm, count) in counts {
            let diff = count.abs_diff(expected);
            assert!(
                diff < expected / 20,
                "permutation {perm:?} seen {count} times, expected about {expected}"
            );
        }
    }
}
