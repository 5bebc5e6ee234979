// In-memory home of every visitor's quiz run, keyed by the cookie token.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use rand::{rngs::StdRng, SeedableRng};
use ulid::Ulid;

use crate::captcha::{QuestionKind, QuizRun};

struct StoredRun {
    run: QuizRun,
    rng: StdRng,
    touched: Instant,
}

#[derive(Clone)]
pub struct RunStore {
    runs: Arc<Mutex<HashMap<String, StoredRun>>>,
    ttl: Duration,
}

impl RunStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            runs: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, StoredRun>> {
        self.runs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Draws a new quiz and returns the token that identifies it.
    pub fn start(&self, template: &[QuestionKind]) -> String {
        let seed = rand::random::<u64>();
        let mut rng = StdRng::seed_from_u64(seed);
        let run = QuizRun::new(template, &mut rng);
        let token = Ulid::new().to_string();
        tracing::debug!("run {token} drawn from seed {seed}");

        let mut runs = self.lock();
        self.prune(&mut runs);
        runs.insert(
            token.clone(),
            StoredRun {
                run,
                rng,
                touched: Instant::now(),
            },
        );

        token
    }

    pub fn contains(&self, token: &str) -> bool {
        self.lock().contains_key(token)
    }

    /// Runs `f` on the run behind `token` while holding the store lock.
    pub fn with_run<T>(&self, token: &str, f: impl FnOnce(&mut QuizRun) -> T) -> Option<T> {
        let mut runs = self.lock();
        let stored = runs.get_mut(token)?;
        stored.touched = Instant::now();
        Some(f(&mut stored.run))
    }

    pub fn snapshot(&self, token: &str) -> Option<QuizRun> {
        self.with_run(token, |run| run.clone())
    }

    /// Replaces the run behind `token` with a fresh one in a single step.
    pub fn restart(&self, token: &str, template: &[QuestionKind]) -> Option<QuizRun> {
        let mut runs = self.lock();
        let stored = runs.get_mut(token)?;
        stored.run.restart(template, &mut stored.rng);
        stored.touched = Instant::now();
        Some(stored.run.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn prune(&self, runs: &mut HashMap<String, StoredRun>) {
        let before = runs.len();
        runs.retain(|_, stored| stored.touched.elapsed() < self.ttl);
        let pruned = before - runs.len();
        if pruned > 0 {
            tracing::debug!("pruned {pruned} expired runs");
        }
    }
}
