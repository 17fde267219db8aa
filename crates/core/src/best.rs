//! Best score tracking
//!
//! The engine never touches storage. [`BestScore`] keeps the running maximum
//! and hands changes to a [`BestScoreStore`], which an integrating
//! application implements over whatever storage it has.

/// Storage for the single best-score value
pub trait BestScoreStore {
    /// Last stored best score, if any
    fn load(&mut self) -> Option<u32>;

    fn save(&mut self, best: u32);
}

/// In-process store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: Option<u32>,
    saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `best`
    pub fn with_value(best: u32) -> Self {
        Self {
            value: Some(best),
            saves: 0,
        }
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    /// Number of `save` calls received
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&mut self) -> Option<u32> {
        self.value
    }

    fn save(&mut self, best: u32) {
        self.value = Some(best);
        self.saves += 1;
    }
}

/// Running best score backed by a store
#[derive(Debug, Clone)]
pub struct BestScore<S> {
    best: u32,
    store: S,
}

impl<S: BestScoreStore> BestScore<S> {
    /// Read the stored best (0 if the store is empty)
    pub fn load(mut store: S) -> Self {
        let best = store.load().unwrap_or(0);
        log::debug!("best score loaded: {}", best);
        Self { best, store }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Fold `score` into the best. Saves and returns `true` only when the best
    /// increased.
    pub fn observe(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        self.store.save(score);
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
