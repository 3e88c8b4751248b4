use super::Source;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// How folds into the shared table are serialized.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LockingStrategy {
    /// One lock around the whole table; a single writer at a time.
    #[default]
    Global,
    /// One lock per word; writers on different words proceed in parallel.
    Sharded,
}

type Counts = HashMap<Source, u64>;

enum Inner {
    Global(Mutex<HashMap<String, Counts>>),
    Sharded(RwLock<HashMap<String, Arc<Mutex<Counts>>>>),
}

/// word -> (source -> count), shared by every worker of a run.
///
/// Every `fold` of a given (word, source) cell happens under a lock that covers
/// that cell, so concurrent folds never lose or duplicate an increment and the
/// final counts do not depend on how workers interleave.
pub struct FrequencyTable {
    inner: Inner,
}

impl FrequencyTable {
    pub fn new(strategy: LockingStrategy) -> Self {
        let inner = match strategy {
            LockingStrategy::Global => Inner::Global(Mutex::new(HashMap::new())),
            LockingStrategy::Sharded => Inner::Sharded(RwLock::new(HashMap::new())),
        };
        FrequencyTable { inner }
    }

    /// Count one more occurrence of `word` in `source`.
    pub fn fold(&self, word: &str, source: &Source) {
        match &self.inner {
            Inner::Global(words) => {
                let mut words = words.lock().unwrap_or_else(PoisonError::into_inner);
                match words.get_mut(word) {
                    Some(counts) => bump(counts, source),
                    None => {
                        words.insert(word.to_owned(), Counts::from([(source.clone(), 1)]));
                    }
                }
            }
            Inner::Sharded(words) => {
                let cell = cell_for(words, word);
                let mut counts = cell.lock().unwrap_or_else(PoisonError::into_inner);
                bump(&mut counts, source);
            }
        }
    }

    /// Occurrences of `word` in `source` so far.
    pub fn count(&self, word: &str, source: &Source) -> u64 {
        match &self.inner {
            Inner::Global(words) => words
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .get(word)
                .and_then(|counts| counts.get(source).copied())
                .unwrap_or(0),
            Inner::Sharded(words) => {
                let words = words.read().unwrap_or_else(PoisonError::into_inner);
                words
                    .get(word)
                    .and_then(|cell| {
                        cell.lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .get(source)
                            .copied()
                    })
                    .unwrap_or(0)
            }
        }
    }

    /// Number of distinct words folded so far.
    pub fn len(&self) -> usize {
        match &self.inner {
            Inner::Global(words) => words.lock().unwrap_or_else(PoisonError::into_inner).len(),
            Inner::Sharded(words) => words.read().unwrap_or_else(PoisonError::into_inner).len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Freeze the table. Taking `self` by value means no writer can be left.
    pub fn into_snapshot(self) -> FrequencySnapshot {
        let words: BTreeMap<String, BTreeMap<Source, u64>> = match self.inner {
            Inner::Global(words) => words
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner)
                .into_iter()
                .map(|(word, counts)| (word, counts.into_iter().collect()))
                .collect(),
            Inner::Sharded(words) => words
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner)
                .into_iter()
                .map(|(word, cell)| {
                    let counts = cell.lock().unwrap_or_else(PoisonError::into_inner);
                    (word, counts.iter().map(|(s, n)| (s.clone(), *n)).collect())
                })
                .collect(),
        };

        FrequencySnapshot { words }
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        FrequencyTable::new(LockingStrategy::default())
    }
}

fn cell_for(
    words: &RwLock<HashMap<String, Arc<Mutex<Counts>>>>,
    word: &str,
) -> Arc<Mutex<Counts>> {
    // fast path: the word is already known, a shared lock is enough
    if let Some(cell) = words
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(word)
    {
        return Arc::clone(cell);
    }

    let mut words = words.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(words.entry(word.to_owned()).or_default())
}

fn bump(counts: &mut Counts, source: &Source) {
    match counts.get_mut(source) {
        Some(count) => *count += 1,
        None => {
            counts.insert(source.clone(), 1);
        }
    }
}

/// Read-only view of a finished table. Words iterate in lexical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencySnapshot {
    words: BTreeMap<String, BTreeMap<Source, u64>>,
}

impl FrequencySnapshot {
    pub fn count(&self, word: &str, source: &Source) -> u64 {
        self.words
            .get(word)
            .and_then(|counts| counts.get(source).copied())
            .unwrap_or(0)
    }

    pub fn total(&self, word: &str) -> u64 {
        self.words
            .get(word)
            .map(|counts| counts.values().sum())
            .unwrap_or(0)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
