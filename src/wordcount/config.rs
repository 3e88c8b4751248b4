use super::limiter::DEFAULT_WORD_LIMIT;
use super::table::LockingStrategy;
use super::Source;
use crate::{Error, Result};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct WordCountConfig {
    pub sources: Vec<Source>,
    /// Words a single source may produce before its worker gives up.
    pub word_limit: usize,
    pub locking: LockingStrategy,
}

impl Default for WordCountConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            word_limit: DEFAULT_WORD_LIMIT,
            locking: LockingStrategy::default(),
        }
    }
}

impl WordCountConfig {
    pub fn new(sources: Vec<Source>) -> Self {
        Self {
            sources,
            ..Self::default()
        }
    }

    pub fn with_word_limit(mut self, word_limit: usize) -> Self {
        self.word_limit = word_limit;
        self
    }

    pub fn with_locking(mut self, locking: LockingStrategy) -> Self {
        self.locking = locking;
        self
    }

    /// Checked before any worker is launched.
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(Error::Configuration(
                "We need minimum one input file to count the words".into(),
            ));
        }
        if self.word_limit == 0 {
            return Err(Error::Configuration(
                "word limit must be at least 1".into(),
            ));
        }

        let mut names = HashSet::new();
        for source in &self.sources {
            if !names.insert(source.name()) {
                return Err(Error::Configuration(format!(
                    "source name {} is used more than once",
                    source.name()
                )));
            }
        }
        Ok(())
    }
}
