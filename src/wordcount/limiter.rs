use super::Source;
use crate::{Error, Result};

pub const DEFAULT_WORD_LIMIT: usize = 500;

/// Running word count of a single source. Owned by its worker, never shared.
#[derive(Debug, Clone)]
pub struct WordLimiter {
    limit: usize,
    seen: usize,
}

impl WordLimiter {
    pub fn new(limit: usize) -> Self {
        WordLimiter { limit, seen: 0 }
    }

    /// Account for the next `words` words of `source`. Fails once the running
    /// total goes past the limit; the words that crossed it are still counted.
    pub fn admit(&mut self, source: &Source, words: usize) -> Result<()> {
        self.seen = self.seen.saturating_add(words);
        if self.seen > self.limit {
            return Err(Error::WordLimitExceeded {
                source: source.clone(),
                limit: self.limit,
            });
        }
        Ok(())
    }
}

impl Default for WordLimiter {
    fn default() -> Self {
        WordLimiter::new(DEFAULT_WORD_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_at_limit_is_allowed() {
        let source = Source::named("A.txt");
        let mut limiter = WordLimiter::default();
        assert!(limiter.admit(&source, 300).is_ok());
        assert!(limiter.admit(&source, 200).is_ok());
        assert_eq!(limiter.seen, 500);
    }

    #[test]
    fn one_past_limit_fails_with_source() {
        let source = Source::named("A.txt");
        let mut limiter = WordLimiter::default();
        limiter.admit(&source, 500).unwrap();

        match limiter.admit(&source, 1) {
            Err(Error::WordLimitExceeded { source, limit }) => {
                assert_eq!(source.name(), "A.txt");
                assert_eq!(limit, 500);
            }
            other => panic!("expected WordLimitExceeded, got {other:?}"),
        }
        assert_eq!(limiter.seen, 501);
    }

    #[test]
    fn custom_limit() {
        let source = Source::named("tiny");
        let mut limiter = WordLimiter::new(2);
        assert!(limiter.admit(&source, 3).is_err());
    }
}
