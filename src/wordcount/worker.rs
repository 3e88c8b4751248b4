use super::limiter::WordLimiter;
use super::table::FrequencyTable;
use super::tokenizer::{self, TokenProducer};
use super::Source;
use crate::{Error, Result};
use tracing::{debug, error};

/// What one worker did with its source.
#[derive(Debug)]
pub enum SourceOutcome {
    Completed { source: Source, words: usize },
    /// `words` were folded before the failure and stay in the table.
    Failed {
        source: Source,
        words: usize,
        error: Error,
    },
}

impl SourceOutcome {
    pub fn source(&self) -> &Source {
        match self {
            SourceOutcome::Completed { source, .. } | SourceOutcome::Failed { source, .. } => {
                source
            }
        }
    }

    pub fn words(&self) -> usize {
        match self {
            SourceOutcome::Completed { words, .. } | SourceOutcome::Failed { words, .. } => *words,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            SourceOutcome::Completed { .. } => None,
            SourceOutcome::Failed { error, .. } => Some(error),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error().is_some()
    }
}

/// Scans one source and folds its words into the shared table.
pub struct SourceWorker {
    source: Source,
    limiter: WordLimiter,
    folded: usize,
}

impl SourceWorker {
    pub fn new(source: Source, word_limit: usize) -> Self {
        SourceWorker {
            source,
            limiter: WordLimiter::new(word_limit),
            folded: 0,
        }
    }

    /// Never returns an error: failures are carried by the outcome so that
    /// sibling workers and the coordinator carry on.
    pub fn run(mut self, producer: &dyn TokenProducer, table: &FrequencyTable) -> SourceOutcome {
        debug!(source = %self.source, "worker started");

        match self.scan(producer, table) {
            Ok(()) => {
                debug!(source = %self.source, words = self.folded, "worker finished");
                SourceOutcome::Completed {
                    source: self.source,
                    words: self.folded,
                }
            }
            Err(err) => {
                error!(source = %self.source, words = self.folded, "worker failed: {}", err);
                SourceOutcome::Failed {
                    source: self.source,
                    words: self.folded,
                    error: err,
                }
            }
        }
    }

    fn scan(&mut self, producer: &dyn TokenProducer, table: &FrequencyTable) -> Result<()> {
        let lines = producer
            .lines(&self.source)
            .map_err(|cause| self.read_error(cause))?;

        for line in lines {
            let line = line.map_err(|cause| self.read_error(cause))?;
            let words = tokenizer::words(&line);

            // a line that crosses the limit is rejected as a whole
            self.limiter.admit(&self.source, words.len())?;

            for word in &words {
                table.fold(word, &self.source);
                self.folded += 1;
            }
        }
        Ok(())
    }

    fn read_error(&self, cause: std::io::Error) -> Error {
        Error::SourceRead {
            source: self.source.clone(),
            cause,
        }
    }
}
