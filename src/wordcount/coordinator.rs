use super::config::WordCountConfig;
use super::latch::CompletionLatch;
use super::pool::WorkerPool;
use super::table::{FrequencySnapshot, FrequencyTable};
use super::tokenizer::TokenProducer;
use super::worker::{SourceOutcome, SourceWorker};
use super::Source;
use crate::{Error, Result};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of a finished run: the frozen table, the sources in input order and
/// how each of them went.
#[derive(Debug)]
pub struct Report {
    pub sources: Vec<Source>,
    pub table: FrequencySnapshot,
    pub outcomes: Vec<SourceOutcome>,
}

impl Report {
    pub fn failures(&self) -> impl Iterator<Item = &SourceOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Launches one worker per source and hands back the table once all of them
/// have arrived at the completion latch.
pub struct Coordinator {
    config: WordCountConfig,
    producer: Arc<dyn TokenProducer>,
}

impl Coordinator {
    pub fn new(config: WordCountConfig, producer: Arc<dyn TokenProducer>) -> Self {
        Coordinator { config, producer }
    }

    pub async fn run(&self) -> Result<Report> {
        self.config.validate()?;

        let sources = self.config.sources.clone();
        let table = Arc::new(FrequencyTable::new(self.config.locking));
        let latch = Arc::new(CompletionLatch::new(sources.len()));
        let pool = WorkerPool::new(sources.len())?;

        info!(
            sources = sources.len(),
            word_limit = self.config.word_limit,
            locking = ?self.config.locking,
            "launching source workers"
        );

        let mut handles = Vec::with_capacity(sources.len());
        for source in &sources {
            let worker = SourceWorker::new(source.clone(), self.config.word_limit);
            let producer = Arc::clone(&self.producer);
            let table = Arc::clone(&table);
            let arrival = latch.arrival();

            let handle = pool.execute(move || {
                let _arrival = arrival;
                worker.run(producer.as_ref(), &table)
            });
            handles.push((source.clone(), handle));
        }

        latch.wait().await;
        info!("Finished all threads");

        let outcomes = join_all(handles.into_iter().map(|(source, handle)| async move {
            match handle.await {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!(source = %source, "worker did not finish: {}", err);
                    SourceOutcome::Failed {
                        error: Error::WorkerPanicked(source.clone()),
                        source,
                        words: 0,
                    }
                }
            }
        }))
        .await;
        pool.shutdown();

        let failed = outcomes.iter().filter(|outcome| outcome.is_failure()).count();
        if failed > 0 {
            warn!(failed, "report is missing words from failed sources");
        }

        // every worker task has returned, so their clones are gone
        let table = Arc::try_unwrap(table).map_err(|_| {
            Error::General("frequency table still shared after all workers finished".into())
        })?;

        Ok(Report {
            sources,
            table: table.into_snapshot(),
            outcomes,
        })
    }
}
