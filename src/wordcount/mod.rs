mod config;
mod coordinator;
mod latch;
mod limiter;
mod pool;
mod reporter;
mod source;
mod table;
mod tokenizer;
mod worker;

pub use config::WordCountConfig;
pub use coordinator::{Coordinator, Report};
pub use latch::{Arrival, CompletionLatch};
pub use limiter::{DEFAULT_WORD_LIMIT, WordLimiter};
pub use pool::WorkerPool;
pub use reporter::{ReportFormat, WordRow, render, rows};
pub use source::Source;
pub use table::{FrequencySnapshot, FrequencyTable, LockingStrategy};
pub use tokenizer::{FileProducer, Lines, MemoryProducer, TokenProducer, normalize, words};
pub use worker::{SourceOutcome, SourceWorker};
