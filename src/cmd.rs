use clap::Parser;
use std::path::PathBuf;
use word_tally::wordcount::{
    DEFAULT_WORD_LIMIT, LockingStrategy, ReportFormat, Source, WordCountConfig,
};

/// Count words across several files at once, one worker thread per file.
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Args {
    /// Files to count; report columns follow this order.
    #[arg(value_name = "SOURCES")]
    pub sources: Vec<PathBuf>,

    /// Words a single file may hold before its worker gives up.
    #[arg(short = 'l', long, default_value_t = DEFAULT_WORD_LIMIT)]
    pub word_limit: usize,

    #[arg(long, value_enum, default_value_t = LockingStrategy::Global)]
    pub locking: LockingStrategy,

    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Exit with an error when any file could not be fully counted.
    #[arg(long)]
    pub strict: bool,

    /// Emit log lines as JSON.
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    pub fn config(&self) -> WordCountConfig {
        WordCountConfig::new(self.sources.iter().map(Source::from_path).collect())
            .with_word_limit(self.word_limit)
            .with_locking(self.locking)
    }
}
