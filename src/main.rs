mod cmd;

use clap::Parser;
use cmd::Args;
use std::sync::Arc;
use word_tally::tracer::{setup_json_tracing, setup_simple_tracing};
use word_tally::wordcount::{Coordinator, FileProducer, render};
use word_tally::{Error, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _ = if args.log_json {
        setup_json_tracing()
    } else {
        setup_simple_tracing()
    };

    let coordinator = Coordinator::new(args.config(), Arc::new(FileProducer));
    let report = coordinator.run().await?;

    let mut stdout = std::io::stdout().lock();
    render(&report, args.format, &mut stdout)?;

    if args.strict && report.has_failures() {
        let failed: Vec<String> = report
            .failures()
            .map(|outcome| outcome.source().to_string())
            .collect();
        return Err(Error::General(format!(
            "incomplete report, failed sources: {}",
            failed.join(", ")
        )));
    }

    Ok(())
}
