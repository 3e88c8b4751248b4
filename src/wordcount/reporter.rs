use super::coordinator::Report;
use super::Source;
use crate::Result;
use serde::Serialize;
use std::io::Write;

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// `<word> <total> <count per source...>`, one word per line.
    #[default]
    Text,
    Json,
}

/// One report line. `counts` lines up with the sources in input order and
/// holds 0 where a source never produced the word.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WordRow {
    pub word: String,
    pub total: u64,
    pub counts: Vec<u64>,
}

#[derive(Serialize)]
struct Failure<'a> {
    source: &'a Source,
    words: usize,
    error: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    sources: &'a [Source],
    words: Vec<WordRow>,
    failures: Vec<Failure<'a>>,
}

pub fn rows(report: &Report) -> Vec<WordRow> {
    report
        .table
        .words()
        .map(|word| WordRow {
            word: word.to_string(),
            total: report.table.total(word),
            counts: report
                .sources
                .iter()
                .map(|source| report.table.count(word, source))
                .collect(),
        })
        .collect()
}

pub fn render(report: &Report, format: ReportFormat, out: &mut impl Write) -> Result<()> {
    match format {
        ReportFormat::Text => render_text(report, out),
        ReportFormat::Json => render_json(report, out),
    }
}

fn render_text(report: &Report, out: &mut impl Write) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Finished all threads")?;
    for row in rows(report) {
        write!(out, "{} {}", row.word, row.total)?;
        for count in row.counts {
            write!(out, " {count}")?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn render_json(report: &Report, out: &mut impl Write) -> Result<()> {
    let json = JsonReport {
        sources: &report.sources,
        words: rows(report),
        failures: report
            .failures()
            .map(|outcome| Failure {
                source: outcome.source(),
                words: outcome.words(),
                error: outcome
                    .error()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            })
            .collect(),
    };
    serde_json::to_writer(&mut *out, &json)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::wordcount::table::FrequencyTable;
    use crate::wordcount::worker::SourceOutcome;

    fn report(folds: &[(&str, usize)], names: &[&str]) -> Report {
        let sources: Vec<Source> = names.iter().map(|name| Source::named(*name)).collect();
        let table = FrequencyTable::default();
        for (word, index) in folds {
            table.fold(word, &sources[*index]);
        }
        Report {
            outcomes: sources
                .iter()
                .map(|source| SourceOutcome::Completed {
                    source: source.clone(),
                    words: 0,
                })
                .collect(),
            sources,
            table: table.into_snapshot(),
        }
    }

    fn render_to_string(report: &Report, format: ReportFormat) -> String {
        let mut out = Vec::new();
        render(report, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn columns_follow_input_order() {
        let report = report(&[("word", 0), ("word", 1), ("word", 0)], &["A.txt", "B.txt"]);
        assert_eq!(
            rows(&report),
            vec![WordRow {
                word: "word".into(),
                total: 3,
                counts: vec![2, 1],
            }]
        );

        let swapped = self::report(&[("word", 1), ("word", 0), ("word", 1)], &["B.txt", "A.txt"]);
        assert_eq!(rows(&swapped)[0].counts, vec![1, 2]);
    }

    #[test]
    fn text_report_has_marker_then_one_line_per_word() {
        let report = report(&[("cat", 0), ("dog", 1), ("the", 0), ("the", 1)], &["A", "B"]);
        assert_eq!(
            render_to_string(&report, ReportFormat::Text),
            "\nFinished all threads\ncat 1 1 0\ndog 1 0 1\nthe 2 1 1\n"
        );
    }

    #[test]
    fn json_report_lists_failures() {
        let mut report = report(&[("hi", 0)], &["A", "B"]);
        report.outcomes[1] = SourceOutcome::Failed {
            source: Source::named("B"),
            words: 0,
            error: Error::WordLimitExceeded {
                source: Source::named("B"),
                limit: 500,
            },
        };

        let json: serde_json::Value =
            serde_json::from_str(&render_to_string(&report, ReportFormat::Json)).unwrap();
        assert_eq!(json["sources"], serde_json::json!(["A", "B"]));
        assert_eq!(json["words"][0]["word"], "hi");
        assert_eq!(json["words"][0]["counts"], serde_json::json!([1, 0]));
        assert_eq!(json["failures"][0]["source"], "B");
        assert_eq!(json["failures"][0]["error"], "B shouldn't exceed 500 words");
    }
}
