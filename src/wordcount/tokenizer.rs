use super::Source;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::LazyLock;

// ASCII whitespace only: space, \t, \n, \x0B, \x0C and \r. NBSP and other
// Unicode spaces stay inside words.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?-u:\s)+").unwrap());

/// Lazily read lines of one source.
pub type Lines<'a> = Box<dyn Iterator<Item = io::Result<String>> + Send + 'a>;

/// Supplies the raw lines of a source. Workers share one producer, so it has
/// to be usable from several threads at once.
pub trait TokenProducer: Send + Sync {
    fn lines(&self, source: &Source) -> io::Result<Lines<'_>>;
}

/// Reads sources from the file system, line by line.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileProducer;

impl TokenProducer for FileProducer {
    fn lines(&self, source: &Source) -> io::Result<Lines<'_>> {
        let file = File::open(source.path())?;
        Ok(Box::new(BufReader::new(file).lines()))
    }
}

/// Serves sources from memory, keyed by source name.
#[derive(Debug, Default, Clone)]
pub struct MemoryProducer {
    texts: HashMap<String, String>,
}

impl MemoryProducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(name.into(), text.into());
        self
    }
}

impl TokenProducer for MemoryProducer {
    fn lines(&self, source: &Source) -> io::Result<Lines<'_>> {
        let text = self.texts.get(source.name()).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no text registered for {source}"),
            )
        })?;
        Ok(Box::new(text.lines().map(|line| Ok(line.to_string()))))
    }
}

/// Collapse every run of ASCII whitespace into a single space.
pub fn normalize(line: &str) -> Cow<'_, str> {
    WHITESPACE.replace_all(line, " ")
}

/// Split a line into words. Case and punctuation are kept as they are, and
/// leading or trailing whitespace never yields an empty word.
pub fn words(line: &str) -> Vec<String> {
    normalize(line)
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}
