use crate::wordcount::Source;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, derive_more::Display)]
pub enum Error {
    #[display("configuration error: {_0}")]
    Configuration(String),

    #[display("{source} shouldn't exceed {limit} words")]
    WordLimitExceeded { source: Source, limit: usize },

    #[display("failed to read {source}: {cause}")]
    SourceRead {
        source: Source,
        cause: std::io::Error,
    },

    #[display("worker for {_0} panicked")]
    WorkerPanicked(Source),

    #[display("{_0}")]
    Io(std::io::Error),

    #[display("{_0}")]
    Serde(serde_json::Error),

    #[display("{_0}")]
    General(String),
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}
