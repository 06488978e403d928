use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("asset `{name}` unreadable: {source}")]
    Asset {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("other: {0}")]
    Other(String),
}

impl Error {
    #[inline]
    pub fn other(text: impl Into<String>) -> Self {
        Self::Other(text.into())
    }

    /// Wrap an io error with the asset name it occurred on.
    pub fn asset(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::Asset {
            name: name.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
