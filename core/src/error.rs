//! Error type for data loading and persistence.
//!
//! Pure text operations (classification, segmentation, variant mapping) never
//! fail; only the loaders that touch the filesystem or decode a payload
//! return `Error`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("bincode error while {context}: {source}")]
    Bincode {
        context: &'static str,
        #[source]
        source: bincode::Error,
    },
    #[error("fst error while {context}: {source}")]
    Fst {
        context: &'static str,
        #[source]
        source: fst::Error,
    },
    #[error("TOML error: {message}")]
    Toml { message: String },
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl Error {
    pub fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub fn bincode(context: &'static str, source: bincode::Error) -> Self {
        Self::Bincode { context, source }
    }

    pub fn fst(context: &'static str, source: fst::Error) -> Self {
        Self::Fst { context, source }
    }

    pub fn toml(err: impl std::fmt::Display) -> Self {
        Self::Toml {
            message: err.to_string(),
        }
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
