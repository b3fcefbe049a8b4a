use std::io;
use std::path::PathBuf;

use dayview_layout::LayoutConfigError;

pub type Result<T> = std::result::Result<T, DayviewError>;

#[derive(Debug, thiserror::Error)]
pub enum DayviewError {
    #[error("input file not found: {}", path.display())]
    MissingPath { path: PathBuf },

    #[error("failed to read {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid events in {origin}: {source}")]
    InvalidEvents {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid layout configuration: {0}")]
    Config(#[from] LayoutConfigError),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("{message}")]
    Exit { code: i32, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DayviewError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn exit(code: i32, message: impl Into<String>) -> Self {
        Self::Exit {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingPath { .. } | Self::InvalidArgument { .. } => 2,
            Self::Read { .. } | Self::InvalidEvents { .. } => 3,
            Self::Config(_) => 4,
            Self::Exit { code, .. } => *code,
            Self::Io(_) | Self::Json(_) => 1,
        }
    }
}
