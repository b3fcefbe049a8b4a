//! Event input.
//!
//! Events arrive as a JSON array of `{ "id", "start", "end" }` objects from a
//! file or, when the path is `-`, from stdin. Ids may be strings or integers.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use dayview_core::Event;
use serde::{Deserialize, Serialize};

use crate::error::{DayviewError, Result};

/// Opaque event identifier as it appears in input JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Where to read events from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    #[must_use]
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    fn read_to_string(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|source| DayviewError::Read {
                        origin: self.describe(),
                        source,
                    })?;
                Ok(text)
            }
            Self::File(path) => {
                if !path.exists() {
                    return Err(DayviewError::MissingPath { path: path.clone() });
                }
                std::fs::read_to_string(path).map_err(|source| DayviewError::Read {
                    origin: self.describe(),
                    source,
                })
            }
        }
    }
}

/// Parse a JSON event array.
pub fn parse_events(text: &str, origin: &str) -> Result<Vec<Event<EventId>>> {
    serde_json::from_str(text).map_err(|source| DayviewError::InvalidEvents {
        origin: origin.to_string(),
        source,
    })
}

/// Read and parse events from `source`.
pub fn load_events(source: &InputSource) -> Result<Vec<Event<EventId>>> {
    let origin = source.describe();
    let text = source.read_to_string()?;
    let events = parse_events(&text, &origin)?;
    tracing::info!(events = events.len(), origin = %origin, "loaded events");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_may_be_numbers_or_strings() {
        let events = parse_events(
            r#"[{"id": 1, "start": 0, "end": 60}, {"id": "lunch", "start": 720, "end": 780}]"#,
            "inline",
        )
        .expect("parse");
        assert_eq!(events[0].id, EventId::Number(1));
        assert_eq!(events[1].id, EventId::Text("lunch".into()));
        assert_eq!(events[1].duration(), 60);
    }

    #[test]
    fn malformed_json_names_its_origin() {
        let error = parse_events(r#"[{"id": 1, "start": 0}]"#, "day.json").expect_err("missing end");
        assert!(matches!(error, DayviewError::InvalidEvents { ref origin, .. } if origin == "day.json"));
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(InputSource::from_arg(Path::new("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Path::new("day.json")),
            InputSource::File(PathBuf::from("day.json"))
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let source = InputSource::File(PathBuf::from("/definitely/missing/day.json"));
        let error = load_events(&source).expect_err("missing");
        assert!(matches!(error, DayviewError::MissingPath { .. }));
    }

    #[test]
    fn display_is_bare_value() {
        assert_eq!(EventId::from(42).to_string(), "42");
        assert_eq!(EventId::from("standup").to_string(), "standup");
    }
}
