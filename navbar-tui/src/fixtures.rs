//! Loading the session and events files that stand in for the auth provider
//! and the events endpoint.

use std::path::{Path, PathBuf};

use navbar::{Event, LoadError, LocalSession};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid session in {path}: {source}")]
    Session {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Body of the events listing, as the backend returns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Accepted shapes of the events file: the backend's wrapped listing or a
/// bare list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EventsBody {
    Wrapped(EventsResponse),
    List(Vec<Event>),
}

impl EventsBody {
    fn into_events(self) -> Vec<Event> {
        match self {
            EventsBody::Wrapped(response) => response.events,
            EventsBody::List(events) => events,
        }
    }
}

/// Results delivered from loader tasks to the render loop.
#[derive(Debug)]
pub enum LoadResult {
    Session(Result<LocalSession, FixtureError>),
    Events(Result<Vec<Event>, FixtureError>),
}

/// Read the session file. A missing file means nobody is signed in.
pub async fn fetch_session(path: &Path) -> Result<LocalSession, FixtureError> {
    let Some(contents) = read_optional(path).await? else {
        tracing::info!(path = %path.display(), "No session file, starting signed out");
        return Ok(LocalSession::new(navbar::AuthStatus::Unauthenticated));
    };

    LocalSession::from_json(&contents).map_err(|source| FixtureError::Session {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the events file. A missing file means no events.
pub async fn fetch_events(path: &Path) -> Result<Vec<Event>, FixtureError> {
    let Some(contents) = read_optional(path).await? else {
        return Ok(Vec::new());
    };

    let body: EventsBody =
        serde_json::from_str(&contents).map_err(|source| FixtureError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let events = body.into_events();
    tracing::debug!(count = events.len(), "Loaded events");
    Ok(events)
}

async fn read_optional(path: &Path) -> Result<Option<String>, FixtureError> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(FixtureError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navbar::{AuthStatus, IdentityProvider};

    #[tokio::test]
    async fn test_missing_session_is_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let session = fetch_session(&dir.path().join("session.json")).await.unwrap();
        assert_eq!(session.status(), &AuthStatus::Unauthenticated);
    }

    #[tokio::test]
    async fn test_fetch_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(
            &path,
            r#"{"status": "authenticated", "user": {"username": "jesse", "display_name": "Jesse", "dojo_cohort": "1200-1300"}}"#,
        )
        .unwrap();

        let session = fetch_session(&path).await.unwrap();
        assert!(session.has_created_profile());
    }

    #[tokio::test]
    async fn test_malformed_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = fetch_session(&path).await.unwrap_err();
        assert!(matches!(
            err,
            FixtureError::Session {
                source: LoadError::Json(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_fetch_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"{"events": [{"id": "e1", "owner": "jesse", "participants": [], "status": "SCHEDULED", "end_time": 10}]}"#,
        )
        .unwrap();

        let events = fetch_events(&path).await.unwrap();
        assert_eq!(events.len(), 1);
        assert!(fetch_events(&dir.path().join("none.json")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_events_bare_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[{"id": "e1", "owner": "jesse", "participants": [], "status": "SCHEDULED", "end_time": 10},
                {"id": "e2", "owner": "sam", "participants": [], "status": "BOOKED", "end_time": 20}]"#,
        )
        .unwrap();

        let events = fetch_events(&path).await.unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2"]);
    }

    #[tokio::test]
    async fn test_fetch_events_rejects_other_shapes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, r#""events""#).unwrap();

        let err = fetch_events(&path).await.unwrap_err();
        assert!(matches!(err, FixtureError::Parse { .. }));
    }
}
