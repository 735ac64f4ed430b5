//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use review_core::CourseError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by a `CodeExecutor`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExecutionError {
    #[error("execution endpoint is not a valid url: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Errors emitted while loading a course definition.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CourseLoadError {
    #[error("could not read course file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("course file is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] CourseError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Course(#[from] CourseLoadError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
