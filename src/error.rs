// ABOUTME: Application-wide error types for dockery.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::runtime::{ContainerError, EventError, RuntimeError, RuntimeInfoError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Runtime(#[from] RuntimeError),

    #[error("{0}")]
    RuntimeInfo(#[from] RuntimeInfoError),

    #[error("{0}")]
    Container(#[from] ContainerError),

    #[error("event stream error: {0}")]
    Event(#[from] EventError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
