use std::path::PathBuf;
use thiserror::Error;

/// A backend request that did not produce an answer.
///
/// Volume enumeration and memory reads fail the same way; the operation
/// name is kept only for the log line.
#[derive(Debug, Error)]
#[error("{op} failed: {reason}")]
pub struct BridgeError {
    pub op:     &'static str,
    pub reason: String,
}

impl BridgeError {
    pub fn new(op: &'static str, reason: impl Into<String>) -> Self {
        Self { op, reason: reason.into() }
    }
}

/// A folder scan that could not start.
///
/// Only the root is fatal; unreadable entries below it are skipped and counted.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
}
