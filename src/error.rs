// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types surfaced by recording and emission

use std::io;
use thiserror::Error;

/// Broad classification of a [`ScadError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Recorder invariant violated; indicates an engine bug
    Structural,
    /// A parameter value cannot be rendered as script text
    Value,
    /// The output sink rejected a write or flush
    Sink,
}

/// Failure of a single recording + emission call.
///
/// None of these are retried; the script is either fully written or the call
/// fails and the sink has received nothing usable.
#[derive(Debug, Error)]
pub enum ScadError {
    #[error("recording session ended with {open} scope(s) still open")]
    UnbalancedScope { open: usize },

    #[error("non-finite number {value} in parameter `{param}` of `{node}`")]
    NonFinite {
        node: String,
        param: String,
        value: f64,
    },

    #[error("`{name}` is not a valid identifier (in `{node}`)")]
    InvalidIdentifier { node: String, name: String },

    #[error("`{keyword}` path {path:?} cannot be written between angle brackets")]
    InvalidPath { keyword: String, path: String },

    #[error("failed to write script to sink")]
    Sink(#[from] io::Error),
}

impl ScadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScadError::UnbalancedScope { .. } => ErrorKind::Structural,
            ScadError::NonFinite { .. }
            | ScadError::InvalidIdentifier { .. }
            | ScadError::InvalidPath { .. } => ErrorKind::Value,
            ScadError::Sink(_) => ErrorKind::Sink,
        }
    }
}

pub type Result<T, E = ScadError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ScadError::UnbalancedScope { open: 1 }.kind(),
            ErrorKind::Structural
        );
        let err = ScadError::NonFinite {
            node: "cube".into(),
            param: "size[2]".into(),
            value: f64::NAN,
        };
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(err.to_string().contains("size[2]"));
        let err = ScadError::InvalidPath {
            keyword: "use".into(),
            path: "a>b".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Value);
        let err: ScadError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.kind(), ErrorKind::Sink);
    }
}
