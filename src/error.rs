//! Error types.
//!
//! - `DecodeError`: a saved document failed validation. Always recoverable;
//!   the caller keeps its current state.
//! - `ScoreError`: the caller asked for a score that cannot exist.
//! - `EditError`: a session intent was rejected.
//! - `Error`: umbrella for file I/O and the Python layer.

use thiserror::Error;

use crate::core::{ChargeAction, TeamId};

/// A document failed validation.
///
/// `path` fields use a JSON-pointer-like location, e.g. `grid[1][4]`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("{path}: expected {expected}, found {found}")]
    Shape {
        path: String,
        expected: String,
        found: String,
    },

    #[error("{path}: {constraint}, found {value}")]
    Value {
        path: String,
        constraint: &'static str,
        value: String,
    },
}

impl DecodeError {
    pub(crate) fn shape(path: impl Into<String>, expected: impl Into<String>, found: impl Into<String>) -> Self {
        DecodeError::Shape {
            path: path.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub(crate) fn value(path: impl Into<String>, constraint: &'static str, value: impl ToString) -> Self {
        DecodeError::Value {
            path: path.into(),
            constraint,
            value: value.to_string(),
        }
    }
}

/// A score query the rules do not allow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// Park was requested for the autonomous period.
    #[error("contract violation: {action} cannot score in auto")]
    ContractViolation { action: ChargeAction },

    #[error("{team} is not part of a {team_count}-team match")]
    UnknownTeam { team: TeamId, team_count: usize },
}

/// A session intent that could not be applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("{team} is not part of a {team_count}-team match")]
    UnknownTeam { team: TeamId, team_count: usize },

    #[error("expected {expected} team names, got {found}")]
    TeamNameCount { expected: usize, found: usize },
}

/// Crate-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid match document: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Edit(#[from] EditError),
}

impl Error {
    /// Whether the caller can report this and carry on with its current
    /// state. Scoring contract violations are programming errors.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Score(ScoreError::ContractViolation { .. }))
    }
}

/// Crate result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_messages() {
        assert_eq!(
            DecodeError::MissingField("teams").to_string(),
            "missing field `teams`"
        );
        assert_eq!(
            DecodeError::shape("grid", "3 rows", "2").to_string(),
            "grid: expected 3 rows, found 2"
        );
        assert_eq!(
            DecodeError::value("grid[0][0][0]", "piece code must be 0 or 1", 2).to_string(),
            "grid[0][0][0]: piece code must be 0 or 1, found 2"
        );
    }

    #[test]
    fn test_contract_violation_not_recoverable() {
        let err: Error = ScoreError::ContractViolation {
            action: ChargeAction::Park,
        }
        .into();
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "contract violation: Park cannot score in auto");

        let decode: Error = DecodeError::MissingField("grid").into();
        assert!(decode.is_recoverable());
    }
}
