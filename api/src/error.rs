//! Error taxonomy shared by every operation in this crate.
//!
//! Guards convert rule violations into [`Error::NotFound`], [`Error::Conflict`],
//! or [`Error::Validation`] before any mutation is attempted. A constraint
//! violation that slips past a racy guard is caught in the [`From<sqlx::Error>`]
//! impl and remapped onto the same variant the guard would have produced, so a
//! lost race never surfaces as a raw storage error.

use sqlx::error::ErrorKind;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// A referenced id or name does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness invariant would be violated (email, duplicate association).
    #[error("{0}")]
    Conflict(String),

    /// A malformed enum value or unsupported technology name. `options` lists
    /// the accepted values when the rule has a closed set of them.
    #[error("{message}")]
    Validation {
        message: String,
        options: Vec<String>,
    },

    /// An underlying query failure not covered by an explicit gate.
    #[error("database error: {0}")]
    Storage(#[source] sqlx::Error),
}

impl Error {
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Error::Conflict(message.into())
    }

    /// Validation failure listing the accepted values.
    pub fn validation(message: impl Into<String>, options: &[&str]) -> Self {
        Error::Validation {
            message: message.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    /// Validation failure with no option list.
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
            options: Vec::new(),
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            match db.kind() {
                ErrorKind::UniqueViolation => {
                    return Error::Conflict("Resource already exists.".into())
                }
                ErrorKind::ForeignKeyViolation => {
                    return Error::NotFound("Referenced resource does not exist.".into())
                }
                _ => {}
            }
        }
        Error::Storage(err)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_carries_options() {
        let err = Error::validation("Invalid OS option.", &["Windows", "Linux", "MacOS"]);
        match err {
            Error::Validation { message, options } => {
                assert_eq!(message, "Invalid OS option.");
                assert_eq!(options, vec!["Windows", "Linux", "MacOS"]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn non_constraint_sqlx_errors_become_storage() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[test]
    fn display_uses_the_message() {
        assert_eq!(
            Error::not_found("Developer not found.").to_string(),
            "Developer not found."
        );
        assert_eq!(
            Error::invalid("Technology not related to the project.").to_string(),
            "Technology not related to the project."
        );
    }
}
