//! Reported (non-fatal) result of a manager operation.

use tracing::{info, warn};

use warehouse_core::{RepositoryError, RepositoryResult};

/// What happened when the manager ran an operation.
///
/// Failures are reported, never propagated: the caller gets the rendered
/// message together with the original repository error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded { message: String },
    Failed { message: String, cause: RepositoryError },
}

impl Outcome {
    /// Turn a repository result into an outcome and log it.
    ///
    /// `action` is a short gerund phrase ("updating stock") used both in the
    /// failure message and as a log field.
    pub(crate) fn report(action: &'static str, result: RepositoryResult<String>) -> Self {
        match result {
            Ok(message) => {
                info!(action, "{message}");
                Outcome::Succeeded { message }
            }
            Err(cause) => {
                warn!(
                    action,
                    id = %cause.id(),
                    kind = %cause.kind(),
                    error = %cause,
                    "operation failed"
                );
                Outcome::Failed {
                    message: format!("Error {action}: {cause}"),
                    cause,
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Succeeded { message } | Outcome::Failed { message, .. } => message,
        }
    }

    pub fn cause(&self) -> Option<&RepositoryError> {
        match self {
            Outcome::Succeeded { .. } => None,
            Outcome::Failed { cause, .. } => Some(cause),
        }
    }
}

impl core::fmt::Display for Outcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}
