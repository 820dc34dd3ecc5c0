use thiserror::Error;

use super::SessionPhase;

/// Errors the controller reports to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no field named `{0}` in this form")]
    InvalidField(String),

    #[error("required field `{0}` is empty")]
    RequiredFieldMissing(String),

    #[error("`{op}` is not valid while the session is {phase}")]
    InvalidState {
        op: &'static str,
        phase: SessionPhase,
    },
}
