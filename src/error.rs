//! Errors returned by the match generation entry points.

use thiserror::Error;

use crate::validation::ValidationError;

/// Why a schedule could not be generated.
///
/// A schedule that stops short of its target is *not* an error; only
/// requests rejected before any scheduling work produce one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The roster failed structural checks (blank or duplicate names).
    #[error("invalid roster: {}", join_messages(.0))]
    InvalidRoster(Vec<ValidationError>),
    /// The roster or games target does not meet the mode's preconditions.
    #[error(transparent)]
    Precondition(#[from] ValidationError),
}

impl ScheduleError {
    /// All underlying validation errors.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ScheduleError::InvalidRoster(errors) => errors,
            ScheduleError::Precondition(err) => std::slice::from_ref(err),
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
