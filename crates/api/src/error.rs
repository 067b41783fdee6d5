// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::auth::AuthError;
use zab_shift::CoreError;
use zab_shift_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. Each variant maps to one HTTP status class so the server
/// can translate mechanically: `Unauthorized` → 403, `Conflict` → 409,
/// `ResourceNotFound` → 404, `IntegrityViolation`/`InvalidState` → 422,
/// `InvalidInput` → 400, `Internal` → 500.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The actor does not have permission for this action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// A human-readable description of the denial.
        message: String,
    },
    /// A time-range overlap was detected.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A referenced record is inconsistent with the proposal state.
    IntegrityViolation {
        /// A human-readable description of the inconsistency.
        message: String,
    },
    /// The operation is not legal from the resource's current status.
    InvalidState {
        /// A human-readable description of the illegal transition.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { action, message } => {
                write!(f, "Unauthorized to {action}: {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::IntegrityViolation { message } => {
                write!(f, "Integrity violation: {message}")
            }
            Self::InvalidState { message } => write!(f, "Invalid state: {message}"),
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::ProposalNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Shift proposal"),
            message: format!("Shift proposal {id} does not exist"),
        },
        DomainError::SwapProposalNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Swap proposal"),
            message: format!("Swap proposal {id} does not exist"),
        },
        DomainError::ShiftNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Shift"),
            message: format!("Shift {id} does not exist"),
        },
        DomainError::AssignmentNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Shift assignment"),
            message: format!("Shift assignment {id} does not exist"),
        },
        DomainError::NoMatchingSwapAssignment { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Swap target assignment"),
            message: err.to_string(),
        },
        DomainError::ShiftConflict { .. } => ApiError::Conflict {
            message: err.to_string(),
        },
        DomainError::NotProposalOwner { .. } => ApiError::Unauthorized {
            action: String::from("act on this proposal"),
            message: err.to_string(),
        },
        DomainError::ApprovalRequired { action } => ApiError::Unauthorized {
            action: action.to_string(),
            message: err.to_string(),
        },
        DomainError::SwapSourceAssignmentMissing { .. }
        | DomainError::DuplicateAssignment { .. } => ApiError::IntegrityViolation {
            message: err.to_string(),
        },
        DomainError::InvalidTransition { .. } => ApiError::InvalidState {
            message: err.to_string(),
        },
        DomainError::InvalidTimeRange { .. } => ApiError::InvalidInput {
            field: String::from("start_time/end_time"),
            message: err.to_string(),
        },
        DomainError::InvalidStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message: err.to_string(),
        },
        DomainError::InvalidTitle(msg) => ApiError::InvalidInput {
            field: String::from("title"),
            message: msg,
        },
        DomainError::InvalidComment(msg) => ApiError::InvalidInput {
            field: String::from("manager_comment"),
            message: msg,
        },
        DomainError::InvalidEmployeeField(msg) => ApiError::InvalidInput {
            field: String::from("employee"),
            message: msg,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
