// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The identity contract consumed by the scheduler.
//!
//! Authentication lives upstream: the gateway validates the caller's token
//! and forwards the resolved identity with each request. This module only
//! shapes that identity and rejects obviously malformed values; it never
//! checks credentials.

use zab_shift::Actor;
use zab_shift_domain::EmployeeId;

/// An authenticated employee with a pre-resolved approval capability.
///
/// The capability flag replaces role-string matching: the gateway decides
/// which roles may approve and the scheduler only consumes the boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedEmployee {
    /// The employee's identifier.
    pub employee_id: EmployeeId,
    /// The employee's display name.
    pub display_name: String,
    /// The employee's role label (display only).
    pub role: String,
    /// Whether this employee may approve proposals and administer shifts.
    pub can_approve: bool,
}

impl AuthenticatedEmployee {
    /// Creates a new `AuthenticatedEmployee`.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The employee's identifier
    /// * `display_name` - The employee's display name
    /// * `role` - The employee's role label
    /// * `can_approve` - Whether the employee holds approval capability
    #[must_use]
    pub const fn new(
        employee_id: EmployeeId,
        display_name: String,
        role: String,
        can_approve: bool,
    ) -> Self {
        Self {
            employee_id,
            display_name,
            role,
            can_approve,
        }
    }

    /// Converts this identity into the engine's actor representation.
    #[must_use]
    pub fn to_actor(&self) -> Actor {
        Actor::new(
            self.employee_id,
            self.display_name.clone(),
            self.role.clone(),
            self.can_approve,
        )
    }
}

/// Authentication and identity-shape errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The forwarded identity is malformed.
    AuthenticationFailed {
        /// The reason the identity was rejected.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Shapes a gateway-forwarded identity into an [`AuthenticatedEmployee`].
///
/// The values arrive pre-authenticated; this function only rejects
/// identities that cannot be real (non-positive ids, empty names).
///
/// # Arguments
///
/// * `employee_id` - The forwarded employee identifier
/// * `display_name` - The forwarded display name
/// * `role` - The forwarded role label
/// * `can_approve` - The forwarded approval capability
///
/// # Errors
///
/// Returns an error if the id is not positive or the display name or role
/// is empty.
pub fn resolve_identity(
    employee_id: i64,
    display_name: &str,
    role: &str,
    can_approve: bool,
) -> Result<AuthenticatedEmployee, AuthError> {
    if employee_id <= 0 {
        return Err(AuthError::AuthenticationFailed {
            reason: format!("Employee id must be positive, got {employee_id}"),
        });
    }
    if display_name.trim().is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Employee display name cannot be empty"),
        });
    }
    if role.trim().is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Employee role cannot be empty"),
        });
    }
    Ok(AuthenticatedEmployee::new(
        EmployeeId::new(employee_id),
        display_name.to_string(),
        role.to_string(),
        can_approve,
    ))
}
