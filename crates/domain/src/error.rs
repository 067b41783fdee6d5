// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{
    AssignmentId, EmployeeId, ProposalId, ProposalStatus, ShiftId, SwapProposalId,
};
use time::OffsetDateTime;

/// Errors that can occur during domain validation and workflow transitions.
///
/// Every variant is an expected, caller-recoverable condition. The API
/// layer translates them; they are never surfaced raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Shift proposal does not exist.
    ProposalNotFound(ProposalId),
    /// Swap proposal does not exist.
    SwapProposalNotFound(SwapProposalId),
    /// Shift does not exist.
    ShiftNotFound(ShiftId),
    /// Shift assignment does not exist.
    AssignmentNotFound(AssignmentId),
    /// No assignment of the swap target matches the proposed shift details.
    NoMatchingSwapAssignment {
        /// The employee offered as the swap counterparty.
        swap_employee_id: EmployeeId,
        /// The proposed target shift title.
        title: String,
    },
    /// The employee already holds an assignment overlapping the range.
    ShiftConflict {
        /// The employee whose calendar conflicts.
        employee_id: EmployeeId,
        /// Start of the rejected range.
        start: OffsetDateTime,
        /// End of the rejected range.
        end: OffsetDateTime,
        /// The assignments that overlap the range.
        conflicting: Vec<AssignmentId>,
    },
    /// The acting employee is not the owner of the proposal.
    NotProposalOwner {
        /// The employee attempting the action.
        acting_employee_id: EmployeeId,
        /// The employee who owns the proposal.
        owner_employee_id: EmployeeId,
    },
    /// The action requires approval capability the actor does not hold.
    ApprovalRequired {
        /// The attempted action.
        action: &'static str,
    },
    /// A swap proposal references a shift its employee no longer holds.
    SwapSourceAssignmentMissing {
        /// The proposal's employee.
        employee_id: EmployeeId,
        /// The shift the proposal claims the employee holds.
        shift_id: ShiftId,
    },
    /// The employee already holds an assignment for this shift.
    DuplicateAssignment {
        /// The employee.
        employee_id: EmployeeId,
        /// The shift.
        shift_id: ShiftId,
    },
    /// The operation is not legal from the proposal's current status.
    InvalidTransition {
        /// The current status.
        from: ProposalStatus,
        /// The attempted action.
        action: &'static str,
    },
    /// A time range does not satisfy `start < end`.
    InvalidTimeRange {
        /// The offending start instant.
        start: OffsetDateTime,
        /// The offending end instant.
        end: OffsetDateTime,
    },
    /// A status string could not be parsed.
    InvalidStatus(String),
    /// A shift or proposal title is empty or too long.
    InvalidTitle(String),
    /// A manager comment exceeds the storage limit.
    InvalidComment(String),
    /// An employee display field is empty.
    InvalidEmployeeField(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProposalNotFound(id) => write!(f, "Shift proposal {id} not found"),
            Self::SwapProposalNotFound(id) => write!(f, "Swap proposal {id} not found"),
            Self::ShiftNotFound(id) => write!(f, "Shift {id} not found"),
            Self::AssignmentNotFound(id) => write!(f, "Shift assignment {id} not found"),
            Self::NoMatchingSwapAssignment {
                swap_employee_id,
                title,
            } => {
                write!(
                    f,
                    "No matching assignment for swap target: employee {swap_employee_id} holds no shift '{title}' with the proposed times"
                )
            }
            Self::ShiftConflict {
                employee_id,
                start,
                end,
                conflicting,
            } => {
                write!(
                    f,
                    "Shift conflict: employee {employee_id} has {} overlapping assignment(s) in [{start}, {end})",
                    conflicting.len()
                )
            }
            Self::NotProposalOwner {
                acting_employee_id,
                owner_employee_id,
            } => {
                write!(
                    f,
                    "Employee {acting_employee_id} cannot act on a proposal owned by employee {owner_employee_id}"
                )
            }
            Self::ApprovalRequired { action } => {
                write!(f, "'{action}' requires approval capability")
            }
            Self::SwapSourceAssignmentMissing {
                employee_id,
                shift_id,
            } => {
                write!(
                    f,
                    "Employee {employee_id} no longer holds an assignment for shift {shift_id}"
                )
            }
            Self::DuplicateAssignment {
                employee_id,
                shift_id,
            } => {
                write!(
                    f,
                    "Employee {employee_id} already holds an assignment for shift {shift_id}"
                )
            }
            Self::InvalidTransition { from, action } => {
                write!(f, "Cannot {action} a proposal in status {from}")
            }
            Self::InvalidTimeRange { start, end } => {
                write!(f, "Invalid time range: start {start} must precede end {end}")
            }
            Self::InvalidStatus(s) => write!(f, "Unknown status: {s}"),
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::InvalidComment(msg) => write!(f, "Invalid comment: {msg}"),
            Self::InvalidEmployeeField(msg) => write!(f, "Invalid employee field: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
