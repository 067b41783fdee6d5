// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::interval::TimeRange;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Generates an `i64`-backed identifier newtype.
///
/// Identifiers are allocated by the scheduler state and stable across
/// persistence round-trips.
macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from its raw value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type! {
    /// Identifies an employee. Issued by the upstream identity provider;
    /// the scheduler never mints these.
    EmployeeId
}

id_type! {
    /// Identifies an official shift.
    ShiftId
}

id_type! {
    /// Identifies a shift assignment row.
    AssignmentId
}

id_type! {
    /// Identifies a shift proposal.
    ProposalId
}

id_type! {
    /// Identifies a swap proposal.
    SwapProposalId
}

/// Lifecycle status of a shift or swap proposal.
///
/// `Proposed` is the only non-terminal state. Every transition moves
/// forward exactly once; there is no path back to `Proposed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalStatus {
    /// Submitted by an employee, awaiting manager review.
    #[default]
    Proposed,
    /// Manager accepted; for shift proposals this materialized an official
    /// shift and assignment, for swap proposals the exchange was executed.
    Accepted,
    /// Manager rejected.
    Rejected,
    /// Manager rejected but offered an alternative slot. The employee
    /// responds by submitting a fresh proposal; nothing is auto-chained.
    AlternativeProposed,
    /// Withdrawn by the owning employee before review.
    Cancelled,
}

impl ProposalStatus {
    /// Converts this status to its canonical string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Proposed => "PROPOSED",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::AlternativeProposed => "ALTERNATIVE_PROPOSED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - `Proposed` → `Accepted`
    /// - `Proposed` → `Rejected`
    /// - `Proposed` → `AlternativeProposed`
    /// - `Proposed` → `Cancelled`
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Proposed, Self::Accepted)
                | (Self::Proposed, Self::Rejected)
                | (Self::Proposed, Self::AlternativeProposed)
                | (Self::Proposed, Self::Cancelled)
        )
    }

    /// Returns whether this status permits in-place edits by the owner.
    ///
    /// Updates and cancellation are legal only while a proposal is still
    /// awaiting review.
    #[must_use]
    pub const fn allows_owner_edits(&self) -> bool {
        matches!(self, Self::Proposed)
    }

    /// Returns whether this status is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Proposed)
    }
}

impl FromStr for ProposalStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PROPOSED" => Ok(Self::Proposed),
            "ACCEPTED" => Ok(Self::Accepted),
            "REJECTED" => Ok(Self::Rejected),
            "ALTERNATIVE_PROPOSED" => Ok(Self::AlternativeProposed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a shift assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    /// The binding is official.
    #[default]
    Confirmed,
    /// Reserved but not yet confirmed.
    Pending,
    /// Withdrawn; retained only transiently before deletion.
    Cancelled,
}

impl AssignmentStatus {
    /// Converts this status to its canonical string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Pending => "PENDING",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for AssignmentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONFIRMED" => Ok(Self::Confirmed),
            "PENDING" => Ok(Self::Pending),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An official, time-bounded work slot owned by one employee.
///
/// The owner's display name and role are denormalized onto the shift so
/// calendar views never need an identity-provider round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// The canonical shift identifier.
    pub id: ShiftId,
    /// Display title (e.g. "Morning", "Evening").
    pub title: String,
    /// The half-open time window this shift occupies.
    pub time: TimeRange,
    /// The owning employee.
    pub employee_id: EmployeeId,
    /// Denormalized owner display name.
    pub employee_name: String,
    /// Denormalized owner role label.
    pub employee_role: String,
}

impl Shift {
    /// Returns whether this shift's details match a proposed signature.
    ///
    /// Signature equality is exact on `(title, start, end)`; it is the
    /// lookup key the swap engine uses to locate a trade target.
    #[must_use]
    pub fn matches_signature(&self, title: &str, time: &TimeRange) -> bool {
        self.title == title && self.time == *time
    }
}

/// The binding record between an employee and a [`Shift`].
///
/// Per employee, no two assignments may reference shifts whose time
/// windows overlap. `(employee_id, shift_id)` is the natural lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// The canonical assignment identifier.
    pub id: AssignmentId,
    /// The bound employee.
    pub employee_id: EmployeeId,
    /// The bound shift.
    pub shift_id: ShiftId,
    /// The binding status.
    pub status: AssignmentStatus,
}

/// An employee's request to be granted a new, not-yet-existing shift.
///
/// Proposals are never physically deleted; terminal-status rows are
/// retained for audit and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftProposal {
    /// The canonical proposal identifier.
    pub id: ProposalId,
    /// The requesting employee.
    pub employee_id: EmployeeId,
    /// Employee display name, snapshotted at creation.
    pub employee_name: String,
    /// Employee role label, snapshotted at creation.
    pub employee_role: String,
    /// Proposed shift title.
    pub proposed_title: String,
    /// Proposed shift window.
    pub proposed_time: TimeRange,
    /// Current lifecycle status.
    pub status: ProposalStatus,
    /// Alternative title offered by the manager, if any.
    pub manager_alternative_title: Option<String>,
    /// Alternative window offered by the manager, if any.
    pub manager_alternative_time: Option<TimeRange>,
    /// Manager's comment on rejection or alternative.
    pub manager_comment: Option<String>,
}

/// An employee's request to trade their current shift for another
/// employee's existing shift.
///
/// The target shift is described by value (title + window); the engine
/// locates the matching assignment when a manager accepts. The lifecycle
/// is narrower than [`ShiftProposal`]: `Proposed` → `Accepted` or
/// `Rejected` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapProposal {
    /// The canonical swap proposal identifier.
    pub id: SwapProposalId,
    /// The requesting employee.
    pub employee_id: EmployeeId,
    /// Employee display name, snapshotted at creation.
    pub employee_name: String,
    /// Employee role label, snapshotted at creation.
    pub employee_role: String,
    /// The shift the employee wants to trade away.
    pub current_shift_id: ShiftId,
    /// Title of the desired target shift.
    pub proposed_title: String,
    /// Window of the desired target shift.
    pub proposed_time: TimeRange,
    /// Current lifecycle status.
    pub status: ProposalStatus,
    /// Manager's comment on decline.
    pub manager_comment: Option<String>,
}

/// Validated input for creating an official shift directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftDraft {
    /// Display title.
    pub title: String,
    /// The shift window.
    pub time: TimeRange,
    /// The owning employee.
    pub employee_id: EmployeeId,
    /// Owner display name.
    pub employee_name: String,
    /// Owner role label.
    pub employee_role: String,
}

/// Validated input for a new shift proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalDraft {
    /// The requesting employee.
    pub employee_id: EmployeeId,
    /// Proposed shift title.
    pub proposed_title: String,
    /// Proposed shift window.
    pub proposed_time: TimeRange,
}

/// Validated input for a new swap proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapDraft {
    /// The requesting employee.
    pub employee_id: EmployeeId,
    /// The shift the employee wants to trade away.
    pub current_shift_id: ShiftId,
    /// Title of the desired target shift.
    pub proposed_title: String,
    /// Window of the desired target shift.
    pub proposed_time: TimeRange,
}
