// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use zab_shift_domain::{
    AssignmentId, EmployeeId, ProposalDraft, ProposalId, ShiftDraft, ShiftId, SwapDraft,
    SwapProposalId, TimeRange,
};

/// The pre-resolved identity acting on a command.
///
/// The upstream gateway authenticates the caller and resolves their
/// approval capability; the engine trusts these values and performs only
/// ownership and status checks. Display name and role are snapshotted onto
/// proposals at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The acting employee's identifier.
    pub employee_id: EmployeeId,
    /// The acting employee's display name.
    pub display_name: String,
    /// The acting employee's role label.
    pub role: String,
    /// Whether this actor may approve, reject, and administer shifts.
    pub can_approve: bool,
}

impl Actor {
    /// Creates a new `Actor`.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The acting employee's identifier
    /// * `display_name` - The acting employee's display name
    /// * `role` - The acting employee's role label
    /// * `can_approve` - Whether the actor holds approval capability
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
}

/// Manager-supplied alternative shift details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativeDetails {
    /// The alternative shift title.
    pub title: String,
    /// The alternative shift window.
    pub time: TimeRange,
    /// The manager's comment.
    pub comment: Option<String>,
}

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// An employee submits a new shift proposal.
    CreateProposal {
        /// The proposal details.
        draft: ProposalDraft,
    },
    /// The owning employee revises a pending proposal.
    UpdateProposal {
        /// The proposal to update.
        proposal_id: ProposalId,
        /// The revised title.
        proposed_title: String,
        /// The revised window.
        proposed_time: TimeRange,
    },
    /// The owning employee withdraws a pending proposal.
    CancelProposal {
        /// The proposal to cancel.
        proposal_id: ProposalId,
    },
    /// A manager accepts a proposal, materializing an official shift and
    /// a confirmed assignment.
    AcceptProposal {
        /// The proposal to accept.
        proposal_id: ProposalId,
    },
    /// A manager rejects a proposal.
    RejectProposal {
        /// The proposal to reject.
        proposal_id: ProposalId,
        /// An optional comment for the employee.
        comment: Option<String>,
    },
    /// A manager rejects a proposal but offers an alternative slot.
    ProposeAlternative {
        /// The proposal being answered.
        proposal_id: ProposalId,
        /// The alternative details.
        alternative: AlternativeDetails,
    },
    /// An employee requests to trade their current shift for another
    /// employee's existing shift.
    CreateSwapProposal {
        /// The swap details.
        draft: SwapDraft,
    },
    /// A manager accepts a swap, naming the counterparty whose matching
    /// shift is exchanged.
    AcceptShiftChange {
        /// The swap proposal to accept.
        swap_proposal_id: SwapProposalId,
        /// The employee offering the matching shift in trade.
        swap_employee_id: EmployeeId,
    },
    /// A manager declines a swap. No shift is mutated.
    DeclineShiftChange {
        /// The swap proposal to decline.
        swap_proposal_id: SwapProposalId,
        /// An optional comment for the employee.
        comment: Option<String>,
    },
    /// Privileged direct creation of an official shift and its confirmed
    /// assignment.
    CreateShift {
        /// The shift details.
        draft: ShiftDraft,
    },
    /// Privileged update of an official shift's details.
    UpdateShift {
        /// The shift to update.
        shift_id: ShiftId,
        /// The new title.
        title: String,
        /// The new window.
        time: TimeRange,
    },
    /// Privileged deletion of an official shift and its assignments.
    DeleteShift {
        /// The shift to delete.
        shift_id: ShiftId,
    },
    /// Privileged binding of an employee to an existing shift.
    AssignShift {
        /// The employee to bind.
        employee_id: EmployeeId,
        /// The shift to bind to.
        shift_id: ShiftId,
    },
    /// Privileged removal of an assignment.
    RemoveAssignment {
        /// The assignment to remove.
        assignment_id: AssignmentId,
    },
}
