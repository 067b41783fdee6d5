// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Mutating handlers return an [`ApiResult`] carrying both the wire
//! response and the engine transition; the server persists the transition
//! and dispatches its notification outbox after the commit. Handlers never
//! perform I/O themselves.

use time::OffsetDateTime;
use tracing::info;
use zab_shift::{AlternativeDetails, Command, State, TransitionResult, apply};
use zab_shift_domain::{
    AssignmentId, EmployeeId, ProposalDraft, ProposalId, ShiftDraft, ShiftId, SwapDraft,
    SwapProposalId, TimeRange,
};

use crate::auth::AuthenticatedEmployee;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AlternativeRequest, AssignShiftRequest, AssignmentRecord, CommentRequest, ProposalRecord,
    ProposalRequest, ShiftRecord, ShiftRequest, SwapProposalRecord, SwapRequest,
    UpdateProposalRequest, UpdateShiftRequest,
};

/// The result of a mutating API operation.
///
/// The transition must be persisted before the response is returned to
/// the caller; its notification outbox is dispatched post-commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The engine transition produced by this operation.
    pub transition: TransitionResult,
}

/// Builds a validated time range from two wire instants.
fn time_range(start: OffsetDateTime, end: OffsetDateTime) -> Result<TimeRange, ApiError> {
    TimeRange::new(start, end).map_err(translate_domain_error)
}

/// Requires the identity to hold approval capability for a read.
fn require_approver(identity: &AuthenticatedEmployee, action: &str) -> Result<(), ApiError> {
    if identity.can_approve {
        Ok(())
    } else {
        Err(ApiError::Unauthorized {
            action: action.to_string(),
            message: format!("'{action}' requires approval capability"),
        })
    }
}

/// Requires the identity to be the named employee or an approver.
fn require_self_or_approver(
    identity: &AuthenticatedEmployee,
    employee_id: i64,
    action: &str,
) -> Result<(), ApiError> {
    if identity.can_approve || identity.employee_id.value() == employee_id {
        Ok(())
    } else {
        Err(ApiError::Unauthorized {
            action: action.to_string(),
            message: format!("'{action}' is limited to the employee themselves or an approver"),
        })
    }
}

/// Looks up the proposal a transition just touched.
fn proposal_response(
    transition: TransitionResult,
    proposal_id: ProposalId,
) -> Result<ApiResult<ProposalRecord>, ApiError> {
    let response = transition
        .new_state
        .proposal(proposal_id)
        .map(ProposalRecord::from)
        .ok_or_else(|| ApiError::Internal {
            message: format!("Proposal {proposal_id} vanished after transition"),
        })?;
    Ok(ApiResult {
        response,
        transition,
    })
}

/// Looks up the swap proposal a transition just touched.
fn swap_response(
    transition: TransitionResult,
    proposal_id: SwapProposalId,
) -> Result<ApiResult<SwapProposalRecord>, ApiError> {
    let response = transition
        .new_state
        .swap_proposal(proposal_id)
        .map(SwapProposalRecord::from)
        .ok_or_else(|| ApiError::Internal {
            message: format!("Swap proposal {proposal_id} vanished after transition"),
        })?;
    Ok(ApiResult {
        response,
        transition,
    })
}

/// Submits a new shift proposal.
///
/// The authenticated identity is the snapshot source for the proposal's
/// display fields; the request's display fields are advisory.
///
/// # Errors
///
/// Returns an error if the range is invalid, the acting identity does not
/// match the proposal's employee, or the employee's calendar conflicts.
pub fn create_proposal(
    state: &State,
    request: &ProposalRequest,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<ProposalRecord>, ApiError> {
    info!(
        employee_id = request.employee_id,
        title = %request.proposed_title,
        "Creating shift proposal"
    );

    let draft = ProposalDraft {
        employee_id: EmployeeId::new(request.employee_id),
        proposed_title: request.proposed_title.clone(),
        proposed_time: time_range(request.proposed_start_time, request.proposed_end_time)?,
    };

    let transition = apply(
        state,
        Command::CreateProposal { draft },
        &identity.to_actor(),
    )
    .map_err(translate_core_error)?;

    let proposal_id = transition
        .new_state
        .proposals
        .last()
        .map(|proposal| proposal.id)
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Created proposal missing from state"),
        })?;
    proposal_response(transition, proposal_id)
}

/// Revises a pending proposal.
///
/// # Errors
///
/// Returns an error if the proposal is missing, the identity is not the
/// owner, the status is no longer `PROPOSED`, or the new range conflicts.
pub fn update_proposal(
    state: &State,
    proposal_id: i64,
    request: &UpdateProposalRequest,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<ProposalRecord>, ApiError> {
    info!(proposal_id, "Updating shift proposal");

    let proposal_id = ProposalId::new(proposal_id);
    let transition = apply(
        state,
        Command::UpdateProposal {
            proposal_id,
            proposed_title: request.proposed_title.clone(),
            proposed_time: time_range(request.proposed_start_time, request.proposed_end_time)?,
        },
        &identity.to_actor(),
    )
    .map_err(translate_core_error)?;
    proposal_response(transition, proposal_id)
}

/// Withdraws a pending proposal.
///
/// # Errors
///
/// Returns an error if the proposal is missing, the identity is not the
/// owner, or the status is no longer `PROPOSED`.
pub fn cancel_proposal(
    state: &State,
    proposal_id: i64,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<ProposalRecord>, ApiError> {
    info!(proposal_id, "Cancelling shift proposal");

    let proposal_id = ProposalId::new(proposal_id);
    let transition = apply(
        state,
        Command::CancelProposal { proposal_id },
        &identity.to_actor(),
    )
    .map_err(translate_core_error)?;
    proposal_response(transition, proposal_id)
}

/// Accepts a proposal, materializing an official shift and assignment.
///
/// # Errors
///
/// Returns an error if the identity lacks approval capability, the
/// proposal is missing or no longer `PROPOSED`, or the employee's
/// calendar has grown a conflict since submission.
pub fn accept_proposal(
    state: &State,
    proposal_id: i64,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<ProposalRecord>, ApiError> {
    info!(proposal_id, "Accepting shift proposal");

    let proposal_id = ProposalId::new(proposal_id);
    let transition = apply(
        state,
        Command::AcceptProposal { proposal_id },
        &identity.to_actor(),
    )
    .map_err(translate_core_error)?;
    proposal_response(transition, proposal_id)
}

/// Rejects a proposal.
///
/// # Errors
///
/// Returns an error if the identity lacks approval capability or the
/// proposal is missing or no longer `PROPOSED`.
pub fn reject_proposal(
    state: &State,
    proposal_id: i64,
    request: &CommentRequest,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<ProposalRecord>, ApiError> {
    info!(proposal_id, "Rejecting shift proposal");

    let proposal_id = ProposalId::new(proposal_id);
    let transition = apply(
        state,
        Command::RejectProposal {
            proposal_id,
            comment: request.manager_comment.clone(),
        },
        &identity.to_actor(),
    )
    .map_err(translate_core_error)?;
    proposal_response(transition, proposal_id)
}

/// Rejects a proposal while offering an alternative slot.
///
/// # Errors
///
/// Returns an error if the identity lacks approval capability, the range
/// is invalid, or the proposal is missing or no longer `PROPOSED`.
pub fn propose_alternative(
    state: &State,
    proposal_id: i64,
    request: &AlternativeRequest,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<ProposalRecord>, ApiError> {
    info!(proposal_id, "Proposing alternative shift");

    let proposal_id = ProposalId::new(proposal_id);
    let transition = apply(
        state,
        Command::ProposeAlternative {
            proposal_id,
            alternative: AlternativeDetails {
                title: request.proposed_title.clone(),
                time: time_range(request.proposed_start_time, request.proposed_end_time)?,
                comment: request.manager_comment.clone(),
            },
        },
        &identity.to_actor(),
    )
    .map_err(translate_core_error)?;
    proposal_response(transition, proposal_id)
}

/// Submits a new swap proposal.
///
/// # Errors
///
/// Returns an error if the range is invalid, the identity does not match
/// the requesting employee, the employee does not hold the shift being
/// traded away, or the desired window conflicts with their other
/// assignments.
pub fn create_swap_proposal(
    state: &State,
    request: &SwapRequest,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<SwapProposalRecord>, ApiError> {
    info!(
        employee_id = request.employee_id,
        current_shift_id = request.current_shift_id,
        "Creating swap proposal"
    );

    let draft = SwapDraft {
        employee_id: EmployeeId::new(request.employee_id),
        current_shift_id: ShiftId::new(request.current_shift_id),
        proposed_title: request.proposed_title.clone(),
        proposed_time: time_range(request.proposed_start_time, request.proposed_end_time)?,
    };

    let transition = apply(
        state,
        Command::CreateSwapProposal { draft },
        &identity.to_actor(),
    )
    .map_err(translate_core_error)?;

    let proposal_id = transition
        .new_state
        .swap_proposals
        .last()
        .map(|proposal| proposal.id)
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Created swap proposal missing from state"),
        })?;
    swap_response(transition, proposal_id)
}

/// Accepts a swap, exchanging the two matched shifts atomically.
///
/// # Errors
///
/// Returns an error if the identity lacks approval capability, the
/// proposal or either assignment is missing, the counterparty's calendar
/// conflicts, or the exchange would duplicate a binding.
pub fn accept_shift_change(
    state: &State,
    swap_proposal_id: i64,
    swap_employee_id: i64,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<SwapProposalRecord>, ApiError> {
    info!(
        swap_proposal_id,
        swap_employee_id, "Accepting shift change"
    );

    let swap_proposal_id = SwapProposalId::new(swap_proposal_id);
    let transition = apply(
        state,
        Command::AcceptShiftChange {
            swap_proposal_id,
            swap_employee_id: EmployeeId::new(swap_employee_id),
        },
        &identity.to_actor(),
    )
    .map_err(translate_core_error)?;
    swap_response(transition, swap_proposal_id)
}

/// Declines a swap. No shift is mutated.
///
/// # Errors
///
/// Returns an error if the identity lacks approval capability or the
/// proposal is missing or no longer `PROPOSED`.
pub fn decline_shift_change(
    state: &State,
    swap_proposal_id: i64,
    request: &CommentRequest,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<SwapProposalRecord>, ApiError> {
    info!(swap_proposal_id, "Declining shift change");

    let swap_proposal_id = SwapProposalId::new(swap_proposal_id);
    let transition = apply(
        state,
        Command::DeclineShiftChange {
            swap_proposal_id,
            comment: request.manager_comment.clone(),
        },
        &identity.to_actor(),
    )
    .map_err(translate_core_error)?;
    swap_response(transition, swap_proposal_id)
}

/// Creates an official shift directly.
///
/// # Errors
///
/// Returns an error if the identity lacks approval capability, the range
/// is invalid, or the owner's calendar conflicts.
pub fn create_shift(
    state: &State,
    request: &ShiftRequest,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<ShiftRecord>, ApiError> {
    info!(employee_id = request.employee_id, title = %request.title, "Creating shift");

    let draft = ShiftDraft {
        title: request.title.clone(),
        time: time_range(request.start_time, request.end_time)?,
        employee_id: EmployeeId::new(request.employee_id),
        employee_name: request.employee_name.clone(),
        employee_role: request.employee_role.clone(),
    };

    let transition = apply(state, Command::CreateShift { draft }, &identity.to_actor())
        .map_err(translate_core_error)?;

    let response = transition
        .new_state
        .shifts
        .last()
        .map(ShiftRecord::from)
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Created shift missing from state"),
        })?;
    Ok(ApiResult {
        response,
        transition,
    })
}

/// Updates an official shift's details.
///
/// # Errors
///
/// Returns an error if the identity lacks approval capability, the shift
/// is missing, or the new window conflicts with the owner's other
/// assignments.
pub fn update_shift(
    state: &State,
    shift_id: i64,
    request: &UpdateShiftRequest,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<ShiftRecord>, ApiError> {
    info!(shift_id, "Updating shift");

    let shift_id = ShiftId::new(shift_id);
    let transition = apply(
        state,
        Command::UpdateShift {
            shift_id,
            title: request.title.clone(),
            time: time_range(request.start_time, request.end_time)?,
        },
        &identity.to_actor(),
    )
    .map_err(translate_core_error)?;

    let response = transition
        .new_state
        .shift(shift_id)
        .map(ShiftRecord::from)
        .ok_or_else(|| ApiError::Internal {
            message: format!("Shift {shift_id} vanished after transition"),
        })?;
    Ok(ApiResult {
        response,
        transition,
    })
}

/// Deletes an official shift and its assignments, notifying the affected
/// employees.
///
/// # Errors
///
/// Returns an error if the identity lacks approval capability or the
/// shift is missing.
pub fn delete_shift(
    state: &State,
    shift_id: i64,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<()>, ApiError> {
    info!(shift_id, "Deleting shift");

    let transition = apply(
        state,
        Command::DeleteShift {
            shift_id: ShiftId::new(shift_id),
        },
        &identity.to_actor(),
    )
    .map_err(translate_core_error)?;
    Ok(ApiResult {
        response: (),
        transition,
    })
}

/// Binds an employee to an existing shift.
///
/// # Errors
///
/// Returns an error if the identity lacks approval capability, the shift
/// is missing, the binding already exists, or the employee's calendar
/// conflicts.
pub fn assign_shift(
    state: &State,
    request: &AssignShiftRequest,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<AssignmentRecord>, ApiError> {
    info!(
        employee_id = request.employee_id,
        shift_id = request.shift_id,
        "Assigning shift"
    );

    let transition = apply(
        state,
        Command::AssignShift {
            employee_id: EmployeeId::new(request.employee_id),
            shift_id: ShiftId::new(request.shift_id),
        },
        &identity.to_actor(),
    )
    .map_err(translate_core_error)?;

    let response = transition
        .new_state
        .assignments
        .last()
        .map(AssignmentRecord::from)
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Created assignment missing from state"),
        })?;
    Ok(ApiResult {
        response,
        transition,
    })
}

/// Removes an assignment, notifying the owning employee.
///
/// # Errors
///
/// Returns an error if the identity lacks approval capability or the
/// assignment is missing.
pub fn remove_assignment(
    state: &State,
    assignment_id: i64,
    identity: &AuthenticatedEmployee,
) -> Result<ApiResult<()>, ApiError> {
    info!(assignment_id, "Removing assignment");

    let transition = apply(
        state,
        Command::RemoveAssignment {
            assignment_id: AssignmentId::new(assignment_id),
        },
        &identity.to_actor(),
    )
    .map_err(translate_core_error)?;
    Ok(ApiResult {
        response: (),
        transition,
    })
}

/// Lists every shift proposal. Approver-only.
///
/// # Errors
///
/// Returns an error if the identity lacks approval capability.
pub fn list_proposals(
    state: &State,
    identity: &AuthenticatedEmployee,
) -> Result<Vec<ProposalRecord>, ApiError> {
    require_approver(identity, "list all proposals")?;
    Ok(state.proposals.iter().map(ProposalRecord::from).collect())
}

/// Lists an employee's shift proposals. Self-or-approver.
///
/// # Errors
///
/// Returns an error if the identity is neither the employee nor an
/// approver.
pub fn list_proposals_for_employee(
    state: &State,
    employee_id: i64,
    identity: &AuthenticatedEmployee,
) -> Result<Vec<ProposalRecord>, ApiError> {
    require_self_or_approver(identity, employee_id, "list proposals")?;
    Ok(state
        .proposals
        .iter()
        .filter(|proposal| proposal.employee_id.value() == employee_id)
        .map(ProposalRecord::from)
        .collect())
}

/// Lists every swap proposal. Approver-only.
///
/// # Errors
///
/// Returns an error if the identity lacks approval capability.
pub fn list_swap_proposals(
    state: &State,
    identity: &AuthenticatedEmployee,
) -> Result<Vec<SwapProposalRecord>, ApiError> {
    require_approver(identity, "list all swap proposals")?;
    Ok(state
        .swap_proposals
        .iter()
        .map(SwapProposalRecord::from)
        .collect())
}

/// Lists an employee's swap proposals. Self-or-approver.
///
/// # Errors
///
/// Returns an error if the identity is neither the employee nor an
/// approver.
pub fn list_swap_proposals_for_employee(
    state: &State,
    employee_id: i64,
    identity: &AuthenticatedEmployee,
) -> Result<Vec<SwapProposalRecord>, ApiError> {
    require_self_or_approver(identity, employee_id, "list swap proposals")?;
    Ok(state
        .swap_proposals
        .iter()
        .filter(|proposal| proposal.employee_id.value() == employee_id)
        .map(SwapProposalRecord::from)
        .collect())
}

/// Lists every official shift.
#[must_use]
pub fn list_shifts(state: &State) -> Vec<ShiftRecord> {
    state.shifts.iter().map(ShiftRecord::from).collect()
}

/// Looks up a single shift.
///
/// # Errors
///
/// Returns an error if the shift does not exist.
pub fn get_shift(state: &State, shift_id: i64) -> Result<ShiftRecord, ApiError> {
    state
        .shift(ShiftId::new(shift_id))
        .map(ShiftRecord::from)
        .ok_or_else(|| {
            translate_domain_error(zab_shift_domain::DomainError::ShiftNotFound(ShiftId::new(
                shift_id,
            )))
        })
}

/// Lists an employee's assignments.
#[must_use]
pub fn list_assignments_for_employee(state: &State, employee_id: i64) -> Vec<AssignmentRecord> {
    state
        .assignments_for_employee(EmployeeId::new(employee_id))
        .into_iter()
        .map(AssignmentRecord::from)
        .collect()
}

/// Lists the assignments bound to a shift.
#[must_use]
pub fn list_assignments_for_shift(state: &State, shift_id: i64) -> Vec<AssignmentRecord> {
    state
        .assignments_for_shift(ShiftId::new(shift_id))
        .into_iter()
        .map(AssignmentRecord::from)
        .collect()
}
