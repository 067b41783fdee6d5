// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Actor, AlternativeDetails, Command};
use crate::effect::Effect;
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use zab_shift_domain::{
    AssignmentId, AssignmentStatus, DomainError, EmployeeId, ProposalDraft, ProposalId,
    ProposalStatus, Shift, ShiftAssignment, ShiftDraft, ShiftId, ShiftProposal, SwapDraft,
    SwapProposal, SwapProposalId, TimeRange, validate_comment, validate_employee_display,
    validate_title,
};
use zab_shift_notify::Notification;

/// Applies a command to the current state, producing a new state, the
/// row-level effects to persist, and the notification outbox.
///
/// Every arm validates first and mutates last: a returned error guarantees
/// the state was not changed and no effect was produced.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The pre-resolved acting identity
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state, effects, and outbox
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The referenced proposal, shift, or assignment does not exist
/// - A time-range conflict is detected
/// - The actor lacks ownership or approval capability
/// - The proposal's status forbids the transition
pub fn apply(state: &State, command: Command, actor: &Actor) -> Result<TransitionResult, CoreError> {
    match command {
        Command::CreateProposal { draft } => create_proposal(state, &draft, actor),
        Command::UpdateProposal {
            proposal_id,
            proposed_title,
            proposed_time,
        } => update_proposal(state, proposal_id, proposed_title, proposed_time, actor),
        Command::CancelProposal { proposal_id } => cancel_proposal(state, proposal_id, actor),
        Command::AcceptProposal { proposal_id } => accept_proposal(state, proposal_id, actor),
        Command::RejectProposal {
            proposal_id,
            comment,
        } => reject_proposal(state, proposal_id, comment, actor),
        Command::ProposeAlternative {
            proposal_id,
            alternative,
        } => propose_alternative(state, proposal_id, alternative, actor),
        Command::CreateSwapProposal { draft } => create_swap_proposal(state, &draft, actor),
        Command::AcceptShiftChange {
            swap_proposal_id,
            swap_employee_id,
        } => accept_shift_change(state, swap_proposal_id, swap_employee_id, actor),
        Command::DeclineShiftChange {
            swap_proposal_id,
            comment,
        } => decline_shift_change(state, swap_proposal_id, comment, actor),
        Command::CreateShift { draft } => create_shift(state, draft, actor),
        Command::UpdateShift {
            shift_id,
            title,
            time,
        } => update_shift(state, shift_id, title, time, actor),
        Command::DeleteShift { shift_id } => delete_shift(state, shift_id, actor),
        Command::AssignShift {
            employee_id,
            shift_id,
        } => assign_shift(state, employee_id, shift_id, actor),
        Command::RemoveAssignment { assignment_id } => {
            remove_assignment(state, assignment_id, actor)
        }
    }
}

/// Rejects the range if the employee holds any overlapping assignment.
///
/// `excluded` names an assignment left out of the check; swap
/// re-validation uses it to ignore the slot being traded away.
fn ensure_no_conflict(
    state: &State,
    employee_id: EmployeeId,
    range: &TimeRange,
    excluded: Option<AssignmentId>,
) -> Result<(), DomainError> {
    let conflicting: Vec<AssignmentId> = state
        .find_overlapping(employee_id, range)
        .into_iter()
        .filter(|assignment| excluded != Some(assignment.id))
        .map(|assignment| assignment.id)
        .collect();

    if conflicting.is_empty() {
        Ok(())
    } else {
        Err(DomainError::ShiftConflict {
            employee_id,
            start: range.start(),
            end: range.end(),
            conflicting,
        })
    }
}

/// Verifies the actor owns the resource they are acting on.
const fn ensure_owner(actor: &Actor, owner_employee_id: EmployeeId) -> Result<(), DomainError> {
    if actor.employee_id.value() == owner_employee_id.value() {
        Ok(())
    } else {
        Err(DomainError::NotProposalOwner {
            acting_employee_id: actor.employee_id,
            owner_employee_id,
        })
    }
}

/// Verifies the actor holds approval capability.
const fn ensure_approver(actor: &Actor, action: &'static str) -> Result<(), DomainError> {
    if actor.can_approve {
        Ok(())
    } else {
        Err(DomainError::ApprovalRequired { action })
    }
}

/// Verifies a proposal status permits a transition to `target`.
const fn ensure_transition(
    from: ProposalStatus,
    target: ProposalStatus,
    action: &'static str,
) -> Result<(), DomainError> {
    if from.can_transition_to(target) {
        Ok(())
    } else {
        Err(DomainError::InvalidTransition { from, action })
    }
}

fn create_proposal(
    state: &State,
    draft: &ProposalDraft,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    validate_title(&draft.proposed_title)?;
    ensure_owner(actor, draft.employee_id)?;
    ensure_no_conflict(state, draft.employee_id, &draft.proposed_time, None)?;

    let mut new_state = state.clone();
    let proposal = ShiftProposal {
        id: new_state.allocate_proposal_id(),
        employee_id: draft.employee_id,
        employee_name: actor.display_name.clone(),
        employee_role: actor.role.clone(),
        proposed_title: draft.proposed_title.clone(),
        proposed_time: draft.proposed_time,
        status: ProposalStatus::Proposed,
        manager_alternative_title: None,
        manager_alternative_time: None,
        manager_comment: None,
    };
    new_state.upsert_proposal(proposal.clone());

    Ok(TransitionResult {
        new_state,
        effects: vec![Effect::ProposalSaved(proposal)],
        notifications: Vec::new(),
    })
}

fn update_proposal(
    state: &State,
    proposal_id: ProposalId,
    proposed_title: String,
    proposed_time: TimeRange,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    validate_title(&proposed_title)?;

    let proposal = state
        .proposal(proposal_id)
        .ok_or(DomainError::ProposalNotFound(proposal_id))?;
    ensure_owner(actor, proposal.employee_id)?;
    if !proposal.status.allows_owner_edits() {
        return Err(CoreError::DomainViolation(DomainError::InvalidTransition {
            from: proposal.status,
            action: "update",
        }));
    }
    ensure_no_conflict(state, proposal.employee_id, &proposed_time, None)?;

    let mut updated = proposal.clone();
    updated.proposed_title = proposed_title;
    updated.proposed_time = proposed_time;

    let mut new_state = state.clone();
    new_state.upsert_proposal(updated.clone());

    Ok(TransitionResult {
        new_state,
        effects: vec![Effect::ProposalSaved(updated)],
        notifications: Vec::new(),
    })
}

fn cancel_proposal(
    state: &State,
    proposal_id: ProposalId,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    let proposal = state
        .proposal(proposal_id)
        .ok_or(DomainError::ProposalNotFound(proposal_id))?;
    ensure_owner(actor, proposal.employee_id)?;
    ensure_transition(proposal.status, ProposalStatus::Cancelled, "cancel")?;

    let mut updated = proposal.clone();
    updated.status = ProposalStatus::Cancelled;

    let mut new_state = state.clone();
    new_state.upsert_proposal(updated.clone());

    Ok(TransitionResult {
        new_state,
        effects: vec![Effect::ProposalSaved(updated)],
        notifications: Vec::new(),
    })
}

fn accept_proposal(
    state: &State,
    proposal_id: ProposalId,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    ensure_approver(actor, "accept proposal")?;

    let proposal = state
        .proposal(proposal_id)
        .ok_or(DomainError::ProposalNotFound(proposal_id))?;
    ensure_transition(proposal.status, ProposalStatus::Accepted, "accept")?;

    // Re-check at accept time: the employee's calendar may have changed
    // since the proposal was created.
    ensure_no_conflict(state, proposal.employee_id, &proposal.proposed_time, None)?;

    let mut new_state = state.clone();

    let shift = Shift {
        id: new_state.allocate_shift_id(),
        title: proposal.proposed_title.clone(),
        time: proposal.proposed_time,
        employee_id: proposal.employee_id,
        employee_name: proposal.employee_name.clone(),
        employee_role: proposal.employee_role.clone(),
    };
    let assignment = ShiftAssignment {
        id: new_state.allocate_assignment_id(),
        employee_id: proposal.employee_id,
        shift_id: shift.id,
        status: AssignmentStatus::Confirmed,
    };

    let mut updated = proposal.clone();
    updated.status = ProposalStatus::Accepted;

    new_state.upsert_shift(shift.clone());
    new_state.upsert_assignment(assignment.clone());
    new_state.upsert_proposal(updated.clone());

    let notification = Notification::new(
        updated.employee_id,
        String::from("Shift Proposal Accepted"),
        format!(
            "Your proposed shift '{}' {} has been accepted and is now official.",
            shift.title, shift.time
        ),
    );

    Ok(TransitionResult {
        new_state,
        effects: vec![
            Effect::ShiftSaved(shift),
            Effect::AssignmentSaved(assignment),
            Effect::ProposalSaved(updated),
        ],
        notifications: vec![notification],
    })
}

fn reject_proposal(
    state: &State,
    proposal_id: ProposalId,
    comment: Option<String>,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    ensure_approver(actor, "reject proposal")?;
    validate_comment(comment.as_deref())?;

    let proposal = state
        .proposal(proposal_id)
        .ok_or(DomainError::ProposalNotFound(proposal_id))?;
    ensure_transition(proposal.status, ProposalStatus::Rejected, "reject")?;

    let mut updated = proposal.clone();
    updated.status = ProposalStatus::Rejected;
    updated.manager_comment = comment;

    let mut new_state = state.clone();
    new_state.upsert_proposal(updated.clone());

    let notification = Notification::new(
        updated.employee_id,
        String::from("Shift Proposal Rejected"),
        updated.manager_comment.as_ref().map_or_else(
            || format!("Your proposed shift '{}' has been rejected.", updated.proposed_title),
            |comment| {
                format!(
                    "Your proposed shift '{}' has been rejected. Manager comment: {comment}",
                    updated.proposed_title
                )
            },
        ),
    );

    Ok(TransitionResult {
        new_state,
        effects: vec![Effect::ProposalSaved(updated)],
        notifications: vec![notification],
    })
}

fn propose_alternative(
    state: &State,
    proposal_id: ProposalId,
    alternative: AlternativeDetails,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    ensure_approver(actor, "propose alternative")?;
    validate_title(&alternative.title)?;
    validate_comment(alternative.comment.as_deref())?;

    let proposal = state
        .proposal(proposal_id)
        .ok_or(DomainError::ProposalNotFound(proposal_id))?;
    ensure_transition(
        proposal.status,
        ProposalStatus::AlternativeProposed,
        "propose alternative for",
    )?;

    let mut updated = proposal.clone();
    updated.status = ProposalStatus::AlternativeProposed;
    updated.manager_alternative_title = Some(alternative.title.clone());
    updated.manager_alternative_time = Some(alternative.time);
    updated.manager_comment = alternative.comment;

    let mut new_state = state.clone();
    new_state.upsert_proposal(updated.clone());

    let notification = Notification::new(
        updated.employee_id,
        String::from("Alternative Shift Proposed"),
        format!(
            "Your proposed shift '{}' was not accepted. The manager offers '{}' {} instead; submit a new proposal to take it.",
            updated.proposed_title, alternative.title, alternative.time
        ),
    );

    Ok(TransitionResult {
        new_state,
        effects: vec![Effect::ProposalSaved(updated)],
        notifications: vec![notification],
    })
}

fn create_swap_proposal(
    state: &State,
    draft: &SwapDraft,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    validate_title(&draft.proposed_title)?;
    ensure_owner(actor, draft.employee_id)?;

    // The employee must actually hold the shift they want to trade away.
    let source = state
        .assignment_for_employee_and_shift(draft.employee_id, draft.current_shift_id)
        .ok_or(DomainError::SwapSourceAssignmentMissing {
            employee_id: draft.employee_id,
            shift_id: draft.current_shift_id,
        })?;

    // The desired window must be free, not counting the slot being traded
    // away: once the swap executes, that window is vacated.
    ensure_no_conflict(state, draft.employee_id, &draft.proposed_time, Some(source.id))?;

    let mut new_state = state.clone();
    let proposal = SwapProposal {
        id: new_state.allocate_swap_proposal_id(),
        employee_id: draft.employee_id,
        employee_name: actor.display_name.clone(),
        employee_role: actor.role.clone(),
        current_shift_id: draft.current_shift_id,
        proposed_title: draft.proposed_title.clone(),
        proposed_time: draft.proposed_time,
        status: ProposalStatus::Proposed,
        manager_comment: None,
    };
    new_state.upsert_swap_proposal(proposal.clone());

    Ok(TransitionResult {
        new_state,
        effects: vec![Effect::SwapProposalSaved(proposal)],
        notifications: Vec::new(),
    })
}

#[allow(clippy::similar_names, clippy::too_many_lines)]
fn accept_shift_change(
    state: &State,
    swap_proposal_id: SwapProposalId,
    swap_employee_id: EmployeeId,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    ensure_approver(actor, "accept shift change")?;

    let proposal = state
        .swap_proposal(swap_proposal_id)
        .ok_or(DomainError::SwapProposalNotFound(swap_proposal_id))?;
    ensure_transition(proposal.status, ProposalStatus::Accepted, "accept")?;

    // Assignment A: the requesting employee's binding to the shift being
    // traded away. Its absence means the proposal has gone stale.
    let assignment_a = state
        .assignment_for_employee_and_shift(proposal.employee_id, proposal.current_shift_id)
        .ok_or(DomainError::SwapSourceAssignmentMissing {
            employee_id: proposal.employee_id,
            shift_id: proposal.current_shift_id,
        })?
        .clone();

    // Assignment B: the counterparty's binding whose shift matches the
    // proposed (title, start, end) signature exactly. Assignment ids are
    // allocated monotonically, so "first match" is deterministic.
    let assignment_b = state
        .assignments_for_employee(swap_employee_id)
        .into_iter()
        .find(|assignment| {
            state
                .shift(assignment.shift_id)
                .is_some_and(|shift| {
                    shift.matches_signature(&proposal.proposed_title, &proposal.proposed_time)
                })
        })
        .ok_or_else(|| DomainError::NoMatchingSwapAssignment {
            swap_employee_id,
            title: proposal.proposed_title.clone(),
        })?
        .clone();

    let shift_a = state
        .shift(assignment_a.shift_id)
        .ok_or(DomainError::ShiftNotFound(assignment_a.shift_id))?
        .clone();
    let shift_b = state
        .shift(assignment_b.shift_id)
        .ok_or(DomainError::ShiftNotFound(assignment_b.shift_id))?
        .clone();

    // Re-validate the counterparty: outside the slot being traded, their
    // calendar must be free across B's window.
    ensure_no_conflict(state, swap_employee_id, &shift_b.time, Some(assignment_b.id))?;

    // Degenerate swap guard: the counterparty must not already hold the
    // shift being traded to them.
    if state
        .assignment_for_employee_and_shift(swap_employee_id, shift_a.id)
        .is_some()
    {
        return Err(CoreError::DomainViolation(DomainError::DuplicateAssignment {
            employee_id: swap_employee_id,
            shift_id: shift_a.id,
        }));
    }

    // Post-exchange validation: each party's remaining calendar must be
    // free across the window they are receiving.
    ensure_no_conflict(state, proposal.employee_id, &shift_b.time, Some(assignment_a.id))?;
    ensure_no_conflict(state, swap_employee_id, &shift_a.time, Some(assignment_b.id))?;

    // All checks passed: exchange the shift references. Assignment ids
    // stay stable; only the shift_id fields (and the shifts' denormalized
    // owner columns) change hands.
    let mut new_state = state.clone();

    let mut updated_a = assignment_a;
    let mut updated_b = assignment_b;
    updated_a.shift_id = shift_b.id;
    updated_b.shift_id = shift_a.id;

    let mut traded_to_b = shift_a;
    let mut traded_to_a = shift_b;
    let requester_name = traded_to_b.employee_name.clone();
    let requester_role = traded_to_b.employee_role.clone();
    traded_to_b.employee_id = swap_employee_id;
    traded_to_b.employee_name = traded_to_a.employee_name.clone();
    traded_to_b.employee_role = traded_to_a.employee_role.clone();
    traded_to_a.employee_id = proposal.employee_id;
    traded_to_a.employee_name = requester_name;
    traded_to_a.employee_role = requester_role;

    let mut updated_proposal = proposal.clone();
    updated_proposal.status = ProposalStatus::Accepted;

    new_state.upsert_shift(traded_to_a.clone());
    new_state.upsert_shift(traded_to_b.clone());
    new_state.upsert_assignment(updated_a.clone());
    new_state.upsert_assignment(updated_b.clone());
    new_state.upsert_swap_proposal(updated_proposal.clone());

    let notifications = vec![
        Notification::new(
            updated_proposal.employee_id,
            String::from("Shift Swap Accepted"),
            format!(
                "Your shift swap request has been accepted. Your new shift is '{}' {}.",
                traded_to_a.title, traded_to_a.time
            ),
        ),
        Notification::new(
            swap_employee_id,
            String::from("Shift Swap Accepted"),
            format!(
                "A shift swap involving you has been accepted. Your new shift is '{}' {}.",
                traded_to_b.title, traded_to_b.time
            ),
        ),
    ];

    Ok(TransitionResult {
        new_state,
        effects: vec![
            Effect::ShiftSaved(traded_to_a),
            Effect::ShiftSaved(traded_to_b),
            Effect::AssignmentSaved(updated_a),
            Effect::AssignmentSaved(updated_b),
            Effect::SwapProposalSaved(updated_proposal),
        ],
        notifications,
    })
}

fn decline_shift_change(
    state: &State,
    swap_proposal_id: SwapProposalId,
    comment: Option<String>,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    ensure_approver(actor, "decline shift change")?;
    validate_comment(comment.as_deref())?;

    let proposal = state
        .swap_proposal(swap_proposal_id)
        .ok_or(DomainError::SwapProposalNotFound(swap_proposal_id))?;
    ensure_transition(proposal.status, ProposalStatus::Rejected, "decline")?;

    let mut updated = proposal.clone();
    updated.status = ProposalStatus::Rejected;
    updated.manager_comment = comment;

    let mut new_state = state.clone();
    new_state.upsert_swap_proposal(updated.clone());

    let notification = Notification::new(
        updated.employee_id,
        String::from("Shift Swap Declined"),
        updated.manager_comment.as_ref().map_or_else(
            || String::from("Your shift swap request has been declined."),
            |comment| {
                format!("Your shift swap request has been declined. Manager comment: {comment}")
            },
        ),
    );

    Ok(TransitionResult {
        new_state,
        effects: vec![Effect::SwapProposalSaved(updated)],
        notifications: vec![notification],
    })
}

fn create_shift(
    state: &State,
    draft: ShiftDraft,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    ensure_approver(actor, "create shift")?;
    validate_title(&draft.title)?;
    validate_employee_display(&draft.employee_name, &draft.employee_role)?;
    ensure_no_conflict(state, draft.employee_id, &draft.time, None)?;

    let mut new_state = state.clone();
    let shift = Shift {
        id: new_state.allocate_shift_id(),
        title: draft.title,
        time: draft.time,
        employee_id: draft.employee_id,
        employee_name: draft.employee_name,
        employee_role: draft.employee_role,
    };
    let assignment = ShiftAssignment {
        id: new_state.allocate_assignment_id(),
        employee_id: draft.employee_id,
        shift_id: shift.id,
        status: AssignmentStatus::Confirmed,
    };
    new_state.upsert_shift(shift.clone());
    new_state.upsert_assignment(assignment.clone());

    Ok(TransitionResult {
        new_state,
        effects: vec![Effect::ShiftSaved(shift), Effect::AssignmentSaved(assignment)],
        notifications: Vec::new(),
    })
}

fn update_shift(
    state: &State,
    shift_id: ShiftId,
    title: String,
    time: TimeRange,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    ensure_approver(actor, "update shift")?;
    validate_title(&title)?;

    let shift = state
        .shift(shift_id)
        .ok_or(DomainError::ShiftNotFound(shift_id))?;

    // Moving the window must not collide with the owner's other
    // assignments; the shift's own assignment is excluded.
    let own_assignment =
        state.assignment_for_employee_and_shift(shift.employee_id, shift_id);
    ensure_no_conflict(
        state,
        shift.employee_id,
        &time,
        own_assignment.map(|assignment| assignment.id),
    )?;

    let mut updated = shift.clone();
    updated.title = title;
    updated.time = time;

    let mut new_state = state.clone();
    new_state.upsert_shift(updated.clone());

    Ok(TransitionResult {
        new_state,
        effects: vec![Effect::ShiftSaved(updated)],
        notifications: Vec::new(),
    })
}

fn delete_shift(
    state: &State,
    shift_id: ShiftId,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    ensure_approver(actor, "delete shift")?;

    let shift = state
        .shift(shift_id)
        .ok_or(DomainError::ShiftNotFound(shift_id))?
        .clone();

    let bound: Vec<ShiftAssignment> = state
        .assignments_for_shift(shift_id)
        .into_iter()
        .cloned()
        .collect();

    let mut new_state = state.clone();
    let mut effects = Vec::new();
    let mut notifications = Vec::new();

    for assignment in &bound {
        new_state.remove_assignment(assignment.id);
        effects.push(Effect::AssignmentDeleted(assignment.id));
        notifications.push(Notification::new(
            assignment.employee_id,
            String::from("Shift Cancelled"),
            format!("Your shift '{}' {} has been cancelled.", shift.title, shift.time),
        ));
    }
    new_state.remove_shift(shift_id);
    effects.push(Effect::ShiftDeleted(shift_id));

    Ok(TransitionResult {
        new_state,
        effects,
        notifications,
    })
}

fn assign_shift(
    state: &State,
    employee_id: EmployeeId,
    shift_id: ShiftId,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    ensure_approver(actor, "assign shift")?;

    let shift = state
        .shift(shift_id)
        .ok_or(DomainError::ShiftNotFound(shift_id))?;

    if state
        .assignment_for_employee_and_shift(employee_id, shift_id)
        .is_some()
    {
        return Err(CoreError::DomainViolation(DomainError::DuplicateAssignment {
            employee_id,
            shift_id,
        }));
    }
    ensure_no_conflict(state, employee_id, &shift.time, None)?;

    let mut new_state = state.clone();
    let assignment = ShiftAssignment {
        id: new_state.allocate_assignment_id(),
        employee_id,
        shift_id,
        status: AssignmentStatus::Confirmed,
    };
    new_state.upsert_assignment(assignment.clone());

    Ok(TransitionResult {
        new_state,
        effects: vec![Effect::AssignmentSaved(assignment)],
        notifications: Vec::new(),
    })
}

fn remove_assignment(
    state: &State,
    assignment_id: AssignmentId,
    actor: &Actor,
) -> Result<TransitionResult, CoreError> {
    ensure_approver(actor, "remove assignment")?;

    let assignment = state
        .assignment(assignment_id)
        .ok_or(DomainError::AssignmentNotFound(assignment_id))?
        .clone();

    let mut new_state = state.clone();
    new_state.remove_assignment(assignment_id);

    let notification = state.shift(assignment.shift_id).map_or_else(
        || {
            Notification::new(
                assignment.employee_id,
                String::from("Shift Assignment Cancelled"),
                String::from("One of your shift assignments has been cancelled."),
            )
        },
        |shift| {
            Notification::new(
                assignment.employee_id,
                String::from("Shift Assignment Cancelled"),
                format!(
                    "Your assignment to shift '{}' {} has been cancelled.",
                    shift.title, shift.time
                ),
            )
        },
    );

    Ok(TransitionResult {
        new_state,
        effects: vec![Effect::AssignmentDeleted(assignment_id)],
        notifications: vec![notification],
    })
}
