// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    employee_actor, manager_actor, proposal_draft, range, with_shift,
};
use crate::{Command, CoreError, Effect, State, apply};
use zab_shift_domain::{DomainError, ProposalId, ProposalStatus};

#[test]
fn test_create_proposal_persists_with_proposed_status() {
    let state = State::new();
    let draft = proposal_draft(1, "Morning", range(7, 15));

    let result = apply(
        &state,
        Command::CreateProposal { draft },
        &employee_actor(1),
    )
    .unwrap();

    assert_eq!(result.new_state.proposals.len(), 1);
    let proposal = &result.new_state.proposals[0];
    assert_eq!(proposal.status, ProposalStatus::Proposed);
    assert_eq!(proposal.proposed_title, "Morning");
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::ProposalSaved(_)]
    ));
    assert!(result.notifications.is_empty());
}

#[test]
fn test_create_proposal_snapshots_actor_identity() {
    let state = State::new();
    let draft = proposal_draft(1, "Morning", range(7, 15));

    let result = apply(
        &state,
        Command::CreateProposal { draft },
        &employee_actor(1),
    )
    .unwrap();

    let proposal = &result.new_state.proposals[0];
    assert_eq!(proposal.employee_name, "Employee 1");
    assert_eq!(proposal.employee_role, "Technician");
}

#[test]
fn test_create_proposal_for_another_employee_is_denied() {
    let state = State::new();
    let draft = proposal_draft(1, "Morning", range(7, 15));

    let result = apply(
        &state,
        Command::CreateProposal { draft },
        &employee_actor(2),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::NotProposalOwner { .. })
    ));
}

#[test]
fn test_create_proposal_with_overlapping_assignment_fails() {
    let (state, _) = with_shift(&State::new(), 1, "Morning", range(7, 15));
    let draft = proposal_draft(1, "Overlap", range(14, 22));

    let result = apply(
        &state,
        Command::CreateProposal { draft },
        &employee_actor(1),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ShiftConflict { .. })
    ));
}

#[test]
fn test_create_proposal_back_to_back_succeeds() {
    // Half-open windows: an assignment ending at 15:00 does not conflict
    // with a proposal starting at 15:00.
    let (state, _) = with_shift(&State::new(), 1, "Morning", range(7, 15));
    let draft = proposal_draft(1, "Evening", range(15, 23));

    let result = apply(
        &state,
        Command::CreateProposal { draft },
        &employee_actor(1),
    );

    assert!(result.is_ok());
}

#[test]
fn test_create_proposal_identical_range_fails() {
    let (state, _) = with_shift(&State::new(), 1, "Morning", range(7, 15));
    let draft = proposal_draft(1, "Duplicate", range(7, 15));

    let result = apply(
        &state,
        Command::CreateProposal { draft },
        &employee_actor(1),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ShiftConflict { .. })
    ));
}

#[test]
fn test_create_proposal_conflict_only_applies_to_same_employee() {
    // Employee 2's calendar does not constrain employee 1.
    let (state, _) = with_shift(&State::new(), 2, "Morning", range(7, 15));
    let draft = proposal_draft(1, "Morning", range(7, 15));

    let result = apply(
        &state,
        Command::CreateProposal { draft },
        &employee_actor(1),
    );

    assert!(result.is_ok());
}

#[test]
fn test_create_proposal_rejects_empty_title() {
    let state = State::new();
    let draft = proposal_draft(1, "  ", range(7, 15));

    let result = apply(
        &state,
        Command::CreateProposal { draft },
        &employee_actor(1),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidTitle(_))
    ));
}

fn proposed_state() -> (State, ProposalId) {
    let state = State::new();
    let draft = proposal_draft(1, "Morning", range(7, 15));
    let result = apply(
        &state,
        Command::CreateProposal { draft },
        &employee_actor(1),
    )
    .unwrap();
    let id = result.new_state.proposals[0].id;
    (result.new_state, id)
}

#[test]
fn test_update_proposal_revises_fields() {
    let (state, id) = proposed_state();

    let result = apply(
        &state,
        Command::UpdateProposal {
            proposal_id: id,
            proposed_title: String::from("Late Morning"),
            proposed_time: range(9, 17),
        },
        &employee_actor(1),
    )
    .unwrap();

    let proposal = result.new_state.proposal(id).unwrap();
    assert_eq!(proposal.proposed_title, "Late Morning");
    assert_eq!(proposal.proposed_time, range(9, 17));
    assert_eq!(proposal.status, ProposalStatus::Proposed);
}

#[test]
fn test_update_proposal_rechecks_conflicts() {
    let (state, id) = proposed_state();
    let (state, _) = with_shift(&state, 1, "Evening", range(15, 23));

    let result = apply(
        &state,
        Command::UpdateProposal {
            proposal_id: id,
            proposed_title: String::from("Morning"),
            proposed_time: range(14, 22),
        },
        &employee_actor(1),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ShiftConflict { .. })
    ));
}

#[test]
fn test_update_proposal_by_non_owner_is_denied() {
    let (state, id) = proposed_state();

    let result = apply(
        &state,
        Command::UpdateProposal {
            proposal_id: id,
            proposed_title: String::from("Hijacked"),
            proposed_time: range(9, 17),
        },
        &employee_actor(2),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::NotProposalOwner { .. })
    ));
}

#[test]
fn test_update_unknown_proposal_fails() {
    let state = State::new();

    let result = apply(
        &state,
        Command::UpdateProposal {
            proposal_id: ProposalId::new(404),
            proposed_title: String::from("Ghost"),
            proposed_time: range(9, 17),
        },
        &employee_actor(1),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ProposalNotFound(_))
    ));
}

#[test]
fn test_cancel_proposal_sets_cancelled() {
    let (state, id) = proposed_state();

    let result = apply(
        &state,
        Command::CancelProposal { proposal_id: id },
        &employee_actor(1),
    )
    .unwrap();

    assert_eq!(
        result.new_state.proposal(id).unwrap().status,
        ProposalStatus::Cancelled
    );
}

#[test]
fn test_accept_proposal_materializes_shift_and_assignment() {
    let (state, id) = proposed_state();

    let result = apply(
        &state,
        Command::AcceptProposal { proposal_id: id },
        &manager_actor(),
    )
    .unwrap();

    let new_state = &result.new_state;
    assert_eq!(new_state.proposal(id).unwrap().status, ProposalStatus::Accepted);
    assert_eq!(new_state.shifts.len(), 1);
    assert_eq!(new_state.assignments.len(), 1);

    let shift = &new_state.shifts[0];
    assert_eq!(shift.title, "Morning");
    assert_eq!(shift.time, range(7, 15));
    assert_eq!(shift.employee_id.value(), 1);
    assert_eq!(shift.employee_name, "Employee 1");

    let assignment = &new_state.assignments[0];
    assert_eq!(assignment.employee_id.value(), 1);
    assert_eq!(assignment.shift_id, shift.id);

    assert_eq!(result.notifications.len(), 1);
    assert_eq!(result.notifications[0].recipient.value(), 1);
    assert_eq!(result.notifications[0].subject, "Shift Proposal Accepted");
}

#[test]
fn test_accept_proposal_requires_approval_capability() {
    let (state, id) = proposed_state();

    let result = apply(
        &state,
        Command::AcceptProposal { proposal_id: id },
        &employee_actor(1),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ApprovalRequired { .. })
    ));
}

#[test]
fn test_second_accept_fails_and_creates_nothing() {
    let (state, id) = proposed_state();
    let accepted = apply(
        &state,
        Command::AcceptProposal { proposal_id: id },
        &manager_actor(),
    )
    .unwrap()
    .new_state;

    let result = apply(
        &accepted,
        Command::AcceptProposal { proposal_id: id },
        &manager_actor(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidTransition {
            from: ProposalStatus::Accepted,
            ..
        })
    ));
    // The failed second accept produced no state, so the original counts
    // stand: one shift, one assignment.
    assert_eq!(accepted.shifts.len(), 1);
    assert_eq!(accepted.assignments.len(), 1);
}

#[test]
fn test_accept_rechecks_conflicts_against_a_stale_calendar() {
    // The proposal was valid at creation, but the employee has since been
    // given an overlapping official shift.
    let (state, id) = proposed_state();
    let (state, _) = with_shift(&state, 1, "Cover", range(10, 18));

    let result = apply(
        &state,
        Command::AcceptProposal { proposal_id: id },
        &manager_actor(),
    );

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ShiftConflict { .. })
    ));
}

#[test]
fn test_reject_proposal_stores_comment_and_notifies() {
    let (state, id) = proposed_state();

    let result = apply(
        &state,
        Command::RejectProposal {
            proposal_id: id,
            comment: Some(String::from("Understaffed that evening")),
        },
        &manager_actor(),
    )
    .unwrap();

    let proposal = result.new_state.proposal(id).unwrap();
    assert_eq!(proposal.status, ProposalStatus::Rejected);
    assert_eq!(
        proposal.manager_comment.as_deref(),
        Some("Understaffed that evening")
    );
    assert_eq!(result.notifications.len(), 1);
    assert_eq!(result.notifications[0].subject, "Shift Proposal Rejected");
}

#[test]
fn test_propose_alternative_stores_details_without_creating_a_shift() {
    let (state, id) = proposed_state();

    let result = apply(
        &state,
        Command::ProposeAlternative {
            proposal_id: id,
            alternative: crate::AlternativeDetails {
                title: String::from("Evening"),
                time: range(15, 23),
                comment: Some(String::from("Morning is full")),
            },
        },
        &manager_actor(),
    )
    .unwrap();

    let proposal = result.new_state.proposal(id).unwrap();
    assert_eq!(proposal.status, ProposalStatus::AlternativeProposed);
    assert_eq!(proposal.manager_alternative_title.as_deref(), Some("Evening"));
    assert_eq!(proposal.manager_alternative_time, Some(range(15, 23)));
    assert_eq!(proposal.manager_comment.as_deref(), Some("Morning is full"));

    // An alternative is an offer, not a grant.
    assert!(result.new_state.shifts.is_empty());
    assert!(result.new_state.assignments.is_empty());
    assert_eq!(result.notifications.len(), 1);
}

#[test]
fn test_proposals_are_never_deleted() {
    let (state, id) = proposed_state();
    let result = apply(
        &state,
        Command::CancelProposal { proposal_id: id },
        &employee_actor(1),
    )
    .unwrap();

    // Cancelled proposals stay in the record set for audit.
    assert_eq!(result.new_state.proposals.len(), 1);
}
