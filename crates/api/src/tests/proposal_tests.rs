// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    employee_identity, instant, manager_identity, proposal_request, seed_shift,
};
use crate::{
    AlternativeRequest, ApiError, CommentRequest, UpdateProposalRequest, accept_proposal,
    cancel_proposal, create_proposal, propose_alternative, reject_proposal, update_proposal,
};
use zab_shift::State;

#[test]
fn test_create_proposal_returns_proposed_record() {
    let state = State::new();
    let request = proposal_request(1, "Morning", 7, 15);

    let result = create_proposal(&state, &request, &employee_identity(1)).unwrap();

    assert_eq!(result.response.status, "PROPOSED");
    assert_eq!(result.response.employee_id, 1);
    assert_eq!(result.response.proposed_title, "Morning");
    assert_eq!(result.response.proposed_start_time, instant(7));
    assert_eq!(result.response.proposed_end_time, instant(15));
    assert!(result.response.manager_comment.is_none());
}

#[test]
fn test_create_proposal_snapshot_comes_from_identity_not_request() {
    let state = State::new();
    let mut request = proposal_request(1, "Morning", 7, 15);
    request.employee_name = String::from("Spoofed Name");
    request.employee_role = String::from("Spoofed Role");

    let result = create_proposal(&state, &request, &employee_identity(1)).unwrap();

    assert_eq!(result.response.employee_name, "Employee 1");
    assert_eq!(result.response.employee_role, "Technician");
}

#[test]
fn test_create_proposal_with_inverted_range_is_invalid_input() {
    let state = State::new();
    let request = proposal_request(1, "Backwards", 15, 7);

    let result = create_proposal(&state, &request, &employee_identity(1));

    assert!(matches!(
        result.unwrap_err(),
        ApiError::InvalidInput { .. }
    ));
}

#[test]
fn test_create_proposal_conflict_maps_to_conflict_error() {
    let (state, _) = seed_shift(&State::new(), 1, "Morning", 7, 15);
    let request = proposal_request(1, "Overlap", 14, 22);

    let result = create_proposal(&state, &request, &employee_identity(1));

    assert!(matches!(result.unwrap_err(), ApiError::Conflict { .. }));
}

#[test]
fn test_update_then_accept_round_trip() {
    let state = State::new();
    let created = create_proposal(
        &state,
        &proposal_request(1, "Morning", 7, 15),
        &employee_identity(1),
    )
    .unwrap();
    let state = created.transition.new_state;
    let id = created.response.id;

    let updated = update_proposal(
        &state,
        id,
        &UpdateProposalRequest {
            proposed_title: String::from("Late Morning"),
            proposed_start_time: instant(9),
            proposed_end_time: instant(17),
        },
        &employee_identity(1),
    )
    .unwrap();
    let state = updated.transition.new_state;

    let accepted = accept_proposal(&state, id, &manager_identity()).unwrap();

    assert_eq!(accepted.response.status, "ACCEPTED");
    assert_eq!(accepted.transition.new_state.shifts.len(), 1);
    assert_eq!(accepted.transition.new_state.shifts[0].title, "Late Morning");
    assert_eq!(accepted.transition.notifications.len(), 1);
}

#[test]
fn test_accept_missing_proposal_is_not_found() {
    let state = State::new();

    let result = accept_proposal(&state, 404, &manager_identity());

    assert!(matches!(
        result.unwrap_err(),
        ApiError::ResourceNotFound { .. }
    ));
}

#[test]
fn test_second_accept_is_invalid_state() {
    let state = State::new();
    let created = create_proposal(
        &state,
        &proposal_request(1, "Morning", 7, 15),
        &employee_identity(1),
    )
    .unwrap();
    let id = created.response.id;
    let state = accept_proposal(&created.transition.new_state, id, &manager_identity())
        .unwrap()
        .transition
        .new_state;

    let result = accept_proposal(&state, id, &manager_identity());

    assert!(matches!(result.unwrap_err(), ApiError::InvalidState { .. }));
}

#[test]
fn test_cancel_returns_cancelled_record() {
    let state = State::new();
    let created = create_proposal(
        &state,
        &proposal_request(1, "Morning", 7, 15),
        &employee_identity(1),
    )
    .unwrap();
    let id = created.response.id;

    let cancelled =
        cancel_proposal(&created.transition.new_state, id, &employee_identity(1)).unwrap();

    assert_eq!(cancelled.response.status, "CANCELLED");
}

#[test]
fn test_reject_carries_comment_into_record() {
    let state = State::new();
    let created = create_proposal(
        &state,
        &proposal_request(1, "Morning", 7, 15),
        &employee_identity(1),
    )
    .unwrap();
    let id = created.response.id;

    let rejected = reject_proposal(
        &created.transition.new_state,
        id,
        &CommentRequest {
            manager_comment: Some(String::from("Fully staffed")),
        },
        &manager_identity(),
    )
    .unwrap();

    assert_eq!(rejected.response.status, "REJECTED");
    assert_eq!(
        rejected.response.manager_comment.as_deref(),
        Some("Fully staffed")
    );
}

#[test]
fn test_alternative_fields_round_trip_through_the_record() {
    let state = State::new();
    let created = create_proposal(
        &state,
        &proposal_request(1, "Morning", 7, 15),
        &employee_identity(1),
    )
    .unwrap();
    let id = created.response.id;

    let answered = propose_alternative(
        &created.transition.new_state,
        id,
        &AlternativeRequest {
            proposed_title: String::from("Evening"),
            proposed_start_time: instant(15),
            proposed_end_time: instant(23),
            manager_comment: Some(String::from("Morning is full")),
        },
        &manager_identity(),
    )
    .unwrap();

    assert_eq!(answered.response.status, "ALTERNATIVE_PROPOSED");
    assert_eq!(
        answered.response.manager_alternative_title.as_deref(),
        Some("Evening")
    );
    assert_eq!(
        answered.response.manager_alternative_start_time,
        Some(instant(15))
    );
    assert_eq!(
        answered.response.manager_alternative_end_time,
        Some(instant(23))
    );
    // An alternative never creates shifts.
    assert!(answered.transition.new_state.shifts.is_empty());
}
