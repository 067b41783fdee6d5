// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{employee_identity, instant, manager_identity, seed_shift};
use crate::{
    ApiError, CommentRequest, SwapRequest, accept_shift_change, create_swap_proposal,
    decline_shift_change, list_assignments_for_employee,
};
use zab_shift::State;

/// Employee 1 holds "Morning" 07:00-15:00, employee 2 holds "Evening"
/// 15:00-23:00, and employee 1 has requested to trade Morning for Evening.
fn swap_scenario() -> (State, i64, i64, i64) {
    let (state, morning_id) = seed_shift(&State::new(), 1, "Morning", 7, 15);
    let (state, evening_id) = seed_shift(&state, 2, "Evening", 15, 23);

    let result = create_swap_proposal(
        &state,
        &SwapRequest {
            employee_id: 1,
            current_shift_id: morning_id,
            proposed_title: String::from("Evening"),
            proposed_start_time: instant(15),
            proposed_end_time: instant(23),
        },
        &employee_identity(1),
    )
    .unwrap();

    (
        result.transition.new_state,
        result.response.id,
        morning_id,
        evening_id,
    )
}

#[test]
fn test_create_swap_proposal_returns_proposed_record() {
    let (state, proposal_id, morning_id, _) = swap_scenario();

    let record = state
        .swap_proposal(zab_shift_domain::SwapProposalId::new(proposal_id))
        .unwrap();
    assert_eq!(record.status.as_str(), "PROPOSED");
    assert_eq!(record.current_shift_id.value(), morning_id);
}

#[test]
fn test_create_swap_proposal_without_holding_the_shift_is_integrity_error() {
    let (state, _) = seed_shift(&State::new(), 2, "Morning", 7, 15);

    let result = create_swap_proposal(
        &state,
        &SwapRequest {
            employee_id: 1,
            current_shift_id: 1,
            proposed_title: String::from("Evening"),
            proposed_start_time: instant(15),
            proposed_end_time: instant(23),
        },
        &employee_identity(1),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::IntegrityViolation { .. }
    ));
}

#[test]
fn test_accept_shift_change_swaps_both_calendars() {
    let (state, proposal_id, morning_id, evening_id) = swap_scenario();

    let result = accept_shift_change(&state, proposal_id, 2, &manager_identity()).unwrap();

    assert_eq!(result.response.status, "ACCEPTED");

    let ones = list_assignments_for_employee(&result.transition.new_state, 1);
    let twos = list_assignments_for_employee(&result.transition.new_state, 2);
    assert_eq!(ones.len(), 1);
    assert_eq!(twos.len(), 1);
    assert_eq!(ones[0].shift_id, evening_id);
    assert_eq!(twos[0].shift_id, morning_id);

    // One notification per side of the trade.
    assert_eq!(result.transition.notifications.len(), 2);
}

#[test]
fn test_accept_shift_change_with_unmatched_target_is_not_found() {
    let (state, proposal_id, _, _) = swap_scenario();

    let result = accept_shift_change(&state, proposal_id, 3, &manager_identity());

    assert!(matches!(
        result.unwrap_err(),
        ApiError::ResourceNotFound { .. }
    ));
}

#[test]
fn test_decline_shift_change_leaves_calendars_untouched() {
    let (state, proposal_id, morning_id, evening_id) = swap_scenario();

    let result = decline_shift_change(
        &state,
        proposal_id,
        &CommentRequest {
            manager_comment: Some(String::from("Coverage would suffer")),
        },
        &manager_identity(),
    )
    .unwrap();

    assert_eq!(result.response.status, "REJECTED");
    assert_eq!(
        result.response.manager_comment.as_deref(),
        Some("Coverage would suffer")
    );

    let ones = list_assignments_for_employee(&result.transition.new_state, 1);
    let twos = list_assignments_for_employee(&result.transition.new_state, 2);
    assert_eq!(ones[0].shift_id, morning_id);
    assert_eq!(twos[0].shift_id, evening_id);
}
