// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crate::SqlitePersistence;
use time::{Date, Month, Time};
use zab_shift::{Actor, Command, State, TransitionResult, apply};
use zab_shift_domain::{
    EmployeeId, ProposalDraft, ProposalStatus, ShiftDraft, SwapDraft, TimeRange,
};

fn range(start_hour: u8, end_hour: u8) -> TimeRange {
    let date = Date::from_calendar_date(2025, Month::March, 25).unwrap();
    TimeRange::new(
        date.with_time(Time::from_hms(start_hour, 0, 0).unwrap())
            .assume_utc(),
        date.with_time(Time::from_hms(end_hour, 0, 0).unwrap())
            .assume_utc(),
    )
    .unwrap()
}

fn employee_actor(employee_id: i64) -> Actor {
    Actor::new(
        EmployeeId::new(employee_id),
        format!("Employee {employee_id}"),
        String::from("Technician"),
        false,
    )
}

fn manager_actor() -> Actor {
    Actor::new(
        EmployeeId::new(900),
        String::from("Morgan Manager"),
        String::from("Shift-Supervisor"),
        true,
    )
}

/// Applies a command and persists the resulting transition.
fn step(
    persistence: &mut SqlitePersistence,
    state: &State,
    command: Command,
    actor: &Actor,
) -> State {
    let transition: TransitionResult = apply(state, command, actor).unwrap();
    persistence.persist_transition(&transition).unwrap();
    transition.new_state
}

fn shift_command(employee_id: i64, title: &str, window: TimeRange) -> Command {
    Command::CreateShift {
        draft: ShiftDraft {
            title: String::from(title),
            time: window,
            employee_id: EmployeeId::new(employee_id),
            employee_name: format!("Employee {employee_id}"),
            employee_role: String::from("Technician"),
        },
    }
}

#[test]
fn test_fresh_database_loads_empty_state() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let state = persistence.load_state().unwrap();
    assert_eq!(state, State::new());
}

#[test]
fn test_proposal_round_trip() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let state = State::new();

    let state = step(
        &mut persistence,
        &state,
        Command::CreateProposal {
            draft: ProposalDraft {
                employee_id: EmployeeId::new(1),
                proposed_title: String::from("Morning"),
                proposed_time: range(7, 15),
            },
        },
        &employee_actor(1),
    );

    let loaded = persistence.load_state().unwrap();
    assert_eq!(loaded, state);
    assert_eq!(loaded.proposals.len(), 1);
    assert_eq!(loaded.proposals[0].status, ProposalStatus::Proposed);
    assert_eq!(loaded.proposals[0].proposed_time, range(7, 15));
}

#[test]
fn test_accept_proposal_persists_shift_and_assignment_together() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let state = State::new();

    let state = step(
        &mut persistence,
        &state,
        Command::CreateProposal {
            draft: ProposalDraft {
                employee_id: EmployeeId::new(1),
                proposed_title: String::from("Morning"),
                proposed_time: range(7, 15),
            },
        },
        &employee_actor(1),
    );
    let proposal_id = state.proposals[0].id;
    let state = step(
        &mut persistence,
        &state,
        Command::AcceptProposal { proposal_id },
        &manager_actor(),
    );

    let loaded = persistence.load_state().unwrap();
    assert_eq!(loaded, state);
    assert_eq!(loaded.shifts.len(), 1);
    assert_eq!(loaded.assignments.len(), 1);
    assert_eq!(
        loaded.proposal(proposal_id).unwrap().status,
        ProposalStatus::Accepted
    );
}

#[test]
fn test_swap_round_trip_updates_both_assignments() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let state = State::new();

    let state = step(
        &mut persistence,
        &state,
        shift_command(1, "Morning", range(7, 15)),
        &manager_actor(),
    );
    let morning_id = state.shifts[0].id;
    let state = step(
        &mut persistence,
        &state,
        shift_command(2, "Evening", range(15, 23)),
        &manager_actor(),
    );
    let evening_id = state.shifts[1].id;

    let state = step(
        &mut persistence,
        &state,
        Command::CreateSwapProposal {
            draft: SwapDraft {
                employee_id: EmployeeId::new(1),
                current_shift_id: morning_id,
                proposed_title: String::from("Evening"),
                proposed_time: range(15, 23),
            },
        },
        &employee_actor(1),
    );
    let proposal_id = state.swap_proposals[0].id;

    let state = step(
        &mut persistence,
        &state,
        Command::AcceptShiftChange {
            swap_proposal_id: proposal_id,
            swap_employee_id: EmployeeId::new(2),
        },
        &manager_actor(),
    );

    let loaded = persistence.load_state().unwrap();
    assert_eq!(loaded, state);
    assert!(
        loaded
            .assignment_for_employee_and_shift(EmployeeId::new(1), evening_id)
            .is_some()
    );
    assert!(
        loaded
            .assignment_for_employee_and_shift(EmployeeId::new(2), morning_id)
            .is_some()
    );
    assert_eq!(loaded.assignments.len(), 2);
    assert_eq!(
        loaded.swap_proposal(proposal_id).unwrap().status,
        ProposalStatus::Accepted
    );
}

#[test]
fn test_delete_effects_remove_rows() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let state = State::new();

    let state = step(
        &mut persistence,
        &state,
        shift_command(1, "Morning", range(7, 15)),
        &manager_actor(),
    );
    let shift_id = state.shifts[0].id;
    let state = step(
        &mut persistence,
        &state,
        Command::DeleteShift { shift_id },
        &manager_actor(),
    );

    let loaded = persistence.load_state().unwrap();
    assert_eq!(loaded, state);
    assert!(loaded.shifts.is_empty());
    assert!(loaded.assignments.is_empty());
}

#[test]
fn test_id_counters_survive_reload() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let state = State::new();

    let state = step(
        &mut persistence,
        &state,
        shift_command(1, "Morning", range(7, 15)),
        &manager_actor(),
    );
    let shift_id = state.shifts[0].id;
    let state = step(
        &mut persistence,
        &state,
        Command::DeleteShift { shift_id },
        &manager_actor(),
    );

    // A shift created after reload must not reuse the deleted id.
    let loaded = persistence.load_state().unwrap();
    assert_eq!(loaded.counters(), state.counters());

    let after = apply(
        &loaded,
        shift_command(1, "Replacement", range(7, 15)),
        &manager_actor(),
    )
    .unwrap()
    .new_state;
    assert!(after.shifts[0].id > shift_id);
}

#[test]
fn test_manager_alternative_window_round_trips() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let state = State::new();

    let state = step(
        &mut persistence,
        &state,
        Command::CreateProposal {
            draft: ProposalDraft {
                employee_id: EmployeeId::new(1),
                proposed_title: String::from("Morning"),
                proposed_time: range(7, 15),
            },
        },
        &employee_actor(1),
    );
    let proposal_id = state.proposals[0].id;
    let state = step(
        &mut persistence,
        &state,
        Command::ProposeAlternative {
            proposal_id,
            alternative: zab_shift::AlternativeDetails {
                title: String::from("Evening"),
                time: range(15, 23),
                comment: Some(String::from("Morning is full")),
            },
        },
        &manager_actor(),
    );

    let loaded = persistence.load_state().unwrap();
    assert_eq!(loaded, state);
    let proposal = loaded.proposal(proposal_id).unwrap();
    assert_eq!(proposal.manager_alternative_time, Some(range(15, 23)));
    assert_eq!(proposal.manager_comment.as_deref(), Some("Morning is full"));
}
