// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{Actor, Command, State, apply};
use time::{Date, Month, OffsetDateTime, Time};
use zab_shift_domain::{EmployeeId, ProposalDraft, ShiftDraft, ShiftId, SwapDraft, TimeRange};

/// All fixtures share one calendar day; hour pairs describe windows.
pub fn instant(hour: u8, minute: u8) -> OffsetDateTime {
    let date = Date::from_calendar_date(2025, Month::March, 25).unwrap();
    let t = Time::from_hms(hour, minute, 0).unwrap();
    date.with_time(t).assume_utc()
}

pub fn range(start_hour: u8, end_hour: u8) -> TimeRange {
    TimeRange::new(instant(start_hour, 0), instant(end_hour, 0)).unwrap()
}

pub fn employee_actor(employee_id: i64) -> Actor {
    Actor::new(
        EmployeeId::new(employee_id),
        format!("Employee {employee_id}"),
        String::from("Technician"),
        false,
    )
}

pub fn manager_actor() -> Actor {
    Actor::new(
        EmployeeId::new(900),
        String::from("Morgan Manager"),
        String::from("Shift-Supervisor"),
        true,
    )
}

pub fn proposal_draft(employee_id: i64, title: &str, window: TimeRange) -> ProposalDraft {
    ProposalDraft {
        employee_id: EmployeeId::new(employee_id),
        proposed_title: String::from(title),
        proposed_time: window,
    }
}

pub fn swap_draft(
    employee_id: i64,
    current_shift_id: ShiftId,
    title: &str,
    window: TimeRange,
) -> SwapDraft {
    SwapDraft {
        employee_id: EmployeeId::new(employee_id),
        current_shift_id,
        proposed_title: String::from(title),
        proposed_time: window,
    }
}

/// Creates an official shift (and its confirmed assignment) for an
/// employee, returning the new state and the shift id.
pub fn with_shift(state: &State, employee_id: i64, title: &str, window: TimeRange) -> (State, ShiftId) {
    let draft = ShiftDraft {
        title: String::from(title),
        time: window,
        employee_id: EmployeeId::new(employee_id),
        employee_name: format!("Employee {employee_id}"),
        employee_role: String::from("Technician"),
    };
    let result = apply(state, Command::CreateShift { draft }, &manager_actor()).unwrap();
    let shift_id = result
        .new_state
        .shifts
        .last()
        .map(|shift| shift.id)
        .unwrap();
    (result.new_state, shift_id)
}
