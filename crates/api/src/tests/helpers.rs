// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{AuthenticatedEmployee, ProposalRequest, ShiftRequest, create_shift};
use time::{Date, Month, OffsetDateTime, Time};
use zab_shift::State;
use zab_shift_domain::EmployeeId;

pub fn instant(hour: u8) -> OffsetDateTime {
    Date::from_calendar_date(2025, Month::March, 25)
        .unwrap()
        .with_time(Time::from_hms(hour, 0, 0).unwrap())
        .assume_utc()
}

pub fn employee_identity(employee_id: i64) -> AuthenticatedEmployee {
    AuthenticatedEmployee::new(
        EmployeeId::new(employee_id),
        format!("Employee {employee_id}"),
        String::from("Technician"),
        false,
    )
}

pub fn manager_identity() -> AuthenticatedEmployee {
    AuthenticatedEmployee::new(
        EmployeeId::new(900),
        String::from("Morgan Manager"),
        String::from("Shift-Supervisor"),
        true,
    )
}

pub fn proposal_request(employee_id: i64, title: &str, start_hour: u8, end_hour: u8) -> ProposalRequest {
    ProposalRequest {
        employee_id,
        employee_name: format!("Employee {employee_id}"),
        employee_role: String::from("Technician"),
        proposed_title: String::from(title),
        proposed_start_time: instant(start_hour),
        proposed_end_time: instant(end_hour),
    }
}

/// Seeds an official shift (with its confirmed assignment) through the
/// API boundary, returning the new state and shift id.
pub fn seed_shift(
    state: &State,
    employee_id: i64,
    title: &str,
    start_hour: u8,
    end_hour: u8,
) -> (State, i64) {
    let request = ShiftRequest {
        title: String::from(title),
        start_time: instant(start_hour),
        end_time: instant(end_hour),
        employee_id,
        employee_name: format!("Employee {employee_id}"),
        employee_role: String::from("Technician"),
    };
    let result = create_shift(state, &request, &manager_identity()).unwrap();
    (result.transition.new_state, result.response.id)
}
