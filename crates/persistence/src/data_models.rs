// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row models and their domain conversions.
//!
//! Timestamps are stored as RFC 3339 text in UTC. A row that fails to
//! parse back surfaces as [`PersistenceError::CorruptRow`]; the store never
//! silently repairs data.

use crate::diesel_schema::{id_counters, shift_assignments, shift_proposals, shifts, swap_proposals};
use crate::error::PersistenceError;
use diesel::prelude::*;
use std::str::FromStr;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use zab_shift_domain::{
    AssignmentId, AssignmentStatus, EmployeeId, ProposalId, ProposalStatus, Shift,
    ShiftAssignment, ShiftId, ShiftProposal, SwapProposal, SwapProposalId, TimeRange,
};

/// Formats a timestamp for storage.
pub(crate) fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    value
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::CorruptRow(format!("Unformattable timestamp: {e}")))
}

/// Parses a stored timestamp.
pub(crate) fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339)
        .map_err(|e| PersistenceError::CorruptRow(format!("Bad timestamp '{value}': {e}")))
}

/// Reassembles a stored start/end pair into a `TimeRange`.
fn parse_range(start: &str, end: &str) -> Result<TimeRange, PersistenceError> {
    TimeRange::new(parse_timestamp(start)?, parse_timestamp(end)?)
        .map_err(|e| PersistenceError::CorruptRow(e.to_string()))
}

/// Row model for the `shifts` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = shifts)]
pub struct ShiftRow {
    pub id: i64,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub employee_id: i64,
    pub employee_name: String,
    pub employee_role: String,
}

impl ShiftRow {
    pub(crate) fn from_domain(shift: &Shift) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: shift.id.value(),
            title: shift.title.clone(),
            start_time: format_timestamp(shift.time.start())?,
            end_time: format_timestamp(shift.time.end())?,
            employee_id: shift.employee_id.value(),
            employee_name: shift.employee_name.clone(),
            employee_role: shift.employee_role.clone(),
        })
    }

    pub(crate) fn into_domain(self) -> Result<Shift, PersistenceError> {
        Ok(Shift {
            id: ShiftId::new(self.id),
            title: self.title,
            time: parse_range(&self.start_time, &self.end_time)?,
            employee_id: EmployeeId::new(self.employee_id),
            employee_name: self.employee_name,
            employee_role: self.employee_role,
        })
    }
}

/// Row model for the `shift_assignments` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = shift_assignments)]
pub struct AssignmentRow {
    pub id: i64,
    pub employee_id: i64,
    pub shift_id: i64,
    pub status: String,
}

impl AssignmentRow {
    pub(crate) fn from_domain(assignment: &ShiftAssignment) -> Self {
        Self {
            id: assignment.id.value(),
            employee_id: assignment.employee_id.value(),
            shift_id: assignment.shift_id.value(),
            status: assignment.status.as_str().to_string(),
        }
    }

    pub(crate) fn into_domain(self) -> Result<ShiftAssignment, PersistenceError> {
        Ok(ShiftAssignment {
            id: AssignmentId::new(self.id),
            employee_id: EmployeeId::new(self.employee_id),
            shift_id: ShiftId::new(self.shift_id),
            status: AssignmentStatus::from_str(&self.status)
                .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?,
        })
    }
}

/// Row model for the `shift_proposals` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = shift_proposals)]
pub struct ProposalRow {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub employee_role: String,
    pub proposed_title: String,
    pub proposed_start_time: String,
    pub proposed_end_time: String,
    pub status: String,
    pub manager_alternative_title: Option<String>,
    pub manager_alternative_start_time: Option<String>,
    pub manager_alternative_end_time: Option<String>,
    pub manager_comment: Option<String>,
}

impl ProposalRow {
    pub(crate) fn from_domain(proposal: &ShiftProposal) -> Result<Self, PersistenceError> {
        let (alternative_start, alternative_end) = match proposal.manager_alternative_time {
            Some(time) => (
                Some(format_timestamp(time.start())?),
                Some(format_timestamp(time.end())?),
            ),
            None => (None, None),
        };
        Ok(Self {
            id: proposal.id.value(),
            employee_id: proposal.employee_id.value(),
            employee_name: proposal.employee_name.clone(),
            employee_role: proposal.employee_role.clone(),
            proposed_title: proposal.proposed_title.clone(),
            proposed_start_time: format_timestamp(proposal.proposed_time.start())?,
            proposed_end_time: format_timestamp(proposal.proposed_time.end())?,
            status: proposal.status.as_str().to_string(),
            manager_alternative_title: proposal.manager_alternative_title.clone(),
            manager_alternative_start_time: alternative_start,
            manager_alternative_end_time: alternative_end,
            manager_comment: proposal.manager_comment.clone(),
        })
    }

    pub(crate) fn into_domain(self) -> Result<ShiftProposal, PersistenceError> {
        let manager_alternative_time = match (
            self.manager_alternative_start_time.as_deref(),
            self.manager_alternative_end_time.as_deref(),
        ) {
            (Some(start), Some(end)) => Some(parse_range(start, end)?),
            (None, None) => None,
            _ => {
                return Err(PersistenceError::CorruptRow(format!(
                    "Proposal {} has a half-stored alternative window",
                    self.id
                )));
            }
        };
        Ok(ShiftProposal {
            id: ProposalId::new(self.id),
            employee_id: EmployeeId::new(self.employee_id),
            employee_name: self.employee_name,
            employee_role: self.employee_role,
            proposed_title: self.proposed_title,
            proposed_time: parse_range(&self.proposed_start_time, &self.proposed_end_time)?,
            status: ProposalStatus::from_str(&self.status)
                .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?,
            manager_alternative_title: self.manager_alternative_title,
            manager_alternative_time,
            manager_comment: self.manager_comment,
        })
    }
}

/// Row model for the `swap_proposals` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = swap_proposals)]
pub struct SwapProposalRow {
    pub id: i64,
    pub employee_id: i64,
    pub employee_name: String,
    pub employee_role: String,
    pub current_shift_id: i64,
    pub proposed_title: String,
    pub proposed_start_time: String,
    pub proposed_end_time: String,
    pub status: String,
    pub manager_comment: Option<String>,
}

impl SwapProposalRow {
    pub(crate) fn from_domain(proposal: &SwapProposal) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: proposal.id.value(),
            employee_id: proposal.employee_id.value(),
            employee_name: proposal.employee_name.clone(),
            employee_role: proposal.employee_role.clone(),
            current_shift_id: proposal.current_shift_id.value(),
            proposed_title: proposal.proposed_title.clone(),
            proposed_start_time: format_timestamp(proposal.proposed_time.start())?,
            proposed_end_time: format_timestamp(proposal.proposed_time.end())?,
            status: proposal.status.as_str().to_string(),
            manager_comment: proposal.manager_comment.clone(),
        })
    }

    pub(crate) fn into_domain(self) -> Result<SwapProposal, PersistenceError> {
        Ok(SwapProposal {
            id: SwapProposalId::new(self.id),
            employee_id: EmployeeId::new(self.employee_id),
            employee_name: self.employee_name,
            employee_role: self.employee_role,
            current_shift_id: ShiftId::new(self.current_shift_id),
            proposed_title: self.proposed_title,
            proposed_time: parse_range(&self.proposed_start_time, &self.proposed_end_time)?,
            status: ProposalStatus::from_str(&self.status)
                .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?,
            manager_comment: self.manager_comment,
        })
    }
}

/// Row model for the `id_counters` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = id_counters)]
pub struct CounterRow {
    pub counter: String,
    pub next_id: i64,
}
