// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the scheduler wire contract.
//!
//! Field names follow the gateway's `camelCase` convention; timestamps are
//! RFC 3339. DTOs are distinct from domain types: the wire contract can
//! evolve without touching the engine.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use zab_shift_domain::{Shift, ShiftAssignment, ShiftProposal, SwapProposal};

/// Inbound shift proposal submission.
///
/// The display fields mirror what the gateway forwards; the authenticated
/// identity remains the authoritative snapshot source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRequest {
    /// The requesting employee's id.
    pub employee_id: i64,
    /// The requesting employee's display name.
    pub employee_name: String,
    /// The requesting employee's role label.
    pub employee_role: String,
    /// The proposed shift title.
    pub proposed_title: String,
    /// The proposed start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub proposed_start_time: OffsetDateTime,
    /// The proposed end instant.
    #[serde(with = "time::serde::rfc3339")]
    pub proposed_end_time: OffsetDateTime,
}

/// Inbound revision of a pending proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProposalRequest {
    /// The revised title.
    pub proposed_title: String,
    /// The revised start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub proposed_start_time: OffsetDateTime,
    /// The revised end instant.
    #[serde(with = "time::serde::rfc3339")]
    pub proposed_end_time: OffsetDateTime,
}

/// Inbound swap proposal submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    /// The requesting employee's id.
    pub employee_id: i64,
    /// The shift the employee wants to trade away.
    pub current_shift_id: i64,
    /// The desired target shift title.
    pub proposed_title: String,
    /// The desired target start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub proposed_start_time: OffsetDateTime,
    /// The desired target end instant.
    #[serde(with = "time::serde::rfc3339")]
    pub proposed_end_time: OffsetDateTime,
}

/// Inbound manager alternative offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeRequest {
    /// The alternative shift title.
    pub proposed_title: String,
    /// The alternative start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub proposed_start_time: OffsetDateTime,
    /// The alternative end instant.
    #[serde(with = "time::serde::rfc3339")]
    pub proposed_end_time: OffsetDateTime,
    /// The manager's comment.
    #[serde(default)]
    pub manager_comment: Option<String>,
}

/// Inbound manager comment (reject / decline bodies).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    /// The manager's comment.
    #[serde(default)]
    pub manager_comment: Option<String>,
}

/// Inbound privileged shift creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRequest {
    /// The shift title.
    pub title: String,
    /// The start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    /// The end instant.
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    /// The owning employee's id.
    pub employee_id: i64,
    /// The owning employee's display name.
    pub employee_name: String,
    /// The owning employee's role label.
    pub employee_role: String,
}

/// Inbound privileged shift update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShiftRequest {
    /// The new title.
    pub title: String,
    /// The new start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    /// The new end instant.
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
}

/// Inbound privileged assignment creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignShiftRequest {
    /// The employee to bind.
    pub employee_id: i64,
    /// The shift to bind to.
    pub shift_id: i64,
}

/// Outbound shift proposal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRecord {
    /// The proposal id.
    pub id: i64,
    /// The requesting employee's id.
    pub employee_id: i64,
    /// The employee display name snapshotted at creation.
    pub employee_name: String,
    /// The employee role label snapshotted at creation.
    pub employee_role: String,
    /// The proposed title.
    pub proposed_title: String,
    /// The proposed start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub proposed_start_time: OffsetDateTime,
    /// The proposed end instant.
    #[serde(with = "time::serde::rfc3339")]
    pub proposed_end_time: OffsetDateTime,
    /// The lifecycle status.
    pub status: String,
    /// The manager's alternative title, if offered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_alternative_title: Option<String>,
    /// The manager's alternative start instant, if offered.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub manager_alternative_start_time: Option<OffsetDateTime>,
    /// The manager's alternative end instant, if offered.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub manager_alternative_end_time: Option<OffsetDateTime>,
    /// The manager's comment, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_comment: Option<String>,
}

impl From<&ShiftProposal> for ProposalRecord {
    fn from(proposal: &ShiftProposal) -> Self {
        Self {
            id: proposal.id.value(),
            employee_id: proposal.employee_id.value(),
            employee_name: proposal.employee_name.clone(),
            employee_role: proposal.employee_role.clone(),
            proposed_title: proposal.proposed_title.clone(),
            proposed_start_time: proposal.proposed_time.start(),
            proposed_end_time: proposal.proposed_time.end(),
            status: proposal.status.as_str().to_string(),
            manager_alternative_title: proposal.manager_alternative_title.clone(),
            manager_alternative_start_time: proposal
                .manager_alternative_time
                .map(|time| time.start()),
            manager_alternative_end_time: proposal.manager_alternative_time.map(|time| time.end()),
            manager_comment: proposal.manager_comment.clone(),
        }
    }
}

/// Outbound swap proposal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapProposalRecord {
    /// The swap proposal id.
    pub id: i64,
    /// The requesting employee's id.
    pub employee_id: i64,
    /// The employee display name snapshotted at creation.
    pub employee_name: String,
    /// The employee role label snapshotted at creation.
    pub employee_role: String,
    /// The shift the employee wants to trade away.
    pub current_shift_id: i64,
    /// The desired target title.
    pub proposed_title: String,
    /// The desired target start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub proposed_start_time: OffsetDateTime,
    /// The desired target end instant.
    #[serde(with = "time::serde::rfc3339")]
    pub proposed_end_time: OffsetDateTime,
    /// The lifecycle status.
    pub status: String,
    /// The manager's comment, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_comment: Option<String>,
}

impl From<&SwapProposal> for SwapProposalRecord {
    fn from(proposal: &SwapProposal) -> Self {
        Self {
            id: proposal.id.value(),
            employee_id: proposal.employee_id.value(),
            employee_name: proposal.employee_name.clone(),
            employee_role: proposal.employee_role.clone(),
            current_shift_id: proposal.current_shift_id.value(),
            proposed_title: proposal.proposed_title.clone(),
            proposed_start_time: proposal.proposed_time.start(),
            proposed_end_time: proposal.proposed_time.end(),
            status: proposal.status.as_str().to_string(),
            manager_comment: proposal.manager_comment.clone(),
        }
    }
}

/// Outbound shift record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    /// The shift id.
    pub id: i64,
    /// The shift title.
    pub title: String,
    /// The start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    /// The end instant.
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    /// The owning employee's id.
    pub employee_id: i64,
    /// The owning employee's display name.
    pub employee_name: String,
    /// The owning employee's role label.
    pub employee_role: String,
}

impl From<&Shift> for ShiftRecord {
    fn from(shift: &Shift) -> Self {
        Self {
            id: shift.id.value(),
            title: shift.title.clone(),
            start_time: shift.time.start(),
            end_time: shift.time.end(),
            employee_id: shift.employee_id.value(),
            employee_name: shift.employee_name.clone(),
            employee_role: shift.employee_role.clone(),
        }
    }
}

/// Outbound assignment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRecord {
    /// The assignment id.
    pub id: i64,
    /// The bound employee's id.
    pub employee_id: i64,
    /// The bound shift's id.
    pub shift_id: i64,
    /// The binding status.
    pub status: String,
}

impl From<&ShiftAssignment> for AssignmentRecord {
    fn from(assignment: &ShiftAssignment) -> Self {
        Self {
            id: assignment.id.value(),
            employee_id: assignment.employee_id.value(),
            shift_id: assignment.shift_id.value(),
            status: assignment.status.as_str().to_string(),
        }
    }
}
