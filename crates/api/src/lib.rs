// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the ZAB Shift Scheduling System.
//!
//! This crate owns the wire contract: request/response DTOs, the identity
//! contract supplied by the upstream gateway, and the explicit translation
//! of domain errors into API errors. Handlers are pure over the engine
//! state; the server is responsible for loading state before a call and
//! persisting the returned transition after it.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthError, AuthenticatedEmployee, resolve_identity};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, accept_proposal, accept_shift_change, assign_shift, cancel_proposal,
    create_proposal, create_shift, create_swap_proposal, decline_shift_change, delete_shift,
    get_shift, list_assignments_for_employee, list_assignments_for_shift, list_proposals,
    list_proposals_for_employee, list_shifts, list_swap_proposals,
    list_swap_proposals_for_employee, reject_proposal, propose_alternative, remove_assignment,
    update_proposal, update_shift,
};
pub use request_response::{
    AlternativeRequest, AssignShiftRequest, AssignmentRecord, CommentRequest, ProposalRecord,
    ProposalRequest, ShiftRecord, ShiftRequest, SwapProposalRecord, SwapRequest,
    UpdateProposalRequest, UpdateShiftRequest,
};
