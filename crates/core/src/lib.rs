// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The shift proposal and swap workflow engine.
//!
//! The engine is a pure state-transition function: commands are data,
//! [`apply`] maps a [`State`] and a [`Command`] to a [`TransitionResult`],
//! and all side effects (row writes, notifications) come out as records for
//! the caller to execute. The engine performs no I/O and reads no clock.
//!
//! ## Invariants
//!
//! - No employee is ever double-booked: every path that creates or moves an
//!   assignment re-checks time-range overlap first
//! - Proposal statuses transition forward exactly once; terminal statuses
//!   reject every further action
//! - A swap exchanges the two shift references and nothing else: assignment
//!   ids are stable and the total assignment count is unchanged
//! - Conflict checks always precede mutation; no partial writes

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

mod apply;
mod command;
mod effect;
mod error;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::{Actor, AlternativeDetails, Command};
pub use effect::Effect;
pub use error::CoreError;
pub use state::{IdCounters, State, TransitionResult};
