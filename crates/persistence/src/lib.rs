// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the ZAB Shift Scheduling System.
//!
//! This crate mirrors the workflow engine's [`State`] row for row in
//! `SQLite` via Diesel. Loading reconstructs the full state; persisting
//! applies every [`Effect`] of a [`TransitionResult`] inside one database
//! transaction, which is what makes the two-sided swap write atomic: both
//! assignment rows land, or neither does.
//!
//! Identifiers are allocated by the engine, not by the database, so the
//! counters travel with the rows (`id_counters` table).
//!
//! ## Testing
//!
//! Standard tests run against unique in-memory `SQLite` databases; no
//! external infrastructure is required.

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
#![allow(clippy::multiple_crate_versions)]

mod data_models;
mod diesel_schema;
mod error;

#[cfg(test)]
mod tests;

use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;
use zab_shift::{Effect, IdCounters, State, TransitionResult};

use crate::data_models::{AssignmentRow, CounterRow, ProposalRow, ShiftRow, SwapProposalRow};
use crate::diesel_schema::{id_counters, shift_assignments, shift_proposals, shifts, swap_proposals};

pub use crate::error::PersistenceError;

/// Embedded migrations, compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite`-backed persistence for the scheduler.
pub struct SqlitePersistence {
    /// The underlying database connection.
    conn: SqliteConnection,
}

impl SqlitePersistence {
    /// Creates a persistence instance backed by a unique in-memory
    /// database and runs migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migrations fail.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let database_url: String = format!("file:zab_shift_{db_id}?mode=memory&cache=shared");
        Self::establish(&database_url)
    }

    /// Creates a persistence instance backed by a database file and runs
    /// migrations.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migrations fail.
    pub fn new_with_file(path: &str) -> Result<Self, PersistenceError> {
        Self::establish(path)
    }

    fn establish(database_url: &str) -> Result<Self, PersistenceError> {
        let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

        conn.batch_execute("PRAGMA foreign_keys = ON;")
            .map_err(|e| PersistenceError::ConnectionFailed(e.to_string()))?;

        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Reconstructs the full scheduler state from the database.
    ///
    /// Rows are loaded in ascending id order, matching the engine's
    /// allocation order.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails or a stored row cannot be
    /// converted back to its domain type.
    pub fn load_state(&mut self) -> Result<State, PersistenceError> {
        let conn = &mut self.conn;

        let shift_rows: Vec<ShiftRow> = shifts::table
            .order(shifts::id.asc())
            .load::<ShiftRow>(conn)?;
        let assignment_rows: Vec<AssignmentRow> = shift_assignments::table
            .order(shift_assignments::id.asc())
            .load::<AssignmentRow>(conn)?;
        let proposal_rows: Vec<ProposalRow> = shift_proposals::table
            .order(shift_proposals::id.asc())
            .load::<ProposalRow>(conn)?;
        let swap_rows: Vec<SwapProposalRow> = swap_proposals::table
            .order(swap_proposals::id.asc())
            .load::<SwapProposalRow>(conn)?;
        let counter_rows: Vec<CounterRow> = id_counters::table.load::<CounterRow>(conn)?;

        let shifts = shift_rows
            .into_iter()
            .map(ShiftRow::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        let assignments = assignment_rows
            .into_iter()
            .map(AssignmentRow::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        let proposals = proposal_rows
            .into_iter()
            .map(ProposalRow::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        let swap_proposals = swap_rows
            .into_iter()
            .map(SwapProposalRow::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        let mut counters: IdCounters = IdCounters::new();
        for row in counter_rows {
            match row.counter.as_str() {
                "shift" => counters.next_shift_id = row.next_id,
                "assignment" => counters.next_assignment_id = row.next_id,
                "proposal" => counters.next_proposal_id = row.next_id,
                "swap_proposal" => counters.next_swap_proposal_id = row.next_id,
                other => {
                    return Err(PersistenceError::CorruptRow(format!(
                        "Unknown id counter '{other}'"
                    )));
                }
            }
        }

        Ok(State::rebuild(
            shifts,
            assignments,
            proposals,
            swap_proposals,
            counters,
        ))
    }

    /// Persists a transition: every effect plus the id counters, in one
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails; on error nothing is applied.
    pub fn persist_transition(
        &mut self,
        transition: &TransitionResult,
    ) -> Result<(), PersistenceError> {
        let counters: IdCounters = transition.new_state.counters();
        let effects = &transition.effects;

        self.conn
            .transaction::<_, PersistenceError, _>(|conn| {
                for effect in effects {
                    apply_effect(conn, effect)?;
                }
                save_counters(conn, counters)?;
                Ok(())
            })?;

        debug!(effect_count = effects.len(), "Transition persisted");
        Ok(())
    }
}

/// Applies a single row-level effect.
fn apply_effect(conn: &mut SqliteConnection, effect: &Effect) -> Result<(), PersistenceError> {
    match effect {
        Effect::ShiftSaved(shift) => {
            let row: ShiftRow = ShiftRow::from_domain(shift)?;
            diesel::replace_into(shifts::table)
                .values(&row)
                .execute(conn)?;
        }
        Effect::ShiftDeleted(id) => {
            diesel::delete(shifts::table.filter(shifts::id.eq(id.value()))).execute(conn)?;
        }
        Effect::AssignmentSaved(assignment) => {
            let row: AssignmentRow = AssignmentRow::from_domain(assignment);
            diesel::replace_into(shift_assignments::table)
                .values(&row)
                .execute(conn)?;
        }
        Effect::AssignmentDeleted(id) => {
            diesel::delete(
                shift_assignments::table.filter(shift_assignments::id.eq(id.value())),
            )
            .execute(conn)?;
        }
        Effect::ProposalSaved(proposal) => {
            let row: ProposalRow = ProposalRow::from_domain(proposal)?;
            diesel::replace_into(shift_proposals::table)
                .values(&row)
                .execute(conn)?;
        }
        Effect::SwapProposalSaved(proposal) => {
            let row: SwapProposalRow = SwapProposalRow::from_domain(proposal)?;
            diesel::replace_into(swap_proposals::table)
                .values(&row)
                .execute(conn)?;
        }
    }
    Ok(())
}

/// Writes the id counters.
fn save_counters(conn: &mut SqliteConnection, counters: IdCounters) -> Result<(), PersistenceError> {
    let rows = [
        CounterRow {
            counter: String::from("shift"),
            next_id: counters.next_shift_id,
        },
        CounterRow {
            counter: String::from("assignment"),
            next_id: counters.next_assignment_id,
        },
        CounterRow {
            counter: String::from("proposal"),
            next_id: counters.next_proposal_id,
        },
        CounterRow {
            counter: String::from("swap_proposal"),
            next_id: counters.next_swap_proposal_id,
        },
    ];
    for row in &rows {
        diesel::replace_into(id_counters::table)
            .values(row)
            .execute(conn)?;
    }
    Ok(())
}
