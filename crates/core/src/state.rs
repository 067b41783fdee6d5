// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::effect::Effect;
use zab_shift_domain::{
    AssignmentId, EmployeeId, ProposalId, Shift, ShiftAssignment, ShiftId, ShiftProposal,
    SwapProposal, SwapProposalId, TimeRange,
};
use zab_shift_notify::Notification;

/// The identifier counters owned by the scheduler state.
///
/// Identifiers are allocated here, not by the database, so the engine can
/// reference newly created records within the same transition. The
/// persistence layer stores and restores the counters alongside the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdCounters {
    /// Next shift identifier.
    pub next_shift_id: i64,
    /// Next assignment identifier.
    pub next_assignment_id: i64,
    /// Next shift proposal identifier.
    pub next_proposal_id: i64,
    /// Next swap proposal identifier.
    pub next_swap_proposal_id: i64,
}

impl IdCounters {
    /// Creates counters starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_shift_id: 1,
            next_assignment_id: 1,
            next_proposal_id: 1,
            next_swap_proposal_id: 1,
        }
    }
}

impl Default for IdCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// The complete scheduler state.
///
/// The engine treats this as the authoritative record store; the
/// persistence layer mirrors it row for row. Query methods cover the
/// lookups the workflow needs: by id, by employee, by `(employee, shift)`
/// pair, and by time-range overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// All official shifts.
    pub shifts: Vec<Shift>,
    /// All shift assignments.
    pub assignments: Vec<ShiftAssignment>,
    /// All shift proposals, including terminal-status rows (audit trail).
    pub proposals: Vec<ShiftProposal>,
    /// All swap proposals, including terminal-status rows (audit trail).
    pub swap_proposals: Vec<SwapProposal>,
    /// Identifier allocation counters.
    counters: IdCounters,
}

impl State {
    /// Creates a new empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shifts: Vec::new(),
            assignments: Vec::new(),
            proposals: Vec::new(),
            swap_proposals: Vec::new(),
            counters: IdCounters::new(),
        }
    }

    /// Reconstructs a state from persisted rows and counters.
    ///
    /// # Arguments
    ///
    /// * `shifts` - All persisted shift rows
    /// * `assignments` - All persisted assignment rows
    /// * `proposals` - All persisted shift proposal rows
    /// * `swap_proposals` - All persisted swap proposal rows
    /// * `counters` - The persisted identifier counters
    #[must_use]
    pub const fn rebuild(
        shifts: Vec<Shift>,
        assignments: Vec<ShiftAssignment>,
        proposals: Vec<ShiftProposal>,
        swap_proposals: Vec<SwapProposal>,
        counters: IdCounters,
    ) -> Self {
        Self {
            shifts,
            assignments,
            proposals,
            swap_proposals,
            counters,
        }
    }

    /// Returns the current identifier counters.
    #[must_use]
    pub const fn counters(&self) -> IdCounters {
        self.counters
    }

    /// Looks up a shift by id.
    #[must_use]
    pub fn shift(&self, id: ShiftId) -> Option<&Shift> {
        self.shifts.iter().find(|shift| shift.id == id)
    }

    /// Looks up an assignment by id.
    #[must_use]
    pub fn assignment(&self, id: AssignmentId) -> Option<&ShiftAssignment> {
        self.assignments.iter().find(|assignment| assignment.id == id)
    }

    /// Looks up a shift proposal by id.
    #[must_use]
    pub fn proposal(&self, id: ProposalId) -> Option<&ShiftProposal> {
        self.proposals.iter().find(|proposal| proposal.id == id)
    }

    /// Looks up a swap proposal by id.
    #[must_use]
    pub fn swap_proposal(&self, id: SwapProposalId) -> Option<&SwapProposal> {
        self.swap_proposals.iter().find(|proposal| proposal.id == id)
    }

    /// Returns all assignments held by an employee, in ascending
    /// assignment-id order.
    #[must_use]
    pub fn assignments_for_employee(&self, employee_id: EmployeeId) -> Vec<&ShiftAssignment> {
        self.assignments
            .iter()
            .filter(|assignment| assignment.employee_id == employee_id)
            .collect()
    }

    /// Returns all assignments bound to a shift.
    #[must_use]
    pub fn assignments_for_shift(&self, shift_id: ShiftId) -> Vec<&ShiftAssignment> {
        self.assignments
            .iter()
            .filter(|assignment| assignment.shift_id == shift_id)
            .collect()
    }

    /// Looks up the assignment binding an employee to a shift.
    ///
    /// `(employee_id, shift_id)` is the natural key the swap engine uses.
    #[must_use]
    pub fn assignment_for_employee_and_shift(
        &self,
        employee_id: EmployeeId,
        shift_id: ShiftId,
    ) -> Option<&ShiftAssignment> {
        self.assignments
            .iter()
            .find(|assignment| {
                assignment.employee_id == employee_id && assignment.shift_id == shift_id
            })
    }

    /// Finds every assignment of an employee whose shift window overlaps
    /// the given range.
    ///
    /// Overlap is half-open: a shift ending exactly when `range` starts
    /// does not count. The check is range-only; excluding a candidate
    /// assignment (as swap re-validation requires) is the caller's
    /// responsibility.
    #[must_use]
    pub fn find_overlapping(
        &self,
        employee_id: EmployeeId,
        range: &TimeRange,
    ) -> Vec<&ShiftAssignment> {
        self.assignments
            .iter()
            .filter(|assignment| assignment.employee_id == employee_id)
            .filter(|assignment| {
                self.shift(assignment.shift_id)
                    .is_some_and(|shift| shift.time.overlaps(range))
            })
            .collect()
    }

    /// Allocates the next shift identifier.
    pub(crate) const fn allocate_shift_id(&mut self) -> ShiftId {
        let id = ShiftId::new(self.counters.next_shift_id);
        self.counters.next_shift_id += 1;
        id
    }

    /// Allocates the next assignment identifier.
    pub(crate) const fn allocate_assignment_id(&mut self) -> AssignmentId {
        let id = AssignmentId::new(self.counters.next_assignment_id);
        self.counters.next_assignment_id += 1;
        id
    }

    /// Allocates the next shift proposal identifier.
    pub(crate) const fn allocate_proposal_id(&mut self) -> ProposalId {
        let id = ProposalId::new(self.counters.next_proposal_id);
        self.counters.next_proposal_id += 1;
        id
    }

    /// Allocates the next swap proposal identifier.
    pub(crate) const fn allocate_swap_proposal_id(&mut self) -> SwapProposalId {
        let id = SwapProposalId::new(self.counters.next_swap_proposal_id);
        self.counters.next_swap_proposal_id += 1;
        id
    }

    /// Inserts or replaces a shift row.
    pub(crate) fn upsert_shift(&mut self, shift: Shift) {
        if let Some(existing) = self.shifts.iter_mut().find(|s| s.id == shift.id) {
            *existing = shift;
        } else {
            self.shifts.push(shift);
        }
    }

    /// Removes a shift row.
    pub(crate) fn remove_shift(&mut self, id: ShiftId) {
        self.shifts.retain(|shift| shift.id != id);
    }

    /// Inserts or replaces an assignment row.
    pub(crate) fn upsert_assignment(&mut self, assignment: ShiftAssignment) {
        if let Some(existing) = self
            .assignments
            .iter_mut()
            .find(|a| a.id == assignment.id)
        {
            *existing = assignment;
        } else {
            self.assignments.push(assignment);
        }
    }

    /// Removes an assignment row.
    pub(crate) fn remove_assignment(&mut self, id: AssignmentId) {
        self.assignments.retain(|assignment| assignment.id != id);
    }

    /// Inserts or replaces a shift proposal row.
    pub(crate) fn upsert_proposal(&mut self, proposal: ShiftProposal) {
        if let Some(existing) = self.proposals.iter_mut().find(|p| p.id == proposal.id) {
            *existing = proposal;
        } else {
            self.proposals.push(proposal);
        }
    }

    /// Inserts or replaces a swap proposal row.
    pub(crate) fn upsert_swap_proposal(&mut self, proposal: SwapProposal) {
        if let Some(existing) = self
            .swap_proposals
            .iter_mut()
            .find(|p| p.id == proposal.id)
        {
            *existing = proposal;
        } else {
            self.swap_proposals.push(proposal);
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: the caller persists every [`Effect`] in one
/// transaction and dispatches the notification outbox only after the
/// commit succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The row-level changes to persist.
    pub effects: Vec<Effect>,
    /// Notifications to dispatch post-commit.
    pub notifications: Vec<Notification>,
}
