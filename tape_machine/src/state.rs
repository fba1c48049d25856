// Copyright 2026 the Tape Machine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Machine state snapshots.
//!
//! A [`State`] is the machine's entire configuration as one immutable value: accumulator, head
//! position, tape, and program counter. Operations never mutate a state in place; each one
//! derives a fresh state, and a changed cell yields a fresh tape rather than an in-place edit,
//! so every snapshot a trace has yielded stays a faithful record of its step.

use alloc::vec;
use alloc::vec::Vec;

use crate::cell::Cell;
use crate::op::{Op, Trap};

/// One complete machine configuration.
///
/// Equality is structural: two states are equal iff the accumulator, head, tape contents, and
/// program counter all match. Construction never fails; the operations in [`crate::op`] are
/// what enforce head bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    /// The accumulator register.
    pub acc: Cell,
    /// Head position on the tape.
    pub head: usize,
    /// The tape. Non-empty for any state a program runs against.
    pub tape: Vec<Cell>,
    /// Program counter. The sequential driver ignores it.
    pub pc: usize,
}

impl Default for State {
    /// A machine over a single empty cell, head at 0, empty accumulator, `pc` 0.
    fn default() -> Self {
        Self::new(vec![Cell::Empty])
    }
}

impl State {
    /// Creates a state over `tape` with the head at cell 0, an empty accumulator, and `pc` 0.
    #[must_use]
    pub fn new(tape: Vec<Cell>) -> Self {
        Self {
            acc: Cell::Empty,
            head: 0,
            tape,
            pc: 0,
        }
    }

    /// Returns a copy of this state with the accumulator replaced.
    #[must_use]
    pub fn with_acc(&self, acc: Cell) -> Self {
        Self {
            acc,
            head: self.head,
            tape: self.tape.clone(),
            pc: self.pc,
        }
    }

    /// Returns a copy of this state with the head moved to `head`.
    #[must_use]
    pub fn with_head(&self, head: usize) -> Self {
        Self {
            acc: self.acc,
            head,
            tape: self.tape.clone(),
            pc: self.pc,
        }
    }

    /// Returns a copy of this state with the program counter set to `pc`.
    #[must_use]
    pub fn with_pc(&self, pc: usize) -> Self {
        Self {
            acc: self.acc,
            head: self.head,
            tape: self.tape.clone(),
            pc,
        }
    }

    /// Returns a copy of this state with the cell at `index` replaced.
    ///
    /// The original tape is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is past the end of the tape.
    #[must_use]
    pub fn with_cell(&self, index: usize, cell: Cell) -> Self {
        let mut tape = self.tape.clone();
        tape[index] = cell;
        Self {
            acc: self.acc,
            head: self.head,
            tape,
            pc: self.pc,
        }
    }

    /// Returns the cell under the head, or `None` if the head is past the end of the tape.
    #[must_use]
    pub fn cell(&self) -> Option<Cell> {
        self.tape.get(self.head).copied()
    }

    /// Applies one operation to this state, producing the successor state.
    ///
    /// Equivalent to [`Op::apply`] with the arguments flipped; convenient for chaining steps
    /// outside a driver.
    ///
    /// # Errors
    ///
    /// Propagates the operation's [`Trap`].
    pub fn apply(&self, op: Op) -> Result<Self, Trap> {
        op.apply(self)
    }
}
