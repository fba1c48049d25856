// Copyright 2026 the Tape Machine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy execution traces.
//!
//! A driver walks a program against a starting [`State`] and yields a labeled snapshot per
//! step: `("init", initial)` first, one `(op_name, state_after)` per executed operation, and
//! `("end", final)` on normal termination. Two drivers exist:
//!
//! - [`SequentialTrace`] runs the program strictly in slice order and never consults the
//!   program counter. Its traces are finite by construction.
//! - [`BranchingTrace`] selects each operation through the program counter, so
//!   [`Op::Conditional`] and [`Op::Goto`] steer execution. Termination is not guaranteed; a
//!   goto cycle runs forever, and bounding consumption is the consumer's job
//!   (`Iterator::take`).
//!
//! Both are plain lazy iterators: a step is computed only when pulled, every yielded state is
//! an independent snapshot, and stopping early never invalidates steps already produced. A trap
//! ends the trace with a single `Err(`[`TrapInfo`]`)` and no `"end"` marker.

use core::fmt;

use crate::op::{Op, Trap};
use crate::state::State;

/// Label of the snapshot yielded before any operation runs.
pub const INIT_LABEL: &str = "init";

/// Label of the snapshot yielded on normal termination.
pub const END_LABEL: &str = "end";

/// One labeled snapshot of a trace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Name of the operation that produced this state, or [`INIT_LABEL`]/[`END_LABEL`].
    pub label: &'static str,
    /// The machine state after the step.
    pub state: State,
}

/// A trap annotated with its program location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrapInfo {
    /// The operation that trapped.
    pub op: Op,
    /// Program index of that operation.
    pub at: usize,
    /// Trap kind.
    pub trap: Trap,
}

impl fmt::Display for TrapInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "trap at op {} ({}): {}",
            self.at,
            self.op.name(),
            self.trap
        )
    }
}

impl core::error::Error for TrapInfo {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.trap)
    }
}

#[derive(Copy, Clone, Debug)]
enum Stage {
    Init,
    Ops,
    Done,
}

/// Straight-line driver: runs every operation in slice order, once.
///
/// The trace of a `k`-operation program has exactly `k + 2` entries. Operations that write the
/// program counter still apply their effect to the state, but the driver never reads it; the
/// slice position alone decides what runs next.
#[derive(Clone, Debug)]
pub struct SequentialTrace<'p> {
    program: &'p [Op],
    state: State,
    next_ix: usize,
    stage: Stage,
}

impl<'p> SequentialTrace<'p> {
    /// Creates a trace of `program` starting from `initial`.
    #[must_use]
    pub fn new(initial: State, program: &'p [Op]) -> Self {
        Self {
            program,
            state: initial,
            next_ix: 0,
            stage: Stage::Init,
        }
    }
}

impl Iterator for SequentialTrace<'_> {
    type Item = Result<Step, TrapInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stage {
            Stage::Init => {
                self.stage = Stage::Ops;
                Some(Ok(Step {
                    label: INIT_LABEL,
                    state: self.state.clone(),
                }))
            }
            Stage::Ops => {
                let Some(&op) = self.program.get(self.next_ix) else {
                    self.stage = Stage::Done;
                    return Some(Ok(Step {
                        label: END_LABEL,
                        state: self.state.clone(),
                    }));
                };
                let at = self.next_ix;
                self.next_ix += 1;
                match op.apply(&self.state) {
                    Ok(next) => {
                        self.state = next;
                        Some(Ok(Step {
                            label: op.name(),
                            state: self.state.clone(),
                        }))
                    }
                    Err(trap) => {
                        self.stage = Stage::Done;
                        Some(Err(TrapInfo { op, at, trap }))
                    }
                }
            }
            Stage::Done => None,
        }
    }
}

/// Program-counter-driven driver: `Conditional` and `Goto` steer execution.
///
/// The initial state's own `pc` is respected, so a trace may start mid-program; a starting `pc`
/// at or past the end of the program yields just `init` and `end`. Each step fetches
/// `program[pc]`, applies it, and resolves the next `pc` by comparing the operation's output
/// against the `pc` it ran at: an operation that left `pc` alone gets the default fallthrough
/// (`pc + 1`, written back into the yielded state), while one that wrote a different `pc` has
/// it taken verbatim.
///
/// A consequence worth knowing: `Goto` to its own index reads as "pc unchanged" and falls
/// through instead of looping in place.
#[derive(Clone, Debug)]
pub struct BranchingTrace<'p> {
    program: &'p [Op],
    state: State,
    stage: Stage,
}

impl<'p> BranchingTrace<'p> {
    /// Creates a trace of `program` starting from `initial`, at `initial.pc`.
    #[must_use]
    pub fn new(initial: State, program: &'p [Op]) -> Self {
        Self {
            program,
            state: initial,
            stage: Stage::Init,
        }
    }
}

impl Iterator for BranchingTrace<'_> {
    type Item = Result<Step, TrapInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stage {
            Stage::Init => {
                self.stage = Stage::Ops;
                Some(Ok(Step {
                    label: INIT_LABEL,
                    state: self.state.clone(),
                }))
            }
            Stage::Ops => {
                let pc = self.state.pc;
                let Some(&op) = self.program.get(pc) else {
                    self.stage = Stage::Done;
                    return Some(Ok(Step {
                        label: END_LABEL,
                        state: self.state.clone(),
                    }));
                };
                match op.apply(&self.state) {
                    Ok(mut next) => {
                        // Default fallthrough: an operation that left `pc` alone advances to
                        // the next instruction. A different `pc` is a branch, taken verbatim.
                        if next.pc == pc {
                            next.pc = pc + 1;
                        }
                        self.state = next;
                        Some(Ok(Step {
                            label: op.name(),
                            state: self.state.clone(),
                        }))
                    }
                    Err(trap) => {
                        self.stage = Stage::Done;
                        Some(Err(TrapInfo { op, at: pc, trap }))
                    }
                }
            }
            Stage::Done => None,
        }
    }
}
