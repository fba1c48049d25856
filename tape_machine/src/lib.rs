// Copyright 2026 the Tape Machine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `tape_machine`: a minimal abstract machine over a tape of cells.
//!
//! One tape, one read/write head, one accumulator register, and, in the branching variant, a
//! program counter. A program is a plain slice of [`op::Op`] values; executing it against an
//! initial [`state::State`] yields a lazy trace of labeled snapshots. The instruction set is
//! tiny on purpose: a handful of head and cell operations plus one compare-and-branch are
//! enough to express real algorithms (reversal, summation) as pure state transitions.
//!
//! Every operation maps one state to a fresh successor state, so a collected trace is a stack
//! of independent snapshots. Precondition violations (an off-tape head, a non-integer
//! accumulator fed to `iadd`) trap instead of clamping; see [`op::Trap`].
//!
//! ## Example
//!
//! ```
//! extern crate alloc;
//!
//! use alloc::vec;
//!
//! use tape_machine::cell::Cell;
//! use tape_machine::op::Op;
//! use tape_machine::state::State;
//! use tape_machine::trace::SequentialTrace;
//!
//! // Pick up the atom under the head and drop it one cell to the right.
//! let program = [Op::CopyCell, Op::EraseCell, Op::MoveRight, Op::SetCell];
//! let initial = State::new(vec![Cell::Atom('a'), Cell::Empty]);
//!
//! let last = SequentialTrace::new(initial, &program).last().unwrap()?;
//! assert_eq!(last.label, "end");
//! assert_eq!(last.state.tape, vec![Cell::Empty, Cell::Atom('a')]);
//! # Ok::<(), tape_machine::trace::TrapInfo>(())
//! ```

#![no_std]

extern crate alloc;

pub mod cell;
pub mod op;
pub mod state;
pub mod trace;
