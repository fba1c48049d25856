// Copyright 2026 the Tape Machine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conformance fixtures for `tape_machine`.
//!
//! The canonical demo programs and a couple of collection helpers, shared by the regression
//! tests under `tests/`. The programs are deliberately fixed instruction lists, not generated:
//! the tests pin their exact traces.

#![no_std]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use tape_machine::op::Op;
use tape_machine::trace::{Step, TrapInfo};

/// Reverses the three occupied cells of a four-cell tape, using the trailing empty cell as
/// scratch: `[x, y, z, _]` becomes `[z, y, x, _]`.
#[must_use]
pub fn reversal_program() -> Vec<Op> {
    vec![
        // Park x in the scratch cell.
        Op::CopyCell,
        Op::EraseCell,
        Op::MoveRight,
        Op::MoveRight,
        Op::MoveRight,
        Op::SetCell,
        // z into cell 0.
        Op::MoveLeft,
        Op::CopyCell,
        Op::EraseCell,
        Op::MoveLeft,
        Op::MoveLeft,
        Op::SetCell,
        // x from scratch into cell 2.
        Op::MoveRight,
        Op::MoveRight,
        Op::MoveRight,
        Op::CopyCell,
        Op::EraseCell,
        Op::MoveLeft,
        Op::SetCell,
    ]
}

/// The counting loop: adds the counter in cell 0 to the running sum in cell 3, decrements the
/// counter via the `-1` constant in cell 2, and repeats until the counter equals the zero
/// sentinel in cell 1. Expects the tape `[counter, 0, -1, 0]` with the head on cell 0.
#[must_use]
pub fn counting_loop_program() -> Vec<Op> {
    vec![
        // 0: counter -> acc.
        Op::CopyCell,
        Op::MoveRight,
        // 2: counter == sentinel? fall through to the exit jump, else skip it.
        Op::Conditional,
        Op::Goto { target: 19 },
        // 4: sum += counter.
        Op::MoveRight,
        Op::MoveRight,
        Op::IAdd,
        Op::SetCell,
        // 8: counter -= 1.
        Op::MoveLeft,
        Op::MoveLeft,
        Op::MoveLeft,
        Op::CopyCell,
        Op::MoveRight,
        Op::MoveRight,
        Op::IAdd,
        Op::MoveLeft,
        Op::MoveLeft,
        Op::SetCell,
        // 18: next iteration.
        Op::Goto { target: 0 },
        // 19: exit.
        Op::Identity,
    ]
}

/// Collects a whole trace, stopping at the first trap.
///
/// # Errors
///
/// Returns the [`TrapInfo`] of the step that trapped.
pub fn collect_steps(
    trace: impl Iterator<Item = Result<Step, TrapInfo>>,
) -> Result<Vec<Step>, TrapInfo> {
    trace.collect()
}

/// The label column of a collection of steps.
#[must_use]
pub fn labels(steps: &[Step]) -> Vec<&'static str> {
    steps.iter().map(|step| step.label).collect()
}
