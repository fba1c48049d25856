// Copyright 2026 the Tape Machine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo front ends for `tape_machine`.
//!
//! The core yields data, not text; rendering a trace for humans is an embedder concern, and
//! this crate is that embedder. It carries the line renderers plus the two demo programs the
//! binaries run: tape reversal (`reverse`) and the counting loop (`sum_loop`).

use tape_machine::cell::Cell;
use tape_machine::op::Op;
use tape_machine::state::State;
use tape_machine::trace::Step;

/// Renders a cell the way the demos print tapes: `_` for empty, bare integers, quoted atoms.
#[must_use]
pub fn render_cell(cell: Cell) -> String {
    match cell {
        Cell::Empty => String::from("_"),
        Cell::Int(v) => v.to_string(),
        Cell::Atom(c) => format!("'{c}'"),
    }
}

/// Renders a state on one line: the tape with the head's cell parenthesized, then the
/// accumulator and program counter.
#[must_use]
pub fn render_state(state: &State) -> String {
    let mut out = String::from("[");
    for (ix, &cell) in state.tape.iter().enumerate() {
        if ix > 0 {
            out.push(' ');
        }
        if ix == state.head {
            out.push('(');
            out.push_str(&render_cell(cell));
            out.push(')');
        } else {
            out.push_str(&render_cell(cell));
        }
    }
    out.push_str("] acc=");
    out.push_str(&render_cell(state.acc));
    format!("{out} pc={}", state.pc)
}

/// Renders one trace entry: a right-aligned label column, then the state.
#[must_use]
pub fn render_step(step: &Step) -> String {
    format!("{:>11} {}", step.label, render_state(&step.state))
}

/// The reversal demo program: turns `[x, y, z, _]` into `[z, y, x, _]`, shuttling cells
/// through the trailing scratch cell.
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

/// The counting-loop demo program, for a `[counter, 0, -1, 0]` tape: adds the counter to the
/// running sum in cell 3 and decrements it until it matches the zero sentinel in cell 1, then
/// parks on the trailing `identity`.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_render_compactly() {
        assert_eq!(render_cell(Cell::Empty), "_");
        assert_eq!(render_cell(Cell::Int(-7)), "-7");
        assert_eq!(render_cell(Cell::Atom('a')), "'a'");
    }

    #[test]
    fn state_rendering_marks_the_head() {
        let state = State::new(vec![Cell::Atom('a'), Cell::Int(3), Cell::Empty]).with_head(1);
        assert_eq!(render_state(&state), "['a' (3) _] acc=_ pc=0");
    }

    #[test]
    fn step_rendering_aligns_the_label_column() {
        let step = Step {
            label: "init",
            state: State::default(),
        };
        assert_eq!(render_step(&step), "       init [(_)] acc=_ pc=0");
    }
}
