// Copyright 2026 the Tape Machine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints the full trace of the tape-reversal demo.

use tape_machine::cell::Cell;
use tape_machine::state::State;
use tape_machine::trace::SequentialTrace;
use tape_machine_examples::{render_step, reversal_program};

fn main() {
    let program = reversal_program();
    let initial = State::new(vec![
        Cell::Atom('a'),
        Cell::Atom('b'),
        Cell::Atom('c'),
        Cell::Empty,
    ]);
    for step in SequentialTrace::new(initial, &program) {
        let step = step.expect("straight-line demo does not trap");
        println!("{}", render_step(&step));
    }
}
