// Copyright 2026 the Tape Machine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints the full trace of the counting-loop demo, which sums 1 through 10 on the tape.
//!
//! The branching driver cannot prove the loop terminates, so the trace is pulled through a
//! step budget; an unfinished trace is reported as a failure.

use std::process::ExitCode;

use tape_machine::cell::Cell;
use tape_machine::state::State;
use tape_machine::trace::{BranchingTrace, END_LABEL};
use tape_machine_examples::{counting_loop_program, render_step};

const STEP_BUDGET: usize = 1_000;

fn main() -> ExitCode {
    let program = counting_loop_program();
    let initial = State::new(vec![Cell::Int(10), Cell::Int(0), Cell::Int(-1), Cell::Int(0)]);
    let mut ended = false;
    for step in BranchingTrace::new(initial, &program).take(STEP_BUDGET) {
        let step = step.expect("counting loop does not trap");
        ended = step.label == END_LABEL;
        println!("{}", render_step(&step));
    }
    if ended {
        ExitCode::SUCCESS
    } else {
        eprintln!("stopped after {STEP_BUDGET} steps without reaching the end of the program");
        ExitCode::FAILURE
    }
}
