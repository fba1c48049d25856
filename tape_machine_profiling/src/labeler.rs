// Copyright 2026 the Tape Machine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::string::String;
use tape_machine::trace::Step;

/// Optional labeler for profiled steps.
///
/// Return `None` to fall back to the step's own trace label.
pub trait StepLabeler {
    /// Resolve the span label for one step.
    fn step_label(&mut self, _step: &Step) -> Option<String> {
        None
    }
}

/// Default labeler that keeps the trace's own labels.
#[derive(Default, Debug)]
pub struct DefaultStepLabeler;

impl StepLabeler for DefaultStepLabeler {}

/// Labeler that adds the head position and program counter to every span label.
///
/// Handy when a Tracy capture of a branching program should show which loop iteration a span
/// belongs to.
#[derive(Default, Debug)]
pub struct StateDetailLabeler;

impl StepLabeler for StateDetailLabeler {
    fn step_label(&mut self, step: &Step) -> Option<String> {
        Some(format!(
            "{} head={} pc={}",
            step.label, step.state.head, step.state.pc
        ))
    }
}

pub(crate) fn default_step_label(step: &Step) -> String {
    String::from(step.label)
}
