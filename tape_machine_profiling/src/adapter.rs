// Copyright 2026 the Tape Machine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::labeler::{DefaultStepLabeler, StepLabeler, default_step_label};
use std::string::String;
use tape_machine::trace::{Step, TrapInfo};

type BackendGuard = tracy_client::Span;

struct StepScope {
    // Keep the label alive for backends that may borrow it.
    label: String,
    guard: Option<BackendGuard>,
}

/// An iterator adapter that emits one Tracy span per trace step.
///
/// A step's span opens when the step is yielded and closes when the consumer asks for the next
/// one, so spans measure what the consumer does with each step. Trap entries and the end of
/// the trace close the current span and open none.
pub struct ProfiledTrace<I, L = DefaultStepLabeler> {
    inner: I,
    labeler: L,
    scope: Option<StepScope>,
}

impl<I> ProfiledTrace<I, DefaultStepLabeler> {
    /// Creates an adapter that reuses the trace's own labels.
    #[must_use]
    pub fn new(inner: I) -> Self {
        Self::with_labeler(inner, DefaultStepLabeler)
    }
}

impl<I, L: StepLabeler> ProfiledTrace<I, L> {
    /// Creates an adapter with a custom labeler.
    #[must_use]
    pub fn with_labeler(inner: I, labeler: L) -> Self {
        Self {
            inner,
            labeler,
            scope: None,
        }
    }

    fn close_scope(&mut self) {
        if let Some(StepScope {
            label: _label,
            guard: _guard,
        }) = self.scope.take()
        {
            let _ = (_label, _guard);
        }
    }

    fn start_scope(&self, label: &str, pc: usize) -> Option<BackendGuard> {
        let client = tracy_client::Client::running()?;
        let line = u32::try_from(pc).unwrap_or(u32::MAX);
        Some(client.span_alloc(Some(label), "tape_machine.step", "tape_machine", line, 0))
    }
}

impl<I, L> Iterator for ProfiledTrace<I, L>
where
    I: Iterator<Item = Result<Step, TrapInfo>>,
    L: StepLabeler,
{
    type Item = Result<Step, TrapInfo>;

    fn next(&mut self) -> Option<Self::Item> {
        self.close_scope();
        let item = self.inner.next()?;
        if let Ok(step) = &item {
            let label = self
                .labeler
                .step_label(step)
                .unwrap_or_else(|| default_step_label(step));
            let guard = self.start_scope(&label, step.state.pc);
            self.scope = Some(StepScope { label, guard });
        }
        Some(item)
    }
}

impl<I, L> std::fmt::Debug for ProfiledTrace<I, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfiledTrace")
            .field("scope_active", &self.scope.is_some())
            .finish_non_exhaustive()
    }
}
