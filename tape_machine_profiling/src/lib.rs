// Copyright 2026 the Tape Machine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Profiling adapters for `tape_machine` (currently Tracy).
//!
//! This crate is `std`-only and keeps `tape_machine` itself free of profiling dependencies.
//! It wraps a trace iterator and emits one profiling span per yielded step: a step's span
//! opens when the step comes out of the trace and closes when the consumer pulls the next one,
//! so span durations show where trace consumption spends its time. Without a running Tracy
//! client the adapter is a transparent pass-through.
//!
//! ## Backend
//! This crate currently supports the Tracy backend via `tracy-client`.
//!
//! ## Example
//! ```ignore
//! use tape_machine::trace::BranchingTrace;
//! use tape_machine_profiling::ProfiledTrace;
//!
//! let trace = BranchingTrace::new(initial, &program);
//! for step in ProfiledTrace::new(trace) {
//!     let step = step?;
//!     // Handle the step; its span stays open until the next pull.
//! }
//! # Ok::<(), tape_machine::trace::TrapInfo>(())
//! ```

mod adapter;
mod labeler;

pub use adapter::ProfiledTrace;
pub use labeler::{DefaultStepLabeler, StateDetailLabeler, StepLabeler};
