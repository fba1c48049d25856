// Copyright 2026 the Tape Machine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell values stored on the tape and in the accumulator.
//!
//! The value vocabulary is intentionally tiny: a cell is empty, a signed integer, or a
//! single-character atom. Cells are `Copy`, so snapshots of the tape are cheap element-wise
//! copies.

/// A tape cell, also the accumulator's value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    /// No value.
    #[default]
    Empty,
    /// Signed 64-bit integer.
    Int(i64),
    /// Single-character atom.
    Atom(char),
}

/// The kind of a [`Cell`], used in type mismatch diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellType {
    /// An empty cell.
    Empty,
    /// An integer cell.
    Int,
    /// An atom cell.
    Atom,
}

impl Cell {
    /// Returns the [`CellType`] of this cell.
    #[must_use]
    pub const fn cell_type(self) -> CellType {
        match self {
            Self::Empty => CellType::Empty,
            Self::Int(_) => CellType::Int,
            Self::Atom(_) => CellType::Atom,
        }
    }
}
