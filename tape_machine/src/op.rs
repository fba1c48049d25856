// Copyright 2026 the Tape Machine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The operation vocabulary and its transition semantics.
//!
//! Every operation is a pure transition from one [`State`] to a fresh successor state.
//! Precondition violations surface as [`Trap`]s rather than clamped or corrected state: an
//! out-of-range head at a tape-touching operation is a bug in the caller's program, not a
//! recoverable runtime event.
//!
//! Only [`Op::Conditional`] and [`Op::Goto`] write the program counter. Every other operation
//! leaves `pc` untouched, which is how the branching driver in [`crate::trace`] tells
//! control-flow operations apart from ordinary ones.

use core::fmt;

use crate::cell::{Cell, CellType};
use crate::state::State;

/// A primitive machine operation.
///
/// Parameterized operations carry their immediate operand as data, so a program is a plain
/// inspectable slice of `Op` values rather than opaque closures.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    /// Move the head one cell left. Absorbing at the left edge.
    MoveLeft,
    /// Move the head one cell right. Absorbing at the right edge.
    MoveRight,
    /// Copy the cell under the head into the accumulator, discarding the old accumulator.
    CopyCell,
    /// Overwrite the cell under the head with [`Cell::Empty`]. The accumulator is unchanged.
    EraseCell,
    /// Write the accumulator into the cell under the head, verbatim, including
    /// [`Cell::Empty`]. The accumulator is unchanged.
    SetCell,
    /// Add the cell under the head to the integer accumulator. An empty cell contributes 0.
    IAdd,
    /// Return the state unchanged. Useful as an explicit branch target.
    Identity,
    /// Two-way branch on the cell under the head: `pc + 1` when it equals the accumulator,
    /// `pc + 2` (skipping one instruction) when it does not.
    Conditional,
    /// Jump to a fixed program index, unconditionally.
    ///
    /// The target is not bounds-checked here; a target past the end of the program makes the
    /// branching driver terminate.
    Goto {
        /// Destination program index.
        target: usize,
    },
}

impl Op {
    /// The operation's trace label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MoveLeft => "move_left",
            Self::MoveRight => "move_right",
            Self::CopyCell => "copy_cell",
            Self::EraseCell => "erase_cell",
            Self::SetCell => "set_cell",
            Self::IAdd => "iadd",
            Self::Identity => "identity",
            Self::Conditional => "conditional",
            Self::Goto { .. } => "goto",
        }
    }

    /// Applies this operation to `state`, producing the successor state.
    ///
    /// # Errors
    ///
    /// Tape-touching operations return [`Trap::HeadOutOfBounds`] when the head sits past the
    /// end of the tape. [`Op::IAdd`] returns [`Trap::TypeMismatch`] when the accumulator is not
    /// an integer or the cell under the head holds an atom.
    pub fn apply(self, state: &State) -> Result<State, Trap> {
        match self {
            Self::MoveLeft => Ok(if state.head == 0 {
                state.clone()
            } else {
                state.with_head(state.head - 1)
            }),
            Self::MoveRight => {
                read_head(state)?;
                Ok(if state.head == state.tape.len() - 1 {
                    state.clone()
                } else {
                    state.with_head(state.head + 1)
                })
            }
            Self::CopyCell => {
                let cell = read_head(state)?;
                Ok(state.with_acc(cell))
            }
            Self::EraseCell => {
                read_head(state)?;
                Ok(state.with_cell(state.head, Cell::Empty))
            }
            Self::SetCell => {
                read_head(state)?;
                Ok(state.with_cell(state.head, state.acc))
            }
            Self::IAdd => {
                let cell = read_head(state)?;
                let Cell::Int(acc) = state.acc else {
                    return Err(Trap::TypeMismatch {
                        expected: CellType::Int,
                        actual: state.acc.cell_type(),
                    });
                };
                let addend = match cell {
                    Cell::Empty => 0,
                    Cell::Int(v) => v,
                    Cell::Atom(_) => {
                        return Err(Trap::TypeMismatch {
                            expected: CellType::Int,
                            actual: CellType::Atom,
                        });
                    }
                };
                Ok(state.with_acc(Cell::Int(acc.wrapping_add(addend))))
            }
            Self::Identity => Ok(state.clone()),
            Self::Conditional => {
                let cell = read_head(state)?;
                let offset = if cell == state.acc { 1 } else { 2 };
                Ok(state.with_pc(state.pc.saturating_add(offset)))
            }
            Self::Goto { target } => Ok(state.with_pc(target)),
        }
    }
}

/// Reads the cell under the head, trapping when the head is off the tape.
fn read_head(state: &State) -> Result<Cell, Trap> {
    state.cell().ok_or(Trap::HeadOutOfBounds {
        head: state.head,
        len: state.tape.len(),
    })
}

/// A precondition violation.
///
/// Traps are final: no operation recovers from one, and the drivers in [`crate::trace`] end the
/// trace after reporting it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trap {
    /// The head sits past the end of the tape.
    HeadOutOfBounds {
        /// Head position at the violation.
        head: usize,
        /// Tape length.
        len: usize,
    },
    /// An operand had the wrong cell type.
    TypeMismatch {
        /// Required cell type.
        expected: CellType,
        /// Cell type actually found.
        actual: CellType,
    },
}

impl fmt::Display for Trap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeadOutOfBounds { head, len } => {
                write!(f, "head out of bounds (head {head}, tape length {len})")
            }
            Self::TypeMismatch { expected, actual } => {
                write!(f, "type mismatch (expected {expected:?}, got {actual:?})")
            }
        }
    }
}

impl core::error::Error for Trap {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn abc_state() -> State {
        State::new(vec![Cell::Atom('a'), Cell::Atom('b'), Cell::Atom('c')])
    }

    #[test]
    fn move_left_absorbs_at_left_edge() {
        let s = abc_state();
        assert_eq!(Op::MoveLeft.apply(&s).unwrap(), s);
    }

    #[test]
    fn move_right_absorbs_at_right_edge() {
        let s = abc_state().with_head(2);
        assert_eq!(Op::MoveRight.apply(&s).unwrap(), s);
    }

    #[test]
    fn moves_are_inverses_away_from_edges() {
        let s = abc_state().with_head(1);
        let left_then_right = Op::MoveRight.apply(&Op::MoveLeft.apply(&s).unwrap()).unwrap();
        let right_then_left = Op::MoveLeft.apply(&Op::MoveRight.apply(&s).unwrap()).unwrap();
        assert_eq!(left_then_right, s);
        assert_eq!(right_then_left, s);
    }

    #[test]
    fn copy_cell_overwrites_acc() {
        let s = abc_state().with_acc(Cell::Int(7)).with_head(1);
        let next = Op::CopyCell.apply(&s).unwrap();
        assert_eq!(next.acc, Cell::Atom('b'));
        assert_eq!(next.tape, s.tape);
    }

    #[test]
    fn copy_of_empty_cell_empties_acc() {
        let s = State::new(vec![Cell::Empty]).with_acc(Cell::Int(1));
        assert_eq!(Op::CopyCell.apply(&s).unwrap().acc, Cell::Empty);
    }

    #[test]
    fn set_after_copy_leaves_state_unchanged() {
        let copied = Op::CopyCell.apply(&abc_state().with_head(1)).unwrap();
        assert_eq!(Op::SetCell.apply(&copied).unwrap(), copied);
    }

    #[test]
    fn set_cell_writes_empty_acc_verbatim() {
        let s = abc_state().with_head(1);
        let next = Op::SetCell.apply(&s).unwrap();
        assert_eq!(
            next.tape,
            vec![Cell::Atom('a'), Cell::Empty, Cell::Atom('c')]
        );
        assert_eq!(next.acc, Cell::Empty);
    }

    #[test]
    fn erase_cell_is_idempotent() {
        let s = abc_state().with_acc(Cell::Atom('z'));
        let once = Op::EraseCell.apply(&s).unwrap();
        let twice = Op::EraseCell.apply(&once).unwrap();
        assert_eq!(once.tape[0], Cell::Empty);
        assert_eq!(once.acc, Cell::Atom('z'));
        assert_eq!(twice, once);
    }

    #[test]
    fn erase_does_not_touch_earlier_snapshots() {
        let s = abc_state();
        let next = Op::EraseCell.apply(&s).unwrap();
        assert_eq!(s.tape[0], Cell::Atom('a'));
        assert_eq!(next.tape[0], Cell::Empty);
    }

    #[test]
    fn iadd_adds_cell_to_acc() {
        let s = State::new(vec![Cell::Int(32)]).with_acc(Cell::Int(10));
        assert_eq!(Op::IAdd.apply(&s).unwrap().acc, Cell::Int(42));
    }

    #[test]
    fn iadd_treats_empty_cell_as_zero() {
        let s = State::new(vec![Cell::Empty]).with_acc(Cell::Int(10));
        assert_eq!(Op::IAdd.apply(&s).unwrap().acc, Cell::Int(10));
    }

    #[test]
    fn iadd_requires_integer_acc() {
        let s = State::new(vec![Cell::Int(1)]);
        assert_eq!(
            Op::IAdd.apply(&s),
            Err(Trap::TypeMismatch {
                expected: CellType::Int,
                actual: CellType::Empty,
            })
        );
    }

    #[test]
    fn iadd_rejects_atom_cell() {
        let s = State::new(vec![Cell::Atom('a')]).with_acc(Cell::Int(1));
        assert_eq!(
            Op::IAdd.apply(&s),
            Err(Trap::TypeMismatch {
                expected: CellType::Int,
                actual: CellType::Atom,
            })
        );
    }

    #[test]
    fn identity_returns_equal_state() {
        let s = abc_state().with_head(2).with_pc(5);
        assert_eq!(Op::Identity.apply(&s).unwrap(), s);
    }

    #[test]
    fn conditional_falls_through_on_equal() {
        let s = State::new(vec![Cell::Int(1)]).with_acc(Cell::Int(1));
        assert_eq!(Op::Conditional.apply(&s).unwrap().pc, 1);
    }

    #[test]
    fn conditional_skips_one_on_not_equal() {
        let s = State::new(vec![Cell::Int(1)]);
        assert_eq!(Op::Conditional.apply(&s).unwrap().pc, 2);
    }

    #[test]
    fn goto_sets_pc_verbatim() {
        let s = abc_state();
        assert_eq!(Op::Goto { target: 10 }.apply(&s).unwrap().pc, 10);
    }

    #[test]
    fn tape_ops_trap_past_the_end() {
        let s = State::new(vec![Cell::Int(1)]).with_head(4);
        let expected = Err(Trap::HeadOutOfBounds { head: 4, len: 1 });
        assert_eq!(Op::MoveRight.apply(&s), expected);
        assert_eq!(Op::CopyCell.apply(&s), expected);
        assert_eq!(Op::EraseCell.apply(&s), expected);
        assert_eq!(Op::SetCell.apply(&s), expected);
        assert_eq!(Op::IAdd.apply(&s), expected);
        assert_eq!(Op::Conditional.apply(&s), expected);
    }

    #[test]
    fn move_left_never_traps() {
        let s = State::new(vec![Cell::Int(1)]).with_head(4);
        assert_eq!(Op::MoveLeft.apply(&s).unwrap().head, 3);
    }

    #[test]
    fn names_are_stable() {
        let named: Vec<&str> = [
            Op::MoveLeft,
            Op::MoveRight,
            Op::CopyCell,
            Op::EraseCell,
            Op::SetCell,
            Op::IAdd,
            Op::Identity,
            Op::Conditional,
            Op::Goto { target: 0 },
        ]
        .iter()
        .map(|op| op.name())
        .collect();
        assert_eq!(
            named,
            vec![
                "move_left",
                "move_right",
                "copy_cell",
                "erase_cell",
                "set_cell",
                "iadd",
                "identity",
                "conditional",
                "goto",
            ]
        );
    }

    #[test]
    fn trap_messages_are_stable() {
        assert_eq!(
            Trap::HeadOutOfBounds { head: 4, len: 4 }.to_string(),
            "head out of bounds (head 4, tape length 4)"
        );
        assert_eq!(
            Trap::TypeMismatch {
                expected: CellType::Int,
                actual: CellType::Atom,
            }
            .to_string(),
            "type mismatch (expected Int, got Atom)"
        );
    }
}
