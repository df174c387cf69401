//! This module defines general error types used throughout the crate.

use thiserror::Error;

use crate::cube333::{Color, Face};

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Errors from importing a coloring into a `FaceletCube`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FaceletError {
    /// A facelet was left without a color.
    #[error("facelet {face:?} ({row}, {col}) has no color")]
    Unassigned {
        /// Face of the facelet
        face: Face,
        /// Row of the facelet
        row: usize,
        /// Column of the facelet
        col: usize,
    },
    /// Some color does not appear exactly 9 times.
    #[error("color {color:?} appears {count} times, expected 9")]
    ColorCount {
        /// The offending color
        color: Color,
        /// How often it appears
        count: usize,
    },
    /// Two faces share the same center color.
    #[error("color {color:?} is the center of more than one face")]
    DuplicateCenter {
        /// The shared center color
        color: Color,
    },
    /// The textual form did not have 54 facelets.
    #[error("expected 54 facelets, found {len}")]
    Length {
        /// Number of facelets found
        len: usize,
    },
    /// The textual form contained an unknown color letter.
    #[error("unknown color letter {letter:?} at facelet {index}")]
    Parse {
        /// The unknown letter
        letter: char,
        /// Facelet index of the letter
        index: usize,
    },
}

/// Errors from converting a `FaceletCube` into a `LinearCube`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The center facelets do not give every face its own color.
    #[error("center colors do not identify the six faces")]
    Centers,
    /// The colors at a cubie position do not match any cubie in any orientation.
    #[error("cubie position {position} has colors {code} which match no cubie")]
    InvalidCubie {
        /// Index of the cubie position (edges 0..12, corners 12..20)
        position: usize,
        /// Colors found there, written as face letters
        code: String,
    },
    /// A cubie was found at more than one position.
    #[error("cubie {code} appears more than once")]
    DuplicateCubie {
        /// Name of the cubie
        code: String,
    },
}

/// Why a cube cannot be solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsolvable {
    /// A single edge is flipped.
    EdgeFlip,
    /// A single corner is twisted.
    CornerTwist,
    /// Edge and corner permutation parities disagree.
    Parity,
    /// A stage search ran out of states without its two frontiers meeting.
    Unreachable {
        /// The stage that failed (1 to 4)
        stage: u8,
    },
}

impl std::fmt::Display for Unsolvable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unsolvable::EdgeFlip => f.write_str("an edge is flipped"),
            Unsolvable::CornerTwist => f.write_str("a corner is twisted"),
            Unsolvable::Parity => f.write_str("two pieces are swapped"),
            Unsolvable::Unreachable { stage } => {
                write!(f, "stage {stage} cannot reach its goal")
            }
        }
    }
}

/// Errors returned by the solver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// The coloring could not be turned into a cubie state.
    #[error("invalid coloring: {0}")]
    InvalidColoring(#[from] EncodeError),
    /// The coloring is a real arrangement of cubies, but not one a cube can be turned into.
    #[error("unsolvable cube: {reason}")]
    Unsolvable {
        /// What makes it unsolvable
        reason: Unsolvable,
    },
    /// A stage search recorded more states than the configured limit.
    #[error("stage {stage} exceeded the node limit")]
    NodeLimit {
        /// The stage that gave up
        stage: u8,
    },
}

/// Errors from parsing move notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    /// The face letter is not one of U, D, B, F, R, L.
    #[error("unknown face in move {0:?}")]
    Face(String),
    /// The suffix is not empty, `2` or `'`.
    #[error("unknown turn amount in move {0:?}")]
    Count(String),
}
