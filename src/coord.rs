//! We give a general description of a coordinate, which is a type used to encode coset information
//! of a puzzle.
//!
//! Two puzzles with equal coordinates lie in the same coset of whatever subgroup the coordinate
//! describes, so a search only has to drive the coordinate to the coordinate of the solved puzzle.

use std::hash::Hash;

/// A coordinate type, encoding cosets of the puzzle P.
///
/// Coordinates are used directly as hash map keys during search, so unlike a table index they do
/// not need to be dense.
pub trait Coordinate<P>: Copy + Eq + Hash {
    /// Obtain the coordinate that corresponds to the given puzzle.
    fn from_puzzle(puzzle: &P) -> Self;

    /// Determine whether the given puzzle has the same coordinate as `solved`.
    fn matches(puzzle: &P, solved: &P) -> bool {
        Self::from_puzzle(puzzle) == Self::from_puzzle(solved)
    }
}
