//! The four stages of Thistlethwaite's algorithm.
//!
//! Each stage has a set of moves it may use and a coordinate describing what it has to fix. The
//! moves of stages 2 and 3 leave the coordinates of all earlier stages unchanged. The stage 3
//! corner coordinate is finer than the group stage 4 works in, so the half turns of stage 4 can
//! move it away from solved mid-path, but a stage 4 path always ends on the solved cube.

use crate::coord::Coordinate;
use crate::cube333::linear::{permutation_parity, EDGES};
use crate::cube333::{LinearCube, LinearMove};

/// Bitmask of allowed moves, bit `i` standing for the linear move with index `i`.
pub(crate) type MoveMask = u32;

/// Every move except the quarter turns of the given faces (as indices into the linear move face
/// order U, D, F, B, L, R).
const fn without_quarter_turns(faces: &[u8]) -> MoveMask {
    let mut mask: MoveMask = (1 << LinearMove::COUNT as u32) - 1;
    let mut i = 0;
    while i < faces.len() {
        mask &= !(0b101 << (faces[i] as u32 * 3));
        i += 1;
    }
    mask
}

/// One stage of the solve.
pub(crate) trait Stage {
    /// The stage number, 1 to 4.
    const NUMBER: u8;
    /// The moves this stage may use.
    const MOVES: MoveMask;
    /// What this stage has to make equal to the solved cube.
    type Key: Coordinate<LinearCube>;

    /// Whether the given move is usable in this stage.
    fn allows(mv: LinearMove) -> bool {
        Self::MOVES & (1 << mv.index()) != 0
    }
}

pub(crate) struct Stage1;
pub(crate) struct Stage2;
pub(crate) struct Stage3;
pub(crate) struct Stage4;

impl Stage for Stage1 {
    const NUMBER: u8 = 1;
    const MOVES: MoveMask = without_quarter_turns(&[]);
    type Key = EdgeOrientationKey;
}

impl Stage for Stage2 {
    const NUMBER: u8 = 2;
    const MOVES: MoveMask = without_quarter_turns(&[2, 3]);
    type Key = CornerSliceKey;
}

impl Stage for Stage3 {
    const NUMBER: u8 = 3;
    const MOVES: MoveMask = without_quarter_turns(&[2, 3, 4, 5]);
    type Key = TetradParityKey;
}

impl Stage for Stage4 {
    const NUMBER: u8 = 4;
    const MOVES: MoveMask = without_quarter_turns(&[0, 1, 2, 3, 4, 5]);
    type Key = LinearCube;
}

/// Stage 1: the 12 edge orientations, bit `i` for edge position `i`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct EdgeOrientationKey(u16);

impl Coordinate<LinearCube> for EdgeOrientationKey {
    fn from_puzzle(puzzle: &LinearCube) -> Self {
        EdgeOrientationKey(
            puzzle
                .edge_orientation()
                .iter()
                .enumerate()
                .fold(0, |acc, (i, &o)| acc | (o as u16) << i),
        )
    }
}

/// Stage 2: corner orientations, plus which positions hold one of the four middle slice edges
/// (FR, FL, BR, BL).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CornerSliceKey {
    slice: u16,
    co: [u8; 8],
}

impl Coordinate<LinearCube> for CornerSliceKey {
    fn from_puzzle(puzzle: &LinearCube) -> Self {
        let slice = puzzle
            .edges()
            .iter()
            .enumerate()
            .fold(0, |acc, (i, &e)| acc | ((e >= 8) as u16) << i);
        let mut co = [0; 8];
        co.copy_from_slice(puzzle.corner_orientation());
        CornerSliceKey { slice, co }
    }
}

/// Stage 3: the slice every edge belongs to, the tetrad every corner belongs to, and the parity
/// of the corner permutation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct TetradParityKey {
    edges: u32,
    corners: u32,
    parity: bool,
}

impl Coordinate<LinearCube> for TetradParityKey {
    fn from_puzzle(puzzle: &LinearCube) -> Self {
        // 2 for the middle slice, otherwise 0 or 1 splits the remaining edges into the two
        // other slices
        let edges = puzzle.edges().iter().enumerate().fold(0, |acc, (i, &e)| {
            let slice = if e > 7 { 2 } else { e & 1 };
            acc | (slice as u32) << (2 * i)
        });
        let corners = puzzle.corners().iter().enumerate().fold(0, |acc, (i, &c)| {
            acc | (((c - EDGES as u8) & 5) as u32) << (3 * i)
        });
        let parity = permutation_parity(puzzle.corners());
        TetradParityKey {
            edges,
            corners,
            parity,
        }
    }
}

/// Stage 4 has to reach the solved cube exactly, so its coordinate is the whole cube.
impl Coordinate<LinearCube> for LinearCube {
    fn from_puzzle(puzzle: &LinearCube) -> Self {
        *puzzle
    }
}
