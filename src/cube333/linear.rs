//! The compact cubie representation the solver searches over.
//!
//! A `LinearCube` is 40 small integers. Slots 0..12 hold which edge occupies each of the 12 edge
//! positions, slots 12..20 which corner (numbered 12..20) occupies each corner position, slots
//! 20..32 the edge orientations (0 or 1) and slots 32..40 the corner orientations (0, 1 or 2).
//!
//! Positions are numbered
//!
//! ```text
//! edges:   UF UR UB UL DF DR DB DL FR FL BR BL
//! corners: UFR URB UBL ULF DRF DFL DLB DBR
//! ```

use super::{Face, Move333};
use crate::error::Unsolvable;

/// Number of edge positions.
pub const EDGES: usize = 12;
/// Number of corner positions.
pub const CORNERS: usize = 8;
/// Number of cubie positions. A slot `i` below this holds a permutation entry and slot `i +
/// CUBIES` holds the orientation of the same position.
pub const CUBIES: usize = EDGES + CORNERS;

/// The faces in the order the linear move indices use them.
const SEARCH_FACES: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

/// For each face in `SEARCH_FACES` order, the 4 edge positions and then the 4 corner positions it
/// turns. A clockwise quarter turn moves the cubie at entry `i + 1` (wrapping within each group
/// of 4) into entry `i`.
const AFFECTED: [[u8; 8]; 6] = [
    [0, 1, 2, 3, 0, 1, 2, 3],
    [4, 7, 6, 5, 4, 5, 6, 7],
    [0, 9, 4, 8, 0, 3, 5, 4],
    [2, 10, 6, 11, 2, 1, 7, 6],
    [3, 11, 7, 9, 3, 2, 6, 5],
    [1, 8, 5, 10, 1, 0, 4, 7],
];

/// A move as the solver indexes it: `face * 3 + count - 1`, with faces ordered U, D, F, B, L, R.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinearMove(u8);

impl LinearMove {
    /// The number of distinct moves.
    pub const COUNT: u8 = 18;

    /// Every move in index order.
    pub fn all() -> impl Iterator<Item = LinearMove> {
        (0..Self::COUNT).map(LinearMove)
    }

    /// Create a move from its index, if it is in range.
    pub fn from_index(index: u8) -> Option<LinearMove> {
        (index < Self::COUNT).then_some(LinearMove(index))
    }

    /// The index of this move.
    pub fn index(self) -> u8 {
        self.0
    }

    /// The move undoing this one. Quarter turns swap direction, half turns are their own
    /// inverse.
    pub fn inverse(self) -> LinearMove {
        LinearMove(self.0 + 2 - 2 * (self.0 % 3))
    }
}

impl From<Move333> for LinearMove {
    fn from(mv: Move333) -> Self {
        // SEARCH_FACES contains every face
        let face = SEARCH_FACES.iter().position(|&f| f == mv.ty).unwrap_or(0) as u8;
        LinearMove(face * 3 + (mv.count - 1) % 3)
    }
}

impl From<LinearMove> for Move333 {
    fn from(mv: LinearMove) -> Self {
        Move333 {
            ty: SEARCH_FACES[(mv.0 / 3) as usize],
            count: mv.0 % 3 + 1,
        }
    }
}

/// A cube as a permutation plus orientation of its 20 cubies. See the module documentation for
/// the slot layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinearCube(pub(crate) [u8; 40]);

impl Default for LinearCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl LinearCube {
    /// The solved cube: every cubie at home with zero orientation.
    pub const SOLVED: LinearCube = {
        let mut s = [0; 40];
        let mut i = 0;
        while i < CUBIES {
            s[i] = i as u8;
            i += 1;
        }
        LinearCube(s)
    };

    /// Build a cube from raw slots. Returns `None` if any slot is out of range or some cubie
    /// appears twice. Whether moves can reach the cube is left to [`check`](LinearCube::check).
    pub fn from_slots(slots: [u8; 40]) -> Option<LinearCube> {
        let in_range = slots.iter().enumerate().all(|(i, &v)| {
            if i < EDGES {
                v < EDGES as u8
            } else if i < CUBIES {
                (EDGES as u8..CUBIES as u8).contains(&v)
            } else if i < CUBIES + EDGES {
                v < 2
            } else {
                v < 3
            }
        });
        if !in_range {
            return None;
        }

        let mut seen = [false; CUBIES];
        let distinct = slots[..CUBIES]
            .iter()
            .all(|&c| !std::mem::replace(&mut seen[c as usize], true));
        distinct.then_some(LinearCube(slots))
    }

    /// The raw slots.
    pub fn slots(&self) -> &[u8; 40] {
        &self.0
    }

    /// The cubie at each edge position.
    pub fn edges(&self) -> &[u8] {
        &self.0[..EDGES]
    }

    /// The cubie (numbered from 12) at each corner position.
    pub fn corners(&self) -> &[u8] {
        &self.0[EDGES..CUBIES]
    }

    /// The orientation of each edge position.
    pub fn edge_orientation(&self) -> &[u8] {
        &self.0[CUBIES..CUBIES + EDGES]
    }

    /// The orientation of each corner position.
    pub fn corner_orientation(&self) -> &[u8] {
        &self.0[CUBIES + EDGES..]
    }

    /// Apply a move, giving the resulting cube.
    pub fn make_move(self, mv: LinearMove) -> LinearCube {
        let face = (mv.0 / 3) as usize;
        let turns = mv.0 % 3 + 1;
        let affected = &AFFECTED[face];

        let mut state = self.0;
        for turn in 1..=turns {
            let old = state;
            for i in 0..8 {
                let is_corner = i > 3;
                let offset = if is_corner { EDGES } else { 0 };
                let target = affected[i] as usize + offset;
                let source = affected[if i & 3 == 3 { i - 3 } else { i + 1 }] as usize + offset;
                // Only F and B flip edges. U and D never twist corners, other faces twist
                // their corners by 2 and 1 alternately.
                let delta = match (is_corner, face) {
                    (false, 2 | 3) => 1,
                    (false, _) | (true, 0 | 1) => 0,
                    (true, _) => 2 - (i as u8 & 1),
                };
                state[target] = old[source];
                state[target + CUBIES] = old[source + CUBIES] + delta;
                // Orientations are only reduced after the last quarter turn of the move
                if turn == turns {
                    state[target + CUBIES] %= if is_corner { 3 } else { 2 };
                }
            }
        }

        LinearCube(state)
    }

    /// Apply a sequence of moves.
    pub fn make_moves(self, mvs: impl IntoIterator<Item = LinearMove>) -> LinearCube {
        mvs.into_iter().fold(self, |c, m| c.make_move(m))
    }

    /// Whether the edge orientations sum to an odd number, which no sequence of moves can undo.
    pub fn edge_flip(&self) -> bool {
        self.edge_orientation().iter().map(|&o| o as u32).sum::<u32>() % 2 != 0
    }

    /// Whether the corner orientations do not sum to a multiple of 3.
    pub fn corner_twist(&self) -> bool {
        self.corner_orientation()
            .iter()
            .map(|&o| o as u32)
            .sum::<u32>()
            % 3
            != 0
    }

    /// Whether the edge and corner permutations have different parities.
    pub fn parity(&self) -> bool {
        permutation_parity(self.edges()) != permutation_parity(self.corners())
    }

    /// Check the three invariants every cube reachable by moves satisfies.
    pub fn check(&self) -> Result<(), Unsolvable> {
        if self.edge_flip() {
            Err(Unsolvable::EdgeFlip)
        } else if self.corner_twist() {
            Err(Unsolvable::CornerTwist)
        } else if self.parity() {
            Err(Unsolvable::Parity)
        } else {
            Ok(())
        }
    }
}

/// Parity of the number of inversions in a sequence.
pub(crate) fn permutation_parity(arr: &[u8]) -> bool {
    let mut parity = false;
    for i in 0..arr.len() {
        for j in i + 1..arr.len() {
            parity ^= arr[i] > arr[j];
        }
    }
    parity
}
