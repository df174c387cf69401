//! Moves of the 3x3x3 and the facelet move engine.

use super::{Face, FaceletCube};
use crate::error::ParseMoveError;
use crate::moves::{Cancellation, MoveSequence};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// Stores the turned face and a counter. A clockwise quarter turn has a count of 1, a half turn a
/// count of 2 and an anti-clockwise quarter turn a count of 3.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct Move333 {
    pub ty: Face,
    #[cfg_attr(test, proptest(strategy = "1..=3u8"))]
    pub count: u8,
}

impl crate::moves::Move for Move333 {
    fn inverse(self) -> Self {
        Self {
            ty: self.ty,
            count: 4u8.wrapping_sub(self.count).rem_euclid(4),
        }
    }

    fn commutes_with(&self, b: &Self) -> bool {
        self.ty == b.ty || self.ty.opposite() == b.ty
    }

    fn cancel(self, b: Self) -> Cancellation<Self> {
        if self.ty == b.ty {
            let count = (self.count + b.count) % 4;
            if count == 0 {
                Cancellation::NoMove
            } else {
                Cancellation::OneMove(Move333 { ty: self.ty, count })
            }
        } else {
            Cancellation::TwoMove(self, b)
        }
    }
}

// I don't want to have the default derive debug for this!
impl std::fmt::Debug for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl std::fmt::Display for Move333 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.count {
            1 => write!(f, "{}", self.ty.letter()),
            3 => write!(f, "{}'", self.ty.letter()),
            _ => write!(f, "{}{}", self.ty.letter(), self.count),
        }
    }
}

impl std::str::FromStr for Move333 {
    type Err = ParseMoveError;

    /// Parses `U`, `U2` and `U'` style notation. `U+` and `U-` are also accepted for quarter turns.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let ty = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(|| ParseMoveError::Face(s.to_string()))?;
        let count = match chars.as_str() {
            "" | "+" => 1,
            "2" => 2,
            "'" | "-" => 3,
            _ => return Err(ParseMoveError::Count(s.to_string())),
        };
        Ok(Move333 { ty, count })
    }
}

/// A trait to classify a type as a move generator. A move generator is a set which can be used to
/// generate a set, i.e. find every combination of moves using moves in the move generator to find
/// unique states.
pub trait MoveGenerator {
    /// A list of all valid moves.
    const MOVE_LIST: &'static [Move333];
}

/// Create a move by specifying a face and move count. Note that you do not need to specify for
/// example Face::R, you only need to specify R.
#[macro_export]
macro_rules! mv {
    ($ty:ident, $count: expr) => {
        $crate::cube333::Move333 {
            ty: $crate::cube333::Face::$ty,
            count: $count,
        }
    };
}

/// Type for Half Turn Metric
pub struct Htm;

impl MoveGenerator for Htm {
    const MOVE_LIST: &'static [Move333] = &[
        mv!(U, 1),
        mv!(D, 1),
        mv!(B, 1),
        mv!(F, 1),
        mv!(R, 1),
        mv!(L, 1),
        mv!(U, 2),
        mv!(D, 2),
        mv!(B, 2),
        mv!(F, 2),
        mv!(R, 2),
        mv!(L, 2),
        mv!(U, 3),
        mv!(D, 3),
        mv!(B, 3),
        mv!(F, 3),
        mv!(R, 3),
        mv!(L, 3),
    ];
}

/// A facelet position as (face, row, column).
type Facelet = (Face, usize, usize);

/// For each face, the three facelet strips on the neighbouring faces that travel with it, listed
/// in the order a clockwise turn carries them. Facelet `j` of one strip lands on facelet `j` of
/// the next.
const STRIPS: [[[Facelet; 3]; 4]; 6] = {
    use Face::*;
    [
        // U
        [
            [(F, 0, 0), (F, 0, 1), (F, 0, 2)],
            [(L, 0, 0), (L, 0, 1), (L, 0, 2)],
            [(B, 0, 0), (B, 0, 1), (B, 0, 2)],
            [(R, 0, 0), (R, 0, 1), (R, 0, 2)],
        ],
        // D
        [
            [(F, 2, 0), (F, 2, 1), (F, 2, 2)],
            [(R, 2, 0), (R, 2, 1), (R, 2, 2)],
            [(B, 2, 0), (B, 2, 1), (B, 2, 2)],
            [(L, 2, 0), (L, 2, 1), (L, 2, 2)],
        ],
        // B
        [
            [(U, 0, 2), (U, 0, 1), (U, 0, 0)],
            [(L, 0, 0), (L, 1, 0), (L, 2, 0)],
            [(D, 2, 0), (D, 2, 1), (D, 2, 2)],
            [(R, 2, 2), (R, 1, 2), (R, 0, 2)],
        ],
        // F
        [
            [(U, 2, 0), (U, 2, 1), (U, 2, 2)],
            [(R, 0, 0), (R, 1, 0), (R, 2, 0)],
            [(D, 0, 2), (D, 0, 1), (D, 0, 0)],
            [(L, 2, 2), (L, 1, 2), (L, 0, 2)],
        ],
        // R
        [
            [(F, 0, 2), (F, 1, 2), (F, 2, 2)],
            [(U, 0, 2), (U, 1, 2), (U, 2, 2)],
            [(B, 2, 0), (B, 1, 0), (B, 0, 0)],
            [(D, 0, 2), (D, 1, 2), (D, 2, 2)],
        ],
        // L
        [
            [(U, 0, 0), (U, 1, 0), (U, 2, 0)],
            [(F, 0, 0), (F, 1, 0), (F, 2, 0)],
            [(D, 0, 0), (D, 1, 0), (D, 2, 0)],
            [(B, 2, 2), (B, 1, 2), (B, 0, 2)],
        ],
    ]
};

impl FaceletCube {
    /// Apply an algorithm to a cube
    pub fn make_moves(&mut self, mvs: &MoveSequence<Move333>) {
        for &m in &mvs.0 {
            self.make_move(m);
        }
    }

    /// Apply a move to a cube. A half turn is two clockwise quarter turns.
    pub fn make_move(&mut self, mv: Move333) {
        match mv.count {
            3 => self.make_move_type(mv.ty, true),
            n => {
                for _ in 0..n {
                    self.make_move_type(mv.ty, false);
                }
            }
        }
    }

    /// Make a single quarter turn of a face, clockwise unless `reverse` is set.
    pub fn make_move_type(&mut self, face: Face, reverse: bool) {
        let f = face;
        self.cycle([(f, 0, 0), (f, 0, 2), (f, 2, 2), (f, 2, 0)], reverse);
        self.cycle([(f, 0, 1), (f, 1, 2), (f, 2, 1), (f, 1, 0)], reverse);

        let strips = &STRIPS[face as usize];
        for j in 0..3 {
            self.cycle(
                [strips[0][j], strips[1][j], strips[2][j], strips[3][j]],
                reverse,
            );
        }
    }

    /// Rotate the colors of four facelets. Forwards, `a` takes the color of `d`, `b` of `a`, `c`
    /// of `b` and `d` of `c`; reversed the colors travel the other way round.
    fn cycle(&mut self, [a, b, c, d]: [Facelet; 4], reverse: bool) {
        let [ca, cb, cc, cd] = [a, b, c, d].map(|(face, row, col)| self.get(face, row, col));
        let new = if reverse {
            [cb, cc, cd, ca]
        } else {
            [cd, ca, cb, cc]
        };
        for ((face, row, col), color) in [a, b, c, d].into_iter().zip(new) {
            self.set(face, row, col, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::Color;
    use crate::moves::Move;

    #[test]
    fn quarter_turn_loops() {
        let mut scrambled = FaceletCube::SOLVED;
        scrambled.make_moves(&"R U2 F' L D B2 R' U".parse().unwrap());

        for face in Face::ARRAY {
            let mut cube = scrambled.clone();
            for _ in 0..4 {
                cube.make_move(Move333 { ty: face, count: 1 });
            }
            assert_eq!(cube, scrambled);
            for _ in 0..4 {
                cube.make_move_type(face, true);
            }
            assert_eq!(cube, scrambled);
        }
    }

    #[test]
    fn u_turn_direction() {
        // A clockwise U takes the front stickers of the top layer to the left face.
        let mut cube = FaceletCube::SOLVED;
        cube.make_move(mv!(U, 1));
        assert_eq!(cube.face(Face::L)[0], [Color::of_face(Face::F); 3]);
        assert_eq!(cube.face(Face::F)[0], [Color::of_face(Face::R); 3]);
        assert_eq!(cube.face(Face::F)[1], [Color::of_face(Face::F); 3]);
        assert!(cube.validate().is_ok());
    }

    #[test]
    fn r_turn_direction() {
        // A clockwise R lifts the right column of the front face onto the top face.
        let mut cube = FaceletCube::SOLVED;
        cube.make_move(mv!(R, 1));
        for row in 0..3 {
            assert_eq!(cube.get(Face::U, row, 2), Color::of_face(Face::F));
            assert_eq!(cube.get(Face::B, row, 0), Color::of_face(Face::U));
            assert_eq!(cube.get(Face::D, row, 2), Color::of_face(Face::B));
            assert_eq!(cube.get(Face::F, row, 2), Color::of_face(Face::D));
        }
    }

    #[test]
    fn move_notation() {
        let mvs: MoveSequence<Move333> = "U D2 B' F+ R- L".parse().unwrap();
        assert_eq!(
            mvs.0,
            vec![mv!(U, 1), mv!(D, 2), mv!(B, 3), mv!(F, 1), mv!(R, 3), mv!(L, 1)]
        );
        assert_eq!(mvs.to_string(), "U D2 B' F R' L");
        assert_eq!(
            "X2".parse::<Move333>(),
            Err(ParseMoveError::Face("X2".to_string()))
        );
        assert_eq!(
            "R3".parse::<Move333>(),
            Err(ParseMoveError::Count("R3".to_string()))
        );
    }

    #[test]
    fn htm_moves() {
        assert_eq!(Htm::MOVE_LIST.len(), 18);
        for face in Face::ARRAY {
            for count in 1..=3 {
                assert!(Htm::MOVE_LIST.contains(&Move333 { ty: face, count }));
            }
        }
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    fn apply(mvs: &MoveSequence<Move333>) -> FaceletCube {
        let mut cube = FaceletCube::SOLVED;
        cube.make_moves(mvs);
        cube
    }

    proptest! {
        #[test]
        fn cancel_same_moves(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            assert!(cancelled.len() <= mvs.len());
            assert_eq!(apply(&mvs), apply(&cancelled));
        }

        #[test]
        fn invert_identity(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            let mut cube = apply(&mvs);
            cube.make_moves(&mvs.inverse());
            assert_eq!(cube, FaceletCube::SOLVED);
            assert!(cancelled.clone().append(cancelled.inverse()).cancel().is_empty());
        }

        #[test]
        fn cancel_idempotent(mvs in vec(any::<Move333>(), 0..20).prop_map(MoveSequence)) {
            let cancelled = mvs.clone().cancel();
            assert_eq!(cancelled.clone().cancel(), cancelled);
        }

        #[test]
        fn moves_keep_coloring_valid(mvs in vec(any::<Move333>(), 0..30).prop_map(MoveSequence)) {
            let cube = apply(&mvs);
            assert!(cube.validate().is_ok());
            for face in Face::ARRAY {
                assert_eq!(cube.center(face), Color::of_face(face));
            }
        }

        #[test]
        fn inverse_move(m in any::<Move333>()) {
            let mut cube = FaceletCube::SOLVED;
            cube.make_move(m);
            assert!(!cube.is_solved());
            cube.make_move(m.inverse());
            assert!(cube.is_solved());
        }
    }
}
