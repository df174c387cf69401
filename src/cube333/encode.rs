//! Conversion from a facelet coloring to a `LinearCube`.
//!
//! The center facelets tell us which color belongs to which face, so the colors on each cubie
//! can be written as face letters (e.g. `UF` or `FU` for the up-front edge). A cubie whose letters
//! are a rotation of its solved name is that cubie, twisted by the number of rotations needed.
//! This means any color scheme works without the caller lining anything up.

use super::linear::{CUBIES, EDGES};
use super::{Color, Face, FaceletCube, LinearCube};
use crate::error::EncodeError;

use tracing::debug;

/// Names of the 20 cubies in solved order. The cubie at index `i` belongs at position `i`.
const CUBIE_NAMES: [&[Face]; CUBIES] = {
    use Face::*;
    [
        &[U, F],
        &[U, R],
        &[U, B],
        &[U, L],
        &[D, F],
        &[D, R],
        &[D, B],
        &[D, L],
        &[F, R],
        &[F, L],
        &[B, R],
        &[B, L],
        &[U, F, R],
        &[U, R, B],
        &[U, B, L],
        &[U, L, F],
        &[D, R, F],
        &[D, F, L],
        &[D, L, B],
        &[D, B, R],
    ]
};

/// The facelets of each cubie position, in the same face order as the position's name.
const POSITION_FACELETS: [&[(Face, usize, usize)]; CUBIES] = {
    use Face::*;
    [
        &[(U, 2, 1), (F, 0, 1)],
        &[(U, 1, 2), (R, 0, 1)],
        &[(U, 0, 1), (B, 0, 1)],
        &[(U, 1, 0), (L, 0, 1)],
        &[(D, 0, 1), (F, 2, 1)],
        &[(D, 1, 2), (R, 2, 1)],
        &[(D, 2, 1), (B, 2, 1)],
        &[(D, 1, 0), (L, 2, 1)],
        &[(F, 1, 2), (R, 1, 0)],
        &[(F, 1, 0), (L, 1, 2)],
        &[(B, 1, 0), (R, 1, 2)],
        &[(B, 1, 2), (L, 1, 0)],
        &[(U, 2, 2), (F, 0, 2), (R, 0, 0)],
        &[(U, 0, 2), (R, 0, 2), (B, 0, 0)],
        &[(U, 0, 0), (B, 0, 2), (L, 0, 0)],
        &[(U, 2, 0), (L, 0, 2), (F, 0, 0)],
        &[(D, 0, 2), (R, 2, 0), (F, 2, 2)],
        &[(D, 0, 0), (F, 2, 0), (L, 2, 2)],
        &[(D, 2, 0), (L, 2, 0), (B, 2, 2)],
        &[(D, 2, 2), (B, 2, 0), (R, 2, 2)],
    ]
};

/// The colors found at one cubie position, translated into face letters.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct CubieCode {
    faces: [Face; 3],
    len: usize,
}

impl CubieCode {
    /// The face letters, 2 for an edge and 3 for a corner.
    pub fn faces(&self) -> &[Face] {
        &self.faces[..self.len]
    }

    /// Move the first letter to the end.
    fn rotate(&mut self) {
        self.faces[..self.len].rotate_left(1);
    }

    /// The cubie and orientation this code describes, if it describes one.
    pub fn identify(mut self) -> Option<(u8, u8)> {
        for twist in 0..self.len {
            if let Some(i) = CUBIE_NAMES.iter().position(|name| *name == self.faces()) {
                return Some((i as u8, twist as u8));
            }
            self.rotate();
        }
        None
    }
}

impl std::fmt::Display for CubieCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for face in self.faces() {
            write!(f, "{}", face.letter())?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for CubieCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

/// Which face each color is the center of.
fn center_faces(cube: &FaceletCube) -> Result<[Face; 6], EncodeError> {
    let mut faces = [None; 6];
    for face in Face::ARRAY {
        let slot = &mut faces[cube.center(face) as usize];
        if slot.is_some() {
            return Err(EncodeError::Centers);
        }
        *slot = Some(face);
    }
    // Six faces with pairwise distinct centers cover all six colors
    let mut out = [Face::U; 6];
    for (o, f) in out.iter_mut().zip(faces) {
        *o = f.ok_or(EncodeError::Centers)?;
    }
    Ok(out)
}

/// Read the code at every cubie position, edges first.
pub fn cubie_codes(cube: &FaceletCube) -> Result<[CubieCode; CUBIES], EncodeError> {
    let faces = center_faces(cube)?;
    let face_of = |c: Color| faces[c as usize];

    Ok(std::array::from_fn(|i| {
        let facelets = POSITION_FACELETS[i];
        let mut code = CubieCode {
            faces: [Face::U; 3],
            len: facelets.len(),
        };
        for (slot, &(face, row, col)) in code.faces.iter_mut().zip(facelets) {
            *slot = face_of(cube.get(face, row, col));
        }
        code
    }))
}

/// Convert a coloring to a `LinearCube`.
///
/// Fails if some position holds colors that no cubie has, or if a cubie turns up twice. Colorings
/// that pass may still be impossible to reach by turning, see [`LinearCube::check`].
pub fn linearize(cube: &FaceletCube) -> Result<LinearCube, EncodeError> {
    let codes = cubie_codes(cube)?;

    let mut slots = [0; 40];
    let mut seen = [false; CUBIES];
    for (position, code) in codes.into_iter().enumerate() {
        let Some((cubie, twist)) = code.identify() else {
            debug!(position, %code, "no cubie matches position");
            return Err(EncodeError::InvalidCubie {
                position,
                code: code.to_string(),
            });
        };
        // Edges only ever match edge names and corners corner names, since lengths differ
        debug_assert_eq!((cubie as usize) < EDGES, position < EDGES);
        if std::mem::replace(&mut seen[cubie as usize], true) {
            let code = CUBIE_NAMES[cubie as usize]
                .iter()
                .map(|f| f.letter())
                .collect();
            debug!(position, %code, "cubie appears twice");
            return Err(EncodeError::DuplicateCubie { code });
        }
        slots[position] = cubie;
        slots[position + CUBIES] = twist;
    }

    Ok(LinearCube(slots))
}

impl TryFrom<&FaceletCube> for LinearCube {
    type Error = EncodeError;

    fn try_from(cube: &FaceletCube) -> Result<Self, Self::Error> {
        linearize(cube)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube333::moves::Move333;
    use crate::cube333::LinearMove;
    use crate::moves::MoveSequence;

    use proptest::collection::vec;
    use proptest::prelude::*;

    /// Repaint every facelet through a color permutation.
    fn recolor(cube: &FaceletCube, perm: [Color; 6]) -> FaceletCube {
        let mut out = cube.clone();
        for face in Face::ARRAY {
            for row in 0..3 {
                for col in 0..3 {
                    out.set(face, row, col, perm[cube.get(face, row, col) as usize]);
                }
            }
        }
        out
    }

    #[test]
    fn solved_codes() {
        let codes = cubie_codes(&FaceletCube::SOLVED).unwrap();
        let names: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            [
                "UF", "UR", "UB", "UL", "DF", "DR", "DB", "DL", "FR", "FL", "BR", "BL", "UFR",
                "URB", "UBL", "ULF", "DRF", "DFL", "DLB", "DBR"
            ]
        );
        assert_eq!(linearize(&FaceletCube::SOLVED), Ok(LinearCube::SOLVED));
    }

    #[test]
    fn recolored_solved_cube() {
        use Color::*;
        let perm = [Orange, Red, Yellow, White, Green, Blue];
        let cube = recolor(&FaceletCube::SOLVED, perm);
        assert!(cube.is_solved());
        assert_eq!(LinearCube::try_from(&cube), Ok(LinearCube::SOLVED));
    }

    #[test]
    fn flipped_edge() {
        let mut cube = FaceletCube::SOLVED;
        let u = cube.get(Face::U, 2, 1);
        let f = cube.get(Face::F, 0, 1);
        cube.set(Face::U, 2, 1, f);
        cube.set(Face::F, 0, 1, u);

        let lin = linearize(&cube).unwrap();
        assert_eq!(lin.edges()[0], 0);
        assert_eq!(lin.edge_orientation()[0], 1);
        assert!(lin.edge_flip());
    }

    #[test]
    fn mirrored_corner() {
        // Swapping two stickers of a corner gives a mirror image, which is no cubie at all
        let mut cube = FaceletCube::SOLVED;
        let f = cube.get(Face::F, 0, 2);
        let r = cube.get(Face::R, 0, 0);
        cube.set(Face::F, 0, 2, r);
        cube.set(Face::R, 0, 0, f);

        assert_eq!(
            linearize(&cube),
            Err(EncodeError::InvalidCubie {
                position: 12,
                code: "URF".to_string()
            })
        );
    }

    #[test]
    fn impossible_edge_colors() {
        // An edge showing two opposite faces does not exist
        let mut cube = FaceletCube::SOLVED;
        cube.set(Face::F, 0, 1, Color::of_face(Face::D));
        cube.set(Face::D, 0, 1, Color::of_face(Face::F));
        assert!(matches!(
            linearize(&cube),
            Err(EncodeError::InvalidCubie { position: 0, .. })
        ));
    }

    #[test]
    fn duplicate_cubie() {
        // Paint the UR edge to look like UF
        let mut cube = FaceletCube::SOLVED;
        cube.set(Face::R, 0, 1, Color::of_face(Face::F));
        assert_eq!(
            linearize(&cube),
            Err(EncodeError::DuplicateCubie {
                code: "UF".to_string()
            })
        );
    }

    #[test]
    fn shared_center() {
        let mut cube = FaceletCube::SOLVED;
        cube.set(Face::D, 1, 1, Color::of_face(Face::U));
        assert_eq!(linearize(&cube), Err(EncodeError::Centers));
    }

    proptest! {
        #[test]
        fn moves_commute_with_encoding(
            mvs in vec(any::<Move333>(), 0..30).prop_map(MoveSequence),
            m in any::<Move333>(),
        ) {
            let mut cube = FaceletCube::SOLVED;
            cube.make_moves(&mvs);
            let before = linearize(&cube).unwrap();
            cube.make_move(m);
            assert_eq!(linearize(&cube).unwrap(), before.make_move(LinearMove::from(m)));
        }

        #[test]
        fn encoding_ignores_color_scheme(
            mvs in vec(any::<Move333>(), 0..30).prop_map(MoveSequence),
            perm in Just(Color::ARRAY.to_vec()).prop_shuffle(),
        ) {
            let mut cube = FaceletCube::SOLVED;
            cube.make_moves(&mvs);
            let perm: [Color; 6] = perm.try_into().unwrap();
            assert_eq!(linearize(&recolor(&cube, perm)), linearize(&cube));
        }
    }
}
