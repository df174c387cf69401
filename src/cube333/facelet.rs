//! The facelet (sticker) view of the cube.
//!
//! Faces are laid out like an unfolded net: U sits above F, with L, F, R, B in a row and D below
//! F. Every face is stored row-major as seen when looking straight at it, with U viewed with B at
//! the top and D viewed with F at the top.

use super::{Color, Face};
use crate::error::FaceletError;

/// A cube described by the color of each of its 54 facelets, indexed by (face, row, column).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FaceletCube {
    facelets: [[[Color; 3]; 3]; 6],
}

impl Default for FaceletCube {
    fn default() -> Self {
        Self::SOLVED
    }
}

impl FaceletCube {
    /// The solved cube in the default color scheme.
    pub const SOLVED: FaceletCube = FaceletCube {
        facelets: [
            [[Color::of_face(Face::U); 3]; 3],
            [[Color::of_face(Face::D); 3]; 3],
            [[Color::of_face(Face::B); 3]; 3],
            [[Color::of_face(Face::F); 3]; 3],
            [[Color::of_face(Face::R); 3]; 3],
            [[Color::of_face(Face::L); 3]; 3],
        ],
    };

    /// Build a cube from a full coloring, where `None` marks a facelet that was never colored.
    ///
    /// The coloring must have 9 facelets of every color and a different center color on each
    /// face. This does not check that the coloring can be reached by turning a cube.
    pub fn from_facelets(facelets: [[[Option<Color>; 3]; 3]; 6]) -> Result<Self, FaceletError> {
        let mut cube = FaceletCube::SOLVED;
        for face in Face::ARRAY {
            for row in 0..3 {
                for col in 0..3 {
                    let color = facelets[face as usize][row][col]
                        .ok_or(FaceletError::Unassigned { face, row, col })?;
                    cube.set(face, row, col, color);
                }
            }
        }
        cube.validate()?;
        Ok(cube)
    }

    /// Check the color count and center invariants.
    pub fn validate(&self) -> Result<(), FaceletError> {
        let mut counts = [0; 6];
        for color in self.facelets.iter().flatten().flatten() {
            counts[*color as usize] += 1;
        }
        if let Some((i, &count)) = counts.iter().enumerate().find(|(_, n)| **n != 9) {
            return Err(FaceletError::ColorCount {
                color: Color::ARRAY[i],
                count,
            });
        }

        let mut seen = [false; 6];
        for face in Face::ARRAY {
            let color = self.center(face);
            if seen[color as usize] {
                return Err(FaceletError::DuplicateCenter { color });
            }
            seen[color as usize] = true;
        }

        Ok(())
    }

    /// The color of one facelet.
    pub fn get(&self, face: Face, row: usize, col: usize) -> Color {
        self.facelets[face as usize][row][col]
    }

    /// Recolor one facelet. No invariants are checked.
    pub fn set(&mut self, face: Face, row: usize, col: usize, color: Color) {
        self.facelets[face as usize][row][col] = color;
    }

    /// The colors of a whole face.
    pub fn face(&self, face: Face) -> &[[Color; 3]; 3] {
        &self.facelets[face as usize]
    }

    /// The center color of a face, which never moves.
    pub fn center(&self, face: Face) -> Color {
        self.get(face, 1, 1)
    }

    /// Whether every face is a single color.
    pub fn is_solved(&self) -> bool {
        Face::ARRAY.into_iter().all(|face| {
            let center = self.center(face);
            self.face(face).iter().flatten().all(|&c| c == center)
        })
    }
}

impl std::str::FromStr for FaceletCube {
    type Err = FaceletError;

    /// Parse 54 color letters (`R G B Y W O`, or `-` for unassigned), face by face in the order
    /// U, D, B, F, R, L and row-major within a face. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if letters.len() != 54 {
            return Err(FaceletError::Length { len: letters.len() });
        }

        let mut facelets = [[[None; 3]; 3]; 6];
        for (index, &letter) in letters.iter().enumerate() {
            let color = match letter {
                '-' => None,
                _ => Some(Color::from_letter(letter).ok_or(FaceletError::Parse { letter, index })?),
            };
            facelets[index / 9][(index % 9) / 3][index % 3] = color;
        }

        FaceletCube::from_facelets(facelets)
    }
}

impl std::fmt::Display for FaceletCube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = |face: Face, r: usize| -> String {
            self.face(face)[r].iter().map(|c| c.letter()).collect()
        };

        for r in 0..3 {
            writeln!(f, "    {}", row(Face::U, r))?;
        }
        for r in 0..3 {
            writeln!(
                f,
                "{} {} {} {}",
                row(Face::L, r),
                row(Face::F, r),
                row(Face::R, r),
                row(Face::B, r)
            )?;
        }
        for r in 0..3 {
            writeln!(f, "    {}", row(Face::D, r))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for FaceletCube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        std::fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED_STR: &str = "RRRRRRRRR WWWWWWWWW OOOOOOOOO GGGGGGGGG YYYYYYYYY BBBBBBBBB";

    #[test]
    fn parse_solved() {
        let cube: FaceletCube = SOLVED_STR.parse().unwrap();
        assert_eq!(cube, FaceletCube::SOLVED);
        assert!(cube.is_solved());
        assert_eq!(cube.validate(), Ok(()));
    }

    #[test]
    fn display_net() {
        let s = FaceletCube::SOLVED.to_string();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    RRR");
        assert_eq!(lines[4], "BBB GGG YYY OOO");
        assert_eq!(lines[8], "    WWW");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "RRR".parse::<FaceletCube>(),
            Err(FaceletError::Length { len: 3 })
        );

        let bad_letter = SOLVED_STR.replacen('W', "x", 1);
        assert_eq!(
            bad_letter.parse::<FaceletCube>(),
            Err(FaceletError::Parse {
                letter: 'x',
                index: 9
            })
        );

        let unassigned = SOLVED_STR.replacen('O', "-", 1);
        assert_eq!(
            unassigned.parse::<FaceletCube>(),
            Err(FaceletError::Unassigned {
                face: Face::B,
                row: 0,
                col: 0
            })
        );

        let too_many_red = SOLVED_STR.replacen('W', "R", 1);
        assert_eq!(
            too_many_red.parse::<FaceletCube>(),
            Err(FaceletError::ColorCount {
                color: Color::Red,
                count: 10
            })
        );
    }

    #[test]
    fn duplicate_center() {
        // Red center on D as well as U, with the color counts still balanced.
        let mut cube = FaceletCube::SOLVED;
        cube.set(Face::D, 1, 1, Color::Red);
        cube.set(Face::U, 0, 0, Color::White);
        assert_eq!(
            cube.validate(),
            Err(FaceletError::DuplicateCenter { color: Color::Red })
        );
        assert!(!cube.is_solved());
    }

    #[test]
    fn get_set() {
        let mut cube = FaceletCube::SOLVED;
        assert_eq!(cube.get(Face::F, 2, 0), Color::Green);
        cube.set(Face::F, 2, 0, Color::Blue);
        assert_eq!(cube.get(Face::F, 2, 0), Color::Blue);
        assert_eq!(cube.center(Face::F), Color::Green);
        assert!(!cube.is_solved());
    }
}
