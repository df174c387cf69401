//! The 3x3x3 cube: its facelet coloring, moves, the compact cubie representation used for search,
//! and the Thistlethwaite solver.

pub mod encode;
pub mod facelet;
pub mod linear;
pub mod moves;
pub mod scramble;
pub mod thistlethwaite;

pub use facelet::FaceletCube;
pub use linear::{LinearCube, LinearMove};
pub use moves::{Htm, Move333, MoveGenerator};

use crate::error::TryFromIntToEnumError;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A face of the cube. The order of the variants is the order faces are stored in a
/// `FaceletCube`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Up
    U,
    /// Down
    D,
    /// Back
    B,
    /// Front
    F,
    /// Right
    R,
    /// Left
    L,
}

impl Face {
    /// Every face in storage order.
    pub const ARRAY: [Face; 6] = [Face::U, Face::D, Face::B, Face::F, Face::R, Face::L];

    /// The face opposite to the given one.
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::B => Face::F,
            Face::F => Face::B,
            Face::R => Face::L,
            Face::L => Face::R,
        }
    }

    /// The letter used for this face in move notation and cubie names.
    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::B => 'B',
            Face::F => 'F',
            Face::R => 'R',
            Face::L => 'L',
        }
    }

    /// Inverse of [`letter`](Face::letter).
    pub fn from_letter(c: char) -> Option<Face> {
        Face::ARRAY.into_iter().find(|f| f.letter() == c)
    }
}

impl TryFrom<u8> for Face {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Face::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// A sticker color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Orange,
}

impl Color {
    /// Every color, in the order of their numeric representation.
    pub const ARRAY: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
        Color::Orange,
    ];

    /// The color a face has on a freshly built cube.
    pub const fn of_face(face: Face) -> Color {
        match face {
            Face::U => Color::Red,
            Face::D => Color::White,
            Face::B => Color::Orange,
            Face::F => Color::Green,
            Face::R => Color::Yellow,
            Face::L => Color::Blue,
        }
    }

    /// Single letter code used when printing or parsing a coloring.
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Orange => 'O',
        }
    }

    /// Inverse of [`letter`](Color::letter).
    pub fn from_letter(c: char) -> Option<Color> {
        Color::ARRAY.into_iter().find(|col| col.letter() == c)
    }
}

impl TryFrom<u8> for Color {
    type Error = TryFromIntToEnumError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Color::ARRAY
            .get(n as usize)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_conversions() {
        for (i, f) in Face::ARRAY.into_iter().enumerate() {
            assert_eq!(Face::try_from(i as u8), Ok(f));
            assert_eq!(Face::from_letter(f.letter()), Some(f));
            assert_eq!(f.opposite().opposite(), f);
            assert_ne!(f.opposite(), f);
        }
        assert_eq!(Face::try_from(6), Err(TryFromIntToEnumError::OutOfBounds));

        for (i, c) in Color::ARRAY.into_iter().enumerate() {
            assert_eq!(Color::try_from(i as u8), Ok(c));
            assert_eq!(Color::from_letter(c.letter()), Some(c));
        }
        assert_eq!(Color::from_letter('-'), None);
        assert_eq!(Color::try_from(6), Err(TryFromIntToEnumError::OutOfBounds));
    }
}
