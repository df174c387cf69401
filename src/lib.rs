//! A library which models a 3x3x3 twisty puzzle and solves it with Thistlethwaite's algorithm,
//! run as four bidirectional breadth first searches over a compact cubie representation.

#![deny(missing_docs)]

pub mod coord;
pub mod cube333;
pub mod error;
pub mod moves;
