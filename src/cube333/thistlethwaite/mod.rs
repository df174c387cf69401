//! A solver based on Thistlethwaite's algorithm.
//!
//! The cube is brought through the nested groups
//! `<U, D, F, B, L, R>`, `<U, D, F2, B2, L, R>`, `<U, D, F2, B2, L2, R2>`,
//! `<U2, D2, F2, B2, L2, R2>` and finally to the solved cube. Each step is a bidirectional breadth
//! first search between the current cube and the solved cube, looking only at the part of the cube
//! the step is responsible for.

mod search;
mod stage;

use search::SearchError;
use stage::{Stage, Stage1, Stage2, Stage3, Stage4};

use super::encode::linearize;
use super::{FaceletCube, LinearCube, Move333};
use crate::coord::Coordinate;
use crate::error::{SolveError, Unsolvable};
use crate::moves::MoveSequence;

use tracing::debug;

/// Settings for a [`Solver`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// The most coordinates a single stage search may record before giving up. `None` searches
    /// until the sides meet or every coordinate has been seen.
    pub node_limit: Option<usize>,
    /// Reject cubes with a flipped edge, a twisted corner or mismatched parities before searching.
    /// Without this such cubes are only found out once a stage search runs dry, which can take a
    /// long time.
    pub check_invariants: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            node_limit: None,
            check_invariants: true,
        }
    }
}

impl SolverConfig {
    /// Set the per stage node limit.
    pub fn node_limit(mut self, limit: Option<usize>) -> Self {
        self.node_limit = limit;
        self
    }

    /// Turn the invariant checks on or off.
    pub fn check_invariants(mut self, check: bool) -> Self {
        self.check_invariants = check;
        self
    }
}

/// The moves found by each stage. Applying all of them in order solves the cube.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    stages: [Vec<Move333>; 4],
}

impl Solution {
    /// The moves of each stage, stage 1 first. A stage that had nothing to do is empty.
    pub fn stages(&self) -> &[Vec<Move333>; 4] {
        &self.stages
    }

    /// Total number of moves.
    pub fn len(&self) -> usize {
        self.stages.iter().map(Vec::len).sum()
    }

    /// Whether the cube was already solved.
    pub fn is_empty(&self) -> bool {
        self.stages.iter().all(Vec::is_empty)
    }

    /// Every move in order.
    pub fn moves(&self) -> impl Iterator<Item = Move333> + '_ {
        self.stages.iter().flatten().copied()
    }

    /// Flatten the stages into one sequence.
    pub fn into_moves(self) -> MoveSequence<Move333> {
        MoveSequence(self.stages.into_iter().flatten().collect())
    }

    /// The full sequence with moves merged across stage boundaries, e.g. `U` ending one stage and
    /// `U2` starting the next become `U'`.
    pub fn simplified(&self) -> MoveSequence<Move333> {
        self.clone().into_moves().cancel()
    }
}

impl From<Solution> for MoveSequence<Move333> {
    fn from(solution: Solution) -> Self {
        solution.into_moves()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, m) in self.moves().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

/// A cube solver that uses Thistlethwaite's algorithm.
///
/// No tables are generated up front. Every search allocates its own state, so one solver can be
/// shared freely.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with the given settings.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The settings this solver uses.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Obtain a solving sequence for the cube (such that applying the sequence solves the cube).
    pub fn solve(&self, cube: &FaceletCube) -> Result<Solution, SolveError> {
        let linear = linearize(cube)?;
        self.solve_linear(linear)
    }

    /// Like [`Solver::solve`], but any failure gives an empty sequence, the same as for a cube
    /// that is already solved.
    pub fn solve_moves(&self, cube: &FaceletCube) -> MoveSequence<Move333> {
        match self.solve(cube) {
            Ok(solution) => solution.into_moves(),
            Err(e) => {
                debug!(error = %e, "no solution");
                MoveSequence(Vec::new())
            }
        }
    }

    /// Solve a cube that is already in cubie form.
    pub fn solve_linear(&self, mut cube: LinearCube) -> Result<Solution, SolveError> {
        if self.config.check_invariants {
            if let Err(reason) = cube.check() {
                debug!(%reason, "cube fails invariant check");
                return Err(SolveError::Unsolvable { reason });
            }
        }

        let stages = [
            self.solve_stage::<Stage1>(&mut cube)?,
            self.solve_stage::<Stage2>(&mut cube)?,
            self.solve_stage::<Stage3>(&mut cube)?,
            self.solve_stage::<Stage4>(&mut cube)?,
        ];
        debug_assert_eq!(cube, LinearCube::SOLVED);

        Ok(Solution { stages })
    }

    /// Run one stage, applying its moves to `cube`.
    fn solve_stage<S: Stage>(&self, cube: &mut LinearCube) -> Result<Vec<Move333>, SolveError> {
        if S::Key::matches(cube, &LinearCube::SOLVED) {
            debug!(stage = S::NUMBER, "stage already solved");
            return Ok(Vec::new());
        }

        let path = search::bidirectional::<S>(*cube, LinearCube::SOLVED, self.config.node_limit)
            .map_err(|e| {
                debug!(stage = S::NUMBER, error = ?e, "stage search failed");
                match e {
                    SearchError::Exhausted => SolveError::Unsolvable {
                        reason: Unsolvable::Unreachable { stage: S::NUMBER },
                    },
                    SearchError::NodeLimit => SolveError::NodeLimit { stage: S::NUMBER },
                }
            })?;

        *cube = cube.make_moves(path.moves.iter().copied());
        debug!(
            stage = S::NUMBER,
            moves = path.moves.len(),
            visited = path.visited,
            "stage solved"
        );

        Ok(path.moves.into_iter().map(Move333::from).collect())
    }
}
