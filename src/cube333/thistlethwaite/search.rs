//! Bidirectional breadth first search over stage coordinates.
//!
//! One queue holds cubes reached from both ends. Each coordinate seen is tagged with the side that
//! reached it first, and the search stops as soon as a move joins a forward coordinate to a
//! backward one.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use tracing::trace;

use super::stage::Stage;
use crate::coord::Coordinate;
use crate::cube333::{LinearCube, LinearMove};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Direction {
    /// Reached from the cube being solved
    Forward,
    /// Reached from the goal
    Backward,
}

#[derive(Debug, Copy, Clone)]
struct Visit<K> {
    direction: Direction,
    /// The move that first reached this coordinate and the coordinate it was made from. `None`
    /// for the two seeds.
    parent: Option<(LinearMove, K)>,
}

/// Why a search ended without a path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum SearchError {
    /// Every coordinate reachable from both ends was visited and the two sides never met.
    Exhausted,
    /// More coordinates were recorded than the limit allows.
    NodeLimit,
}

/// The result of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Path {
    pub moves: Vec<LinearMove>,
    /// How many coordinates were recorded before the sides met.
    pub visited: usize,
}

/// Find moves allowed in stage `S` taking `start` to a cube with the same `S::Key` as `goal`.
///
/// The keys of `start` and `goal` must differ.
pub(crate) fn bidirectional<S: Stage>(
    start: LinearCube,
    goal: LinearCube,
    node_limit: Option<usize>,
) -> Result<Path, SearchError> {
    let start_key = S::Key::from_puzzle(&start);
    let goal_key = S::Key::from_puzzle(&goal);
    debug_assert!(start_key != goal_key);

    let moves: Vec<LinearMove> = LinearMove::all().filter(|&m| S::allows(m)).collect();

    let mut visited: HashMap<S::Key, Visit<S::Key>> = HashMap::new();
    visited.insert(
        start_key,
        Visit {
            direction: Direction::Forward,
            parent: None,
        },
    );
    visited.insert(
        goal_key,
        Visit {
            direction: Direction::Backward,
            parent: None,
        },
    );

    let mut queue = VecDeque::from([start, goal]);

    while let Some(cube) = queue.pop_front() {
        let key = S::Key::from_puzzle(&cube);
        let direction = visited[&key].direction;

        for &m in &moves {
            let next = cube.make_move(m);
            let next_key = S::Key::from_puzzle(&next);

            match visited.entry(next_key) {
                Entry::Occupied(e) => {
                    if e.get().direction != direction {
                        let moves = match direction {
                            Direction::Forward => join(&visited, key, next_key, m),
                            Direction::Backward => join(&visited, next_key, key, m.inverse()),
                        };
                        return Ok(Path {
                            moves,
                            visited: visited.len(),
                        });
                    }
                }
                Entry::Vacant(e) => {
                    e.insert(Visit {
                        direction,
                        parent: Some((m, key)),
                    });
                    if node_limit.is_some_and(|limit| visited.len() > limit) {
                        return Err(SearchError::NodeLimit);
                    }
                    queue.push_back(next);
                }
            }
        }
    }

    Err(SearchError::Exhausted)
}

/// Build the full path through the meeting point, where `mv` takes the forward coordinate
/// `forward` to the backward coordinate `backward`.
fn join<K: Coordinate<LinearCube>>(
    visited: &HashMap<K, Visit<K>>,
    mut forward: K,
    mut backward: K,
    mv: LinearMove,
) -> Vec<LinearMove> {
    let mut path = VecDeque::from([mv]);

    // Walk back to the start, prepending the moves that led here
    while let Some((m, prev)) = visited[&forward].parent {
        path.push_front(m);
        forward = prev;
    }
    let forward_len = path.len() - 1;

    // Walk back to the goal, undoing the moves made from it
    while let Some((m, prev)) = visited[&backward].parent {
        path.push_back(m.inverse());
        backward = prev;
    }

    trace!(
        forward = forward_len,
        backward = path.len() - forward_len - 1,
        "search sides met"
    );

    path.into()
}

#[cfg(test)]
mod tests {
    use super::super::stage::{Stage1, Stage2, Stage3, Stage4};
    use super::*;
    use crate::cube333::linear::CUBIES;
    use crate::cube333::Move333;
    use crate::moves::MoveSequence;

    fn cube(alg: &str) -> LinearCube {
        let mvs: MoveSequence<Move333> = alg.parse().unwrap();
        LinearCube::SOLVED.make_moves(mvs.0.into_iter().map(LinearMove::from))
    }

    fn check_path<S: Stage>(start: LinearCube) -> Path {
        let path = bidirectional::<S>(start, LinearCube::SOLVED, None).unwrap();
        assert!(path.moves.iter().all(|&m| S::allows(m)));
        let end = start.make_moves(path.moves.iter().copied());
        assert!(S::Key::matches(&end, &LinearCube::SOLVED));
        path
    }

    #[test]
    fn single_move_paths() {
        // F and F' flip the same edges, and F comes first in move order
        let path = check_path::<Stage1>(cube("F"));
        assert_eq!(path.moves, vec![LinearMove::from(crate::mv!(F, 1))]);

        let path = check_path::<Stage4>(cube("R2"));
        assert_eq!(path.moves, vec![LinearMove::from(crate::mv!(R, 2))]);
    }

    #[test]
    fn stage_paths() {
        check_path::<Stage1>(cube("F R B' U L2 D F'"));
        check_path::<Stage2>(cube("R U L' D2 B2 R2"));
        check_path::<Stage3>(cube("U R2 D' F2 L2 U2"));
        let path = check_path::<Stage4>(cube("U2 R2 F2 D2 L2 B2 R2"));
        assert!(path.moves.len() <= 7);
    }

    #[test]
    fn exhausted_on_flipped_edge() {
        let mut flipped = LinearCube::SOLVED;
        flipped.0[CUBIES] = 1;
        assert_eq!(
            bidirectional::<Stage1>(flipped, LinearCube::SOLVED, None),
            Err(SearchError::Exhausted)
        );
    }

    #[test]
    fn node_limit() {
        let start = cube("F R B' U L2 D F'");
        assert_eq!(
            bidirectional::<Stage1>(start, LinearCube::SOLVED, Some(50)),
            Err(SearchError::NodeLimit)
        );
        assert!(bidirectional::<Stage1>(start, LinearCube::SOLVED, Some(10_000)).is_ok());
    }
}
