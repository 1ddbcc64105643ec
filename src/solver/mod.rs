use crate::cell::Cell;
use crate::error::GridError;
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::observer::StepObserver;
use crate::search::{search, SearchOutcome};
use core::fmt;
use grid_util::point::Point;
use std::str::FromStr;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod ucs;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;
use ucs::UniformCostSolver;

/// How a discovered cell may be updated when it is reached again.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relaxation {
    /// Keep the first predecessor found. Used with queue and stack frontiers.
    FirstDiscovery,
    /// Replace the predecessor whenever the new cost is strictly lower.
    Improve,
}

/// A search strategy over the 4-connected unit-cost grid. Solvers only pick the exploration
/// order and heuristic; the loop itself is shared.
pub trait GridSolver {
    type Frontier: Frontier<u32>;

    fn name(&self) -> &'static str;
    fn frontier(&self) -> Self::Frontier;
    fn relaxation(&self) -> Relaxation;

    /// Estimated remaining cost from `cell` to `goal`. Zero turns a best-first search into
    /// Dijkstra's algorithm.
    fn heuristic(&self, _cell: &Cell, _goal: &Cell) -> u32 {
        0
    }

    /// Searches from `start` to `end`, marking cells as it goes and calling `observer` after
    /// every expansion and every reconstructed path step.
    fn solve<O>(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        observer: &mut O,
    ) -> Result<SearchOutcome, GridError>
    where
        O: StepObserver + ?Sized,
    {
        search(self, grid, start, end, observer)
    }
}

/// The algorithms that can be requested by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    AStar,
    Bfs,
    Dfs,
    Dijkstra,
    Ucs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::AStar,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Ucs,
    ];

    /// Keyboard shortcuts of the interactive tool.
    pub fn from_key(key: char) -> Option<Algorithm> {
        match key.to_ascii_lowercase() {
            ' ' => Some(Algorithm::AStar),
            'b' => Some(Algorithm::Bfs),
            'd' => Some(Algorithm::Dfs),
            'h' => Some(Algorithm::Dijkstra),
            'u' => Some(Algorithm::Ucs),
            _ => None,
        }
    }

    /// Whether the first path found is guaranteed to be a shortest one.
    pub fn is_optimal(self) -> bool {
        self != Algorithm::Dfs
    }

    pub fn solve<O>(
        self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        observer: &mut O,
    ) -> Result<SearchOutcome, GridError>
    where
        O: StepObserver + ?Sized,
    {
        match self {
            Algorithm::AStar => AstarSolver.solve(grid, start, end, observer),
            Algorithm::Bfs => BfsSolver.solve(grid, start, end, observer),
            Algorithm::Dfs => DfsSolver.solve(grid, start, end, observer),
            Algorithm::Dijkstra => DijkstraSolver.solve(grid, start, end, observer),
            Algorithm::Ucs => UniformCostSolver.solve(grid, start, end, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::AStar => AstarSolver.name(),
            Algorithm::Bfs => BfsSolver.name(),
            Algorithm::Dfs => DfsSolver.name(),
            Algorithm::Dijkstra => DijkstraSolver.name(),
            Algorithm::Ucs => UniformCostSolver.name(),
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Algorithm, GridError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" => Ok(Algorithm::AStar),
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "ucs" => Ok(Algorithm::Ucs),
            _ => Err(GridError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_keys() {
        assert_eq!("A*".parse::<Algorithm>().unwrap(), Algorithm::AStar);
        assert_eq!(" Dijkstra ".parse::<Algorithm>().unwrap(), Algorithm::Dijkstra);
        assert_eq!(
            "greedy".parse::<Algorithm>().unwrap_err(),
            GridError::UnknownAlgorithm("greedy".to_owned())
        );
        assert_eq!(Algorithm::from_key(' '), Some(Algorithm::AStar));
        assert_eq!(Algorithm::from_key('U'), Some(Algorithm::Ucs));
        assert_eq!(Algorithm::from_key('c'), None);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for algorithm in Algorithm::ALL {
            let name = algorithm.to_string();
            assert_eq!(name.parse::<Algorithm>().unwrap(), algorithm);
        }
    }
}
