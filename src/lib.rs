//! # grid_search
//!
//! Step-by-step graph search on an editable square grid. The grid is treated as an implicit
//! 4-connected graph with unit edge costs, and five searches run over it:
//! [A*](solver::astar::AstarSolver) with the Manhattan heuristic,
//! [breadth-first](solver::bfs::BfsSolver) and [depth-first](solver::dfs::DfsSolver) search,
//! [Dijkstra](solver::dijkstra::DijkstraSolver) and
//! [uniform-cost search](solver::ucs::UniformCostSolver).
//!
//! Searches mark the cells they discover ([CellRole::Frontier]), expand
//! ([CellRole::Visited]) and finally walk back over ([CellRole::Path]), and hand the grid to a
//! [StepObserver] after every step so that a caller can draw the exploration as it happens or
//! stop it. Connected components are kept in a
//! [UnionFind](petgraph::unionfind::UnionFind) so reachability can also be asked directly.
//!
//! ```
//! use grid_search::{Algorithm, CellRole, Grid, NoopObserver};
//! use grid_util::point::Point;
//!
//! let mut grid = Grid::new(5, 500).unwrap();
//! grid.set_role(Point::new(0, 0), CellRole::Start).unwrap();
//! grid.set_role(Point::new(4, 4), CellRole::End).unwrap();
//! let outcome = grid.run(Algorithm::AStar, &mut NoopObserver).unwrap();
//! assert_eq!(outcome.path().unwrap().len(), 8);
//! ```
pub mod cell;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod observer;
pub mod search;
pub mod solver;

pub use cell::{Cell, CellId, CellRole};
pub use error::GridError;
pub use grid::Grid;
pub use observer::{NoopObserver, Signal, StepLimit, StepObserver};
pub use search::{reconstruct, CameFrom, Path, SearchOutcome};
pub use solver::{Algorithm, GridSolver};

/// Number of rows (and columns) of the interactive tool's grid.
pub const DEFAULT_ROWS: usize = 50;
/// Side length in pixels of the interactive tool's window.
pub const DEFAULT_WIDTH: u32 = 800;
