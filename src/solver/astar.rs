use crate::cell::Cell;
use crate::frontier::PriorityFrontier;
use crate::solver::{GridSolver, Relaxation};

/// A* guided by the Manhattan distance, which never overestimates on a 4-connected unit-cost
/// grid, so the first time the goal is popped its path is a shortest one.
#[derive(Copy, Clone, Debug, Default)]
pub struct AstarSolver;

impl GridSolver for AstarSolver {
    type Frontier = PriorityFrontier<u32>;

    fn name(&self) -> &'static str {
        "A*"
    }
    fn frontier(&self) -> Self::Frontier {
        PriorityFrontier::new()
    }
    fn relaxation(&self) -> Relaxation {
        Relaxation::Improve
    }
    fn heuristic(&self, cell: &Cell, goal: &Cell) -> u32 {
        cell.manhattan_distance(goal)
    }
}
