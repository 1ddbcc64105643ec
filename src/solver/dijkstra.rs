use crate::frontier::PriorityFrontier;
use crate::solver::{GridSolver, Relaxation};

/// Dijkstra's algorithm: A* without a heuristic. Cells leave the frontier in order of their
/// distance from the start.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Frontier = PriorityFrontier<u32>;

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
    fn frontier(&self) -> Self::Frontier {
        PriorityFrontier::new()
    }
    fn relaxation(&self) -> Relaxation {
        Relaxation::Improve
    }
}
