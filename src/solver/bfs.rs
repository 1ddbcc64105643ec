use crate::frontier::FifoFrontier;
use crate::solver::{GridSolver, Relaxation};

/// Breadth-first search. Every cell keeps the predecessor it was first discovered from; on a
/// unit-cost grid that already is a shortest path.
#[derive(Copy, Clone, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Frontier = FifoFrontier<u32>;

    fn name(&self) -> &'static str {
        "BFS"
    }
    fn frontier(&self) -> Self::Frontier {
        FifoFrontier::default()
    }
    fn relaxation(&self) -> Relaxation {
        Relaxation::FirstDiscovery
    }
}
