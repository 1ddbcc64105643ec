use crate::frontier::LifoFrontier;
use crate::solver::{GridSolver, Relaxation};

/// Depth-first search. Finds some path when one exists, not necessarily a short one.
#[derive(Copy, Clone, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    type Frontier = LifoFrontier<u32>;

    fn name(&self) -> &'static str {
        "DFS"
    }
    fn frontier(&self) -> Self::Frontier {
        LifoFrontier::default()
    }
    fn relaxation(&self) -> Relaxation {
        Relaxation::FirstDiscovery
    }
}
