use crate::frontier::PriorityFrontier;
use crate::solver::{GridSolver, Relaxation};

/// Uniform-cost search. Cells are discovered lazily and ordered by path cost, ties broken by
/// discovery order. On a unit-cost grid it explores exactly like [DijkstraSolver](super::dijkstra::DijkstraSolver).
#[derive(Copy, Clone, Debug, Default)]
pub struct UniformCostSolver;

impl GridSolver for UniformCostSolver {
    type Frontier = PriorityFrontier<u32>;

    fn name(&self) -> &'static str {
        "UCS"
    }
    fn frontier(&self) -> Self::Frontier {
        PriorityFrontier::new()
    }
    fn relaxation(&self) -> Relaxation {
        Relaxation::Improve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::observer::NoopObserver;
    use crate::solver::dijkstra::DijkstraSolver;
    use grid_util::point::Point;

    #[test]
    fn matches_dijkstra() {
        let mut grid = Grid::new(5, 50).unwrap();
        grid.paint(Point::new(4, 0)).unwrap();
        grid.paint(Point::new(0, 4)).unwrap();
        for y in 0..4 {
            grid.paint(Point::new(2, y)).unwrap();
        }
        grid.refresh_neighbors();
        let mut dijkstra_grid = grid.clone();
        let ucs = UniformCostSolver
            .solve(&mut grid, Point::new(4, 0), Point::new(0, 4), &mut NoopObserver)
            .unwrap();
        let dijkstra = DijkstraSolver
            .solve(
                &mut dijkstra_grid,
                Point::new(4, 0),
                Point::new(0, 4),
                &mut NoopObserver,
            )
            .unwrap();
        assert_eq!(ucs, dijkstra);
        assert_eq!(grid.to_string(), dijkstra_grid.to_string());
    }
}
