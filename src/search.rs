//! The loop shared by every solver: pop the frontier, test the goal, relax the neighbours,
//! report the step, close the cell. Predecessors live in an index-linked [IndexMap] in the
//! manner of [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html):
//! every entry stores the map index of its parent, so walking back from the goal never hashes.
use crate::cell::{CellId, CellRole};
use crate::error::GridError;
use crate::frontier::{Entry, Frontier};
use crate::grid::Grid;
use crate::observer::{Signal, StepObserver};
use crate::solver::{GridSolver, Relaxation};
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{info, warn};
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Predecessor map of one search together with the best known cost of every discovered cell.
/// The root (the start) sits at index 0 and has no predecessor.
#[derive(Clone, Debug)]
pub struct CameFrom<C = u32> {
    parents: FxIndexMap<CellId, (usize, C)>,
}

impl<C: Zero + Ord + Copy> CameFrom<C> {
    pub fn new(start: CellId) -> CameFrom<C> {
        let mut parents = FxIndexMap::default();
        parents.insert(start, (usize::MAX, Zero::zero()));
        CameFrom { parents }
    }
    pub fn len(&self) -> usize {
        self.parents.len()
    }
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
    pub fn cost(&self, cell: CellId) -> Option<C> {
        self.parents.get(&cell).map(|&(_, c)| c)
    }
    pub fn predecessor(&self, cell: CellId) -> Option<CellId> {
        let &(parent_index, _) = self.parents.get(&cell)?;
        self.parents.get_index(parent_index).map(|(node, _)| *node)
    }
    /// Records that `cell` can be reached through `parent` at `cost`, if that is an improvement.
    /// Returns false when `parent` is unknown or the cell already has a cost at least as good.
    pub fn insert(&mut self, cell: CellId, parent: CellId, cost: C) -> bool {
        match self.parents.get_index_of(&parent) {
            Some(parent_index) => self
                .relax(cell, parent_index, cost, Relaxation::Improve)
                .is_some(),
            None => false,
        }
    }
    fn get_index(&self, index: usize) -> Option<(CellId, C)> {
        self.parents.get_index(index).map(|(node, &(_, c))| (*node, c))
    }
    /// Returns the map index of `cell` if it has to be (re)inserted into the frontier.
    fn relax(
        &mut self,
        cell: CellId,
        parent_index: usize,
        cost: C,
        relaxation: Relaxation,
    ) -> Option<usize> {
        match self.parents.entry(cell) {
            Vacant(e) => {
                let n = e.index();
                e.insert((parent_index, cost));
                Some(n)
            }
            Occupied(mut e) => {
                if relaxation == Relaxation::Improve && e.get().1 > cost {
                    e.insert((parent_index, cost));
                    Some(e.index())
                } else {
                    None
                }
            }
        }
    }
}

/// A found path, stored the way it is reconstructed: starting at the goal's predecessor and
/// ending at the start. Its length is the number of moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    trail: Vec<Point>,
    goal: Point,
    cost: u32,
}

impl Path {
    /// Cost the search recorded for the goal when it was popped.
    pub fn cost(&self) -> u32 {
        self.cost
    }
    pub fn len(&self) -> usize {
        self.trail.len()
    }
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }
    /// Cells from the goal's predecessor back to the start.
    pub fn trail(&self) -> &[Point] {
        &self.trail
    }
    pub fn goal(&self) -> Point {
        self.goal
    }
    /// The route in walking order, start and goal included.
    pub fn points(&self) -> Vec<Point> {
        let mut points: Vec<Point> = self.trail.iter().rev().copied().collect();
        points.push(self.goal);
        points
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    /// The frontier ran dry before the goal was popped.
    Unreachable,
    /// The observer asked to stop.
    Aborted,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Walks `came_from` from `end` back to the start, marking every cell in between as Path and
/// notifying the observer once per step. Returns the visited predecessors, end's predecessor
/// first, or [None] if the observer aborted. The result is empty when `end` has no predecessor.
pub fn reconstruct<C, O>(
    grid: &mut Grid,
    came_from: &CameFrom<C>,
    end: CellId,
    observer: &mut O,
) -> Option<Vec<Point>>
where
    C: Zero + Ord + Copy,
    O: StepObserver + ?Sized,
{
    let mut trail = Vec::new();
    let predecessors =
        std::iter::successors(came_from.predecessor(end), |&c| came_from.predecessor(c));
    for cell in predecessors {
        if cell == end {
            break;
        }
        if came_from.predecessor(cell).is_some() {
            grid.cell_mut(cell).mark(CellRole::Path);
        }
        trail.push(grid.cell(cell).point());
        if observer.on_step(grid) == Signal::Abort {
            warn!("Path reconstruction aborted after {} steps", trail.len());
            return None;
        }
    }
    Some(trail)
}

/// Runs `solver` from `start` to `end`. The grid's neighbour lists must be fresh.
pub(crate) fn search<S, O>(
    solver: &S,
    grid: &mut Grid,
    start: Point,
    end: Point,
    observer: &mut O,
) -> Result<SearchOutcome, GridError>
where
    S: GridSolver + ?Sized,
    O: StepObserver + ?Sized,
{
    let (start_id, end_id) = grid.prepare_search(start, end)?;
    info!("Searching from {} to {} with {}", start, end, solver.name());
    if start_id == end_id {
        return Ok(SearchOutcome::Found(Path {
            trail: Vec::new(),
            goal: end,
            cost: 0,
        }));
    }
    let relaxation = solver.relaxation();
    let mut frontier = solver.frontier();
    let mut came_from: CameFrom<u32> = CameFrom::new(start_id);
    frontier.push(
        Entry { index: 0, cost: 0 },
        solver.heuristic(grid.cell(start_id), grid.cell(end_id)),
    );
    while let Some(Entry { index, cost }) = frontier.pop() {
        let Some((current, best)) = came_from.get_index(index) else {
            continue;
        };
        if current == end_id {
            info!("Reached {} at cost {}, reconstructing path", end, cost);
            return Ok(
                match reconstruct(grid, &came_from, end_id, observer) {
                    Some(trail) => SearchOutcome::Found(Path {
                        trail,
                        goal: end,
                        cost,
                    }),
                    None => SearchOutcome::Aborted,
                },
            );
        }
        // A cell is pushed again whenever a cheaper way to it is found. Only the entry
        // carrying the best cost is expanded, the others are discarded here.
        if cost > best {
            continue;
        }
        let neighbors = grid.cell(current).neighbors.clone();
        for neighbor in neighbors {
            let new_cost = cost + 1;
            if let Some(n) = came_from.relax(neighbor, index, new_cost, relaxation) {
                let estimate = new_cost + solver.heuristic(grid.cell(neighbor), grid.cell(end_id));
                frontier.push(
                    Entry {
                        index: n,
                        cost: new_cost,
                    },
                    estimate,
                );
                grid.cell_mut(neighbor).mark(CellRole::Frontier);
            }
        }
        if observer.on_step(grid) == Signal::Abort {
            warn!("{} aborted by observer", solver.name());
            return Ok(SearchOutcome::Aborted);
        }
        if current != start_id {
            grid.cell_mut(current).mark(CellRole::Visited);
        }
    }
    info!("{} is not reachable from {}", end, start);
    Ok(SearchOutcome::Unreachable)
}
