use crate::cell::{Cell, CellId, CellRole};
use crate::error::GridError;
use crate::observer::StepObserver;
use crate::search::SearchOutcome;
use crate::solver::Algorithm;
use crate::{DEFAULT_ROWS, DEFAULT_WIDTH};
use core::fmt;
use grid_util::point::Point;
use itertools::iproduct;
use log::{debug, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [Grid] owns a square arena of [Cell]s. Besides the cells it maintains connected components
/// using a [UnionFind] structure so that reachability can be answered without searching.
///
/// Neighbour lists are cached on the cells and must be rebuilt with
/// [refresh_neighbors](Self::refresh_neighbors) after barriers change; searches refuse to run
/// while they are stale.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    pixel_width: u32,
    cell_size: u32,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub(crate) components_dirty: bool,
    pub(crate) neighbors_dirty: bool,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::with_cell_size(DEFAULT_ROWS, DEFAULT_WIDTH, DEFAULT_WIDTH / DEFAULT_ROWS as u32)
    }
}

impl Grid {
    /// Builds a `rows × rows` grid drawn over `pixel_width` pixels. Every cell starts out empty.
    pub fn new(rows: usize, pixel_width: u32) -> Result<Grid, GridError> {
        if rows == 0 {
            return Err(GridError::Config { rows, pixel_width });
        }
        Ok(Grid::with_cell_size(
            rows,
            pixel_width,
            pixel_width / rows as u32,
        ))
    }

    fn with_cell_size(rows: usize, pixel_width: u32, cell_size: u32) -> Grid {
        let cells = iproduct!(0..rows, 0..rows)
            .map(|(row, col)| Cell::new(row, col, cell_size))
            .collect();
        Grid {
            rows,
            pixel_width,
            cell_size,
            cells,
            components: UnionFind::new(rows * rows),
            components_dirty: true,
            neighbors_dirty: true,
        }
    }

    /// Returns a fresh grid with the same dimensions. The current grid is left untouched.
    pub fn clear(&self) -> Grid {
        Grid::with_cell_size(self.rows, self.pixel_width, self.cell_size)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
    /// Whether barriers changed since the last [refresh_neighbors](Self::refresh_neighbors).
    pub fn neighbors_dirty(&self) -> bool {
        self.neighbors_dirty
    }
    /// Whether barriers were added since the components were last generated.
    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.rows && (y as usize) < self.rows
    }
    /// Maps a position (`x = row`, `y = col`) to its arena index.
    pub fn id_of(&self, point: Point) -> Result<CellId, GridError> {
        if self.in_bounds(point.x, point.y) {
            Ok(CellId(point.x as usize * self.rows + point.y as usize))
        } else {
            Err(GridError::OutOfBounds { point })
        }
    }
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }
    pub(crate) fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }
    pub fn cell_at(&self, point: Point) -> Result<&Cell, GridError> {
        self.id_of(point).map(|id| self.cell(id))
    }
    pub fn role(&self, point: Point) -> Result<CellRole, GridError> {
        self.cell_at(point).map(Cell::role)
    }

    /// Overwrites the role of a cell. Turning a cell into or out of a barrier marks both the
    /// neighbour lists and the components as dirty; otherwise newly opened cells are joined
    /// to their open neighbours right away.
    pub fn set_role(&mut self, point: Point, role: CellRole) -> Result<(), GridError> {
        let id = self.id_of(point)?;
        let was_barrier = self.cell(id).is_barrier();
        let blocked = role == CellRole::Barrier;
        self.cells[id.0].role = role;
        if was_barrier != blocked {
            self.neighbors_dirty = true;
            if blocked {
                self.components_dirty = true;
            } else {
                for n in self.open_neighborhood(id) {
                    self.components.union(id.0, n.0);
                }
            }
        }
        Ok(())
    }

    /// Applies the left-click editing rule: the first click places the start, the next one the
    /// end, and any later click on another cell places a barrier.
    pub fn paint(&mut self, point: Point) -> Result<CellRole, GridError> {
        let role = self.role(point)?;
        if matches!(role, CellRole::Start | CellRole::End) {
            return Ok(role);
        }
        let new_role = if self.find_unique(CellRole::Start)?.is_none() {
            CellRole::Start
        } else if self.find_unique(CellRole::End)?.is_none() {
            CellRole::End
        } else {
            CellRole::Barrier
        };
        self.set_role(point, new_role)?;
        Ok(new_role)
    }

    /// Applies the right-click editing rule: the cell becomes empty, which also releases it as
    /// start or end.
    pub fn erase(&mut self, point: Point) -> Result<(), GridError> {
        self.set_role(point, CellRole::Empty)
    }

    /// Turns every Frontier, Visited and Path mark back into an empty cell so that another
    /// algorithm can be run on the same layout.
    pub fn reset_search_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.role.is_search_mark() {
                cell.role = CellRole::Empty;
            }
        }
    }

    /// Looks up the single cell holding `role`, failing if more than one cell holds it.
    pub fn find_unique(&self, role: CellRole) -> Result<Option<CellId>, GridError> {
        let mut found = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.role == role)
            .map(|(ix, _)| CellId(ix));
        let first = found.next();
        let rest = found.count();
        if rest > 0 {
            warn!("{} cells have role {}", rest + 1, role);
            return Err(GridError::InvariantViolation {
                role,
                count: rest + 1,
            });
        }
        Ok(first)
    }
    /// The current start cell, if exactly one is set.
    pub fn start(&self) -> Result<Option<Point>, GridError> {
        Ok(self
            .find_unique(CellRole::Start)?
            .map(|id| self.cell(id).point()))
    }
    /// The current end cell, if exactly one is set.
    pub fn end(&self) -> Result<Option<Point>, GridError> {
        Ok(self
            .find_unique(CellRole::End)?
            .map(|id| self.cell(id).point()))
    }

    /// The up-to-4 orthogonal in-bounds neighbours of a cell that are not barriers, in the order
    /// down, up, right, left.
    fn open_neighborhood(&self, id: CellId) -> SmallVec<[CellId; 4]> {
        // neumann_neighborhood yields down, right, up, left
        let around = self.cell(id).point().neumann_neighborhood();
        [around[0], around[2], around[1], around[3]]
            .into_iter()
            .filter_map(|p| self.id_of(p).ok())
            .filter(|&n| !self.cell(n).is_barrier())
            .collect()
    }

    /// Recomputes every cell's neighbour list from the current barriers.
    pub fn refresh_neighbors(&mut self) {
        debug!("Refreshing neighbours of {} cells", self.cells.len());
        for ix in 0..self.cells.len() {
            let neighbors = self.open_neighborhood(CellId(ix));
            self.cells[ix].neighbors = neighbors;
        }
        self.neighbors_dirty = false;
    }

    /// Checks everything a search needs before it may touch the grid and resolves the endpoints.
    pub(crate) fn prepare_search(
        &self,
        start: Point,
        end: Point,
    ) -> Result<(CellId, CellId), GridError> {
        self.find_unique(CellRole::Start)?;
        self.find_unique(CellRole::End)?;
        if self.neighbors_dirty {
            warn!("Refusing to search with stale neighbour lists");
            return Err(GridError::StaleNeighbors);
        }
        let start_id = self.id_of(start)?;
        let end_id = self.id_of(end)?;
        for (id, point) in [(start_id, start), (end_id, end)] {
            if self.cell(id).is_barrier() {
                return Err(GridError::BlockedEndpoint { point });
            }
        }
        Ok((start_id, end_id))
    }

    /// Runs `algorithm` between the cells currently marked Start and End. Neighbours are
    /// refreshed first, the way the interactive tool does before every run.
    pub fn run<O>(
        &mut self,
        algorithm: Algorithm,
        observer: &mut O,
    ) -> Result<SearchOutcome, GridError>
    where
        O: StepObserver + ?Sized,
    {
        let start = self.start()?.ok_or(GridError::MissingEndpoint(CellRole::Start))?;
        let end = self.end()?.ok_or(GridError::MissingEndpoint(CellRole::End))?;
        self.refresh_neighbors();
        algorithm.solve(self, start, end, observer)
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: Point) -> Result<usize, GridError> {
        Ok(self.components.find(self.id_of(point)?.0))
    }
    /// Checks if start and goal are on the same component, regenerating dirty components first.
    pub fn reachable(&mut self, start: Point, goal: Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component, regenerating dirty components
    /// first.
    pub fn unreachable(&mut self, start: Point, goal: Point) -> bool {
        self.update();
        match (self.id_of(start), self.id_of(goal)) {
            (Ok(s), Ok(g)) => {
                self.cell(s).is_barrier()
                    || self.cell(g).is_barrier()
                    || !self.components.equiv(s.0, g.0)
            }
            _ => true,
        }
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up open orthogonal neighbours.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components");
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for ix in 0..self.cells.len() {
            if self.cells[ix].is_barrier() {
                continue;
            }
            let cell = &self.cells[ix];
            // Only down and right, the other two directions are covered from the other side.
            let forward = [
                (cell.row() + 1, cell.col()),
                (cell.row(), cell.col() + 1),
            ];
            for (row, col) in forward {
                if row < self.rows && col < self.rows {
                    let n = row * self.rows + col;
                    if !self.cells[n].is_barrier() {
                        self.components.union(ix, n);
                    }
                }
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.rows) {
            let line: String = row.iter().map(|c| c.role().symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(grid: &Grid, points: &[(i32, i32)]) -> Vec<CellId> {
        points
            .iter()
            .map(|&(x, y)| grid.id_of(Point::new(x, y)).unwrap())
            .collect()
    }

    #[test]
    fn rejects_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 800).unwrap_err(),
            GridError::Config {
                rows: 0,
                pixel_width: 800
            }
        );
        // Fewer pixels than rows still builds, with zero-sized cells.
        let tiny = Grid::new(10, 5).unwrap();
        assert_eq!(tiny.cell_size(), 0);
        assert_eq!(tiny.len(), 100);
        let grid = Grid::new(50, 800).unwrap();
        assert_eq!(grid.cell_size(), 16);
        assert_eq!(grid.len(), 2500);
    }

    #[test]
    fn default_uses_interactive_dimensions() {
        let grid = Grid::default();
        assert_eq!(grid.rows(), DEFAULT_ROWS);
        assert_eq!(grid.pixel_width(), DEFAULT_WIDTH);
    }

    #[test]
    fn neighbours_skip_barriers_and_borders() {
        // |.#.|
        // |...|
        // |...|
        let mut grid = Grid::new(3, 30).unwrap();
        grid.set_role(Point::new(0, 1), CellRole::Barrier).unwrap();
        grid.refresh_neighbors();
        let corner = grid.cell_at(Point::new(0, 0)).unwrap();
        assert_eq!(corner.neighbors(), ids(&grid, &[(1, 0)]).as_slice());
        let center = grid.cell_at(Point::new(1, 1)).unwrap();
        assert_eq!(
            center.neighbors(),
            ids(&grid, &[(2, 1), (1, 2), (1, 0)]).as_slice()
        );
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut grid = Grid::new(4, 40).unwrap();
        grid.set_role(Point::new(1, 1), CellRole::Barrier).unwrap();
        grid.set_role(Point::new(2, 3), CellRole::Barrier).unwrap();
        grid.refresh_neighbors();
        let first: Vec<Vec<CellId>> = grid.cells().map(|c| c.neighbors().to_vec()).collect();
        grid.refresh_neighbors();
        let second: Vec<Vec<CellId>> = grid.cells().map(|c| c.neighbors().to_vec()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn barrier_changes_mark_neighbours_stale() {
        let mut grid = Grid::new(3, 30).unwrap();
        grid.refresh_neighbors();
        assert!(!grid.neighbors_dirty());
        grid.set_role(Point::new(1, 1), CellRole::Start).unwrap();
        assert!(!grid.neighbors_dirty());
        grid.set_role(Point::new(2, 2), CellRole::Barrier).unwrap();
        assert!(grid.neighbors_dirty());
    }

    #[test]
    fn clear_returns_fresh_grid() {
        let mut grid = Grid::new(3, 30).unwrap();
        grid.set_role(Point::new(1, 1), CellRole::Barrier).unwrap();
        let cleared = grid.clear();
        assert_eq!(cleared.rows(), 3);
        assert!(cleared.cells().all(|c| c.role() == CellRole::Empty));
        assert_eq!(grid.role(Point::new(1, 1)).unwrap(), CellRole::Barrier);
    }

    #[test]
    fn paint_places_start_end_then_barriers() {
        let mut grid = Grid::new(3, 30).unwrap();
        assert_eq!(grid.paint(Point::new(0, 0)).unwrap(), CellRole::Start);
        // Clicking the start again changes nothing.
        assert_eq!(grid.paint(Point::new(0, 0)).unwrap(), CellRole::Start);
        assert_eq!(grid.paint(Point::new(2, 2)).unwrap(), CellRole::End);
        assert_eq!(grid.paint(Point::new(1, 1)).unwrap(), CellRole::Barrier);
        grid.erase(Point::new(0, 0)).unwrap();
        assert_eq!(grid.start().unwrap(), None);
        assert_eq!(grid.paint(Point::new(1, 0)).unwrap(), CellRole::Start);
        assert_eq!(grid.start().unwrap(), Some(Point::new(1, 0)));
        assert_eq!(grid.end().unwrap(), Some(Point::new(2, 2)));
    }

    #[test]
    fn duplicate_start_is_reported() {
        let mut grid = Grid::new(3, 30).unwrap();
        grid.set_role(Point::new(0, 0), CellRole::Start).unwrap();
        grid.set_role(Point::new(0, 2), CellRole::Start).unwrap();
        assert_eq!(
            grid.start().unwrap_err(),
            GridError::InvariantViolation {
                role: CellRole::Start,
                count: 2
            }
        );
    }

    #[test]
    fn out_of_bounds_points_are_rejected() {
        let grid = Grid::new(3, 30).unwrap();
        let point = Point::new(3, 0);
        assert_eq!(
            grid.role(point).unwrap_err(),
            GridError::OutOfBounds { point }
        );
        assert!(grid.id_of(Point::new(-1, 0)).is_err());
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#.|
        // |.#.|
        // |.#.|
        let mut grid = Grid::new(3, 30).unwrap();
        for x in 0..3 {
            grid.set_role(Point::new(x, 1), CellRole::Barrier).unwrap();
        }
        grid.generate_components();
        assert!(grid.reachable(Point::new(0, 0), Point::new(2, 0)));
        assert!(grid.unreachable(Point::new(0, 0), Point::new(0, 2)));
        assert!(grid.unreachable(Point::new(0, 0), Point::new(0, 1)));
        assert_eq!(
            grid.get_component(Point::new(0, 2)).unwrap(),
            grid.get_component(Point::new(2, 2)).unwrap()
        );
    }

    #[test]
    fn opening_a_cell_joins_components() {
        let mut grid = Grid::new(3, 30).unwrap();
        for x in 0..3 {
            grid.set_role(Point::new(x, 1), CellRole::Barrier).unwrap();
        }
        grid.update();
        assert!(!grid.components_dirty());
        grid.set_role(Point::new(1, 1), CellRole::Empty).unwrap();
        assert!(!grid.components_dirty());
        assert!(grid.reachable(Point::new(0, 0), Point::new(0, 2)));
    }

    #[test]
    fn reachability_regenerates_dirty_components() {
        let mut grid = Grid::new(3, 30).unwrap();
        assert!(grid.components_dirty());
        assert!(grid.reachable(Point::new(0, 0), Point::new(0, 1)));
        assert!(!grid.components_dirty());
        // |.#.|
        // |.#.|
        // |.#.|
        for x in 0..3 {
            grid.set_role(Point::new(x, 1), CellRole::Barrier).unwrap();
        }
        assert!(grid.components_dirty());
        assert!(grid.unreachable(Point::new(0, 0), Point::new(0, 2)));
        assert!(grid.reachable(Point::new(0, 0), Point::new(2, 0)));
    }

    #[test]
    fn display_renders_roles() {
        let mut grid = Grid::new(2, 20).unwrap();
        grid.set_role(Point::new(0, 0), CellRole::Start).unwrap();
        grid.set_role(Point::new(1, 1), CellRole::End).unwrap();
        grid.set_role(Point::new(0, 1), CellRole::Barrier).unwrap();
        assert_eq!(grid.to_string(), "S#\n.E\n");
    }
}
