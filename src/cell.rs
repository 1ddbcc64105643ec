use core::fmt;
use grid_util::point::Point;
use smallvec::SmallVec;

/// Index of a [Cell] inside the flat arena owned by a [Grid](crate::grid::Grid).
/// For a grid with `rows` rows the cell at `(row, col)` has id `row * rows + col`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a cell currently is. Presentation layers map roles to colours.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellRole {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    /// Discovered but not yet expanded.
    Frontier,
    /// Expanded and closed.
    Visited,
    Path,
}

impl CellRole {
    /// Roles written by the search algorithms, wiped by
    /// [reset_search_marks](crate::grid::Grid::reset_search_marks).
    pub fn is_search_mark(self) -> bool {
        matches!(self, CellRole::Frontier | CellRole::Visited | CellRole::Path)
    }

    /// Single character used by the text rendering of a grid.
    pub fn symbol(self) -> char {
        match self {
            CellRole::Empty => '.',
            CellRole::Barrier => '#',
            CellRole::Start => 'S',
            CellRole::End => 'E',
            CellRole::Frontier => 'o',
            CellRole::Visited => 'x',
            CellRole::Path => '*',
        }
    }
}

impl fmt::Display for CellRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CellRole::Empty => "empty",
            CellRole::Barrier => "barrier",
            CellRole::Start => "start",
            CellRole::End => "end",
            CellRole::Frontier => "frontier",
            CellRole::Visited => "visited",
            CellRole::Path => "path",
        };
        f.write_str(name)
    }
}

/// A single grid position. The neighbour list is a cache filled by
/// [refresh_neighbors](crate::grid::Grid::refresh_neighbors) and is never updated implicitly.
#[derive(Clone, Debug)]
pub struct Cell {
    row: usize,
    col: usize,
    width: u32,
    pub(crate) role: CellRole,
    pub(crate) neighbors: SmallVec<[CellId; 4]>,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize, width: u32) -> Cell {
        Cell {
            row,
            col,
            width,
            role: CellRole::Empty,
            neighbors: SmallVec::new(),
        }
    }
    pub fn row(&self) -> usize {
        self.row
    }
    pub fn col(&self) -> usize {
        self.col
    }
    /// Position with `x = row` and `y = col`.
    pub fn point(&self) -> Point {
        Point::new(self.row as i32, self.col as i32)
    }
    /// Pixel offset of the cell's top-left corner along the row axis.
    pub fn x(&self) -> u32 {
        self.row as u32 * self.width
    }
    /// Pixel offset of the cell's top-left corner along the column axis.
    pub fn y(&self) -> u32 {
        self.col as u32 * self.width
    }
    /// Side length of the cell in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn role(&self) -> CellRole {
        self.role
    }
    pub fn neighbors(&self) -> &[CellId] {
        &self.neighbors
    }
    pub fn is_barrier(&self) -> bool {
        self.role == CellRole::Barrier
    }
    /// Manhattan distance between two cells, the A* heuristic on a 4-connected grid.
    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        self.point().manhattan_distance(&other.point()) as u32
    }
    /// Applies a search mark unless the cell is a start, end or barrier.
    pub(crate) fn mark(&mut self, role: CellRole) {
        if matches!(
            self.role,
            CellRole::Empty | CellRole::Frontier | CellRole::Visited | CellRole::Path
        ) {
            self.role = role;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_follows_row_and_col() {
        let cell = Cell::new(3, 5, 16);
        assert_eq!(cell.x(), 48);
        assert_eq!(cell.y(), 80);
        assert_eq!(cell.point(), Point::new(3, 5));
    }

    #[test]
    fn marks_leave_fixed_roles_alone() {
        for fixed in [CellRole::Start, CellRole::End, CellRole::Barrier] {
            let mut cell = Cell::new(0, 0, 1);
            cell.role = fixed;
            cell.mark(CellRole::Visited);
            assert_eq!(cell.role(), fixed);
        }
        let mut cell = Cell::new(0, 0, 1);
        cell.mark(CellRole::Frontier);
        cell.mark(CellRole::Visited);
        assert_eq!(cell.role(), CellRole::Visited);
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(0, 4, 1);
        let b = Cell::new(3, 1, 1);
        assert_eq!(a.manhattan_distance(&b), 6);
        assert_eq!(b.manhattan_distance(&a), 6);
    }
}
