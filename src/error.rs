use crate::cell::CellRole;
use grid_util::point::Point;
use thiserror::Error;

/// Everything that can stop a grid from being built or a search from being started.
/// Not finding a path is not an error, see [SearchOutcome](crate::search::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions: {rows} rows over {pixel_width} pixels")]
    Config { rows: usize, pixel_width: u32 },
    #[error("found {count} cells with role {role}, at most one is allowed")]
    InvariantViolation { role: CellRole, count: usize },
    #[error("point {point} lies outside the grid")]
    OutOfBounds { point: Point },
    #[error("no cell has role {0}")]
    MissingEndpoint(CellRole),
    #[error("endpoint {point} is a barrier")]
    BlockedEndpoint { point: Point },
    #[error("barriers changed since neighbours were last refreshed")]
    StaleNeighbors,
    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
}
