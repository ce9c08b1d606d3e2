/**
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* Everything outside the grid is permanently dead; there is no wraparound.
*/

pub mod error;
pub mod grid;
pub mod patterns;

pub use error::GridError;
pub use grid::{CellState, GridEngine, NeighborCounts};
pub use patterns::Pattern;
