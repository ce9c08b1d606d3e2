use std::fmt;
use std::ops::Not;

use rand::Rng;

use crate::error::GridError;
use crate::grid::CellState::{Alive, Dead};
use crate::patterns::Pattern;

#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }

    /// State of this cell in the next generation, given its live neighbor count.
    pub fn next(self, neighbors: u8) -> Self {
        match neighbors {
            0 | 1 => Dead, // Underpopulation
            2 => self,     // Unchanged
            3 => Alive,    // Birth or survival
            _ => Dead,     // Overpopulation
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

impl From<CellState> for bool {
    fn from(state: CellState) -> Self {
        state.is_alive()
    }
}

impl Not for CellState {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Alive => Dead,
            Dead => Alive,
        }
    }
}

/// Live neighbor counts for every cell of one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborCounts {
    width: usize,
    height: usize,
    counts: Vec<u8>,
}

impl NeighborCounts {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Count for the cell at column `x`, row `y`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.counts[y * self.width + x])
    }
}

/// Owns the current generation of a fixed-size grid.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row. Reads outside
/// the grid see dead cells; writes outside the grid are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEngine {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellState>>,
    generation: u64,
}

impl GridEngine {
    pub fn new(width: usize, height: usize) -> Self {
        GridEngine {
            width,
            height,
            cells: vec![vec![Dead; width]; height],
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of generations advanced since creation or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        self.position(x, y).is_some()
    }

    fn position(&self, x: isize, y: isize) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|&col| col < self.width)?;
        let row = usize::try_from(y).ok().filter(|&row| row < self.height)?;
        Some((col, row))
    }

    fn checked_position(&self, x: isize, y: isize) -> Result<(usize, usize), GridError> {
        self.position(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    pub fn cell(&self, x: isize, y: isize) -> CellState {
        match self.position(x, y) {
            Some((col, row)) => self.cells[row][col],
            None => Dead,
        }
    }

    /// Whether the cell at `(x, y)` is alive. Any coordinate is accepted.
    pub fn get(&self, x: isize, y: isize) -> bool {
        self.cell(x, y).is_alive()
    }

    /// Flip a single cell between alive and dead.
    pub fn toggle(&mut self, x: isize, y: isize) -> Result<(), GridError> {
        let (col, row) = self.checked_position(x, y)?;
        let cell = &mut self.cells[row][col];
        *cell = !*cell;
        Ok(())
    }

    /// Count the number of alive neighbors for a cell
    pub fn neighbor_count(&self, x: isize, y: isize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dx, dy)| self.get(x.saturating_add(*dx), y.saturating_add(*dy)))
            .count() as u8
    }

    pub fn neighbor_counts(&self) -> NeighborCounts {
        let mut counts = Vec::with_capacity(self.width * self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                counts.push(self.neighbor_count(col as isize, row as isize));
            }
        }
        NeighborCounts {
            width: self.width,
            height: self.height,
            counts,
        }
    }

    /// Advance the grid by one generation.
    ///
    /// Every neighbor count is taken from the current generation before any
    /// cell is rewritten.
    pub fn step(&mut self) {
        let neighbors = self.neighbor_counts();
        for (row, cells) in self.cells.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = cell.next(neighbors.counts[row * neighbors.width + col]);
            }
        }
        self.generation += 1;
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            *cell = Dead;
        }
        self.generation = 0;
    }

    /// Bring each cell to life with probability `density` and reset the generation counter.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        for cell in self.cells.iter_mut().flatten() {
            *cell = rng.random_bool(density).into();
        }
        self.generation = 0;
    }

    /// Set every cell of `pattern` alive, anchored at `(x, y)`.
    ///
    /// Nothing is written unless the whole pattern fits.
    pub fn place(&mut self, pattern: &Pattern, x: isize, y: isize) -> Result<(), GridError> {
        let positions = pattern
            .cells
            .iter()
            .map(|&(dx, dy)| self.checked_position(x.saturating_add(dx), y.saturating_add(dy)))
            .collect::<Result<Vec<_>, _>>()?;
        for (col, row) in positions {
            self.cells[row][col] = Alive;
        }
        Ok(())
    }
}

impl fmt::Display for GridEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine_with(width: usize, height: usize, alive: &[(isize, isize)]) -> GridEngine {
        let mut engine = GridEngine::new(width, height);
        for &(x, y) in alive {
            engine.toggle(x, y).unwrap();
        }
        engine
    }

    fn snapshot(engine: &GridEngine) -> Vec<Vec<bool>> {
        (0..engine.height() as isize)
            .map(|y| (0..engine.width() as isize).map(|x| engine.get(x, y)).collect())
            .collect()
    }

    // B3/S23 written independently of the engine: materialise the whole
    // generation, count from the copy, then build the next one.
    fn reference_step(engine: &GridEngine) -> Vec<Vec<bool>> {
        let current = snapshot(engine);
        let (width, height) = (engine.width() as isize, engine.height() as isize);
        let alive = |x: isize, y: isize| {
            x >= 0 && y >= 0 && x < width && y < height && current[y as usize][x as usize]
        };
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        let mut n = 0;
                        for dy in -1..=1 {
                            for dx in -1..=1 {
                                if (dx, dy) != (0, 0) && alive(x + dx, y + dy) {
                                    n += 1;
                                }
                            }
                        }
                        n == 3 || (n == 2 && alive(x, y))
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn new_grid_is_dead() {
        let engine = GridEngine::new(7, 5);
        assert_eq!(engine.width(), 7);
        assert_eq!(engine.height(), 5);
        assert_eq!(engine.generation(), 0);
        assert!(engine.is_empty());
        for y in 0..5 {
            for x in 0..7 {
                assert!(!engine.get(x, y));
            }
        }
    }

    #[test]
    fn out_of_bounds_reads_are_dead() {
        let mut engine = GridEngine::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                engine.toggle(x, y).unwrap();
            }
        }
        assert!(!engine.get(-1, -1));
        assert!(!engine.get(-1, 0));
        assert!(!engine.get(3, 0));
        assert!(!engine.get(0, 3));
        assert!(!engine.get(isize::MIN, isize::MAX));
        assert_eq!(engine.cell(5, 5), CellState::Dead);
        assert!(engine.in_bounds(2, 2));
        assert!(!engine.in_bounds(3, 2));
        assert!(!engine.in_bounds(0, -1));
    }

    #[test]
    fn single_cell_neighbor_counts() {
        let engine = engine_with(5, 5, &[(2, 2)]);
        let counts = engine.neighbor_counts();
        for y in 0..5usize {
            for x in 0..5usize {
                let adjacent = x.abs_diff(2) <= 1 && y.abs_diff(2) <= 1 && (x, y) != (2, 2);
                let expected = if adjacent { 1 } else { 0 };
                assert_eq!(counts.get(x, y), Some(expected), "cell ({x}, {y})");
            }
        }
        assert_eq!((counts.width(), counts.height()), (5, 5));
        assert_eq!(counts.get(5, 0), None);
        assert_eq!(counts.get(0, 5), None);
    }

    #[test]
    fn corner_cell_reaches_three_neighbors() {
        let engine = engine_with(4, 4, &[(0, 0)]);
        let counts = engine.neighbor_counts();
        let touched: Vec<(usize, usize)> = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .filter(|&(x, y)| counts.get(x, y) == Some(1))
            .collect();
        assert_eq!(touched, vec![(1, 0), (0, 1), (1, 1)]);
        assert_eq!(engine.neighbor_count(-1, -1), 1);
        assert!(!engine.get(-1, -1));
    }

    #[test]
    fn neighbor_count_at_extreme_coordinates() {
        let engine = engine_with(2, 2, &[(0, 0), (1, 1)]);
        assert_eq!(engine.neighbor_count(isize::MAX, isize::MAX), 0);
        assert_eq!(engine.neighbor_count(isize::MIN, 0), 0);
    }

    #[test]
    fn fate_follows_neighbor_count() {
        for state in [CellState::Dead, CellState::Alive] {
            assert_eq!(state.next(0), CellState::Dead);
            assert_eq!(state.next(1), CellState::Dead);
            assert_eq!(state.next(2), state);
            assert_eq!(state.next(3), CellState::Alive);
            for n in 4..=8 {
                assert_eq!(state.next(n), CellState::Dead);
            }
        }
    }

    #[test]
    fn cell_state_converts_to_and_from_bool() {
        assert_eq!(CellState::from(true), CellState::Alive);
        assert!(!bool::from(CellState::Dead));
        assert_eq!(!CellState::Dead, CellState::Alive);
        assert_eq!(CellState::default(), CellState::Dead);
    }

    #[test]
    fn lonely_cells_die() {
        let mut engine = engine_with(6, 6, &[(1, 1), (4, 4), (4, 3)]);
        engine.step();
        assert!(engine.is_empty());
    }

    #[test]
    fn cells_with_two_or_three_neighbors_survive() {
        // L-tromino: the corner has two neighbors, the ends have two each.
        let mut engine = engine_with(5, 5, &[(1, 1), (2, 1), (1, 2)]);
        engine.step();
        assert!(engine.get(1, 1));
        assert!(engine.get(2, 1));
        assert!(engine.get(1, 2));
        // The missing corner of the block is born from three neighbors.
        assert!(engine.get(2, 2));
        assert_eq!(engine.population(), 4);
    }

    #[test]
    fn dead_cell_with_two_neighbors_stays_dead() {
        let mut engine = engine_with(5, 5, &[(0, 2), (4, 2)]);
        assert_eq!(engine.neighbor_count(2, 2), 0);
        let mut pair = engine_with(5, 5, &[(1, 1), (3, 1)]);
        assert_eq!(pair.neighbor_count(2, 2), 2);
        pair.step();
        assert!(!pair.get(2, 2));
        engine.step();
        assert!(engine.is_empty());
    }

    #[test]
    fn crowded_cells_die() {
        // Plus sign: the centre has four neighbors.
        let mut engine = engine_with(5, 5, &[(2, 2), (2, 1), (1, 2), (3, 2), (2, 3)]);
        assert_eq!(engine.neighbor_count(2, 2), 4);
        engine.step();
        assert!(!engine.get(2, 2));
    }

    #[test]
    fn step_matches_reference_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for (width, height) in [(1, 1), (2, 3), (8, 8), (17, 9), (40, 23)] {
            for density in [0.1, 0.35, 0.5, 0.8] {
                let mut engine = GridEngine::new(width, height);
                engine.randomize(&mut rng, density);
                for _ in 0..4 {
                    let expected = reference_step(&engine);
                    engine.step();
                    assert_eq!(snapshot(&engine), expected, "{width}x{height} at {density}");
                }
            }
        }
    }

    #[test]
    fn step_differs_from_in_place_update() {
        // Updating in scan order would let (1, 0) see the already-dead (0, 0).
        let mut engine = engine_with(3, 3, &[(0, 0), (1, 0), (2, 0)]);
        engine.step();
        assert_eq!(engine.to_string(), ".#.\n.#.\n...\n");
    }

    #[test]
    fn step_advances_generation() {
        let mut engine = GridEngine::new(3, 3);
        engine.step();
        engine.step();
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn empty_grids_stay_empty() {
        for (width, height) in [(0, 0), (0, 4), (4, 0), (1, 1), (13, 7)] {
            let mut engine = GridEngine::new(width, height);
            engine.step();
            assert!(engine.is_empty());
            assert_eq!(engine.width(), width);
            assert_eq!(engine.height(), height);
        }
    }

    #[test]
    fn toggle_twice_restores_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut engine = GridEngine::new(9, 6);
        engine.randomize(&mut rng, 0.5);
        let before = engine.clone();
        engine.toggle(4, 3).unwrap();
        assert_ne!(engine.get(4, 3), before.get(4, 3));
        assert_eq!(engine.population().abs_diff(before.population()), 1);
        engine.toggle(4, 3).unwrap();
        assert_eq!(engine, before);
    }

    #[test]
    fn toggle_rejects_out_of_bounds() {
        let mut engine = GridEngine::new(4, 3);
        let before = engine.clone();
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (isize::MAX, isize::MAX)] {
            assert_eq!(
                engine.toggle(x, y),
                Err(GridError::OutOfBounds {
                    x,
                    y,
                    width: 4,
                    height: 3
                })
            );
        }
        assert_eq!(engine, before);
    }

    #[test]
    fn clear_resets_cells_and_generation() {
        let mut engine = engine_with(4, 4, &[(1, 1), (2, 1), (1, 2)]);
        engine.step();
        engine.clear();
        assert!(engine.is_empty());
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.width(), 4);
    }

    #[test]
    fn randomize_respects_density_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut engine = GridEngine::new(20, 20);
        engine.randomize(&mut rng, 1.0);
        assert_eq!(engine.population(), 400);
        engine.randomize(&mut rng, 0.0);
        assert!(engine.is_empty());
        engine.randomize(&mut rng, 3.5);
        assert_eq!(engine.population(), 400);
        engine.randomize(&mut rng, f64::NAN);
        assert!(engine.is_empty());
        engine.randomize(&mut rng, 0.5);
        let population = engine.population();
        assert!(population > 100 && population < 300);
    }

    #[test]
    fn place_is_all_or_nothing() {
        let mut engine = GridEngine::new(6, 6);
        engine.place(&patterns::GLIDER, 0, 0).unwrap();
        assert_eq!(engine.population(), 5);

        let before = engine.clone();
        let err = engine.place(&patterns::BLOCK, 5, 5).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                x: 6,
                y: 5,
                width: 6,
                height: 6
            }
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn display_draws_rows() {
        let engine = engine_with(3, 2, &[(0, 0), (2, 1)]);
        assert_eq!(engine.to_string(), "#..\n..#\n");
    }
}
