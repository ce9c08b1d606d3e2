//! Well-known starting patterns, stored as live-cell offsets from their top-left corner.

#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

impl Pattern {
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(dx, _)| dx + 1).max().unwrap_or(0) as usize
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, dy)| dy + 1).max().unwrap_or(0) as usize
    }
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const PATTERNS: &[&Pattern] = &[&BLOCK, &BLINKER, &TOAD, &BEACON, &GLIDER, &R_PENTOMINO];

/// Look up a built-in pattern by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .copied()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}
