use eframe::egui::{vec2, Pos2, Rect, Vec2};

/// Maps grid cells to screen rectangles and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    origin: Pos2,
    columns: usize,
    rows: usize,
    cell_size: f32,
    line_size: f32,
}

impl GridLayout {
    pub fn new(columns: usize, rows: usize, cell_size: f32, line_size: f32) -> Self {
        Self {
            origin: Pos2::ZERO,
            columns,
            rows,
            cell_size,
            line_size,
        }
    }

    pub fn with_origin(self, origin: Pos2) -> Self {
        Self { origin, ..self }
    }

    /// Distance between the top-left corners of adjacent cells.
    pub fn pitch(&self) -> f32 {
        self.cell_size + self.line_size
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.columns as f32, self.rows as f32) * self.pitch()
    }

    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        let min = self.origin + vec2(x as f32, y as f32) * self.pitch();
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Grid cell under `pos`, or `None` for the lines between cells and anything off the grid.
    pub fn cell_at(&self, pos: Pos2) -> Option<(isize, isize)> {
        let local = pos - self.origin;
        let x = self.axis_index(local.x, self.columns)?;
        let y = self.axis_index(local.y, self.rows)?;
        Some((x as isize, y as isize))
    }

    fn axis_index(&self, offset: f32, count: usize) -> Option<usize> {
        if !offset.is_finite() || offset < 0.0 {
            return None;
        }
        let index = (offset / self.pitch()).floor();
        if index >= count as f32 {
            return None;
        }
        let within = offset - index * self.pitch();
        (within < self.cell_size).then_some(index as usize)
    }
}
