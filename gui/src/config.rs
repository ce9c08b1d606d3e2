use std::time::Duration;

use clap::Parser;
use engine::patterns::{self, Pattern};

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 40;
pub const DEFAULT_TICK_RATE: u32 = 20;
pub const DEFAULT_CELL_SIZE: f32 = 16.0;
pub const DEFAULT_LINE_SIZE: f32 = 1.0;

/// Cell simulation following Conway's Game of Life. Press space to pause/unpause.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Number of columns in the grid.
    #[arg(long, value_name = "COLUMNS", default_value_t = DEFAULT_WIDTH, value_parser = parse_dimension)]
    pub width: usize,
    /// Number of rows in the grid.
    #[arg(long, value_name = "ROWS", default_value_t = DEFAULT_HEIGHT, value_parser = parse_dimension)]
    pub height: usize,
    /// Generations per second while the simulation is running.
    #[arg(
        long = "tick-rate",
        value_name = "HZ",
        default_value_t = DEFAULT_TICK_RATE,
        value_parser = clap::value_parser!(u32).range(1..=240)
    )]
    pub tick_rate: u32,
    /// Side length of a drawn cell.
    #[arg(long = "cell-size", value_name = "PIXELS", default_value_t = DEFAULT_CELL_SIZE, value_parser = parse_cell_size)]
    pub cell_size: f32,
    /// Gap drawn between neighboring cells.
    #[arg(long = "line-size", value_name = "PIXELS", default_value_t = DEFAULT_LINE_SIZE, value_parser = parse_line_size)]
    pub line_size: f32,
    /// Built-in pattern placed in the middle of the grid at startup.
    #[arg(long, value_name = "NAME", value_parser = parse_pattern)]
    pub pattern: Option<&'static Pattern>,
    /// Start the simulation running instead of paused.
    #[arg(long)]
    pub run: bool,
}

impl Config {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate))
    }
}

fn parse_dimension(value: &str) -> Result<usize, String> {
    let cells = value
        .trim()
        .parse::<usize>()
        .map_err(|error| format!("invalid cell count: {error}"))?;
    if cells == 0 {
        return Err("grid dimensions must be positive".to_string());
    }
    Ok(cells)
}

fn parse_pixels(value: &str) -> Result<f32, String> {
    let pixels = value
        .trim()
        .parse::<f32>()
        .map_err(|error| format!("invalid pixel size: {error}"))?;
    if !pixels.is_finite() || pixels < 0.0 {
        return Err("pixel sizes must be finite and non-negative".to_string());
    }
    Ok(pixels)
}

fn parse_cell_size(value: &str) -> Result<f32, String> {
    match parse_pixels(value)? {
        pixels if pixels >= 1.0 => Ok(pixels),
        _ => Err("cells must be at least one pixel wide".to_string()),
    }
}

fn parse_line_size(value: &str) -> Result<f32, String> {
    parse_pixels(value)
}

fn parse_pattern(value: &str) -> Result<&'static Pattern, String> {
    patterns::find(value).ok_or_else(|| {
        let known: Vec<&str> = patterns::PATTERNS.iter().map(|pattern| pattern.name).collect();
        format!("unknown pattern, expected one of: {}", known.join(", "))
    })
}
