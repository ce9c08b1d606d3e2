use std::time::Instant;

use eframe::egui::{self, Color32, Key, RichText, Sense};
use engine::patterns::{self, Pattern};
use engine::GridEngine;
use log::{debug, info, trace, warn};

use crate::config::Config;
use crate::layout::GridLayout;
use crate::ticker::Ticker;

pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;
pub const LINE_COLOR: Color32 = Color32::from_rgb(36, 34, 52);
pub const CELL_COLOR: Color32 = Color32::WHITE;
const FONT_COLOR: Color32 = Color32::WHITE;
const LABEL_HEIGHT: f32 = 48.0;
const FONT_SIZE: f32 = 36.0;
const RANDOM_DENSITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePause,
    Step,
    Randomize,
    Clear,
    Pattern(usize),
}

const KEY_BINDINGS: &[(Key, Action)] = &[
    (Key::Space, Action::TogglePause),
    (Key::N, Action::Step),
    (Key::R, Action::Randomize),
    (Key::C, Action::Clear),
    (Key::Num1, Action::Pattern(0)),
    (Key::Num2, Action::Pattern(1)),
    (Key::Num3, Action::Pattern(2)),
    (Key::Num4, Action::Pattern(3)),
    (Key::Num5, Action::Pattern(4)),
    (Key::Num6, Action::Pattern(5)),
];

/// Inner window size needed to show the whole grid plus the status label.
pub fn window_size(config: &Config) -> [f32; 2] {
    let grid = GridLayout::new(config.width, config.height, config.cell_size, config.line_size).size();
    [grid.x, grid.y + LABEL_HEIGHT]
}

pub struct GuiOfLife {
    engine: GridEngine,
    layout: GridLayout,
    paused: bool,
    ticker: Ticker,
}

impl GuiOfLife {
    pub fn new(config: &Config) -> Self {
        let mut engine = GridEngine::new(config.width, config.height);
        if let Some(pattern) = config.pattern {
            place_centered(&mut engine, pattern);
        }
        Self {
            engine,
            layout: GridLayout::new(config.width, config.height, config.cell_size, config.line_size),
            paused: !config.run,
            ticker: Ticker::new(config.tick_interval(), Instant::now()),
        }
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn status_text(&self) -> &'static str {
        if self.paused {
            "SIMULATION PAUSED"
        } else {
            "SIMULATION PLAYING"
        }
    }

    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::TogglePause => {
                self.paused = !self.paused;
                if !self.paused {
                    self.ticker.reset(now);
                }
                info!("{}", self.status_text().to_lowercase());
            }
            Action::Step => {
                if self.paused {
                    self.step();
                }
            }
            Action::Randomize => {
                self.engine.randomize(&mut rand::rng(), RANDOM_DENSITY);
                debug!("randomized grid, population {}", self.engine.population());
            }
            Action::Clear => {
                self.engine.clear();
                debug!("cleared grid");
            }
            Action::Pattern(index) => {
                if let Some(pattern) = patterns::PATTERNS.get(index) {
                    self.engine.clear();
                    place_centered(&mut self.engine, pattern);
                }
            }
        }
    }

    pub fn toggle_cell(&mut self, x: isize, y: isize) {
        match self.engine.toggle(x, y) {
            Ok(()) => debug!("toggled cell ({x}, {y})"),
            Err(err) => warn!("ignoring edit: {err}"),
        }
    }

    /// Step the simulation if it is running and a tick is due.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.paused || !self.ticker.tick(now) {
            return false;
        }
        self.step();
        true
    }

    fn step(&mut self) {
        self.engine.step();
        trace!(
            "generation {}, population {}",
            self.engine.generation(),
            self.engine.population()
        );
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(self.layout.size(), Sense::click());
        let layout = self.layout.with_origin(rect.min);

        if response.clicked() {
            if let Some((x, y)) = response.interact_pointer_pos().and_then(|pos| layout.cell_at(pos)) {
                self.toggle_cell(x, y);
            }
        }

        let painter = ui.painter();
        for y in 0..self.engine.height() {
            for x in 0..self.engine.width() {
                let color = if self.engine.get(x as isize, y as isize) {
                    CELL_COLOR
                } else {
                    BACKGROUND_COLOR
                };
                painter.rect_filled(layout.cell_rect(x, y), 0.0, color);
            }
        }
    }

    fn draw_label(&self, ui: &mut egui::Ui) {
        ui.centered_and_justified(|ui| {
            ui.label(
                RichText::new(self.status_text())
                    .monospace()
                    .size(FONT_SIZE)
                    .color(FONT_COLOR),
            );
        });
    }
}

fn place_centered(engine: &mut GridEngine, pattern: &Pattern) {
    let x = engine.width().saturating_sub(pattern.width()) / 2;
    let y = engine.height().saturating_sub(pattern.height()) / 2;
    match engine.place(pattern, x as isize, y as isize) {
        Ok(()) => debug!("placed {} at ({x}, {y})", pattern.name),
        Err(err) => warn!("{} does not fit: {err}", pattern.name),
    }
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let actions: Vec<Action> = ctx.input(|input| {
            KEY_BINDINGS
                .iter()
                .filter(|(key, _)| input.key_pressed(*key))
                .map(|&(_, action)| action)
                .collect()
        });
        for action in actions {
            self.apply(action, now);
        }

        self.advance(now);

        egui::TopBottomPanel::bottom("status")
            .exact_height(LABEL_HEIGHT)
            .frame(egui::Frame::none().fill(BACKGROUND_COLOR))
            .show(ctx, |ui| self.draw_label(ui));
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(LINE_COLOR))
            .show(ctx, |ui| self.draw_grid(ui));

        if !self.paused {
            ctx.request_repaint_after(self.ticker.remaining(now));
        }
    }
}
