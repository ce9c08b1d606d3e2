use anyhow::anyhow;
use clap::Parser;
use eframe::egui;
use eframe::run_native;
use log::info;

mod app;
mod config;
mod icon;
mod layout;
mod ticker;

use app::GuiOfLife;
use config::Config;

const TITLE: &str = "Conway's Game of Life";

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();
    info!(
        "starting {}x{} grid at {} generations per second",
        config.width, config.height, config.tick_rate
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size(app::window_size(&config))
            .with_resizable(false)
            .with_icon(icon::icon(app::BACKGROUND_COLOR, app::CELL_COLOR)),
        ..Default::default()
    };

    run_native(
        TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(GuiOfLife::new(&config)))),
    )
    .map_err(|err| anyhow!("failed to run {TITLE}: {err}"))
}
