#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use doodle_pad::{DoodleApp, DoodleConfig};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DoodleConfig::load().unwrap_or_else(|err| {
        log::warn!("{err}; falling back to the default configuration");
        DoodleConfig::default()
    });

    let [width, height] = config.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size([width, height])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    log::info!("Starting {}", config.window_title);
    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(DoodleApp::new(cc, &config)))),
    )
}
