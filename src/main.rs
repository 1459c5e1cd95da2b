mod app;
mod config;
mod content;
mod input;
mod io;
mod nav;
mod state;
mod style;
mod view;

use app::Vitrine;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let config = Config::load();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_min_inner_size([720.0, 480.0])
        .with_title("Vitrine");
    if let Some(icon) = load_icon() {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Vitrine",
        options,
        Box::new(|cc| Ok(Box::new(Vitrine::new(cc, config)))),
    )
}

/// Window icon, rasterized from assets/icon.svg by the rasterize_icon bin
fn load_icon() -> Option<egui::IconData> {
    let bytes = include_bytes!("../assets/icon.png");
    let image = image::load_from_memory(bytes).ok()?.into_rgba8();
    let (width, height) = image.dimensions();
    Some(egui::IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}
