// main.rs - Torus Game of Life viewer
//
// Usage: torus_view [config.json]

use conway::SimConfig;
use eframe::egui;
use tracing::info;

mod app;
mod camera;
mod clock;
mod mesh;

use app::TorusApp;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("torus_view=info".parse()?)
                .add_directive("conway=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let sim = config.build()?;

    info!(
        width = config.width,
        height = config.height,
        tick_seconds = config.tick_seconds,
        "starting viewer"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 720.0]),
        multisampling: 4,
        ..Default::default()
    };

    eframe::run_native(
        "Torus Game of Life",
        options,
        Box::new(move |cc| Box::new(TorusApp::new(cc, config, sim))),
    )
    .map_err(|err| eyre::eyre!("viewer failed: {err}"))
}
