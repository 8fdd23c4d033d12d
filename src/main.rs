use std::path::PathBuf;

use roihist::app::{HistApp, APP_NAME};

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Optional image path on the command line, opened at startup.
    let initial_image = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(HistApp::new(cc, initial_image)))),
    )
}
