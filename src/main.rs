mod app;

use app::WordweekApp;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Word data (document/ and Audio/) lives in the current directory by
    // default; pass a directory argument to point somewhere else. The
    // folder can also be changed from inside the app.
    let data_root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    log::info!("word data root: {}", data_root.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Weekly Vocabulary",
        options,
        Box::new(|cc| {
            app::install_cjk_fonts(&cc.egui_ctx);
            Ok(Box::new(WordweekApp::new(data_root)))
        }),
    )
}
