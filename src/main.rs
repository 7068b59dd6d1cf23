use eframe::egui;
use waymark::app::Waymark;
use waymark::config::Config;
use waymark::logging;
use waymark::store::FileStore;

fn main() -> eframe::Result<()> {
    logging::init_tracing();

    if let Err(e) = Config::create_default() {
        tracing::warn!(error = %e, "could not write default config");
    }
    let config = Config::load();

    let Some(storage_path) = config.storage_path() else {
        tracing::error!("could not determine a storage location");
        std::process::exit(1);
    };
    let store = FileStore::new(storage_path);

    let app = match Waymark::new(config, store) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to start");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 560.0])
            .with_title(app.title()),
        ..Default::default()
    };

    eframe::run_native("Waymark", options, Box::new(|_cc| Ok(Box::new(app))))
}
