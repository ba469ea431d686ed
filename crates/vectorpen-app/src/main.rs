//! Main application entry point (native).

use vectorpen_app::{App, CONFIG_FILE};
use vectorpen_core::EditorConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting VectorPen v{}", env!("CARGO_PKG_VERSION"));

    let config = EditorConfig::load_or_default(CONFIG_FILE);
    App::run(config)
}
