use marquee_player::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("marquee_player", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load .env before the logger so RUST_LOG can come from it
    let dotenv = dotenvy::dotenv();

    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    match dotenv {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("Failed to load .env file: {}", e),
    }

    let config = AppConfig::from_environment();

    app::run(config)
}
