mod app;
mod config;
mod error;
mod logging;
mod paths;

use app::App;
use config::DemoConfig;
use error::AppError;

fn run() -> Result<(), AppError> {
    let config = match paths::config_file() {
        Some(path) => DemoConfig::load(&path)?,
        None => DemoConfig::default(),
    };
    logging::init(config.level_filter()?)?;
    log::debug!("loaded {} options", config.options.len());

    // The terminal is restored when the app is dropped, before any error is printed.
    let mut app = App::new(&config)?;
    app.run()
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
