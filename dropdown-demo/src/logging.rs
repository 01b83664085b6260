use std::fs::{self, File};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::error::AppError;
use crate::paths;

/// Rotate old logs and send everything at `level` and above to `latest.log`
/// in the cache directory. Without a cache directory nothing is logged.
pub fn init(level: LevelFilter) -> Result<(), AppError> {
    paths::rotate_logs();

    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(&path)?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();
    WriteLogger::init(level, config, file)?;

    log::info!("logging to {}", path.display());
    Ok(())
}
