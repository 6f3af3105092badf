use std::fs::File;

use assign_tui::{AppError, PageConfig, paths};
use simplelog::{Config, WriteLogger};

/// Open the log file in the cache directory, or the working directory if
/// that is unavailable.
fn open_log_file() -> std::io::Result<File> {
    paths::rotate_logs();
    if let Some(path) = paths::log_file() {
        match paths::create_log_file(&path) {
            Ok(file) => return Ok(file),
            Err(e) => eprintln!("Could not open {}: {}", path.display(), e),
        }
    }
    File::create("assign-tui.log")
}

async fn start() -> Result<(), AppError> {
    let config = PageConfig::from_env()?;

    match open_log_file() {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(config.log_level, Config::default(), file) {
                eprintln!("Logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Logging disabled: {}", e),
    }
    log::info!("starting with {:?}", config.log_level);

    assign_tui::run(config).await
}

#[tokio::main]
async fn main() {
    if let Err(e) = start().await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
