use std::env;
use std::path::PathBuf;

/// Environment variable overriding the log directory
pub const LOG_DIR_ENV: &str = "STRETTO_LOG_DIR";

pub struct AppConfig {
    /// File opened at startup, as if by `o <path>`
    pub initial_file: Option<PathBuf>,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let log_dir = env::var_os(LOG_DIR_ENV).map(PathBuf::from).unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("stretto")
                .join("logs")
        });

        Self {
            initial_file: None,
            log_dir,
        }
    }
}

impl AppConfig {
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("stretto.log")
    }
}
