//! Logging initialization
//!
//! The application log goes to the terminal and to `LOG_FILE_PATH`. It is
//! separate from the two audit logs in [`crate::core::audit`].

use anyhow::Result;
use simplelog::*;

/// Initialize logger for both console and file output
///
/// The file is opened in append mode so restarts keep earlier diagnostics.
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to open the file or a logger was already set
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .map_err(|e| anyhow::anyhow!("Failed to open log file: {}", e))?;

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("reqwest")
        .build();

    CombinedLogger::init(vec![
        TermLogger::new(LevelFilter::Info, config.clone(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(LevelFilter::Info, config, log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}
