//! Logging Infrastructure
//!
//! Structured logging setup. Stdout belongs to the menu, so console logs go
//! to stderr and file logs to a daily rolling appender.

use std::path::Path;

/// Initialize the logger with optional JSON format and file output
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level
        .and_then(|l| l.parse().ok())
        .unwrap_or(tracing::Level::WARN);
    let json = json.unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "front-desk");
            let builder = builder.with_ansi(false).with_writer(file_appender);
            if json {
                builder.json().init();
            } else {
                builder.init();
            }
            return;
        }
    }

    let builder = builder.with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
