use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LoggingConfig};

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Append to the configured log file; stderr belongs to the UI.
    File,
    Stderr,
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &LoggingConfig, sink: LogSink) -> io::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    let installed = match sink {
        LogSink::Stderr => builder.with_writer(io::stderr).try_init(),
        LogSink::File => {
            let path = config.file.clone().unwrap_or_else(Config::default_log_path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(io::Error::other)
}
