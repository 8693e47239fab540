//! Logger initialization.
//!
//! The terminal belongs to the animation, so records go to a file or
//! nowhere at all.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "loxosphere=debug"). Without it `RUST_LOG` is consulted, then `info`.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub log_file: Option<PathBuf>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) -> std::io::Result<()> {
    let mut result = Ok(());
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.log_file {
            Some(path) => match File::create(&path) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                    if let Some(filter) = config.env_filter {
                        builder.parse_filters(&filter);
                    } else if let Ok(filter) = std::env::var("RUST_LOG") {
                        builder.parse_filters(&filter);
                    } else {
                        builder.filter_level(log::LevelFilter::Info);
                    }
                }
                Err(err) => {
                    result = Err(err);
                    return;
                }
            },
            None => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }

        builder.write_style(env_logger::WriteStyle::Never);
        builder.init();

        log::debug!("logging initialized");
    });
    result
}
