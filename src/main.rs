use anyhow::Context;
use clap::Parser;
use loxosphere::config::{SceneConfig, DEFAULT_LINE_WIDTH, DEFAULT_SEGMENTS, DEFAULT_SPEED};
use loxosphere::error::ConfigError;
use loxosphere::logging::{init_logging, LoggingConfig};
use loxosphere::terminal::{self, TerminalOptions};
use std::path::PathBuf;

/// Three nested rings twisting into a sphere, drawn in the terminal.
///
/// Move the mouse to turn the sphere, press `d` for debug info and `q` to quit.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Time scaling factor, slower when closer to 0
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    speed: f64,

    /// Points per ring
    #[arg(long, default_value_t = DEFAULT_SEGMENTS)]
    segments: usize,

    /// Stroke width in scene units (the largest ring has radius 100)
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH)]
    line_width: f64,

    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Start with the debug overlay shown
    #[arg(long)]
    debug: bool,

    /// Write log records to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter in env_logger syntax, overrides RUST_LOG
    #[arg(long, value_name = "FILTER")]
    log_filter: Option<String>,
}

impl Cli {
    fn into_parts(self) -> Result<(SceneConfig, TerminalOptions, LoggingConfig), ConfigError> {
        if !(1..=1000).contains(&self.fps) {
            return Err(ConfigError::InvalidFrameRate(self.fps));
        }
        let config = SceneConfig {
            segments: self.segments,
            speed: self.speed,
            line_width: self.line_width,
            ..SceneConfig::default()
        };
        config.validate()?;
        let options = TerminalOptions {
            fps: self.fps,
            debug: self.debug,
        };
        let logging = LoggingConfig {
            env_filter: self.log_filter,
            log_file: self.log_file,
        };
        Ok((config, options, logging))
    }
}

/// Main function
fn main() -> anyhow::Result<()> {
    let (config, options, logging) = Cli::parse().into_parts()?;
    init_logging(logging).context("failed to open the log file")?;
    log::info!(
        "{} rings, {} segments each, speed {}",
        config.rings.len(),
        config.segments,
        config.speed
    );

    terminal::run(config, options).context("could not run the animation in this terminal")?;
    Ok(())
}
