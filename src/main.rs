// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info};

use translation_gateway::app_config::{Config, LogLevel};
use translation_gateway::server;

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// Translation Gateway
///
/// An HTTP backend that brokers translation, language detection and
/// transliteration requests to upstream AI providers without exposing the
/// provider API keys to clients.
#[derive(Parser, Debug)]
#[command(name = "translation-gateway")]
#[command(version)]
#[command(about = "AI translation gateway server")]
#[command(long_about = "The translation gateway serves six routes: /health, /translate, \
/translate/subtitle, /translate/text, /detect/language and /transliterate.

CONFIGURATION:
    Secrets and provider settings come from the environment (a config.env
    file is loaded first if present). API_KEY and GEMINI_API_KEY are
    required; startup fails when either is missing.")]
struct CommandLineOptions {
    /// Bind address for the HTTP server
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Bind port for the HTTP server
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Custom logger writing timestamped, level-colored lines to stderr
struct GatewayLogger {
    level: LevelFilter,
}

impl GatewayLogger {
    fn new(level: LevelFilter) -> Self {
        GatewayLogger { level }
    }

    /// Install as the global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(GatewayLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    /// ANSI color for the given level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for GatewayLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Environment file first, so plain environment variables win
    let _ = dotenvy::from_filename("config.env");

    let options = CommandLineOptions::parse();

    let mut config = Config::from_env();
    if let Some(host) = options.host {
        config.server.host = host;
    }
    if let Some(port) = options.port {
        config.server.port = port;
    }
    if let Some(level) = options.log_level {
        config.log_level = level.into();
    }

    GatewayLogger::init(config.log_level.to_level_filter())?;

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return Err(e.into());
    }

    info!(
        "Starting Translation API v{}",
        env!("CARGO_PKG_VERSION")
    );

    let result = server::run(config).await;

    info!("Shutting down application");

    result
}
