use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use assistant_engine::AskSettings;
use clap::Parser;
use url::Url;

use super::logging::{LogDestination, LogSettings};

/// Ask Penn National Insurance questions from the terminal.
#[derive(Debug, Parser)]
#[command(name = "assistant", version, about)]
pub struct Cli {
    /// Base address of the question-answering backend, e.g. http://localhost:8081
    #[arg(long, env = "ASSISTANT_API_URL")]
    pub api_url: String,

    /// Seconds allowed for establishing the connection.
    #[arg(long, default_value_t = 10)]
    pub connect_timeout_secs: u64,

    /// Seconds allowed for the whole question round trip.
    #[arg(long, default_value_t = 60)]
    pub request_timeout_secs: u64,

    /// Largest response body accepted from the backend.
    #[arg(long, default_value_t = 5 * 1024 * 1024)]
    pub max_response_bytes: u64,

    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log_destination: LogDestination,

    #[arg(long, default_value = "assistant.log")]
    pub log_file: PathBuf,

    /// One of off, error, warn, info, debug, trace.
    #[arg(long, env = "ASSISTANT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ask: AskSettings,
    pub log: LogSettings,
}

impl AppConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let base_url = Url::parse(cli.api_url.trim())
            .with_context(|| format!("invalid backend url {:?}", cli.api_url))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            bail!(
                "backend url must use http or https, got {:?}",
                base_url.scheme()
            );
        }
        if cli.max_response_bytes == 0 {
            bail!("--max-response-bytes must be greater than zero");
        }
        let Some(level) = assistant_logging::parse_level(&cli.log_level) else {
            bail!("unknown log level {:?}", cli.log_level);
        };

        let ask = AskSettings {
            connect_timeout: Duration::from_secs(cli.connect_timeout_secs),
            request_timeout: Duration::from_secs(cli.request_timeout_secs),
            max_bytes: cli.max_response_bytes,
            ..AskSettings::new(base_url)
        };

        Ok(Self {
            ask,
            log: LogSettings {
                destination: cli.log_destination,
                level,
                file: cli.log_file,
            },
        })
    }
}
