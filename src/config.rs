use crate::api::client::DEFAULT_BASE_URL;
use clap::Parser;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "places-dashboard")]
#[command(version)]
#[command(about = "Terminal dashboard of categories and nearby places", long_about = None)]
pub struct Cli {
    /// Base URL of the places API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Per-request timeout in seconds; unset means the transport default
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    /// Log file (the terminal is owned by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("places-dashboard.log"))
    }
}

/// Sends `log` output to the log file. `RUST_LOG` still overrides the level.
pub fn init_logging(cli: &Cli) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(cli.log_path())?;
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_places_api() {
        let cli = Cli::parse_from(["places-dashboard"]);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.timeout(), None);
        assert!(cli.log_path().ends_with("places-dashboard.log"));
        assert!(!cli.verbose);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "places-dashboard",
            "--base-url",
            "http://localhost:8000",
            "--timeout-secs",
            "5",
            "-v",
        ]);
        assert_eq!(cli.base_url, "http://localhost:8000");
        assert_eq!(cli.timeout(), Some(Duration::from_secs(5)));
        assert!(cli.verbose);
    }
}
