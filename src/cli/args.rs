//! CLI argument definitions
//!
//! Every flag is optional; whatever is still missing after merging the config
//! file is asked for interactively.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::api::ClientOptions;
use crate::config::Config;
use crate::consts::{
    DEFAULT_BASE_URL, DEFAULT_MAX_PAGES, DEFAULT_OUTPUT_FILE, DEFAULT_PER_PAGE,
    DEFAULT_REQUEST_DELAY, MAX_PER_PAGE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
    /// Lifetime total and unique scans per QR code
    AllTime,
    /// Daily scans between --start and --end
    Range,
}

impl fmt::Display for ModeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeArg::AllTime => write!(f, "All-time totals"),
            ModeArg::Range => write!(f, "Between a date range"),
        }
    }
}

#[derive(Debug, Default, Parser)]
#[command(name = "qrstats")]
#[command(about = "Export QR code scan statistics to CSV", version)]
pub(crate) struct Cli {
    /// API key for the QR Code Generator API
    #[arg(long, env = "QRSTATS_API_KEY", hide_env_values = true)]
    pub(crate) api_key: Option<String>,

    /// Statistics type (prompted for when omitted)
    #[arg(short, long, value_enum)]
    pub(crate) mode: Option<ModeArg>,

    /// First day of the range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub(crate) start: Option<String>,

    /// Last day of the range, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub(crate) end: Option<String>,

    /// Output CSV path [default: qr_code_statistics.csv]
    #[arg(short, long, value_name = "FILE")]
    pub(crate) output: Option<PathBuf>,

    /// API root URL
    #[arg(long, value_name = "URL")]
    pub(crate) base_url: Option<String>,

    /// Minimum delay between API requests in milliseconds [default: 120]
    #[arg(long, value_name = "MS")]
    pub(crate) delay_ms: Option<u64>,

    /// Stop listing after this many pages [default: 10000]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) max_pages: Option<u32>,

    /// QR codes requested per list page, at most 50 [default: 50]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=MAX_PER_PAGE as i64))]
    pub(crate) per_page: Option<u32>,

    /// Enable debug output (request URLs, config lookup)
    #[arg(long)]
    pub(crate) debug: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub(crate) quiet: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.api_key.is_none() {
            self.api_key = config.api_key.clone();
        }
        if self.base_url.is_none() {
            self.base_url = config.base_url.clone();
        }
        if self.output.is_none() {
            self.output = config.output.clone();
        }
        self.delay_ms = self.delay_ms.or(config.delay_ms);
        // Out-of-range page settings are treated as unset
        self.max_pages = self.max_pages.or(config.max_pages.filter(|&n| n > 0));
        self.per_page = self
            .per_page
            .or(config.per_page.filter(|&n| (1..=MAX_PER_PAGE).contains(&n)));
        self
    }

    pub(crate) fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub(crate) fn output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE))
    }

    pub(crate) fn client_options(&self) -> ClientOptions {
        ClientOptions {
            per_page: self.per_page.unwrap_or(DEFAULT_PER_PAGE),
            max_pages: self.max_pages.unwrap_or(DEFAULT_MAX_PAGES),
            request_delay: self
                .delay_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_REQUEST_DELAY),
        }
    }
}
