use std::time::Duration;

/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// QR Code Generator API root
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.qrcg.com/v3";

/// Output file written to the working directory unless overridden
pub(crate) const DEFAULT_OUTPUT_FILE: &str = "qr_code_statistics.csv";

/// Largest page the list endpoint serves
pub(crate) const MAX_PER_PAGE: u32 = 50;

/// Items requested per list page
pub(crate) const DEFAULT_PER_PAGE: u32 = MAX_PER_PAGE;

/// Upper bound on list pages fetched in one run
pub(crate) const DEFAULT_MAX_PAGES: u32 = 10_000;

/// Minimum gap between requests; the API allows 10 requests/sec
pub(crate) const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(120);
