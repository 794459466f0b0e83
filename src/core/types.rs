//! Run-level types chosen before any request is made

use chrono::NaiveDate;

use crate::error::AppError;
use crate::utils::{format_date, parse_date};

/// Inclusive calendar date range for daily scan buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Parse both ends as YYYY-MM-DD; ordering is left to the API
    pub(crate) fn parse(start: &str, end: &str) -> Result<Self, AppError> {
        Ok(Self {
            start: parse_date(start)?,
            end: parse_date(end)?,
        })
    }

    pub(crate) fn start_param(&self) -> String {
        format_date(self.start)
    }

    pub(crate) fn end_param(&self) -> String {
        format_date(self.end)
    }
}

/// Which statistics to export; fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatsMode {
    /// Lifetime total/unique per QR code
    AllTime,
    /// Daily buckets within a date range
    Range(DateRange),
}
