use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::core::DateRange;
use crate::error::AppError;
use crate::export::StatsSource;

use super::pacer::Pacer;
use super::transport::Transport;
use super::types::{AggregateStats, Item, ItemPage, SeriesStats};

/// Paging and pacing knobs for one run
#[derive(Debug, Clone, Copy)]
pub(crate) struct ClientOptions {
    pub(crate) per_page: u32,
    pub(crate) max_pages: u32,
    pub(crate) request_delay: Duration,
}

/// Every QR code returned by the list endpoint, in server order
#[derive(Debug, Default)]
pub(crate) struct Listing {
    pub(crate) items: Vec<Item>,
    pub(crate) pages: u32,
    /// Stopped at `max_pages` while the server still had more
    pub(crate) truncated: bool,
}

pub(crate) struct ApiClient<T> {
    transport: T,
    pacer: Pacer,
    options: ClientOptions,
}

impl<T: Transport> ApiClient<T> {
    pub(crate) fn new(transport: T, options: ClientOptions) -> Self {
        Self {
            transport,
            pacer: Pacer::new(options.request_delay),
            options,
        }
    }

    fn fetch<R: DeserializeOwned>(
        &mut self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<R, AppError> {
        self.pacer.wait();
        let body = self.transport.get_json(path, query)?;
        serde_json::from_value(body).map_err(|source| AppError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }

    /// Walk the cursor-paginated list endpoint to the end
    pub(crate) fn list_items(&mut self) -> Result<Listing, AppError> {
        let per_page = self.options.per_page.to_string();
        let mut listing = Listing::default();
        let mut cursor: Option<String> = None;

        loop {
            let page: ItemPage = {
                let mut query = vec![("perPage", per_page.as_str())];
                if let Some(c) = cursor.as_deref() {
                    query.push(("cursor", c));
                }
                self.fetch("/qrcodes", &query)?
            };

            listing.items.extend(page.data);
            listing.pages += 1;
            log::info!(
                "Fetched page {} | Total codes so far: {}",
                listing.pages,
                listing.items.len()
            );

            let Some(next) = page.pagination.continuation() else {
                break;
            };
            if listing.pages >= self.options.max_pages {
                log::warn!(
                    "Pagination safeguard triggered after {} pages; results are incomplete",
                    listing.pages
                );
                listing.truncated = true;
                break;
            }
            cursor = Some(next.to_string());
        }

        Ok(listing)
    }

    pub(crate) fn total_scans(&mut self, id: &str) -> Result<AggregateStats, AppError> {
        self.fetch(&format!("/qrcodes/{id}/scans/total"), &[])
    }

    pub(crate) fn range_scans(
        &mut self,
        id: &str,
        range: &DateRange,
    ) -> Result<SeriesStats, AppError> {
        let start = range.start_param();
        let end = range.end_param();
        self.fetch(
            &format!("/qrcodes/{id}/scans/totals"),
            &[
                ("startDate", start.as_str()),
                ("endDate", end.as_str()),
                ("interval", "day"),
            ],
        )
    }
}

impl<T: Transport> StatsSource for ApiClient<T> {
    fn aggregate(&mut self, id: &str) -> Result<AggregateStats, AppError> {
        self.total_scans(id)
    }

    fn series(&mut self, id: &str, range: &DateRange) -> Result<SeriesStats, AppError> {
        self.range_scans(id, range)
    }
}
