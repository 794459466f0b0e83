//! QR Code Generator API client
//!
//! A blocking, paced client over a swappable `Transport`: the real one speaks
//! HTTP through ureq, tests script responses.

mod client;
mod pacer;
mod transport;
mod types;

pub(crate) use client::{ApiClient, ClientOptions};
pub(crate) use transport::HttpTransport;
pub(crate) use types::{AggregateStats, Count, Item, ScanEntry, SeriesStats};
