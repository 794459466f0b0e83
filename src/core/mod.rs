//! Core module - run configuration types

mod types;

pub(crate) use types::{DateRange, StatsMode};
