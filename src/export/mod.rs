mod csv;

pub(crate) use csv::{ExportSummary, StatsSource, export};
