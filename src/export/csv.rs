use std::borrow::Cow;
use std::io::Write;

use crate::api::{AggregateStats, Item, ScanEntry, SeriesStats};
use crate::core::{DateRange, StatsMode};
use crate::error::AppError;

const ITEM_COLUMNS: [&str; 5] = ["QR ID", "Title", "Type", "Status", "Created At"];
const COUNT_COLUMNS: [&str; 2] = ["Total Scans", "Unique Scans"];
const DATE_COLUMN: &str = "Date";

/// Per-item statistics lookup used while writing rows
pub(crate) trait StatsSource {
    fn aggregate(&mut self, id: &str) -> Result<AggregateStats, AppError>;

    fn series(&mut self, id: &str, range: &DateRange) -> Result<SeriesStats, AppError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ExportSummary {
    pub(crate) items: usize,
    pub(crate) rows: usize,
}

fn csv_escape(s: &str) -> Cow<'_, str> {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(s)
    }
}

fn write_record<W: Write>(out: &mut W, fields: &[&str]) -> std::io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.write_all(b",")?;
        }
        out.write_all(csv_escape(field).as_bytes())?;
    }
    out.write_all(b"\r\n")
}

pub(crate) fn header(mode: &StatsMode) -> Vec<&'static str> {
    let mut columns = ITEM_COLUMNS.to_vec();
    if matches!(mode, StatsMode::Range(_)) {
        columns.push(DATE_COLUMN);
    }
    columns.extend(COUNT_COLUMNS);
    columns
}

fn item_fields(item: &Item) -> [&str; 5] {
    [
        item.id.as_str(),
        item.title.as_deref().unwrap_or_default(),
        item.kind.as_deref().unwrap_or_default(),
        item.status.as_deref().unwrap_or_default(),
        item.created_at.as_deref().unwrap_or_default(),
    ]
}

fn write_aggregate_row<W: Write>(
    out: &mut W,
    item: &Item,
    stats: &AggregateStats,
) -> std::io::Result<()> {
    let total = stats.total.text_or("");
    let unique = stats.unique.text_or("");
    let mut fields = item_fields(item).to_vec();
    fields.extend([total.as_str(), unique.as_str()]);
    write_record(out, &fields)
}

fn write_day_row<W: Write>(out: &mut W, item: &Item, entry: &ScanEntry) -> std::io::Result<()> {
    let total = entry.total.text_or("0");
    let unique = entry.unique.text_or("0");
    let mut fields = item_fields(item).to_vec();
    fields.extend([
        entry.time.as_deref().unwrap_or_default(),
        total.as_str(),
        unique.as_str(),
    ]);
    write_record(out, &fields)
}

/// Write the header and one row per item (all-time) or per active day (range).
///
/// Rows go out as soon as each item's statistics arrive, so a failed request
/// leaves everything written so far in place.
pub(crate) fn export<W, S>(
    out: &mut W,
    mode: &StatsMode,
    items: &[Item],
    stats: &mut S,
) -> Result<ExportSummary, AppError>
where
    W: Write,
    S: StatsSource + ?Sized,
{
    write_record(out, &header(mode))?;

    let mut summary = ExportSummary {
        items: items.len(),
        rows: 0,
    };
    for (index, item) in items.iter().enumerate() {
        log::info!("Processing {}/{} - QR ID: {}", index + 1, items.len(), item.id);

        match mode {
            StatsMode::AllTime => {
                let aggregate = stats.aggregate(&item.id)?;
                write_aggregate_row(out, item, &aggregate)?;
                summary.rows += 1;
            }
            StatsMode::Range(range) => {
                let series = stats.series(&item.id, range)?;
                for entry in series.scans.iter().filter(|e| e.has_activity()) {
                    write_day_row(out, item, entry)?;
                    summary.rows += 1;
                }
            }
        }
    }

    out.flush()?;
    Ok(summary)
}
