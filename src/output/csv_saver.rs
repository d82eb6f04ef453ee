//! CSV output for listing records

use std::path::Path;

use crate::error::ScrapeResult;
use crate::listing::ListingRecord;

/// Write a header row and one row per record, replacing `path`.
///
/// The header is written even when `records` is empty.
pub fn write_csv(records: &[ListingRecord], path: &Path) -> ScrapeResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(ListingRecord::COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read records back from a CSV written by [`write_csv`]
pub fn read_csv(path: &Path) -> ScrapeResult<Vec<ListingRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize::<ListingRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Header row of a CSV file
pub fn read_csv_header(path: &Path) -> ScrapeResult<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    Ok(reader.headers()?.iter().map(str::to_owned).collect())
}
