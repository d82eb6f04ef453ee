use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ScrapeResult;
use crate::listing::ListingRecord;

/// Write records as a pretty-printed JSON array, replacing `path`
pub fn write_json(records: &[ListingRecord], path: &Path) -> ScrapeResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
