use chrono::Local;
use log::info;
use std::path::{Path, PathBuf};
use zscalerranges::{project, CloudRanges, Result};

/*-------------------------------------------------------------------------------------------------
  Save Cloud Ranges to CSV File
-------------------------------------------------------------------------------------------------*/

const CSV_FILENAME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Write one row per block to a timestamp-named CSV file in `directory` (or the working
/// directory when none is given). Values are quoted with a single-quote character, only where
/// needed. Returns the path written.
pub fn save(ranges: &CloudRanges, directory: Option<&Path>) -> Result<PathBuf> {
    let filename = format!("{}.csv", Local::now().format(CSV_FILENAME_FORMAT));
    let path = match directory {
        Some(directory) => directory.join(filename),
        None => PathBuf::from(filename),
    };

    let mut writer = csv::WriterBuilder::new().quote(b'\'').from_path(&path)?;

    writer.write_record(project::CSV_HEADER)?;
    for row in project::csv_rows(ranges)? {
        writer.write_record(&row)?;
    }
    writer.flush()?;

    info!("Wrote {} rows to {}", ranges.block_count(), path.display());
    Ok(path)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
