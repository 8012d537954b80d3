//! CSV persistence for the two record collections.

use crate::error::EvregError;
use crate::model::{CountyRecord, IngestOutcome, ZipRecord};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const COUNTY_CSV: &str = "county_level_ev_counts.csv";
pub const ZIP_CSV: &str = "zip_level_ev_counts.csv";

const COUNTY_COLUMNS: [&str; 4] = ["Date", "County", "Count", "Source File"];
const ZIP_COLUMNS: [&str; 5] = ["Date", "City", "ZIP Code", "Count", "Source File"];

/// The header row is written up front so an empty dataset still has one.
fn write_records<'a, W, T, I>(writer: W, columns: &[&str], records: I) -> Result<(), EvregError>
where
    W: Write,
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(columns)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

fn read_records<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>, EvregError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

/// Columns: `Date,County,Count,Source File`.
pub fn write_county_csv<'a, W: Write>(
    writer: W,
    records: impl IntoIterator<Item = &'a CountyRecord>,
) -> Result<(), EvregError> {
    write_records(writer, &COUNTY_COLUMNS, records)
}

/// Columns: `Date,City,ZIP Code,Count,Source File`.
pub fn write_zip_csv<'a, W: Write>(
    writer: W,
    records: impl IntoIterator<Item = &'a ZipRecord>,
) -> Result<(), EvregError> {
    write_records(writer, &ZIP_COLUMNS, records)
}

pub fn read_county_csv<R: Read>(reader: R) -> Result<Vec<CountyRecord>, EvregError> {
    read_records(reader)
}

pub fn read_zip_csv<R: Read>(reader: R) -> Result<Vec<ZipRecord>, EvregError> {
    read_records(reader)
}

/// Write both datasets into `dir`, returning the county and ZIP file paths.
pub fn write_outputs(
    outcome: &IngestOutcome,
    dir: &Path,
) -> Result<(PathBuf, PathBuf), EvregError> {
    std::fs::create_dir_all(dir)?;

    let county_path = dir.join(COUNTY_CSV);
    write_county_csv(std::fs::File::create(&county_path)?, &outcome.county)?;

    let zip_path = dir.join(ZIP_CSV);
    write_zip_csv(std::fs::File::create(&zip_path)?, &outcome.zip)?;

    tracing::info!(
        county = %county_path.display(),
        zip = %zip_path.display(),
        "datasets written"
    );
    Ok((county_path, zip_path))
}
