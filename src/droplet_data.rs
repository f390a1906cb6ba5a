//! Loading droplet-diameter measurements from the delimited text file
//! produced by droplet imaging: a single column headed `Diameter (um)`,
//! one positive real per row.

use crate::constants::DIAMETER_COLUMN_HEADER;
use crate::droplet::DropletSample;
use crate::error::ModelError;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

/// Load droplet diameters from a measurement file.
pub fn load_droplet_samples<P: AsRef<Path>>(path: P) -> Result<Vec<DropletSample>, ModelError> {
    let path = path.as_ref();
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| {
            ModelError::InvalidInput(format!(
                "failed to open droplet data file {}: {}",
                path.display(),
                e
            ))
        })?;
    read_samples(reader)
}

/// Load droplet diameters from any reader carrying the same format.
pub fn load_droplet_samples_from_reader<R: Read>(
    source: R,
) -> Result<Vec<DropletSample>, ModelError> {
    let reader = ReaderBuilder::new().has_headers(true).from_reader(source);
    read_samples(reader)
}

fn read_samples<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<DropletSample>, ModelError> {
    let headers = reader
        .headers()
        .map_err(|e| ModelError::InvalidInput(format!("failed to read header row: {}", e)))?;

    let column = headers
        .iter()
        .position(|h| h.trim() == DIAMETER_COLUMN_HEADER)
        .ok_or_else(|| {
            ModelError::InvalidInput(format!(
                "droplet data file must have a '{}' column, found headers: {:?}",
                DIAMETER_COLUMN_HEADER, headers
            ))
        })?;

    let mut samples = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| {
            ModelError::InvalidInput(format!("failed to read record {}: {}", row + 1, e))
        })?;
        let field = record.get(column).ok_or_else(|| {
            ModelError::InvalidInput(format!("record {} is missing the diameter field", row + 1))
        })?;
        let diameter: f64 = field.trim().parse().map_err(|_| {
            ModelError::InvalidInput(format!(
                "record {}: '{}' is not a valid diameter",
                row + 1,
                field
            ))
        })?;
        samples.push(DropletSample::new(diameter)?);
    }

    if samples.is_empty() {
        return Err(ModelError::InvalidInput(
            "droplet data file contains no measurements".to_string(),
        ));
    }

    Ok(samples)
}
