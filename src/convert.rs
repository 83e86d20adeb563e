use crate::cli::ConvertArgs;
use crate::error::{Error, Result};
use crate::geojson::{Feature, FeatureCollection};
use log::{info, warn};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

/// One parsed input row: trimmed column name to trimmed string value.
pub type Record = Map<String, Value>;

const BOM: char = '\u{feff}';

/// Why a row was dropped instead of converted.
#[derive(Debug, PartialEq)]
pub enum SkipReason {
    MissingColumn(String),
    EmptyValue(String),
    NotNumeric { column: String, message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumn(column) => write!(f, "column '{column}' is missing"),
            Self::EmptyValue(column) => write!(f, "column '{column}' is empty"),
            Self::NotNumeric { column, message } => {
                write!(f, "column '{column}' is not numeric: {message}")
            }
        }
    }
}

/// Reads the whole input file, strips a leading byte-order marker and
/// parses the remainder as comma-delimited records with a header row.
/// Keys and values are trimmed; duplicate post-trim column names resolve
/// last-value-wins.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.display().to_string(),
        source,
    })?;
    let text = text.strip_prefix(BOM).unwrap_or(&text);

    let parse_error = |source| Error::ParseCsv {
        path: path.display().to_string(),
        source,
    };

    // Flexible so a short row parses; its absent trailing columns are
    // reported per-row by the converter instead of aborting the run.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(parse_error)?;
    if headers.is_empty() {
        return Err(Error::MissingHeader {
            path: path.display().to_string(),
        });
    }
    let headers: Vec<String> = headers.iter().map(|name| name.trim().to_string()).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(parse_error)?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.clone(), Value::String(value.trim().to_string())))
            .collect();
        records.push(record);
    }

    Ok(records)
}

fn coordinate(record: &Record, column: &str) -> std::result::Result<f64, SkipReason> {
    let value = match record.get(column) {
        Some(value) => value.as_str().unwrap_or_default(),
        None => return Err(SkipReason::MissingColumn(column.to_string())),
    };

    if value.is_empty() {
        return Err(SkipReason::EmptyValue(column.to_string()));
    }

    let number = value.parse::<f64>().map_err(|err| SkipReason::NotNumeric {
        column: column.to_string(),
        message: err.to_string(),
    })?;

    // "NaN" and "inf" parse as f64 but are not valid GeoJSON coordinates.
    if !number.is_finite() {
        return Err(SkipReason::NotNumeric {
            column: column.to_string(),
            message: format!("'{value}' is not a finite number"),
        });
    }

    Ok(number)
}

/// Builds point features from parsed records, in input order. A row whose
/// coordinate fields are missing, empty or non-numeric is dropped with a
/// warning; the remaining rows are unaffected.
pub fn records_to_features(
    records: Vec<Record>,
    lat_column: &str,
    lon_column: &str,
) -> FeatureCollection {
    let features = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let lat = coordinate(&record, lat_column);
            let lon = coordinate(&record, lon_column);

            match (lat, lon) {
                (Ok(lat), Ok(lon)) => Some(Feature::point(lon, lat, record)),
                (Err(reason), _) | (_, Err(reason)) => {
                    warn!(
                        "Skipping row {}: {}: {}",
                        index + 1,
                        reason,
                        Value::Object(record)
                    );
                    None
                }
            }
        })
        .collect();

    FeatureCollection::new(features)
}

pub fn process_command(args: ConvertArgs) -> Result<()> {
    let records = read_records(&args.csv_file)?;
    let total = records.len();

    let collection = records_to_features(records, &args.lat_column, &args.lon_column);
    let kept = collection.features.len();
    if kept < total {
        info!("Dropped {} of {} rows", total - kept, total);
    }

    collection.write_pretty(&args.geojson_file)?;

    info!(
        "Converted {} into {} ({} features)",
        args.csv_file.display(),
        args.geojson_file.display(),
        kept
    );

    Ok(())
}
