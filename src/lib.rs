//! Convert tabular point data (a CSV file with latitude/longitude columns)
//! into a GeoJSON feature collection.
//!
//! Rows with a missing, empty or non-numeric coordinate field are dropped
//! with a warning; everything else becomes a `Point` feature carrying the
//! full row as properties.

pub mod cli;
pub mod convert;
pub mod error;
pub mod geojson;

pub use error::{Error, Result};
