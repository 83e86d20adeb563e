use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "csv2geojson")]
#[command(version = "0.1")]
#[command(about = "Convert tabular point data into a GeoJSON feature collection", long_about = None)]
pub enum Cli {
    Convert(ConvertArgs),
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Input CSV file with a header row
    pub csv_file: PathBuf,
    /// Output GeoJSON file
    pub geojson_file: PathBuf,
    /// Name of the latitude column
    pub lat_column: String,
    /// Name of the longitude column
    pub lon_column: String,
}
