use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot read input file {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {path} as CSV: {source}")]
    ParseCsv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Input file {path} has no header row")]
    MissingHeader { path: String },

    #[error("Cannot serialize feature collection: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot write output file {path}: {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
