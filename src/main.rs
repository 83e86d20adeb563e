use clap::error::ErrorKind;
use clap::Parser;
use csv2geojson::cli::Cli;
use csv2geojson::convert;
use log::error;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            std::process::exit(0)
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(1)
        }
    };

    let result = match args {
        Cli::Convert(args) => convert::process_command(args),
    };

    if let Err(err) = result {
        error!("{}", err);
        std::process::exit(1)
    }
}
