use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use markers_to_csv::{run, MarkersConfig};

const USAGE: &str = "Usage: markers_to_csv <input_file_path> <output_file_path>";

fn cli() -> Command {
    Command::new("markers_to_csv")
        .version("0.1.0")
        .about("Converts a markers listing text export into a CSV file")
        .override_usage("markers_to_csv <input_file_path> <output_file_path>")
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .num_args(1..)
                .allow_hyphen_values(true)
                .action(ArgAction::Append)
                .help("Input markers listing followed by the output CSV path"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue)
                .default_value("false"),
        )
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(_) => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let paths: Vec<PathBuf> = matches
        .get_many::<String>("paths")
        .unwrap_or_default()
        .map(PathBuf::from)
        .collect();
    let [input, output] = match <[PathBuf; 2]>::try_from(paths) {
        Ok(pair) => pair,
        Err(_) => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let config = MarkersConfig {
        input,
        output,
        verbose: matches.get_flag("verbose"),
    };
    init_logging(config.verbose);

    run(&config)?;
    Ok(())
}
