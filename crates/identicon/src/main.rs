//! identicon: generate symmetric pixel-art avatars from the command line.
//!
//! Each positional input produces one `<input>.png` file.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin identicon -- [OPTIONS] <INPUT>...
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use identicon_pipeline::IdenticonConfig;
use log::LevelFilter;

/// Generate identicons from arbitrary strings.
///
/// The same input always produces the same image. Files are written as
/// `<INPUT>.png`; the input is used verbatim as the file name.
#[derive(Parser)]
#[command(name = "identicon", version)]
struct Cli {
    /// Strings to derive identicons from.
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Side length of one grid cell in pixels.
    #[arg(
        long,
        default_value_t = IdenticonConfig::DEFAULT_CELL_SIZE,
        value_parser = clap::builder::RangedU64ValueParser::<u32>::new()
            .range(1..=u64::from(IdenticonConfig::MAX_CELL_SIZE)),
    )]
    cell_size: u32,

    /// Directory to write the PNG files into.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Full identicon config as a JSON string.
    ///
    /// When provided, `--cell-size` is ignored. The JSON must be a valid
    /// `IdenticonConfig` serialization; missing fields take defaults.
    #[arg(long)]
    config_json: Option<String>,

    /// Print a JSON summary of each identicon to stdout.
    #[arg(long)]
    json: bool,

    /// Log every pipeline stage.
    #[arg(short, long)]
    verbose: bool,
}

/// Build an [`IdenticonConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and the
/// individual parameter flags are ignored.
fn config_from_cli(cli: &Cli) -> Result<IdenticonConfig, String> {
    if let Some(ref json) = cli.config_json {
        let config: IdenticonConfig = serde_json::from_str(json)
            .map_err(|e| format!("Error parsing --config-json: {e}"))?;
        config
            .validate()
            .map_err(|e| format!("Error in --config-json: {e}"))?;
        return Ok(config);
    }

    Ok(IdenticonConfig {
        cell_size: cli.cell_size,
    })
}

fn init_logger(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("config: {config:?}");

    let mut failed = false;
    for input in &cli.inputs {
        match identicon_io::generate_identicon_with(input, &config, &cli.output_dir) {
            Ok((identicon, path)) => {
                if cli.json {
                    let mut summary = match serde_json::to_value(&identicon) {
                        Ok(value) => value,
                        Err(e) => {
                            eprintln!("Error serializing {input:?}: {e}");
                            return ExitCode::FAILURE;
                        }
                    };
                    summary["path"] = serde_json::Value::from(path.display().to_string());
                    println!("{summary}");
                } else {
                    println!("{}", path.display());
                }
            }
            Err(e) => {
                log::error!("{input:?}: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_give_default_config() {
        let cli = Cli::try_parse_from(["identicon", "hey ho"]).unwrap();
        assert_eq!(cli.inputs, ["hey ho"]);
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(config_from_cli(&cli).unwrap(), IdenticonConfig::default());
    }

    #[test]
    fn cell_size_flag_sets_config() {
        let cli = Cli::try_parse_from(["identicon", "--cell-size", "8", "a", "b"]).unwrap();
        assert_eq!(cli.inputs.len(), 2);
        assert_eq!(config_from_cli(&cli).unwrap().cell_size, 8);
    }

    #[test]
    fn zero_cell_size_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["identicon", "--cell-size", "0", "a"]).is_err());
    }

    #[test]
    fn at_least_one_input_is_required() {
        assert!(Cli::try_parse_from(["identicon"]).is_err());
    }

    #[test]
    fn config_json_overrides_flags() {
        let cli = Cli::try_parse_from([
            "identicon",
            "--cell-size",
            "8",
            "--config-json",
            r#"{"cell_size": 12}"#,
            "a",
        ])
        .unwrap();
        assert_eq!(config_from_cli(&cli).unwrap().cell_size, 12);
    }

    #[test]
    fn config_json_is_validated() {
        let cli =
            Cli::try_parse_from(["identicon", "--config-json", r#"{"cell_size": 0}"#, "a"])
                .unwrap();
        assert!(config_from_cli(&cli).is_err());
    }

    #[test]
    fn malformed_config_json_is_an_error() {
        let cli = Cli::try_parse_from(["identicon", "--config-json", "{", "a"]).unwrap();
        let err = config_from_cli(&cli).unwrap_err();
        assert!(err.starts_with("Error parsing --config-json"));
    }
}
