use chrono::{DateTime, SecondsFormat};
use clap::{Parser, Subcommand};
use logutil::LogFormat;
use pqcore::encoding::Encoding;
use pqcore::{ColumnPath, Int96, PhysicalType};
use pqcore_error::{PqcoreError, Result, ResultExt};
use tracing::Level;

/// Inspect parquet physical type values.
#[derive(Parser, Debug)]
#[command(name = "pqinspect", version)]
struct Arguments {
    /// Default log level if RUST_LOG is not set.
    #[arg(long, global = true, default_value_t = Level::WARN)]
    log_level: Level,

    /// Emit logs as json.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a packed timestamp from its Julian day and nanosecond fields.
    Int96 {
        julian_day: u32,
        nanos_of_day: i64,
    },
    /// Encode an RFC 3339 timestamp as a packed timestamp.
    Int96From { timestamp: String },
    /// Render a dotted column path, optionally extending it.
    Path {
        path: String,
        #[arg(long = "extend")]
        extend: Vec<String>,
    },
    /// Print in-memory byte sizes for physical types.
    Sizes {
        /// Only print this type.
        #[arg(long = "type")]
        typ: Option<String>,
    },
    /// List encodings with their wire codes.
    Encodings,
}

fn main() {
    let args = Arguments::parse();
    let format = if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    logutil::configure_global_logger(args.log_level, format);

    if let Err(e) = run(args.command) {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Int96 {
            julian_day,
            nanos_of_day,
        } => {
            let v = Int96::from_parts(nanos_of_day, julian_day);
            tracing::debug!(?v, "decoding int96");
            let dt = v.to_datetime()?;
            println!("{}", dt.to_rfc3339_opts(SecondsFormat::Nanos, true));
        }
        Command::Int96From { timestamp } => {
            let dt = DateTime::parse_from_rfc3339(&timestamp)
                .context("Failed to parse timestamp")?;
            let v = Int96::from_datetime(&dt)?;
            let hex: String = v.to_le_bytes().iter().map(|b| format!("{b:02x}")).collect();
            println!(
                "julian_day={} nanos_of_day={} bytes={hex}",
                v.julian_day(),
                v.nanos_of_day()
            );
        }
        Command::Path { path, extend } => {
            let path = extend
                .into_iter()
                .fold(ColumnPath::parse(&path), |p, part| p.extend(part));
            println!("{path} ({} parts)", path.len());
        }
        Command::Sizes { typ } => {
            let types = match typ {
                Some(typ) => {
                    let typ: PhysicalType = typ.parse()?;
                    if !typ.is_defined() {
                        return Err(PqcoreError::new(
                            "Undefined physical type has no byte size",
                        ));
                    }
                    vec![typ]
                }
                None => PhysicalType::ALL.to_vec(),
            };
            for typ in types {
                println!("{typ}\t{}", typ.byte_size());
            }
        }
        Command::Encodings => {
            for enc in Encoding::ALL {
                println!("{enc}\t{}", enc.code());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn parse_path_extends() {
        let args = Arguments::try_parse_from([
            "pqinspect", "path", "a.b", "--extend", "c", "--extend", "d",
        ])
        .unwrap();
        match args.command {
            Command::Path { path, extend } => {
                assert_eq!("a.b", path);
                assert_eq!(vec!["c", "d"], extend);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn run_undefined_size_errors() {
        let err = run(Command::Sizes {
            typ: Some("undefined".to_string()),
        })
        .unwrap_err();
        assert!(err.get_msg().contains("Undefined"));
    }
}
