//! heatsink-network: junction temperature of a die under a finned heat sink.
//!
//! Reads a JSON request of named SI parameters and prints a JSON report of
//! the full thermal resistance network.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;
use tracing::{Level, debug, error};
use tracing_subscriber::EnvFilter;

use heatsink_network::api::{self, AnalysisRequest, ErrorReport, RequestError, RequestSource};

/// Thermal resistance network calculator for forced-air heat sinks.
#[derive(Parser, Debug)]
#[command(name = "heatsink-network")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the junction temperature and every intermediate value
    Analyze(RequestArgs),

    /// Find the largest power that keeps the junction at or below a limit
    SizePower {
        #[command(flatten)]
        request: RequestArgs,

        /// Junction temperature limit (°C)
        #[arg(long, value_name = "CELSIUS")]
        limit: f64,
    },

    /// Find the air velocity that brings the junction to a target
    SizeVelocity {
        #[command(flatten)]
        request: RequestArgs,

        /// Target junction temperature (°C)
        #[arg(long, value_name = "CELSIUS")]
        target: f64,
    },
}

#[derive(ClapArgs, Debug)]
struct RequestArgs {
    /// JSON request file, or `-` for stdin (stdin when omitted)
    #[arg(value_name = "REQUEST")]
    request: Option<PathBuf>,

    /// Use the reference configuration instead of reading a request
    #[arg(long, conflicts_with = "request")]
    defaults: bool,
}

impl RequestArgs {
    fn load(&self) -> Result<AnalysisRequest, RequestError> {
        let source = RequestSource::from_arg(self.request.as_deref(), self.defaults);
        debug!(source = ?source, "loading request");
        source.load()
    }
}

/// Determines the log level from CLI arguments.
fn get_log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: &Command) -> Result<String, RequestError> {
    match command {
        Command::Analyze(request) => to_json(&api::analyze(&request.load()?)?),
        Command::SizePower { request, limit } => {
            to_json(&api::size_power(&request.load()?, *limit)?)
        }
        Command::SizeVelocity { request, target } => {
            to_json(&api::size_velocity(&request.load()?, *target)?)
        }
    }
}

fn to_json(report: &impl Serialize) -> Result<String, RequestError> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(get_log_level(args.verbose, args.quiet));

    match run(&args.command) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "analysis failed");
            let report = ErrorReport::from(&e);
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(_) => println!("{{\"kind\":\"{}\"}}", report.kind),
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn parses_sizing_subcommands() {
        let args =
            Args::try_parse_from(["heatsink-network", "size-power", "--defaults", "--limit", "95"])
                .unwrap();
        assert!(matches!(
            args.command,
            Command::SizePower { ref request, limit } if request.defaults && limit == 95.0
        ));

        let args = Args::try_parse_from(["heatsink-network", "-vv", "analyze", "-"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.command, Command::Analyze(RequestArgs { ref request, .. })
            if request.as_deref() == Some(std::path::Path::new("-"))));
    }

    #[test]
    fn defaults_conflicts_with_a_request_file() {
        let parsed =
            Args::try_parse_from(["heatsink-network", "analyze", "board.json", "--defaults"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn log_levels() {
        assert_eq!(get_log_level(3, true), Level::ERROR);
        assert_eq!(get_log_level(0, false), Level::WARN);
        assert_eq!(get_log_level(2, false), Level::DEBUG);
    }
}
