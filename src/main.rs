use clap::Parser;
use log::{error, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

/// Space Invaders duel bot: reads `state.json` from the harness output
/// directory and writes the chosen move to `move.txt`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Harness output directory containing state.json.
    output_dir: PathBuf,

    /// Seed for the dodge tie-break; defaults to a time-derived value.
    #[arg(long)]
    seed: Option<u32>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let seed = args.seed.unwrap_or_else(time_seed);
    match invaders_bot::runner::run_tick(&args.output_dir, seed) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("tick failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(0xDEADBEEF)
}
