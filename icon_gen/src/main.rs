mod generate;

use clap::Parser;
use lib_png::constants::{DEFAULT_OUT_DIR, DEFAULT_SIZES};
use log::error;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Writes solid-color square PNG icons.
#[derive(Parser, Debug)]
#[command(name = "icon-gen", version, about)]
pub struct Args {
    /// Directory the icons are written to. Must already exist.
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Edge length in pixels; repeat for several icons.
    #[arg(
        short,
        long = "size",
        value_name = "PIXELS",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(lib_png::constants::MAX_DIMENSION)),
        default_values_t = DEFAULT_SIZES
    )]
    pub sizes: Vec<u32>,

    /// Read each file back and check it after writing.
    #[arg(long)]
    pub verify: bool,

    /// Debug-level logging.
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    lib_png::init_logging(args.verbose);

    match generate::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprint!("{}", diagnostic(&e));
            ExitCode::FAILURE
        }
    }
}

/// The error followed by each of its causes, one per line.
fn diagnostic(err: &dyn Error) -> String {
    let mut text = format!("error: {}\n", err);
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(&format!("  caused by: {}\n", cause));
        source = cause.source();
    }
    text
}
