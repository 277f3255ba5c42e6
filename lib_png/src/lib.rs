pub mod chunk;
pub mod compression;
pub mod constants;
pub mod emit;
pub mod image;

use log::*;
use std::io::Write;

pub use crate::emit::{emit, emit_image, icon_path, EmitError};
pub use crate::image::format::{Image, Rgb};
pub use crate::image::{decode, encode};

pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_png"), level)
        .filter(Some("icon_gen"), level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
