use lib_png::constants::ICON_COLOR;
use lib_png::image::decoder::DecodeError;
use lib_png::{decode, emit, icon_path, EmitError};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::Args;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Could not emit {size}x{size} icon")]
    Emit {
        size: u32,
        #[source]
        source: EmitError,
    },

    #[error("Could not read back {}", .path.display())]
    ReadBack {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a valid PNG", .path.display())]
    Verify {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("{}: expected {expected}x{expected} {color:02x?}, found {width}x{height} {found:02x?}", .path.display())]
    VerifyMismatch {
        path: PathBuf,
        expected: u32,
        color: [u8; 3],
        width: u32,
        height: u32,
        found: Option<[u8; 3]>,
    },
}

/// Emits every requested size in order, stopping at the first failure.
pub fn run(args: &Args) -> Result<(), GenerateError> {
    info!(
        "Generating {} icon(s) in {}",
        args.sizes.len(),
        args.out_dir.display()
    );

    for &size in &args.sizes {
        let path = icon_path(&args.out_dir, size);
        emit(size, &path).map_err(|source| GenerateError::Emit { size, source })?;

        if args.verify {
            verify(&path, size)?;
        }
    }

    Ok(())
}

/// Re-reads `path` and checks it is a `size`x`size` square of the icon color.
pub fn verify(path: &Path, size: u32) -> Result<(), GenerateError> {
    let bytes = fs::read(path).map_err(|source| GenerateError::ReadBack {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = decode(&bytes).map_err(|source| GenerateError::Verify {
        path: path.to_path_buf(),
        source,
    })?;

    let found = decoded.uniform_color();
    if decoded.width != size || decoded.height != size || found != Some(ICON_COLOR) {
        return Err(GenerateError::VerifyMismatch {
            path: path.to_path_buf(),
            expected: size,
            color: ICON_COLOR,
            width: decoded.width,
            height: decoded.height,
            found,
        });
    }
    debug!("Verified {}", path.display());

    Ok(())
}
