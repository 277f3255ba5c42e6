use log::{error, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{FILE_EXT, ICON_FILE_PREFIX};
use crate::image::encoder::EncodingError;
use crate::image::encode;
use crate::image::format::Image;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to encode image")]
    Encoding(#[from] EncodingError),

    #[error("Failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// `<dir>/icon-<size>.png`
pub fn icon_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(format!("{}{}.{}", ICON_FILE_PREFIX, size, FILE_EXT))
}

/// Writes a `size`x`size` icon in the default color to `path`, replacing any
/// existing file.
pub fn emit(size: u32, path: &Path) -> Result<(), EmitError> {
    emit_image(&Image::icon(size), path)
}

pub fn emit_image(image: &Image, path: &Path) -> Result<(), EmitError> {
    let encoded_data = encode(image)?;

    fs::write(path, &encoded_data).map_err(|source| {
        error!("Could not write {}: {}", path.display(), source);
        EmitError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!(
        "Wrote {} bytes to {}",
        encoded_data.len(),
        path.display()
    );
    println!("Created {} ({}x{})", path.display(), image.size, image.size);

    Ok(())
}
