use log::{debug, error, info};
use thiserror::Error;

use super::format::{Header, Image};
use crate::chunk::{Chunk, ChunkError};
use crate::compression::{compress, scanline, CompressionError};
use crate::constants::{IDAT, IEND, IHDR, MAX_DIMENSION, SIGNATURE};

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Image size must be at least 1 pixel")]
    InvalidSize,
    #[error("Image size {0} exceeds the PNG dimension limit")]
    ImageTooLarge(u32),
    #[error("Failed to compress image data")]
    CompressionFailed(#[from] CompressionError),
    #[error("Failed to frame chunk")]
    ChunkFailed(#[from] ChunkError),
}

/// Builds the complete PNG byte stream for `image`: signature, IHDR, IDAT, IEND.
pub fn encode(image: &Image) -> Result<Vec<u8>, EncodingError> {
    info!("Starting encoding of {0}x{0} image", image.size);

    if image.size == 0 {
        error!("Refusing to encode an image of size 0");
        return Err(EncodingError::InvalidSize);
    }
    if image.size > MAX_DIMENSION {
        error!("Image size {} exceeds {}", image.size, MAX_DIMENSION);
        return Err(EncodingError::ImageTooLarge(image.size));
    }
    let raw_len = image.raw_len().ok_or_else(|| {
        error!("Scanline data for size {} does not fit in memory", image.size);
        EncodingError::ImageTooLarge(image.size)
    })?;

    let mut encoded_data: Vec<u8> = Vec::new();

    // Step 1: Signature
    encoded_data.extend_from_slice(&SIGNATURE);

    // Step 2: Header
    let header = Header::for_image(image);
    Chunk::new(IHDR, header.to_bytes().to_vec()).write_to(&mut encoded_data)?;
    debug!("Header written: {:?}", header);

    // Step 3: Pixel data
    let size = image.size as usize;
    let raw = scanline::solid_scanlines(size, size, image.color);
    debug_assert_eq!(raw.len(), raw_len);
    let compressed = compress(&raw)?;
    debug!(
        "Scanlines compressed: {} -> {} bytes",
        raw.len(),
        compressed.len()
    );
    Chunk::new(IDAT, compressed).write_to(&mut encoded_data)?;

    // Step 4: Trailer
    Chunk::new(IEND, Vec::new()).write_to(&mut encoded_data)?;

    info!(
        "Encoding process completed successfully: {} bytes",
        encoded_data.len()
    );
    Ok(encoded_data)
}
