pub mod scanline;

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::{debug, error, info};
use std::io::{self, Read, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompressionError {
    #[error("Deflate stream failed")]
    DeflateFailed(#[source] io::Error),
}

#[derive(Error, Debug)]
pub enum DecompressionError {
    #[error("Inflate stream failed")]
    InflateFailed(#[source] io::Error),
}

/// Zlib-wraps `data` at the highest compression level.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    info!("Starting compression");
    debug!("Input data length: {}", data.len());

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data).map_err(|e| {
        error!("Deflate write failed: {}", e);
        CompressionError::DeflateFailed(e)
    })?;
    let compressed = encoder.finish().map_err(|e| {
        error!("Deflate finish failed: {}", e);
        CompressionError::DeflateFailed(e)
    })?;

    info!(
        "Compression completed successfully: {} -> {} bytes",
        data.len(),
        compressed.len()
    );

    Ok(compressed)
}

/// Inflates at most `limit + 1` bytes of `data`. A result longer than `limit`
/// means the stream holds more than the caller expects.
pub fn decompress(data: &[u8], limit: usize) -> Result<Vec<u8>, DecompressionError> {
    info!("Starting decompression");
    debug!("Input data length: {}, limit: {}", data.len(), limit);

    let mut inflated = Vec::new();
    ZlibDecoder::new(data)
        .take(limit as u64 + 1)
        .read_to_end(&mut inflated)
        .map_err(|e| {
            error!("Inflate failed: {}", e);
            DecompressionError::InflateFailed(e)
        })?;

    if inflated.len() > limit {
        debug!("Inflated data exceeds {} bytes, stopped early", limit);
    }
    info!("Decompression completed successfully: {} bytes", inflated.len());

    Ok(inflated)
}
