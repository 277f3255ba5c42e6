use super::format::{self, Header, Rgb};
use crate::chunk::{Chunk, ChunkError};
use crate::compression::scanline::{self, ScanlineError};
use crate::compression::{decompress, DecompressionError};
use crate::constants::{BYTES_PER_PIXEL, IDAT, IEND, IHDR, LENGTH_OF_SIGNATURE, SIGNATURE};
use log::{debug, error, info};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Missing or invalid PNG signature")]
    InvalidSignature,
    #[error("Malformed chunk stream")]
    Chunk(#[from] ChunkError),
    #[error("Expected {expected} chunk, found {found}")]
    UnexpectedChunk {
        expected: &'static str,
        found: String,
    },
    #[error("Missing {0} chunk")]
    MissingChunk(&'static str),
    #[error("IEND chunk carries {0} bytes of payload")]
    NonEmptyEnd(usize),
    #[error("IHDR payload is {0} bytes, expected 13")]
    InvalidHeader(usize),
    #[error("Invalid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Unsupported pixel format: {0:?}")]
    UnsupportedFormat(Header),
    #[error("Image of {width}x{height} does not fit in memory")]
    ImageTooLarge { width: u32, height: u32 },
    #[error("Decompression failed")]
    DecompressionFailed(#[from] DecompressionError),
    #[error("Invalid scanline data")]
    Scanline(#[from] ScanlineError),
}

/// A PNG read back into packed RGB samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// The color shared by every pixel, or `None` if any pixel differs.
    pub fn uniform_color(&self) -> Option<Rgb> {
        let mut samples = self.pixels.chunks_exact(BYTES_PER_PIXEL);
        let first = samples.next()?;
        if samples.all(|pixel| pixel == first) {
            Some([first[0], first[1], first[2]])
        } else {
            None
        }
    }
}

/// Reads a stream laid out the way [`encode`](super::encode) writes it.
pub fn decode(encoded_data: &[u8]) -> Result<DecodedImage, DecodeError> {
    if !encoded_data.starts_with(&SIGNATURE) {
        error!("Invalid format or missing PNG signature");
        return Err(DecodeError::InvalidSignature);
    }
    debug!("Signature validated successfully");

    let chunks = Chunk::read_all(&encoded_data[LENGTH_OF_SIGNATURE..])?;
    let mut chunks = chunks.iter();

    // IHDR comes first
    let ihdr = chunks.next().ok_or(DecodeError::MissingChunk("IHDR"))?;
    expect_type(ihdr, IHDR, "IHDR")?;
    let header = Header::from_bytes(&ihdr.data).ok_or_else(|| {
        error!("IHDR payload has {} bytes", ihdr.data.len());
        DecodeError::InvalidHeader(ihdr.data.len())
    })?;
    if !header.is_plain_rgb8() {
        error!("Unsupported header: {:?}", header);
        return Err(DecodeError::UnsupportedFormat(header));
    }
    if !header.has_valid_dimensions() {
        error!(
            "Invalid dimensions in header: {}x{}",
            header.width, header.height
        );
        return Err(DecodeError::InvalidDimensions {
            width: header.width,
            height: header.height,
        });
    }
    debug!(
        "Image dimensions read: width={} height={}",
        header.width, header.height
    );

    // One or more IDAT, then IEND
    let mut compressed = Vec::new();
    let mut idat_count = 0;
    let end = loop {
        let chunk = chunks.next().ok_or(DecodeError::MissingChunk("IEND"))?;
        if chunk.chunk_type == IDAT {
            compressed.extend_from_slice(&chunk.data);
            idat_count += 1;
        } else {
            break chunk;
        }
    };
    if idat_count == 0 {
        error!("No IDAT chunk before {}", end.type_name());
        return Err(DecodeError::MissingChunk("IDAT"));
    }
    expect_type(end, IEND, "IEND")?;
    if !end.data.is_empty() {
        error!("IEND carries {} bytes", end.data.len());
        return Err(DecodeError::NonEmptyEnd(end.data.len()));
    }
    if let Some(extra) = chunks.next() {
        error!("Chunk {} follows IEND", extra.type_name());
        return Err(DecodeError::UnexpectedChunk {
            expected: "end of stream",
            found: extra.type_name(),
        });
    }
    debug!(
        "Collected {} bytes from {} IDAT chunk(s)",
        compressed.len(),
        idat_count
    );

    let raw_len = format::raw_len(header.width, header.height).ok_or_else(|| {
        error!(
            "{}x{} image does not fit in memory",
            header.width, header.height
        );
        DecodeError::ImageTooLarge {
            width: header.width,
            height: header.height,
        }
    })?;
    let (width, height) = (header.width as usize, header.height as usize);

    let raw = decompress(&compressed, raw_len)?;
    let pixels = scanline::unfilter(&raw, width, height).map_err(|e| {
        error!("Scanline check failed: {}", e);
        e
    })?;
    info!("Decoded {}x{} image", header.width, header.height);

    Ok(DecodedImage {
        width: header.width,
        height: header.height,
        bit_depth: header.bit_depth,
        color_type: header.color_type,
        pixels,
    })
}

fn expect_type(chunk: &Chunk, chunk_type: [u8; 4], name: &'static str) -> Result<(), DecodeError> {
    if chunk.chunk_type != chunk_type {
        error!("Expected {} chunk, found {}", name, chunk.type_name());
        return Err(DecodeError::UnexpectedChunk {
            expected: name,
            found: chunk.type_name(),
        });
    }
    Ok(())
}
