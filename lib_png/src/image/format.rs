use crate::constants::{
    BIT_DEPTH, BYTES_PER_PIXEL, COLOR_TYPE_RGB, COMPRESSION_METHOD, FILTER_METHOD, ICON_COLOR,
    INTERLACE_METHOD, MAX_DIMENSION,
};

pub type Rgb = [u8; 3];

/// A square image filled with a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image {
    pub size: u32,
    pub color: Rgb,
}

impl Image {
    pub fn new(size: u32, color: Rgb) -> Self {
        Self { size, color }
    }

    pub fn icon(size: u32) -> Self {
        Self::new(size, ICON_COLOR)
    }

    /// Bytes in one filtered scanline: the filter byte plus the RGB samples.
    /// `None` when the row does not fit in memory.
    pub fn scanline_len(&self) -> Option<usize> {
        (self.size as usize)
            .checked_mul(BYTES_PER_PIXEL)?
            .checked_add(1)
    }

    /// Uncompressed length of the IDAT stream, `size * (1 + 3 * size)`.
    pub fn raw_len(&self) -> Option<usize> {
        raw_len(self.size, self.size)
    }
}

/// Length of `height` filtered rows of `width` RGB pixels, or `None` when it
/// cannot be held in a single allocation.
pub fn raw_len(width: u32, height: u32) -> Option<usize> {
    let len = (width as usize)
        .checked_mul(BYTES_PER_PIXEL)?
        .checked_add(1)?
        .checked_mul(height as usize)?;
    (len <= isize::MAX as usize).then_some(len)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub compression_method: u8,
    pub filter_method: u8,
    pub interlace_method: u8,
}

impl Header {
    pub const SIZE: usize = 13;

    pub fn for_image(image: &Image) -> Self {
        Self {
            width: image.size,
            height: image.size,
            bit_depth: BIT_DEPTH,
            color_type: COLOR_TYPE_RGB,
            compression_method: COMPRESSION_METHOD,
            filter_method: FILTER_METHOD,
            interlace_method: INTERLACE_METHOD,
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.width.to_be_bytes());
        bytes[4..8].copy_from_slice(&self.height.to_be_bytes());
        bytes[8] = self.bit_depth;
        bytes[9] = self.color_type;
        bytes[10] = self.compression_method;
        bytes[11] = self.filter_method;
        bytes[12] = self.interlace_method;
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::SIZE {
            return None;
        }

        Some(Self {
            width: u32::from_be_bytes(bytes[0..4].try_into().ok()?),
            height: u32::from_be_bytes(bytes[4..8].try_into().ok()?),
            bit_depth: bytes[8],
            color_type: bytes[9],
            compression_method: bytes[10],
            filter_method: bytes[11],
            interlace_method: bytes[12],
        })
    }

    /// Both dimensions within `1..=2^31-1`.
    pub fn has_valid_dimensions(&self) -> bool {
        (1..=MAX_DIMENSION).contains(&self.width) && (1..=MAX_DIMENSION).contains(&self.height)
    }

    /// True when the header describes the only layout this crate writes.
    pub fn is_plain_rgb8(&self) -> bool {
        self.bit_depth == BIT_DEPTH
            && self.color_type == COLOR_TYPE_RGB
            && self.compression_method == COMPRESSION_METHOD
            && self.filter_method == FILTER_METHOD
            && self.interlace_method == INTERLACE_METHOD
    }
}
