pub const FILE_EXT: &str = "png";

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub const LENGTH_OF_SIGNATURE: usize = SIGNATURE.len();
pub const LENGTH_OF_LENGTH_FIELD: usize = 4;
pub const LENGTH_OF_TYPE_FIELD: usize = 4;
pub const LENGTH_OF_CRC_FIELD: usize = 4;
pub const LENGTH_OF_FRAMING: usize =
    LENGTH_OF_LENGTH_FIELD + LENGTH_OF_TYPE_FIELD + LENGTH_OF_CRC_FIELD;

pub const IHDR: [u8; 4] = *b"IHDR";
pub const IDAT: [u8; 4] = *b"IDAT";
pub const IEND: [u8; 4] = *b"IEND";

pub const BIT_DEPTH: u8 = 8;
/// Truecolor, three samples per pixel.
pub const COLOR_TYPE_RGB: u8 = 2;
pub const COMPRESSION_METHOD: u8 = 0;
pub const FILTER_METHOD: u8 = 0;
pub const INTERLACE_METHOD: u8 = 0;
pub const FILTER_TYPE_NONE: u8 = 0;
pub const BYTES_PER_PIXEL: usize = 3;

/// Largest width or height a PNG header may declare.
pub const MAX_DIMENSION: u32 = (1 << 31) - 1;

/// #3b82f6
pub const ICON_COLOR: [u8; 3] = [0x3B, 0x82, 0xF6];
pub const DEFAULT_SIZES: [u32; 2] = [192, 512];
pub const DEFAULT_OUT_DIR: &str = "public";
pub const ICON_FILE_PREFIX: &str = "icon-";
