#![allow(dead_code)]

use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

pub const ICON_SIZES: [u32; 2] = [192, 512];
pub const BLUE: [u8; 3] = [0x3B, 0x82, 0xF6];

/// A fresh, empty directory under the system temp dir, removed on drop.
pub struct ScratchDir(PathBuf);

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("lib-png-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }
}

impl Deref for ScratchDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

/// Decodes with the `image` crate, independent of this crate's reader.
pub fn decode_rgb(bytes: &[u8]) -> image::RgbImage {
    let decoded = image::load_from_memory_with_format(bytes, image::ImageFormat::Png).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgb8);
    decoded.to_rgb8()
}

/// Byte offsets of every chunk after the signature: (offset, type, length).
pub fn chunk_offsets(bytes: &[u8]) -> Vec<(usize, [u8; 4], usize)> {
    let mut offsets = Vec::new();
    let mut cursor = 8;
    while cursor < bytes.len() {
        let length = u32::from_be_bytes(bytes[cursor..cursor + 4].try_into().unwrap()) as usize;
        let chunk_type: [u8; 4] = bytes[cursor + 4..cursor + 8].try_into().unwrap();
        offsets.push((cursor, chunk_type, length));
        cursor += 12 + length;
    }
    offsets
}
