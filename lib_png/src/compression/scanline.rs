use crate::constants::{BYTES_PER_PIXEL, FILTER_TYPE_NONE};
use crate::image::format::Rgb;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScanlineError {
    #[error("Scanline data is {actual} bytes, expected {expected}")]
    Length { expected: usize, actual: usize },
    #[error("Row {row} uses filter type {filter}, only type 0 is supported")]
    UnsupportedFilter { row: usize, filter: u8 },
}

/// Builds `height` rows of `width` pixels of `color`, each prefixed with
/// filter type 0.
pub fn solid_scanlines(width: usize, height: usize, color: Rgb) -> Vec<u8> {
    let mut row = Vec::with_capacity(1 + width * BYTES_PER_PIXEL);
    row.push(FILTER_TYPE_NONE);
    for _ in 0..width {
        row.extend_from_slice(&color);
    }

    row.repeat(height)
}

/// Strips the filter byte from each row, returning packed RGB samples.
pub fn unfilter(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, ScanlineError> {
    let stride = 1 + width * BYTES_PER_PIXEL;
    let expected = stride * height;
    if data.len() != expected {
        return Err(ScanlineError::Length {
            expected,
            actual: data.len(),
        });
    }

    let mut pixels = Vec::with_capacity(width * height * BYTES_PER_PIXEL);
    for (row, line) in data.chunks(stride).enumerate() {
        if line[0] != FILTER_TYPE_NONE {
            return Err(ScanlineError::UnsupportedFilter {
                row,
                filter: line[0],
            });
        }
        pixels.extend_from_slice(&line[1..]);
    }

    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel() {
        assert_eq!(solid_scanlines(1, 1, [1, 2, 3]), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_rows_start_with_filter_byte() {
        let data = solid_scanlines(3, 2, [9, 8, 7]);
        assert_eq!(data.len(), 2 * (1 + 3 * 3));
        assert_eq!(data[0], 0);
        assert_eq!(data[10], 0);
        assert_eq!(&data[1..4], &[9, 8, 7]);
        assert_eq!(&data[17..20], &[9, 8, 7]);
    }

    #[test]
    fn test_unfilter() {
        let data = solid_scanlines(2, 2, [5, 6, 7]);
        assert_eq!(unfilter(&data, 2, 2).unwrap(), [5, 6, 7].repeat(4));
    }

    #[test]
    fn test_unfilter_rejects_other_filters() {
        let mut data = solid_scanlines(2, 2, [5, 6, 7]);
        data[7] = 1;
        assert_eq!(
            unfilter(&data, 2, 2),
            Err(ScanlineError::UnsupportedFilter { row: 1, filter: 1 })
        );
    }

    #[test]
    fn test_unfilter_wrong_length() {
        assert_eq!(
            unfilter(&[0, 1, 2], 1, 1),
            Err(ScanlineError::Length {
                expected: 4,
                actual: 3
            })
        );
    }
}
