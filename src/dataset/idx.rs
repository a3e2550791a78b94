//! IDX container parsing.
//!
//! Label files: magic `0x00000801`, item count, then one byte per label.
//! Image files: magic `0x00000803`, item count, rows, cols, then
//! `count * rows * cols` pixel bytes. All header fields are big-endian u32.

use crate::errors::DatasetError;
use std::fs;
use std::path::Path;

pub const LABEL_MAGIC: u32 = 0x0000_0801;
pub const IMAGE_MAGIC: u32 = 0x0000_0803;

const LABEL_HEADER_LEN: usize = 8;
const IMAGE_HEADER_LEN: usize = 16;

/// Pixel payload of an IDX image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    pub count: usize,
    pub rows: usize,
    pub cols: usize,
    /// `count` images of `rows * cols` bytes each, row-major.
    pub pixels: Vec<u8>,
}

impl ImageSet {
    /// Bytes per image.
    pub fn image_len(&self) -> usize {
        self.rows * self.cols
    }

    /// Pixels of image `index`.
    pub fn image(&self, index: usize) -> &[u8] {
        let len = self.image_len();
        &self.pixels[index * len..(index + 1) * len]
    }
}

fn read_be_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn check_header(data: &[u8], len: usize, magic: u32) -> Result<usize, DatasetError> {
    if data.len() < len {
        return Err(DatasetError::TruncatedHeader {
            expected: len,
            actual: data.len(),
        });
    }
    let actual = read_be_u32(data, 0);
    if actual != magic {
        return Err(DatasetError::BadMagic {
            expected: magic,
            actual,
        });
    }
    let count = read_be_u32(data, 4) as usize;
    if count == 0 {
        return Err(DatasetError::EmptySet);
    }
    Ok(count)
}

fn payload(data: &[u8], offset: usize, len: usize) -> Result<&[u8], DatasetError> {
    let available = data.len() - offset;
    if available < len {
        return Err(DatasetError::TruncatedPayload {
            expected: len,
            actual: available,
        });
    }
    Ok(&data[offset..offset + len])
}

/// Parse an in-memory IDX label file. Trailing bytes are ignored.
pub fn parse_labels(data: &[u8]) -> Result<Vec<u8>, DatasetError> {
    let count = check_header(data, LABEL_HEADER_LEN, LABEL_MAGIC)?;
    Ok(payload(data, LABEL_HEADER_LEN, count)?.to_vec())
}

/// Parse an in-memory IDX image file. Trailing bytes are ignored.
pub fn parse_images(data: &[u8]) -> Result<ImageSet, DatasetError> {
    let count = check_header(data, IMAGE_HEADER_LEN, IMAGE_MAGIC)?;
    let rows = read_be_u32(data, 8);
    let cols = read_be_u32(data, 12);
    if rows == 0 || cols == 0 {
        return Err(DatasetError::InvalidDimensions { rows, cols });
    }
    let (rows, cols) = (rows as usize, cols as usize);

    let len = count
        .checked_mul(rows)
        .and_then(|n| n.checked_mul(cols))
        .ok_or(DatasetError::TruncatedPayload {
            expected: usize::MAX,
            actual: data.len() - IMAGE_HEADER_LEN,
        })?;
    let pixels = payload(data, IMAGE_HEADER_LEN, len)?.to_vec();

    Ok(ImageSet {
        count,
        rows,
        cols,
        pixels,
    })
}

fn read(path: &Path) -> Result<Vec<u8>, DatasetError> {
    fs::read(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse an IDX label file.
pub fn load_labels(path: impl AsRef<Path>) -> Result<Vec<u8>, DatasetError> {
    parse_labels(&read(path.as_ref())?)
}

/// Read and parse an IDX image file.
pub fn load_images(path: impl AsRef<Path>) -> Result<ImageSet, DatasetError> {
    parse_images(&read(path.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_file(labels: &[u8]) -> Vec<u8> {
        let mut data = LABEL_MAGIC.to_be_bytes().to_vec();
        data.extend_from_slice(&(labels.len() as u32).to_be_bytes());
        data.extend_from_slice(labels);
        data
    }

    fn image_file(count: u32, rows: u32, cols: u32, pixels: &[u8]) -> Vec<u8> {
        let mut data = IMAGE_MAGIC.to_be_bytes().to_vec();
        for field in [count, rows, cols] {
            data.extend_from_slice(&field.to_be_bytes());
        }
        data.extend_from_slice(pixels);
        data
    }

    #[test]
    fn test_parse_labels() {
        let labels = parse_labels(&label_file(&[3, 1, 4])).unwrap();
        assert_eq!(labels, vec![3, 1, 4]);
    }

    #[test]
    fn test_parse_labels_ignores_trailing_bytes() {
        let mut data = label_file(&[7]);
        data.push(99);
        assert_eq!(parse_labels(&data).unwrap(), vec![7]);
    }

    #[test]
    fn test_parse_labels_bad_magic() {
        let mut data = label_file(&[1]);
        data[3] = 0x03;
        assert!(matches!(
            parse_labels(&data),
            Err(DatasetError::BadMagic {
                expected: LABEL_MAGIC,
                actual: IMAGE_MAGIC
            })
        ));
    }

    #[test]
    fn test_parse_labels_truncated() {
        let mut data = label_file(&[1, 2, 3]);
        data.pop();
        assert!(matches!(
            parse_labels(&data),
            Err(DatasetError::TruncatedPayload {
                expected: 3,
                actual: 2
            })
        ));
        assert!(matches!(
            parse_labels(&data[..5]),
            Err(DatasetError::TruncatedHeader { expected: 8, actual: 5 })
        ));
    }

    #[test]
    fn test_parse_labels_empty() {
        assert!(matches!(
            parse_labels(&label_file(&[])),
            Err(DatasetError::EmptySet)
        ));
    }

    #[test]
    fn test_parse_images() {
        let images = parse_images(&image_file(2, 2, 3, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11])).unwrap();
        assert_eq!(images.count, 2);
        assert_eq!(images.image_len(), 6);
        assert_eq!(images.image(1), &[6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_parse_images_zero_dimension() {
        assert!(matches!(
            parse_images(&image_file(1, 0, 28, &[])),
            Err(DatasetError::InvalidDimensions { rows: 0, cols: 28 })
        ));
    }
}
