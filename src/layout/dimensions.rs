//! Intrinsic dimension extraction from raw file bytes.
//!
//! Only PNG gets true header-based sizing: the 8-byte signature is followed
//! by the 8-byte IHDR chunk header, so the width and height fields sit at
//! fixed byte offsets 16 and 20 as big-endian u32s. Every other format —
//! all videos and all other rasters — uses the stock default dimensions.
//! This is a documented approximation, not a gap to fill with a full decoder.
//!
//! Extraction never fails; malformed or truncated bytes degrade to the
//! default and the caller records the diagnostic.

use crate::types::{DimensionSource, Dimensions};

/// Byte offset of the IHDR width field: 8-byte signature + 8-byte chunk header.
const PNG_WIDTH_OFFSET: usize = 16;
const PNG_HEIGHT_OFFSET: usize = 20;
/// Minimum buffer length to read both dimension fields.
const PNG_MIN_LEN: usize = PNG_HEIGHT_OFFSET + 4;

/// Derive intrinsic dimensions from raw bytes and the declared extension.
///
/// Returns the dimensions plus where they came from:
/// - `png`: the IHDR width/height, or `default` with
///   [`DimensionSource::Fallback`] when the buffer is too short or the
///   fields are unusable.
/// - anything else: `default` with [`DimensionSource::Unparsed`].
pub fn intrinsic_dimensions(
    bytes: &[u8],
    extension: &str,
    default: Dimensions,
) -> (Dimensions, DimensionSource) {
    if extension != "png" {
        return (default, DimensionSource::Unparsed);
    }
    match png_header_dimensions(bytes) {
        Some(dims) => (dims, DimensionSource::PngHeader),
        None => (default, DimensionSource::Fallback),
    }
}

/// Read the IHDR width/height fields. `None` on truncated buffers or
/// zero-sized fields (a zero dimension would poison the aspect ratio).
fn png_header_dimensions(bytes: &[u8]) -> Option<Dimensions> {
    if bytes.len() < PNG_MIN_LEN {
        return None;
    }
    let width = u32::from_be_bytes(bytes[PNG_WIDTH_OFFSET..PNG_WIDTH_OFFSET + 4].try_into().ok()?);
    let height =
        u32::from_be_bytes(bytes[PNG_HEIGHT_OFFSET..PNG_HEIGHT_OFFSET + 4].try_into().ok()?);
    if width == 0 || height == 0 {
        return None;
    }
    Some(Dimensions { width, height })
}
