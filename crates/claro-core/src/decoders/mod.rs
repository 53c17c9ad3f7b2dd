//! Image decoders for the dataset formats
//!
//! Support for PNG and JPEG file formats. Every decoder normalizes to
//! 8-bit interleaved RGB so the pipeline sees one representation.

mod jpeg;
mod png;


use std::path::Path;

/// Decoded image data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Interleaved 8-bit RGB data
    pub data: Vec<u8>,

    /// Number of channels (always 3 after decoding)
    pub channels: u8,
}

/// Decode an image from a file path
///
/// Dispatches on the lowercased file extension. A file that cannot be
/// decoded yields an `Err` describing the path and cause; callers are
/// expected to log it and skip the file rather than abort the batch.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| format!("No file extension found: {}", path.display()))?;

    match extension.as_str() {
        "png" => png::decode_png(path),
        "jpg" | "jpeg" => jpeg::decode_jpeg(path),
        _ => Err(format!("Unsupported file format: {}", extension)),
    }
}
