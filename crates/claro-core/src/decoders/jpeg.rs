//! JPEG image decoder

use std::path::Path;

use super::DecodedImage;

/// Decode a JPEG file into 8-bit RGB
pub(crate) fn decode_jpeg<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open JPEG file: {}", e))?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));

    let pixels = decoder
        .decode()
        .map_err(|e| format!("Failed to decode JPEG: {}", e))?;
    let info = decoder
        .info()
        .ok_or_else(|| "Failed to read JPEG info".to_string())?;

    let width = info.width as u32;
    let height = info.height as u32;

    let data = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => {
            let expected = (width * height * 3) as usize;
            if pixels.len() != expected {
                return Err(format!(
                    "JPEG buffer size mismatch: expected {}, got {}",
                    expected,
                    pixels.len()
                ));
            }
            pixels
        }
        jpeg_decoder::PixelFormat::L8 => {
            // Expand grayscale to RGB
            let mut rgb_data = Vec::with_capacity(pixels.len() * 3);
            for gray in pixels {
                rgb_data.push(gray);
                rgb_data.push(gray);
                rgb_data.push(gray);
            }
            rgb_data
        }
        other => {
            return Err(format!("Unsupported JPEG pixel format: {:?}", other));
        }
    };

    Ok(DecodedImage {
        width,
        height,
        data,
        channels: 3,
    })
}
