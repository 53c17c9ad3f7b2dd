//! Image exporters for the dataset formats
//!
//! Write enhanced images back out as PNG or JPEG, matching the
//! destination file's extension.

use std::path::Path;

use crate::pipeline::EnhancedImage;

/// JPEG quality used for all JPEG output.
const JPEG_QUALITY: u8 = 95;

/// Export an enhanced image, choosing the encoder from the destination
/// file's extension (`.png`, `.jpg`, `.jpeg`).
pub fn export_image<P: AsRef<Path>>(image: &EnhancedImage, path: P) -> Result<(), String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| format!("No file extension found: {}", path.display()))?;

    match extension.as_str() {
        "png" => export_png(image, path),
        "jpg" | "jpeg" => export_jpeg(image, path),
        _ => Err(format!("Unsupported output format: {}", extension)),
    }
}

/// Export an enhanced image to 8-bit RGB PNG
pub fn export_png<P: AsRef<Path>>(image: &EnhancedImage, path: P) -> Result<(), String> {
    use std::fs::File;
    use std::io::BufWriter;

    if image.channels != 3 {
        return Err(format!(
            "PNG export only supports 3-channel RGB, got {} channels",
            image.channels
        ));
    }

    let file =
        File::create(path.as_ref()).map_err(|e| format!("Failed to create PNG file: {}", e))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header: {}", e))?;
    png_writer
        .write_image_data(&image.data)
        .map_err(|e| format!("Failed to write PNG image: {}", e))?;

    Ok(())
}

/// Export an enhanced image to JPEG
pub fn export_jpeg<P: AsRef<Path>>(image: &EnhancedImage, path: P) -> Result<(), String> {
    if image.channels != 3 {
        return Err(format!(
            "JPEG export only supports 3-channel RGB, got {} channels",
            image.channels
        ));
    }

    if image.width > u16::MAX as u32 || image.height > u16::MAX as u32 {
        return Err(format!(
            "Image too large for JPEG export: {}x{}",
            image.width, image.height
        ));
    }

    let encoder = jpeg_encoder::Encoder::new_file(path.as_ref(), JPEG_QUALITY)
        .map_err(|e| format!("Failed to create JPEG file: {}", e))?;
    encoder
        .encode(
            &image.data,
            image.width as u16,
            image.height as u16,
            jpeg_encoder::ColorType::Rgb,
        )
        .map_err(|e| format!("Failed to write JPEG image: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::decode_image;
    use tempfile::tempdir;

    fn create_test_image(width: u32, height: u32) -> EnhancedImage {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push((x * 40 % 256) as u8);
                data.push((y * 40 % 256) as u8);
                data.push(128);
            }
        }
        EnhancedImage {
            width,
            height,
            data,
            channels: 3,
        }
    }

    #[test]
    fn test_png_roundtrip_is_lossless() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("out.png");

        let image = create_test_image(5, 4);
        export_image(&image, &path).expect("export PNG");

        let decoded = decode_image(&path).expect("decode PNG");
        assert_eq!(decoded.width, 5);
        assert_eq!(decoded.height, 4);
        assert_eq!(decoded.channels, 3);
        assert_eq!(decoded.data, image.data);
    }

    #[test]
    fn test_jpeg_export_is_decodable() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("out.jpg");

        let image = create_test_image(8, 8);
        export_image(&image, &path).expect("export JPEG");

        // JPEG is lossy; only shape is guaranteed
        let decoded = decode_image(&path).expect("decode JPEG");
        assert_eq!(decoded.width, 8);
        assert_eq!(decoded.height, 8);
        assert_eq!(decoded.data.len(), 8 * 8 * 3);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("out.bmp");

        let image = create_test_image(2, 2);
        let result = export_image(&image, &path);
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
