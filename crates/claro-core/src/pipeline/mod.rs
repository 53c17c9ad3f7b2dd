//! Image enhancement pipeline
//!
//! Deterministic per-image enhancement for classification datasets:
//! normalize brightness/contrast in HSV space and emboss detected edges
//! onto the brightness plane while leaving hue and saturation untouched.
//!
//! This module is organized into submodules:
//! - `smoothing`: 3x3 Gaussian pre-filter
//! - `histogram`: global equalization and min-max contrast rescaling
//! - `edges`: dual-threshold gradient edge detection
//! - `helpers`: plane split/merge and weighted blending

mod edges;
mod helpers;
mod histogram;
mod smoothing;


// Re-export public items from submodules
pub use edges::canny;
pub use helpers::{add_weighted, merge_channels, split_channels};
pub use histogram::{equalize_hist, rescale_to_range};
pub use smoothing::gaussian_blur_3x3;

use crate::color;
use crate::decoders::DecodedImage;
use crate::models::EnhanceOptions;
use crate::verbose_println;

/// Result of the enhancement pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancedImage {
    /// Image width
    pub width: u32,

    /// Image height
    pub height: u32,

    /// Interleaved 8-bit RGB data
    pub data: Vec<u8>,

    /// Number of channels (always 3)
    pub channels: u8,
}

/// A named intermediate pipeline stage, captured for diagnostics only.
///
/// Stages are snapshots: they are never read back by the pipeline.
#[derive(Debug, Clone)]
pub struct Stage {
    /// Stage name in pipeline order
    pub name: &'static str,

    /// Image width
    pub width: u32,

    /// Image height
    pub height: u32,

    /// Stage pixel data (interleaved if `channels` > 1)
    pub data: Vec<u8>,

    /// Channel count of this stage (3 for color, 1 for planes)
    pub channels: u8,
}

/// Execute the full enhancement pipeline on a decoded RGB image.
///
/// Stages, in order:
/// 1. Convert RGB to HSV so brightness can be enhanced without hue shift.
/// 2. 3x3 Gaussian blur of the HSV image to suppress sensor noise before
///    edge detection.
/// 3. Split into H, S, V planes.
/// 4. Globally equalize the V histogram.
/// 5. Min-max rescale the equalized plane into
///    [`contrast_floor`, `contrast_ceiling`], leaving headroom for the
///    edge overlay. A zero-variance plane passes through unchanged.
/// 6. Canny edge detection on the rescaled plane.
/// 7. Blend `base_weight * contrast + edge_weight * edges`, clamped.
/// 8. Merge H, S and the blended plane, convert back to RGB.
///
/// The output always has the input's dimensions and channel order, and the
/// function is a pure transformation of its arguments.
pub fn enhance_image(
    image: DecodedImage,
    options: &EnhanceOptions,
) -> Result<EnhancedImage, String> {
    run_pipeline(image, options, None)
}

/// Like [`enhance_image`], but also returns every named intermediate stage
/// in pipeline order for diagnostic inspection.
pub fn enhance_image_traced(
    image: DecodedImage,
    options: &EnhanceOptions,
) -> Result<(EnhancedImage, Vec<Stage>), String> {
    let mut stages = Vec::new();
    let enhanced = run_pipeline(image, options, Some(&mut stages))?;
    Ok((enhanced, stages))
}

fn run_pipeline(
    image: DecodedImage,
    options: &EnhanceOptions,
    mut trace: Option<&mut Vec<Stage>>,
) -> Result<EnhancedImage, String> {
    options.validate()?;

    let width = image.width;
    let height = image.height;

    if width == 0 || height == 0 || image.data.is_empty() {
        return Err("Cannot enhance an empty image".to_string());
    }
    if image.channels != 3 {
        return Err(format!(
            "Pipeline requires 3-channel RGB input, got {} channels",
            image.channels
        ));
    }
    let expected = (width as usize) * (height as usize) * 3;
    if image.data.len() != expected {
        return Err(format!(
            "Image buffer size mismatch: expected {}, got {}",
            expected,
            image.data.len()
        ));
    }

    let mut record = |name: &'static str, data: &[u8], channels: u8| {
        if let Some(stages) = trace.as_deref_mut() {
            stages.push(Stage {
                name,
                width,
                height,
                data: data.to_vec(),
                channels,
            });
        }
    };

    record("original", &image.data, 3);

    let hsv = color::rgb_array_to_hsv(&image.data);
    record("hsv", &hsv, 3);

    let smoothed = smoothing::gaussian_blur_3x3(&hsv, width, height, 3);
    record("smoothed", &smoothed, 3);

    let (hue, saturation, value) = helpers::split_channels(&smoothed);
    record("hue", &hue, 1);
    record("saturation", &saturation, 1);
    record("brightness", &value, 1);

    let equalized = histogram::equalize_hist(&value);
    record("equalized", &equalized, 1);

    let contrast =
        histogram::rescale_to_range(&equalized, options.contrast_floor, options.contrast_ceiling);
    record("contrast", &contrast, 1);

    let edge_map = edges::canny(&contrast, width, height, options.edge_low, options.edge_high);
    record("edges", &edge_map, 1);

    let combined = helpers::add_weighted(
        &contrast,
        options.base_weight,
        &edge_map,
        options.edge_weight,
    )?;
    record("combined", &combined, 1);

    let merged = helpers::merge_channels(&hue, &saturation, &combined)?;
    let rgb = color::hsv_array_to_rgb(&merged);
    record("enhanced", &rgb, 3);

    verbose_println!(
        "enhanced {}x{} image ({} edge pixels)",
        width,
        height,
        edge_map.iter().filter(|&&v| v > 0).count()
    );

    Ok(EnhancedImage {
        width,
        height,
        data: rgb,
        channels: 3,
    })
}
