//! Stage-by-stage diagnostic dump for a single image.

use std::path::PathBuf;

use claro_core::color::hsv_array_to_rgb;
use claro_core::decoders::decode_image;
use claro_core::exporters::export_png;
use claro_core::models::EnhanceOptions;
use claro_core::pipeline::{enhance_image_traced, EnhancedImage, Stage};

/// Run the pipeline on one image and write every intermediate stage as a
/// numbered PNG under `out`. Read-only over the trace; the pipeline result
/// itself is not persisted.
pub fn cmd_stages(input: PathBuf, out: PathBuf) -> Result<(), String> {
    let decoded = decode_image(&input)?;
    let options = EnhanceOptions::default();
    let (_, stages) = enhance_image_traced(decoded, &options)?;

    crate::processing::ensure_output_dir(&out)?;

    for (index, stage) in stages.iter().enumerate() {
        let path = out.join(format!("{:02}_{}.png", index, stage.name));
        let viewable = stage_to_rgb(stage);
        export_png(&viewable, &path)?;
        println!("  {}", path.display());
    }

    println!("Wrote {} stage images to {}", stages.len(), out.display());
    Ok(())
}

/// Turn a stage snapshot into a displayable RGB image: single planes are
/// expanded to gray, and the two HSV-space stages are converted back to
/// RGB the same way the final reconstruction does.
fn stage_to_rgb(stage: &Stage) -> EnhancedImage {
    let data = match (stage.channels, stage.name) {
        (1, _) => {
            let mut rgb = Vec::with_capacity(stage.data.len() * 3);
            for &v in &stage.data {
                rgb.push(v);
                rgb.push(v);
                rgb.push(v);
            }
            rgb
        }
        (_, "hsv" | "smoothed") => hsv_array_to_rgb(&stage.data),
        _ => stage.data.clone(),
    };

    EnhancedImage {
        width: stage.width,
        height: stage.height,
        data,
        channels: 3,
    }
}
