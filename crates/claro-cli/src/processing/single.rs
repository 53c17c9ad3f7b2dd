//! Single image processing.

use std::path::Path;

use claro_core::decoders::DecodedImage;
use claro_core::exporters::export_image;
use claro_core::models::EnhanceOptions;
use claro_core::pipeline::enhance_image;

use super::input::ensure_output_dir;

/// Process one decoded image end to end: enhance and write the result to
/// the mirrored output path, creating parent directories as needed.
///
/// Decoding stays with the caller so the batch driver can treat decode
/// failures as skips rather than batch errors.
pub fn process_single_image(
    decoded: DecodedImage,
    output: &Path,
    options: &EnhanceOptions,
) -> Result<(), String> {
    let enhanced = enhance_image(decoded, options)?;

    if let Some(parent) = output.parent() {
        ensure_output_dir(parent)?;
    }
    export_image(&enhanced, output)
}
