//! Dataset tree handling and per-image processing.

mod input;
mod single;

pub use input::{
    collect_split_images, ensure_output_dir, mirrored_output_path, SplitImage, SPLIT_NAMES,
    SUPPORTED_EXTENSIONS,
};
pub use single::process_single_image;
