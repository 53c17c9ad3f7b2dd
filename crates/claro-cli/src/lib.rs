//! Shared utilities for claro-cli
//!
//! Reusable pieces of the batch driver: split-tree discovery, output-path
//! mirroring, and single-image processing.

pub mod commands;
pub mod processing;

// Re-export commonly used items at the crate root for convenience
pub use processing::{
    collect_split_images, ensure_output_dir, mirrored_output_path, process_single_image,
    SplitImage, SPLIT_NAMES, SUPPORTED_EXTENSIONS,
};
