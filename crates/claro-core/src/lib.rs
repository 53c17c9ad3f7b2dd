//! Claro Core Library
//!
//! Core functionality for deterministic enhancement of labeled image
//! datasets: color conversions, raster decode/encode, and the per-image
//! contrast/edge enhancement pipeline.

pub mod color;
pub mod config;
pub mod decoders;
pub mod exporters;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use color::Hsv;
pub use decoders::DecodedImage;
pub use models::EnhanceOptions;
pub use pipeline::{enhance_image, enhance_image_traced, EnhancedImage, Stage};
