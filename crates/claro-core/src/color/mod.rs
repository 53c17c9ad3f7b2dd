//! Color space conversions.
//!
//! 8-bit RGB <-> HSV conversions used by the enhancement pipeline.

mod hsv;

#[cfg(test)]
mod tests;

// Re-export primary type
pub use hsv::Hsv;

// Re-export HSV functions
pub use hsv::{hsv_array_to_rgb, hsv_to_rgb, rgb_array_to_hsv, rgb_to_hsv};
