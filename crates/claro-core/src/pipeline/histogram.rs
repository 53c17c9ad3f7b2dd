//! Histogram-based contrast operations on single 8-bit planes

/// Globally equalize the histogram of an 8-bit plane.
///
/// Builds the full 256-bin histogram and maps values through the scaled
/// cumulative distribution: the first occupied bin maps to 0 and the scale
/// is 255 / (total - hist[first]), so the output spans the full range. A
/// constant plane is returned unchanged.
pub fn equalize_hist(plane: &[u8]) -> Vec<u8> {
    if plane.is_empty() {
        return Vec::new();
    }

    let mut hist = [0u32; 256];
    for &v in plane {
        hist[v as usize] += 1;
    }

    let total = plane.len() as u32;
    let mut first = 0usize;
    while hist[first] == 0 {
        first += 1;
    }

    // Constant plane: equalization is the identity
    if hist[first] == total {
        return plane.to_vec();
    }

    let scale = 255.0 / (total - hist[first]) as f32;
    let mut lut = [0u8; 256];
    let mut sum = 0u32;
    for i in (first + 1)..256 {
        sum += hist[i];
        lut[i] = (sum as f32 * scale).round().min(255.0) as u8;
    }

    plane.iter().map(|&v| lut[v as usize]).collect()
}

/// Linearly rescale a plane so its observed minimum maps to `floor` and
/// its maximum to `ceiling`.
///
/// A zero-variance plane (min == max) makes the rescale ill-defined; it is
/// deliberately returned unchanged instead of dividing by zero.
pub fn rescale_to_range(plane: &[u8], floor: u8, ceiling: u8) -> Vec<u8> {
    if plane.is_empty() {
        return Vec::new();
    }

    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for &v in plane {
        min = min.min(v);
        max = max.max(v);
    }

    // Zero-variance fallback: identity passthrough
    if min == max {
        return plane.to_vec();
    }

    let scale = (ceiling as f32 - floor as f32) / (max - min) as f32;
    let offset = floor as f32;
    plane
        .iter()
        .map(|&v| ((v - min) as f32 * scale + offset).round().clamp(0.0, 255.0) as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equalize_two_level_plane() {
        // 4 dark + 4 bright pixels: first occupied bin maps to 0, the
        // rest of the mass lands at 255
        let plane = [10u8, 10, 10, 10, 200, 200, 200, 200];
        let equalized = equalize_hist(&plane);
        assert_eq!(equalized, vec![0, 0, 0, 0, 255, 255, 255, 255]);
    }

    #[test]
    fn test_equalize_constant_plane_is_identity() {
        let plane = [128u8; 16];
        assert_eq!(equalize_hist(&plane), plane.to_vec());
    }

    #[test]
    fn test_equalize_spans_full_range() {
        let plane: Vec<u8> = (0..=255).collect();
        let equalized = equalize_hist(&plane);
        assert_eq!(*equalized.iter().min().unwrap(), 0);
        assert_eq!(*equalized.iter().max().unwrap(), 255);
        // Monotonic: equalization never reorders intensities
        for pair in equalized.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_rescale_maps_extremes_to_bounds() {
        let plane = [0u8, 64, 128, 255];
        let rescaled = rescale_to_range(&plane, 50, 200);
        assert_eq!(rescaled[0], 50);
        assert_eq!(rescaled[3], 200);
        for &v in &rescaled {
            assert!((50..=200).contains(&v));
        }
    }

    #[test]
    fn test_rescale_exact_midpoint() {
        let plane = [100u8, 150, 200];
        let rescaled = rescale_to_range(&plane, 50, 200);
        assert_eq!(rescaled, vec![50, 125, 200]);
    }

    #[test]
    fn test_rescale_zero_variance_passthrough() {
        let plane = [77u8; 9];
        assert_eq!(rescale_to_range(&plane, 50, 200), plane.to_vec());
    }

    #[test]
    fn test_empty_plane() {
        assert!(equalize_hist(&[]).is_empty());
        assert!(rescale_to_range(&[], 50, 200).is_empty());
    }
}
