//! Gaussian smoothing pre-filter

/// Reflect an index at the image border without repeating the edge sample
/// (gfedcb|abcdefgh|gfedcba). Sufficient for a radius-1 kernel.
#[inline]
pub(crate) fn reflect_101(i: i32, size: usize) -> usize {
    if size == 1 {
        return 0;
    }
    if i < 0 {
        (-i) as usize
    } else if i >= size as i32 {
        2 * size - 2 - i as usize
    } else {
        i as usize
    }
}

/// Apply a 3x3 Gaussian blur to an interleaved multi-channel buffer.
///
/// Uses the binomial kernel [1 2 1] x [1 2 1] / 16 (the Gaussian kernel
/// for size 3 with auto-derived sigma), integer arithmetic with
/// round-half-up, and reflected borders. Channels are filtered
/// independently.
pub fn gaussian_blur_3x3(data: &[u8], width: u32, height: u32, channels: u8) -> Vec<u8> {
    let w = width as usize;
    let h = height as usize;
    let c = channels as usize;

    debug_assert_eq!(data.len(), w * h * c);

    const WEIGHTS: [(i32, u32); 3] = [(-1, 1), (0, 2), (1, 1)];

    let mut out = vec![0u8; data.len()];
    for y in 0..h {
        for x in 0..w {
            for ch in 0..c {
                let mut acc = 0u32;
                for (dy, wy) in WEIGHTS {
                    let sy = reflect_101(y as i32 + dy, h);
                    for (dx, wx) in WEIGHTS {
                        let sx = reflect_101(x as i32 + dx, w);
                        acc += wy * wx * data[(sy * w + sx) * c + ch] as u32;
                    }
                }
                out[(y * w + x) * c + ch] = ((acc + 8) / 16) as u8;
            }
        }
    }
    out
}
