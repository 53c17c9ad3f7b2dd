//! Dual-threshold gradient edge detection (Canny)

use super::smoothing::reflect_101;

// Orientation bounds for non-maximum suppression: tan(22.5) and tan(67.5)
const TAN22: f32 = 0.414_213_56;
const TAN67: f32 = 2.414_213_6;

/// Detect edges in an 8-bit plane with a Canny detector.
///
/// 3x3 Sobel gradients with reflected borders, L1 gradient magnitude,
/// orientation-quantized non-maximum suppression, then hysteresis: pixels
/// with magnitude above `high` seed edges, pixels above `low` extend them
/// through 8-connected neighbors. Returns a plane of the same size with
/// 255 on edges and 0 elsewhere.
pub fn canny(plane: &[u8], width: u32, height: u32, low: f32, high: f32) -> Vec<u8> {
    let w = width as usize;
    let h = height as usize;

    debug_assert_eq!(plane.len(), w * h);
    if w == 0 || h == 0 {
        return Vec::new();
    }

    // Sobel gradients and L1 magnitude
    let mut gx = vec![0i32; w * h];
    let mut gy = vec![0i32; w * h];
    let mut mag = vec![0i32; w * h];

    for y in 0..h {
        for x in 0..w {
            let px = |dx: i32, dy: i32| -> i32 {
                let sx = reflect_101(x as i32 + dx, w);
                let sy = reflect_101(y as i32 + dy, h);
                plane[sy * w + sx] as i32
            };

            let dx = (px(1, -1) + 2 * px(1, 0) + px(1, 1)) - (px(-1, -1) + 2 * px(-1, 0) + px(-1, 1));
            let dy = (px(-1, 1) + 2 * px(0, 1) + px(1, 1)) - (px(-1, -1) + 2 * px(0, -1) + px(1, -1));

            let i = y * w + x;
            gx[i] = dx;
            gy[i] = dy;
            mag[i] = dx.abs() + dy.abs();
        }
    }

    // Non-maximum suppression with two-level candidate marking:
    // 0 = suppressed, 1 = weak candidate, 2 = strong seed
    let mut state = vec![0u8; w * h];

    let mag_at = |x: i32, y: i32| -> f32 {
        if x < 0 || y < 0 || x >= w as i32 || y >= h as i32 {
            0.0
        } else {
            mag[y as usize * w + x as usize] as f32
        }
    };

    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            let m = mag[i] as f32;
            if m <= low {
                continue;
            }

            let ax = gx[i].abs() as f32;
            let ay = gy[i].abs() as f32;
            let (xi, yi) = (x as i32, y as i32);

            // Quantize the gradient direction and compare against the two
            // neighbors along it
            let (n1, n2) = if ay < ax * TAN22 {
                (mag_at(xi - 1, yi), mag_at(xi + 1, yi))
            } else if ay > ax * TAN67 {
                (mag_at(xi, yi - 1), mag_at(xi, yi + 1))
            } else if (gx[i] < 0) != (gy[i] < 0) {
                (mag_at(xi + 1, yi - 1), mag_at(xi - 1, yi + 1))
            } else {
                (mag_at(xi - 1, yi - 1), mag_at(xi + 1, yi + 1))
            };

            if m > n1 && m >= n2 {
                state[i] = if m > high { 2 } else { 1 };
            }
        }
    }

    // Hysteresis: flood from strong seeds through weak candidates
    let mut out = vec![0u8; w * h];
    let mut stack: Vec<usize> = Vec::new();
    for (i, &s) in state.iter().enumerate() {
        if s == 2 {
            stack.push(i);
        }
    }

    while let Some(i) = stack.pop() {
        if out[i] == 255 {
            continue;
        }
        out[i] = 255;

        let x = (i % w) as i32;
        let y = (i / w) as i32;
        for dy in -1..=1i32 {
            for dx in -1..=1i32 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= w as i32 || ny >= h as i32 {
                    continue;
                }
                let ni = ny as usize * w + nx as usize;
                if state[ni] > 0 && out[ni] == 0 {
                    stack.push(ni);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_plane_has_no_edges() {
        let plane = vec![128u8; 8 * 8];
        let edges = canny(&plane, 8, 8, 20.0, 60.0);
        assert!(edges.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_output_is_binary() {
        let mut plane = vec![0u8; 8 * 8];
        for row in plane.chunks_exact_mut(8) {
            for v in &mut row[4..] {
                *v = 255;
            }
        }
        let edges = canny(&plane, 8, 8, 20.0, 60.0);
        assert!(edges.iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn test_vertical_step_yields_vertical_edge() {
        // Left half dark, right half bright: a strong vertical edge
        let w = 8usize;
        let mut plane = vec![0u8; w * w];
        for row in plane.chunks_exact_mut(w) {
            for v in &mut row[4..] {
                *v = 200;
            }
        }
        let edges = canny(&plane, w as u32, w as u32, 20.0, 60.0);

        // Every row crosses the step, so every row contains an edge pixel
        for row in edges.chunks_exact(w) {
            assert!(row.iter().any(|&v| v == 255));
        }
        // Far columns are flat and must stay empty
        for row in edges.chunks_exact(w) {
            assert_eq!(row[0], 0);
            assert_eq!(row[w - 1], 0);
        }
    }

    #[test]
    fn test_weak_gradient_below_low_threshold_is_ignored() {
        // Step of 4 levels: Sobel response 4*4 = 16, below low = 20
        let w = 8usize;
        let mut plane = vec![100u8; w * w];
        for row in plane.chunks_exact_mut(w) {
            for v in &mut row[4..] {
                *v = 104;
            }
        }
        let edges = canny(&plane, w as u32, w as u32, 20.0, 60.0);
        assert!(edges.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_weak_edge_kept_only_when_connected_to_strong() {
        // An isolated weak step (magnitude between low and high) with no
        // strong seed anywhere must not survive hysteresis.
        let w = 8usize;
        let mut plane = vec![100u8; w * w];
        for row in plane.chunks_exact_mut(w) {
            for v in &mut row[4..] {
                *v = 110; // Sobel response 4*10 = 40: weak, not strong
            }
        }
        let edges = canny(&plane, w as u32, w as u32, 20.0, 60.0);
        assert!(edges.iter().all(|&v| v == 0));
    }
}
