//! HSV (Hue-Saturation-Value) color space conversions
//!
//! Byte-range conventions: H is stored in 0..=179 (degrees halved so the
//! full hue circle fits a u8), S and V in 0..=255. These are the
//! conventions the pipeline's numeric parameters assume.

/// HSV color representation
/// - H (hue): 0-179 (half degrees)
/// - S (saturation): 0-255
/// - V (value/brightness): 0-255
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Convert an 8-bit RGB pixel to HSV
///
/// Output: H in 0..=179, S and V in 0..=255.
#[inline]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;
    let delta = (max - min) as f32;

    // Achromatic case
    if max == min {
        return Hsv { h: 0, s: 0, v };
    }

    let s = ((delta * 255.0) / max as f32).round() as u8;

    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let mut h_deg = if max == r {
        60.0 * (gf - bf) / delta
    } else if max == g {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    if h_deg < 0.0 {
        h_deg += 360.0;
    }

    // Halve into the byte range; 360/2 wraps back to 0
    let h = ((h_deg / 2.0).round() as u16 % 180) as u8;

    Hsv { h, s, v }
}

/// Convert an HSV pixel back to 8-bit RGB
///
/// Input: H in 0..=179, S and V in 0..=255.
#[inline]
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let Hsv { h, s, v } = hsv;

    // Achromatic case reconstructs exact gray
    if s == 0 {
        return (v, v, v);
    }

    let h_sector = (h as f32 * 2.0) / 60.0;
    let i = (h_sector.floor() as u32) % 6;
    let f = h_sector - h_sector.floor();

    let vf = v as f32;
    let sf = s as f32 / 255.0;

    let p = (vf * (1.0 - sf)).round() as u8;
    let q = (vf * (1.0 - sf * f)).round() as u8;
    let t = (vf * (1.0 - sf * (1.0 - f))).round() as u8;

    match i {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Convert an interleaved RGB buffer to an interleaved HSV buffer.
/// Data is RGB triplets; output is HSV triplets of the same length.
pub fn rgb_array_to_hsv(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());
    for rgb in data.chunks_exact(3) {
        let hsv = rgb_to_hsv(rgb[0], rgb[1], rgb[2]);
        result.push(hsv.h);
        result.push(hsv.s);
        result.push(hsv.v);
    }
    result
}

/// Convert an interleaved HSV buffer back to an interleaved RGB buffer.
pub fn hsv_array_to_rgb(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());
    for hsv in data.chunks_exact(3) {
        let (r, g, b) = hsv_to_rgb(Hsv {
            h: hsv[0],
            s: hsv[1],
            v: hsv[2],
        });
        result.push(r);
        result.push(g);
        result.push(b);
    }
    result
}
