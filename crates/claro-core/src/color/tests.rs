//! Tests for color conversion functions

use super::*;

#[test]
fn test_hsv_values() {
    // Red should be H=0, S=255, V=255
    let hsv = rgb_to_hsv(255, 0, 0);
    assert_eq!(hsv, Hsv { h: 0, s: 255, v: 255 });

    // Green should be H=60 (120 degrees halved), S=255, V=255
    let hsv = rgb_to_hsv(0, 255, 0);
    assert_eq!(hsv, Hsv { h: 60, s: 255, v: 255 });

    // Blue should be H=120 (240 degrees halved), S=255, V=255
    let hsv = rgb_to_hsv(0, 0, 255);
    assert_eq!(hsv, Hsv { h: 120, s: 255, v: 255 });

    // White: no saturation, full value
    let hsv = rgb_to_hsv(255, 255, 255);
    assert_eq!(hsv, Hsv { h: 0, s: 0, v: 255 });

    // Black
    let hsv = rgb_to_hsv(0, 0, 0);
    assert_eq!(hsv, Hsv { h: 0, s: 0, v: 0 });
}

#[test]
fn test_gray_preserved_exactly() {
    // Achromatic pixels must survive the round trip byte-exact: the
    // pipeline relies on S=0 pixels staying pure gray.
    for v in [0u8, 1, 50, 128, 200, 254, 255] {
        let hsv = rgb_to_hsv(v, v, v);
        assert_eq!(hsv.s, 0);
        assert_eq!(hsv.v, v);
        assert_eq!(hsv_to_rgb(hsv), (v, v, v));
    }
}

#[test]
fn test_rgb_hsv_roundtrip_close() {
    let test_cases: [(u8, u8, u8); 8] = [
        (255, 0, 0),     // Red
        (0, 255, 0),     // Green
        (0, 0, 255),     // Blue
        (255, 128, 0),   // Orange
        (128, 0, 128),   // Purple
        (10, 200, 90),   // Arbitrary
        (240, 240, 239), // Near-gray
        (1, 2, 3),       // Dark
    ];

    // Hue quantization to half-degrees makes the round trip lossy by a
    // few counts per channel, never more.
    for (r, g, b) in test_cases {
        let (r2, g2, b2) = hsv_to_rgb(rgb_to_hsv(r, g, b));
        assert!(
            (r as i16 - r2 as i16).abs() <= 4
                && (g as i16 - g2 as i16).abs() <= 4
                && (b as i16 - b2 as i16).abs() <= 4,
            "roundtrip drift for ({}, {}, {}): got ({}, {}, {})",
            r,
            g,
            b,
            r2,
            g2,
            b2
        );
    }
}

#[test]
fn test_array_conversions_match_scalar() {
    let rgb = [255u8, 0, 0, 0, 255, 0, 12, 34, 56, 128, 128, 128];
    let hsv = rgb_array_to_hsv(&rgb);
    assert_eq!(hsv.len(), rgb.len());

    for (rgb_px, hsv_px) in rgb.chunks_exact(3).zip(hsv.chunks_exact(3)) {
        let expected = rgb_to_hsv(rgb_px[0], rgb_px[1], rgb_px[2]);
        assert_eq!(hsv_px, [expected.h, expected.s, expected.v]);
    }

    let back = hsv_array_to_rgb(&hsv);
    assert_eq!(back.len(), rgb.len());
}
