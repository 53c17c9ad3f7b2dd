//! Plane utilities shared by the pipeline stages

/// Split an interleaved 3-channel buffer into its three planes.
pub fn split_channels(data: &[u8]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let pixels = data.len() / 3;
    let mut c0 = Vec::with_capacity(pixels);
    let mut c1 = Vec::with_capacity(pixels);
    let mut c2 = Vec::with_capacity(pixels);

    for px in data.chunks_exact(3) {
        c0.push(px[0]);
        c1.push(px[1]);
        c2.push(px[2]);
    }
    (c0, c1, c2)
}

/// Merge three equal-length planes back into an interleaved buffer.
pub fn merge_channels(c0: &[u8], c1: &[u8], c2: &[u8]) -> Result<Vec<u8>, String> {
    if c0.len() != c1.len() || c0.len() != c2.len() {
        return Err(format!(
            "Cannot merge planes of different sizes: {} / {} / {}",
            c0.len(),
            c1.len(),
            c2.len()
        ));
    }

    let mut result = Vec::with_capacity(c0.len() * 3);
    for i in 0..c0.len() {
        result.push(c0[i]);
        result.push(c1[i]);
        result.push(c2[i]);
    }
    Ok(result)
}

/// Weighted linear blend of two equal-length planes:
/// `round(wa * a + wb * b)`, clamped to the 8-bit range.
pub fn add_weighted(a: &[u8], wa: f32, b: &[u8], wb: f32) -> Result<Vec<u8>, String> {
    if a.len() != b.len() {
        return Err(format!(
            "Cannot blend planes of different sizes: {} / {}",
            a.len(),
            b.len()
        ));
    }

    Ok(a.iter()
        .zip(b.iter())
        .map(|(&av, &bv)| {
            (wa * av as f32 + wb * bv as f32)
                .round()
                .clamp(0.0, 255.0) as u8
        })
        .collect())
}
