/// Deterministic value in `[0, 1)` for a seed. No generator state is kept,
/// so the same seed always lands on the same value.
pub fn seeded_random(seed: u64) -> f64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;

    // Top 53 bits fill an f64 mantissa exactly.
    #[allow(clippy::cast_precision_loss)]
    let value = (z >> 11) as f64 / (1_u64 << 53) as f64;
    value
}

/// Independent streams for one record: position picks the record, channel
/// picks which property (radius, tip, bulge, shade) is being jittered.
pub fn jitter(position: usize, channel: u8) -> f64 {
    let position = position as u64;
    seeded_random(position.wrapping_mul(0x100).wrapping_add(u64::from(channel)))
}
