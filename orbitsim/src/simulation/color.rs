//! Packed `0xRRGGBB` color helpers

/// Pack RGB components into 0xRRGGBB
pub const fn rgb_u32(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpack 0xRRGGBB into (r, g, b)
pub const fn unpack_rgb(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// Deterministic pseudo-random color from an integer seed
///
/// Each channel is squeezed into 128..=255 so bodies stay visible on the dark
/// background.
pub fn random_color_u32(seed: u32) -> u32 {
    let x = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    let (r, g, b) = unpack_rgb(x);
    rgb_u32(128 + (r >> 1), 128 + (g >> 1), 128 + (b >> 1))
}
