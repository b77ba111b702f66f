//! ARGB8888 color helpers.

use crate::light::MAX_BRIGHTNESS;

pub const BACKGROUND: u32 = 0xFF000000;

/// Pack an RGBA color (channels in 0..=255) into ARGB8888.
#[inline]
pub fn pack_color(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Opaque gray for a shade in `0.0..=MAX_BRIGHTNESS`. Out-of-range input is clamped.
#[inline]
pub fn gray(intensity: f32) -> u32 {
    let level = intensity.clamp(0.0, MAX_BRIGHTNESS).round() as u8;
    pack_color(level, level, level, 0xFF)
}

/// Split ARGB8888 into its `[r, g, b, a]` channels.
#[inline]
pub fn to_rgba(color: u32) -> [u8; 4] {
    [
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
        (color >> 24) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_extremes() {
        assert_eq!(gray(0.0), 0xFF000000);
        assert_eq!(gray(MAX_BRIGHTNESS), 0xFFFFFFFF);
        assert_eq!(gray(-10.0), 0xFF000000);
        assert_eq!(gray(1000.0), 0xFFFFFFFF);
    }

    #[test]
    fn rgba_unpacks_packed_channels() {
        assert_eq!(to_rgba(pack_color(1, 2, 3, 4)), [1, 2, 3, 4]);
    }
}
