//! Pick ID color encoding.
//!
//! A pick pass renders each primitive with a unique 24-bit ID packed into
//! the RGB channels of an `Rgba8Unorm` attachment. The attachment is cleared
//! to white, so a background pixel decodes to [`NO_HIT`].

/// Sentinel decoded from a cleared (background) pixel.
///
/// The pick attachment clears to white, which decodes to the maximum 24-bit
/// value. IDs equal to the sentinel are therefore never assigned.
pub const NO_HIT: u32 = 0x00FF_FFFF;

/// Encodes a pick ID as an RGB color.
///
/// Returns `[R, G, B]` where:
/// - R contains bits 16-23
/// - G contains bits 8-15
/// - B contains bits 0-7
#[must_use]
pub fn index_to_color(index: u32) -> [u8; 3] {
    [
        ((index >> 16) & 0xFF) as u8,
        ((index >> 8) & 0xFF) as u8,
        (index & 0xFF) as u8,
    ]
}

/// Decodes an RGB pick color back to an ID.
#[must_use]
pub fn color_to_index(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_index_roundtrip() {
        for index in [0, 1, 255, 256, 65535, 65536, 0x00FF_FFFE] {
            let color = index_to_color(index);
            let decoded = color_to_index(color[0], color[1], color[2]);
            assert_eq!(decoded, index, "roundtrip failed for index {index}");
        }
    }

    #[test]
    fn specific_colors() {
        assert_eq!(index_to_color(0), [0, 0, 0]);
        assert_eq!(index_to_color(1), [0, 0, 1]);
        assert_eq!(index_to_color(255), [0, 0, 255]);
        assert_eq!(index_to_color(256), [0, 1, 0]);
        assert_eq!(index_to_color(0xFF0000), [255, 0, 0]);
    }

    #[test]
    fn background_decodes_to_sentinel() {
        assert_eq!(color_to_index(255, 255, 255), NO_HIT);
        assert_eq!(index_to_color(NO_HIT), [255, 255, 255]);
    }
}
