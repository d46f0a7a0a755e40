#![forbid(unsafe_code)]

//! Packed integer color keys
//!
//! A tally maps each distinct color to an occurrence count. The map key is
//! a fixed-width integer packing of the channel bytes: 24-bit RGB when the
//! alpha channel is dropped, 32-bit RGBA when transparency is counted.
//! Packing and unpacking are inverse operations.

/// Pixels with an alpha value below this threshold are treated as
/// transparent when keying drops the alpha channel.
pub const OPAQUE_ALPHA_THRESHOLD: u8 = 128;

/// Packed integer encoding of a color, used as a tally key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorKey(u32);

impl ColorKey {
    /// Packs RGB channels as `(r<<16)|(g<<8)|b`
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorKey((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
    }

    /// Packs RGBA channels as `(r<<24)|(g<<16)|(b<<8)|a`
    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorKey((u32::from(r) << 24) | (u32::from(g) << 16) | (u32::from(b) << 8) | u32::from(a))
    }

    /// Unpacks an RGB-packed key back into its channels
    pub fn to_rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// Unpacks an RGBA-packed key back into its channels
    pub fn to_rgba(self) -> (u8, u8, u8, u8) {
        (
            (self.0 >> 24) as u8,
            (self.0 >> 16) as u8,
            (self.0 >> 8) as u8,
            self.0 as u8,
        )
    }

    /// The raw packed value
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// How pixels are turned into tally keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keying {
    /// Alpha is dropped from the key; pixels below the opaque threshold
    /// contribute nothing to the tally
    Rgb,
    /// Every pixel contributes its full RGBA key
    Rgba,
}

impl Keying {
    /// Selects the keying rule for a scan
    pub fn for_transparency(include_transparency: bool) -> Self {
        if include_transparency {
            Keying::Rgba
        } else {
            Keying::Rgb
        }
    }

    /// Keys one pixel, or returns `None` when the pixel is dropped
    pub fn key(self, r: u8, g: u8, b: u8, a: u8) -> Option<ColorKey> {
        match self {
            Keying::Rgba => Some(ColorKey::from_rgba(r, g, b, a)),
            Keying::Rgb if a < OPAQUE_ALPHA_THRESHOLD => None,
            Keying::Rgb => Some(ColorKey::from_rgb(r, g, b)),
        }
    }

    /// RGB components of a key produced under this keying.
    ///
    /// Alpha is never part of the display form, even when it is part of
    /// the key.
    pub fn display_rgb(self, key: ColorKey) -> (u8, u8, u8) {
        match self {
            Keying::Rgb => key.to_rgb(),
            Keying::Rgba => {
                let (r, g, b, _) = key.to_rgba();
                (r, g, b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_packing_layout() {
        assert_eq!(ColorKey::from_rgb(1, 2, 3).as_u32(), 0x010203);
        assert_eq!(ColorKey::from_rgb(255, 255, 255).as_u32(), 0xFFFFFF);
        assert_eq!(ColorKey::from_rgb(0, 0, 0).as_u32(), 0);
    }

    #[test]
    fn test_rgba_packing_layout() {
        assert_eq!(ColorKey::from_rgba(1, 2, 3, 4).as_u32(), 0x01020304);
        assert_eq!(
            ColorKey::from_rgba(255, 255, 255, 255).as_u32(),
            0xFFFFFFFF
        );
    }

    #[test]
    fn test_rgb_round_trip() {
        // Every channel byte boundary plus a spread of interior values
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    assert_eq!(ColorKey::from_rgb(r, g, b).to_rgb(), (r, g, b));
                }
            }
        }
    }

    #[test]
    fn test_rgba_round_trip() {
        for r in (0..=255u16).step_by(51) {
            for g in (0..=255u16).step_by(51) {
                for b in (0..=255u16).step_by(51) {
                    for a in (0..=255u16).step_by(51) {
                        let (r, g, b, a) = (r as u8, g as u8, b as u8, a as u8);
                        assert_eq!(
                            ColorKey::from_rgba(r, g, b, a).to_rgba(),
                            (r, g, b, a)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_rgb_keying_drops_below_threshold() {
        assert_eq!(Keying::Rgb.key(10, 20, 30, 0), None);
        assert_eq!(
            Keying::Rgb.key(10, 20, 30, OPAQUE_ALPHA_THRESHOLD - 1),
            None
        );
    }

    #[test]
    fn test_rgb_keying_keeps_at_threshold() {
        assert_eq!(
            Keying::Rgb.key(10, 20, 30, OPAQUE_ALPHA_THRESHOLD),
            Some(ColorKey::from_rgb(10, 20, 30))
        );
        assert_eq!(
            Keying::Rgb.key(10, 20, 30, 255),
            Some(ColorKey::from_rgb(10, 20, 30))
        );
    }

    #[test]
    fn test_rgb_keying_drops_alpha_from_key() {
        // Two opaque-enough pixels differing only in alpha key identically
        assert_eq!(Keying::Rgb.key(1, 2, 3, 200), Keying::Rgb.key(1, 2, 3, 255));
    }

    #[test]
    fn test_rgba_keying_keeps_every_pixel() {
        assert_eq!(
            Keying::Rgba.key(10, 20, 30, 0),
            Some(ColorKey::from_rgba(10, 20, 30, 0))
        );
        assert_ne!(Keying::Rgba.key(1, 2, 3, 0), Keying::Rgba.key(1, 2, 3, 255));
    }

    #[test]
    fn test_display_rgb_matches_keying() {
        let rgb_key = Keying::Rgb.key(9, 8, 7, 255).unwrap();
        assert_eq!(Keying::Rgb.display_rgb(rgb_key), (9, 8, 7));

        let rgba_key = Keying::Rgba.key(9, 8, 7, 13).unwrap();
        assert_eq!(Keying::Rgba.display_rgb(rgba_key), (9, 8, 7));
    }

    #[test]
    fn test_for_transparency() {
        assert_eq!(Keying::for_transparency(false), Keying::Rgb);
        assert_eq!(Keying::for_transparency(true), Keying::Rgba);
    }
}
