/// Straight-alpha RGBA color, one byte per channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Scales the RGB channels by `factor`, leaving alpha untouched.
    ///
    /// Used for the selection halo (factor 0.8). `factor` is clamped so the
    /// result stays within byte range for any input.
    #[inline]
    pub fn dimmed(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// Fully saturated, full-value HSV hue mapped to RGB. Alpha is kept from
    /// `self`, so the color-cycle animation can rotate hue without touching
    /// transparency.
    ///
    /// Standard 60-degree-sector piecewise-linear conversion (S = 1, V = 1).
    pub fn with_hue(self, hue_deg: f32) -> Self {
        let hue = hue_deg.rem_euclid(360.0);
        let x = 1.0 - ((hue / 60.0) % 2.0 - 1.0).abs();

        let (r, g, b) = match hue {
            h if h < 60.0 => (1.0, x, 0.0),
            h if h < 120.0 => (x, 1.0, 0.0),
            h if h < 180.0 => (0.0, 1.0, x),
            h if h < 240.0 => (0.0, x, 1.0),
            h if h < 300.0 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };

        Self {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
            a: self.a,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::opaque(255, 255, 255)
    }
}
