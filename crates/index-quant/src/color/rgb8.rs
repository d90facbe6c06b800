//! 8-bit RGB triple
//!
//! Used both for input pixels and for palette entries. Distances are
//! computed on the raw byte values, with no gamma or perceptual correction.

/// A color with 8-bit red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb8 {
    /// Create a new color from channel values.
    ///
    /// # Example
    /// ```
    /// use index_quant::Rgb8;
    /// let red = Rgb8::new(255, 0, 0);
    /// assert_eq!(red.r, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a grey color with all three channels set to `v`.
    #[inline]
    pub const fn grey(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance to `other` in RGB space.
    ///
    /// Per-channel differences are taken in `i32` before squaring, so the
    /// result is exact: the maximum is `3 * 255^2 = 195075`.
    ///
    /// # Example
    /// ```
    /// use index_quant::Rgb8;
    /// let black = Rgb8::new(0, 0, 0);
    /// let white = Rgb8::new(255, 255, 255);
    /// assert_eq!(black.distance_squared(white), 195_075);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Rgb8) -> i32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        dr * dr + dg * dg + db * db
    }
}

impl From<[u8; 3]> for Rgb8 {
    #[inline]
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb8> for [u8; 3] {
    #[inline]
    fn from(color: Rgb8) -> Self {
        color.to_bytes()
    }
}
