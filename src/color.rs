/// Maximum number of colors in a palette swatch.
pub const MAX_SWATCH_COLORS: usize = 5;

/// 8-bit RGB pixel color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// An ordered swatch of colors that patterns can pull from.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    colors: Vec<Rgb8>,
}

impl Palette {
    /// Build a palette, keeping at most [`MAX_SWATCH_COLORS`] entries.
    pub fn new(mut colors: Vec<Rgb8>) -> Self {
        colors.truncate(MAX_SWATCH_COLORS);
        Self { colors }
    }

    /// Color at `index`, clamped into the swatch. An empty palette yields
    /// black.
    pub fn swatch_color(&self, index: usize) -> Rgb8 {
        match self.colors.last() {
            None => Rgb8::BLACK,
            Some(last) => *self.colors.get(index).unwrap_or(last),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
