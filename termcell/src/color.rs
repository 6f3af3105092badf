/// A terminal color in 8-bit sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `0xRRGGBB` literal, as palettes are usually written.
    pub const fn hex(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Convert from OKLCH (lightness 0..1, chroma, hue in degrees).
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        use palette::{IntoColor, Oklch, Srgb};

        let oklch = Oklch::new(l, c, h);
        let srgb: Srgb = oklch.into_color();
        let (r, g, b) = srgb.into_format::<u8>().into_components();

        Rgb::new(r, g, b)
    }

    /// Linear blend from `self` (t = 0.0) to `other` (t = 1.0).
    pub fn lerp(self, other: Rgb, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Darken toward black by `amount` (0.0 = unchanged, 1.0 = black).
    pub fn dim(self, amount: f32) -> Self {
        // Integer multiplier in 0..=256, 256 meaning unchanged.
        let mult = ((1.0 - amount.clamp(0.0, 1.0)) * 256.0) as u16;
        let scale = |v: u8| ((v as u16 * mult) >> 8) as u8;
        Rgb::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(c: Rgb) -> Self {
        crossterm::style::Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}
