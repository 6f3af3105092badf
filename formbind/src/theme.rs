//! Colors for form widgets.

use termcell::Rgb;

/// Named colors the widgets draw with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Page background.
    pub background: Rgb,
    /// Background of buttons, option panels and dialogs.
    pub surface: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    /// Resting border color.
    pub ring: Rgb,
    /// Highlight background and focus border.
    pub accent: Rgb,
    /// Text drawn on top of `accent`.
    pub on_accent: Rgb,
    /// How much a modal darkens what is behind it (0.0..=1.0).
    pub backdrop_dim: f32,
}

impl Theme {
    /// Light theme: white surfaces, gray text, indigo accent.
    pub fn light() -> Self {
        Self {
            background: Rgb::hex(0xf9fafb),
            surface: Rgb::WHITE,
            text: Rgb::hex(0x111827),
            muted: Rgb::hex(0x9ca3af),
            ring: Rgb::hex(0xd1d5db),
            accent: Rgb::hex(0x4f46e5),
            on_accent: Rgb::WHITE,
            backdrop_dim: 0.5,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Rgb::oklch(0.18, 0.02, 260.0),
            surface: Rgb::oklch(0.24, 0.02, 260.0),
            text: Rgb::oklch(0.93, 0.01, 260.0),
            muted: Rgb::oklch(0.65, 0.02, 260.0),
            ring: Rgb::oklch(0.4, 0.02, 260.0),
            accent: Rgb::oklch(0.55, 0.2, 277.0),
            on_accent: Rgb::WHITE,
            backdrop_dim: 0.6,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
