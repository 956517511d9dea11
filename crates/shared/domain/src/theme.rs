//! Static theme palette.
//!
//! The values mirror a Material-style `createTheme` call: a handful of literals
//! (mode, primary, secondary, background, custom text colour) plus the entries the
//! toolkit derives from them (contrast text, mode-dependent text colours).

use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum contrast ratio for white text on a palette colour.
pub const CONTRAST_THRESHOLD: f64 = 3.0;

/// An sRGB colour with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Color {
    pub const WHITE: Self = Self::hex(0xff_ff_ff);
    pub const BLACK: Self = Self::hex(0x00_00_00);

    /// Opaque colour from a `0xRRGGBB` literal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hex(rgb: u32) -> Self {
        Self { r: (rgb >> 16) as u8, g: (rgb >> 8) as u8, b: rgb as u8, alpha: 1.0 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// WCAG 2.x relative luminance. Alpha is ignored.
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.039_28 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
        }

        0.0722_f64.mul_add(
            linear(self.b),
            0.2126_f64.mul_add(linear(self.r), 0.7152 * linear(self.g)),
        )
    }

    /// Contrast ratio between two colours, from 1.0 (identical) to 21.0 (black on white).
    #[must_use]
    pub fn contrast_ratio(a: Self, b: Self) -> f64 {
        let (la, lb) = (a.relative_luminance(), b.relative_luminance());
        let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
        (hi + 0.05) / (lo + 0.05)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Light or dark appearance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    Light,
    #[default]
    Dark,
}

impl PaletteMode {
    /// Value for the CSS `color-scheme` property.
    #[must_use]
    pub const fn color_scheme(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color_scheme())
    }
}

/// A main colour plus the text colour that stays readable on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    pub main: Color,
    pub contrast_text: Color,
}

impl PaletteColor {
    /// Derives `contrast_text`: white if it reaches [`CONTRAST_THRESHOLD`], dark text otherwise.
    #[must_use]
    pub fn new(main: Color) -> Self {
        let contrast_text = if Color::contrast_ratio(main, Color::WHITE) >= CONTRAST_THRESHOLD {
            Color::WHITE
        } else {
            TextPalette::light().primary
        };
        Self { main, contrast_text }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Background {
    pub main: Color,
    pub default: Color,
    pub paper: Color,
}

/// Text colours for a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextPalette {
    pub primary: Color,
    pub secondary: Color,
    pub disabled: Color,
}

impl TextPalette {
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::BLACK.with_alpha(0.87),
            secondary: Color::BLACK.with_alpha(0.6),
            disabled: Color::BLACK.with_alpha(0.38),
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::WHITE,
            secondary: Color::WHITE.with_alpha(0.7),
            disabled: Color::WHITE.with_alpha(0.5),
        }
    }

    #[must_use]
    pub const fn for_mode(mode: PaletteMode) -> Self {
        match mode {
            PaletteMode::Light => Self::light(),
            PaletteMode::Dark => Self::dark(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub mode: PaletteMode,
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub background: Background,
    pub text: TextPalette,
    /// The palette's extra `textColor.main` entry.
    pub text_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: &'static str,
    /// Base font size in px.
    pub font_size: u16,
}

impl Default for Typography {
    fn default() -> Self {
        Self { font_family: "Roboto, Helvetica, Arial, sans-serif", font_size: 14 }
    }
}

/// The complete style configuration handed to the theme provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
}

impl Theme {
    /// The `FoodPacker` dark theme.
    #[must_use]
    pub fn dark() -> Self {
        let mode = PaletteMode::Dark;
        Self {
            palette: Palette {
                mode,
                primary: PaletteColor::new(Color::hex(0xe9_1e_63)),
                secondary: PaletteColor::new(Color::hex(0x24_2b_2e)),
                background: Background {
                    main: Color::hex(0x00_00_00),
                    default: Color::hex(0x0d_0d_0d),
                    paper: Color::hex(0x0d_0d_0d),
                },
                text: TextPalette::for_mode(mode),
                text_color: Color::hex(0x11_11_11),
            },
            typography: Typography::default(),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> PaletteMode {
        self.palette.mode
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
