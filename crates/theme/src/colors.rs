/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const NAVY:   Self = Self::rgb(0x0a, 0x0f, 0x1a);
    pub const SLATE:  Self = Self::rgb(0x1a, 0x1f, 0x2b);
    pub const AQUA:   Self = Self::rgb(0x00, 0xe0, 0xb8);
    pub const YELLOW: Self = Self::rgb(0xff, 0xd7, 0x00);
    pub const RED:    Self = Self::rgb(0xff, 0x3b, 0x3b);
    pub const WHITE:  Self = Self::rgb(0xff, 0xff, 0xff);
    pub const MINT:   Self = Self::rgb(0x9b, 0xe8, 0xda);
    pub const INK:    Self = Self::rgb(0x07, 0x10, 0x28);
    pub const ICE:    Self = Self::rgb(0xcf, 0xee, 0xff);
    pub const STEEL:  Self = Self::rgb(0x22, 0x34, 0x47);
    pub const SPRING: Self = Self::rgb(0x45, 0xff, 0xd6);
    pub const FOAM:   Self = Self::rgb(0x80, 0xff, 0xd6);

    /// Opaque colour from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |i: usize| -> Option<u8> { u8::from_str_radix(&hex[i..i + 2], 16).ok() };

        match hex.len() {
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?).with_alpha(byte(6)? as f32 / 255.0)),
            _ => None,
        }
    }

    /// Convert to an [`iced::Color`] for use in Iced widgets.
    #[inline]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    /// Return a copy with the alpha channel set to `alpha`.
    #[inline]
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }
}
