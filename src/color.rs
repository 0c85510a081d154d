#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }
}

pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

/// Pixels of this color become transparent when a sheet is loaded
pub const COLOR_KEY: Color = Color::rgb(0, 0xff, 0xff);
