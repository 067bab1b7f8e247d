//! Presentation values the host can override. Nothing here affects paging.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Geometry of one pagination dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    /// Horizontal gap on each side of the dot.
    pub margin: f32,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 8.0,
            corner_radius: 4.0,
            margin: 4.0,
        }
    }
}

/// Placement of the dot row inside the swiper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationStyle {
    /// Distance from the bottom edge.
    pub bottom: f32,
}

impl Default for PaginationStyle {
    fn default() -> Self {
        Self { bottom: 10.0 }
    }
}

/// Look of the default `<` / `>` button labels and their wrapper row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub font_size: f32,
    pub color: Color,
    pub background: Color,
    pub padding: Padding,
    /// Horizontal inset of the button row.
    pub wrapper_padding: Padding,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            font_size: 24.0,
            color: Color::BLACK,
            background: Color::rgba(1.0, 1.0, 1.0, 0.7),
            padding: Padding::all(10.0),
            wrapper_padding: Padding::symmetric(10.0, 0.0),
        }
    }
}

/// Outer container and pager styling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerStyle {
    pub background: Option<Color>,
    pub padding: Padding,
}
