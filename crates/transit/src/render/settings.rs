//! Rendering configuration and colors.

use std::fmt;

use palette::{Alpha, Srgb};

use crate::models::types::{CatalogueError, Result};
use crate::spatial::projector::ScreenPoint;

/// A drawing color
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Color {
    /// Explicitly no paint
    #[default]
    None,
    /// A color keyword such as `white`
    Named(String),
    Rgb(Srgb<u8>),
    Rgba(Alpha<Srgb<u8>, f32>),
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::Rgb(Srgb::new(red, green, blue))
    }

    pub fn rgba(red: u8, green: u8, blue: u8, opacity: f32) -> Self {
        Self::Rgba(Alpha {
            color: Srgb::new(red, green, blue),
            alpha: opacity,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Named(name) => write!(f, "{name}"),
            Self::Rgb(rgb) => write!(f, "rgb({},{},{})", rgb.red, rgb.green, rgb.blue),
            Self::Rgba(rgba) => write!(
                f,
                "rgba({},{},{},{})",
                rgba.color.red, rgba.color.green, rgba.color.blue, rgba.alpha
            ),
        }
    }
}

/// Everything the map renderer can be configured with
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,

    pub line_width: f64,
    pub stop_radius: f64,

    pub bus_label_font_size: u32,
    pub bus_label_offset: ScreenPoint,

    pub stop_label_font_size: u32,
    pub stop_label_offset: ScreenPoint,

    pub underlayer_color: Color,
    pub underlayer_width: f64,

    /// Route colors, handed out round-robin in route name order
    pub color_palette: Vec<Color>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1200.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: ScreenPoint::new(7.0, 15.0),
            stop_label_font_size: 20,
            stop_label_offset: ScreenPoint::new(7.0, -3.0),
            underlayer_color: Color::rgba(255, 255, 255, 0.85),
            underlayer_width: 3.0,
            color_palette: vec![
                Color::named("green"),
                Color::rgb(255, 160, 0),
                Color::named("red"),
            ],
        }
    }
}

/// Round-robin walk over a color palette
#[derive(Clone, Debug)]
pub struct PaletteCycle<'a> {
    palette: &'a [Color],
    next: usize,
}

impl<'a> PaletteCycle<'a> {
    pub fn new(palette: &'a [Color]) -> Self {
        Self { palette, next: 0 }
    }

    /// Hand out the current color and advance, wrapping past the end
    ///
    /// An empty palette has no valid index and always fails.
    pub fn next_color(&mut self) -> Result<&'a Color> {
        let color = self
            .palette
            .get(self.next)
            .ok_or(CatalogueError::InvalidPaletteIndex {
                index: self.next,
                len: self.palette.len(),
            })?;
        self.next = (self.next + 1) % self.palette.len();
        Ok(color)
    }
}
