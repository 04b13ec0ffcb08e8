//! Vector drawing primitives produced by the map renderer.
//!
//! These carry position, paint and font attributes only; turning them into
//! SVG or any other format is left to the caller.

use std::fmt;

use crate::render::settings::Color;
use crate::spatial::projector::ScreenPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeLineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for StrokeLineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeLineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl fmt::Display for StrokeLineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Arcs => "arcs",
            Self::Bevel => "bevel",
            Self::Miter => "miter",
            Self::MiterClip => "miter-clip",
            Self::Round => "round",
        })
    }
}

/// Fill and stroke attributes; unset attributes are left to the consumer
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
    pub line_cap: Option<StrokeLineCap>,
    pub line_join: Option<StrokeLineJoin>,
}

impl PathStyle {
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(color);
        self.stroke_width = Some(width);
        self
    }

    /// Round caps and joins
    pub fn rounded(mut self) -> Self {
        self.line_cap = Some(StrokeLineCap::Round);
        self.line_join = Some(StrokeLineJoin::Round);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<ScreenPoint>,
    pub style: PathStyle,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Circle {
    pub center: ScreenPoint,
    pub radius: f64,
    pub style: PathStyle,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
    pub position: ScreenPoint,
    pub offset: ScreenPoint,
    pub font_size: u32,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub data: String,
    pub style: PathStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Polyline(Polyline),
    Circle(Circle),
    Text(Text),
}
