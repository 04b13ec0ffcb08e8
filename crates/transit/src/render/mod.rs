//! Vector map rendering.

pub mod primitives;
pub mod renderer;
pub mod settings;

pub use primitives::{Circle, PathStyle, Polyline, Primitive, StrokeLineCap, StrokeLineJoin, Text};
pub use renderer::MapRenderer;
pub use settings::{Color, PaletteCycle, RenderSettings};
