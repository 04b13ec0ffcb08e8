use serde::Deserialize;
use std::collections::BTreeMap;
use transit_catalogue::prelude::*;

/// Top-level JSON request document
#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub render_settings: Option<RenderSettingsRequest>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            Self::Bus { id, .. } | Self::Stop { id, .. } | Self::Map { id } => *id,
        }
    }
}

/// A color as written in requests: a keyword, `[r, g, b]` or `[r, g, b, opacity]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorRequest {
    Named(String),
    Rgb([u8; 3]),
    Rgba(u8, u8, u8, f32),
}

impl From<ColorRequest> for Color {
    fn from(color: ColorRequest) -> Self {
        match color {
            ColorRequest::Named(name) => Color::Named(name),
            ColorRequest::Rgb([r, g, b]) => Color::rgb(r, g, b),
            ColorRequest::Rgba(r, g, b, opacity) => Color::rgba(r, g, b, opacity),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderSettingsRequest {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: [f64; 2],
    pub stop_label_font_size: u32,
    pub stop_label_offset: [f64; 2],
    pub underlayer_color: ColorRequest,
    pub underlayer_width: f64,
    pub color_palette: Vec<ColorRequest>,
}

impl From<RenderSettingsRequest> for RenderSettings {
    fn from(request: RenderSettingsRequest) -> Self {
        let [bus_dx, bus_dy] = request.bus_label_offset;
        let [stop_dx, stop_dy] = request.stop_label_offset;

        RenderSettings {
            width: request.width,
            height: request.height,
            padding: request.padding,
            line_width: request.line_width,
            stop_radius: request.stop_radius,
            bus_label_font_size: request.bus_label_font_size,
            bus_label_offset: ScreenPoint::new(bus_dx, bus_dy),
            stop_label_font_size: request.stop_label_font_size,
            stop_label_offset: ScreenPoint::new(stop_dx, stop_dy),
            underlayer_color: request.underlayer_color.into(),
            underlayer_width: request.underlayer_width,
            color_palette: request.color_palette.into_iter().map(Color::from).collect(),
        }
    }
}

impl Document {
    /// Split base requests into the records the catalogue ingests
    pub fn batch(&self) -> IngestBatch {
        let mut batch = IngestBatch::default();

        for request in &self.base_requests {
            match request {
                BaseRequest::Stop {
                    name,
                    latitude,
                    longitude,
                    road_distances,
                } => {
                    batch.stops.push(StopRecord {
                        name: name.clone(),
                        coordinates: Coordinates::new(*latitude, *longitude),
                    });
                    batch.distances.extend(road_distances.iter().map(|(to, &meters)| {
                        DistanceRecord {
                            from: name.clone(),
                            to: to.clone(),
                            meters,
                        }
                    }));
                }
                BaseRequest::Bus {
                    name,
                    stops,
                    is_roundtrip,
                } => batch.routes.push(RouteRecord {
                    name: name.clone(),
                    stops: stops.clone(),
                    circular: *is_roundtrip,
                }),
            }
        }

        batch
    }
}
