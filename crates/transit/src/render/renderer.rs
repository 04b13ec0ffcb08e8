//! Map rendering.
//!
//! Output order is fixed and part of the contract:
//!
//! 1. one polyline per non-empty route, routes sorted by name
//! 2. route name labels at the first stop (and at the turnaround of a linear
//!    route when it differs from the first stop)
//! 3. one marker per stop touched by a rendered route, stops sorted by name
//! 4. stop name labels, in the same stop order
//!
//! Every label is a pair: a halo underlay painted in the underlayer color,
//! then the foreground text.

use std::collections::BTreeMap;

use crate::identifiers::StopId;
use crate::models::{traits::*, types::*};
use crate::provider::expander::turnaround_index;
use crate::render::primitives::*;
use crate::render::settings::{Color, PaletteCycle, RenderSettings};
use crate::spatial::projector::{GeoProjector, ScreenPoint};

const LABEL_FONT_FAMILY: &str = "Verdana";
const ROUTE_LABEL_FONT_WEIGHT: &str = "bold";
const STOP_MARKER_FILL: &str = "white";
const STOP_LABEL_FILL: &str = "black";

pub struct MapRenderer {
    settings: RenderSettings,
}

impl MapRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Projector fitted to every stop served by a route
    pub fn projector<C: CatalogueReader + ?Sized>(&self, catalogue: &C) -> GeoProjector {
        GeoProjector::new(
            catalogue
                .stops_used_by_routes()
                .into_iter()
                .map(|id| catalogue.stop(id).coordinates),
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        )
    }

    /// Draw the whole network
    ///
    /// Fails only on an empty palette when at least one route has stops.
    pub fn render<C: CatalogueReader + ?Sized>(&self, catalogue: &C) -> Result<Vec<Primitive>> {
        let projector = self.projector(catalogue);

        let mut routes: Vec<&Route> = catalogue
            .route_names()
            .into_iter()
            .filter_map(|name| catalogue.find_route(name))
            .map(|id| catalogue.route(id))
            .filter(|route| !route.is_empty())
            .collect();
        routes.sort_by(|a, b| a.name.cmp(&b.name));

        let mut palette = PaletteCycle::new(&self.settings.color_palette);
        let colored = routes
            .into_iter()
            .map(|route| palette.next_color().map(|color| (route, color)))
            .collect::<Result<Vec<_>>>()?;

        let position = |id: StopId| projector.project(catalogue.stop(id).coordinates);
        let mut primitives = Vec::new();

        for &(route, color) in &colored {
            primitives.push(self.route_line(route, color, &position));
        }

        for &(route, color) in &colored {
            let first = route.stops[0];
            self.push_route_label(&mut primitives, &route.name, color, position(first));

            if !route.circular {
                if let Some(turnaround) = turnaround_index(route.stops.len()).map(|i| route.stops[i]) {
                    if turnaround != first {
                        self.push_route_label(&mut primitives, &route.name, color, position(turnaround));
                    }
                }
            }
        }

        let stops: BTreeMap<&str, StopId> = colored
            .iter()
            .flat_map(|(route, _)| route.stops.iter())
            .map(|&id| (catalogue.stop(id).name.as_ref(), id))
            .collect();

        for &id in stops.values() {
            primitives.push(Primitive::Circle(Circle {
                center: position(id),
                radius: self.settings.stop_radius,
                style: PathStyle::default().with_fill(Color::named(STOP_MARKER_FILL)),
            }));
        }

        for (&name, &id) in &stops {
            self.push_stop_label(&mut primitives, name, position(id));
        }

        tracing::debug!(
            routes = colored.len(),
            stops = stops.len(),
            primitives = primitives.len(),
            zoom = projector.zoom(),
            "rendered map"
        );

        Ok(primitives)
    }

    fn route_line(
        &self,
        route: &Route,
        color: &Color,
        position: &impl Fn(StopId) -> ScreenPoint,
    ) -> Primitive {
        Primitive::Polyline(Polyline {
            points: route.stops.iter().map(|&id| position(id)).collect(),
            style: PathStyle::default()
                .with_fill(Color::None)
                .with_stroke(color.clone(), self.settings.line_width)
                .rounded(),
        })
    }

    fn underlay(&self) -> PathStyle {
        PathStyle::default()
            .with_fill(self.settings.underlayer_color.clone())
            .with_stroke(self.settings.underlayer_color.clone(), self.settings.underlayer_width)
            .rounded()
    }

    fn push_route_label(&self, primitives: &mut Vec<Primitive>, name: &str, color: &Color, at: ScreenPoint) {
        let text = Text {
            position: at,
            offset: self.settings.bus_label_offset,
            font_size: self.settings.bus_label_font_size,
            font_family: Some(LABEL_FONT_FAMILY.to_string()),
            font_weight: Some(ROUTE_LABEL_FONT_WEIGHT.to_string()),
            data: name.to_string(),
            style: PathStyle::default(),
        };

        primitives.push(Primitive::Text(Text {
            style: self.underlay(),
            ..text.clone()
        }));
        primitives.push(Primitive::Text(Text {
            style: PathStyle::default().with_fill(color.clone()),
            ..text
        }));
    }

    fn push_stop_label(&self, primitives: &mut Vec<Primitive>, name: &str, at: ScreenPoint) {
        let text = Text {
            position: at,
            offset: self.settings.stop_label_offset,
            font_size: self.settings.stop_label_font_size,
            font_family: Some(LABEL_FONT_FAMILY.to_string()),
            font_weight: None,
            data: name.to_string(),
            style: PathStyle::default(),
        };

        primitives.push(Primitive::Text(Text {
            style: self.underlay(),
            ..text.clone()
        }));
        primitives.push(Primitive::Text(Text {
            style: PathStyle::default().with_fill(Color::named(STOP_LABEL_FILL)),
            ..text
        }));
    }
}
