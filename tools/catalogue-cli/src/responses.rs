use anyhow::Result;
use serde::Serialize;
use transit_catalogue::prelude::*;

use crate::requests::StatRequest;
use crate::svg;

const NOT_FOUND: &str = "not found";
const NO_RENDER_SETTINGS: &str = "no render settings";

/// One answer per stat request, in request order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Bus {
        request_id: i64,
        /// `null` when every stop of the route sits at the same place
        curvature: Option<f64>,
        route_length: u64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Map {
        request_id: i64,
        #[serde(rename = "Map")]
        map: String,
    },
    Error {
        request_id: i64,
        error_message: String,
    },
}

impl Response {
    fn error(request_id: i64, message: &str) -> Self {
        Self::Error {
            request_id,
            error_message: message.to_string(),
        }
    }
}

/// Answer a single stat request
///
/// Unknown names become "not found" responses. A broken render configuration
/// is not recoverable and aborts the whole run.
pub fn answer<C: CatalogueReader + ?Sized>(
    catalogue: &C,
    renderer: Option<&MapRenderer>,
    request: &StatRequest,
) -> Result<Response> {
    let request_id = request.id();

    let response = match request {
        StatRequest::Bus { name, .. } => match route_statistics(catalogue, name) {
            Ok(stats) => Response::Bus {
                request_id,
                curvature: stats.curvature().ok(),
                route_length: stats.route_length,
                stop_count: stats.stop_count,
                unique_stop_count: stats.unique_stop_count,
            },
            Err(err) if err.is_not_found() => Response::error(request_id, NOT_FOUND),
            Err(err) => return Err(err.into()),
        },
        StatRequest::Stop { name, .. } => match stop_statistics(catalogue, name) {
            Ok(stats) => Response::Stop {
                request_id,
                buses: stats.routes,
            },
            Err(err) if err.is_not_found() => Response::error(request_id, NOT_FOUND),
            Err(err) => return Err(err.into()),
        },
        StatRequest::Map { .. } => match renderer {
            Some(renderer) => Response::Map {
                request_id,
                map: svg::render_document(&renderer.render(catalogue)?)?,
            },
            None => {
                tracing::warn!(request_id, "map requested without render settings");
                Response::error(request_id, NO_RENDER_SETTINGS)
            }
        },
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalogue() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", Coordinates::new(0.0, 0.0));
        catalogue.add_stop("B", Coordinates::new(0.0, 10.0));
        catalogue.add_stop("C", Coordinates::new(0.0, 20.0));
        catalogue.add_stop("Same", Coordinates::new(0.0, 20.0));
        catalogue.add_stop("Idle", Coordinates::new(1.0, 1.0));
        catalogue.add_distance("A", "B", 100);
        catalogue.add_distance("B", "C", 200);
        catalogue.add_route("1", &["A", "B", "C"], false);
        catalogue.add_route("flat", &["C", "Same"], false);
        catalogue
    }

    fn bus(id: i64, name: &str) -> StatRequest {
        StatRequest::Bus {
            id,
            name: name.into(),
        }
    }

    fn stop(id: i64, name: &str) -> StatRequest {
        StatRequest::Stop {
            id,
            name: name.into(),
        }
    }

    #[test]
    fn test_bus_response() {
        let response = answer(&catalogue(), None, &bus(7, "1")).unwrap();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["request_id"], json!(7));
        assert_eq!(value["route_length"], json!(600));
        assert_eq!(value["stop_count"], json!(5));
        assert_eq!(value["unique_stop_count"], json!(3));
        assert!(value["curvature"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_indeterminate_curvature_is_null() {
        let response = answer(&catalogue(), None, &bus(1, "flat")).unwrap();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["curvature"], json!(null));
    }

    #[test]
    fn test_not_found_responses() {
        for request in [bus(3, "999"), stop(3, "Nowhere")] {
            let response = answer(&catalogue(), None, &request).unwrap();
            assert_eq!(
                serde_json::to_value(&response).unwrap(),
                json!({"request_id": 3, "error_message": "not found"})
            );
        }
    }

    #[test]
    fn test_stop_responses() {
        let response = answer(&catalogue(), None, &stop(4, "B")).unwrap();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"request_id": 4, "buses": ["1"]})
        );

        let idle = answer(&catalogue(), None, &stop(5, "Idle")).unwrap();
        assert_eq!(
            serde_json::to_value(&idle).unwrap(),
            json!({"request_id": 5, "buses": []})
        );
    }

    #[test]
    fn test_map_response() {
        let renderer = MapRenderer::new(RenderSettings::default());
        let response = answer(&catalogue(), Some(&renderer), &StatRequest::Map { id: 9 }).unwrap();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["request_id"], json!(9));
        assert!(value["Map"].as_str().unwrap().starts_with("<?xml"));
    }

    #[test]
    fn test_map_without_settings() {
        let response = answer(&catalogue(), None, &StatRequest::Map { id: 2 }).unwrap();
        assert_eq!(response, Response::error(2, NO_RENDER_SETTINGS));
    }

    #[test]
    fn test_empty_palette_aborts() {
        let renderer = MapRenderer::new(RenderSettings {
            color_palette: Vec::new(),
            ..RenderSettings::default()
        });
        assert!(answer(&catalogue(), Some(&renderer), &StatRequest::Map { id: 1 }).is_err());
    }
}
