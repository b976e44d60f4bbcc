use geo::{BoundingRect, LineString, MultiPoint, Point, Rect, line_string};
use geojson::{Bbox, Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use petgraph::visit::EdgeRef;
use serde_json::json;

use super::{DetailedRoute, VehicleLeg, WalkingLeg};
use crate::{Error, RoadNetwork};

/// Share of the extent added on every side of the bounding box
const BBOX_PADDING: f64 = 0.1;

impl WalkingLeg {
    /// Convert a walking leg to a `GeoJSON` Feature
    fn to_feature(&self, leg_type: &str) -> Result<Feature, Error> {
        let coordinates = line_string![
            (x: self.from_location.x(), y: self.from_location.y()),
            (x: self.to_location.x(), y: self.to_location.y()),
        ];

        let value = json!({
            "type": "Feature",
            "geometry": Geometry::new((&coordinates).into()),
            "properties": {
                "leg_type": leg_type,
                "distance_km": self.distance_km,
                "duration_minutes": self.duration_minutes,
            }
        });

        to_feature(value)
    }
}

impl VehicleLeg {
    /// A single-vertex ride is drawn as a point, since a line needs two positions
    fn to_feature(&self) -> Result<Feature, Error> {
        let geometry = match self.coordinates.as_slice() {
            [point] => Geometry::new(GeoJsonValue::from(point)),
            coordinates => {
                let line: LineString<f64> = coordinates.iter().map(|point| point.0).collect();
                Geometry::new((&line).into())
            }
        };

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "leg_type": "vehicle",
                "vertices": self.vertices,
                "distance_km": self.distance_km,
                "duration_minutes": self.duration_minutes,
            }
        });

        to_feature(value)
    }
}

impl DetailedRoute {
    /// Converts the route to a `GeoJSON` `FeatureCollection`.
    ///
    /// With `include_network` every road edge is added as a `network_edge`
    /// feature and every vertex as a `network_vertex` point, drawn under the
    /// route for context.
    pub fn to_geojson(
        &self,
        network: &RoadNetwork,
        include_network: bool,
    ) -> Result<FeatureCollection, Error> {
        let mut features = Vec::new();

        if include_network {
            features.extend(network_features(network)?);
        }

        if self.is_direct_walk() {
            if let Some(walk) = &self.access_leg {
                features.push(walk.to_feature("direct_walk")?);
            }
        } else {
            if let Some(access) = &self.access_leg {
                features.push(access.to_feature("access_walk")?);
            }
            if let Some(vehicle) = &self.vehicle_leg {
                features.push(vehicle.to_feature()?);
            }
            if let Some(egress) = &self.egress_leg {
                features.push(egress.to_feature("egress_walk")?);
            }
        }

        features.push(endpoint_feature(self.origin, "origin")?);
        features.push(endpoint_feature(self.destination, "destination")?);

        Ok(FeatureCollection {
            features,
            bbox: self.padded_bbox(network),
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(
        &self,
        network: &RoadNetwork,
        include_network: bool,
    ) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(network, include_network)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    /// Extent of the network and both query points, padded on every side
    fn padded_bbox(&self, network: &RoadNetwork) -> Option<Bbox> {
        let mut points = vec![self.origin, self.destination];
        if let Some(extent) = network.bounding_rect() {
            points.extend([Point::from(extent.min()), Point::from(extent.max())]);
        }
        let rect: Rect<f64> = MultiPoint::from(points).bounding_rect()?;

        let pad_x = rect.width() * BBOX_PADDING;
        let pad_y = rect.height() * BBOX_PADDING;
        Some(vec![
            rect.min().x - pad_x,
            rect.min().y - pad_y,
            rect.max().x + pad_x,
            rect.max().y + pad_y,
        ])
    }
}

fn network_features(network: &RoadNetwork) -> Result<Vec<Feature>, Error> {
    let edges = network
        .graph
        .edge_references()
        .map(|edge| {
            let from = network.graph[edge.source()].geometry;
            let to = network.graph[edge.target()].geometry;
            let line = line_string![(x: from.x(), y: from.y()), (x: to.x(), y: to.y())];

            to_feature(json!({
                "type": "Feature",
                "geometry": Geometry::new((&line).into()),
                "properties": {
                    "leg_type": "network_edge",
                    "from": edge.source().index(),
                    "to": edge.target().index(),
                    "length_km": edge.weight().length_km,
                    "speed_kmh": edge.weight().speed_kmh,
                }
            }))
        });

    let vertices = network.graph.node_weights().map(|vertex| {
        to_feature(json!({
            "type": "Feature",
            "geometry": Geometry::new(GeoJsonValue::from(&vertex.geometry)),
            "properties": {
                "point_type": "network_vertex",
                "id": vertex.id,
            }
        }))
    });

    edges.chain(vertices).collect()
}

fn endpoint_feature(point: Point<f64>, point_type: &str) -> Result<Feature, Error> {
    to_feature(json!({
        "type": "Feature",
        "geometry": Geometry::new(GeoJsonValue::from(&point)),
        "properties": {
            "point_type": point_type,
        }
    }))
}

fn to_feature(value: serde_json::Value) -> Result<Feature, Error> {
    Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
