use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}

/// One region feature: polygon rings in geographic degrees.
///
/// The outer Vec is one entry per polygon (MultiPolygon features contribute
/// several), each polygon being a list of rings.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    pub id: Option<String>,
    pub properties: Map<String, Value>,
    pub polygons: Vec<Vec<Vec<GeoPoint>>>,
}

/// The static boundary dataset, treated as an opaque region collection.
///
/// Loaded at most once per scene mount; absence is a valid degraded state in
/// which the globe is simply never built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryDataset {
    pub features: Vec<BoundaryFeature>,
}

#[derive(Debug)]
pub enum BoundaryError {
    NotAFeatureCollection,
    InvalidFeature { index: usize, reason: String },
}

impl std::fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryError::NotAFeatureCollection => {
                write!(f, "expected GeoJSON FeatureCollection")
            }
            BoundaryError::InvalidFeature { index, reason } => {
                write!(f, "invalid feature at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for BoundaryError {}

impl BoundaryDataset {
    pub fn from_geojson_str(payload: &str) -> Result<Self, BoundaryError> {
        let value: Value =
            serde_json::from_str(payload).map_err(|e| BoundaryError::InvalidFeature {
                index: 0,
                reason: format!("JSON parse error: {e}"),
            })?;
        Self::from_geojson_value(value)
    }

    pub fn from_geojson_value(value: Value) -> Result<Self, BoundaryError> {
        let obj = value
            .as_object()
            .ok_or(BoundaryError::NotAFeatureCollection)?;
        let ty = obj
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or(BoundaryError::NotAFeatureCollection)?;
        if ty != "FeatureCollection" {
            return Err(BoundaryError::NotAFeatureCollection);
        }

        let features_val = obj
            .get("features")
            .and_then(|v| v.as_array())
            .ok_or(BoundaryError::NotAFeatureCollection)?;

        let mut features = Vec::with_capacity(features_val.len());
        for (index, feat_val) in features_val.iter().enumerate() {
            let feat_obj = feat_val
                .as_object()
                .ok_or(BoundaryError::InvalidFeature {
                    index,
                    reason: "feature must be an object".to_string(),
                })?;

            let id = match feat_obj.get("id") {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            };

            let properties = feat_obj
                .get("properties")
                .and_then(|v| v.as_object())
                .cloned()
                .unwrap_or_default();

            let geometry_val =
                feat_obj
                    .get("geometry")
                    .ok_or(BoundaryError::InvalidFeature {
                        index,
                        reason: "feature missing geometry".to_string(),
                    })?;

            // Only region polygons matter for the globe overlay; other
            // geometry types in the collection are skipped, not rejected.
            let Some(polygons) = parse_polygons(geometry_val)
                .map_err(|reason| BoundaryError::InvalidFeature { index, reason })?
            else {
                continue;
            };

            features.push(BoundaryFeature {
                id,
                properties,
                polygons,
            });
        }

        Ok(Self { features })
    }
}

fn parse_polygons(value: &Value) -> Result<Option<Vec<Vec<Vec<GeoPoint>>>>, String> {
    let obj = value
        .as_object()
        .ok_or("geometry must be an object".to_string())?;
    let ty = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or("geometry missing type".to_string())?;

    let coords = obj
        .get("coordinates")
        .ok_or("geometry missing coordinates".to_string())?;

    match ty {
        "Polygon" => Ok(Some(vec![parse_rings(coords)?])),
        "MultiPolygon" => {
            let polys = coords
                .as_array()
                .ok_or("MultiPolygon coordinates must be an array".to_string())?;
            let mut out = Vec::with_capacity(polys.len());
            for poly in polys {
                out.push(parse_rings(poly)?);
            }
            Ok(Some(out))
        }
        _ => Ok(None),
    }
}

fn parse_rings(coords: &Value) -> Result<Vec<Vec<GeoPoint>>, String> {
    let rings = coords
        .as_array()
        .ok_or("Polygon coordinates must be an array of rings".to_string())?;
    let mut out = Vec::with_capacity(rings.len());
    for ring in rings {
        let arr = ring
            .as_array()
            .ok_or("ring must be an array of positions".to_string())?;
        let mut points = Vec::with_capacity(arr.len());
        for pos in arr {
            points.push(parse_point(pos)?);
        }
        out.push(points);
    }
    Ok(out)
}

fn parse_point(coords: &Value) -> Result<GeoPoint, String> {
    let arr = coords
        .as_array()
        .ok_or("position must be an array".to_string())?;
    if arr.len() < 2 {
        return Err("position must have [lon, lat]".to_string());
    }
    let lon = arr[0].as_f64().ok_or("lon must be a number".to_string())?;
    let lat = arr[1].as_f64().ok_or("lat must be a number".to_string())?;
    Ok(GeoPoint::new(lon, lat))
}

#[cfg(test)]
mod tests {
    use super::{BoundaryDataset, BoundaryError};

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "AU",
                "properties": { "name": "Australia" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[113.0, -22.0], [153.0, -22.0], [133.0, -39.0], [113.0, -22.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
            },
            {
                "type": "Feature",
                "properties": { "name": "split" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[0.0, 0.0], [1.0, 0.0], [0.5, 1.0], [0.0, 0.0]]],
                        [[[10.0, 10.0], [11.0, 10.0], [10.5, 11.0], [10.0, 10.0]]]
                    ]
                }
            }
        ]
    }"#;

    #[test]
    fn keeps_polygon_features_and_skips_points() {
        let dataset = BoundaryDataset::from_geojson_str(SAMPLE).expect("parse dataset");
        assert_eq!(dataset.features.len(), 2);
        assert_eq!(dataset.features[0].id.as_deref(), Some("AU"));
        assert_eq!(dataset.features[1].polygons.len(), 2);
    }

    #[test]
    fn rejects_non_collections() {
        let err = BoundaryDataset::from_geojson_str(r#"{"type":"Feature"}"#).unwrap_err();
        assert!(matches!(err, BoundaryError::NotAFeatureCollection));
    }

    #[test]
    fn reports_malformed_coordinates() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Polygon", "coordinates": [[["x", 1.0]]] }
            }]
        }"#;
        let err = BoundaryDataset::from_geojson_str(payload).unwrap_err();
        assert!(matches!(err, BoundaryError::InvalidFeature { index: 0, .. }));
    }
}
