use crate::model::GeoJsonIoError;
use geojson::{Feature, FeatureCollection, GeoJson};
use std::{path::Path, str::FromStr};

/// helper to read a FeatureCollection from a file
pub fn read_feature_collection<P>(input_file: P) -> Result<FeatureCollection, GeoJsonIoError>
where
    P: AsRef<Path>,
{
    let path = input_file.as_ref().to_string_lossy().to_string();
    let contents =
        std::fs::read_to_string(input_file.as_ref()).map_err(|source| GeoJsonIoError::ReadError {
            path: path.clone(),
            source,
        })?;
    let dataset = GeoJson::from_str(&contents).map_err(|source| GeoJsonIoError::InvalidGeoJson {
        path: path.clone(),
        source,
    })?;
    match dataset {
        GeoJson::Geometry(_) => Err(GeoJsonIoError::NotFeatureCollection {
            path,
            found: String::from("Geometry"),
        }),
        GeoJson::Feature(_) => Err(GeoJsonIoError::NotFeatureCollection {
            path,
            found: String::from("Feature"),
        }),
        GeoJson::FeatureCollection(feature_collection) => {
            log::debug!(
                "read {} features from {path}",
                feature_collection.features.len()
            );
            Ok(feature_collection)
        }
    }
}

/// writes a FeatureCollection to a file. the collection is encoded in full
/// before the file is created so a failed encoding leaves nothing behind.
pub fn write_feature_collection<P>(
    output_file: P,
    feature_collection: &FeatureCollection,
) -> Result<(), GeoJsonIoError>
where
    P: AsRef<Path>,
{
    let encoded = serde_json::to_string(feature_collection)?;
    std::fs::write(output_file.as_ref(), encoded).map_err(|source| GeoJsonIoError::WriteError {
        path: output_file.as_ref().to_string_lossy().to_string(),
        source,
    })?;
    log::debug!(
        "wrote {} features to {}",
        feature_collection.features.len(),
        output_file.as_ref().to_string_lossy()
    );
    Ok(())
}

/// decodes the geometry of a feature, if it has one.
pub fn feature_geometry(feature: &Feature) -> Result<Option<geo::Geometry<f64>>, GeoJsonIoError> {
    match &feature.geometry {
        None => Ok(None),
        Some(geometry) => {
            let decoded = geo::Geometry::<f64>::try_from(geometry.clone())
                .map_err(|e| GeoJsonIoError::InvalidGeometry(feature_label(feature), e))?;
            Ok(Some(decoded))
        }
    }
}

/// a printable identifier for a feature in log and error messages.
pub fn feature_label(feature: &Feature) -> String {
    match &feature.id {
        Some(geojson::feature::Id::String(s)) => s.to_string(),
        Some(geojson::feature::Id::Number(n)) => n.to_string(),
        None => String::from("<no id>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Geometry, Value};
    use std::path::PathBuf;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("streetgrid_{}_{name}", std::process::id()))
    }

    fn line_feature(coords: Vec<Vec<f64>>) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(coords))),
            id: None,
            properties: Some(geojson::JsonObject::new()),
            foreign_members: None,
        }
    }

    #[test]
    fn test_write_then_read_keeps_count_and_coordinates() {
        let path = temp_file("roundtrip.geojson");
        let features = vec![
            line_feature(vec![vec![-83.05, 42.33], vec![-83.04, 42.34]]),
            line_feature(vec![
                vec![-83.051, 42.331],
                vec![-83.049, 42.332],
                vec![-83.047, 42.333],
            ]),
        ];
        let fc = FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        };
        write_feature_collection(&path, &fc).expect("write");
        let result = read_feature_collection(&path).expect("read");
        std::fs::remove_file(&path).unwrap();

        assert_eq!(result.features.len(), 2);
        for (expected, found) in fc.features.iter().zip(result.features.iter()) {
            assert_eq!(expected.geometry, found.geometry);
        }
    }

    #[test]
    fn test_read_rejects_single_feature() {
        let path = temp_file("single.geojson");
        let feature = line_feature(vec![vec![0.0, 0.0], vec![1.0, 1.0]]);
        std::fs::write(&path, GeoJson::Feature(feature).to_string()).unwrap();
        let result = read_feature_collection(&path);
        std::fs::remove_file(&path).unwrap();
        match result {
            Err(GeoJsonIoError::NotFeatureCollection { found, .. }) => assert_eq!(found, "Feature"),
            other => panic!("expected NotFeatureCollection, found {other:?}"),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_feature_collection(temp_file("does_not_exist.geojson"));
        assert!(matches!(result, Err(GeoJsonIoError::ReadError { .. })));
    }

    #[test]
    fn test_read_malformed_file() {
        let path = temp_file("malformed.geojson");
        std::fs::write(&path, "{\"type\": \"FeatureCollection\", \"features\": [").unwrap();
        let result = read_feature_collection(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(GeoJsonIoError::InvalidGeoJson { .. })));
    }

    #[test]
    fn test_feature_geometry() {
        let feature = line_feature(vec![vec![0.0, 0.0], vec![1.0, 1.0]]);
        let geometry = feature_geometry(&feature).expect("decode");
        assert!(matches!(geometry, Some(geo::Geometry::LineString(_))));

        let empty = Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: None,
            foreign_members: None,
        };
        assert!(feature_geometry(&empty).expect("decode").is_none());
    }
}
