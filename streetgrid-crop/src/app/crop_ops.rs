use crate::{config::CropConfiguration, model::CropError};
use geo::Intersects;
use geojson::FeatureCollection;
use streetgrid_core::{
    model::BoundingBox,
    util::geojson_ops::{self, feature_geometry},
};

/// keeps the features of a collection whose geometry intersects the bounding box.
///
/// intersection, not containment: a feature that only partially overlaps the
/// box, or touches its boundary, is kept whole and unmodified. features without
/// geometry are dropped. input order is preserved.
///
/// # Arguments
/// * `feature_collection` - the collection to crop
/// * `bbox` - the crop extent
///
/// # Result
/// the retained subset, or an error if any feature geometry cannot be decoded
pub fn crop_feature_collection(
    feature_collection: FeatureCollection,
    bbox: &BoundingBox,
) -> Result<FeatureCollection, CropError> {
    let extent = bbox.to_geometry();
    let FeatureCollection {
        features,
        foreign_members,
        ..
    } = feature_collection;

    let mut retained = Vec::with_capacity(features.len());
    for feature in features.into_iter() {
        let keep = match feature_geometry(&feature)? {
            None => false,
            Some(geometry) => geometry.intersects(&extent),
        };
        if keep {
            retained.push(feature);
        }
    }

    Ok(FeatureCollection {
        bbox: None,
        features: retained,
        foreign_members,
    })
}

/// reads the input file, crops it, and writes the retained features to the output file.
pub fn run(conf: &CropConfiguration) -> Result<FeatureCollection, CropError> {
    let bbox = conf.get_bbox()?;
    log::info!("cropping {} to bbox {bbox}", conf.input_file);
    let input = geojson_ops::read_feature_collection(&conf.input_file)?;
    let n_input = input.features.len();
    let cropped = crop_feature_collection(input, &bbox)?;
    log::info!(
        "retained {} of {n_input} features intersecting the bbox",
        cropped.features.len()
    );
    geojson_ops::write_feature_collection(&conf.output_file, &cropped)?;
    log::info!("cropped GeoJSON saved as {}", conf.output_file);
    Ok(cropped)
}
