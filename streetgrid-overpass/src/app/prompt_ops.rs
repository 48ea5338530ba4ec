use crate::model::OverpassError;
use std::io::{BufRead, Write};
use streetgrid_core::model::{format_coordinate, BoundingBox};

const PROMPTS: [&str; 4] = [
    "Enter the minimum latitude: ",
    "Enter the maximum latitude: ",
    "Enter the minimum longitude: ",
    "Enter the maximum longitude: ",
];

/// asks for the four bounding box coordinates one at a time, in the order
/// min latitude, max latitude, min longitude, max longitude.
pub fn prompt_bounding_box<R, W>(reader: &mut R, writer: &mut W) -> Result<BoundingBox, OverpassError>
where
    R: BufRead,
    W: Write,
{
    let mut values = [0.0_f64; 4];
    for (value, prompt) in values.iter_mut().zip(PROMPTS) {
        write!(writer, "{prompt}")?;
        writer.flush()?;
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(OverpassError::InvalidUserInput(format!(
                "input ended before answering '{}'",
                prompt.trim_end_matches([':', ' '])
            )));
        }
        *value = line.trim().parse::<f64>().map_err(|_| {
            OverpassError::InvalidUserInput(format!("not a number: '{}'", line.trim()))
        })?;
    }
    let [lat_min, lat_max, lon_min, lon_max] = values;
    BoundingBox::new(lat_min, lat_max, lon_min, lon_max).map_err(OverpassError::InvalidUserInput)
}

/// `bbox_streets_{lat_min}_{lat_max}_{lon_min}_{lon_max}.geojson`
pub fn streets_filename(bbox: &BoundingBox) -> String {
    format!(
        "bbox_streets_{}_{}_{}_{}.geojson",
        format_coordinate(bbox.lat_min()),
        format_coordinate(bbox.lat_max()),
        format_coordinate(bbox.lon_min()),
        format_coordinate(bbox.lon_max())
    )
}
