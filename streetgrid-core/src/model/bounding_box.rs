use geo::{coord, Geometry, Polygon, Rect};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// an axis-aligned rectangle in WGS84 degrees. constructed once per run and
/// never modified. a box with zero width or zero height is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundingBoxRecord")]
pub struct BoundingBox {
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

#[derive(Deserialize)]
struct BoundingBoxRecord {
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

impl TryFrom<BoundingBoxRecord> for BoundingBox {
    type Error = String;

    fn try_from(r: BoundingBoxRecord) -> Result<Self, Self::Error> {
        BoundingBox::new(r.lat_min, r.lat_max, r.lon_min, r.lon_max)
    }
}

impl BoundingBox {
    /// builds a bounding box, validating coordinate ranges and ordering.
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Result<Self, String> {
        let lat_min = validate_lat(lat_min)?;
        let lat_max = validate_lat(lat_max)?;
        let lon_min = validate_lon(lon_min)?;
        let lon_max = validate_lon(lon_max)?;

        if lat_min > lat_max {
            Err(format!(
                "bbox: lat_min must not exceed lat_max, but found [{lat_min},{lat_max}]"
            ))
        } else if lon_min > lon_max {
            Err(format!(
                "bbox: lon_min must not exceed lon_max, but found [{lon_min},{lon_max}]"
            ))
        } else {
            Ok(Self {
                lat_min,
                lat_max,
                lon_min,
                lon_max,
            })
        }
    }

    /// builds a bounding box from an (xmin, ymin, xmax, ymax) extent where x is
    /// longitude and y is latitude.
    pub fn from_extent(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, String> {
        Self::new(ymin, ymax, xmin, xmax)
    }

    pub fn lat_min(&self) -> f64 {
        self.lat_min
    }

    pub fn lat_max(&self) -> f64 {
        self.lat_max
    }

    pub fn lon_min(&self) -> f64 {
        self.lon_min
    }

    pub fn lon_max(&self) -> f64 {
        self.lon_max
    }

    pub fn is_degenerate(&self) -> bool {
        self.lat_min == self.lat_max || self.lon_min == self.lon_max
    }

    /// the box as a rectangle in (x=lon, y=lat) space
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.lon_min, y: self.lat_min },
            coord! { x: self.lon_max, y: self.lat_max },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }

    pub fn to_geometry(&self) -> Geometry<f64> {
        Geometry::Polygon(self.to_polygon())
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            format_coordinate(self.lat_min),
            format_coordinate(self.lat_max),
            format_coordinate(self.lon_min),
            format_coordinate(self.lon_max)
        )
    }
}

impl FromStr for BoundingBox {
    type Err = String;

    /// parses "lat_min,lat_max,lon_min,lon_max"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(format!(
                "expected format: lat_min,lat_max,lon_min,lon_max, got: {s}"
            ));
        }
        let lat_min = parse_num(parts[0])?;
        let lat_max = parse_num(parts[1])?;
        let lon_min = parse_num(parts[2])?;
        let lon_max = parse_num(parts[3])?;
        BoundingBox::new(lat_min, lat_max, lon_min, lon_max)
    }
}

/// renders a coordinate the way it is printed in output file names: shortest
/// round-trip decimal, with integral values keeping a trailing ".0". non-zero
/// magnitudes below 1e-4 or from 1e16 up use exponent form with a signed,
/// two-digit exponent (`1e-05`, `1e+16`).
pub fn format_coordinate(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() {
        format!("{value}")
    } else if value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let rendered = format!("{value:e}");
        match rendered.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => rendered,
        }
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn validate_lat(lat: f64) -> Result<f64, String> {
    validate_range(lat, -90.0, 90.0).map_err(|e| format!("invalid latitude: {e}"))
}

fn validate_lon(lon: f64) -> Result<f64, String> {
    validate_range(lon, -180.0, 180.0).map_err(|e| format!("invalid longitude: {e}"))
}

fn validate_range(v: f64, min: f64, max: f64) -> Result<f64, String> {
    if !(min..=max).contains(&v) {
        Err(format!(
            "number '{v}' is not valid, must be in range [{min},{max}]"
        ))
    } else {
        Ok(v)
    }
}

fn parse_num(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| format!("not a number: {s}"))
}
