use super::{convert_ops, fetch_ops::OverpassClient, prompt_ops};
use crate::{
    config::StreetFetchConfiguration,
    model::{query::OverpassQuery, response::OverpassResponse, CoordinateOrder, OverpassError},
};
use clap::Parser;
use std::path::{Path, PathBuf};
use streetgrid_core::{
    model::{format_coordinate, BoundingBox},
    util::geojson_ops,
};

/// downloads the streets within a bounding box from the overpass API and saves them as GeoJSON.
/// the bounding box is read interactively from standard input.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct StreetsCliArguments {
    /// path to a .toml or .json file with street download parameters
    #[arg(long)]
    pub configuration_file: Option<String>,
}

impl StreetsCliArguments {
    pub fn run(&self) -> Result<PathBuf, OverpassError> {
        let conf = match &self.configuration_file {
            None => Ok(StreetFetchConfiguration::default()),
            Some(f) => {
                log::info!("reading street download configuration from {f}");
                StreetFetchConfiguration::try_from(f)
            }
        }?;
        let stdin = std::io::stdin();
        let mut reader = stdin.lock();
        let mut writer = std::io::stdout();
        let bbox = prompt_ops::prompt_bounding_box(&mut reader, &mut writer)?;
        let client = OverpassClient::new(&conf.endpoint)?;
        run_street_fetch(&client, &conf, &bbox)
    }
}

/// fetches, converts and writes the streets of a bounding box.
///
/// # Result
/// the path of the written GeoJSON file. nothing is written on failure.
pub fn run_street_fetch(
    client: &OverpassClient,
    conf: &StreetFetchConfiguration,
    bbox: &BoundingBox,
) -> Result<PathBuf, OverpassError> {
    println!(
        "Fetching streets within the bounding box: {}, {}, {}, {}...",
        format_coordinate(bbox.lat_min()),
        format_coordinate(bbox.lat_max()),
        format_coordinate(bbox.lon_min()),
        format_coordinate(bbox.lon_max())
    );
    if bbox.is_degenerate() {
        log::warn!("bounding box {bbox} has zero width or height");
    }
    let query = OverpassQuery::highways(*bbox, conf.spatial_filter, conf.recurse_down);
    let response = client.fetch(&query)?;
    println!("{}", fetched_streets_message(&response));

    if conf.coordinate_order == CoordinateOrder::LatLon {
        log::warn!("writing street coordinates in [lat, lon] order, GeoJSON expects [lon, lat]");
    }
    let feature_collection =
        convert_ops::to_feature_collection(&response, conf.coordinate_order, conf.include_tags)?;
    log::info!(
        "converted {} ways to GeoJSON features",
        feature_collection.features.len()
    );

    let filename = prompt_ops::streets_filename(bbox);
    let out_path = Path::new(&conf.output_directory).join(&filename);
    geojson_ops::write_feature_collection(&out_path, &feature_collection)?;
    println!("GeoJSON data saved as {filename}");
    Ok(out_path)
}

/// counts `way` elements only. node elements returned by the recurse-down
/// step are not streets.
fn fetched_streets_message(response: &OverpassResponse) -> String {
    format!("Fetched {} streets.", response.ways().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::query::SpatialFilter;
    use std::str::FromStr;
    use std::{
        io::{BufRead, BufReader, Write},
        net::TcpListener,
        thread::JoinHandle,
    };

    /// serves a single canned HTTP response on a local port, returning the
    /// endpoint URL and a handle yielding the request line it received.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/api/interpreter", listener.local_addr().unwrap());
        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header == "\r\n" || header.is_empty() {
                    break;
                }
            }
            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
            request_line
        });
        (url, handle)
    }

    fn local_client(url: &str) -> OverpassClient {
        let http = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .unwrap();
        OverpassClient::with_client(url, http)
    }

    fn temp_output_directory(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("streetgrid_{}_{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    const BODY: &str = r#"{"version": 0.6, "elements": [
        {"type": "way", "id": 100, "nodes": [1, 2], "tags": {"highway": "primary"}},
        {"type": "way", "id": 101, "nodes": [2, 3, 1], "tags": {"highway": "service"}},
        {"type": "node", "id": 1, "lat": 42.331, "lon": -83.049},
        {"type": "node", "id": 2, "lat": 42.335, "lon": -83.045},
        {"type": "node", "id": 3, "lat": 42.339, "lon": -83.041}
    ]}"#;

    #[test]
    fn test_run_street_fetch_writes_named_file() {
        let (url, handle) = serve_once("200 OK", BODY);
        let dir = temp_output_directory("fetch_ok");
        let conf = StreetFetchConfiguration {
            endpoint: url.clone(),
            spatial_filter: SpatialFilter::Around,
            output_directory: dir.to_string_lossy().to_string(),
            ..Default::default()
        };
        let bbox = BoundingBox::new(42.33, 42.34, -83.05, -83.04).unwrap();
        let path = run_street_fetch(&local_client(&url), &conf, &bbox).expect("fetch");
        let request_line = handle.join().unwrap();

        assert!(request_line.starts_with("GET /api/interpreter?data="));
        assert_eq!(
            path.file_name().and_then(|f| f.to_str()),
            Some("bbox_streets_42.33_42.34_-83.05_-83.04.geojson")
        );
        let written = geojson_ops::read_feature_collection(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(written.features.len(), 2);
        let second = written.features[1].geometry.as_ref().unwrap();
        assert_eq!(
            second.value,
            geojson::Value::LineString(vec![
                vec![42.335, -83.045],
                vec![42.339, -83.041],
                vec![42.331, -83.049],
            ])
        );
    }

    #[test]
    fn test_run_street_fetch_fails_on_error_status() {
        let (url, handle) = serve_once("429 Too Many Requests", r#"{"remark": "rate limited"}"#);
        let dir = temp_output_directory("fetch_429");
        let conf = StreetFetchConfiguration {
            endpoint: url.clone(),
            output_directory: dir.to_string_lossy().to_string(),
            ..Default::default()
        };
        let bbox = BoundingBox::new(42.33, 42.34, -83.05, -83.04).unwrap();
        let result = run_street_fetch(&local_client(&url), &conf, &bbox);
        handle.join().unwrap();

        assert!(matches!(result, Err(OverpassError::HttpStatusError { .. })));
        let written = dir.join(prompt_ops::streets_filename(&bbox));
        assert!(!written.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_fetched_streets_message_counts_ways() {
        let body = r#"{"elements": [
            {"type": "way", "id": 7, "nodes": [1, 2]},
            {"type": "node", "id": 1, "lat": 42.331, "lon": -83.049},
            {"type": "node", "id": 2, "lat": 42.335, "lon": -83.045}
        ]}"#;
        let response = OverpassResponse::from_str(body).unwrap();
        assert_eq!(fetched_streets_message(&response), "Fetched 1 streets.");
        let response = OverpassResponse::from_str(BODY).unwrap();
        assert_eq!(fetched_streets_message(&response), "Fetched 2 streets.");
    }

    #[test]
    fn test_run_street_fetch_zero_area_box() {
        let (url, handle) = serve_once(
            "200 OK",
            r#"{"elements": [{"type": "way", "id": 3, "nodes": [{"lat": 42.33, "lon": -83.05}, {"lat": 42.33, "lon": -83.04}]}]}"#,
        );
        let dir = temp_output_directory("fetch_zero_area");
        let conf = StreetFetchConfiguration {
            endpoint: url.clone(),
            output_directory: dir.to_string_lossy().to_string(),
            ..Default::default()
        };
        assert_eq!(conf.coordinate_order, CoordinateOrder::LatLon);
        let bbox = BoundingBox::new(42.33, 42.33, -83.05, -83.04).unwrap();
        assert!(bbox.is_degenerate());
        let path = run_street_fetch(&local_client(&url), &conf, &bbox).expect("fetch");
        let request_line = handle.join().unwrap();

        assert!(request_line.starts_with("GET /api/interpreter?data="));
        assert_eq!(
            path.file_name().and_then(|f| f.to_str()),
            Some("bbox_streets_42.33_42.33_-83.05_-83.04.geojson")
        );
        let written = geojson_ops::read_feature_collection(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(written.features.len(), 1);
        assert_eq!(
            written.features[0].geometry.as_ref().unwrap().value,
            geojson::Value::LineString(vec![vec![42.33, -83.05], vec![42.33, -83.04]])
        );
    }
}
