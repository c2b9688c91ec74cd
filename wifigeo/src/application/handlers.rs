use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;
use wifigeo_core::error::Result;
use wifigeo_core::{
    GeolocateOptions, Geolocator, HttpGeolocator, build_json, locate, map_url, read_capture,
};

pub fn handle_convert(
    input: PathBuf,
    geokey: Option<String>,
    endpoint: String,
    json_out: Option<PathBuf>,
) -> Result<()> {
    let geo = geokey
        .map(|api_key| HttpGeolocator::new(GeolocateOptions { api_key, endpoint }))
        .transpose()?;
    let geo = geo.as_ref().map(|g| g as &dyn Geolocator);
    convert(&input, json_out.as_deref(), geo, &mut std::io::stdout())
}

/// Parse `input`, print the request payload and, with a geolocator, the resolved map link.
pub fn convert(
    input: &Path,
    json_out: Option<&Path>,
    geo: Option<&dyn Geolocator>,
    out: &mut impl Write,
) -> Result<()> {
    let cap = read_capture(input)?;
    let json = build_json(&cap)?;
    writeln!(out, "{json}")?;
    if let Some(path) = json_out {
        std::fs::write(path, &json)?;
        debug!("wrote payload to {}", path.display());
    }

    if let Some(geo) = geo {
        writeln!(out, "Geocoding...")?;
        let resp = locate(geo, &json)?;
        writeln!(out, "{}", map_url(&resp.location))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wifigeo_core::error::GeoError;

    const PAYLOAD: &str = r#"{"considerIp": false, "wifiAccessPoints": [{"macAddress": "aa:bb:cc:dd:ee:ff", "signalStrength": -10, "channel": 6}]}"#;

    struct FakeGeo {
        body: &'static str,
        seen: std::sync::Mutex<Option<String>>,
    }

    impl FakeGeo {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                seen: std::sync::Mutex::new(None),
            }
        }
    }

    impl Geolocator for FakeGeo {
        fn submit(&self, payload: &str) -> Result<String> {
            *self.seen.lock().unwrap() = Some(payload.to_string());
            Ok(self.body.to_string())
        }
    }

    fn capture_file(dir: &tempfile::TempDir) -> PathBuf {
        let mut bytes = vec![0u8, 1, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF, 0x06, 0xF6];
        bytes.extend_from_slice(b"MyWifi");
        let path = dir.path().join("scan.bin");
        std::fs::write(&path, bytes).unwrap();
        path
    }

    fn lines(out: Vec<u8>) -> Vec<String> {
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn without_key_prints_payload_only() {
        let dir = tempfile::tempdir().unwrap();
        let input = capture_file(&dir);
        let mut out = Vec::new();
        convert(&input, None, None, &mut out).unwrap();
        assert_eq!(lines(out), vec![PAYLOAD.to_string()]);
    }

    #[test]
    fn with_geolocator_prints_map_link() {
        let dir = tempfile::tempdir().unwrap();
        let input = capture_file(&dir);
        let geo = FakeGeo::new(r#"{"location":{"lat":1.5,"lng":2.5}}"#);
        let mut out = Vec::new();
        convert(&input, None, Some(&geo), &mut out).unwrap();

        assert_eq!(
            lines(out),
            vec![
                PAYLOAD.to_string(),
                "Geocoding...".to_string(),
                "https://www.google.com/maps/search/?api=1&query=1.5,2.5".to_string(),
            ]
        );
        assert_eq!(geo.seen.lock().unwrap().as_deref(), Some(PAYLOAD));
    }

    #[test]
    fn writes_payload_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = capture_file(&dir);
        let json_path = dir.path().join("req.json");
        convert(&input, Some(json_path.as_path()), None, &mut Vec::new()).unwrap();
        assert_eq!(std::fs::read_to_string(&json_path).unwrap(), PAYLOAD);
    }

    #[test]
    fn malformed_capture_stops_before_network() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("short.bin");
        std::fs::write(&input, [0u8, 2, 1, 2, 3]).unwrap();
        let geo = FakeGeo::new("{}");
        let mut out = Vec::new();
        let res = convert(&input, None, Some(&geo), &mut out);
        assert!(matches!(res, Err(GeoError::Truncated { .. })));
        assert!(out.is_empty());
        assert!(geo.seen.lock().unwrap().is_none());
    }

    #[test]
    fn bad_response_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = capture_file(&dir);
        let geo = FakeGeo::new(r#"{"error":"quota"}"#);
        let res = convert(&input, None, Some(&geo), &mut Vec::new());
        assert!(matches!(res, Err(GeoError::Json(_))));
    }
}
