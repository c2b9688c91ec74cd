use crate::error::Result;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GeolocationResponse {
    pub location: Location,
    /// Radius in meters, when the service reports one.
    #[serde(default)]
    pub accuracy: Option<f64>,
}

pub fn parse_response(body: &str) -> Result<GeolocationResponse> {
    Ok(serde_json::from_str(body)?)
}
