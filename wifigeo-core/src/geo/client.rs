use crate::error::{GeoError, Result};
use crate::geo::response::{GeolocationResponse, parse_response};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/geolocation/v1/geolocate";

#[derive(Clone, Debug)]
pub struct GeolocateOptions {
    pub api_key: String,
    pub endpoint: String,
}

impl Default for GeolocateOptions {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// Sends a request payload to a geolocation service and returns the raw response body.
pub trait Geolocator: Send + Sync {
    fn submit(&self, payload: &str) -> Result<String>;
}

pub struct HttpGeolocator {
    client: Client,
    opts: GeolocateOptions,
}

impl HttpGeolocator {
    pub fn new(opts: GeolocateOptions) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, opts })
    }
}

impl Geolocator for HttpGeolocator {
    fn submit(&self, payload: &str) -> Result<String> {
        debug!("POST {}", self.opts.endpoint);
        let resp = self
            .client
            .post(&self.opts.endpoint)
            .query(&[("key", self.opts.api_key.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_owned())
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            return Err(GeoError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

pub fn locate(geo: &dyn Geolocator, payload: &str) -> Result<GeolocationResponse> {
    let body = geo.submit(payload)?;
    info!("{body}");
    let resp = parse_response(&body)?;
    if let Some(acc) = resp.accuracy {
        info!("accuracy: {acc} m");
    }
    Ok(resp)
}
