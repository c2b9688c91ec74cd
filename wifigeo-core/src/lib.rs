#![forbid(unsafe_code)]

pub mod error;

pub mod util {
    pub mod hex;
}

pub mod container {
    pub mod capture;
    pub mod record;
}

pub mod geo {
    pub mod client;
    pub mod maplink;
    pub mod request;
    pub mod response;
}

// Re-exports: stable API surface
pub use container::capture::{Capture, parse_capture, read_capture};
pub use container::record::{AccessPointRecord, MacAddress};
pub use geo::client::{GeolocateOptions, Geolocator, HttpGeolocator, locate};
pub use geo::maplink::map_url;
pub use geo::request::{GeolocationRequest, build_json};
pub use geo::response::{GeolocationResponse, Location};
