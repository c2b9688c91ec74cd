use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("capture truncated: need {need} bytes, have {have}")]
    Truncated { need: usize, have: usize },

    #[error("connected network name is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("too many access points for one capture: {0} (max 255)")]
    TooManyRecords(usize),

    #[error("invalid MAC address: {0}")]
    InvalidMac(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("geolocation service returned {status}: {body}")]
    Status { status: u16, body: String },
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, GeoError>;
