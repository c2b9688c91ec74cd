use crate::container::record::{AccessPointRecord, RECORD_SIZE, read_records, write_records};
use crate::error::{GeoError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Byte 0 is reserved, byte 1 holds the record count.
pub const HEADER_LEN: usize = 2;
pub const MAX_RECORDS: usize = u8::MAX as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Carried verbatim, never interpreted.
    pub reserved: u8,
    pub access_points: Vec<AccessPointRecord>,
    pub connected_ssid: String,
}

impl Capture {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let count = self.access_points.len();
        if count > MAX_RECORDS {
            return Err(GeoError::TooManyRecords(count));
        }
        let mut out =
            Vec::with_capacity(HEADER_LEN + count * RECORD_SIZE + self.connected_ssid.len());
        out.push(self.reserved);
        out.push(count as u8);
        write_records(&mut out, &self.access_points)?;
        out.extend_from_slice(self.connected_ssid.as_bytes());
        Ok(out)
    }
}

pub fn parse_capture(bytes: &[u8]) -> Result<Capture> {
    if bytes.len() < HEADER_LEN {
        return Err(GeoError::Truncated {
            need: HEADER_LEN,
            have: bytes.len(),
        });
    }
    let reserved = bytes[0];
    let count = bytes[1] as usize;
    info!("Found {count} networks.");

    let mut r = &bytes[HEADER_LEN..];
    let access_points = read_records(&mut r, count, HEADER_LEN)?;
    for (i, ap) in access_points.iter().enumerate() {
        debug!(
            "AP[{i}]: mac={} channel={} rssi={}",
            ap.mac, ap.channel, ap.signal_strength
        );
    }

    let connected_ssid = std::str::from_utf8(r)?.to_owned();
    info!("Connected to '{connected_ssid}'");

    Ok(Capture {
        reserved,
        access_points,
        connected_ssid,
    })
}

pub fn read_capture(path: &Path) -> Result<Capture> {
    let bytes = std::fs::read(path)?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    parse_capture(&bytes)
}
