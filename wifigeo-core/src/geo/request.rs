use crate::container::capture::Capture;
use crate::container::record::MacAddress;
use crate::error::Result;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WifiAccessPoint {
    pub mac_address: MacAddress,
    pub signal_strength: i8,
    pub channel: u8,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeolocationRequest {
    pub consider_ip: bool,
    pub wifi_access_points: Vec<WifiAccessPoint>,
}

impl GeolocationRequest {
    pub fn from_capture(cap: &Capture) -> Self {
        Self {
            consider_ip: false,
            wifi_access_points: cap
                .access_points
                .iter()
                .map(|ap| WifiAccessPoint {
                    mac_address: ap.mac,
                    signal_strength: ap.signal_strength,
                    channel: ap.channel,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut ser)?;
        Ok(std::str::from_utf8(&buf)?.to_owned())
    }
}

/// Single-line output with `", "` and `": "` separators.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, w: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { w.write_all(b", ") }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, w: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { w.write_all(b", ") }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, w: &mut W) -> io::Result<()> {
        w.write_all(b": ")
    }
}

pub fn build_json(cap: &Capture) -> Result<String> {
    GeolocationRequest::from_capture(cap).to_json()
}
