use crate::error::{GeoError, Result};
use crate::util::hex::{join_octets, parse_hex_array};
use serde::{Serialize, Serializer};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub const RECORD_SIZE: usize = 8;
pub const MAC_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; MAC_LEN]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_octets(&self.0, ":"))
    }
}

impl FromStr for MacAddress {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != MAC_LEN || parts.iter().any(|p| p.len() != 2) {
            return Err(GeoError::InvalidMac(s.to_string()));
        }
        Ok(MacAddress(parse_hex_array::<MAC_LEN>(&parts.concat())?))
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One scanned access point as stored on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPointRecord {
    pub mac: MacAddress,
    pub channel: u8,
    /// RSSI in dBm
    pub signal_strength: i8,
}

impl AccessPointRecord {
    pub fn from_bytes(e: &[u8; RECORD_SIZE]) -> Self {
        // Layout: [0..6]=mac, [6]=channel (u8), [7]=rssi (i8)
        let mut mac = [0u8; MAC_LEN];
        mac.copy_from_slice(&e[..MAC_LEN]);
        Self {
            mac: MacAddress(mac),
            channel: e[6],
            signal_strength: i8::from_le_bytes([e[7]]),
        }
    }

    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        buf[..MAC_LEN].copy_from_slice(&self.mac.0);
        buf[6] = self.channel;
        buf[7] = self.signal_strength.to_le_bytes()[0];
        buf
    }
}

pub fn write_records(mut w: impl Write, records: &[AccessPointRecord]) -> Result<()> {
    for r in records {
        w.write_all(&r.to_bytes())?;
    }
    Ok(())
}

/// Decode `count` records from the front of `r` and advance it past them.
pub fn read_records(r: &mut &[u8], count: usize, base: usize) -> Result<Vec<AccessPointRecord>> {
    let need = count * RECORD_SIZE;
    if r.len() < need {
        return Err(GeoError::Truncated {
            need: base + need,
            have: base + r.len(),
        });
    }

    let (table, rest) = r.split_at(need);
    let out = table
        .chunks_exact(RECORD_SIZE)
        .map(|chunk| {
            let mut e = [0u8; RECORD_SIZE];
            e.copy_from_slice(chunk);
            AccessPointRecord::from_bytes(&e)
        })
        .collect();

    *r = rest; // advance
    Ok(out)
}
