use crate::error::{GeoError, Result};

pub fn parse_hex_array<const N: usize>(hex_str: &str) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    let bytes = hex::decode(hex_str.trim())
        .map_err(|e| GeoError::InvalidMac(format!("{hex_str}: {e}")))?;
    if bytes.len() != N {
        return Err(GeoError::InvalidMac(format!(
            "{hex_str}: expected {N} bytes ({} hex chars), got {}",
            N * 2,
            bytes.len()
        )));
    }
    out.copy_from_slice(&bytes);
    Ok(out)
}

/// Lowercase hex octets joined by `sep`, e.g. `aa:bb:cc`.
pub fn join_octets(bytes: &[u8], sep: &str) -> String {
    bytes
        .iter()
        .map(|b| hex::encode([*b]))
        .collect::<Vec<_>>()
        .join(sep)
}
