/*
[INPUT]:  System clock and OS random source
[OUTPUT]: GMT request timestamps and single-use request nonces
[POS]:    Auth layer - per-request freshness values for signed requests
[UPDATE]: When the Date header format or nonce shape changes
*/

use chrono::{DateTime, Utc};
use rand::RngCore;
use rand::rngs::OsRng;

use crate::http::{CustodyError, Result};

/// Number of random bytes in a nonce
const NONCE_BYTES: usize = 16;

/// Byte lengths of the hyphen-separated nonce groups
const NONCE_GROUPS: [usize; 5] = [4, 2, 2, 2, 6];

/// Source of the timestamp and nonce attached to each signed request
pub trait Freshness: Send + Sync + std::fmt::Debug {
    /// Current time as an RFC 1123 string ending in `GMT`
    fn timestamp(&self) -> String;

    /// A fresh random nonce; never empty on success
    fn nonce(&self) -> Result<String>;
}

/// Freshness backed by the system clock and the OS random source
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFreshness;

impl Freshness for SystemFreshness {
    fn timestamp(&self) -> String {
        gmt_now()
    }

    fn nonce(&self) -> Result<String> {
        nonce()
    }
}

/// Current UTC time formatted for the `Date` header
pub fn gmt_now() -> String {
    format_gmt(Utc::now())
}

/// Format a time as RFC 1123 with the literal `GMT` zone
pub fn format_gmt(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Generate a UUID-shaped nonce from 16 random bytes.
///
/// The groups are upper-case hex, 8-4-4-4-12 characters. The value is not a
/// validated UUID (no version or variant bits are set).
pub fn nonce() -> Result<String> {
    let mut bytes = [0u8; NONCE_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CustodyError::Signing(format!("random source unavailable for nonce: {e}")))?;
    Ok(format_nonce(&bytes))
}

fn format_nonce(bytes: &[u8; NONCE_BYTES]) -> String {
    let mut groups = Vec::with_capacity(NONCE_GROUPS.len());
    let mut offset = 0;
    for len in NONCE_GROUPS {
        groups.push(hex::encode_upper(&bytes[offset..offset + len]));
        offset += len;
    }
    groups.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn is_nonce_shaped(value: &str) -> bool {
        let groups: Vec<&str> = value.split('-').collect();
        groups.len() == 5
            && groups
                .iter()
                .zip([8, 4, 4, 4, 12])
                .all(|(g, len)| g.len() == len && g.chars().all(|c| c.is_ascii_hexdigit()))
    }

    #[test]
    fn test_format_gmt() {
        let time = Utc.with_ymd_and_hms(2020, 3, 3, 12, 26, 57).unwrap();
        assert_eq!(format_gmt(time), "Tue, 03 Mar 2020 12:26:57 GMT");
    }

    #[test]
    fn test_gmt_now_ends_with_gmt() {
        let now = gmt_now();
        assert!(now.ends_with(" GMT"));
        assert_eq!(now.len(), "Tue, 03 Mar 2020 12:26:57 GMT".len());
    }

    #[test]
    fn test_format_nonce_groups() {
        let bytes: [u8; 16] = [
            0x36, 0xdb, 0xe3, 0x3e, 0xd5, 0x29, 0x45, 0x5c, 0xb0, 0x63, 0x8e, 0xef, 0x0f, 0x5f,
            0x59, 0xe3,
        ];
        assert_eq!(format_nonce(&bytes), "36DBE33E-D529-455C-B063-8EEF0F5F59E3");
    }

    #[test]
    fn test_nonce_shape() {
        let value = nonce().unwrap();
        assert_eq!(value.len(), 36);
        assert!(is_nonce_shaped(&value), "unexpected nonce {value}");
        assert_eq!(value, value.to_ascii_uppercase());
    }

    #[test]
    fn test_nonces_are_distinct() {
        let values: HashSet<String> = (0..1000).map(|_| nonce().unwrap()).collect();
        assert_eq!(values.len(), 1000);
    }

    #[test]
    fn test_system_freshness() {
        let freshness = SystemFreshness;
        assert!(is_nonce_shaped(&freshness.nonce().unwrap()));
        assert!(freshness.timestamp().ends_with("GMT"));
    }
}
