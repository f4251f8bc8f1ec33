//! NDEF URI record encoding
//!
//! Just enough of the NDEF Record Type Definition to express a single URI
//! ("identity record") payload: the standard URI abbreviation table, a
//! short-record header, and the message TLV wrapper the tag's user area
//! expects.

use bytes::{BufMut, Bytes, BytesMut};

use super::{Error, Result};

/// Record header for a single short record: MB=1, ME=1, SR=1, TNF=Well Known
const SR_HEADER: u8 = 0xD1;

/// Well-known type byte for a URI record
const TYPE_URI: u8 = 0x55;

/// NDEF message TLV tag and terminator
const TLV_NDEF: u8 = 0x03;
const TLV_TERMINATOR: u8 = 0xFE;

/// Maximum payload of a short record (its length field is one byte)
const MAX_SR_PAYLOAD: usize = 255;

/// URI abbreviation table (subset in active use; code 0x00 means no prefix)
const URI_PREFIXES: &[(u8, &str)] = &[
    (0x02, "https://www."),
    (0x01, "http://www."),
    (0x04, "https://"),
    (0x03, "http://"),
    (0x05, "tel:"),
    (0x06, "mailto:"),
];

/// Split a URI into its abbreviation code and remainder
fn abbreviate(uri: &str) -> (u8, &str) {
    for &(code, prefix) in URI_PREFIXES {
        if let Some(rest) = uri.strip_prefix(prefix) {
            return (code, rest);
        }
    }
    (0x00, uri)
}

/// Encode a URI as a complete single-record NDEF message, TLV-wrapped
///
/// # Format
///
/// ```text
/// [0x03] [len] [0xD1 0x01 plen 'U' prefix rest...] [0xFE]
/// ```
///
/// # Errors
///
/// Returns `PayloadTooLarge` for an empty URI or one whose encoded payload
/// (prefix byte + remainder) exceeds the short-record limit.
pub fn encode_uri_message(uri: &str) -> Result<Bytes> {
    let (code, rest) = abbreviate(uri);
    let payload_len = 1 + rest.len();
    if uri.is_empty() || payload_len > MAX_SR_PAYLOAD {
        return Err(Error::PayloadTooLarge {
            size: payload_len,
            max: MAX_SR_PAYLOAD,
        });
    }

    // record: header, type length, payload length, type, prefix code, rest
    let record_len = 4 + payload_len;
    let mut buf = BytesMut::with_capacity(record_len + 5);
    buf.put_u8(TLV_NDEF);
    if record_len < 0xFF {
        buf.put_u8(record_len as u8);
    } else {
        // three-byte TLV length form
        buf.put_u8(0xFF);
        buf.put_u16(record_len as u16);
    }
    buf.put_u8(SR_HEADER);
    buf.put_u8(0x01);
    buf.put_u8(payload_len as u8);
    buf.put_u8(TYPE_URI);
    buf.put_u8(code);
    buf.put_slice(rest.as_bytes());
    buf.put_u8(TLV_TERMINATOR);

    Ok(buf.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_abbreviation() {
        let msg = encode_uri_message("https://example.com/a").unwrap();
        // TLV tag, TLV length, then the record
        assert_eq!(msg[0], 0x03);
        assert_eq!(msg[2], 0xD1);
        assert_eq!(msg[3], 0x01);
        assert_eq!(msg[5], b'U');
        assert_eq!(msg[6], 0x04);
        assert_eq!(&msg[7..msg.len() - 1], b"example.com/a");
        assert_eq!(*msg.last().unwrap(), 0xFE);
    }

    #[test]
    fn test_payload_length_counts_prefix_byte() {
        let msg = encode_uri_message("https://www.example.com").unwrap();
        assert_eq!(msg[6], 0x02);
        // payload = prefix byte + "example.com"
        assert_eq!(msg[4] as usize, 1 + "example.com".len());
    }

    #[test]
    fn test_unabbreviated_uri() {
        let msg = encode_uri_message("geo:0,0").unwrap();
        assert_eq!(msg[6], 0x00);
        assert_eq!(&msg[7..msg.len() - 1], b"geo:0,0");
    }

    #[test]
    fn test_empty_uri_rejected() {
        assert!(matches!(
            encode_uri_message(""),
            Err(Error::PayloadTooLarge { .. })
        ));
    }

    #[test]
    fn test_oversized_uri_rejected() {
        let uri = format!("https://{}", "a".repeat(300));
        assert!(matches!(
            encode_uri_message(&uri),
            Err(Error::PayloadTooLarge { size: 301, .. })
        ));
    }

    #[test]
    fn test_max_payload_accepted() {
        let uri = format!("https://{}", "a".repeat(254));
        let msg = encode_uri_message(&uri).unwrap();
        // record is 259 bytes, so the TLV length takes the three-byte form
        assert_eq!(msg[1], 0xFF);
        assert_eq!(u16::from_be_bytes([msg[2], msg[3]]), 259);
        assert_eq!(*msg.last().unwrap(), 0xFE);
    }
}
