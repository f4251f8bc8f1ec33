//! Command codec (encode/decode)
//!
//! Pure translation between high-level intents and the exact byte frames the
//! tag understands. Addresses are validated before they get here ([`Page`]
//! cannot hold an out-of-range value), so no frame is ever emitted for an
//! address outside the tag's memory.

use super::{
    ACK, CMD_READ, CMD_WRITE, Error, MemoryPage, PAGE_SIZE, Page, PageClass, READ_SPAN_LEN, Result,
};

/// Build a READ command frame
///
/// # Format
///
/// ```text
/// [0x30] [addr]
/// ```
///
/// The tag answers with four consecutive pages (16 bytes) starting at `addr`.
#[must_use]
pub const fn encode_read_page(page: Page) -> [u8; 2] {
    [CMD_READ, page.value()]
}

/// Extract the requested page from a READ response
///
/// The tag returns 16 bytes; only the first 4 correspond to the requested
/// page.
///
/// # Errors
///
/// Returns `MalformedResponse` if the response is shorter than 16 bytes.
/// Never returns partial data.
pub fn decode_read_page(response: &[u8], page: Page) -> Result<MemoryPage> {
    if response.len() < READ_SPAN_LEN {
        tracing::debug!(
            page = %page,
            got = response.len(),
            "short READ response"
        );
        return Err(Error::MalformedResponse {
            expected: READ_SPAN_LEN,
            got: response.len(),
        });
    }
    let mut bytes = [0u8; PAGE_SIZE];
    bytes.copy_from_slice(&response[..PAGE_SIZE]);
    Ok(MemoryPage::new(bytes))
}

/// Build a WRITE command frame
///
/// # Format
///
/// ```text
/// [0xA2] [addr] [d0] [d1] [d2] [d3]
/// ```
///
/// # Errors
///
/// Returns `ProtectedPage` for factory pages (0x00-0x03); those are never
/// writable and the frame must not exist.
pub fn encode_write_page(page: Page, data: [u8; PAGE_SIZE]) -> Result<[u8; 6]> {
    if page.class() == PageClass::Factory {
        return Err(Error::ProtectedPage { addr: page.value() });
    }
    let addr = page.value();
    Ok([CMD_WRITE, addr, data[0], data[1], data[2], data[3]])
}

/// Interpret the tag's acknowledgment of a write
///
/// An accepted write is answered with the ACK nibble `0x0A`; an empty
/// response or any other value means the tag refused the write.
///
/// # Errors
///
/// Returns `WriteRejected` carrying the addressed page.
pub fn decode_write_ack(response: &[u8], page: Page) -> Result<()> {
    match response.first() {
        Some(&byte) if byte & 0x0F == ACK => Ok(()),
        _ => Err(Error::WriteRejected { addr: page.value() }),
    }
}
