//! Tag protocol error types

use thiserror::Error;

/// Tag protocol errors
///
/// Validation errors (`InvalidAddress`, `ProtectedPage`, `PayloadTooLarge`)
/// are raised before any byte reaches the transceiver; the remaining variants
/// describe failures on the hardware path.
#[derive(Error, Debug)]
pub enum Error {
    /// Page address outside the tag's address space
    #[error("invalid page address {addr:#04x} (max {max:#04x})")]
    InvalidAddress {
        /// Rejected address
        addr: u16,
        /// Highest addressable page
        max: u8,
    },

    /// Write attempted against a factory/read-only page
    #[error("page {addr:#04x} is factory read-only")]
    ProtectedPage {
        /// Rejected address
        addr: u8,
    },

    /// Identity-record payload exceeds the capacity of a single record
    #[error("record payload too large: {size} bytes (max {max})")]
    PayloadTooLarge {
        /// Encoded payload size
        size: usize,
        /// Maximum allowed
        max: usize,
    },

    /// No tag responded to acquisition
    #[error("no tag present in the field")]
    NoTagPresent,

    /// Tag acquisition timed out
    #[error("timed out acquiring a tag session")]
    AcquireTimeout,

    /// Communication failure after acquisition
    #[error("transceiver failure during {step}")]
    Transceiver {
        /// Protocol step that was in flight
        step: &'static str,
        /// Originating cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Response does not match the expected shape for the command sent
    #[error("malformed response: expected {expected} bytes, got {got}")]
    MalformedResponse {
        /// Expected response length
        expected: usize,
        /// Actual response length
        got: usize,
    },

    /// Tag responded but did not acknowledge a write
    #[error("write to page {addr:#04x} rejected by tag")]
    WriteRejected {
        /// Addressed page
        addr: u8,
    },
}

impl Error {
    /// Wrap a transceiver-level cause with the protocol step it interrupted
    pub fn transceiver<E>(step: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transceiver {
            step,
            source: Box::new(source),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
