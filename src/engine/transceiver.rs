//! Transceiver capability consumed by the engine
//!
//! Radio-level session setup, timeouts, and structured-record plumbing belong
//! to the implementation behind this trait; the engine only sequences
//! command/response exchanges against an acquired session.

use std::fmt;

use crate::protocol::Result;

/// Tag technology to acquire a session for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technology {
    /// Raw ISO 14443-A frame exchange
    NfcA,
    /// Structured NDEF record access
    Ndef,
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NfcA => write!(f, "NfcA"),
            Self::Ndef => write!(f, "Ndef"),
        }
    }
}

/// Abstract command/response channel to a tag
///
/// The engine treats the transceiver as exclusively owned for the duration of
/// one operation: acquire, one or more exchanges, release. Implementations
/// enforce their own timeouts; the engine adds none.
pub trait Transceiver {
    /// Token for an acquired tag session
    type Handle;

    /// Acquire a tag session for the given technology
    ///
    /// # Errors
    ///
    /// `NoTagPresent` if no tag responded, `AcquireTimeout` if the field
    /// stayed empty for the implementation's deadline.
    fn acquire(&mut self, technology: Technology) -> Result<Self::Handle>;

    /// Send a command frame and return the raw response bytes
    ///
    /// # Errors
    ///
    /// `Transceiver` on any communication failure after acquisition.
    fn exchange(&mut self, handle: &mut Self::Handle, command: &[u8]) -> Result<Vec<u8>>;

    /// Release a session
    ///
    /// Must be infallible and safe to call exactly once per acquired handle;
    /// consuming the handle makes double release unrepresentable.
    fn release(&mut self, handle: Self::Handle);

    /// Write a pre-encoded NDEF message through the session
    ///
    /// # Errors
    ///
    /// `Transceiver` on any communication failure after acquisition.
    fn write_record(&mut self, handle: &mut Self::Handle, message: &[u8]) -> Result<()>;
}
