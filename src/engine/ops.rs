//! The four high-level tag operations
//!
//! Every operation runs the same shape: validate locally, acquire a session,
//! perform one or more exchanges, release, return. Validation failures never
//! touch the transceiver; no operation leaves a session acquired, including
//! on error or unwind. Retry policy belongs to the caller — retrying a
//! partially completed write is unsafe without state this engine does not
//! keep.

use tracing::{debug, trace};

use crate::protocol::{
    ACCESS_PAGE, AUTH0_PAGE, MemoryPage, PACK_PAGE, PWD_PAGE, Page, ProtectionConfig, Result,
    TagStatus, decode_read_page, decode_write_ack, encode_read_page, encode_uri_message,
    encode_write_page,
};

use super::{Technology, Transceiver};

/// Tag memory protocol engine
///
/// Wraps a [`Transceiver`] and exposes the supported tag operations. One
/// operation at a time: the engine takes `&mut self` and fully releases the
/// session before returning.
pub struct Engine<T: Transceiver> {
    transceiver: T,
}

impl<T: Transceiver> Engine<T> {
    /// Create an engine over the given transceiver
    pub const fn new(transceiver: T) -> Self {
        Self { transceiver }
    }

    /// Consume the engine and return the transceiver
    pub fn into_inner(self) -> T {
        self.transceiver
    }

    /// Read the tag's protection status
    ///
    /// Performs a single read of the AUTH0 configuration page and derives
    /// [`TagStatus`] from its threshold byte. The result is never cached;
    /// the tag may change between calls.
    ///
    /// # Errors
    ///
    /// `NoTagPresent` if acquisition found no tag, plus the hardware-path
    /// errors of a page read.
    pub fn inspect(&mut self) -> Result<TagStatus> {
        // AUTH0_PAGE is a compile-time constant inside the address space
        let auth0_page = Page::new(AUTH0_PAGE)?;
        let mut session = Session::acquire(&mut self.transceiver, Technology::NfcA)?;
        let page = session.read_page(auth0_page)?;
        drop(session);

        let status = TagStatus::from_auth0(page.bytes()[3]);
        debug!(%status, "inspected tag");
        Ok(status)
    }

    /// Read one 4-byte memory page
    ///
    /// # Errors
    ///
    /// Address validation happens at [`Page`] construction, before this call;
    /// here the hardware-path errors of a read apply.
    pub fn read_page(&mut self, page: Page) -> Result<MemoryPage> {
        let mut session = Session::acquire(&mut self.transceiver, Technology::NfcA)?;
        let data = session.read_page(page)?;
        drop(session);

        debug!(%page, %data, "read page");
        Ok(data)
    }

    /// Enable password protection
    ///
    /// Four writes in fixed order: password, PACK, AUTH0, ACCESS. Password
    /// and PACK go first because writing AUTH0 is what activates protection;
    /// a failure before that point leaves the tag safely unprotected. On the
    /// first failed acknowledgment the engine stops, releases the session,
    /// and reports the failing page — previously written pages are not rolled
    /// back.
    ///
    /// # Errors
    ///
    /// `WriteRejected` names the page whose write was refused; transceiver
    /// failures carry the step that was in flight.
    pub fn enable_protection(&mut self, config: &ProtectionConfig) -> Result<()> {
        let steps: [(u8, [u8; 4]); 4] = [
            (PWD_PAGE, config.password),
            (PACK_PAGE, [config.pack[0], config.pack[1], 0x00, 0x00]),
            // AUTH0 threshold lives in byte 3 of its page
            (AUTH0_PAGE, [0x00, 0x00, 0x00, config.auth0.value()]),
            (ACCESS_PAGE, [config.access_flags, 0x00, 0x00, 0x00]),
        ];

        let mut session = Session::acquire(&mut self.transceiver, Technology::NfcA)?;
        for (addr, data) in steps {
            session.write_page(Page::new(addr)?, data)?;
        }
        drop(session);

        debug!(first_protected = %config.auth0, "protection enabled");
        Ok(())
    }

    /// Write a URI identity record to the tag
    ///
    /// Encodes the URI as a single-record NDEF message and hands it to the
    /// transceiver's structured-record path.
    ///
    /// # Errors
    ///
    /// `PayloadTooLarge` for an empty or oversized URI (checked before any
    /// transceiver call), plus the hardware-path errors of a record write.
    pub fn write_identity_record(&mut self, uri: &str) -> Result<()> {
        let message = encode_uri_message(uri)?;

        let mut session = Session::acquire(&mut self.transceiver, Technology::Ndef)?;
        trace!(len = message.len(), "writing identity record");
        session.write_record(&message)?;
        drop(session);

        debug!(uri, "identity record written");
        Ok(())
    }
}

/// An acquired transceiver session
///
/// Releases the handle on drop, so release runs exactly once on every exit
/// path — success, error, and unwind alike. When acquisition itself fails no
/// session exists and nothing is released.
struct Session<'a, T: Transceiver> {
    transceiver: &'a mut T,
    handle: Option<T::Handle>,
}

impl<'a, T: Transceiver> Session<'a, T> {
    fn acquire(transceiver: &'a mut T, technology: Technology) -> Result<Self> {
        trace!(%technology, "acquiring session");
        let handle = transceiver.acquire(technology)?;
        Ok(Self {
            transceiver,
            handle: Some(handle),
        })
    }

    /// One read round-trip: encode, exchange, slice out the page
    fn read_page(&mut self, page: Page) -> Result<MemoryPage> {
        let command = encode_read_page(page);
        let handle = self.handle.as_mut().expect("session handle live until drop");
        let response = self.transceiver.exchange(handle, &command)?;
        decode_read_page(&response, page)
    }

    /// One write round-trip: encode, exchange, check the acknowledgment
    fn write_page(&mut self, page: Page, data: [u8; 4]) -> Result<()> {
        let command = encode_write_page(page, data)?;
        trace!(%page, "write");
        let handle = self.handle.as_mut().expect("session handle live until drop");
        let response = self.transceiver.exchange(handle, &command)?;
        decode_write_ack(&response, page)
    }

    fn write_record(&mut self, message: &[u8]) -> Result<()> {
        let handle = self.handle.as_mut().expect("session handle live until drop");
        self.transceiver.write_record(handle, message)
    }
}

impl<T: Transceiver> Drop for Session<'_, T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.transceiver.release(handle);
            trace!("session released");
        }
    }
}
