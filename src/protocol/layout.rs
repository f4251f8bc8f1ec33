//! NTAG216 memory layout
//!
//! The address map is fixed for the tag family: pages 0x00-0x03 hold the UID,
//! lock bytes, and capability container and are never written through this
//! engine; pages 0xE3-0xE6 hold the password-protection configuration; the
//! pages in between are general-purpose user memory.

use std::fmt;

use super::{AUTH0_DISABLED, Error, MAX_PAGE, Result};

/// AUTH0 configuration page; byte 3 holds the first protected page number
pub const AUTH0_PAGE: u8 = 0xE3;

/// ACCESS configuration page; byte 0 holds the protection flags
pub const ACCESS_PAGE: u8 = 0xE4;

/// Password page (4 bytes)
pub const PWD_PAGE: u8 = 0xE5;

/// PACK page (2 bytes PACK, 2 bytes reserved)
pub const PACK_PAGE: u8 = 0xE6;

/// Last factory/read-only page
const FACTORY_END: u8 = 0x03;

/// Classification of a page address against the fixed layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageClass {
    /// UID, lock bytes, capability container: readable, never writable
    Factory,
    /// General-purpose user memory
    User,
    /// Password-protection configuration pages
    Configuration,
    /// Outside the tag's address space
    OutOfRange,
}

/// Classify an address against the fixed layout
///
/// Total and deterministic over all of `u8`.
#[must_use]
pub const fn classify(addr: u8) -> PageClass {
    match addr {
        0..=FACTORY_END => PageClass::Factory,
        AUTH0_PAGE..=PACK_PAGE => PageClass::Configuration,
        a if a > MAX_PAGE => PageClass::OutOfRange,
        _ => PageClass::User,
    }
}

/// Whether `addr` falls inside the password-protected region
///
/// AUTH0 holds the first protected page; the sentinel `0xFF` disables
/// protection entirely.
#[must_use]
pub const fn is_protected(auth0: u8, addr: Page) -> bool {
    auth0 != AUTH0_DISABLED && addr.value() >= auth0
}

/// A validated page address in `[0, MAX_PAGE]`
///
/// Construction is the only validation point: once a `Page` exists it is safe
/// to place in a command frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Page(u8);

impl Page {
    /// Validate a raw address
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` for addresses above [`MAX_PAGE`].
    pub const fn new(addr: u8) -> Result<Self> {
        if addr > MAX_PAGE {
            return Err(Error::InvalidAddress {
                addr: addr as u16,
                max: MAX_PAGE,
            });
        }
        Ok(Self(addr))
    }

    /// Parse a base-16 page address, e.g. `"04"` or `"E3"`
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if the string is not hex or the value is
    /// above [`MAX_PAGE`].
    pub fn parse_hex(s: &str) -> Result<Self> {
        let addr = u16::from_str_radix(s.trim(), 16).map_err(|_| Error::InvalidAddress {
            addr: u16::MAX,
            max: MAX_PAGE,
        })?;
        if addr > u16::from(MAX_PAGE) {
            return Err(Error::InvalidAddress {
                addr,
                max: MAX_PAGE,
            });
        }
        Self::new(addr as u8)
    }

    /// Raw address byte
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Classification of this page against the fixed layout
    #[must_use]
    pub const fn class(self) -> PageClass {
        classify(self.0)
    }
}

impl TryFrom<u8> for Page {
    type Error = Error;

    fn try_from(addr: u8) -> Result<Self> {
        Self::new(addr)
    }
}

impl From<Page> for u8 {
    fn from(page: Page) -> Self {
        page.0
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_regions() {
        assert_eq!(classify(0x00), PageClass::Factory);
        assert_eq!(classify(0x03), PageClass::Factory);
        assert_eq!(classify(0x04), PageClass::User);
        assert_eq!(classify(0xE2), PageClass::User);
        assert_eq!(classify(0xE3), PageClass::Configuration);
        assert_eq!(classify(0xE6), PageClass::Configuration);
        assert_eq!(classify(0xE7), PageClass::OutOfRange);
        assert_eq!(classify(0xFF), PageClass::OutOfRange);
    }

    #[test]
    fn test_classify_total() {
        for addr in 0..=u8::MAX {
            // Every address maps to exactly one class, and the same one twice
            assert_eq!(classify(addr), classify(addr));
        }
    }

    #[test]
    fn test_page_bounds() {
        assert!(Page::new(0x00).is_ok());
        assert!(Page::new(MAX_PAGE).is_ok());
        assert!(matches!(
            Page::new(0xE7),
            Err(Error::InvalidAddress { addr: 0xE7, .. })
        ));
        assert!(matches!(Page::new(0xFF), Err(Error::InvalidAddress { .. })));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Page::parse_hex("04").unwrap().value(), 0x04);
        assert_eq!(Page::parse_hex("e3").unwrap().value(), 0xE3);
        assert!(Page::parse_hex("FF").is_err());
        assert!(Page::parse_hex("zz").is_err());
        assert!(Page::parse_hex("").is_err());
    }

    #[test]
    fn test_protection_sentinel() {
        for addr in 0..=MAX_PAGE {
            assert!(!is_protected(AUTH0_DISABLED, Page::new(addr).unwrap()));
        }
    }

    #[test]
    fn test_protection_threshold() {
        let auth0 = 0x2C;
        for addr in 0..=MAX_PAGE {
            let page = Page::new(addr).unwrap();
            assert_eq!(is_protected(auth0, page), addr >= auth0);
        }
    }
}
