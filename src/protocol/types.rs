//! Value types exchanged between the engine and its callers
//!
//! Everything here is transient per operation; the physical tag is the only
//! persistent store.

use std::fmt;

use super::{AUTH0_DISABLED, PAGE_SIZE, Page};

/// One immutable 4-byte memory page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryPage([u8; PAGE_SIZE]);

impl MemoryPage {
    /// Wrap raw page bytes
    #[must_use]
    pub const fn new(bytes: [u8; PAGE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Page contents
    #[must_use]
    pub const fn bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.0
    }
}

impl fmt::Display for MemoryPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X} {:02X} {:02X} {:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

/// Password-protection configuration for one `enable_protection` call
///
/// Built by the caller, written to the tag's configuration pages, and
/// discarded; the engine never stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtectionConfig {
    /// 4-byte password written to the PWD page
    pub password: [u8; 4],
    /// 2-byte acknowledge returned by the tag after authentication
    pub pack: [u8; 2],
    /// First page subject to protection
    pub auth0: Page,
    /// ACCESS page flags byte
    pub access_flags: u8,
}

/// Protection status derived from a single AUTH0 read
///
/// Never cached across operations: the tag is the source of truth and may
/// change between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagStatus {
    /// Whether password protection is active
    pub protected: bool,
    /// First protected page (the raw AUTH0 byte; `0xFF` when disabled)
    pub first_protected_page: u8,
}

impl TagStatus {
    /// Derive the status from the raw AUTH0 threshold byte
    #[must_use]
    pub const fn from_auth0(auth0: u8) -> Self {
        Self {
            protected: auth0 != AUTH0_DISABLED,
            first_protected_page: auth0,
        }
    }
}

impl fmt::Display for TagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.protected {
            write!(f, "protected from page {:#04x}", self.first_protected_page)
        } else {
            write!(f, "unprotected")
        }
    }
}
