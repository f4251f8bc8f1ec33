//! NTAG21x command set and memory layout
//!
//! This module provides the byte-level command codec, the fixed address map
//! for the tag family, and the value types exchanged with the engine.

mod codec;
mod error;
mod layout;
mod ndef;
mod types;

pub use codec::{decode_read_page, decode_write_ack, encode_read_page, encode_write_page};
pub use error::{Error, Result};
pub use layout::{
    ACCESS_PAGE, AUTH0_PAGE, PACK_PAGE, PWD_PAGE, Page, PageClass, classify, is_protected,
};
pub use ndef::encode_uri_message;
pub use types::{MemoryPage, ProtectionConfig, TagStatus};

/// READ command opcode: returns four pages (16 bytes) starting at the
/// addressed page
pub const CMD_READ: u8 = 0x30;

/// WRITE command opcode: writes one 4-byte page
pub const CMD_WRITE: u8 = 0xA2;

/// Highest addressable page on an NTAG216
pub const MAX_PAGE: u8 = 0xE6;

/// Size of one memory page in bytes
pub const PAGE_SIZE: usize = 4;

/// Length of a READ response (four consecutive pages)
pub const READ_SPAN_LEN: usize = 16;

/// ACK nibble returned by the tag for an accepted write
pub const ACK: u8 = 0x0A;

/// AUTH0 sentinel meaning password protection is disabled
pub const AUTH0_DISABLED: u8 = 0xFF;
