//! tagmem - protocol engine for page-addressable NTAG21x memory tags
//!
//! This library builds correctly-framed commands for an NTAG21x-family tag,
//! exchanges them over an abstract [`Transceiver`], and enforces the tag's
//! page-addressing and protection invariants. A malformed command can lock a
//! physical tag out permanently, so every address is validated before a
//! single byte leaves the engine.
//!
//! # Quick Start
//!
//! ```rust
//! use tagmem::{Page, encode_read_page, decode_read_page};
//!
//! // Frame a read of user page 0x04
//! let page = Page::new(0x04)?;
//! let command = encode_read_page(page);
//! assert_eq!(command, [0x30, 0x04]);
//!
//! // The tag answers with 16 bytes; the first 4 are the requested page
//! let response = [0u8; 16];
//! let data = decode_read_page(&response, page)?;
//! assert_eq!(data.bytes(), &[0, 0, 0, 0]);
//! # Ok::<(), tagmem::Error>(())
//! ```
//!
//! # Components
//!
//! - **Command codec** - exact byte frames for the tag's READ (`0x30`) and
//!   WRITE (`0xA2`) commands
//! - **Memory layout model** - the fixed NTAG216 address map and
//!   protected-region rules, checked before anything is sent
//! - **Protocol engine** - the four tag operations (inspect, read page,
//!   enable protection, write identity record) with guaranteed session
//!   release on every exit path

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod engine;
pub mod protocol;

pub use engine::{Engine, Technology, Transceiver};
pub use protocol::{
    ACCESS_PAGE, AUTH0_DISABLED, AUTH0_PAGE, CMD_READ, CMD_WRITE, Error, MAX_PAGE, MemoryPage,
    PACK_PAGE, PAGE_SIZE, PWD_PAGE, Page, PageClass, ProtectionConfig, READ_SPAN_LEN, Result,
    TagStatus, classify, decode_read_page, decode_write_ack, encode_read_page, encode_uri_message,
    encode_write_page, is_protected,
};
