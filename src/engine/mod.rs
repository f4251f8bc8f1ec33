//! Session-level orchestration over an abstract transceiver
//!
//! Each public operation is one short sequence of codec/transceiver calls
//! bracketed by acquire and release. The engine holds no state between
//! operations besides the transceiver itself.

mod ops;
mod transceiver;

pub use ops::Engine;
pub use transceiver::{Technology, Transceiver};
