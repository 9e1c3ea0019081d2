//! BACnet application-layer encoding and decoding in pure Rust.
//!
//! `bacwire-core` turns primitive BACnet values (booleans, minimal-width
//! integers, reals, dates, times, strings, bit strings, object identifiers)
//! into the tagged wire format and back. Every decoder is bounds-checked and
//! every encoder writes through a capacity-aware [`encoding::writer::Writer`],
//! which can also run in sizing mode to report a length without writing.
//!
//! # Feature flags
//!
//! - **`std`** (default): enables `std::error::Error` implementations.
//! - **`alloc`** (default): enables owned helpers such as `BitString::to_bools`.
//! - **`serde`**: derives `Serialize`/`Deserialize` on value types.
//! - **`defmt`**: derives `defmt::Format` for embedded logging.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// APDU envelope helpers: PDU type, simple acknowledgement, max-segments/max-APDU octet.
pub mod apdu;
/// Tag framing, integer/real codecs, primitive values, and the byte reader/writer.
pub mod encoding;
/// Error types for encoding and decoding operations.
pub mod error;
/// Value types carried by the codec: dates, times, object identifiers, strings.
pub mod types;

pub use error::{DecodeError, EncodeError};
