/// Fixed-width big-endian integer codecs and minimal-width calculators.
pub mod bacint;
/// Width-generic bit helpers and bit reversal.
pub mod bits;
/// Encode/decode functions for BACnet primitive values.
pub mod primitives;
/// Zero-copy byte reader for decoding BACnet values.
pub mod reader;
/// IEEE-754 single and double precision codecs.
pub mod real;
/// BACnet tag framing (application, context, opening/closing).
pub mod tag;
/// Decode and encode any application-tagged primitive.
pub mod value;
/// Byte writer for encoding into a caller-owned buffer, or sizing without one.
pub mod writer;
