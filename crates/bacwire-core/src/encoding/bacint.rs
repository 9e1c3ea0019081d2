//! Fixed-width big-endian integer codecs.
//!
//! Every encoder writes exactly its width in bytes and truncates the value to
//! that width. Every decoder reads exactly its width and returns the value
//! together with the number of bytes consumed.

use crate::encoding::{reader::Reader, writer::Writer};
use crate::{DecodeError, EncodeError};

/// Widest unsigned value carried by a BACnet unsigned integer.
pub type BacnetUnsigned = u64;

fn encode_be(w: &mut Writer<'_>, value: u64, width: usize) -> Result<usize, EncodeError> {
    let bytes = value.to_be_bytes();
    w.write_all(&bytes[8 - width..])?;
    Ok(width)
}

fn decode_be(buf: &[u8], width: usize) -> Result<u64, DecodeError> {
    let bytes = buf.get(..width).ok_or(DecodeError::UnexpectedEof)?;
    Ok(bytes
        .iter()
        .fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
}

fn sign_extend(raw: u64, width: usize) -> i32 {
    let shift = 32 - 8 * width as u32;
    ((raw as u32) << shift) as i32 >> shift
}

pub fn encode_unsigned16(w: &mut Writer<'_>, value: u16) -> Result<usize, EncodeError> {
    w.write_be_u16(value)?;
    Ok(2)
}

pub fn encode_unsigned24(w: &mut Writer<'_>, value: u32) -> Result<usize, EncodeError> {
    encode_be(w, u64::from(value), 3)
}

pub fn encode_unsigned32(w: &mut Writer<'_>, value: u32) -> Result<usize, EncodeError> {
    w.write_be_u32(value)?;
    Ok(4)
}

pub fn encode_unsigned40(w: &mut Writer<'_>, value: u64) -> Result<usize, EncodeError> {
    encode_be(w, value, 5)
}

pub fn encode_unsigned48(w: &mut Writer<'_>, value: u64) -> Result<usize, EncodeError> {
    encode_be(w, value, 6)
}

pub fn encode_unsigned56(w: &mut Writer<'_>, value: u64) -> Result<usize, EncodeError> {
    encode_be(w, value, 7)
}

pub fn encode_unsigned64(w: &mut Writer<'_>, value: u64) -> Result<usize, EncodeError> {
    w.write_be_u64(value)?;
    Ok(8)
}

pub fn decode_unsigned16(buf: &[u8]) -> Result<(u16, usize), DecodeError> {
    Ok((Reader::new(buf).read_be_u16()?, 2))
}

pub fn decode_unsigned24(buf: &[u8]) -> Result<(u32, usize), DecodeError> {
    Ok((decode_be(buf, 3)? as u32, 3))
}

pub fn decode_unsigned32(buf: &[u8]) -> Result<(u32, usize), DecodeError> {
    Ok((Reader::new(buf).read_be_u32()?, 4))
}

pub fn decode_unsigned40(buf: &[u8]) -> Result<(u64, usize), DecodeError> {
    Ok((decode_be(buf, 5)?, 5))
}

pub fn decode_unsigned48(buf: &[u8]) -> Result<(u64, usize), DecodeError> {
    Ok((decode_be(buf, 6)?, 6))
}

pub fn decode_unsigned56(buf: &[u8]) -> Result<(u64, usize), DecodeError> {
    Ok((decode_be(buf, 7)?, 7))
}

pub fn decode_unsigned64(buf: &[u8]) -> Result<(u64, usize), DecodeError> {
    Ok((Reader::new(buf).read_be_u64()?, 8))
}

pub fn encode_signed8(w: &mut Writer<'_>, value: i32) -> Result<usize, EncodeError> {
    encode_be(w, u64::from(value as u32), 1)
}

pub fn encode_signed16(w: &mut Writer<'_>, value: i32) -> Result<usize, EncodeError> {
    encode_be(w, u64::from(value as u32), 2)
}

pub fn encode_signed24(w: &mut Writer<'_>, value: i32) -> Result<usize, EncodeError> {
    encode_be(w, u64::from(value as u32), 3)
}

pub fn encode_signed32(w: &mut Writer<'_>, value: i32) -> Result<usize, EncodeError> {
    encode_be(w, u64::from(value as u32), 4)
}

pub fn decode_signed8(buf: &[u8]) -> Result<(i32, usize), DecodeError> {
    Ok((sign_extend(decode_be(buf, 1)?, 1), 1))
}

pub fn decode_signed16(buf: &[u8]) -> Result<(i32, usize), DecodeError> {
    Ok((sign_extend(decode_be(buf, 2)?, 2), 2))
}

pub fn decode_signed24(buf: &[u8]) -> Result<(i32, usize), DecodeError> {
    Ok((sign_extend(decode_be(buf, 3)?, 3), 3))
}

pub fn decode_signed32(buf: &[u8]) -> Result<(i32, usize), DecodeError> {
    Ok((sign_extend(decode_be(buf, 4)?, 4), 4))
}

/// Smallest byte count in `1..=8` that holds `value`.
pub fn bacnet_unsigned_length(value: BacnetUnsigned) -> usize {
    let mut len = 1;
    while len < 8 && (value >> (8 * len)) != 0 {
        len += 1;
    }
    len
}

/// Smallest two's-complement byte count in `1..=4` that holds `value`.
pub fn bacnet_signed_length(value: i32) -> usize {
    if (-128..=127).contains(&value) {
        1
    } else if (-32_768..=32_767).contains(&value) {
        2
    } else if (-8_388_608..=8_388_607).contains(&value) {
        3
    } else {
        4
    }
}
