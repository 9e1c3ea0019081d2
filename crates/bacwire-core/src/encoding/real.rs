use crate::encoding::writer::Writer;
use crate::{DecodeError, EncodeError};

pub fn encode_bacnet_real(w: &mut Writer<'_>, value: f32) -> Result<usize, EncodeError> {
    w.write_be_u32(value.to_bits())?;
    Ok(4)
}

pub fn encode_bacnet_double(w: &mut Writer<'_>, value: f64) -> Result<usize, EncodeError> {
    w.write_be_u64(value.to_bits())?;
    Ok(8)
}

pub fn decode_real(buf: &[u8]) -> Result<(f32, usize), DecodeError> {
    let bytes: [u8; 4] = buf
        .get(..4)
        .and_then(|b| b.try_into().ok())
        .ok_or(DecodeError::UnexpectedEof)?;
    Ok((f32::from_bits(u32::from_be_bytes(bytes)), 4))
}

pub fn decode_double(buf: &[u8]) -> Result<(f64, usize), DecodeError> {
    let bytes: [u8; 8] = buf
        .get(..8)
        .and_then(|b| b.try_into().ok())
        .ok_or(DecodeError::UnexpectedEof)?;
    Ok((f64::from_bits(u64::from_be_bytes(bytes)), 8))
}

/// Decodes a real whose declared length must be exactly 4.
pub fn decode_real_safe(buf: &[u8], len_value: u32) -> Result<(f32, usize), DecodeError> {
    if len_value != 4 {
        return Err(DecodeError::InvalidLength);
    }
    decode_real(buf)
}

/// Decodes a double whose declared length must be exactly 8.
pub fn decode_double_safe(buf: &[u8], len_value: u32) -> Result<(f64, usize), DecodeError> {
    if len_value != 8 {
        return Err(DecodeError::InvalidLength);
    }
    decode_double(buf)
}
