//! Primitive value codecs.
//!
//! Each kind comes in three encoder forms: the bare value, the value behind
//! an application tag, and the value behind a context tag. Tagged encoders
//! size the value first, so an invalid value or a short buffer fails before
//! any byte is written.
//!
//! Decoders taking `max_len` never look past `max_len` bytes of `buf`. Every
//! decoder returns the value together with the bytes consumed.

use crate::encoding::bacint::{
    bacnet_signed_length, bacnet_unsigned_length, decode_signed16, decode_signed24,
    decode_signed32, decode_signed8, decode_unsigned16, decode_unsigned24, decode_unsigned32,
    decode_unsigned40, decode_unsigned48, decode_unsigned56, decode_unsigned64, encode_signed16,
    encode_signed24, encode_signed32, encode_signed8, encode_unsigned16, encode_unsigned24,
    encode_unsigned32, encode_unsigned40, encode_unsigned48, encode_unsigned56,
    encode_unsigned64, BacnetUnsigned,
};
use crate::encoding::real::{
    decode_double_safe, decode_real_safe, encode_bacnet_double, encode_bacnet_real,
};
use crate::encoding::tag::{
    bacnet_tag_number_and_value_decode, encode_tag, tag_header_len, ApplicationTag,
};
use crate::encoding::writer::Writer;
use crate::types::{BitString, CharacterSet, CharacterString, Date, ObjectId, OctetString, Time};
use crate::{DecodeError, EncodeError};

#[derive(Debug, Clone, Copy)]
enum Expect {
    Application(ApplicationTag),
    Context(u8),
}

fn encode_wrapped<F>(
    w: &mut Writer<'_>,
    tag_number: u8,
    context: bool,
    body: F,
) -> Result<usize, EncodeError>
where
    F: Fn(&mut Writer<'_>) -> Result<usize, EncodeError>,
{
    let payload = body(&mut Writer::sizing())?;
    let lvt = u32::try_from(payload).map_err(|_| EncodeError::InvalidLength)?;
    w.reserve(tag_header_len(tag_number, lvt).saturating_add(payload))?;
    let header = encode_tag(w, tag_number, context, lvt)?;
    Ok(header + body(w)?)
}

pub(crate) fn encode_application<F>(
    w: &mut Writer<'_>,
    tag: ApplicationTag,
    body: F,
) -> Result<usize, EncodeError>
where
    F: Fn(&mut Writer<'_>) -> Result<usize, EncodeError>,
{
    encode_wrapped(w, tag as u8, false, body)
}

pub(crate) fn encode_context<F>(
    w: &mut Writer<'_>,
    tag_number: u8,
    body: F,
) -> Result<usize, EncodeError>
where
    F: Fn(&mut Writer<'_>) -> Result<usize, EncodeError>,
{
    encode_wrapped(w, tag_number, true, body)
}

fn decode_tagged<T, F>(
    buf: &[u8],
    max_len: usize,
    expect: Expect,
    body: F,
) -> Result<(T, usize), DecodeError>
where
    F: FnOnce(&[u8], u32) -> Result<(T, usize), DecodeError>,
{
    let (header, len) = bacnet_tag_number_and_value_decode(buf, max_len)?;
    let matches = match expect {
        Expect::Application(tag) => {
            !header.context && header.delimiter.is_none() && header.tag_number == tag as u8
        }
        Expect::Context(tag_number) => header.is_context(tag_number),
    };
    if !matches {
        log::trace!("expected {expect:?}, found tag {}", header.tag_number);
        return Err(DecodeError::InvalidTag);
    }
    let limit = max_len.min(buf.len());
    let (value, used) = body(&buf[len..limit], header.len_value_type)?;
    Ok((value, len + used))
}

fn payload(buf: &[u8], len_value: u32) -> Result<&[u8], DecodeError> {
    usize::try_from(len_value)
        .ok()
        .and_then(|len| buf.get(..len))
        .ok_or(DecodeError::UnexpectedEof)
}

// Null

pub fn encode_application_null(w: &mut Writer<'_>) -> Result<usize, EncodeError> {
    encode_tag(w, ApplicationTag::Null as u8, false, 0)
}

pub fn encode_context_null(w: &mut Writer<'_>, tag_number: u8) -> Result<usize, EncodeError> {
    encode_tag(w, tag_number, true, 0)
}

pub fn bacnet_null_application_decode(buf: &[u8], max_len: usize) -> Result<usize, DecodeError> {
    decode_tagged(buf, max_len, Expect::Application(ApplicationTag::Null), null_body)
        .map(|((), len)| len)
}

pub fn bacnet_null_context_decode(
    buf: &[u8],
    max_len: usize,
    tag_number: u8,
) -> Result<usize, DecodeError> {
    decode_tagged(buf, max_len, Expect::Context(tag_number), null_body).map(|((), len)| len)
}

fn null_body(_: &[u8], len_value: u32) -> Result<((), usize), DecodeError> {
    if len_value != 0 {
        return Err(DecodeError::InvalidLength);
    }
    Ok(((), 0))
}

// Boolean

/// The value lives in the length field; there is no payload byte.
pub fn encode_application_boolean(w: &mut Writer<'_>, value: bool) -> Result<usize, EncodeError> {
    encode_tag(w, ApplicationTag::Boolean as u8, false, u32::from(value))
}

/// Context booleans carry a one-byte payload.
pub fn encode_context_boolean(
    w: &mut Writer<'_>,
    tag_number: u8,
    value: bool,
) -> Result<usize, EncodeError> {
    encode_context(w, tag_number, |w| {
        w.write_u8(u8::from(value))?;
        Ok(1)
    })
}

/// Application boolean value from a decoded length/value/type field.
pub const fn decode_boolean(len_value_type: u32) -> bool {
    len_value_type != 0
}

pub fn bacnet_boolean_application_decode(
    buf: &[u8],
    max_len: usize,
) -> Result<(bool, usize), DecodeError> {
    decode_tagged(
        buf,
        max_len,
        Expect::Application(ApplicationTag::Boolean),
        |_, lvt| {
            if lvt > 1 {
                log::trace!("application boolean with value {lvt}");
                return Err(DecodeError::InvalidValue);
            }
            Ok((decode_boolean(lvt), 0))
        },
    )
}

/// Decodes a context boolean. Delimiters and length fields other than 1
/// are rejected.
pub fn bacnet_boolean_context_decode(
    buf: &[u8],
    max_len: usize,
    tag_number: u8,
) -> Result<(bool, usize), DecodeError> {
    decode_tagged(buf, max_len, Expect::Context(tag_number), |body, lvt| {
        if lvt != 1 {
            log::trace!("context boolean with length {lvt}");
            return Err(DecodeError::InvalidLength);
        }
        decode_context_boolean(body)
    })
}

/// Context boolean payload byte; any non-zero value is true.
pub fn decode_context_boolean(buf: &[u8]) -> Result<(bool, usize), DecodeError> {
    let byte = buf.first().ok_or(DecodeError::UnexpectedEof)?;
    Ok((*byte != 0, 1))
}

/// Tag header and payload of a context boolean, bounded by `buf`.
pub fn decode_context_boolean_tagged(
    buf: &[u8],
    tag_number: u8,
) -> Result<(bool, usize), DecodeError> {
    bacnet_boolean_context_decode(buf, buf.len(), tag_number)
}

// Unsigned and enumerated

/// Writes `value` in the fewest bytes that hold it.
pub fn encode_bacnet_unsigned(
    w: &mut Writer<'_>,
    value: BacnetUnsigned,
) -> Result<usize, EncodeError> {
    match bacnet_unsigned_length(value) {
        1 => {
            w.write_u8(value as u8)?;
            Ok(1)
        }
        2 => encode_unsigned16(w, value as u16),
        3 => encode_unsigned24(w, value as u32),
        4 => encode_unsigned32(w, value as u32),
        5 => encode_unsigned40(w, value),
        6 => encode_unsigned48(w, value),
        7 => encode_unsigned56(w, value),
        _ => encode_unsigned64(w, value),
    }
}

pub fn encode_application_unsigned(
    w: &mut Writer<'_>,
    value: BacnetUnsigned,
) -> Result<usize, EncodeError> {
    encode_application(w, ApplicationTag::UnsignedInt, |w| encode_bacnet_unsigned(w, value))
}

pub fn encode_context_unsigned(
    w: &mut Writer<'_>,
    tag_number: u8,
    value: BacnetUnsigned,
) -> Result<usize, EncodeError> {
    encode_context(w, tag_number, |w| encode_bacnet_unsigned(w, value))
}

/// Decodes an unsigned of `len_value` bytes (1 to 8).
pub fn bacnet_unsigned_decode(
    buf: &[u8],
    max_len: usize,
    len_value: u32,
) -> Result<(BacnetUnsigned, usize), DecodeError> {
    let limit = max_len.min(buf.len());
    let buf = &buf[..limit];
    match len_value {
        1 => buf
            .first()
            .map(|b| (u64::from(*b), 1))
            .ok_or(DecodeError::UnexpectedEof),
        2 => decode_unsigned16(buf).map(|(v, n)| (u64::from(v), n)),
        3 => decode_unsigned24(buf).map(|(v, n)| (u64::from(v), n)),
        4 => decode_unsigned32(buf).map(|(v, n)| (u64::from(v), n)),
        5 => decode_unsigned40(buf),
        6 => decode_unsigned48(buf),
        7 => decode_unsigned56(buf),
        8 => decode_unsigned64(buf),
        _ => {
            log::trace!("unsigned with length {len_value}");
            Err(DecodeError::InvalidLength)
        }
    }
}

pub fn decode_unsigned(buf: &[u8], len_value: u32) -> Result<(BacnetUnsigned, usize), DecodeError> {
    bacnet_unsigned_decode(buf, buf.len(), len_value)
}

pub fn bacnet_unsigned_application_decode(
    buf: &[u8],
    max_len: usize,
) -> Result<(BacnetUnsigned, usize), DecodeError> {
    decode_tagged(
        buf,
        max_len,
        Expect::Application(ApplicationTag::UnsignedInt),
        decode_unsigned,
    )
}

pub fn bacnet_unsigned_context_decode(
    buf: &[u8],
    max_len: usize,
    tag_number: u8,
) -> Result<(BacnetUnsigned, usize), DecodeError> {
    decode_tagged(buf, max_len, Expect::Context(tag_number), decode_unsigned)
}

pub fn encode_bacnet_enumerated(w: &mut Writer<'_>, value: u32) -> Result<usize, EncodeError> {
    encode_bacnet_unsigned(w, u64::from(value))
}

pub fn encode_application_enumerated(w: &mut Writer<'_>, value: u32) -> Result<usize, EncodeError> {
    encode_application(w, ApplicationTag::Enumerated, |w| encode_bacnet_enumerated(w, value))
}

pub fn encode_context_enumerated(
    w: &mut Writer<'_>,
    tag_number: u8,
    value: u32,
) -> Result<usize, EncodeError> {
    encode_context(w, tag_number, |w| encode_bacnet_enumerated(w, value))
}

/// Decodes an enumeration of `len_value` bytes (1 to 4).
pub fn bacnet_enumerated_decode(
    buf: &[u8],
    max_len: usize,
    len_value: u32,
) -> Result<(u32, usize), DecodeError> {
    if !(1..=4).contains(&len_value) {
        return Err(DecodeError::InvalidLength);
    }
    let (value, used) = bacnet_unsigned_decode(buf, max_len, len_value)?;
    Ok((value as u32, used))
}

pub fn bacnet_enumerated_application_decode(
    buf: &[u8],
    max_len: usize,
) -> Result<(u32, usize), DecodeError> {
    decode_tagged(
        buf,
        max_len,
        Expect::Application(ApplicationTag::Enumerated),
        |body, lvt| bacnet_enumerated_decode(body, body.len(), lvt),
    )
}

pub fn bacnet_enumerated_context_decode(
    buf: &[u8],
    max_len: usize,
    tag_number: u8,
) -> Result<(u32, usize), DecodeError> {
    decode_tagged(buf, max_len, Expect::Context(tag_number), |body, lvt| {
        bacnet_enumerated_decode(body, body.len(), lvt)
    })
}

// Signed

/// Writes `value` in the fewest two's-complement bytes that hold it.
pub fn encode_bacnet_signed(w: &mut Writer<'_>, value: i32) -> Result<usize, EncodeError> {
    match bacnet_signed_length(value) {
        1 => encode_signed8(w, value),
        2 => encode_signed16(w, value),
        3 => encode_signed24(w, value),
        _ => encode_signed32(w, value),
    }
}

pub fn encode_application_signed(w: &mut Writer<'_>, value: i32) -> Result<usize, EncodeError> {
    encode_application(w, ApplicationTag::SignedInt, |w| encode_bacnet_signed(w, value))
}

pub fn encode_context_signed(
    w: &mut Writer<'_>,
    tag_number: u8,
    value: i32,
) -> Result<usize, EncodeError> {
    encode_context(w, tag_number, |w| encode_bacnet_signed(w, value))
}

/// Decodes a signed integer of `len_value` bytes (1 to 4), extending the sign.
pub fn bacnet_signed_decode(
    buf: &[u8],
    max_len: usize,
    len_value: u32,
) -> Result<(i32, usize), DecodeError> {
    let limit = max_len.min(buf.len());
    let buf = &buf[..limit];
    match len_value {
        1 => decode_signed8(buf),
        2 => decode_signed16(buf),
        3 => decode_signed24(buf),
        4 => decode_signed32(buf),
        _ => {
            log::trace!("signed with length {len_value}");
            Err(DecodeError::InvalidLength)
        }
    }
}

pub fn decode_signed(buf: &[u8], len_value: u32) -> Result<(i32, usize), DecodeError> {
    bacnet_signed_decode(buf, buf.len(), len_value)
}

pub fn bacnet_signed_application_decode(
    buf: &[u8],
    max_len: usize,
) -> Result<(i32, usize), DecodeError> {
    decode_tagged(
        buf,
        max_len,
        Expect::Application(ApplicationTag::SignedInt),
        decode_signed,
    )
}

pub fn bacnet_signed_context_decode(
    buf: &[u8],
    max_len: usize,
    tag_number: u8,
) -> Result<(i32, usize), DecodeError> {
    decode_tagged(buf, max_len, Expect::Context(tag_number), decode_signed)
}

// Real and double

pub fn encode_application_real(w: &mut Writer<'_>, value: f32) -> Result<usize, EncodeError> {
    encode_application(w, ApplicationTag::Real, |w| encode_bacnet_real(w, value))
}

pub fn encode_context_real(
    w: &mut Writer<'_>,
    tag_number: u8,
    value: f32,
) -> Result<usize, EncodeError> {
    encode_context(w, tag_number, |w| encode_bacnet_real(w, value))
}

pub fn bacnet_real_application_decode(
    buf: &[u8],
    max_len: usize,
) -> Result<(f32, usize), DecodeError> {
    decode_tagged(
        buf,
        max_len,
        Expect::Application(ApplicationTag::Real),
        decode_real_safe,
    )
}

pub fn bacnet_real_context_decode(
    buf: &[u8],
    max_len: usize,
    tag_number: u8,
) -> Result<(f32, usize), DecodeError> {
    decode_tagged(buf, max_len, Expect::Context(tag_number), decode_real_safe)
}

pub fn encode_application_double(w: &mut Writer<'_>, value: f64) -> Result<usize, EncodeError> {
    encode_application(w, ApplicationTag::Double, |w| encode_bacnet_double(w, value))
}

pub fn encode_context_double(
    w: &mut Writer<'_>,
    tag_number: u8,
    value: f64,
) -> Result<usize, EncodeError> {
    encode_context(w, tag_number, |w| encode_bacnet_double(w, value))
}

pub fn bacnet_double_application_decode(
    buf: &[u8],
    max_len: usize,
) -> Result<(f64, usize), DecodeError> {
    decode_tagged(
        buf,
        max_len,
        Expect::Application(ApplicationTag::Double),
        decode_double_safe,
    )
}

pub fn bacnet_double_context_decode(
    buf: &[u8],
    max_len: usize,
    tag_number: u8,
) -> Result<(f64, usize), DecodeError> {
    decode_tagged(buf, max_len, Expect::Context(tag_number), decode_double_safe)
}

// Date and time

/// Writes the four date bytes. Fails without writing when the year does not
/// fit the one-byte wire form.
pub fn encode_bacnet_date(w: &mut Writer<'_>, date: &Date) -> Result<usize, EncodeError> {
    w.write_all(&date.to_wire()?)?;
    Ok(4)
}

pub fn encode_application_date(w: &mut Writer<'_>, date: &Date) -> Result<usize, EncodeError> {
    encode_application(w, ApplicationTag::Date, |w| encode_bacnet_date(w, date))
}

pub fn encode_context_date(
    w: &mut Writer<'_>,
    tag_number: u8,
    date: &Date,
) -> Result<usize, EncodeError> {
    encode_context(w, tag_number, |w| encode_bacnet_date(w, date))
}

pub fn decode_date(buf: &[u8]) -> Result<(Date, usize), DecodeError> {
    let bytes = payload(buf, 4)?;
    Ok((Date::from_wire([bytes[0], bytes[1], bytes[2], bytes[3]]), 4))
}

pub fn decode_date_safe(buf: &[u8], len_value: u32) -> Result<(Date, usize), DecodeError> {
    if len_value != 4 {
        return Err(DecodeError::InvalidLength);
    }
    decode_date(buf)
}

pub fn bacnet_date_application_decode(
    buf: &[u8],
    max_len: usize,
) -> Result<(Date, usize), DecodeError> {
    decode_tagged(
        buf,
        max_len,
        Expect::Application(ApplicationTag::Date),
        decode_date_safe,
    )
}

pub fn bacnet_date_context_decode(
    buf: &[u8],
    max_len: usize,
    tag_number: u8,
) -> Result<(Date, usize), DecodeError> {
    decode_tagged(buf, max_len, Expect::Context(tag_number), decode_date_safe)
}

pub fn encode_bacnet_time(w: &mut Writer<'_>, time: &Time) -> Result<usize, EncodeError> {
    w.write_all(&time.to_wire())?;
    Ok(4)
}

pub fn encode_application_time(w: &mut Writer<'_>, time: &Time) -> Result<usize, EncodeError> {
    encode_application(w, ApplicationTag::Time, |w| encode_bacnet_time(w, time))
}

pub fn encode_context_time(
    w: &mut Writer<'_>,
    tag_number: u8,
    time: &Time,
) -> Result<usize, EncodeError> {
    encode_context(w, tag_number, |w| encode_bacnet_time(w, time))
}

pub fn decode_time(buf: &[u8]) -> Result<(Time, usize), DecodeError> {
    let bytes = payload(buf, 4)?;
    Ok((Time::from_wire([bytes[0], bytes[1], bytes[2], bytes[3]]), 4))
}

pub fn decode_time_safe(buf: &[u8], len_value: u32) -> Result<(Time, usize), DecodeError> {
    if len_value != 4 {
        return Err(DecodeError::InvalidLength);
    }
    decode_time(buf)
}

pub fn bacnet_time_application_decode(
    buf: &[u8],
    max_len: usize,
) -> Result<(Time, usize), DecodeError> {
    decode_tagged(
        buf,
        max_len,
        Expect::Application(ApplicationTag::Time),
        decode_time_safe,
    )
}

pub fn bacnet_time_context_decode(
    buf: &[u8],
    max_len: usize,
    tag_number: u8,
) -> Result<(Time, usize), DecodeError> {
    decode_tagged(buf, max_len, Expect::Context(tag_number), decode_time_safe)
}

// Object identifier

pub fn encode_bacnet_object_id(
    w: &mut Writer<'_>,
    object_type: u16,
    instance: u32,
) -> Result<usize, EncodeError> {
    let id = ObjectId::try_new(object_type, instance)?;
    w.write_be_u32(id.raw())?;
    Ok(4)
}

pub fn encode_application_object_id(
    w: &mut Writer<'_>,
    object_type: u16,
    instance: u32,
) -> Result<usize, EncodeError> {
    encode_application(w, ApplicationTag::ObjectId, |w| {
        encode_bacnet_object_id(w, object_type, instance)
    })
}

pub fn encode_context_object_id(
    w: &mut Writer<'_>,
    tag_number: u8,
    object_type: u16,
    instance: u32,
) -> Result<usize, EncodeError> {
    encode_context(w, tag_number, |w| {
        encode_bacnet_object_id(w, object_type, instance)
    })
}

pub fn decode_object_id(buf: &[u8]) -> Result<(ObjectId, usize), DecodeError> {
    let (raw, used) = decode_unsigned32(buf)?;
    Ok((ObjectId::from_raw(raw), used))
}

pub fn decode_object_id_safe(buf: &[u8], len_value: u32) -> Result<(ObjectId, usize), DecodeError> {
    if len_value != 4 {
        return Err(DecodeError::InvalidLength);
    }
    decode_object_id(buf)
}

pub fn bacnet_object_id_application_decode(
    buf: &[u8],
    max_len: usize,
) -> Result<(ObjectId, usize), DecodeError> {
    decode_tagged(
        buf,
        max_len,
        Expect::Application(ApplicationTag::ObjectId),
        decode_object_id_safe,
    )
}

pub fn bacnet_object_id_context_decode(
    buf: &[u8],
    max_len: usize,
    tag_number: u8,
) -> Result<(ObjectId, usize), DecodeError> {
    decode_tagged(buf, max_len, Expect::Context(tag_number), decode_object_id_safe)
}

// Octet string

pub fn encode_octet_string(w: &mut Writer<'_>, value: &[u8]) -> Result<usize, EncodeError> {
    w.write_all(value)?;
    Ok(value.len())
}

pub fn encode_application_octet_string(
    w: &mut Writer<'_>,
    value: &[u8],
) -> Result<usize, EncodeError> {
    encode_application(w, ApplicationTag::OctetString, |w| encode_octet_string(w, value))
}

pub fn encode_context_octet_string(
    w: &mut Writer<'_>,
    tag_number: u8,
    value: &[u8],
) -> Result<usize, EncodeError> {
    encode_context(w, tag_number, |w| encode_octet_string(w, value))
}

pub fn decode_octet_string<const N: usize>(
    buf: &[u8],
    len_value: u32,
) -> Result<(OctetString<N>, usize), DecodeError> {
    let bytes = payload(buf, len_value)?;
    Ok((OctetString::from_slice(bytes)?, bytes.len()))
}

pub fn bacnet_octet_string_application_decode<const N: usize>(
    buf: &[u8],
    max_len: usize,
) -> Result<(OctetString<N>, usize), DecodeError> {
    decode_tagged(
        buf,
        max_len,
        Expect::Application(ApplicationTag::OctetString),
        decode_octet_string,
    )
}

pub fn bacnet_octet_string_context_decode<const N: usize>(
    buf: &[u8],
    max_len: usize,
    tag_number: u8,
) -> Result<(OctetString<N>, usize), DecodeError> {
    decode_tagged(buf, max_len, Expect::Context(tag_number), decode_octet_string)
}

// Character string

/// Writes the character set byte followed by the encoded characters.
pub fn encode_bacnet_character_string(
    w: &mut Writer<'_>,
    charset: CharacterSet,
    bytes: &[u8],
) -> Result<usize, EncodeError> {
    w.reserve(bytes.len().saturating_add(1))?;
    w.write_u8(charset as u8)?;
    w.write_all(bytes)?;
    Ok(bytes.len() + 1)
}

pub fn encode_application_character_string<const N: usize>(
    w: &mut Writer<'_>,
    value: &CharacterString<N>,
) -> Result<usize, EncodeError> {
    encode_application(w, ApplicationTag::CharacterString, |w| {
        encode_bacnet_character_string(w, value.encoding(), value.as_bytes())
    })
}

pub fn encode_context_character_string<const N: usize>(
    w: &mut Writer<'_>,
    tag_number: u8,
    value: &CharacterString<N>,
) -> Result<usize, EncodeError> {
    encode_context(w, tag_number, |w| {
        encode_bacnet_character_string(w, value.encoding(), value.as_bytes())
    })
}

pub fn decode_character_string<const N: usize>(
    buf: &[u8],
    len_value: u32,
) -> Result<(CharacterString<N>, usize), DecodeError> {
    if len_value == 0 {
        return Err(DecodeError::InvalidLength);
    }
    let bytes = payload(buf, len_value)?;
    let charset = CharacterSet::from_u8(bytes[0])?;
    Ok((CharacterString::with_bytes(charset, &bytes[1..])?, bytes.len()))
}

pub fn bacnet_character_string_application_decode<const N: usize>(
    buf: &[u8],
    max_len: usize,
) -> Result<(CharacterString<N>, usize), DecodeError> {
    decode_tagged(
        buf,
        max_len,
        Expect::Application(ApplicationTag::CharacterString),
        decode_character_string,
    )
}

pub fn bacnet_character_string_context_decode<const N: usize>(
    buf: &[u8],
    max_len: usize,
    tag_number: u8,
) -> Result<(CharacterString<N>, usize), DecodeError> {
    decode_tagged(
        buf,
        max_len,
        Expect::Context(tag_number),
        decode_character_string,
    )
}

// Bit string

/// Writes the unused-bits byte followed by the used octets in wire bit order.
pub fn encode_bitstring<const N: usize>(
    w: &mut Writer<'_>,
    value: &BitString<N>,
) -> Result<usize, EncodeError> {
    let used = value.bytes_used();
    w.reserve(used + 1)?;
    w.write_u8(value.unused_bits())?;
    for index in 0..used {
        w.write_u8(value.wire_octet(index))?;
    }
    Ok(used + 1)
}

pub fn encode_application_bitstring<const N: usize>(
    w: &mut Writer<'_>,
    value: &BitString<N>,
) -> Result<usize, EncodeError> {
    encode_application(w, ApplicationTag::BitString, |w| encode_bitstring(w, value))
}

pub fn encode_context_bitstring<const N: usize>(
    w: &mut Writer<'_>,
    tag_number: u8,
    value: &BitString<N>,
) -> Result<usize, EncodeError> {
    encode_context(w, tag_number, |w| encode_bitstring(w, value))
}

pub fn decode_bitstring<const N: usize>(
    buf: &[u8],
    len_value: u32,
) -> Result<(BitString<N>, usize), DecodeError> {
    if len_value == 0 {
        return Err(DecodeError::InvalidLength);
    }
    let bytes = payload(buf, len_value)?;
    Ok((BitString::from_wire(bytes[0], &bytes[1..])?, bytes.len()))
}

pub fn bacnet_bitstring_application_decode<const N: usize>(
    buf: &[u8],
    max_len: usize,
) -> Result<(BitString<N>, usize), DecodeError> {
    decode_tagged(
        buf,
        max_len,
        Expect::Application(ApplicationTag::BitString),
        decode_bitstring,
    )
}

pub fn bacnet_bitstring_context_decode<const N: usize>(
    buf: &[u8],
    max_len: usize,
    tag_number: u8,
) -> Result<(BitString<N>, usize), DecodeError> {
    decode_tagged(buf, max_len, Expect::Context(tag_number), decode_bitstring)
}
