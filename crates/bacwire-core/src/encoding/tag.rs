//! BACnet tag framing.
//!
//! A tag header is one byte: the tag number in bits 7-4 (`0xF` means the
//! real number follows in the next byte), the context flag in bit 3, and the
//! length/value/type field in bits 2-0. Field values 0-4 carry the length
//! inline, 5 means an extended length follows, 6 and 7 mark opening and
//! closing tags.
//!
//! Decoders come in two flavours sharing one implementation: the plain
//! `decode_*` functions are bounded only by the slice they are given, the
//! `bacnet_*` functions additionally honour a caller-supplied `max_len`.

use crate::encoding::bacint::{
    decode_unsigned16, decode_unsigned32, encode_unsigned16, encode_unsigned32,
};
use crate::encoding::{reader::Reader, writer::Writer};
use crate::{DecodeError, EncodeError};

pub const CONTEXT_FLAG: u8 = 0x08;
const EXTENDED_TAG_NUMBER: u8 = 0x0F;
const LVT_MASK: u8 = 0x07;
const LVT_EXTENDED: u8 = 5;
const LVT_OPENING: u8 = 6;
const LVT_CLOSING: u8 = 7;
const EXT_LEN_U16: u8 = 254;
const EXT_LEN_U32: u8 = 255;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ApplicationTag {
    Null = 0,
    Boolean = 1,
    UnsignedInt = 2,
    SignedInt = 3,
    Real = 4,
    Double = 5,
    OctetString = 6,
    CharacterString = 7,
    BitString = 8,
    Enumerated = 9,
    Date = 10,
    Time = 11,
    ObjectId = 12,
}

impl ApplicationTag {
    pub fn from_u8(value: u8) -> Result<Self, DecodeError> {
        match value {
            0 => Ok(Self::Null),
            1 => Ok(Self::Boolean),
            2 => Ok(Self::UnsignedInt),
            3 => Ok(Self::SignedInt),
            4 => Ok(Self::Real),
            5 => Ok(Self::Double),
            6 => Ok(Self::OctetString),
            7 => Ok(Self::CharacterString),
            8 => Ok(Self::BitString),
            9 => Ok(Self::Enumerated),
            10 => Ok(Self::Date),
            11 => Ok(Self::Time),
            12 => Ok(Self::ObjectId),
            _ => Err(DecodeError::InvalidTag),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Delimiter {
    Opening,
    Closing,
}

/// One decoded tag header.
///
/// Opening and closing tags report `len_value_type == 0` and carry the
/// marker in `delimiter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TagHeader {
    pub tag_number: u8,
    pub context: bool,
    pub len_value_type: u32,
    pub delimiter: Option<Delimiter>,
}

impl TagHeader {
    pub const fn is_opening(&self) -> bool {
        matches!(self.delimiter, Some(Delimiter::Opening))
    }

    pub const fn is_closing(&self) -> bool {
        matches!(self.delimiter, Some(Delimiter::Closing))
    }

    /// True for a context tag numbered `tag_number` that is not a delimiter.
    pub const fn is_context(&self, tag_number: u8) -> bool {
        self.context && self.tag_number == tag_number && self.delimiter.is_none()
    }
}

/// Reads the 16-bit and 32-bit extended length fields of a tag header.
///
/// The consumed count returned by each method is trusted by the tag decoder
/// and added to the header length as reported.
pub trait LengthFieldDecoder {
    fn decode_u16(&self, buf: &[u8]) -> Result<(u16, usize), DecodeError>;
    fn decode_u32(&self, buf: &[u8]) -> Result<(u32, usize), DecodeError>;
}

/// Big-endian length fields, as sent on the wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigEndianLengths;

impl LengthFieldDecoder for BigEndianLengths {
    fn decode_u16(&self, buf: &[u8]) -> Result<(u16, usize), DecodeError> {
        decode_unsigned16(buf)
    }

    fn decode_u32(&self, buf: &[u8]) -> Result<(u32, usize), DecodeError> {
        decode_unsigned32(buf)
    }
}

/// Number of bytes `encode_tag` produces for these parameters.
pub const fn tag_header_len(tag_number: u8, len_value_type: u32) -> usize {
    let mut len = 1;
    if tag_number > 14 {
        len += 1;
    }
    if len_value_type > 4 {
        len += if len_value_type <= 253 {
            1
        } else if len_value_type <= 65_535 {
            3
        } else {
            5
        };
    }
    len
}

fn first_byte(tag_number: u8, context: bool, lvt_field: u8) -> u8 {
    let mut first = if tag_number <= 14 {
        tag_number << 4
    } else {
        EXTENDED_TAG_NUMBER << 4
    };
    if context {
        first |= CONTEXT_FLAG;
    }
    first | lvt_field
}

/// Writes a tag header and returns its length.
///
/// Nothing is written unless the whole header fits.
pub fn encode_tag(
    w: &mut Writer<'_>,
    tag_number: u8,
    context: bool,
    len_value_type: u32,
) -> Result<usize, EncodeError> {
    w.reserve(tag_header_len(tag_number, len_value_type))?;

    let lvt_field = if len_value_type <= 4 {
        len_value_type as u8
    } else {
        LVT_EXTENDED
    };
    w.write_u8(first_byte(tag_number, context, lvt_field))?;
    let mut len = 1;

    if tag_number > 14 {
        w.write_u8(tag_number)?;
        len += 1;
    }

    if lvt_field == LVT_EXTENDED {
        if len_value_type <= 253 {
            w.write_u8(len_value_type as u8)?;
            len += 1;
        } else if len_value_type <= 65_535 {
            w.write_u8(EXT_LEN_U16)?;
            len += 1 + encode_unsigned16(w, len_value_type as u16)?;
        } else {
            w.write_u8(EXT_LEN_U32)?;
            len += 1 + encode_unsigned32(w, len_value_type)?;
        }
    }

    Ok(len)
}

fn encode_delimiter(w: &mut Writer<'_>, tag_number: u8, lvt_field: u8) -> Result<usize, EncodeError> {
    let len = tag_header_len(tag_number, 0);
    w.reserve(len)?;
    w.write_u8(first_byte(tag_number, true, lvt_field))?;
    if tag_number > 14 {
        w.write_u8(tag_number)?;
    }
    Ok(len)
}

pub fn encode_opening_tag(w: &mut Writer<'_>, tag_number: u8) -> Result<usize, EncodeError> {
    encode_delimiter(w, tag_number, LVT_OPENING)
}

pub fn encode_closing_tag(w: &mut Writer<'_>, tag_number: u8) -> Result<usize, EncodeError> {
    encode_delimiter(w, tag_number, LVT_CLOSING)
}

fn tag_number_bounded(buf: &[u8], bound: Option<usize>) -> Result<(u8, usize), DecodeError> {
    let limit = bound.map_or(buf.len(), |max| max.min(buf.len()));
    let first = match buf.first() {
        Some(b) if limit > 0 => *b,
        _ => return Err(DecodeError::UnexpectedEof),
    };
    if first >> 4 == EXTENDED_TAG_NUMBER {
        if limit < 2 {
            log::trace!("extended tag number truncated at {limit} bytes");
            return Err(DecodeError::UnexpectedEof);
        }
        Ok((buf[1], 2))
    } else {
        Ok((first >> 4, 1))
    }
}

/// Decodes the tag number, returning it with the bytes consumed (1 or 2).
pub fn decode_tag_number(buf: &[u8]) -> Result<(u8, usize), DecodeError> {
    tag_number_bounded(buf, None)
}

/// As [`decode_tag_number`], never reading past `max_len` bytes.
pub fn bacnet_tag_number_decode(buf: &[u8], max_len: usize) -> Result<(u8, usize), DecodeError> {
    tag_number_bounded(buf, Some(max_len))
}

fn header_bounded<D: LengthFieldDecoder + ?Sized>(
    lengths: &D,
    buf: &[u8],
    bound: Option<usize>,
) -> Result<(TagHeader, usize), DecodeError> {
    let limit = bound.map_or(buf.len(), |max| max.min(buf.len()));
    let (tag_number, mut len) = tag_number_bounded(buf, bound)?;
    let first = buf[0];

    let mut header = TagHeader {
        tag_number,
        context: first & CONTEXT_FLAG != 0,
        len_value_type: 0,
        delimiter: None,
    };

    match first & LVT_MASK {
        LVT_EXTENDED => {
            if len >= limit {
                log::trace!("tag length extension missing");
                return Err(DecodeError::UnexpectedEof);
            }
            let ext = buf[len];
            len += 1;
            let rest = &buf[len..limit];
            header.len_value_type = match ext {
                EXT_LEN_U16 => {
                    if bound.is_some() && rest.len() < 2 {
                        log::trace!("16-bit tag length truncated");
                        return Err(DecodeError::UnexpectedEof);
                    }
                    let (value, used) = lengths.decode_u16(rest)?;
                    if bound.is_some() && used > rest.len() {
                        log::trace!("16-bit tag length reported {used} bytes past bound");
                        return Err(DecodeError::UnexpectedEof);
                    }
                    len += used;
                    u32::from(value)
                }
                EXT_LEN_U32 => {
                    if bound.is_some() && rest.len() < 4 {
                        log::trace!("32-bit tag length truncated");
                        return Err(DecodeError::UnexpectedEof);
                    }
                    let (value, used) = lengths.decode_u32(rest)?;
                    if bound.is_some() && used > rest.len() {
                        log::trace!("32-bit tag length reported {used} bytes past bound");
                        return Err(DecodeError::UnexpectedEof);
                    }
                    len += used;
                    value
                }
                short => u32::from(short),
            };
        }
        LVT_OPENING => header.delimiter = Some(Delimiter::Opening),
        LVT_CLOSING => header.delimiter = Some(Delimiter::Closing),
        inline => header.len_value_type = u32::from(inline),
    }

    Ok((header, len))
}

/// Decodes a full tag header, returning it with the bytes consumed.
pub fn decode_tag_number_and_value(buf: &[u8]) -> Result<(TagHeader, usize), DecodeError> {
    header_bounded(&BigEndianLengths, buf, None)
}

/// As [`decode_tag_number_and_value`], never reading past `max_len` bytes.
pub fn bacnet_tag_number_and_value_decode(
    buf: &[u8],
    max_len: usize,
) -> Result<(TagHeader, usize), DecodeError> {
    header_bounded(&BigEndianLengths, buf, Some(max_len))
}

/// [`decode_tag_number_and_value`] with a custom extended-length reader.
pub fn decode_tag_number_and_value_with<D: LengthFieldDecoder + ?Sized>(
    lengths: &D,
    buf: &[u8],
) -> Result<(TagHeader, usize), DecodeError> {
    header_bounded(lengths, buf, None)
}

/// [`bacnet_tag_number_and_value_decode`] with a custom extended-length reader.
pub fn bacnet_tag_number_and_value_decode_with<D: LengthFieldDecoder + ?Sized>(
    lengths: &D,
    buf: &[u8],
    max_len: usize,
) -> Result<(TagHeader, usize), DecodeError> {
    header_bounded(lengths, buf, Some(max_len))
}

pub fn decode_is_opening_tag(buf: &[u8]) -> bool {
    buf.first().is_some_and(|b| b & LVT_MASK == LVT_OPENING)
}

pub fn decode_is_closing_tag(buf: &[u8]) -> bool {
    buf.first().is_some_and(|b| b & LVT_MASK == LVT_CLOSING)
}

/// Whether `buf` starts with a context tag numbered `tag_number`, plus the
/// length of its tag-number portion (reported even when it does not match).
pub fn decode_is_context_tag_with_length(buf: &[u8], tag_number: u8) -> (bool, usize) {
    match decode_tag_number(buf) {
        Ok((number, len)) => (buf[0] & CONTEXT_FLAG != 0 && number == tag_number, len),
        Err(_) => (false, 0),
    }
}

pub fn decode_is_context_tag(buf: &[u8], tag_number: u8) -> bool {
    decode_is_context_tag_with_length(buf, tag_number).0
}

pub fn decode_is_opening_tag_number(buf: &[u8], tag_number: u8) -> bool {
    decode_is_context_tag(buf, tag_number) && decode_is_opening_tag(buf)
}

pub fn decode_is_closing_tag_number(buf: &[u8], tag_number: u8) -> bool {
    decode_is_context_tag(buf, tag_number) && decode_is_closing_tag(buf)
}

/// Typed view of one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Application { tag: ApplicationTag, len: u32 },
    Context { tag_num: u8, len: u32 },
    Opening { tag_num: u8 },
    Closing { tag_num: u8 },
}

impl Tag {
    pub fn encode(self, w: &mut Writer<'_>) -> Result<usize, EncodeError> {
        match self {
            Tag::Application { tag, len } => encode_tag(w, tag as u8, false, len),
            Tag::Context { tag_num, len } => encode_tag(w, tag_num, true, len),
            Tag::Opening { tag_num } => encode_opening_tag(w, tag_num),
            Tag::Closing { tag_num } => encode_closing_tag(w, tag_num),
        }
    }

    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let (header, len) = decode_tag_number_and_value(r.rest())?;
        let tag = Self::from_header(header)?;
        r.skip(len)?;
        Ok(tag)
    }

    pub fn from_header(header: TagHeader) -> Result<Self, DecodeError> {
        match (header.context, header.delimiter) {
            (true, Some(Delimiter::Opening)) => Ok(Tag::Opening {
                tag_num: header.tag_number,
            }),
            (true, Some(Delimiter::Closing)) => Ok(Tag::Closing {
                tag_num: header.tag_number,
            }),
            (true, None) => Ok(Tag::Context {
                tag_num: header.tag_number,
                len: header.len_value_type,
            }),
            (false, None) => Ok(Tag::Application {
                tag: ApplicationTag::from_u8(header.tag_number)?,
                len: header.len_value_type,
            }),
            (false, Some(_)) => {
                log::trace!("application tag {} uses a delimiter field", header.tag_number);
                Err(DecodeError::InvalidTag)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    #[cfg(feature = "std")]
    use proptest::prelude::*;

    fn encode_to_vec(tag_number: u8, context: bool, lvt: u32) -> ([u8; 8], usize) {
        let mut buf = [0u8; 8];
        let mut w = Writer::new(&mut buf);
        let len = encode_tag(&mut w, tag_number, context, lvt).unwrap();
        assert_eq!(len, w.position());
        (buf, len)
    }

    #[test]
    fn roundtrip_application_tag() {
        let mut buf = [0u8; 8];
        let mut w = Writer::new(&mut buf);
        Tag::Application {
            tag: ApplicationTag::UnsignedInt,
            len: 3,
        }
        .encode(&mut w)
        .unwrap();

        let mut r = Reader::new(w.as_written());
        let t = Tag::decode(&mut r).unwrap();
        assert_eq!(
            t,
            Tag::Application {
                tag: ApplicationTag::UnsignedInt,
                len: 3
            }
        );
        assert!(r.is_empty());
    }

    #[test]
    fn roundtrip_extended() {
        let mut buf = [0u8; 16];
        let mut w = Writer::new(&mut buf);
        Tag::Context {
            tag_num: 30,
            len: 300,
        }
        .encode(&mut w)
        .unwrap();

        let mut r = Reader::new(w.as_written());
        let t = Tag::decode(&mut r).unwrap();
        assert_eq!(
            t,
            Tag::Context {
                tag_num: 30,
                len: 300
            }
        );
    }

    #[test]
    fn header_byte_counts() {
        let cases: &[(u8, bool, u32, usize)] = &[
            (0, false, 0, 1),
            (0, true, 0, 1),
            (14, true, 0, 1),
            (15, true, 0, 2),
            (255, false, 0, 2),
            (0, false, 5, 2),
            (0xC3, true, 253, 3),
            (0x3C, false, 254, 5),
            (0x3C, true, 65_535, 5),
            (3, false, 65_536, 6),
            (0x3C, true, 65_536, 7),
            (0x3C, true, u32::MAX, 7),
        ];
        for &(tag, ctx, lvt, expected) in cases {
            let (_, len) = encode_to_vec(tag, ctx, lvt);
            assert_eq!(len, expected, "tag {tag} ctx {ctx} lvt {lvt}");
            assert_eq!(tag_header_len(tag, lvt), expected);
            let mut sizing = Writer::sizing();
            assert_eq!(encode_tag(&mut sizing, tag, ctx, lvt).unwrap(), expected);
        }
    }

    #[test]
    fn boundary_headers() {
        let (buf, len) = encode_to_vec(0, false, 0);
        assert_eq!(&buf[..len], &[0x00]);
        let (buf, len) = encode_to_vec(0, true, 0);
        assert_eq!(&buf[..len], &[0x08]);
        let (buf, len) = encode_to_vec(14, true, 0);
        assert_eq!(&buf[..len], &[0xE8]);
        let (buf, len) = encode_to_vec(14, true, 4);
        assert_eq!(&buf[..len], &[0xEC]);
        let (buf, len) = encode_to_vec(15, true, 4);
        assert_eq!(&buf[..len], &[0xFC, 15]);
        let (buf, len) = encode_to_vec(0, false, 254);
        assert_eq!(&buf[..len], &[0x05, 254, 0x00, 0xFE]);
        let (buf, len) = encode_to_vec(2, false, 65_536);
        assert_eq!(&buf[..len], &[0x25, 255, 0x00, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn encode_leaves_surrounding_bytes() {
        let mut buf = [0x55u8; 9];
        let mut w = Writer::new(&mut buf[1..8]);
        let len = encode_tag(&mut w, 0x3C, true, u32::MAX).unwrap();
        assert_eq!(len, 7);
        assert_eq!(buf[0], 0x55);
        assert_eq!(buf[8], 0x55);
    }

    #[test]
    fn encode_short_buffer_writes_nothing() {
        let mut buf = [0x55u8; 3];
        let mut w = Writer::new(&mut buf);
        assert_eq!(
            encode_tag(&mut w, 1, false, 300),
            Err(EncodeError::BufferTooSmall)
        );
        assert_eq!(buf, [0x55; 3]);
    }

    #[test]
    fn opening_and_closing_tags() {
        for tag in [0u8, 1, 13, 14] {
            let mut buf = [0u8; 2];
            let mut w = Writer::new(&mut buf);
            assert_eq!(encode_opening_tag(&mut w, tag).unwrap(), 1);
            assert_eq!(encode_closing_tag(&mut w, tag).unwrap(), 1);
            assert_eq!(buf, [(tag << 4) | 0x0E, (tag << 4) | 0x0F]);
        }
        for tag in [15u8, 16, 0xFE, 0xFF] {
            let mut buf = [0u8; 4];
            let mut w = Writer::new(&mut buf);
            assert_eq!(encode_opening_tag(&mut w, tag).unwrap(), 2);
            assert_eq!(encode_closing_tag(&mut w, tag).unwrap(), 2);
            assert_eq!(buf, [0xFE, tag, 0xFF, tag]);
        }
    }

    #[test]
    fn tag_number_decoding() {
        assert_eq!(decode_tag_number(&[0x29]).unwrap(), (2, 1));
        assert_eq!(decode_tag_number(&[0xF9, 200]).unwrap(), (200, 2));
        assert_eq!(decode_tag_number(&[]), Err(DecodeError::UnexpectedEof));
        assert_eq!(decode_tag_number(&[0xF9]), Err(DecodeError::UnexpectedEof));

        assert_eq!(bacnet_tag_number_decode(&[0xF9, 200], 2).unwrap(), (200, 2));
        assert_eq!(
            bacnet_tag_number_decode(&[0xF9, 200], 1),
            Err(DecodeError::UnexpectedEof)
        );
        assert_eq!(
            bacnet_tag_number_decode(&[0x29], 0),
            Err(DecodeError::UnexpectedEof)
        );
    }

    #[test]
    fn header_values() {
        let (h, len) = decode_tag_number_and_value(&[0x0E]).unwrap();
        assert!(h.is_opening());
        assert_eq!((h.len_value_type, len), (0, 1));

        let (h, len) = decode_tag_number_and_value(&[0xFF, 0x20]).unwrap();
        assert!(h.is_closing());
        assert_eq!((h.tag_number, h.len_value_type, len), (0x20, 0, 2));

        let (h, len) = decode_tag_number_and_value(&[0x24]).unwrap();
        assert_eq!((h.tag_number, h.context, h.len_value_type, len), (2, false, 4, 1));

        let (h, len) = decode_tag_number_and_value(&[0x1D, 200]).unwrap();
        assert_eq!((h.tag_number, h.context, h.len_value_type, len), (1, true, 200, 2));

        let (h, len) = decode_tag_number_and_value(&[0x65, 254, 0x01, 0x00]).unwrap();
        assert_eq!((h.len_value_type, len), (256, 4));

        let (h, len) = decode_tag_number_and_value(&[0x65, 255, 0x00, 0x01, 0x00, 0x00]).unwrap();
        assert_eq!((h.len_value_type, len), (65_536, 6));
    }

    #[test]
    fn bounded_header_truncation() {
        let full = [0xFD, 40, 254, 0x01, 0x00];
        assert_eq!(
            bacnet_tag_number_and_value_decode(&full, 5).unwrap().1,
            5
        );
        for max_len in 0..5 {
            assert_eq!(
                bacnet_tag_number_and_value_decode(&full, max_len),
                Err(DecodeError::UnexpectedEof),
                "max_len {max_len}"
            );
        }
    }

    struct Instrumented {
        reported: usize,
        calls: Cell<u32>,
    }

    impl LengthFieldDecoder for Instrumented {
        fn decode_u16(&self, _buf: &[u8]) -> Result<(u16, usize), DecodeError> {
            self.calls.set(self.calls.get() + 1);
            Ok((0x1234, self.reported))
        }

        fn decode_u32(&self, _buf: &[u8]) -> Result<(u32, usize), DecodeError> {
            self.calls.set(self.calls.get() + 1);
            Ok((0x1234_5678, self.reported))
        }
    }

    #[test]
    fn delegate_length_is_propagated() {
        let lengths = Instrumented {
            reported: 2 + 13,
            calls: Cell::new(0),
        };
        let (h, len) = decode_tag_number_and_value_with(&lengths, &[0x05, 254, 0, 0]).unwrap();
        assert_eq!(h.len_value_type, 0x1234);
        assert_eq!(len, 4 + 13);
        assert_eq!(lengths.calls.get(), 1);

        let (h, len) = decode_tag_number_and_value_with(&lengths, &[0x05, 255, 0, 0, 0, 0]).unwrap();
        assert_eq!(h.len_value_type, 0x1234_5678);
        assert_eq!(len, 2 + 15);
    }

    #[test]
    fn bounded_delegate_length_is_revalidated() {
        let buf = [0x05, 254, 0, 0, 0, 0, 0, 0];
        let lengths = Instrumented {
            reported: 5,
            calls: Cell::new(0),
        };
        let (_, len) = bacnet_tag_number_and_value_decode_with(&lengths, &buf, 7).unwrap();
        assert_eq!(len, 7);
        assert_eq!(
            bacnet_tag_number_and_value_decode_with(&lengths, &buf, 6),
            Err(DecodeError::UnexpectedEof)
        );
        assert_eq!(lengths.calls.get(), 2);
    }

    #[test]
    fn bounded_u32_extension_checks_before_delegating() {
        let buf = [0x05, 255, 0, 0, 0, 0];
        let lengths = Instrumented {
            reported: 4,
            calls: Cell::new(0),
        };
        assert_eq!(
            bacnet_tag_number_and_value_decode_with(&lengths, &buf, 5),
            Err(DecodeError::UnexpectedEof)
        );
        assert_eq!(lengths.calls.get(), 0);
        assert_eq!(
            bacnet_tag_number_and_value_decode_with(&lengths, &buf, 6).unwrap().1,
            6
        );
    }

    #[test]
    fn delimiter_predicates() {
        assert!(decode_is_opening_tag(&[0x06]));
        assert!(decode_is_opening_tag(&[0xF6]));
        assert!(!decode_is_opening_tag(&[0x05]));
        assert!(!decode_is_opening_tag(&[0xF7]));
        assert!(!decode_is_opening_tag(&[0xFF]));
        assert!(!decode_is_opening_tag(&[]));

        assert!(decode_is_closing_tag(&[0x07]));
        assert!(decode_is_closing_tag(&[0xF7]));
        assert!(decode_is_closing_tag(&[0xFF]));
        assert!(!decode_is_closing_tag(&[0x06]));
        assert!(!decode_is_closing_tag(&[0xF8]));
        assert!(!decode_is_closing_tag(&[]));
    }

    #[test]
    fn context_predicates() {
        assert_eq!(decode_is_context_tag_with_length(&[0x0E], 1), (false, 1));
        assert!(!decode_is_opening_tag_number(&[0x0E], 1));
        assert!(!decode_is_context_tag(&[0x06], 1));
        assert_eq!(decode_is_context_tag_with_length(&[0x0E], 16), (false, 1));

        assert!(decode_is_context_tag(&[0xEF], 14));
        assert!(decode_is_closing_tag_number(&[0xEF], 14));
        assert!(!decode_is_opening_tag_number(&[0xEF], 14));

        assert_eq!(decode_is_context_tag_with_length(&[0xFE, 15], 15), (true, 2));
        assert!(decode_is_opening_tag_number(&[0xFE, 15], 15));

        assert_eq!(decode_is_context_tag_with_length(&[0xFF, 0xFF], 12), (false, 2));
        assert!(!decode_is_closing_tag_number(&[0xFF, 0xFF], 12));

        assert_eq!(decode_is_context_tag_with_length(&[0x0E, 0x0E], 0), (true, 1));
        assert!(decode_is_opening_tag_number(&[0x0E, 0x0E], 0));

        assert_eq!(decode_is_context_tag_with_length(&[], 0), (false, 0));
        assert!(!decode_is_opening_tag_number(&[], 0));
        assert!(!decode_is_closing_tag_number(&[], 0));
    }

    #[test]
    fn application_delimiter_is_rejected() {
        let mut r = Reader::new(&[0x26]);
        assert_eq!(Tag::decode(&mut r), Err(DecodeError::InvalidTag));
        assert_eq!(r.position(), 0);
    }

    #[cfg(feature = "std")]
    proptest! {
        #[test]
        fn header_roundtrip(tag in any::<u8>(), ctx in any::<bool>(), lvt in any::<u32>()) {
            let (buf, len) = encode_to_vec(tag, ctx, lvt);
            let (h, used) = bacnet_tag_number_and_value_decode(&buf[..len], len).unwrap();
            prop_assert_eq!(used, len);
            prop_assert_eq!(h.tag_number, tag);
            prop_assert_eq!(h.context, ctx);
            prop_assert_eq!(h.len_value_type, lvt);
            prop_assert!(h.delimiter.is_none());
        }
    }
}
