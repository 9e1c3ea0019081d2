use core::fmt;

use crate::encoding::primitives::{
    bacnet_enumerated_decode, decode_date_safe, decode_object_id_safe, decode_signed,
    decode_time_safe, decode_unsigned, encode_application, encode_application_boolean,
    encode_application_date, encode_application_double, encode_application_enumerated,
    encode_application_null, encode_application_object_id, encode_application_octet_string,
    encode_application_real, encode_application_signed, encode_application_time,
    encode_application_unsigned, encode_bacnet_character_string,
};
use crate::encoding::real::{decode_double_safe, decode_real_safe};
use crate::encoding::tag::{decode_tag_number_and_value, ApplicationTag, Tag};
use crate::encoding::{reader::Reader, writer::Writer};
use crate::types::{CharacterSet, Date, ObjectId, Time};
use crate::{DecodeError, EncodeError};

/// Any application-tagged primitive, borrowing string payloads from the input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ApplicationValue<'a> {
    Null,
    Boolean(bool),
    Unsigned(u64),
    Signed(i32),
    Real(f32),
    Double(f64),
    OctetString(&'a [u8]),
    CharacterString {
        charset: CharacterSet,
        bytes: &'a [u8],
    },
    /// `bytes` are in wire bit order.
    BitString {
        unused_bits: u8,
        bytes: &'a [u8],
    },
    Enumerated(u32),
    Date(Date),
    Time(Time),
    ObjectId(ObjectId),
}

impl ApplicationValue<'_> {
    pub const fn tag(&self) -> ApplicationTag {
        match self {
            Self::Null => ApplicationTag::Null,
            Self::Boolean(_) => ApplicationTag::Boolean,
            Self::Unsigned(_) => ApplicationTag::UnsignedInt,
            Self::Signed(_) => ApplicationTag::SignedInt,
            Self::Real(_) => ApplicationTag::Real,
            Self::Double(_) => ApplicationTag::Double,
            Self::OctetString(_) => ApplicationTag::OctetString,
            Self::CharacterString { .. } => ApplicationTag::CharacterString,
            Self::BitString { .. } => ApplicationTag::BitString,
            Self::Enumerated(_) => ApplicationTag::Enumerated,
            Self::Date(_) => ApplicationTag::Date,
            Self::Time(_) => ApplicationTag::Time,
            Self::ObjectId(_) => ApplicationTag::ObjectId,
        }
    }
}

impl fmt::Display for ApplicationValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Signed(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::OctetString(bytes) => write_hex(f, bytes),
            Self::CharacterString { charset, bytes } => match (charset, core::str::from_utf8(bytes)) {
                (CharacterSet::Utf8, Ok(text)) => write!(f, "{text:?}"),
                _ => {
                    write!(f, "{charset:?}:")?;
                    write_hex(f, bytes)
                }
            },
            Self::BitString { unused_bits, bytes } => {
                let total = (bytes.len() * 8).saturating_sub(usize::from(*unused_bits));
                for n in 0..total {
                    let set = bytes[n / 8] & (0x80 >> (n % 8)) != 0;
                    f.write_str(if set { "1" } else { "0" })?;
                }
                Ok(())
            }
            Self::Enumerated(v) => write!(f, "enum {v}"),
            Self::Date(d) => write!(
                f,
                "{:04}-{:02}-{:02} (weekday {})",
                d.year, d.month, d.day, d.weekday
            ),
            Self::Time(t) => write!(
                f,
                "{:02}:{:02}:{:02}.{:02}",
                t.hour, t.minute, t.second, t.hundredths
            ),
            Self::ObjectId(id) => write!(f, "({}, {})", id.object_type(), id.instance()),
        }
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for b in bytes {
        write!(f, "{b:02X}")?;
    }
    Ok(())
}

pub fn encode_application_value(
    w: &mut Writer<'_>,
    value: &ApplicationValue<'_>,
) -> Result<usize, EncodeError> {
    match *value {
        ApplicationValue::Null => encode_application_null(w),
        ApplicationValue::Boolean(v) => encode_application_boolean(w, v),
        ApplicationValue::Unsigned(v) => encode_application_unsigned(w, v),
        ApplicationValue::Signed(v) => encode_application_signed(w, v),
        ApplicationValue::Real(v) => encode_application_real(w, v),
        ApplicationValue::Double(v) => encode_application_double(w, v),
        ApplicationValue::OctetString(bytes) => encode_application_octet_string(w, bytes),
        ApplicationValue::CharacterString { charset, bytes } => {
            encode_application(w, ApplicationTag::CharacterString, |w| {
                encode_bacnet_character_string(w, charset, bytes)
            })
        }
        ApplicationValue::BitString { unused_bits, bytes } => {
            if unused_bits > 7 || (bytes.is_empty() && unused_bits != 0) {
                return Err(EncodeError::ValueOutOfRange);
            }
            encode_application(w, ApplicationTag::BitString, |w| {
                w.reserve(bytes.len() + 1)?;
                w.write_u8(unused_bits)?;
                w.write_all(bytes)?;
                Ok(bytes.len() + 1)
            })
        }
        ApplicationValue::Enumerated(v) => encode_application_enumerated(w, v),
        ApplicationValue::Date(ref d) => encode_application_date(w, d),
        ApplicationValue::Time(ref t) => encode_application_time(w, t),
        ApplicationValue::ObjectId(id) => {
            encode_application_object_id(w, id.object_type(), id.instance())
        }
    }
}

/// Decodes one application-tagged value and advances the reader past it.
///
/// Context tags and opening/closing tags yield [`DecodeError::Unsupported`]
/// without consuming input.
pub fn decode_application_value<'a>(
    r: &mut Reader<'a>,
) -> Result<ApplicationValue<'a>, DecodeError> {
    let input = r.rest();
    let (header, header_len) = decode_tag_number_and_value(input)?;
    let (tag, lvt) = match Tag::from_header(header)? {
        Tag::Application { tag, len } => (tag, len),
        other => {
            log::trace!("not an application value: {other:?}");
            return Err(DecodeError::Unsupported);
        }
    };
    let body = &input[header_len..];
    let (value, used) = decode_body(body, tag, lvt)?;
    r.skip(header_len + used)?;
    Ok(value)
}

/// Bounded form of [`decode_application_value`] over a slice.
pub fn bacnet_application_value_decode(
    buf: &[u8],
    max_len: usize,
) -> Result<(ApplicationValue<'_>, usize), DecodeError> {
    let mut r = Reader::with_limit(buf, max_len);
    let value = decode_application_value(&mut r)?;
    Ok((value, r.position()))
}

fn borrowed(body: &[u8], lvt: u32) -> Result<&[u8], DecodeError> {
    usize::try_from(lvt)
        .ok()
        .and_then(|len| body.get(..len))
        .ok_or(DecodeError::UnexpectedEof)
}

fn decode_body(
    body: &[u8],
    tag: ApplicationTag,
    lvt: u32,
) -> Result<(ApplicationValue<'_>, usize), DecodeError> {
    Ok(match tag {
        ApplicationTag::Null => {
            if lvt != 0 {
                return Err(DecodeError::InvalidLength);
            }
            (ApplicationValue::Null, 0)
        }
        ApplicationTag::Boolean => {
            if lvt > 1 {
                return Err(DecodeError::InvalidValue);
            }
            (ApplicationValue::Boolean(lvt == 1), 0)
        }
        ApplicationTag::UnsignedInt => {
            let (v, n) = decode_unsigned(body, lvt)?;
            (ApplicationValue::Unsigned(v), n)
        }
        ApplicationTag::SignedInt => {
            let (v, n) = decode_signed(body, lvt)?;
            (ApplicationValue::Signed(v), n)
        }
        ApplicationTag::Real => {
            let (v, n) = decode_real_safe(body, lvt)?;
            (ApplicationValue::Real(v), n)
        }
        ApplicationTag::Double => {
            let (v, n) = decode_double_safe(body, lvt)?;
            (ApplicationValue::Double(v), n)
        }
        ApplicationTag::OctetString => {
            let bytes = borrowed(body, lvt)?;
            (ApplicationValue::OctetString(bytes), bytes.len())
        }
        ApplicationTag::CharacterString => {
            let raw = borrowed(body, lvt)?;
            let (&charset, bytes) = raw.split_first().ok_or(DecodeError::InvalidLength)?;
            let charset = CharacterSet::from_u8(charset)?;
            (ApplicationValue::CharacterString { charset, bytes }, raw.len())
        }
        ApplicationTag::BitString => {
            let raw = borrowed(body, lvt)?;
            let (&unused_bits, bytes) = raw.split_first().ok_or(DecodeError::InvalidLength)?;
            if unused_bits > 7 || (bytes.is_empty() && unused_bits != 0) {
                return Err(DecodeError::InvalidValue);
            }
            (ApplicationValue::BitString { unused_bits, bytes }, raw.len())
        }
        ApplicationTag::Enumerated => {
            let (v, n) = bacnet_enumerated_decode(body, body.len(), lvt)?;
            (ApplicationValue::Enumerated(v), n)
        }
        ApplicationTag::Date => {
            let (v, n) = decode_date_safe(body, lvt)?;
            (ApplicationValue::Date(v), n)
        }
        ApplicationTag::Time => {
            let (v, n) = decode_time_safe(body, lvt)?;
            (ApplicationValue::Time(v), n)
        }
        ApplicationTag::ObjectId => {
            let (v, n) = decode_object_id_safe(body, lvt)?;
            (ApplicationValue::ObjectId(v), n)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{
        bacnet_application_value_decode, decode_application_value, encode_application_value,
        ApplicationValue,
    };
    use crate::encoding::{reader::Reader, writer::Writer};
    use crate::types::{CharacterSet, Date, ObjectId, Time};
    use crate::DecodeError;

    #[test]
    fn value_codec_roundtrip_supported_types() {
        let values = [
            ApplicationValue::Null,
            ApplicationValue::Boolean(true),
            ApplicationValue::Unsigned(123),
            ApplicationValue::Unsigned(u64::MAX),
            ApplicationValue::Signed(-123),
            ApplicationValue::Real(12.5),
            ApplicationValue::Double(42.25),
            ApplicationValue::OctetString(&[1, 2, 3]),
            ApplicationValue::CharacterString {
                charset: CharacterSet::Utf8,
                bytes: b"hello",
            },
            ApplicationValue::BitString {
                unused_bits: 1,
                bytes: &[0b1010_0000],
            },
            ApplicationValue::Enumerated(9),
            ApplicationValue::Date(Date::new(2024, 2, 3, 6)),
            ApplicationValue::Time(Time::new(1, 2, 3, 4)),
            ApplicationValue::ObjectId(ObjectId::new(8, 1)),
        ];

        for v in values {
            let mut buf = [0u8; 64];
            let mut w = Writer::new(&mut buf);
            let len = encode_application_value(&mut w, &v).unwrap();
            let mut r = Reader::new(w.as_written());
            let got = decode_application_value(&mut r).unwrap();
            assert_eq!(got, v);
            assert_eq!(r.position(), len);
            assert_eq!(got.tag(), v.tag());
        }
    }

    #[test]
    fn walks_a_value_stream() {
        let data = [0x21, 0x05, 0x10, 0x75, 0x06, 0x00, b'Z', b'o', b'n', b'e', b'1', 0x00];
        let mut r = Reader::new(&data);
        assert_eq!(decode_application_value(&mut r), Ok(ApplicationValue::Unsigned(5)));
        assert_eq!(decode_application_value(&mut r), Ok(ApplicationValue::Boolean(false)));
        assert_eq!(
            decode_application_value(&mut r),
            Ok(ApplicationValue::CharacterString {
                charset: CharacterSet::Utf8,
                bytes: b"Zone1",
            })
        );
        assert_eq!(decode_application_value(&mut r), Ok(ApplicationValue::Null));
        assert!(r.is_empty());
    }

    #[test]
    fn context_and_delimiters_are_left_alone() {
        for data in [&[0x19, 0x01][..], &[0x0E][..], &[0x0F][..]] {
            let mut r = Reader::new(data);
            assert_eq!(decode_application_value(&mut r), Err(DecodeError::Unsupported));
            assert_eq!(r.position(), 0);
        }
    }

    #[test]
    fn bounded_decode_stops_at_max_len() {
        let data = [0x44, 0x3F, 0x80, 0x00, 0x00];
        assert_eq!(
            bacnet_application_value_decode(&data, 5),
            Ok((ApplicationValue::Real(1.0), 5))
        );
        assert_eq!(
            bacnet_application_value_decode(&data, 4),
            Err(DecodeError::UnexpectedEof)
        );
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn displays_values() {
        use alloc::string::ToString;

        assert_eq!(ApplicationValue::Enumerated(3).to_string(), "enum 3");
        assert_eq!(ApplicationValue::OctetString(&[0xAB, 0x01]).to_string(), "AB01");
        assert_eq!(
            ApplicationValue::BitString {
                unused_bits: 4,
                bytes: &[0b1011_0000],
            }
            .to_string(),
            "1011"
        );
        assert_eq!(
            ApplicationValue::Time(Time::new(7, 5, 0, 12)).to_string(),
            "07:05:00.12"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_string(&ApplicationValue::Unsigned(7)).unwrap();
        assert_eq!(json, r#"{"Unsigned":7}"#);
    }
}
