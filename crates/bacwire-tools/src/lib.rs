use bacwire_core::apdu::encode_simple_ack;
use bacwire_core::encoding::primitives::{
    encode_application_boolean, encode_application_character_string, encode_application_date,
    encode_application_double, encode_application_enumerated, encode_application_null,
    encode_application_object_id, encode_application_octet_string, encode_application_real,
    encode_application_signed, encode_application_time, encode_application_unsigned,
    encode_context_boolean, encode_context_character_string, encode_context_date,
    encode_context_double, encode_context_enumerated, encode_context_null,
    encode_context_object_id, encode_context_octet_string, encode_context_real,
    encode_context_signed, encode_context_time, encode_context_unsigned,
};
use bacwire_core::encoding::reader::Reader;
use bacwire_core::encoding::tag::{encode_closing_tag, encode_opening_tag, Tag};
use bacwire_core::encoding::value::{decode_application_value, ApplicationValue};
use bacwire_core::encoding::writer::Writer;
use bacwire_core::types::{CharacterString, Date, Time};
use bacwire_core::{DecodeError, EncodeError};
use clap::Subcommand;
use serde::Serialize;
use thiserror::Error;

/// Largest character string the encoder tool accepts.
pub const MAX_STRING_LEN: usize = 1476;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid hex input: {0}")]
    Hex(String),
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
    #[error("decode error at offset {offset}: {source}")]
    Decode { offset: usize, source: DecodeError },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Usage(&'static str),
}

/// Parses hex text. Whitespace is ignored and `#` starts a comment running to
/// the end of the line.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, ToolError> {
    let digits: Vec<u8> = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(|line| line.bytes())
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if digits.len() % 2 != 0 {
        return Err(ToolError::Hex(format!(
            "odd number of hex digits ({})",
            digits.len()
        )));
    }
    digits
        .chunks_exact(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair)
                .map_err(|_| ToolError::Hex("non-ascii input".into()))?;
            u8::from_str_radix(text, 16)
                .map_err(|_| ToolError::Hex(format!("bad byte '{text}'")))
        })
        .collect()
}

pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One tag or value found while walking a tagged stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item<'a> {
    pub offset: usize,
    pub length: usize,
    pub depth: usize,
    pub kind: ItemKind<'a>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind<'a> {
    Value(ApplicationValue<'a>),
    Context { tag: u8, data: &'a [u8] },
    Opening { tag: u8 },
    Closing { tag: u8 },
}

/// Walks every tag in `bytes[..max_len]`.
///
/// Context-tagged payloads are not interpreted. A closing tag lowers the
/// nesting depth; unbalanced delimiters are reported but not rejected.
pub fn walk(bytes: &[u8], max_len: usize) -> Result<Vec<Item<'_>>, ToolError> {
    let mut r = Reader::with_limit(bytes, max_len);
    let mut items = Vec::new();
    let mut depth = 0usize;
    while !r.is_empty() {
        let offset = r.position();
        let decode_err = |source: DecodeError| ToolError::Decode { offset, source };
        let mut probe = r;
        let kind = match Tag::decode(&mut probe).map_err(decode_err)? {
            Tag::Application { .. } => {
                ItemKind::Value(decode_application_value(&mut r).map_err(decode_err)?)
            }
            Tag::Context { tag_num, len } => {
                let len =
                    usize::try_from(len).map_err(|_| decode_err(DecodeError::InvalidLength))?;
                let data = probe.read_exact(len).map_err(decode_err)?;
                r = probe;
                ItemKind::Context { tag: tag_num, data }
            }
            Tag::Opening { tag_num } => {
                r = probe;
                ItemKind::Opening { tag: tag_num }
            }
            Tag::Closing { tag_num } => {
                r = probe;
                ItemKind::Closing { tag: tag_num }
            }
        };
        let opens = matches!(kind, ItemKind::Opening { .. });
        if matches!(kind, ItemKind::Closing { .. }) {
            if depth == 0 {
                log::warn!("closing tag at offset {offset} without an opening tag");
            }
            depth = depth.saturating_sub(1);
        }
        log::debug!("offset {offset}: {kind:?}");
        items.push(Item {
            offset,
            length: r.position() - offset,
            depth,
            kind,
        });
        if opens {
            depth += 1;
        }
    }
    if depth > 0 {
        log::warn!("{depth} opening tag(s) left unclosed");
    }
    Ok(items)
}

/// Renders one walked item as a line of text.
pub fn describe(item: &Item<'_>) -> String {
    let indent = "  ".repeat(item.depth);
    let body = match &item.kind {
        ItemKind::Value(value) => format!("{:?} {value}", value.tag()),
        ItemKind::Context { tag, data } => format!("[{tag}] {}", to_hex(data)),
        ItemKind::Opening { tag } => format!("[{tag}] {{"),
        ItemKind::Closing { tag } => format!("}} [{tag}]"),
    };
    format!("{:>5}: {indent}{body}", item.offset)
}

/// Value to encode.
#[derive(Debug, Clone, Subcommand)]
pub enum EncodeValue {
    Null,
    Bool {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    Unsigned {
        value: u64,
    },
    Signed {
        #[arg(allow_hyphen_values = true)]
        value: i32,
    },
    Real {
        #[arg(allow_hyphen_values = true)]
        value: f32,
    },
    Double {
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    Enumerated {
        value: u32,
    },
    /// Date as YYYY-MM-DD.
    Date {
        value: String,
        /// 1 = Monday .. 7 = Sunday, 255 = unspecified.
        #[arg(long, default_value_t = 255)]
        weekday: u8,
    },
    /// Time as HH:MM:SS or HH:MM:SS.hh.
    Time {
        value: String,
    },
    ObjectId {
        object_type: u16,
        instance: u32,
    },
    /// UTF-8 character string.
    String {
        value: String,
    },
    /// Octet string given as hex.
    Octets {
        value: String,
    },
    Opening {
        tag: u8,
    },
    Closing {
        tag: u8,
    },
    SimpleAck {
        invoke_id: u8,
        service_choice: u8,
    },
}

fn encode_to_vec<F>(encode: F) -> Result<Vec<u8>, ToolError>
where
    F: Fn(&mut Writer<'_>) -> Result<usize, EncodeError>,
{
    let len = encode(&mut Writer::sizing())?;
    let mut out = vec![0u8; len];
    let mut w = Writer::new(&mut out);
    encode(&mut w)?;
    Ok(out)
}

fn parse_fields<const N: usize>(text: &str, separators: &[char]) -> Option<[u16; N]> {
    let mut out = [0u16; N];
    let mut parts = text.split(separators);
    for slot in &mut out {
        *slot = parts.next()?.trim().parse().ok()?;
    }
    parts.next().is_none().then_some(out)
}

pub fn parse_date(text: &str, weekday: u8) -> Result<Date, ToolError> {
    let [year, month, day] =
        parse_fields::<3>(text, &['-']).ok_or(ToolError::Usage("date must be YYYY-MM-DD"))?;
    let byte = |v: u16| u8::try_from(v).map_err(|_| ToolError::Usage("date field out of range"));
    Ok(Date::new(year, byte(month)?, byte(day)?, weekday))
}

pub fn parse_time(text: &str) -> Result<Time, ToolError> {
    let fields = if text.contains('.') {
        parse_fields::<4>(text, &[':', '.'])
    } else {
        parse_fields::<3>(text, &[':']).map(|[h, m, s]| [h, m, s, 0])
    };
    let [hour, minute, second, hundredths] = fields.ok_or(ToolError::Usage("time must be HH:MM:SS or HH:MM:SS.hh"))?;
    let byte = |v: u16| u8::try_from(v).map_err(|_| ToolError::Usage("time field out of range"));
    Ok(Time::new(
        byte(hour)?,
        byte(minute)?,
        byte(second)?,
        byte(hundredths)?,
    ))
}

/// Encodes `value`, application-tagged or behind context tag `context`.
pub fn encode_value(value: &EncodeValue, context: Option<u8>) -> Result<Vec<u8>, ToolError> {
    match (value, context) {
        (EncodeValue::Null, None) => encode_to_vec(encode_application_null),
        (EncodeValue::Null, Some(tag)) => encode_to_vec(|w| encode_context_null(w, tag)),
        (EncodeValue::Bool { value }, None) => {
            encode_to_vec(|w| encode_application_boolean(w, *value))
        }
        (EncodeValue::Bool { value }, Some(tag)) => {
            encode_to_vec(|w| encode_context_boolean(w, tag, *value))
        }
        (EncodeValue::Unsigned { value }, None) => {
            encode_to_vec(|w| encode_application_unsigned(w, *value))
        }
        (EncodeValue::Unsigned { value }, Some(tag)) => {
            encode_to_vec(|w| encode_context_unsigned(w, tag, *value))
        }
        (EncodeValue::Signed { value }, None) => {
            encode_to_vec(|w| encode_application_signed(w, *value))
        }
        (EncodeValue::Signed { value }, Some(tag)) => {
            encode_to_vec(|w| encode_context_signed(w, tag, *value))
        }
        (EncodeValue::Real { value }, None) => {
            encode_to_vec(|w| encode_application_real(w, *value))
        }
        (EncodeValue::Real { value }, Some(tag)) => {
            encode_to_vec(|w| encode_context_real(w, tag, *value))
        }
        (EncodeValue::Double { value }, None) => {
            encode_to_vec(|w| encode_application_double(w, *value))
        }
        (EncodeValue::Double { value }, Some(tag)) => {
            encode_to_vec(|w| encode_context_double(w, tag, *value))
        }
        (EncodeValue::Enumerated { value }, None) => {
            encode_to_vec(|w| encode_application_enumerated(w, *value))
        }
        (EncodeValue::Enumerated { value }, Some(tag)) => {
            encode_to_vec(|w| encode_context_enumerated(w, tag, *value))
        }
        (EncodeValue::Date { value, weekday }, context) => {
            let date = parse_date(value, *weekday)?;
            match context {
                None => encode_to_vec(|w| encode_application_date(w, &date)),
                Some(tag) => encode_to_vec(|w| encode_context_date(w, tag, &date)),
            }
        }
        (EncodeValue::Time { value }, context) => {
            let time = parse_time(value)?;
            match context {
                None => encode_to_vec(|w| encode_application_time(w, &time)),
                Some(tag) => encode_to_vec(|w| encode_context_time(w, tag, &time)),
            }
        }
        (
            EncodeValue::ObjectId {
                object_type,
                instance,
            },
            None,
        ) => encode_to_vec(|w| encode_application_object_id(w, *object_type, *instance)),
        (
            EncodeValue::ObjectId {
                object_type,
                instance,
            },
            Some(tag),
        ) => encode_to_vec(|w| encode_context_object_id(w, tag, *object_type, *instance)),
        (EncodeValue::String { value }, context) => {
            let text =
                CharacterString::<MAX_STRING_LEN>::utf8(value).map_err(EncodeError::from)?;
            match context {
                None => encode_to_vec(|w| encode_application_character_string(w, &text)),
                Some(tag) => encode_to_vec(|w| encode_context_character_string(w, tag, &text)),
            }
        }
        (EncodeValue::Octets { value }, context) => {
            let bytes = parse_hex(value)?;
            match context {
                None => encode_to_vec(|w| encode_application_octet_string(w, &bytes)),
                Some(tag) => encode_to_vec(|w| encode_context_octet_string(w, tag, &bytes)),
            }
        }
        (EncodeValue::Opening { tag }, None) => encode_to_vec(|w| encode_opening_tag(w, *tag)),
        (EncodeValue::Closing { tag }, None) => encode_to_vec(|w| encode_closing_tag(w, *tag)),
        (
            EncodeValue::SimpleAck {
                invoke_id,
                service_choice,
            },
            None,
        ) => encode_to_vec(|w| encode_simple_ack(w, *invoke_id, *service_choice)),
        (
            EncodeValue::Opening { .. }
            | EncodeValue::Closing { .. }
            | EncodeValue::SimpleAck { .. },
            Some(_),
        ) => Err(ToolError::Usage(
            "--context does not apply to delimiters or simple-ack",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_skips_comments_and_spacing() {
        let bytes = parse_hex("# header\n21 05\n10 # false\n7506 00 5A6F6E6531\n").unwrap();
        assert_eq!(
            bytes,
            [0x21, 0x05, 0x10, 0x75, 0x06, 0x00, b'Z', b'o', b'n', b'e', b'1']
        );
        assert!(matches!(parse_hex("2"), Err(ToolError::Hex(_))));
        assert!(matches!(parse_hex("zz"), Err(ToolError::Hex(_))));
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn hex_rendering() {
        assert_eq!(to_hex(&[0x20, 0x83, 0xF7]), "20 83 F7");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn walk_tracks_nesting() {
        let bytes = parse_hex("3E 21 05 3F 09 01").unwrap();
        let items = walk(&bytes, bytes.len()).unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].kind, ItemKind::Opening { tag: 3 });
        assert_eq!(items[1].kind, ItemKind::Value(ApplicationValue::Unsigned(5)));
        assert_eq!(items[1].depth, 1);
        assert_eq!(items[2].depth, 0);
        assert_eq!(
            items[3].kind,
            ItemKind::Context {
                tag: 0,
                data: &[0x01]
            }
        );
        assert_eq!((items[3].offset, items[3].length), (4, 2));
        assert_eq!(describe(&items[1]), "    1:   UnsignedInt 5");
    }

    #[test]
    fn walk_reports_failure_offset() {
        let bytes = parse_hex("21 05 44 3F 80").unwrap();
        match walk(&bytes, bytes.len()) {
            Err(ToolError::Decode { offset, source }) => {
                assert_eq!(offset, 2);
                assert_eq!(source, DecodeError::UnexpectedEof);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(walk(&bytes, 2).unwrap().len(), 1);
    }

    #[test]
    fn encodes_each_kind() {
        let hex = |v: EncodeValue, ctx| to_hex(&encode_value(&v, ctx).unwrap());
        assert_eq!(hex(EncodeValue::Null, Some(3)), "38");
        assert_eq!(hex(EncodeValue::Bool { value: true }, None), "11");
        assert_eq!(hex(EncodeValue::Unsigned { value: 256 }, None), "22 01 00");
        assert_eq!(hex(EncodeValue::Signed { value: -1 }, Some(1)), "19 FF");
        assert_eq!(
            hex(
                EncodeValue::Date {
                    value: "2024-02-03".into(),
                    weekday: 6
                },
                None
            ),
            "A4 7C 02 03 06"
        );
        assert_eq!(
            hex(
                EncodeValue::Time {
                    value: "13:45:00".into()
                },
                None
            ),
            "B4 0D 2D 00 00"
        );
        assert_eq!(
            hex(
                EncodeValue::ObjectId {
                    object_type: 8,
                    instance: 123
                },
                None
            ),
            "C4 02 00 00 7B"
        );
        assert_eq!(
            hex(EncodeValue::String { value: "Hi".into() }, None),
            "73 00 48 69"
        );
        assert_eq!(
            hex(
                EncodeValue::Octets {
                    value: "0102".into()
                },
                Some(2)
            ),
            "2A 01 02"
        );
        assert_eq!(hex(EncodeValue::Opening { tag: 1 }, None), "1E");
        assert_eq!(
            hex(
                EncodeValue::SimpleAck {
                    invoke_id: 0x83,
                    service_choice: 0xF7
                },
                None
            ),
            "20 83 F7"
        );
    }

    #[test]
    fn encode_rejects_bad_input() {
        let date = EncodeValue::Date {
            value: "1750-01-01".into(),
            weekday: 255,
        };
        assert!(matches!(
            encode_value(&date, None),
            Err(ToolError::Encode(EncodeError::ValueOutOfRange))
        ));
        assert!(matches!(
            encode_value(&EncodeValue::Closing { tag: 0 }, Some(1)),
            Err(ToolError::Usage(_))
        ));
        assert!(matches!(
            encode_value(
                &EncodeValue::Time {
                    value: "1:2".into()
                },
                None
            ),
            Err(ToolError::Usage(_))
        ));
        assert!(matches!(
            encode_value(
                &EncodeValue::ObjectId {
                    object_type: 1024,
                    instance: 0
                },
                None
            ),
            Err(ToolError::Encode(EncodeError::ValueOutOfRange))
        ));
    }
}
