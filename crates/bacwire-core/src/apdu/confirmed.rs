use crate::apdu::ApduType;
use crate::encoding::{reader::Reader, writer::Writer};
use crate::{DecodeError, EncodeError};

/// Simple acknowledgement: PDU type, invoke ID, service choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimpleAck {
    pub invoke_id: u8,
    pub service_choice: u8,
}

impl SimpleAck {
    pub fn encode(&self, w: &mut Writer<'_>) -> Result<usize, EncodeError> {
        encode_simple_ack(w, self.invoke_id, self.service_choice)
    }

    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let b0 = r.read_u8()?;
        if ApduType::from_first_octet(b0) != Some(ApduType::SimpleAck) {
            return Err(DecodeError::InvalidValue);
        }
        Ok(Self {
            invoke_id: r.read_u8()?,
            service_choice: r.read_u8()?,
        })
    }
}

/// Writes the three-octet simple acknowledgement header. Any invoke ID and
/// service choice are accepted as-is.
pub fn encode_simple_ack(
    w: &mut Writer<'_>,
    invoke_id: u8,
    service_choice: u8,
) -> Result<usize, EncodeError> {
    w.reserve(3)?;
    w.write_u8(ApduType::SimpleAck.first_octet())?;
    w.write_u8(invoke_id)?;
    w.write_u8(service_choice)?;
    Ok(3)
}

/// Maximum segments accepted, from the high nibble of a confirmed-request
/// octet. `65` stands for "more than 64".
pub fn decode_max_segs(octet: u8) -> u8 {
    match octet >> 4 {
        1 => 2,
        2 => 4,
        3 => 8,
        4 => 16,
        5 => 32,
        6 => 64,
        7 => 65,
        _ => 0,
    }
}

/// Maximum APDU length accepted, from the low nibble of a confirmed-request octet.
pub fn decode_max_apdu(octet: u8) -> u16 {
    match octet & 0x0F {
        0 => 50,
        1 => 128,
        2 => 206,
        3 => 480,
        4 => 1024,
        5 => 1476,
        _ => 0,
    }
}

/// Packs segment and APDU limits into one octet, rounding each up to the
/// next code that covers it. APDU sizes above 1476 fall back to code 0.
pub fn encode_max_segs_max_apdu(max_segs: i32, max_apdu: i32) -> u8 {
    let segs: u8 = match max_segs {
        i32::MIN..=1 => 0,
        2..=3 => 1,
        4..=7 => 2,
        8..=15 => 3,
        16..=31 => 4,
        32..=63 => 5,
        64 => 6,
        _ => 7,
    };
    let apdu: u8 = match max_apdu {
        i32::MIN..=50 => 0,
        51..=128 => 1,
        129..=206 => 2,
        207..=480 => 3,
        481..=1024 => 4,
        1025..=1476 => 5,
        _ => 0,
    };
    (segs << 4) | apdu
}
