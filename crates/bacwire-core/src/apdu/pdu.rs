/// PDU type carried in the high nibble of the first APDU octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ApduType {
    ConfirmedRequest = 0,
    UnconfirmedRequest = 1,
    SimpleAck = 2,
    ComplexAck = 3,
    SegmentAck = 4,
    Error = 5,
    Reject = 6,
    Abort = 7,
}

impl ApduType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::ConfirmedRequest),
            1 => Some(Self::UnconfirmedRequest),
            2 => Some(Self::SimpleAck),
            3 => Some(Self::ComplexAck),
            4 => Some(Self::SegmentAck),
            5 => Some(Self::Error),
            6 => Some(Self::Reject),
            7 => Some(Self::Abort),
            _ => None,
        }
    }

    /// Type of the APDU whose first octet is `octet`.
    pub fn from_first_octet(octet: u8) -> Option<Self> {
        Self::from_u8(octet >> 4)
    }

    pub const fn first_octet(self) -> u8 {
        (self as u8) << 4
    }
}

#[cfg(test)]
mod tests {
    use super::ApduType;

    #[test]
    fn discriminants_follow_the_high_nibble() {
        for n in 0..8u8 {
            let kind = ApduType::from_u8(n).unwrap();
            assert_eq!(kind as u8, n);
            assert_eq!(ApduType::from_first_octet(kind.first_octet() | 0x0F), Some(kind));
        }
        assert_eq!(ApduType::from_u8(8), None);
        assert_eq!(ApduType::from_first_octet(0x80), None);
        assert_eq!(ApduType::SimpleAck.first_octet(), 0x20);
    }
}
