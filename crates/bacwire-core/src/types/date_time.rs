use crate::EncodeError;

/// Calendar date. `year` is absolute (e.g. 2024).
///
/// On the wire the year travels as `year - 1900` in a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub weekday: u8,
}

impl Date {
    pub const EPOCH_YEAR: u16 = 1900;

    pub const fn new(year: u16, month: u8, day: u8, weekday: u8) -> Self {
        Self {
            year,
            month,
            day,
            weekday,
        }
    }

    /// Year byte as sent on the wire.
    ///
    /// Years from 1900 are absolute. Years below 256 are taken as already
    /// relative to 1900. Anything that does not fit one byte is rejected.
    pub fn wire_year(&self) -> Result<u8, EncodeError> {
        let relative = if self.year >= Self::EPOCH_YEAR {
            self.year - Self::EPOCH_YEAR
        } else {
            self.year
        };
        u8::try_from(relative).map_err(|_| {
            log::debug!("date year {} not representable", self.year);
            EncodeError::ValueOutOfRange
        })
    }

    pub fn to_wire(&self) -> Result<[u8; 4], EncodeError> {
        Ok([self.wire_year()?, self.month, self.day, self.weekday])
    }

    pub const fn from_wire(bytes: [u8; 4]) -> Self {
        Self {
            year: Self::EPOCH_YEAR + bytes[0] as u16,
            month: bytes[1],
            day: bytes[2],
            weekday: bytes[3],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub hundredths: u8,
}

impl Time {
    pub const fn new(hour: u8, minute: u8, second: u8, hundredths: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            hundredths,
        }
    }

    pub const fn to_wire(&self) -> [u8; 4] {
        [self.hour, self.minute, self.second, self.hundredths]
    }

    pub const fn from_wire(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}
