use core::fmt;

pub mod bit_string;
pub mod character_string;
pub mod date_time;
pub mod object_id;
pub mod octet_string;

pub use bit_string::BitString;
pub use character_string::{CharacterSet, CharacterString};
pub use date_time::{Date, Time};
pub use object_id::ObjectId;
pub use octet_string::OctetString;

/// A bounded container was asked to hold more than its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapacityError;

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("capacity exceeded")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CapacityError {}

impl From<CapacityError> for crate::DecodeError {
    fn from(_: CapacityError) -> Self {
        Self::CapacityExceeded
    }
}

impl From<CapacityError> for crate::EncodeError {
    fn from(_: CapacityError) -> Self {
        Self::ValueOutOfRange
    }
}
