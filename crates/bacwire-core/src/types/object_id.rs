use crate::EncodeError;

/// A packed BACnet object identifier: a 10-bit object type and a 22-bit
/// instance number in one `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ObjectId(u32);

impl ObjectId {
    pub const MAX_OBJECT_TYPE: u16 = 0x03FF;
    pub const MAX_INSTANCE: u32 = 0x3F_FFFF;

    /// Packs `object_type` and `instance`, masking each to its field width.
    pub const fn new(object_type: u16, instance: u32) -> Self {
        Self(
            (((object_type & Self::MAX_OBJECT_TYPE) as u32) << 22)
                | (instance & Self::MAX_INSTANCE),
        )
    }

    /// Packs `object_type` and `instance`, rejecting values that overflow their fields.
    pub fn try_new(object_type: u16, instance: u32) -> Result<Self, EncodeError> {
        if object_type > Self::MAX_OBJECT_TYPE || instance > Self::MAX_INSTANCE {
            log::debug!("object identifier {object_type}:{instance} out of range");
            return Err(EncodeError::ValueOutOfRange);
        }
        Ok(Self::new(object_type, instance))
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn object_type(self) -> u16 {
        ((self.0 >> 22) & 0x03FF) as u16
    }

    pub const fn instance(self) -> u32 {
        self.0 & Self::MAX_INSTANCE
    }
}
