use crate::types::CapacityError;
use crate::DecodeError;

/// Character set byte carried in front of every character string.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharacterSet {
    /// ANSI X3.4 / UTF-8.
    #[default]
    Utf8 = 0,
    IbmMicrosoftDbcs = 1,
    JisX0208 = 2,
    Ucs4 = 3,
    Ucs2 = 4,
    Iso8859_1 = 5,
}

impl CharacterSet {
    pub fn from_u8(value: u8) -> Result<Self, DecodeError> {
        match value {
            0 => Ok(Self::Utf8),
            1 => Ok(Self::IbmMicrosoftDbcs),
            2 => Ok(Self::JisX0208),
            3 => Ok(Self::Ucs4),
            4 => Ok(Self::Ucs2),
            5 => Ok(Self::Iso8859_1),
            _ => Err(DecodeError::InvalidValue),
        }
    }
}

/// Character string with a fixed capacity of `N` encoded bytes.
#[derive(Clone, Copy)]
pub struct CharacterString<const N: usize> {
    encoding: CharacterSet,
    len: usize,
    value: [u8; N],
}

impl<const N: usize> CharacterString<N> {
    pub const fn new(encoding: CharacterSet) -> Self {
        Self {
            encoding,
            len: 0,
            value: [0; N],
        }
    }

    pub fn with_bytes(encoding: CharacterSet, bytes: &[u8]) -> Result<Self, CapacityError> {
        let mut out = Self::new(encoding);
        out.append(bytes)?;
        Ok(out)
    }

    /// UTF-8 string from `text`.
    pub fn utf8(text: &str) -> Result<Self, CapacityError> {
        Self::with_bytes(CharacterSet::Utf8, text.as_bytes())
    }

    pub fn append(&mut self, bytes: &[u8]) -> Result<(), CapacityError> {
        let end = self.len + bytes.len();
        if end > N {
            return Err(CapacityError);
        }
        self.value[self.len..end].copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }

    pub fn truncate(&mut self, len: usize) -> Result<(), CapacityError> {
        if len > N {
            return Err(CapacityError);
        }
        self.len = self.len.min(len);
        Ok(())
    }

    pub fn set_encoding(&mut self, encoding: CharacterSet) {
        self.encoding = encoding;
    }

    pub const fn encoding(&self) -> CharacterSet {
        self.encoding
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.value[..self.len]
    }

    /// The contents as `&str` when the set is UTF-8 and the bytes are valid.
    pub fn as_str(&self) -> Option<&str> {
        match self.encoding {
            CharacterSet::Utf8 => core::str::from_utf8(self.as_bytes()).ok(),
            _ => None,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// UTF-8 strings must decode; other sets are accepted as opaque bytes.
    pub fn is_valid(&self) -> bool {
        self.encoding != CharacterSet::Utf8 || self.as_str().is_some()
    }

    /// True when every character is printable (no control characters).
    pub fn is_printable(&self) -> bool {
        match self.as_str() {
            Some(text) => !text.chars().any(char::is_control),
            None => self.encoding != CharacterSet::Utf8,
        }
    }
}

impl<const N: usize> Default for CharacterString<N> {
    fn default() -> Self {
        Self::new(CharacterSet::Utf8)
    }
}

impl<const N: usize> PartialEq for CharacterString<N> {
    fn eq(&self, other: &Self) -> bool {
        self.encoding == other.encoding && self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for CharacterString<N> {}

impl<const N: usize> core::fmt::Debug for CharacterString<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut d = f.debug_struct("CharacterString");
        d.field("encoding", &self.encoding);
        match self.as_str() {
            Some(text) => d.field("value", &text),
            None => d.field("value", &self.as_bytes()),
        };
        d.finish()
    }
}
