use crate::types::CapacityError;
use crate::DecodeError;

/// Octet string with a fixed capacity of `N` bytes.
#[derive(Clone, Copy)]
pub struct OctetString<const N: usize> {
    len: usize,
    value: [u8; N],
}

impl<const N: usize> OctetString<N> {
    pub const fn new() -> Self {
        Self {
            len: 0,
            value: [0; N],
        }
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, CapacityError> {
        let mut out = Self::new();
        out.append(data)?;
        Ok(out)
    }

    /// Parses pairs of hex digits, skipping whitespace between pairs.
    pub fn from_ascii_hex(text: &str) -> Result<Self, DecodeError> {
        let mut out = Self::new();
        let mut digits = text.bytes().filter(|b| !b.is_ascii_whitespace());
        while let Some(hi) = digits.next() {
            let lo = digits.next().ok_or(DecodeError::InvalidLength)?;
            let byte = hex_value(hi)
                .zip(hex_value(lo))
                .map(|(h, l)| (h << 4) | l)
                .ok_or(DecodeError::InvalidValue)?;
            out.append(&[byte])?;
        }
        Ok(out)
    }

    pub fn append(&mut self, data: &[u8]) -> Result<(), CapacityError> {
        let end = self.len + data.len();
        if end > N {
            return Err(CapacityError);
        }
        self.value[self.len..end].copy_from_slice(data);
        self.len = end;
        Ok(())
    }

    /// Shortens to `len` bytes. Fails if `len` is beyond capacity.
    pub fn truncate(&mut self, len: usize) -> Result<(), CapacityError> {
        if len > N {
            return Err(CapacityError);
        }
        self.len = self.len.min(len);
        Ok(())
    }

    /// Copies the contents into `dest`, returning the number of bytes copied.
    pub fn copy_value(&self, dest: &mut [u8]) -> Result<usize, CapacityError> {
        let src = self.as_bytes();
        dest.get_mut(..src.len())
            .ok_or(CapacityError)?
            .copy_from_slice(src);
        Ok(src.len())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.value[..self.len]
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
}

fn hex_value(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|d| d as u8)
}

impl<const N: usize> Default for OctetString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for OctetString<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for OctetString<N> {}

impl<const N: usize> core::fmt::Debug for OctetString<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("OctetString").field(&self.as_bytes()).finish()
    }
}
