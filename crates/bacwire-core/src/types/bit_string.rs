use crate::encoding::bits::{bit_check, bit_clear, bit_set, byte_reverse_bits};
use crate::types::CapacityError;
use crate::DecodeError;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Bit string holding up to `N * 8` bits.
///
/// Bit `n` lives in octet `n / 8` at bit position `n % 8` counted from the
/// least significant bit. The wire form reverses each octet so that bit 0 is
/// sent first, see [`BitString::wire_octet`].
#[derive(Clone, Copy)]
pub struct BitString<const N: usize> {
    bits_used: usize,
    octets: [u8; N],
}

impl<const N: usize> BitString<N> {
    pub const fn new() -> Self {
        Self {
            bits_used: 0,
            octets: [0; N],
        }
    }

    /// Parses a string of `0`/`1` characters, bit 0 first.
    pub fn from_ascii(text: &str) -> Result<Self, DecodeError> {
        let mut out = Self::new();
        for (n, c) in text.bytes().enumerate() {
            let value = match c {
                b'0' => false,
                b'1' => true,
                _ => return Err(DecodeError::InvalidValue),
            };
            out.set_bit(n, value)?;
        }
        Ok(out)
    }

    /// Sets or clears bit `n`, growing the used length to cover it.
    pub fn set_bit(&mut self, n: usize, value: bool) -> Result<(), CapacityError> {
        if n >= self.bits_capacity() {
            return Err(CapacityError);
        }
        let pos = (n % 8) as u32;
        let octet = &mut self.octets[n / 8];
        if value {
            bit_set(octet, pos);
        } else {
            bit_clear(octet, pos);
        }
        self.bits_used = self.bits_used.max(n + 1);
        Ok(())
    }

    /// Bit `n`; bits past the used length read as `false`.
    pub fn bit(&self, n: usize) -> bool {
        n < self.bits_used && bit_check(self.octets[n / 8], (n % 8) as u32)
    }

    pub const fn bits_used(&self) -> usize {
        self.bits_used
    }

    pub const fn bytes_used(&self) -> usize {
        self.bits_used.div_ceil(8)
    }

    pub const fn bits_capacity(&self) -> usize {
        N * 8
    }

    /// Padding bits in the last used octet.
    pub const fn unused_bits(&self) -> u8 {
        (self.bytes_used() * 8 - self.bits_used) as u8
    }

    pub fn octet(&self, index: usize) -> u8 {
        self.octets.get(index).copied().unwrap_or(0)
    }

    /// Sets the used length from a byte count and the padding in the last byte.
    pub fn set_bits_used(&mut self, bytes_used: usize, unused_bits: u8) -> Result<(), CapacityError> {
        if bytes_used > N || unused_bits > 7 || (bytes_used == 0 && unused_bits != 0) {
            return Err(CapacityError);
        }
        self.bits_used = bytes_used * 8 - usize::from(unused_bits);
        Ok(())
    }

    /// Octet `index` in wire bit order. Padding bits of the last used octet
    /// are sent as zero.
    pub fn wire_octet(&self, index: usize) -> u8 {
        let octet = byte_reverse_bits(self.octet(index));
        if index + 1 == self.bytes_used() {
            octet & (0xFF << self.unused_bits())
        } else {
            octet
        }
    }

    /// Rebuilds a bit string from its wire form: padding count and octets.
    pub fn from_wire(unused_bits: u8, data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() > N {
            return Err(DecodeError::CapacityExceeded);
        }
        if unused_bits > 7 || (data.is_empty() && unused_bits != 0) {
            return Err(DecodeError::InvalidValue);
        }
        let mut out = Self::new();
        for (index, byte) in data.iter().enumerate() {
            out.octets[index] = byte_reverse_bits(*byte);
        }
        out.set_bits_used(data.len(), unused_bits)?;
        Ok(out)
    }

    #[cfg(feature = "alloc")]
    pub fn to_bools(&self) -> Vec<bool> {
        (0..self.bits_used).map(|n| self.bit(n)).collect()
    }
}

impl<const N: usize> Default for BitString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for BitString<N> {
    fn eq(&self, other: &Self) -> bool {
        self.bits_used == other.bits_used && (0..self.bits_used).all(|n| self.bit(n) == other.bit(n))
    }
}

impl<const N: usize> Eq for BitString<N> {}

impl<const N: usize> core::fmt::Debug for BitString<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("BitString(")?;
        for n in 0..self.bits_used {
            f.write_str(if self.bit(n) { "1" } else { "0" })?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::BitString;
    use crate::types::CapacityError;
    use crate::DecodeError;

    #[test]
    fn set_and_read_bits() {
        let mut bs = BitString::<2>::new();
        bs.set_bit(0, true).unwrap();
        bs.set_bit(9, true).unwrap();
        assert_eq!(bs.bits_used(), 10);
        assert_eq!(bs.bytes_used(), 2);
        assert_eq!(bs.unused_bits(), 6);
        assert!(bs.bit(0));
        assert!(!bs.bit(1));
        assert!(bs.bit(9));
        assert!(!bs.bit(12));
        assert_eq!(bs.set_bit(16, true), Err(CapacityError));
    }

    #[test]
    fn wire_order_puts_bit_zero_in_msb() {
        let bs = BitString::<1>::from_ascii("10100").unwrap();
        assert_eq!(bs.octet(0), 0b0000_0101);
        assert_eq!(bs.wire_octet(0), 0b1010_0000);
        assert_eq!(bs.unused_bits(), 3);

        let back = BitString::<1>::from_wire(3, &[0b1010_0000]).unwrap();
        assert_eq!(back, bs);
    }

    #[test]
    fn wire_form_zeroes_padding() {
        let mut bs = BitString::<2>::from_ascii("1111").unwrap();
        bs.set_bits_used(1, 7).unwrap();
        assert_eq!(bs.wire_octet(0), 0x80);

        let wide = BitString::<2>::from_ascii("111111111").unwrap();
        assert_eq!(wide.wire_octet(0), 0xFF);
        assert_eq!(wide.wire_octet(1), 0x80);
    }

    #[test]
    fn wire_validation() {
        assert_eq!(
            BitString::<1>::from_wire(0, &[0, 0]),
            Err(DecodeError::CapacityExceeded)
        );
        assert_eq!(
            BitString::<1>::from_wire(8, &[0]),
            Err(DecodeError::InvalidValue)
        );
        assert_eq!(
            BitString::<1>::from_wire(1, &[]),
            Err(DecodeError::InvalidValue)
        );
        assert_eq!(BitString::<1>::from_wire(0, &[]).unwrap().bits_used(), 0);
    }

    #[test]
    fn ascii_rejects_other_characters() {
        assert_eq!(
            BitString::<1>::from_ascii("10x"),
            Err(DecodeError::InvalidValue)
        );
        assert_eq!(
            BitString::<1>::from_ascii("000000001"),
            Err(DecodeError::CapacityExceeded)
        );
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn to_bools_lists_used_bits() {
        let bs = BitString::<1>::from_ascii("110").unwrap();
        assert_eq!(bs.to_bools(), alloc::vec![true, true, false]);
    }
}
