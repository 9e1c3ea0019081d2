use core::ops::{BitAnd, BitOr, BitXor, Not, Shl};

/// Unsigned machine word the bit helpers operate on.
pub trait Word:
    Copy
    + PartialEq
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
{
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128, usize);

/// Word with only bit `pos` set. `pos` counts from the least significant bit.
#[inline]
pub fn bit<W: Word>(pos: u32) -> W {
    debug_assert!(pos < W::BITS, "bit position out of range");
    W::ONE << pos
}

#[inline]
pub fn bit_set<W: Word>(word: &mut W, pos: u32) {
    *word = *word | bit::<W>(pos);
}

#[inline]
pub fn bit_clear<W: Word>(word: &mut W, pos: u32) {
    *word = *word & !bit::<W>(pos);
}

#[inline]
pub fn bit_flip<W: Word>(word: &mut W, pos: u32) {
    *word = *word ^ bit::<W>(pos);
}

#[inline]
pub fn bit_check<W: Word>(word: W, pos: u32) -> bool {
    word & bit::<W>(pos) != W::ZERO
}

#[inline]
pub fn bitmask_set<W: Word>(word: &mut W, mask: W) {
    *word = *word | mask;
}

#[inline]
pub fn bitmask_clear<W: Word>(word: &mut W, mask: W) {
    *word = *word & !mask;
}

#[inline]
pub fn bitmask_flip<W: Word>(word: &mut W, mask: W) {
    *word = *word ^ mask;
}

/// True when every bit of `mask` is set in `word`.
#[inline]
pub fn bitmask_check<W: Word>(word: W, mask: W) -> bool {
    word & mask == mask
}

/// Reverses the bit order of a byte: bit 0 becomes bit 7 and so on.
///
/// Bit strings keep bit 0 in the least significant bit in memory but send
/// it in the most significant bit on the wire.
pub const fn byte_reverse_bits(byte: u8) -> u8 {
    byte.reverse_bits()
}
