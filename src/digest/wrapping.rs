//! 32-bit modular addition used by the compression function.
//!
//! Every addition inside MD5 is taken modulo 2^32. The compressor is generic
//! over a [`WordAdder`] so tests can swap in an instrumented or deliberately
//! different adder at construction time; production code uses [`Wrapping32`],
//! which compiles down to a plain `add` instruction.

use std::fmt;

/// Strategy for adding two 32-bit words.
///
/// Implementations must be cheap to copy; the compressor calls `add` 260 times
/// per block (four per step plus the final four state additions).
pub trait WordAdder: Copy + fmt::Debug + Send + Sync {
    /// Returns `lhs + rhs` under this strategy's overflow rules.
    fn add(self, lhs: u32, rhs: u32) -> u32;
}

/// Unsigned addition truncated modulo 2^32, carry discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Wrapping32;

impl WordAdder for Wrapping32 {
    #[inline(always)]
    fn add(self, lhs: u32, rhs: u32) -> u32 {
        lhs.wrapping_add(rhs)
    }
}
