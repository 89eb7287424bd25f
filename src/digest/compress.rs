//! # MD5 Block Compression
//!
//! One application of the MD5 compression function: 64 steps over a single
//! 512-bit block, grouped into four rounds of sixteen. The step schedule
//! (message word index, rotation amount, additive constant) is the fixed
//! table from RFC 1321 section 3.4.
//!
//! The compressor holds no message state. It maps `(state, block)` to a new
//! state and can be shared freely between sessions.

use super::state::{Block, DigestState};
use super::wrapping::{WordAdder, Wrapping32};

/// Additive constants T[i] = floor(2^32 * abs(sin(i + 1))).
const T: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left rotation applied at each step.
const S: [u32; 64] = [
    // Round 1
    7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,
    // Round 2
    5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,
    // Round 3
    4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,
    // Round 4
    6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,
];

/// Message word consumed at each step.
const K: [usize; 64] = [
    // Round 1: k = i
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    // Round 2: k = (5i + 1) mod 16
    1, 6, 11, 0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12,
    // Round 3: k = (3i + 5) mod 16
    5, 8, 11, 14, 1, 4, 7, 10, 13, 0, 3, 6, 9, 12, 15, 2,
    // Round 4: k = 7i mod 16
    0, 7, 14, 5, 12, 3, 10, 1, 8, 15, 6, 13, 4, 11, 2, 9,
];

#[inline(always)]
fn f(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

#[inline(always)]
fn g(b: u32, c: u32, d: u32) -> u32 {
    (b & d) | (c & !d)
}

#[inline(always)]
fn h(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
fn i(b: u32, c: u32, d: u32) -> u32 {
    c ^ (b | !d)
}

/// Applies the MD5 compression function using a fixed word-addition strategy.
///
/// The strategy is chosen when the compressor is built; production code uses
/// [`BlockCompressor::new`], which is [`Wrapping32`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockCompressor<A = Wrapping32> {
    adder: A,
}

impl BlockCompressor<Wrapping32> {
    /// Compressor with standard modulo 2^32 addition.
    pub const fn new() -> Self {
        Self { adder: Wrapping32 }
    }
}

impl<A: WordAdder> BlockCompressor<A> {
    /// Compressor using a caller-supplied adder.
    pub const fn with_adder(adder: A) -> Self {
        Self { adder }
    }

    pub fn adder(&self) -> A {
        self.adder
    }

    /// Runs the 64 steps over `block` and folds the result into `state`.
    pub fn compress(&self, state: DigestState, block: &Block) -> DigestState {
        let add = |x: u32, y: u32| self.adder.add(x, y);
        let [a0, b0, c0, d0] = state.words();
        let (mut a, mut b, mut c, mut d) = (a0, b0, c0, d0);

        for step in 0..64 {
            let mixed = match step / 16 {
                0 => f(b, c, d),
                1 => g(b, c, d),
                2 => h(b, c, d),
                _ => i(b, c, d),
            };
            let tmp = add(add(add(a, mixed), block.word(K[step])), T[step]);
            let rotated = add(b, tmp.rotate_left(S[step]));

            a = d;
            d = c;
            c = b;
            b = rotated;
        }

        DigestState::from_words([add(a0, a), add(b0, b), add(c0, c), add(d0, d)])
    }
}
