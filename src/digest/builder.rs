//! Builder for configuring digest sessions.

use super::compress::BlockCompressor;
use super::session::Md5Session;
use super::wrapping::{WordAdder, Wrapping32};

/// A builder for [`Md5Session`], letting you choose the word-addition
/// strategy used by the compressor.
///
/// ```
/// use md5_stream::{Md5Builder, Wrapping32};
///
/// let mut session = Md5Builder::new().adder(Wrapping32).build();
/// session.write(b"abc").unwrap();
/// assert_eq!(
///     session.finalize().unwrap().digest_hex,
///     "900150983cd24fb0d6963f7d28e17f72"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Builder<A = Wrapping32> {
    adder: A,
}

impl Md5Builder<Wrapping32> {
    /// Creates a new builder with standard modulo 2^32 addition.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: WordAdder> Md5Builder<A> {
    /// Sets the adder strategy.
    pub fn adder<B: WordAdder>(self, adder: B) -> Md5Builder<B> {
        Md5Builder { adder }
    }

    /// Builds the compressor on its own, for callers driving blocks directly.
    pub fn compressor(&self) -> BlockCompressor<A> {
        BlockCompressor::with_adder(self.adder)
    }

    /// Builds a fresh open session.
    pub fn build(&self) -> Md5Session<A> {
        Md5Session::with_compressor(self.compressor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    struct OrAdder;

    impl WordAdder for OrAdder {
        fn add(self, lhs: u32, rhs: u32) -> u32 {
            lhs | rhs
        }
    }

    #[test]
    fn test_default_builder_matches_new_session() {
        let mut built = Md5Builder::new().build();
        let mut plain = Md5Session::new();
        built.write(b"message digest").unwrap();
        plain.write(b"message digest").unwrap();
        assert_eq!(built.finalize().unwrap(), plain.finalize().unwrap());
    }

    #[test]
    fn test_custom_adder_reaches_compressor() {
        let builder = Md5Builder::new().adder(OrAdder);
        let mut session = builder.build();
        session.write(b"abc").unwrap();
        assert_ne!(
            session.finalize().unwrap().digest_hex,
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(builder.compressor().adder().add(0b1010, 0b0110), 0b1110);
    }
}
