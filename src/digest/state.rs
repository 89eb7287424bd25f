//! Chaining state and message block types.

/// Size of one MD5 message block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Number of 32-bit words in a block.
pub const BLOCK_WORDS: usize = 16;

/// The initial chaining values (A, B, C, D) from RFC 1321.
pub const INITIAL_STATE: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

/// The four-word MD5 chaining state (A, B, C, D).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigestState {
    words: [u32; 4],
}

impl DigestState {
    /// State before any block has been processed.
    pub const fn initial() -> Self {
        Self {
            words: INITIAL_STATE,
        }
    }

    pub const fn from_words(words: [u32; 4]) -> Self {
        Self { words }
    }

    /// Returns a copy of the four state words.
    pub const fn words(&self) -> [u32; 4] {
        self.words
    }

    /// Serializes the state as the 16 digest bytes, each word little-endian.
    pub fn to_le_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (dst, word) in out.chunks_exact_mut(4).zip(self.words) {
            dst.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}

impl Default for DigestState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Sixteen little-endian words decoded from one 64-byte window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    words: [u32; BLOCK_WORDS],
}

impl Block {
    pub fn from_bytes(bytes: &[u8; BLOCK_LEN]) -> Self {
        Self::from_slice(bytes)
    }

    /// Decodes a block from a slice that must be exactly [`BLOCK_LEN`] bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != BLOCK_LEN`. A short or long block is a
    /// programming error in the caller, not a recoverable condition.
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Self {
        assert_eq!(
            bytes.len(),
            BLOCK_LEN,
            "MD5 blocks are exactly {BLOCK_LEN} bytes"
        );
        let mut words = [0u32; BLOCK_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self { words }
    }

    #[inline(always)]
    pub fn word(&self, index: usize) -> u32 {
        self.words[index]
    }

    pub fn words(&self) -> &[u32; BLOCK_WORDS] {
        &self.words
    }
}
