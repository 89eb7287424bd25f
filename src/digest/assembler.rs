//! # Block Assembly
//!
//! Turns writes of arbitrary length into whole 64-byte blocks for the
//! compressor. Bytes that do not yet fill a block wait in a fixed buffer
//! until the next write (or finalization) completes them.
//!
//! Full windows inside a large write are decoded straight out of the
//! caller's slice; only the leading and trailing fragments are copied.

use log::trace;

use super::compress::BlockCompressor;
use super::state::{Block, DigestState, BLOCK_LEN};
use super::wrapping::WordAdder;

/// Running count of message bytes accepted by a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCounters {
    total_bytes: u64,
}

impl SessionCounters {
    pub const fn new() -> Self {
        Self { total_bytes: 0 }
    }

    /// Counters for a message of `total_bytes`, without supplying the bytes.
    pub const fn with_total(total_bytes: u64) -> Self {
        Self { total_bytes }
    }

    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Message length in bits, reduced modulo 2^64 as MD5 defines it.
    pub const fn bit_length(&self) -> u64 {
        self.total_bytes.wrapping_mul(8)
    }

    fn record(&mut self, len: usize) {
        // only the low 64 bits of the bit length ever reach the digest
        self.total_bytes = self.total_bytes.wrapping_add(len as u64);
    }
}

/// Partial-block buffer plus block and byte accounting.
#[derive(Debug, Clone)]
pub struct ByteBlockAssembler {
    buffer: [u8; BLOCK_LEN],
    pending: usize,
    blocks: u64,
    counters: SessionCounters,
}

impl Default for ByteBlockAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteBlockAssembler {
    pub const fn new() -> Self {
        Self {
            buffer: [0u8; BLOCK_LEN],
            pending: 0,
            blocks: 0,
            counters: SessionCounters::new(),
        }
    }

    /// Bytes waiting for the next block, always shorter than [`BLOCK_LEN`].
    pub fn pending(&self) -> &[u8] {
        &self.buffer[..self.pending]
    }

    pub fn pending_len(&self) -> usize {
        self.pending
    }

    pub fn blocks_compressed(&self) -> u64 {
        self.blocks
    }

    pub fn counters(&self) -> SessionCounters {
        self.counters
    }

    /// Absorbs `bytes`, compressing every block they complete into `state`.
    ///
    /// Returns the number of blocks compressed by this call.
    pub fn write<A: WordAdder>(
        &mut self,
        bytes: &[u8],
        compressor: &BlockCompressor<A>,
        state: &mut DigestState,
    ) -> usize {
        if bytes.is_empty() {
            return 0;
        }
        self.counters.record(bytes.len());

        let mut input = bytes;
        let mut compressed = 0usize;

        if self.pending > 0 {
            let take = (BLOCK_LEN - self.pending).min(input.len());
            self.buffer[self.pending..self.pending + take].copy_from_slice(&input[..take]);
            self.pending += take;
            input = &input[take..];

            if self.pending < BLOCK_LEN {
                self.trace_write(bytes.len(), compressed);
                return compressed;
            }
            *state = compressor.compress(*state, &Block::from_bytes(&self.buffer));
            self.pending = 0;
            compressed += 1;
        }

        let mut windows = input.chunks_exact(BLOCK_LEN);
        for window in &mut windows {
            *state = compressor.compress(*state, &Block::from_slice(window));
            compressed += 1;
        }

        let rest = windows.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.pending = rest.len();
        self.blocks += compressed as u64;

        self.trace_write(bytes.len(), compressed);
        compressed
    }

    /// Drops pending bytes and zeroes all counters.
    pub fn clear(&mut self) {
        self.buffer = [0u8; BLOCK_LEN];
        self.pending = 0;
        self.blocks = 0;
        self.counters = SessionCounters::new();
    }

    /// Overrides the byte total so length-field handling can be exercised
    /// without supplying gigabytes of input.
    #[cfg(test)]
    pub(crate) fn force_total_bytes(&mut self, total_bytes: u64) {
        self.counters = SessionCounters::with_total(total_bytes);
    }

    fn trace_write(&self, len: usize, compressed: usize) {
        debug_assert_eq!(
            self.counters.total_bytes(),
            self.blocks
                .wrapping_mul(BLOCK_LEN as u64)
                .wrapping_add(self.pending as u64)
        );
        trace!(
            "md5 write: {} bytes, {} blocks compressed, {} bytes pending, {} total",
            len,
            compressed,
            self.pending,
            self.counters.total_bytes()
        );
    }
}
