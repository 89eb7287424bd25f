//! # Streaming MD5 Session
//!
//! [`Md5Session`] is the caller-facing state machine. It starts `Open`,
//! accepts any number of writes, and moves to `Finalized` once the digest
//! has been produced. A finalized session rejects further writes and a
//! second finalize with [`Error::InvalidState`]; [`Md5Session::reset`]
//! returns it to a fresh `Open` session from either state.
//!
//! ## Example
//!
//! ```
//! use md5_stream::Md5Session;
//!
//! let mut session = Md5Session::new();
//! session.write(b"message ").unwrap();
//! session.write(b"digest").unwrap();
//! let output = session.finalize().unwrap();
//! assert_eq!(output.digest_hex, "f96b697d7cb7938d525a2f31aaf161d0");
//! assert_eq!(output.total_bytes, 14);
//! ```

use std::io;

use log::{debug, warn};

use super::assembler::ByteBlockAssembler;
use super::compress::BlockCompressor;
use super::encode::Digest;
use super::finalize::finalize;
use super::state::DigestState;
use super::wrapping::{WordAdder, Wrapping32};
use crate::error::{Error, Operation, Result};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Open,
    Finalized,
}

/// Result of finalizing a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Md5Output {
    pub digest: Digest,
    /// Lowercase hex rendering of `digest`.
    pub digest_hex: String,
    /// Total bytes written before finalization.
    pub total_bytes: u64,
}

/// Snapshot of a session's running state.
///
/// This is a copy; changing it has no effect on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub state_snapshot: [u32; 4],
    pub bytes_processed: u64,
}

/// Incremental MD5 over a message delivered in arbitrary chunks.
#[derive(Debug, Clone)]
pub struct Md5Session<A: WordAdder = Wrapping32> {
    compressor: BlockCompressor<A>,
    state: DigestState,
    assembler: ByteBlockAssembler,
    phase: SessionPhase,
}

impl Md5Session<Wrapping32> {
    pub fn new() -> Self {
        Self::with_compressor(BlockCompressor::new())
    }
}

impl Default for Md5Session<Wrapping32> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: WordAdder> Md5Session<A> {
    /// Creates an open session that compresses blocks with `compressor`.
    pub fn with_compressor(compressor: BlockCompressor<A>) -> Self {
        Self {
            compressor,
            state: DigestState::initial(),
            assembler: ByteBlockAssembler::new(),
            phase: SessionPhase::Open,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_finalized(&self) -> bool {
        self.phase == SessionPhase::Finalized
    }

    /// Appends `bytes` to the message.
    ///
    /// Empty slices are accepted and change nothing.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] if the session has already been finalized.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_open(Operation::Write)?;
        self.absorb(bytes);
        Ok(())
    }

    /// Pads the message, produces the digest and moves to `Finalized`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] if the session has already been finalized.
    pub fn finalize(&mut self) -> Result<Md5Output> {
        self.ensure_open(Operation::Finalize)?;
        Ok(self.seal())
    }

    /// Consuming form of [`finalize`](Self::finalize).
    pub fn finish(mut self) -> Result<Md5Output> {
        self.finalize()
    }

    /// Discards all message state and returns to a fresh `Open` session.
    pub fn reset(&mut self) {
        debug!(
            "md5 session reset from {:?} after {} bytes",
            self.phase,
            self.assembler.counters().total_bytes()
        );
        self.state = DigestState::initial();
        self.assembler.clear();
        self.phase = SessionPhase::Open;
    }

    /// Current chaining words and the number of bytes written so far.
    ///
    /// Bytes still waiting in the partial-block buffer are counted.
    pub fn progress(&self) -> Progress {
        Progress {
            state_snapshot: self.state.words(),
            bytes_processed: self.assembler.counters().total_bytes(),
        }
    }

    pub fn blocks_compressed(&self) -> u64 {
        self.assembler.blocks_compressed()
    }

    pub fn pending_len(&self) -> usize {
        self.assembler.pending_len()
    }

    fn ensure_open(&self, operation: Operation) -> Result<()> {
        match self.phase {
            SessionPhase::Open => Ok(()),
            SessionPhase::Finalized => {
                warn!("md5 session rejected {operation}: session already finalized");
                Err(Error::invalid_state(operation))
            }
        }
    }

    pub(crate) fn absorb(&mut self, bytes: &[u8]) {
        self.assembler.write(bytes, &self.compressor, &mut self.state);
    }

    pub(crate) fn seal(&mut self) -> Md5Output {
        let counters = self.assembler.counters();
        self.state = finalize(
            &self.compressor,
            self.assembler.pending(),
            counters,
            self.state,
        );
        self.phase = SessionPhase::Finalized;

        let digest = Digest::from_state(&self.state);
        let output = Md5Output {
            digest,
            digest_hex: digest.to_hex(),
            total_bytes: counters.total_bytes(),
        };
        debug!(
            "md5 session finalized: {} bytes, {} blocks, digest {}",
            output.total_bytes,
            self.assembler.blocks_compressed(),
            output.digest_hex
        );
        output
    }

    #[cfg(test)]
    pub(crate) fn force_total_bytes(&mut self, total_bytes: u64) {
        self.assembler.force_total_bytes(total_bytes);
    }
}

impl<A: WordAdder> io::Write for Md5Session<A> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Md5Session::write(self, buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Computes the MD5 digest of `data` in a single call.
pub fn md5_digest(data: &[u8]) -> Digest {
    let mut session = Md5Session::new();
    session.absorb(data);
    session.seal().digest
}

/// Computes the MD5 digest of `data` as 32 lowercase hex characters.
pub fn md5_hex(data: &[u8]) -> String {
    md5_digest(data).to_hex()
}
