//! Incremental MD5.
//!
//! Layered leaves first: `wrapping` supplies modular addition, `compress`
//! applies one block, `assembler` turns writes into blocks, `finalize` pads
//! the tail, `encode` renders the result, and `session` ties them into the
//! caller-facing state machine.
//!
//! DISCLAIMER: MD5 is broken for collision resistance. Use it for
//! checksums and legacy interop, never for security decisions.

pub mod assembler;
pub mod builder;
pub mod compress;
pub mod encode;
pub mod finalize;
pub mod session;
pub mod state;
pub mod wrapping;

pub use assembler::{ByteBlockAssembler, SessionCounters};
pub use builder::Md5Builder;
pub use compress::BlockCompressor;
pub use encode::{encode, Digest, DIGEST_LEN};
pub use session::{md5_digest, md5_hex, Md5Output, Md5Session, Progress, SessionPhase};
pub use state::{Block, DigestState, BLOCK_LEN, INITIAL_STATE};
pub use wrapping::{WordAdder, Wrapping32};
