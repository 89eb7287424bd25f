//! # md5-stream
//!
//! An incremental MD5 engine: feed a message in chunks of any size and get
//! the same 128-bit digest as hashing it in one piece.
//!
//! ```
//! use md5_stream::{md5_hex, Md5Session};
//!
//! let mut session = Md5Session::new();
//! for chunk in b"The quick brown fox jumps over the lazy dog".chunks(5) {
//!     session.write(chunk).unwrap();
//! }
//! let output = session.finalize().unwrap();
//! assert_eq!(output.digest_hex, "9e107d9d372bb6826bd81d3542a419d6");
//! assert_eq!(output.digest_hex, md5_hex(b"The quick brown fox jumps over the lazy dog"));
//! ```

pub mod digest;
pub mod error;

#[cfg(feature = "parallel")]
pub mod batch;

pub use digest::{
    encode, md5_digest, md5_hex, BlockCompressor, Digest, DigestState, Md5Builder, Md5Output,
    Md5Session, Progress, SessionPhase, WordAdder, Wrapping32,
};
pub use error::{Error, Operation, Result};

#[cfg(feature = "parallel")]
pub use batch::md5_digest_all;
