//! Parallel hashing of independent inputs.
//!
//! Every input gets its own session, so the rayon workers share nothing.

use rayon::prelude::*;

use crate::digest::{md5_digest, Digest};

/// Hashes each input on the rayon thread pool, preserving input order.
pub fn md5_digest_all<T>(inputs: &[T]) -> Vec<Digest>
where
    T: AsRef<[u8]> + Sync,
{
    inputs
        .par_iter()
        .map(|input| md5_digest(input.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_sequential() {
        let inputs: Vec<Vec<u8>> = (0..64usize).map(|n| vec![n as u8; n * 37]).collect();
        let parallel = md5_digest_all(&inputs);
        let sequential: Vec<Digest> = inputs.iter().map(|input| md5_digest(input)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_known_vectors_in_order() {
        let digests = md5_digest_all(&["", "a", "abc"]);
        let hex: Vec<String> = digests.iter().map(Digest::to_hex).collect();
        assert_eq!(
            hex,
            [
                "d41d8cd98f00b204e9800998ecf8427e",
                "0cc175b9c0f1b6a831c399e269772661",
                "900150983cd24fb0d6963f7d28e17f72",
            ]
        );
    }
}
