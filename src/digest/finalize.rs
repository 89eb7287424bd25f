//! MD5 padding and length encoding.
//!
//! The message is padded with a single `0x80` byte, zeros up to 56 mod 64,
//! and the bit length as a 64-bit little-endian integer. When fewer than
//! nine bytes remain in the last block the padding spills into one extra
//! all-zero block that carries only the length.

use super::assembler::SessionCounters;
use super::compress::BlockCompressor;
use super::state::{Block, DigestState, BLOCK_LEN};
use super::wrapping::WordAdder;

/// Offset of the 64-bit length field within the final block.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Pads `pending` and compresses the final one or two blocks into `state`.
///
/// `pending` must be shorter than a block; `counters` carries the length of
/// the whole message, not just the pending tail.
pub fn finalize<A: WordAdder>(
    compressor: &BlockCompressor<A>,
    pending: &[u8],
    counters: SessionCounters,
    state: DigestState,
) -> DigestState {
    assert!(
        pending.len() < BLOCK_LEN,
        "pending data must be shorter than one block"
    );

    let mut state = state;
    let mut block = [0u8; BLOCK_LEN];
    block[..pending.len()].copy_from_slice(pending);
    block[pending.len()] = 0x80;

    if pending.len() + 1 > LENGTH_OFFSET {
        state = compressor.compress(state, &Block::from_bytes(&block));
        block = [0u8; BLOCK_LEN];
    }

    // low word then high word, each little-endian
    block[LENGTH_OFFSET..].copy_from_slice(&counters.bit_length().to_le_bytes());
    compressor.compress(state, &Block::from_bytes(&block))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finalize_hex(pending: &[u8], total_bytes: u64) -> String {
        let state = finalize(
            &BlockCompressor::new(),
            pending,
            SessionCounters::with_total(total_bytes),
            DigestState::initial(),
        );
        hex::encode(state.to_le_bytes())
    }

    #[test]
    fn test_single_block_padding() {
        assert_eq!(finalize_hex(b"", 0), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(finalize_hex(b"abc", 3), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_padding_boundaries() {
        // 55 bytes is the longest tail that still fits 0x80 and the length
        assert_eq!(
            finalize_hex(&[b'x'; 55], 55),
            "04364420e25c512fd958a70738aa8f72"
        );
        // 56 and 63 byte tails need a second block
        assert_eq!(
            finalize_hex(&[b'y'; 56], 56),
            "6c830a5d23df58dbe0171eb5639bf3e4"
        );
        assert_eq!(
            finalize_hex(&[b'z'; 63], 63),
            "cac9376765157678c96c250aee8ffb87"
        );
    }

    #[test]
    fn test_spill_block_layout() {
        let compressor = BlockCompressor::new();
        let tail = [0x11u8; 60];

        let mut first = [0u8; BLOCK_LEN];
        first[..60].copy_from_slice(&tail);
        first[60] = 0x80;
        let mut second = [0u8; BLOCK_LEN];
        second[LENGTH_OFFSET..].copy_from_slice(&(60u64 * 8).to_le_bytes());

        let mut expected = compressor.compress(DigestState::initial(), &Block::from_bytes(&first));
        expected = compressor.compress(expected, &Block::from_bytes(&second));

        let actual = finalize(
            &compressor,
            &tail,
            SessionCounters::with_total(60),
            DigestState::initial(),
        );
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_length_field_beyond_32_bits() {
        // 2^30 bytes is 2^33 bits: the low 32 bits of the length are all zero,
        // so a truncated length field would reproduce the empty-message digest.
        let digest = finalize_hex(b"", 1 << 30);
        assert_eq!(digest, "24d97d3a87749c0eae4f278c4c3e571b");
        assert_ne!(digest, finalize_hex(b"", 0));

        assert_eq!(
            finalize_hex(b"abc", (1 << 32) + 3),
            "daa1a373afb44d2540d6452013c23c82"
        );
    }

    #[test]
    fn test_high_length_word_lands_in_word_15() {
        let compressor = BlockCompressor::new();
        let total = (1u64 << 30) + 5;
        let mut block = [0u8; BLOCK_LEN];
        block[..5].copy_from_slice(b"hello");
        block[5] = 0x80;
        let bits = total * 8;
        block[56..60].copy_from_slice(&(bits as u32).to_le_bytes());
        block[60..64].copy_from_slice(&((bits >> 32) as u32).to_le_bytes());
        let decoded = Block::from_bytes(&block);
        assert_eq!(decoded.word(14), 0x28);
        assert_eq!(decoded.word(15), 2);

        let expected = compressor.compress(DigestState::initial(), &decoded);
        let actual = finalize(
            &compressor,
            b"hello",
            SessionCounters::with_total(total),
            DigestState::initial(),
        );
        assert_eq!(actual, expected);
    }

    #[test]
    #[should_panic(expected = "shorter than one block")]
    fn test_full_block_pending_is_rejected() {
        finalize_hex(&[0u8; BLOCK_LEN], 64);
    }
}
