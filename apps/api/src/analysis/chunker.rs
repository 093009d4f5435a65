//! Fixed-size character chunking for prompt submission.
//!
//! The split is deliberately naive: boundaries may fall mid-word or
//! mid-sentence. Each chunk is sent with the full category instruction
//! restated, so every chunk stays independently interpretable to the model.

/// Maximum characters per chunk, matching the generative endpoint's
/// comfortable input size for one restated-instruction prompt.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 1024;

/// Splits `text` into consecutive slices of at most `max_chars` Unicode
/// scalar values, in document order. An empty input yields no chunks.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    assert!(max_chars > 0, "max_chars must be positive");

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chars)
        .map(|slice| slice.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(chunk_text("", DEFAULT_MAX_CHUNK_CHARS).is_empty());
    }

    #[test]
    fn test_short_text_yields_single_chunk() {
        let chunks = chunk_text("Build a 10-page bridge report.", DEFAULT_MAX_CHUNK_CHARS);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], "Build a 10-page bridge report.");
    }

    #[test]
    fn test_chunk_count_is_ceil_of_length_over_max() {
        for len in [1, 1023, 1024, 1025, 2047, 2049, 5000] {
            let text = "a".repeat(len);
            let chunks = chunk_text(&text, DEFAULT_MAX_CHUNK_CHARS);
            let expected = len.div_ceil(DEFAULT_MAX_CHUNK_CHARS);
            assert_eq!(chunks.len(), expected, "wrong chunk count for length {len}");
        }
    }

    #[test]
    fn test_exact_boundary_splits_evenly() {
        let text = "x".repeat(2048);
        let chunks = chunk_text(&text, DEFAULT_MAX_CHUNK_CHARS);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 1024);
        assert_eq!(chunks[1].chars().count(), 1024);
    }

    #[test]
    fn test_chunks_reassemble_in_order() {
        let text: String = (0..3000).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let chunks = chunk_text(&text, DEFAULT_MAX_CHUNK_CHARS);
        assert_eq!(chunks.concat(), text, "concatenated chunks must equal the input");
    }

    #[test]
    fn test_multibyte_characters_count_as_single_units() {
        // 1500 'ñ' chars: 2 chunks by character count, not byte count
        let text = "ñ".repeat(1500);
        let chunks = chunk_text(&text, DEFAULT_MAX_CHUNK_CHARS);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 1024);
        assert_eq!(chunks[1].chars().count(), 476);
    }

    #[test]
    fn test_small_max_chars_preserves_order() {
        let chunks = chunk_text("abcdef", 2);
        assert_eq!(chunks, vec!["ab", "cd", "ef"]);
    }
}
