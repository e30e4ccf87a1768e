// crates/engine/src/decoder.rs
use encoding_rs::{CoderResult, Decoder, Encoding};

/// Incremental decoder carrying partial multibyte sequences between
/// chunks.
///
/// Malformed sequences are replaced with U+FFFD instead of failing, so a
/// decode error never aborts a count.
pub struct StreamDecoder {
    decoder: Decoder,
    reported: bool,
}

impl StreamDecoder {
    #[must_use]
    pub fn new(encoding: &'static Encoding) -> Self {
        Self {
            // A leading U+FEFF is an ordinary character for counting
            // purposes, not an encoding signature.
            decoder: encoding.new_decoder_without_bom_handling(),
            reported: false,
        }
    }

    /// Decode one chunk. Bytes that end mid-sequence are buffered and
    /// completed by the next `feed`.
    pub fn feed(&mut self, chunk: &[u8]) -> String {
        self.decode(chunk, false)
    }

    /// Signal end of stream, emitting a replacement character for any
    /// still-pending partial sequence. Must be the final call.
    pub fn flush(&mut self) -> String {
        self.decode(&[], true)
    }

    fn decode(&mut self, bytes: &[u8], last: bool) -> String {
        let mut out = String::new();
        let mut consumed = 0;

        loop {
            let pending = &bytes[consumed..];
            let needed = self
                .decoder
                .max_utf8_buffer_length(pending.len())
                .unwrap_or(pending.len() * 3 + 16);
            out.reserve(needed);

            let (result, read, had_errors) = self.decoder.decode_to_string(pending, &mut out, last);
            consumed += read;

            if had_errors && !self.reported {
                self.reported = true;
                log::warn!("malformed byte sequence replaced with U+FFFD");
            }
            if matches!(result, CoderResult::InputEmpty) {
                break;
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{SHIFT_JIS, UTF_8};

    #[test]
    fn sequence_split_across_chunks_decodes_once() {
        // あ is E3 81 82 in UTF-8; split after the first byte.
        let mut decoder = StreamDecoder::new(UTF_8);
        assert_eq!(decoder.feed(&[0xE3]), "");
        assert_eq!(decoder.feed(&[0x81, 0x82]), "あ");
        assert_eq!(decoder.flush(), "");
    }

    #[test]
    fn invalid_byte_is_replaced() {
        let mut decoder = StreamDecoder::new(UTF_8);
        assert_eq!(decoder.feed(&[0xFF]), "\u{FFFD}");
    }

    #[test]
    fn truncated_sequence_at_end_of_stream_is_replaced() {
        let mut decoder = StreamDecoder::new(UTF_8);
        assert_eq!(decoder.feed(&[0xE3, 0x81]), "");
        assert_eq!(decoder.flush(), "\u{FFFD}");
    }

    #[test]
    fn legacy_double_byte_sequences_split_across_chunks() {
        // あ is 82 A0 in Shift_JIS.
        let mut decoder = StreamDecoder::new(SHIFT_JIS);
        assert_eq!(decoder.feed(&[0x82]), "");
        assert_eq!(decoder.feed(&[0xA0]), "あ");
        assert_eq!(decoder.flush(), "");
    }

    #[test]
    fn ascii_passes_through() {
        let mut decoder = StreamDecoder::new(UTF_8);
        assert_eq!(decoder.feed(b"plain text"), "plain text");
        assert_eq!(decoder.flush(), "");
    }
}
