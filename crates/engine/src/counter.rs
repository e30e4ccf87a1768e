// crates/engine/src/counter.rs
use crate::decoder::StreamDecoder;
use crate::encoding::EncodingProfile;
use crate::error::{EngineError, Result};
use crate::options::CountMode;
use crate::source::{ByteStream, Source};
use crate::stats::Counts;
use std::io::{self, Read};

const CHUNK_SIZE: usize = 8192;

/// Count one source under the requested mode.
///
/// Byte-only mode never decodes. Character-only mode over a single-byte
/// encoding degenerates to the byte count. Every other mode runs the full
/// decoding loop; the extra counters it produces are cheap once decoding
/// anyway.
///
/// # Errors
/// Returns `EngineError::Open` when the source cannot be opened and
/// `EngineError::Read` when a read fails mid-stream.
pub fn count_source(
    source: &Source,
    profile: &EncodingProfile,
    mode: CountMode,
) -> Result<Counts> {
    let mut stream = source.open()?;

    let counted = match mode {
        CountMode::Bytes => count_bytes_only(&mut stream),
        CountMode::Chars if !profile.is_multibyte() => count_bytes_only(&mut stream).map(|c| {
            Counts {
                chars: c.bytes,
                ..c
            }
        }),
        _ => count_all(&mut stream, profile),
    };

    counted.map_err(|e| EngineError::Read {
        label: source.label(),
        source: e,
    })
}

/// Consume a stream in fixed-size chunks and compute all four counters.
///
/// Raw chunk lengths accumulate into the byte count independent of
/// decoding. Decoded text is folded into the line and word counters by
/// splitting on `\n`: every complete segment is one line plus its
/// whitespace-delimited words, and the fragment after the last newline is
/// carried to the next chunk, so a word is never split by chunk placement.
/// A non-empty fragment remaining after the decoder flush counts as one
/// final unterminated line.
///
/// # Errors
/// Propagates the underlying `io::Error` of a failed read.
pub fn count_all<R: Read>(reader: &mut R, profile: &EncodingProfile) -> io::Result<Counts> {
    let mut counts = Counts::default();
    let mut decoder = StreamDecoder::new(profile.encoding());
    let mut leftover = String::new();
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        counts.bytes += n as u64;

        let decoded = decoder.feed(&buf[..n]);
        counts.chars += decoded.chars().count() as u64;
        consume_text(&mut counts, &mut leftover, &decoded);
    }

    let tail = decoder.flush();
    counts.chars += tail.chars().count() as u64;
    leftover.push_str(&tail);

    if !leftover.is_empty() {
        counts.lines += 1;
        counts.words += word_count(&leftover);
    }

    Ok(counts)
}

/// Byte count only: the stream length via seek when available, otherwise
/// sequential chunked consumption.
///
/// # Errors
/// Propagates the underlying `io::Error` of a failed read.
pub fn count_bytes_only(stream: &mut ByteStream) -> io::Result<Counts> {
    let mut counts = Counts::default();

    if let Some(len) = stream.seek_len() {
        counts.bytes = len;
        return Ok(counts);
    }

    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = stream.read(&mut buf)?;
        if n == 0 {
            break;
        }
        counts.bytes += n as u64;
    }

    Ok(counts)
}

fn consume_text(counts: &mut Counts, leftover: &mut String, decoded: &str) {
    if decoded.is_empty() {
        return;
    }

    let mut text = std::mem::take(leftover);
    text.push_str(decoded);

    let mut segments = text.split('\n');
    let trailing = segments.next_back().unwrap_or("");
    for segment in segments {
        counts.lines += 1;
        counts.words += word_count(segment);
    }
    leftover.push_str(trailing);
}

fn word_count(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}
