// crates/engine/src/source.rs
use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::PathBuf;

/// Label used for standard input in output rows and error messages.
pub const STDIN_LABEL: &str = "stdin";

/// A resolved input source: a file path as given on the command line, or
/// the process's standard input.
#[derive(Debug, Clone)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// The identifier shown next to this source's counts.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => STDIN_LABEL.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Open the source as a byte stream.
    ///
    /// Both flavors normalize to one stream type here, so the engine never
    /// probes what kind of handle it was given.
    ///
    /// # Errors
    /// Returns `EngineError::Open` when the file cannot be opened.
    pub fn open(&self) -> Result<ByteStream> {
        match self {
            Self::Stdin => Ok(ByteStream {
                inner: Stream::Stdin(io::stdin()),
            }),
            Self::File(path) => {
                let file = File::open(path).map_err(|e| EngineError::Open {
                    path: path.clone(),
                    source: e,
                })?;
                Ok(ByteStream {
                    inner: Stream::File(file),
                })
            }
        }
    }
}

/// Byte-oriented stream over an open source.
///
/// The underlying handle is released on drop, on every exit path.
#[derive(Debug)]
pub struct ByteStream {
    inner: Stream,
}

#[derive(Debug)]
enum Stream {
    Stdin(io::Stdin),
    File(File),
}

impl Read for ByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.inner {
            Stream::Stdin(stdin) => stdin.read(buf),
            Stream::File(file) => file.read(buf),
        }
    }
}

impl ByteStream {
    /// Remaining length in bytes via seek-to-end/seek-back, when the
    /// stream supports seeking. Returns `None` for standard input and for
    /// any seek failure; callers fall back to sequential counting.
    pub fn seek_len(&mut self) -> Option<u64> {
        let Stream::File(file) = &mut self.inner else {
            return None;
        };
        match seek_len_of(file) {
            Ok(len) => Some(len),
            Err(e) => {
                log::debug!("seek failed, falling back to sequential read: {e}");
                None
            }
        }
    }
}

fn seek_len_of(file: &mut File) -> io::Result<u64> {
    let pos = file.stream_position()?;
    let end = file.seek(SeekFrom::End(0))?;
    file.seek(SeekFrom::Start(pos))?;
    Ok(end - pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn label_for_stdin_and_file() {
        assert_eq!(Source::Stdin.label(), "stdin");
        assert_eq!(Source::File(PathBuf::from("a/b.txt")).label(), "a/b.txt");
    }

    #[test]
    fn seek_len_reports_file_size_and_restores_position() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(b"hello world").unwrap();

        let source = Source::File(tmp.path().to_path_buf());
        let mut stream = source.open().unwrap();
        assert_eq!(stream.seek_len(), Some(11));

        // Position must be unchanged: a full read still sees every byte.
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"hello world");
    }

    #[test]
    fn open_missing_file_is_an_open_error() {
        let source = Source::File(PathBuf::from("definitely/not/here.txt"));
        let err = source.open().unwrap_err();
        assert!(matches!(err, EngineError::Open { .. }));
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
