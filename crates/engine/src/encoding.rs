// crates/engine/src/encoding.rs
use encoding_rs::{Encoding, UTF_8};
use std::env;

/// Probe characters used to classify an encoding as multibyte-capable.
/// They span Latin-1, currency symbols, and 2-, 3- and 4-byte UTF-8
/// sequences.
const PROBE_CHARS: [char; 5] = ['a', '¢', '€', 'あ', '𐍈'];

/// The active text encoding plus its derived multibyte capability.
///
/// Resolved once per invocation and passed into the engine explicitly;
/// nothing below the config layer reads the process locale.
#[derive(Debug, Clone, Copy)]
pub struct EncodingProfile {
    encoding: &'static Encoding,
    multibyte: bool,
}

impl EncodingProfile {
    #[must_use]
    pub fn new(encoding: &'static Encoding) -> Self {
        Self {
            encoding,
            multibyte: is_multibyte(encoding),
        }
    }

    /// Resolve the profile from the process locale, falling back to UTF-8.
    ///
    /// Checks `LC_ALL`, `LC_CTYPE` and `LANG` in that order, taking the
    /// codeset of the first non-empty value.
    #[must_use]
    pub fn from_env() -> Self {
        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .find(|value| !value.is_empty());

        match locale {
            Some(locale) => Self::new(encoding_for_locale(&locale)),
            None => {
                log::debug!("no locale variables set, assuming UTF-8");
                Self::new(UTF_8)
            }
        }
    }

    #[must_use]
    pub const fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Whether the encoding can represent at least one probe character
    /// with more than one output byte.
    #[must_use]
    pub const fn is_multibyte(&self) -> bool {
        self.multibyte
    }
}

impl Default for EncodingProfile {
    fn default() -> Self {
        Self::new(UTF_8)
    }
}

/// Map a locale string such as `en_US.UTF-8@euro` to an encoding.
/// Unknown or absent codesets resolve to UTF-8.
fn encoding_for_locale(locale: &str) -> &'static Encoding {
    let codeset = codeset_of(locale);
    Encoding::for_label(codeset.as_bytes()).unwrap_or_else(|| {
        log::debug!("unknown codeset '{codeset}' in locale '{locale}', assuming UTF-8");
        UTF_8
    })
}

/// Extract the codeset portion of a locale string:
/// `lang_REGION.CODESET@modifier` yields `CODESET`.
fn codeset_of(locale: &str) -> &str {
    let after_dot = locale.split('.').nth(1).unwrap_or(locale);
    after_dot.split('@').next().unwrap_or(after_dot)
}

/// Classify an encoding as multibyte-capable.
///
/// UTF-family encodings qualify immediately. Otherwise each probe
/// character is encoded; one probe producing more than one byte is
/// enough. A probe the encoding cannot represent is skipped, since an
/// unmappable character proves nothing about output width. Only when
/// every probe fails or encodes to exactly one byte is the encoding
/// single-byte.
fn is_multibyte(encoding: &'static Encoding) -> bool {
    if encoding.name().starts_with("UTF-") {
        return true;
    }

    PROBE_CHARS.iter().any(|&ch| {
        let mut buf = [0u8; 4];
        let probe = ch.encode_utf8(&mut buf);
        let (bytes, _, had_errors) = encoding.encode(probe);
        !had_errors && bytes.len() > 1
    })
}
