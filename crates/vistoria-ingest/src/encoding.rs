//! Text decoding with legacy-encoding recovery.
//!
//! Spreadsheet exports arrive as UTF-8 or as Windows-1252/Latin-1 depending
//! on the tool and locale that produced them. Without a hint, bytes are
//! decoded as UTF-8 first; if that produces any U+FFFD replacement
//! character the same bytes are decoded again as Windows-1252.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Maximum file size accepted by [`load_file`] (64 MB).
pub const MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

const REPLACEMENT_CHARACTER: char = '\u{FFFD}';
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Declared encoding of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EncodingHint {
    /// UTF-8 with Windows-1252 fallback.
    #[default]
    Auto,
    /// Decode with exactly this encoding.
    Explicit(&'static Encoding),
}

impl EncodingHint {
    /// Resolves a WHATWG encoding label (`utf-8`, `latin1`, `windows-1252`, ...).
    ///
    /// An empty label or `auto` selects [`EncodingHint::Auto`].
    pub fn from_label(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        Encoding::for_label(trimmed.as_bytes())
            .map(Self::Explicit)
            .ok_or_else(|| IngestError::UnknownEncoding {
                label: label.to_string(),
            })
    }
}

impl FromStr for EncodingHint {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

impl fmt::Display for EncodingHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingHint::Auto => f.write_str("auto"),
            EncodingHint::Explicit(encoding) => f.write_str(encoding.name()),
        }
    }
}

/// Decoded export text and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static Encoding,
    /// True when UTF-8 decoding failed and Windows-1252 was used instead.
    pub fell_back: bool,
}

impl DecodedText {
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }
}

/// Decodes raw export bytes according to `hint`.
///
/// Never fails: undecodable sequences become replacement characters in the
/// explicit case and trigger the Windows-1252 retry in the automatic case.
pub fn decode(bytes: &[u8], hint: EncodingHint) -> DecodedText {
    match hint {
        EncodingHint::Explicit(encoding) => {
            let (text, used, had_errors) = encoding.decode(bytes);
            if had_errors {
                warn!(
                    encoding = used.name(),
                    "input contains sequences invalid for the declared encoding"
                );
            }
            DecodedText {
                text: text.into_owned(),
                encoding: used,
                fell_back: false,
            }
        }
        EncodingHint::Auto => {
            let (text, used, _) = UTF_8.decode(bytes);
            if !text.contains(REPLACEMENT_CHARACTER) {
                debug!(encoding = used.name(), bytes = bytes.len(), "decoded input");
                return DecodedText {
                    text: text.into_owned(),
                    encoding: used,
                    fell_back: false,
                };
            }
            warn!("input is not valid UTF-8, retrying as windows-1252");
            let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            DecodedText {
                text: text.into_owned(),
                encoding: WINDOWS_1252,
                fell_back: true,
            }
        }
    }
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reads and decodes an export file.
pub fn load_file(path: &Path, hint: EncodingHint) -> Result<DecodedText> {
    check_file_size_with_limit(path, MAX_FILE_SIZE)?;
    let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read export file");
    Ok(decode(&bytes, hint))
}
