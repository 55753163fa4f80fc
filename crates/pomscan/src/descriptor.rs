//! POM descriptor parsing
//!
//! A descriptor is decoded strictly as UTF-8 first. When that fails, the
//! charset announced by a byte-order mark or by the XML declaration is used
//! to transcode the document before a second attempt. Only the coordinate
//! elements and the `<parent>` block are read; everything else is ignored.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use quick_xml::de::from_str;
use regex::bytes::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::error::{Error, Result};

/// `encoding="..."` inside an XML declaration
static ENCODING_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"encoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#)
        .expect("constant regex pattern is valid")
});

/// One parsed POM descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    /// Location of the descriptor file, set after parsing
    #[serde(skip)]
    pub path: PathBuf,
    #[serde(default)]
    pub parent: ParentCoordinates,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub artifact_id: String,
    #[serde(default)]
    pub version: String,
    /// Declared packaging; empty means `jar`
    #[serde(default)]
    pub packaging: String,
}

/// The `<parent>` block that supplies fallback coordinates
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentCoordinates {
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub artifact_id: String,
    #[serde(default)]
    pub version: String,
}

/// A descriptor that could not be decoded with either strategy
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("{0}")]
    Xml(#[from] quick_xml::DeError),

    /// Bytes that are not valid in the charset the document declares
    #[error("malformed {encoding} sequence")]
    Malformed { encoding: &'static str },
}

/// Read a descriptor from disk and decode it
///
/// The outer `Result` carries fatal IO failures. The inner one reports a
/// document that could not be decoded, which callers record and skip.
pub fn load(path: &Path) -> Result<std::result::Result<Descriptor, DecodeError>> {
    let bytes = std::fs::read(path).map_err(|source| Error::DescriptorRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse(&bytes).map(|mut descriptor| {
        descriptor.path = path.to_path_buf();
        descriptor
    }))
}

/// Decode descriptor bytes, falling back to the declared charset
pub fn parse(bytes: &[u8]) -> std::result::Result<Descriptor, DecodeError> {
    let strict = std::str::from_utf8(bytes)
        .map_err(DecodeError::from)
        .and_then(|text| from_str::<Descriptor>(text).map_err(DecodeError::from));

    let first_error = match strict {
        Ok(descriptor) => return Ok(descriptor),
        Err(err) => err,
    };

    let Some(encoding) = declared_encoding(bytes) else {
        return Err(first_error);
    };

    log::debug!(
        "strict decode failed ({first_error}), retrying as {}",
        encoding.name()
    );

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::Malformed {
            encoding: encoding.name(),
        });
    }

    Ok(from_str::<Descriptor>(strip_declaration(&text))?)
}

/// Detect the charset a document announces for itself
fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return Some(encoding);
    }

    // UTF-16 without a BOM still starts with "<?"
    if bytes.starts_with(&[b'<', 0, b'?', 0]) {
        return Some(UTF_16LE);
    }
    if bytes.starts_with(&[0, b'<', 0, b'?']) {
        return Some(UTF_16BE);
    }

    if !bytes.starts_with(b"<?xml") {
        return None;
    }
    let end = bytes.windows(2).position(|w| w == b"?>")?;
    let label = ENCODING_ATTR.captures(&bytes[..end])?.get(1)?;

    Encoding::for_label(label.as_bytes())
}

/// Drop the XML declaration, which still names the original charset
fn strip_declaration(text: &str) -> &str {
    let text = text.trim_start_matches('\u{feff}');
    if text.starts_with("<?xml") {
        if let Some(end) = text.find("?>") {
            return &text[end + 2..];
        }
    }
    text
}
