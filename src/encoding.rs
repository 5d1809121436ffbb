//! Character encoding detection and transcoding.
//!
//! Two inputs need decoding: the season page, whose charset is declared in a
//! meta tag, and the state file, which carries no declaration and may have
//! been written by older tooling in a legacy code page.

use encoding_rs::{Encoding, UTF_8, UTF_8_INIT, WINDOWS_1250_INIT, WINDOWS_1252_INIT};
use regex::Regex;
use std::sync::LazyLock;

use crate::{Error, Result};

/// Encodings tried, in order, when decoding the state file without a byte-order mark.
pub static STATE_ENCODINGS: [&Encoding; 3] = [&UTF_8_INIT, &WINDOWS_1250_INIT, &WINDOWS_1252_INIT];

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/]+)"#).expect("valid regex")
});

/// Detect the character encoding declared by an HTML page.
///
/// Handles both `<meta charset="...">` and the `http-equiv` content-type form,
/// since both end in `charset=...`. Only the first 1024 bytes are examined.
/// Defaults to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    CHARSET_META_RE
        .captures(&head_str)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with � rather than failing; a listing page
/// with a stray byte is still worth scanning.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}

/// Strictly decode state file bytes.
///
/// A byte-order mark selects its encoding outright. Otherwise each entry of
/// [`STATE_ENCODINGS`] is tried in order and the first clean decode wins. A
/// decode is clean when it has no malformed sequences and no control
/// characters besides whitespace.
///
/// # Errors
/// [`Error::StateCorrupt`] if no encoding yields clean text.
pub fn decode_state(bytes: &[u8]) -> Result<String> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_clean(encoding, &bytes[bom_len..]).ok_or_else(|| {
            Error::StateCorrupt(format!("invalid {} after byte-order mark", encoding.name()))
        });
    }

    STATE_ENCODINGS
        .iter()
        .find_map(|&encoding| decode_clean(encoding, bytes))
        .ok_or_else(|| {
            let tried: Vec<&str> = STATE_ENCODINGS.iter().map(|e| e.name()).collect();
            Error::StateCorrupt(format!("no clean decode with {}", tried.join(", ")))
        })
}

fn decode_clean(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    let text = encoding.decode_without_bom_handling_and_without_replacement(bytes)?;
    if text.chars().any(|c| c.is_control() && !c.is_whitespace()) {
        tracing::debug!(encoding = encoding.name(), "rejecting decode with control characters");
        return None;
    }
    Some(text.into_owned())
}
