//! The qualifier codec: canonical key ordering and value escaping.

use std::collections::BTreeMap;

/// Keys rendered first, in this fixed order. Any other key follows them in
/// lexical order.
pub const CANONICAL_ORDER: [&str; 6] = ["origin", "visit", "anchor", "path", "lines", "bytes"];

/// Escape a qualifier value for embedding in an identifier string.
///
/// `%` is escaped before `;` so the `%3B` sequences introduced for
/// semicolons are not themselves re-escaped.
pub fn escape_value(value: &str) -> String {
    value.replace('%', "%25").replace(';', "%3B")
}

/// Percent-decode a qualifier value.
///
/// Any malformed escape (truncated or non-hex) or non-UTF-8 decode result
/// makes the whole value fall back to its raw, un-decoded form. A parsed
/// identifier always carries some value for every `key=value` segment.
pub fn decode_value(value: &str) -> String {
    match try_decode(value) {
        Some(decoded) => decoded,
        None => value.to_string(),
    }
}

fn try_decode(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = hex_digit(*bytes.get(i + 1)?)?;
            let lo = hex_digit(*bytes.get(i + 2)?)?;
            out.push((hi << 4) | lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Render a qualifier map as `key=value;key=value`, canonical keys first.
pub fn format_qualifiers(qualifiers: &BTreeMap<String, String>) -> String {
    let mut parts = Vec::with_capacity(qualifiers.len());
    for key in CANONICAL_ORDER {
        if let Some(value) = qualifiers.get(key) {
            parts.push(format!("{}={}", key, escape_value(value)));
        }
    }
    for (key, value) in qualifiers {
        if !CANONICAL_ORDER.contains(&key.as_str()) {
            parts.push(format!("{}={}", key, escape_value(value)));
        }
    }
    parts.join(";")
}
