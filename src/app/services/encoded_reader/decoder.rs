//! Strict decoding strategies for the configured encoding list

use encoding_rs::{Encoding, EUC_JP, SHIFT_JIS, UTF_8};

/// Resolve a configured encoding name to a concrete encoding.
///
/// The historical configuration names `cp932` and `shift_jis` both map to the
/// Shift-JIS decoder, which accepts the Windows-31J superset; listing both
/// keeps the configured priority order intact. Unrecognized names fall back to
/// WHATWG label lookup.
pub fn resolve_encoding(name: &str) -> Option<&'static Encoding> {
    match name.to_ascii_lowercase().as_str() {
        "cp932" | "ms932" | "windows-31j" | "shift_jis" | "shift-jis" | "sjis" => Some(SHIFT_JIS),
        "utf-8" | "utf8" => Some(UTF_8),
        "euc_jp" | "euc-jp" | "eucjp" => Some(EUC_JP),
        other => Encoding::for_label(other.as_bytes()),
    }
}

/// Decode bytes without replacement: any malformed sequence rejects the
/// candidate encoding and returns `None`.
pub fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|cow| cow.into_owned())
}
