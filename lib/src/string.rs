/// Length of a NUL-terminated byte string held in a slice.
///
/// Scans for the first NUL byte, stopping at the end of the slice or after
/// `limit` bytes, whichever comes first. Bytes past the limit are never
/// inspected, so a bounded `%.Ns` never reads beyond what it prints.
#[inline]
pub fn cstr_len(bytes: &[u8], limit: Option<usize>) -> usize {
    let window = match limit {
        Some(limit) => &bytes[..bytes.len().min(limit)],
        None => bytes,
    };
    window.iter().position(|&b| b == 0).unwrap_or(window.len())
}

/// The prefix of `bytes` before the first NUL (or all of it).
#[inline]
pub fn cstr_bytes(bytes: &[u8]) -> &[u8] {
    &bytes[..cstr_len(bytes, None)]
}

/// Extract a NUL-padded byte array as a `&str`.
///
/// Scans for the first NUL byte (or end of slice) and interprets the
/// prefix as UTF-8. Returns `"<invalid>"` if the bytes are not valid
/// UTF-8, or `""` if the buffer starts with NUL / is empty.
#[inline]
pub fn bytes_as_str(buf: &[u8]) -> &str {
    core::str::from_utf8(cstr_bytes(buf)).unwrap_or("<invalid>")
}
