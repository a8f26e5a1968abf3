//! MIME type detection for upload parts.
//!
//! Magic-number detection (via `infer`) wins over the file extension
//! (via `mime_guess`), which wins over `application/octet-stream`.

/// Guess MIME by inspecting bytes (magic numbers)
pub fn guess_mime_from_bytes(bytes: &[u8]) -> Option<String> {
    infer::get(bytes).map(|k| k.mime_type().to_string())
}

/// Guess MIME by file name or URL path. Query strings and fragments are ignored.
pub fn guess_mime_from_name(name: &str) -> Option<String> {
    let trimmed = name.split(['?', '#']).next().unwrap_or(name);
    mime_guess::from_path(trimmed)
        .first()
        .map(|m| m.essence_str().to_string())
}

/// Combined guess: prefer bytes, fall back to the name, otherwise octet-stream
pub fn guess_mime(bytes: Option<&[u8]>, name: Option<&str>) -> String {
    if let Some(b) = bytes
        && let Some(m) = guess_mime_from_bytes(b)
    {
        return m;
    }
    if let Some(n) = name
        && let Some(m) = guess_mime_from_name(n)
    {
        return m;
    }
    "application/octet-stream".to_string()
}
