//! Signed upload token generation.
//!
//! The object store itself is external; the dispatcher only hands out a
//! storage path and an HMAC token the store can verify. File names are
//! sanitized and paths are time-prefixed so repeated uploads of the
//! same file never collide.

use std::sync::OnceLock;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use regex::Regex;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Maximum length of a sanitized file name.
const MAX_FILE_NAME_LEN: usize = 120;

fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9._-]+").expect("valid regex"))
}

/// Collapse any run of characters outside `[a-zA-Z0-9._-]` into a single
/// `-` and truncate to [`MAX_FILE_NAME_LEN`].
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned = unsafe_chars().replace_all(name, "-");
    cleaned.chars().take(MAX_FILE_NAME_LEN).collect()
}

/// Build the storage path for an upload: optional folder prefix, a
/// millisecond timestamp, and the sanitized file name.
pub fn upload_path(folder: &str, file_name: &str, now_millis: i64) -> String {
    let file = sanitize_file_name(file_name);
    let folder = folder.trim().trim_end_matches('/');
    if folder.is_empty() {
        format!("{now_millis}-{file}")
    } else {
        format!("{folder}/{now_millis}-{file}")
    }
}

/// HMAC-SHA256 token over `bucket/path:content_type`, base64url without
/// padding.
///
/// Deterministic for a given secret and location, so the storage side
/// can recompute and compare.
pub fn sign_upload(secret: &str, bucket: &str, path: &str, content_type: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(bucket.as_bytes());
    mac.update(b"/");
    mac.update(path.as_bytes());
    mac.update(b":");
    mac.update(content_type.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}
