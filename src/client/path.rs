//! URL path handling for the versioned UUID endpoints.
//!
//! All endpoints live under a fixed root (`/api/uuid`). The base URL is
//! normalized once when the client is built; every call then derives its own
//! URL by appending version segments to a copy of that base.

use super::ClientError;
use reqwest::Url;

/// Root path under which every versioned endpoint is nested.
pub const API_ROOT: &str = "/api/uuid";

/// Join path pieces with single slashes.
///
/// Each piece may itself contain slashes. Empty segments and `.` are dropped
/// and `..` removes the previous segment, so the result never contains `//`
/// and always starts with `/`.
pub fn join_path(base: &str, segments: &[&str]) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for piece in std::iter::once(base).chain(segments.iter().copied()) {
        for part in piece.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                other => parts.push(other),
            }
        }
    }

    format!("/{}", parts.join("/"))
}

/// Normalize a base URL so that its path ends in [`API_ROOT`].
///
/// A path that already ends in the root is kept (cleaned of trailing or
/// duplicate slashes); anything else gets the root joined onto it, which
/// keeps mount prefixes such as `/gateway` intact.
pub fn normalize_base_url(mut url: Url) -> Result<Url, ClientError> {
    if url.cannot_be_a_base() {
        return Err(ClientError::Configuration(format!(
            "base URL '{}' cannot carry a path",
            url
        )));
    }

    let cleaned = join_path(url.path(), &[]);
    let root = if cleaned.ends_with(API_ROOT) {
        cleaned
    } else {
        join_path(&cleaned, &[API_ROOT])
    };
    url.set_path(&root);

    Ok(url)
}

/// Derive a request URL from the normalized base without touching it.
pub fn derive_url(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    url.set_path(&join_path(base.path(), segments));
    url
}
