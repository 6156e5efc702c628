//! URL normalization and path tokenization.
//!
//! Deep-link URLs arrive in messy shapes: doubled slashes, trailing
//! slashes, stray queries and fragments. Matching works on a canonical
//! form so that `myapp://user//10/` and `myapp://user/10?ref=push` hit
//! the same pattern. Normalization is idempotent; re-normalizing an
//! already canonical URL is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

/// Maximum number of path segments stored inline before falling back to
/// heap allocation. Deep-link paths rarely run past a handful of
/// segments, so the common case stays allocation-free.
pub const MAX_INLINE_SEGMENTS: usize = 8;

/// Stack-allocated segment storage used on the match hot path.
pub type SegmentVec = SmallVec<[String; MAX_INLINE_SEGMENTS]>;

static SLASH_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/{2,}").expect("slash run regex should be valid"));

/// Canonicalize a URL for matching.
///
/// Applied rules, in order:
/// 1. Drop everything from the first `?` or `#` onward.
/// 2. Preserve the scheme separator: when the first `:` follows a
///    slash-free prefix, the run of slashes directly after it collapses
///    to at most `//` and is exempt from rule 3.
/// 3. Collapse every other run of repeated slashes to a single `/`.
/// 4. Trim one trailing `/`, unless it is part of the scheme separator
///    (`myapp:/` and `https://` survive unchanged).
///
/// # Example
///
/// ```
/// use urlmatcher::normalize_url;
///
/// assert_eq!(
///     normalize_url("myapp:///////user///10//hello/??/#abc=/def"),
///     "myapp://user/10/hello",
/// );
/// assert_eq!(normalize_url("https://"), "https://");
/// ```
#[must_use]
pub fn normalize_url(raw: &str) -> String {
    let trimmed = match raw.find(['?', '#']) {
        Some(idx) => &raw[..idx],
        None => raw,
    };

    // Split off "scheme:" plus its slash run so the collapse below cannot
    // eat the separator.
    let (head, tail) = match trimmed.find(':') {
        Some(idx) if !trimmed[..idx].contains('/') => {
            let after = &trimmed[idx + 1..];
            let run = after.len() - after.trim_start_matches('/').len();
            let separator = if run >= 2 { "//" } else { &after[..run] };
            (format!("{}:{}", &trimmed[..idx], separator), &after[run..])
        }
        _ => (String::new(), trimmed),
    };

    let tail = SLASH_RUNS.replace_all(tail, "/");
    let mut url = format!("{head}{tail}");
    if url.ends_with('/') && !url.ends_with(":/") && !url.ends_with("://") {
        url.pop();
    }
    url
}

/// Split a normalized URL into its path segments.
///
/// Empty segments are skipped, and a leading `scheme:` token (the text
/// before the separator) is not a path segment. Only the first segment
/// is eligible for the scheme check, so an interior segment that happens
/// to end in `:` is kept.
#[must_use]
pub fn path_segments(url: &str) -> SegmentVec {
    url.split('/')
        .enumerate()
        .filter(|(index, segment)| !segment.is_empty() && !(*index == 0 && segment.ends_with(':')))
        .map(|(_, segment)| segment.to_string())
        .collect()
}
