//! Built-in placeholder converters.
//!
//! A converter receives the full segment list and the placeholder's
//! position rather than a single segment, which is what lets `<path:...>`
//! swallow the remaining tail. Returning `None` vetoes the candidate
//! pattern for this URL.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::value::UrlValue;

/// Converter closure: segment list plus placeholder position in, typed
/// value out. `None` means the segment is not acceptable for this tag.
/// Converters are expected not to panic; the matcher does not catch
/// unwinds from caller-supplied closures.
pub type ValueConverter = Arc<dyn Fn(&[String], usize) -> Option<UrlValue> + Send + Sync>;

/// Tag of the greedy placeholder that consumes the rest of the path.
pub(crate) const PATH_TAG: &str = "path";

/// Canonical hyphenated UUIDs are exactly this long. The length gate
/// keeps the simple, braced, and urn forms that `Uuid::parse_str` would
/// otherwise accept from matching.
const HYPHENATED_UUID_LEN: usize = 36;

/// The converter table every matcher starts from: `string`, `int`,
/// `float`, `uuid`, and `path`.
pub(crate) fn default_converters() -> HashMap<String, ValueConverter> {
    let mut converters: HashMap<String, ValueConverter> = HashMap::with_capacity(5);
    converters.insert(
        "string".to_string(),
        Arc::new(|segments: &[String], index| {
            segments.get(index).map(|s| UrlValue::String(s.clone()))
        }),
    );
    converters.insert(
        "int".to_string(),
        Arc::new(|segments: &[String], index| {
            segments.get(index)?.parse::<i64>().ok().map(UrlValue::Int)
        }),
    );
    converters.insert(
        "float".to_string(),
        Arc::new(|segments: &[String], index| {
            segments.get(index)?.parse::<f64>().ok().map(UrlValue::Float)
        }),
    );
    converters.insert(
        "uuid".to_string(),
        Arc::new(|segments: &[String], index| {
            let segment = segments.get(index)?;
            if segment.len() != HYPHENATED_UUID_LEN {
                return None;
            }
            Uuid::parse_str(segment).ok().map(UrlValue::Uuid)
        }),
    );
    converters.insert(
        PATH_TAG.to_string(),
        Arc::new(|segments: &[String], index| {
            if index < segments.len() {
                Some(UrlValue::String(segments[index..].join("/")))
            } else {
                // A bare tail matches nothing; `myapp://files/<path:p>`
                // must not match `myapp://files`.
                None
            }
        }),
    );
    converters
}
