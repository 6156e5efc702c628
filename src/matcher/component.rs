//! Pattern parsing into path components.

use super::convert::PATH_TAG;
use super::error::PatternError;
use super::normalize::{normalize_url, path_segments};

/// One parsed segment of a URL pattern
///
/// A pattern like `myapp://user/<int:id>/posts` parses into
/// `[Plain("user"), Placeholder { tag: Some("int"), key: "id" }, Plain("posts")]`.
/// The scheme is handled separately and never appears as a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathComponent {
    /// Literal text that must equal the URL segment exactly
    Plain(String),
    /// A `<key>` or `<tag:key>` capture
    Placeholder {
        /// Converter tag, `None` for an untyped `<key>`
        tag: Option<String>,
        /// Name the converted value is bound under
        key: String,
    },
}

impl PathComponent {
    /// Whether this is the greedy `<path:...>` placeholder
    #[must_use]
    pub fn is_path(&self) -> bool {
        matches!(self, PathComponent::Placeholder { tag: Some(tag), .. } if tag == PATH_TAG)
    }

    fn parse(segment: &str, pattern: &str) -> Result<Self, PatternError> {
        let interior = match segment.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
            Some(interior) => interior,
            // Unbalanced brackets are not placeholder syntax; the segment
            // stays a literal.
            None => return Ok(PathComponent::Plain(segment.to_string())),
        };
        if interior.is_empty() {
            return Err(PatternError::EmptyPlaceholder {
                pattern: pattern.to_string(),
            });
        }
        match interior.split_once(':') {
            None => Ok(PathComponent::Placeholder {
                tag: None,
                key: interior.to_string(),
            }),
            Some((tag, key)) => {
                if tag.is_empty() || key.is_empty() || key.contains(':') {
                    return Err(PatternError::MalformedPlaceholder {
                        pattern: pattern.to_string(),
                        segment: segment.to_string(),
                    });
                }
                Ok(PathComponent::Placeholder {
                    tag: Some(tag.to_string()),
                    key: key.to_string(),
                })
            }
        }
    }
}

/// Parse a pattern into its ordered component sequence.
///
/// The pattern goes through the same normalization and tokenization as a
/// URL, so `myapp://user/<id>/` and `myapp://user//<id>` produce the same
/// components. Structural problems are rejected here, before the pattern
/// ever reaches the match loop.
pub(crate) fn parse_pattern(pattern: &str) -> Result<Vec<PathComponent>, PatternError> {
    let normalized = normalize_url(pattern);
    let segments = path_segments(&normalized);

    let mut components = Vec::with_capacity(segments.len());
    let mut path_seen = false;
    for segment in &segments {
        if path_seen {
            return Err(PatternError::ComponentAfterPath {
                pattern: pattern.to_string(),
                segment: segment.to_string(),
            });
        }
        let component = PathComponent::parse(segment, pattern)?;
        path_seen = component.is_path();
        components.push(component);
    }
    Ok(components)
}
