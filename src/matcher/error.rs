//! Pattern compilation errors.

use std::fmt;

/// Error raised when a URL pattern cannot be compiled
///
/// Patterns are validated at registration time so that matching itself
/// never has to report structural problems; a bad pattern is refused up
/// front with one of these variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A placeholder with an empty interior, i.e. a literal `<>` segment
    EmptyPlaceholder {
        /// The offending pattern
        pattern: String,
    },
    /// A placeholder whose interior is neither `key` nor `tag:key`
    ///
    /// Covers an empty tag (`<:id>`), an empty key (`<int:>`), and a key
    /// containing a further `:` (`<int:a:b>`).
    MalformedPlaceholder {
        /// The offending pattern
        pattern: String,
        /// The segment that failed to parse
        segment: String,
    },
    /// A component positioned after a greedy `<path:...>` placeholder
    ///
    /// `<path:...>` consumes every remaining segment, so nothing after it
    /// could ever match.
    ComponentAfterPath {
        /// The offending pattern
        pattern: String,
        /// The unreachable segment
        segment: String,
    },
    /// A typed placeholder whose tag has no registered converter
    ///
    /// Raised under [`UnknownTagPolicy::Reject`](crate::matcher::UnknownTagPolicy::Reject),
    /// the default policy.
    UnknownConverter {
        /// The offending pattern
        pattern: String,
        /// The unrecognized converter tag
        tag: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::EmptyPlaceholder { pattern } => {
                write!(f, "empty placeholder '<>' in pattern '{pattern}'")
            }
            PatternError::MalformedPlaceholder { pattern, segment } => {
                write!(
                    f,
                    "malformed placeholder '{segment}' in pattern '{pattern}': \
                     expected '<key>' or '<tag:key>'"
                )
            }
            PatternError::ComponentAfterPath { pattern, segment } => {
                write!(
                    f,
                    "unreachable component '{segment}' after '<path:...>' in pattern '{pattern}'"
                )
            }
            PatternError::UnknownConverter { pattern, tag } => {
                write!(
                    f,
                    "unknown converter tag '{tag}' in pattern '{pattern}': \
                     register the converter first or allow raw fallback"
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}
