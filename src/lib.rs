//! # urlmatcher
//!
//! **urlmatcher** is a deterministic URL pattern matcher for deep links:
//! patterns are plain URLs with typed placeholders, and the most specific
//! matching pattern wins.
//!
//! ## Overview
//!
//! Mobile-style deep links (`myapp://user/10/posts`) and universal links
//! (`https://example.com/user/10`) arrive as loosely formatted strings.
//! This crate canonicalizes them, matches them against a candidate list
//! of patterns such as `myapp://user/<int:id>`, and hands back the typed
//! values the placeholders captured. Matching is deterministic: every
//! candidate is evaluated, the pattern with the most literal segments
//! wins, and ties fall back to candidate order.
//!
//! ## Architecture
//!
//! - **[`matcher`]** - URL normalization, pattern compilation and
//!   caching, value converters, and the match loop
//! - **[`dispatcher`]** - a registry pairing patterns with open handlers
//! - **[`url`]** - the [`UrlConvertible`] input seam plus query-string
//!   decoding
//! - **[`value`]** - [`UrlValue`], the typed output of placeholder
//!   conversion
//!
//! ## Quick Start
//!
//! ```
//! use urlmatcher::UrlMatcher;
//!
//! let matcher = UrlMatcher::new();
//! let patterns = [
//!     "myapp://user/<int:id>",
//!     "myapp://files/<path:rest>",
//! ];
//!
//! // Doubled slashes, trailing slash, and the query are all normalized away.
//! let result = matcher.match_url("myapp://user//10/?ref=push", &patterns).unwrap();
//! assert_eq!(result.pattern, "myapp://user/<int:id>");
//! assert_eq!(result.values["id"].as_int(), Some(10));
//!
//! // <path:...> greedily captures the remaining segments.
//! let result = matcher.match_url("myapp://files/docs/a.txt", &patterns).unwrap();
//! assert_eq!(result.values["rest"].as_str(), Some("docs/a.txt"));
//! ```
//!
//! ## Matching model
//!
//! 1. The URL and every pattern are normalized (query/fragment dropped,
//!    slash runs collapsed, trailing slash trimmed) and split into path
//!    segments.
//! 2. A pattern is only considered when its scheme equals the URL's
//!    scheme, after applying the matcher's default scheme to either side
//!    when absent.
//! 3. Segment counts must line up exactly, unless the pattern ends in a
//!    greedy `<path:...>` placeholder, which requires at least one tail
//!    segment.
//! 4. Placeholders convert their segment via the matcher's converter
//!    table; a converter returning `None` vetoes the candidate.
//! 5. Of the surviving candidates, the one with the most plain (literal)
//!    components wins; ties keep the earliest candidate.
//!
//! Converters are instance-scoped: two matchers can hold different
//! converter tables without any global state. Matching never panics and
//! never allocates surprise errors; bad patterns are reported once, at
//! registration time, as [`PatternError`].

pub mod dispatcher;
pub mod matcher;
pub mod url;
pub mod value;

pub use dispatcher::{UrlDispatcher, UrlOpenHandler};
pub use matcher::{
    normalize_url, PathComponent, PatternError, UnknownTagPolicy, UrlMatchResult, UrlMatcher,
    UrlMatcherBuilder, ValueConverter,
};
pub use url::UrlConvertible;
pub use value::UrlValue;
