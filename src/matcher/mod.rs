//! URL pattern matching.
//!
//! The matcher takes a URL and a list of candidate patterns and returns
//! the most specific pattern that matches, together with the typed
//! values its placeholders captured. Patterns are plain URLs whose
//! segments may be `<key>` or `<tag:key>` placeholders, for example
//! `myapp://user/<int:id>/posts`.
//!
//! Submodules:
//! - [`normalize`]: canonical URL form and path tokenization
//! - `component`: pattern parsing into plain and placeholder components
//! - `convert`: the built-in converter table
//! - `core`: compilation, caching, and the match loop
//! - `error`: registration-time pattern errors

mod component;
mod convert;
mod core;
mod error;
pub mod normalize;


pub use component::PathComponent;
pub use convert::ValueConverter;
pub use core::{UnknownTagPolicy, UrlMatchResult, UrlMatcher, UrlMatcherBuilder};
pub use error::PatternError;
pub use normalize::{normalize_url, path_segments, SegmentVec, MAX_INLINE_SEGMENTS};
