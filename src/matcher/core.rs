//! Matcher core: pattern compilation, candidate evaluation, and
//! specificity-based selection.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use dashmap::DashMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::url::{scheme_of, UrlConvertible};
use crate::value::UrlValue;

use super::component::{parse_pattern, PathComponent};
use super::convert::{default_converters, ValueConverter};
use super::error::PatternError;
use super::normalize::{normalize_url, path_segments};

/// Result of matching a URL against a candidate list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlMatchResult {
    /// The winning pattern, exactly as it appeared in the candidate list
    pub pattern: String,
    /// Values bound by the pattern's placeholders, keyed by name
    pub values: HashMap<String, UrlValue>,
}

impl UrlMatchResult {
    /// Look up a bound value by placeholder key
    #[inline]
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&UrlValue> {
        self.values.get(key)
    }
}

/// Policy for typed placeholders whose tag has no registered converter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownTagPolicy {
    /// Refuse the pattern at compile time (the default)
    #[default]
    Reject,
    /// Treat the placeholder as untyped and bind the raw segment text
    RawString,
}

/// A pattern parsed once and reused across match calls.
#[derive(Debug)]
pub(crate) struct CompiledPattern {
    pub(crate) components: Vec<PathComponent>,
    pub(crate) scheme: Option<String>,
    pub(crate) plain_count: usize,
    pub(crate) path_index: Option<usize>,
}

impl CompiledPattern {
    /// Count gate: exact component count normally, at least one tail
    /// segment when the pattern ends in `<path:...>`.
    fn count_fits(&self, segments: &[String]) -> bool {
        match self.path_index {
            Some(index) => segments.len() > index,
            None => segments.len() == self.components.len(),
        }
    }
}

/// URL pattern matcher with typed placeholder conversion
///
/// A matcher owns its converter table, so two matchers can disagree about
/// what `<ssn:...>` means without interfering. The matcher itself is cheap
/// to share: matching takes `&self` and is safe from any number of
/// threads, while converter registration takes `&mut self` and therefore
/// cannot race an in-flight match.
#[derive(Clone)]
pub struct UrlMatcher {
    converters: HashMap<String, ValueConverter>,
    default_scheme: Option<String>,
    unknown_tags: UnknownTagPolicy,
    compiled: DashMap<String, Arc<CompiledPattern>>,
}

impl UrlMatcher {
    /// A matcher with the built-in converters and default policies
    #[must_use]
    pub fn new() -> Self {
        UrlMatcherBuilder::new().build()
    }

    /// Start configuring a matcher
    #[must_use]
    pub fn builder() -> UrlMatcherBuilder {
        UrlMatcherBuilder::new()
    }

    /// The scheme assumed for URLs and patterns that carry none
    #[must_use]
    pub fn default_scheme(&self) -> Option<&str> {
        self.default_scheme.as_deref()
    }

    /// Register (or replace) a converter under `tag`
    ///
    /// Patterns compiled so far may have been accepted or refused against
    /// the previous converter table, so the compile cache is dropped.
    pub fn register_converter<F>(&mut self, tag: impl Into<String>, converter: F)
    where
        F: Fn(&[String], usize) -> Option<UrlValue> + Send + Sync + 'static,
    {
        let tag = tag.into();
        debug!(tag = %tag, "Registering value converter");
        self.converters.insert(tag, Arc::new(converter));
        self.compiled.clear();
    }

    /// Validate a pattern without matching anything against it
    ///
    /// Intended for registration-time checks, so an unmatchable pattern
    /// is refused when it is added rather than discovered in production.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] describing the first structural problem
    /// found.
    pub fn validate_pattern(&self, pattern: &str) -> Result<(), PatternError> {
        self.compile(pattern).map(|_| ())
    }

    /// Match a URL against candidate patterns, returning the most
    /// specific hit
    ///
    /// Every candidate is evaluated (no first-match short-circuit) and
    /// the survivor with the most plain components wins; ties keep the
    /// earliest candidate. Candidates that fail to compile are skipped
    /// with a warning rather than failing the whole call.
    ///
    /// # Example
    ///
    /// ```
    /// use urlmatcher::UrlMatcher;
    ///
    /// let matcher = UrlMatcher::new();
    /// let patterns = ["myapp://user/<int:id>", "myapp://user/me"];
    ///
    /// let result = matcher.match_url("myapp://user/10", &patterns).unwrap();
    /// assert_eq!(result.pattern, "myapp://user/<int:id>");
    /// assert_eq!(result.values["id"].as_int(), Some(10));
    /// ```
    pub fn match_url<U, I>(&self, url: &U, candidates: I) -> Option<UrlMatchResult>
    where
        U: UrlConvertible + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let start = Instant::now();
        let normalized = normalize_url(url.url_str());
        let url_scheme = url
            .scheme()
            .map(str::to_string)
            .or_else(|| self.default_scheme.clone());
        let segments = path_segments(&normalized);

        let mut best: Option<(usize, UrlMatchResult)> = None;
        for candidate in candidates {
            let pattern = candidate.as_ref();
            let compiled = match self.compile(pattern) {
                Ok(compiled) => compiled,
                Err(err) => {
                    warn!(pattern = %pattern, error = %err, "Skipping uncompilable pattern");
                    continue;
                }
            };
            let pattern_scheme = compiled.scheme.as_deref().or(self.default_scheme.as_deref());
            if pattern_scheme != url_scheme.as_deref() {
                debug!(pattern = %pattern, "Scheme mismatch");
                continue;
            }
            let Some(values) = self.try_match(&compiled, &segments) else {
                continue;
            };
            debug!(
                pattern = %pattern,
                specificity = compiled.plain_count,
                "Candidate matched"
            );
            let more_specific = best
                .as_ref()
                .map_or(true, |(specificity, _)| compiled.plain_count > *specificity);
            if more_specific {
                best = Some((
                    compiled.plain_count,
                    UrlMatchResult {
                        pattern: pattern.to_string(),
                        values,
                    },
                ));
            }
        }

        let duration = start.elapsed();
        match best {
            Some((_, result)) => {
                info!(
                    url = %normalized,
                    pattern = %result.pattern,
                    value_count = result.values.len(),
                    duration_us = duration.as_micros(),
                    "URL matched"
                );
                if duration.as_millis() > 1 {
                    warn!(
                        url = %normalized,
                        duration_us = duration.as_micros(),
                        "Slow URL match"
                    );
                }
                Some(result)
            }
            None => {
                warn!(url = %normalized, duration_us = duration.as_micros(), "No pattern matched");
                None
            }
        }
    }

    /// Run a converter by tag against the segment at `index`
    ///
    /// An untyped placeholder (`tag` of `None`) binds the raw segment
    /// text. An unrecognized tag follows the matcher's
    /// [`UnknownTagPolicy`]; under the default policy compilation has
    /// already refused such patterns, so `None` here only vetoes.
    #[must_use]
    pub fn convert(&self, tag: Option<&str>, segments: &[String], index: usize) -> Option<UrlValue> {
        match tag {
            None => segments.get(index).map(|s| UrlValue::String(s.clone())),
            Some(tag) => match self.converters.get(tag) {
                Some(converter) => converter(segments, index),
                None => match self.unknown_tags {
                    UnknownTagPolicy::Reject => {
                        debug!(tag = %tag, "No converter registered for tag");
                        None
                    }
                    UnknownTagPolicy::RawString => {
                        segments.get(index).map(|s| UrlValue::String(s.clone()))
                    }
                },
            },
        }
    }

    /// Fetch or build the compiled form of `pattern`.
    ///
    /// Successful compilations are cached under the raw pattern text;
    /// failures are cheap to reproduce and are not.
    pub(crate) fn compile(&self, pattern: &str) -> Result<Arc<CompiledPattern>, PatternError> {
        if let Some(compiled) = self.compiled.get(pattern) {
            return Ok(Arc::clone(compiled.value()));
        }

        let components = parse_pattern(pattern)?;
        if self.unknown_tags == UnknownTagPolicy::Reject {
            for component in &components {
                if let PathComponent::Placeholder { tag: Some(tag), .. } = component {
                    if !self.converters.contains_key(tag) {
                        return Err(PatternError::UnknownConverter {
                            pattern: pattern.to_string(),
                            tag: tag.clone(),
                        });
                    }
                }
            }
        }

        let plain_count = components
            .iter()
            .filter(|c| matches!(c, PathComponent::Plain(_)))
            .count();
        let path_index = components.iter().position(PathComponent::is_path);
        let compiled = Arc::new(CompiledPattern {
            scheme: scheme_of(pattern).map(str::to_string),
            components,
            plain_count,
            path_index,
        });
        self.compiled
            .insert(pattern.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }

    /// Walk a compiled pattern against the URL's segments.
    fn try_match(
        &self,
        compiled: &CompiledPattern,
        segments: &[String],
    ) -> Option<HashMap<String, UrlValue>> {
        if !compiled.count_fits(segments) {
            return None;
        }

        let mut values = HashMap::with_capacity(compiled.components.len() - compiled.plain_count);
        for (index, component) in compiled.components.iter().enumerate() {
            match component {
                PathComponent::Plain(text) => {
                    if segments.get(index).map(String::as_str) != Some(text.as_str()) {
                        return None;
                    }
                }
                PathComponent::Placeholder { tag, key } => {
                    let value = self.convert(tag.as_deref(), segments, index)?;
                    values.insert(key.clone(), value);
                    // The path placeholder consumed the tail; parsing
                    // already guarantees nothing follows it.
                    if component.is_path() {
                        break;
                    }
                }
            }
        }
        Some(values)
    }
}

impl Default for UrlMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent configuration for [`UrlMatcher`]
///
/// # Example
///
/// ```
/// use urlmatcher::{UnknownTagPolicy, UrlMatcher, UrlValue};
///
/// let matcher = UrlMatcher::builder()
///     .default_scheme("myapp")
///     .unknown_tags(UnknownTagPolicy::RawString)
///     .converter("even", |segments: &[String], index| {
///         let n: i64 = segments.get(index)?.parse().ok()?;
///         (n % 2 == 0).then(|| UrlValue::Int(n))
///     })
///     .build();
///
/// let result = matcher.match_url("user/10", ["user/<even:id>"]).unwrap();
/// assert_eq!(result.values["id"].as_int(), Some(10));
/// ```
pub struct UrlMatcherBuilder {
    converters: HashMap<String, ValueConverter>,
    default_scheme: Option<String>,
    unknown_tags: UnknownTagPolicy,
}

impl UrlMatcherBuilder {
    /// A builder seeded with the built-in converters
    #[must_use]
    pub fn new() -> Self {
        UrlMatcherBuilder {
            converters: default_converters(),
            default_scheme: None,
            unknown_tags: UnknownTagPolicy::default(),
        }
    }

    /// Scheme assumed for URLs and patterns that carry none
    #[must_use]
    pub fn default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = Some(scheme.into());
        self
    }

    /// Policy for typed placeholders with no registered converter
    #[must_use]
    pub fn unknown_tags(mut self, policy: UnknownTagPolicy) -> Self {
        self.unknown_tags = policy;
        self
    }

    /// Register a converter under `tag`, replacing any builtin of the
    /// same name
    #[must_use]
    pub fn converter<F>(mut self, tag: impl Into<String>, converter: F) -> Self
    where
        F: Fn(&[String], usize) -> Option<UrlValue> + Send + Sync + 'static,
    {
        self.converters.insert(tag.into(), Arc::new(converter));
        self
    }

    /// Finish configuration
    #[must_use]
    pub fn build(self) -> UrlMatcher {
        UrlMatcher {
            converters: self.converters,
            default_scheme: self.default_scheme,
            unknown_tags: self.unknown_tags,
            compiled: DashMap::new(),
        }
    }
}

impl Default for UrlMatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
