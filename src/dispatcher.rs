//! URL dispatch: pattern registration and handler invocation.
//!
//! [`UrlDispatcher`] pairs a [`UrlMatcher`] with a handler table. Patterns
//! are validated when they are registered, so a URL that cannot match
//! anything is refused up front instead of sitting dead in the table.
//! Registration order is preserved and doubles as the tie-break order
//! when two patterns are equally specific.

use std::collections::HashMap;

use tracing::debug;

use crate::matcher::{PatternError, UrlMatchResult, UrlMatcher};
use crate::url::UrlConvertible;

/// Handler invoked when a URL is opened against its registered pattern.
///
/// Receives the raw URL text and the match result; returns whether the
/// URL was actually handled.
pub type UrlOpenHandler = Box<dyn Fn(&str, &UrlMatchResult) -> bool + Send + Sync>;

/// Registry mapping URL patterns to open handlers
///
/// # Example
///
/// ```
/// use urlmatcher::UrlDispatcher;
///
/// let mut dispatcher = UrlDispatcher::new();
/// dispatcher
///     .register("myapp://user/<int:id>", |url, result| {
///         println!("opening {url} for user {}", result.values["id"]);
///         true
///     })
///     .unwrap();
///
/// assert!(dispatcher.open("myapp://user/10"));
/// assert!(!dispatcher.open("myapp://post/10"));
/// ```
#[derive(Default)]
pub struct UrlDispatcher {
    matcher: UrlMatcher,
    patterns: Vec<String>,
    handlers: HashMap<String, UrlOpenHandler>,
}

impl UrlDispatcher {
    /// A dispatcher backed by a matcher with the built-in converters
    #[must_use]
    pub fn new() -> Self {
        Self::with_matcher(UrlMatcher::new())
    }

    /// A dispatcher backed by a preconfigured matcher
    #[must_use]
    pub fn with_matcher(matcher: UrlMatcher) -> Self {
        UrlDispatcher {
            matcher,
            patterns: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for `pattern`
    ///
    /// Registering the same pattern again replaces its handler but keeps
    /// the original position in the tie-break order.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] when the pattern fails validation; the
    /// handler table is left untouched.
    pub fn register<F>(&mut self, pattern: impl Into<String>, handler: F) -> Result<(), PatternError>
    where
        F: Fn(&str, &UrlMatchResult) -> bool + Send + Sync + 'static,
    {
        let pattern = pattern.into();
        self.matcher.validate_pattern(&pattern)?;
        if !self.handlers.contains_key(&pattern) {
            self.patterns.push(pattern.clone());
        }
        debug!(pattern = %pattern, "Registered URL handler");
        self.handlers.insert(pattern, Box::new(handler));
        Ok(())
    }

    /// Match a URL against the registered patterns without invoking
    /// anything
    pub fn resolve<U>(&self, url: &U) -> Option<UrlMatchResult>
    where
        U: UrlConvertible + ?Sized,
    {
        self.matcher.match_url(url, &self.patterns)
    }

    /// Match a URL and invoke the winning pattern's handler
    ///
    /// Returns `false` when no pattern matches or when the handler
    /// declines the URL.
    pub fn open<U>(&self, url: &U) -> bool
    where
        U: UrlConvertible + ?Sized,
    {
        let Some(result) = self.resolve(url) else {
            debug!(url = %url.url_str(), "No registered pattern matched");
            return false;
        };
        match self.handlers.get(&result.pattern) {
            Some(handler) => handler(url.url_str(), &result),
            None => false,
        }
    }

    /// The backing matcher
    #[must_use]
    pub fn matcher(&self) -> &UrlMatcher {
        &self.matcher
    }

    /// Mutable access to the backing matcher, e.g. to register value
    /// converters before patterns that use them
    pub fn matcher_mut(&mut self) -> &mut UrlMatcher {
        &mut self.matcher
    }

    /// Registered patterns in registration (and therefore tie-break)
    /// order
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
