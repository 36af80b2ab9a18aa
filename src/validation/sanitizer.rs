// ABOUTME: Free-text sanitization for user-entered content before persistence
// ABOUTME: Regex denylist that strips script-like blocks, javascript: schemes, and inline handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Text Sanitization
//!
//! [`DenylistSanitizer`] is a best-effort filter, not an HTML parser. It
//! removes, in order:
//!
//! 1. complete `script`, `iframe`, `object`, `embed`, `link` and `meta`
//!    blocks (opening tag through the first matching closing tag, across
//!    newlines, any case),
//! 2. every `javascript:` scheme prefix,
//! 3. inline event-handler attributes written as `on<word>="..."` or
//!    `on<word>='...'`,
//!
//! then trims surrounding whitespace. Tag names, handler names and case
//! folding are ASCII-only, so `<scriptй>` still opens a script block while
//! `oné="..."` is not a handler. Markup outside the denylist is kept
//! as-is, and vectors the patterns do not describe (unquoted handlers,
//! entity-encoded schemes, void `<link>` tags without a closing tag) pass
//! through. Callers that need stronger guarantees substitute another
//! [`TextSanitizer`] rather than changing this one.

use regex::Regex;
use std::sync::LazyLock;

/// Strategy for cleaning free text before it is stored
pub trait TextSanitizer: Send + Sync {
    /// Return the cleaned form of `input`
    fn sanitize(&self, input: &str) -> String;

    /// Clean a value that may be absent; absent input yields an empty string
    fn sanitize_optional(&self, input: Option<&str>) -> String {
        input.map_or_else(String::new, |text| self.sanitize(text))
    }
}

/// Tags removed together with everything up to their closing tag
pub const BLOCKED_TAGS: &[&str] = &["script", "iframe", "object", "embed", "link", "meta"];

static BLOCKED_TAG_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    BLOCKED_TAGS
        .iter()
        .filter_map(|tag| Regex::new(&format!(r"(?i-u:<{tag}\b)(?s:.*?)(?i-u:</{tag}>)")).ok())
        .collect()
});

static JAVASCRIPT_SCHEME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i-u:javascript:)").ok());

static DOUBLE_QUOTED_HANDLER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"(?i-u:on\w+=)"[^"]*""#).ok());

static SINGLE_QUOTED_HANDLER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i-u:on\w+=)'[^']*'").ok());

/// Regex denylist sanitizer used by every free-text validator
#[derive(Debug, Clone, Copy, Default)]
pub struct DenylistSanitizer;

impl DenylistSanitizer {
    /// Create the sanitizer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn strip(pattern: Option<&Regex>, text: String) -> String {
    match pattern {
        Some(regex) => regex.replace_all(&text, "").into_owned(),
        None => text,
    }
}

impl TextSanitizer for DenylistSanitizer {
    fn sanitize(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        let mut text = input.to_owned();
        for pattern in BLOCKED_TAG_PATTERNS.iter() {
            text = strip(Some(pattern), text);
        }
        text = strip(JAVASCRIPT_SCHEME.as_ref(), text);
        text = strip(DOUBLE_QUOTED_HANDLER.as_ref(), text);
        text = strip(SINGLE_QUOTED_HANDLER.as_ref(), text);

        text.trim().to_owned()
    }
}

static DEFAULT_SANITIZER: DenylistSanitizer = DenylistSanitizer::new();

/// The sanitizer the field validators use
#[must_use]
pub fn default_sanitizer() -> &'static dyn TextSanitizer {
    &DEFAULT_SANITIZER
}

/// Sanitize free text with the default denylist.
///
/// # Examples
/// ```
/// # use tiizi_validation::validation::sanitize_text;
/// assert_eq!(sanitize_text("hello<script>alert(1)</script>world"), "helloworld");
/// assert_eq!(sanitize_text("  plain  "), "plain");
/// ```
#[must_use]
pub fn sanitize_text(input: &str) -> String {
    DEFAULT_SANITIZER.sanitize(input)
}

/// Sanitize a value that may be absent (`null`/`undefined` from a form)
#[must_use]
pub fn sanitize_optional(input: Option<&str>) -> String {
    DEFAULT_SANITIZER.sanitize_optional(input)
}
