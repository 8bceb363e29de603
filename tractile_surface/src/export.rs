// Copyright 2025 the Tractile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side contract for an external document exporter.
//!
//! Exporting the surface to a paginated document is the job of an external
//! library; the host only supplies it a handful of hints. [`ExportHints`]
//! carries exactly that contract and nothing else: document metadata, the
//! content width, and the selectors of subtrees the exporter should skip.

use alloc::string::String;
use alloc::vec::Vec;

/// Hints a host passes to its document export library.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportHints {
    /// Document title metadata.
    pub title: Option<String>,
    /// Document subject metadata.
    pub subject: Option<String>,
    /// Width of the exported content, in pixels.
    pub page_width: Option<f64>,
    bypass: Vec<String>,
}

impl ExportHints {
    /// Hints with no metadata, no width, and nothing bypassed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style document title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder-style document subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Builder-style content width, in pixels.
    #[must_use]
    pub fn with_page_width(mut self, width: f64) -> Self {
        self.page_width = Some(width);
        self
    }

    /// Directs the exporter to skip the subtree matching `selector`.
    #[must_use]
    pub fn bypass(mut self, selector: impl Into<String>) -> Self {
        self.bypass.push(selector.into());
        self
    }

    /// The selectors of subtrees the exporter should skip.
    #[must_use]
    pub fn bypass_selectors(&self) -> &[String] {
        &self.bypass
    }

    /// Returns `true` when the exporter should skip `selector`.
    #[must_use]
    pub fn skips(&self, selector: &str) -> bool {
        self.bypass.iter().any(|s| s == selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hints_skip_nothing() {
        let hints = ExportHints::new();
        assert!(hints.bypass_selectors().is_empty());
        assert!(!hints.skips("#bypassme"));
    }

    #[test]
    fn bypassed_selectors_are_skipped() {
        let hints = ExportHints::new()
            .with_title("Result PDF")
            .with_page_width(800.0)
            .bypass("#bypassme");

        assert!(hints.skips("#bypassme"));
        assert!(!hints.skips("#keepme"));
        assert_eq!(hints.title.as_deref(), Some("Result PDF"));
        assert_eq!(hints.page_width, Some(800.0));
    }
}
