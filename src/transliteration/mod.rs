//! Cached transliteration of the document content
//!
//! The content is captured once, when the page becomes ready. Every
//! other rendering is derived from that snapshot and memoized per target
//! scheme, so each scheme costs at most one conversion pass per page view.

pub mod converter;
pub mod text_nodes;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ViewerError};
use crate::schemes::ORIGINAL_SENTINEL;

pub use converter::{ConversionError, SanscriptConverter, SchemeConverter};
pub use text_nodes::{rewrite_text_nodes, text_nodes};

/// Roman transliteration diacritics; text without any of them is never converted
static DIACRITICS: Lazy<Regex> = Lazy::new(|| {
    Regex::new("[āīūṛṝḷḹṃḥñṭḍṇśṣĀĪŪṚṜḶḸṂḤÑṬḌṆŚṢ]").expect("diacritic class is a valid regex")
});

/// Whether a text fragment carries IAST diacritics
pub fn has_diacritics(text: &str) -> bool {
    DIACRITICS.is_match(text)
}

/// Page-lifetime transliteration state: the original snapshot and the per-scheme cache
pub struct Transliterator<C> {
    original: String,
    base_scheme: String,
    cache: HashMap<String, String>,
    converter: C,
}

impl<C: SchemeConverter> Transliterator<C> {
    /// Capture `original` as the content every rendering derives from
    pub fn new(original: impl Into<String>, base_scheme: impl Into<String>, converter: C) -> Self {
        Self {
            original: original.into(),
            base_scheme: base_scheme.into(),
            cache: HashMap::new(),
            converter,
        }
    }

    /// The content as captured at page ready
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn base_scheme(&self) -> &str {
        &self.base_scheme
    }

    /// True for the sentinel and for the scheme the content is written in
    pub fn is_base(&self, scheme: &str) -> bool {
        scheme == ORIGINAL_SENTINEL || scheme == self.base_scheme
    }

    /// Cached rendering for a scheme, if it has been computed
    pub fn cached(&self, scheme: &str) -> Option<&str> {
        self.cache.get(scheme).map(String::as_str)
    }

    pub fn cached_schemes(&self) -> usize {
        self.cache.len()
    }

    /// Content to display for `target`
    ///
    /// The base scheme returns the snapshot verbatim. Any other scheme is
    /// converted once and served from the cache afterwards. A failed
    /// conversion leaves the cache untouched, so the next request retries.
    pub fn render(&mut self, target: &str) -> Result<&str> {
        if self.is_base(target) {
            log::debug!("Restoring original content");
            return Ok(self.original.as_str());
        }

        if self.cache.contains_key(target) {
            log::debug!("Transliteration cache hit: {}", target);
        } else {
            let rendered = self.convert_snapshot(target)?;
            self.cache.insert(target.to_string(), rendered);
        }

        Ok(&self.cache[target])
    }

    fn convert_snapshot(&self, target: &str) -> Result<String> {
        let mut converted_nodes = 0usize;

        let rendered = rewrite_text_nodes(&self.original, |text| {
            if !has_diacritics(text) {
                return Ok(None);
            }
            converted_nodes += 1;
            self.converter
                .convert(text, &self.base_scheme, target)
                .map(Some)
                .map_err(|e| ViewerError::Conversion {
                    scheme: target.to_string(),
                    message: e.to_string(),
                })
        })?;

        log::info!(
            "Transliterated {} text nodes to {}",
            converted_nodes,
            target
        );
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Upper-cases converted text and counts calls
    struct Shouting {
        calls: Cell<usize>,
    }

    impl SchemeConverter for Shouting {
        fn convert(&self, text: &str, _from: &str, to: &str) -> std::result::Result<String, ConversionError> {
            self.calls.set(self.calls.get() + 1);
            Ok(format!("{}:{}", to, text.to_uppercase()))
        }
    }

    struct Refusing;

    impl SchemeConverter for Refusing {
        fn convert(&self, _: &str, _: &str, to: &str) -> std::result::Result<String, ConversionError> {
            Err(ConversionError(format!("unknown scheme {}", to)))
        }
    }

    fn shouting() -> Rc<Shouting> {
        Rc::new(Shouting { calls: Cell::new(0) })
    }

    #[test]
    fn test_has_diacritics() {
        assert!(has_diacritics("rāma"));
        assert!(has_diacritics("ŚIVA"));
        assert!(!has_diacritics("rama"));
        assert!(!has_diacritics("1.2.3"));
    }

    #[test]
    fn test_base_scheme_and_sentinel_restore_original() {
        let mut t = Transliterator::new("<p>rāma</p>", "iast", shouting());
        assert_eq!(t.render("original").unwrap(), "<p>rāma</p>");
        assert_eq!(t.render("iast").unwrap(), "<p>rāma</p>");
        assert_eq!(t.cached_schemes(), 0);
    }

    #[test]
    fn test_only_diacritic_nodes_are_converted() {
        let conv = shouting();
        let mut t = Transliterator::new("<p>rāma</p><p>1.1</p><i>kṛṣṇa</i>", "iast", conv.clone());
        let out = t.render("hk").unwrap().to_string();
        assert_eq!(out, "<p>hk:RĀMA</p><p>1.1</p><i>hk:KṚṢṆA</i>");
        assert_eq!(conv.calls.get(), 2);
    }

    #[test]
    fn test_second_render_uses_cache() {
        let conv = shouting();
        let mut t = Transliterator::new("<p>rāma</p>", "iast", conv.clone());
        let first = t.render("hk").unwrap().to_string();
        let second = t.render("hk").unwrap().to_string();
        assert_eq!(first, second);
        assert_eq!(conv.calls.get(), 1);
        assert_eq!(t.cached("hk"), Some(first.as_str()));
        assert_eq!(t.original(), "<p>rāma</p>");
    }

    #[test]
    fn test_failed_conversion_is_not_cached() {
        let mut t = Transliterator::new("<p>rāma</p>", "iast", Refusing);
        let err = t.render("klingon").unwrap_err();
        assert!(matches!(err, ViewerError::Conversion { ref scheme, .. } if scheme == "klingon"));
        assert!(t.cached("klingon").is_none());
    }
}
