//! Transliteration scheme registry
//!
//! The registry lists every scheme the dropdown can offer, grouped by
//! script family, plus the short list shown while "show all" is off.
//! Identifiers are the names the external converter understands.

pub mod display;

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

pub use display::{default_display_names, title_case};

/// Scheme every document is authored in
pub const BASE_SCHEME: &str = "iast";

/// Dropdown value that always means "show the untouched document"
pub const ORIGINAL_SENTINEL: &str = "original";

/// A labelled family of schemes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SchemeGroup {
    pub label: String,
    pub schemes: Vec<String>,
}

impl SchemeGroup {
    pub fn new(label: impl Into<String>, schemes: &[&str]) -> Self {
        Self {
            label: label.into(),
            schemes: schemes.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Roman and Brahmic scheme families offered by the viewer
pub fn default_groups() -> Vec<SchemeGroup> {
    vec![
        SchemeGroup::new(
            "Roman Schemes",
            &["hk", "iast", "iso", "itrans", "slp1", "velthuis", "wx"],
        ),
        SchemeGroup::new(
            "Brahmic Schemes",
            &[
                "bengali",
                "devanagari",
                "gujarati",
                "kannada",
                "malayalam",
                "oriya",
                "sinhala",
                "tamil",
            ],
        ),
    ]
}

/// Schemes offered while "show all" is off
pub fn default_scheme_list() -> Vec<String> {
    ["iast", "devanagari", "hk", "itrans"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Validated scheme registry
///
/// Identifiers are unique across all groups and every default entry is a
/// registry member.
#[derive(Clone, Debug)]
pub struct SchemeRegistry {
    groups: Vec<SchemeGroup>,
    defaults: Vec<String>,
    display_names: BTreeMap<String, String>,
}

impl SchemeRegistry {
    /// Build and validate a registry
    pub fn new(
        groups: Vec<SchemeGroup>,
        defaults: Vec<String>,
        display_names: BTreeMap<String, String>,
    ) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for group in &groups {
            if group.schemes.is_empty() {
                return Err(RegistryError::EmptyGroup(group.label.clone()));
            }
            for scheme in &group.schemes {
                if !seen.insert(scheme.as_str()) {
                    return Err(RegistryError::DuplicateScheme {
                        scheme: scheme.clone(),
                        group: group.label.clone(),
                    });
                }
            }
        }

        if let Some(unknown) = defaults.iter().find(|s| !seen.contains(s.as_str())) {
            return Err(RegistryError::UnknownDefault(unknown.clone()));
        }

        Ok(Self {
            groups,
            defaults,
            display_names,
        })
    }

    pub fn groups(&self) -> &[SchemeGroup] {
        &self.groups
    }

    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }

    /// Every scheme in registry order
    pub fn all_schemes(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.schemes.iter().map(String::as_str))
    }

    pub fn contains(&self, scheme: &str) -> bool {
        self.all_schemes().any(|s| s == scheme)
    }

    /// Label shown in the dropdown for a scheme
    pub fn display_name(&self, scheme: &str) -> String {
        self.display_names
            .get(scheme)
            .cloned()
            .unwrap_or_else(|| title_case(scheme))
    }
}

impl Default for SchemeRegistry {
    fn default() -> Self {
        Self {
            groups: default_groups(),
            defaults: default_scheme_list(),
            display_names: default_display_names(),
        }
    }
}
