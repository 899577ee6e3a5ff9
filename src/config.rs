//! Viewer configuration
//!
//! Every field has a default matching the generated document pages, so a
//! page can pass `{}` (or nothing) and only override what differs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};
use crate::host::Target;
use crate::schemes::{self, SchemeGroup, SchemeRegistry, BASE_SCHEME};

/// Element ids the page scripts look up
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub content: String,
    pub scheme_select: String,
    pub show_all_checkbox: String,
    pub toc: String,
    pub metadata: String,
    pub corrections_container: String,
    pub controls_icon: String,
    pub close_button: String,
    pub show_corrections_link: String,
    pub width_slider: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            content: "content".to_string(),
            scheme_select: "transliteration-scheme".to_string(),
            show_all_checkbox: "show-all-schemes-checkbox".to_string(),
            toc: "toc".to_string(),
            metadata: "metadata".to_string(),
            corrections_container: "corrections-container".to_string(),
            controls_icon: "controls-icon".to_string(),
            close_button: "close-button-container".to_string(),
            show_corrections_link: "show-corrections-link".to_string(),
            width_slider: "width-slider".to_string(),
        }
    }
}

/// Class names toggled or queried by the page scripts
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassNames {
    pub button_container: String,
    pub rich_text_toggle: String,
    pub verse_format_toggle: String,
    pub ante_correction: String,
    pub post_correction: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            button_container: "button-container".to_string(),
            rich_text_toggle: "rich-text-toggle".to_string(),
            verse_format_toggle: "verse-format-toggle".to_string(),
            ante_correction: "ante-correction".to_string(),
            post_correction: "post-correction".to_string(),
        }
    }
}

/// Durable storage keys for the user's transliteration choices
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageKeys {
    pub selected_scheme: String,
    pub show_all: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            selected_scheme: "selectedTransliterationScheme".to_string(),
            show_all: "showAllTransliterationSchemes".to_string(),
        }
    }
}

/// Complete viewer configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    pub elements: ElementIds,
    pub classes: ClassNames,
    pub storage: StorageKeys,

    /// Scheme the documents are written in
    pub base_scheme: String,

    pub schemes: Vec<SchemeGroup>,
    pub default_schemes: Vec<String>,
    pub display_names: BTreeMap<String, String>,

    /// Selector for the verse-formatting checkbox (it carries no id)
    pub verse_format_checkbox: String,

    /// Delay before scrolling the corrections panel, long enough for its expand transition
    pub scroll_delay_ms: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            classes: ClassNames::default(),
            storage: StorageKeys::default(),
            base_scheme: BASE_SCHEME.to_string(),
            schemes: schemes::default_groups(),
            default_schemes: schemes::default_scheme_list(),
            display_names: schemes::default_display_names(),
            verse_format_checkbox: r#"input[onchange="toggleVerseFormatting(this)"]"#.to_string(),
            scroll_delay_ms: 300,
        }
    }
}

impl ViewerConfig {
    /// Parse a JSON configuration, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ViewerError::Config(e.to_string()))
    }

    /// Build the validated scheme registry described by this configuration
    pub fn registry(&self) -> Result<SchemeRegistry> {
        if self.base_scheme.is_empty() {
            return Err(ViewerError::Config("baseScheme must not be empty".to_string()));
        }
        let registry = SchemeRegistry::new(
            self.schemes.clone(),
            self.default_schemes.clone(),
            self.display_names.clone(),
        )?;
        Ok(registry)
    }

    pub fn content(&self) -> Target {
        Target::Id(self.elements.content.clone())
    }

    pub fn scheme_select(&self) -> Target {
        Target::Id(self.elements.scheme_select.clone())
    }

    pub fn show_all_checkbox(&self) -> Target {
        Target::Id(self.elements.show_all_checkbox.clone())
    }
}
