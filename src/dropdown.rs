//! Scheme dropdown population
//!
//! Builds the option list for the transliteration select control, either
//! the short default list or every registry group, and keeps the user's
//! current choice selected when it survives the rebuild.

use serde::{Deserialize, Serialize};

use crate::host::{PageHost, Target};
use crate::schemes::SchemeRegistry;

/// One selectable scheme
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SchemeOption {
    pub value: String,
    pub label: String,
}

/// A labelled `<optgroup>`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<SchemeOption>,
}

/// Top-level child of the select control
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DropdownEntry {
    Single(SchemeOption),
    Group(OptionGroup),
}

impl DropdownEntry {
    /// Option values in display order
    pub fn values(&self) -> Vec<&str> {
        match self {
            DropdownEntry::Single(option) => vec![option.value.as_str()],
            DropdownEntry::Group(group) => group.options.iter().map(|o| o.value.as_str()).collect(),
        }
    }
}

fn scheme_option(registry: &SchemeRegistry, scheme: &str) -> SchemeOption {
    SchemeOption {
        value: scheme.to_string(),
        label: registry.display_name(scheme),
    }
}

/// Entries for the dropdown
///
/// With `show_all` off, one flat option per default scheme in list order.
/// With it on, one group per registry category in registry order.
pub fn build_entries(registry: &SchemeRegistry, show_all: bool) -> Vec<DropdownEntry> {
    if show_all {
        registry
            .groups()
            .iter()
            .map(|group| {
                DropdownEntry::Group(OptionGroup {
                    label: group.label.clone(),
                    options: group
                        .schemes
                        .iter()
                        .map(|s| scheme_option(registry, s))
                        .collect(),
                })
            })
            .collect()
    } else {
        registry
            .defaults()
            .iter()
            .map(|s| DropdownEntry::Single(scheme_option(registry, s)))
            .collect()
    }
}

/// Every option value across `entries`, in display order
pub fn option_values(entries: &[DropdownEntry]) -> Vec<&str> {
    entries.iter().flat_map(DropdownEntry::values).collect()
}

/// Select `value` if offered, otherwise fall back to the first option
///
/// Returns the value left selected, `None` when there are no options.
pub fn select_or_first<H: PageHost>(
    host: &mut H,
    select: &Target,
    entries: &[DropdownEntry],
    value: &str,
) -> Option<String> {
    let values = option_values(entries);
    let chosen = if values.contains(&value) {
        value
    } else {
        log::debug!("Scheme '{}' not offered, selecting first option", value);
        values.first().copied()?
    };
    host.set_select_value(select, chosen);
    Some(chosen.to_string())
}

/// Rebuild the select control's options, preserving the selection when possible
pub fn populate<H: PageHost>(
    host: &mut H,
    select: &Target,
    registry: &SchemeRegistry,
    show_all: bool,
) -> Vec<DropdownEntry> {
    let previous = host.select_value(select);
    let entries = build_entries(registry, show_all);
    host.replace_options(select, &entries);

    if let Some(previous) = previous.filter(|p| !p.is_empty()) {
        select_or_first(host, select, &entries, &previous);
    }

    log::debug!(
        "Populated scheme dropdown ({} options, show_all={})",
        option_values(&entries).len(),
        show_all
    );
    entries
}
