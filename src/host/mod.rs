//! Host document abstraction
//!
//! The page behaviors never touch the DOM directly. They address elements
//! through [`Target`] and act through [`PageHost`], which is implemented by
//! the browser document (`WebPage`) and by the in-memory `MockPage`.
//!
//! Targets that resolve to nothing are silently ignored by every
//! operation, so a page lacking a panel just loses that panel's behavior.

pub mod mock;
pub mod web;

use serde::{Deserialize, Serialize};

use crate::dropdown::DropdownEntry;

pub use mock::{MockElement, MockPage};
pub use web::{LocalStore, WebPage};

/// Element addressing used by the page behaviors
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// `#id`
    Id(String),
    /// First element matching a CSS selector
    Selector(String),
    /// First `h2` inside `#id` (the clickable panel header)
    Heading(String),
    /// Every element carrying a class
    AllWithClass(String),
    /// Every element carrying `class` inside `#id`
    ClassWithin { id: String, class: String },
    Body,
    /// `document.documentElement`
    Root,
}

impl Target {
    /// CSS selector equivalent, used by the browser host
    pub fn css_selector(&self) -> String {
        match self {
            Target::Id(id) => format!("#{}", id),
            Target::Selector(selector) => selector.clone(),
            Target::Heading(id) => format!("#{} h2", id),
            Target::AllWithClass(class) => format!(".{}", class),
            Target::ClassWithin { id, class } => format!("#{} .{}", id, class),
            Target::Body => "body".to_string(),
            Target::Root => ":root".to_string(),
        }
    }

    /// Whether the target addresses every match instead of the first
    pub fn is_multiple(&self) -> bool {
        matches!(self, Target::AllWithClass(_) | Target::ClassWithin { .. })
    }
}

/// Inline `display` values the behaviors write
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    None,
    Block,
    Inline,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
            Display::Inline => "inline",
        }
    }

    pub fn from_css(value: &str) -> Option<Self> {
        match value.trim() {
            "none" => Some(Display::None),
            "block" => Some(Display::Block),
            "inline" => Some(Display::Inline),
            _ => None,
        }
    }
}

/// Operations the page behaviors perform on the host document
///
/// Writes apply to every element the target resolves to; reads look at the
/// first one and return `None` when nothing matches.
pub trait PageHost {
    fn exists(&self, target: &Target) -> bool;

    /// `classList.toggle(class, force)`
    fn toggle_class(&mut self, target: &Target, class: &str, force: Option<bool>);

    fn has_class(&self, target: &Target, class: &str) -> bool;

    fn set_display(&mut self, target: &Target, display: Display);

    /// Inline `display` of the first match, `None` when unset or unrecognized
    fn display(&self, target: &Target) -> Option<Display>;

    /// Custom property on the root element's inline style
    fn set_css_variable(&mut self, name: &str, value: &str);

    fn inner_html(&self, target: &Target) -> Option<String>;

    fn set_inner_html(&mut self, target: &Target, html: &str);

    /// Replace every option of a select control
    fn replace_options(&mut self, target: &Target, entries: &[DropdownEntry]);

    fn select_value(&self, target: &Target) -> Option<String>;

    fn set_select_value(&mut self, target: &Target, value: &str);

    fn is_checked(&self, target: &Target) -> Option<bool>;

    fn set_checked(&mut self, target: &Target, checked: bool);

    /// Current value of an input control
    fn input_value(&self, target: &Target) -> Option<String>;

    /// Smooth-scroll the target into view after `delay_ms`; fire and forget
    fn schedule_scroll_into_view(&mut self, target: &Target, delay_ms: u32);
}
