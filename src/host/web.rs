//! Browser implementations of the host document and durable storage

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
    ScrollBehavior, ScrollIntoViewOptions, Storage,
};

use crate::dropdown::{DropdownEntry, SchemeOption};
use crate::error::{Result, ViewerError};
use crate::host::{Display, PageHost, Target};
use crate::preferences::PreferenceStore;

/// [`PageHost`] over the live DOM
#[derive(Clone, Debug)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document, if running in a browser page
    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Elements the target resolves to, in document order
    pub fn elements(&self, target: &Target) -> Vec<Element> {
        match target {
            Target::Body => self.document.body().map(Element::from).into_iter().collect(),
            Target::Root => self.document.document_element().into_iter().collect(),
            Target::Id(id) => self.document.get_element_by_id(id).into_iter().collect(),
            t if t.is_multiple() => {
                let Ok(nodes) = self.document.query_selector_all(&t.css_selector()) else {
                    log::warn!("Invalid selector {}", t.css_selector());
                    return Vec::new();
                };
                (0..nodes.length())
                    .filter_map(|i| nodes.get(i))
                    .filter_map(|node| node.dyn_into::<Element>().ok())
                    .collect()
            }
            t => match self.document.query_selector(&t.css_selector()) {
                Ok(found) => found.into_iter().collect(),
                Err(_) => {
                    log::warn!("Invalid selector {}", t.css_selector());
                    Vec::new()
                }
            },
        }
    }

    fn first(&self, target: &Target) -> Option<Element> {
        self.elements(target).into_iter().next()
    }

    fn html_elements(&self, target: &Target) -> Vec<HtmlElement> {
        self.elements(target)
            .into_iter()
            .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn option_element(&self, option: &SchemeOption) -> Option<HtmlOptionElement> {
        let element = self.document.create_element("option").ok()?;
        let element = element.dyn_into::<HtmlOptionElement>().ok()?;
        element.set_value(&option.value);
        element.set_text(&option.label);
        Some(element)
    }
}

fn log_js_error(context: &str, result: std::result::Result<impl Sized, JsValue>) {
    if let Err(e) = result {
        log::warn!("{} failed: {:?}", context, e);
    }
}

impl PageHost for WebPage {
    fn exists(&self, target: &Target) -> bool {
        self.first(target).is_some()
    }

    fn toggle_class(&mut self, target: &Target, class: &str, force: Option<bool>) {
        for element in self.elements(target) {
            let list = element.class_list();
            let result = match force {
                Some(force) => list.toggle_with_force(class, force),
                None => list.toggle(class),
            };
            log_js_error("classList.toggle", result);
        }
    }

    fn has_class(&self, target: &Target, class: &str) -> bool {
        self.first(target)
            .map(|e| e.class_list().contains(class))
            .unwrap_or(false)
    }

    fn set_display(&mut self, target: &Target, display: Display) {
        for element in self.html_elements(target) {
            log_js_error(
                "style.display",
                element.style().set_property("display", display.as_css()),
            );
        }
    }

    fn display(&self, target: &Target) -> Option<Display> {
        let element = self.first(target)?.dyn_into::<HtmlElement>().ok()?;
        let value = element.style().get_property_value("display").ok()?;
        Display::from_css(&value)
    }

    fn set_css_variable(&mut self, name: &str, value: &str) {
        if let Some(root) = self.html_elements(&Target::Root).into_iter().next() {
            log_js_error("style.setProperty", root.style().set_property(name, value));
        }
    }

    fn inner_html(&self, target: &Target) -> Option<String> {
        self.first(target).map(|e| e.inner_html())
    }

    fn set_inner_html(&mut self, target: &Target, html: &str) {
        for element in self.elements(target) {
            element.set_inner_html(html);
        }
    }

    fn replace_options(&mut self, target: &Target, entries: &[DropdownEntry]) {
        let Some(select) = self.first(target) else {
            return;
        };
        select.set_inner_html("");

        for entry in entries {
            match entry {
                DropdownEntry::Single(option) => {
                    if let Some(option) = self.option_element(option) {
                        log_js_error("appendChild", select.append_child(&option));
                    }
                }
                DropdownEntry::Group(group) => {
                    let Ok(optgroup) = self.document.create_element("optgroup") else {
                        continue;
                    };
                    log_js_error("optgroup.label", optgroup.set_attribute("label", &group.label));
                    for option in &group.options {
                        if let Some(option) = self.option_element(option) {
                            log_js_error("appendChild", optgroup.append_child(&option));
                        }
                    }
                    log_js_error("appendChild", select.append_child(&optgroup));
                }
            }
        }
    }

    fn select_value(&self, target: &Target) -> Option<String> {
        self.first(target)?
            .dyn_ref::<HtmlSelectElement>()
            .map(HtmlSelectElement::value)
    }

    fn set_select_value(&mut self, target: &Target, value: &str) {
        if let Some(select) = self.first(target).and_then(|e| e.dyn_into::<HtmlSelectElement>().ok()) {
            select.set_value(value);
        }
    }

    fn is_checked(&self, target: &Target) -> Option<bool> {
        self.first(target)?
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::checked)
    }

    fn set_checked(&mut self, target: &Target, checked: bool) {
        for element in self.elements(target) {
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                input.set_checked(checked);
            }
        }
    }

    fn input_value(&self, target: &Target) -> Option<String> {
        self.first(target)?
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
    }

    fn schedule_scroll_into_view(&mut self, target: &Target, delay_ms: u32) {
        let (Some(element), Some(window)) = (self.first(target), web_sys::window()) else {
            return;
        };

        let scroll = Closure::once_into_js(move || {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        });

        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        log_js_error(
            "setTimeout",
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                scroll.unchecked_ref(),
                timeout,
            ),
        );
    }
}

/// [`PreferenceStore`] over `window.localStorage`
///
/// When storage is unavailable (disabled, sandboxed frame) reads return
/// nothing and writes are dropped, so the viewer falls back to defaults.
#[derive(Clone, Debug)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn from_window() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match &self.storage {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|e| ViewerError::Storage(format!("{:?}", e))),
            None => Ok(()),
        }
    }
}
