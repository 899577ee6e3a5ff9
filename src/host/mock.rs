//! In-memory document for exercising page behaviors without a browser
//!
//! Elements form a flat arena with parent links; element 0 is the root
//! (`<html>`) and element 1 is `<body>`. Selectors are matched by `#id`,
//! `.class`, or an explicit alias registered with [`MockElement::matching`].

use std::collections::BTreeMap;

use crate::dropdown::{option_values, DropdownEntry};
use crate::host::{Display, PageHost, Target};

const ROOT: usize = 0;
const BODY: usize = 1;

/// One element of the mock document
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MockElement {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub display: Option<Display>,
    pub inner_html: String,
    pub value: String,
    pub checked: bool,
    pub options: Vec<DropdownEntry>,
    pub aliases: Vec<String>,
    parent: Option<usize>,
}

impl MockElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn html(mut self, html: &str) -> Self {
        self.inner_html = html.to_string();
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    /// Answer to an arbitrary selector (e.g. an attribute selector)
    pub fn matching(mut self, selector: &str) -> Self {
        self.aliases.push(selector.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn matches_selector(&self, selector: &str) -> bool {
        if self.aliases.iter().any(|a| a == selector) {
            return true;
        }
        if let Some(id) = selector.strip_prefix('#') {
            return self.id.as_deref() == Some(id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return self.has_class(class);
        }
        self.tag == selector
    }
}

/// In-memory [`PageHost`]
#[derive(Clone, Debug)]
pub struct MockPage {
    elements: Vec<MockElement>,
    pub css_variables: BTreeMap<String, String>,
    pub scheduled_scrolls: Vec<(Target, u32)>,
    pub inner_html_writes: usize,
}

impl Default for MockPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPage {
    /// Document with only `<html>` and `<body>`
    pub fn new() -> Self {
        let mut body = MockElement::new("body");
        body.parent = Some(ROOT);
        Self {
            elements: vec![MockElement::new("html"), body],
            css_variables: BTreeMap::new(),
            scheduled_scrolls: Vec::new(),
            inner_html_writes: 0,
        }
    }

    /// Append an element to `<body>`, returning its handle
    pub fn add(&mut self, element: MockElement) -> usize {
        self.add_child(BODY, element)
    }

    /// Append an element under `parent`, returning its handle
    pub fn add_child(&mut self, parent: usize, mut element: MockElement) -> usize {
        element.parent = Some(parent);
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Builder form of [`MockPage::add`]
    pub fn with(mut self, element: MockElement) -> Self {
        self.add(element);
        self
    }

    pub fn get(&self, handle: usize) -> Option<&MockElement> {
        self.elements.get(handle)
    }

    pub fn body(&self) -> &MockElement {
        &self.elements[BODY]
    }

    pub fn by_id(&self, id: &str) -> Option<&MockElement> {
        self.elements.iter().find(|e| e.id.as_deref() == Some(id))
    }

    pub fn by_id_mut(&mut self, id: &str) -> Option<&mut MockElement> {
        self.elements.iter_mut().find(|e| e.id.as_deref() == Some(id))
    }

    /// First element the target resolves to
    pub fn element(&self, target: &Target) -> Option<&MockElement> {
        self.resolve(target).first().map(|&i| &self.elements[i])
    }

    /// Every element the target resolves to
    pub fn elements(&self, target: &Target) -> Vec<&MockElement> {
        self.resolve(target).into_iter().map(|i| &self.elements[i]).collect()
    }

    fn index_of_id(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id.as_deref() == Some(id))
    }

    fn is_descendant(&self, mut index: usize, ancestor: usize) -> bool {
        while let Some(parent) = self.elements[index].parent {
            if parent == ancestor {
                return true;
            }
            index = parent;
        }
        false
    }

    fn resolve(&self, target: &Target) -> Vec<usize> {
        let first = |pred: &dyn Fn(usize, &MockElement) -> bool| {
            self.elements
                .iter()
                .enumerate()
                .find(|(i, e)| pred(*i, *e))
                .map(|(i, _)| i)
                .into_iter()
                .collect::<Vec<_>>()
        };

        match target {
            Target::Body => vec![BODY],
            Target::Root => vec![ROOT],
            Target::Id(id) => self.index_of_id(id).into_iter().collect(),
            Target::Selector(selector) => first(&|_, e| e.matches_selector(selector)),
            Target::Heading(id) => match self.index_of_id(id) {
                Some(container) => first(&|i, e| e.tag == "h2" && self.is_descendant(i, container)),
                None => Vec::new(),
            },
            Target::AllWithClass(class) => self
                .elements
                .iter()
                .enumerate()
                .filter(|(_, e)| e.has_class(class))
                .map(|(i, _)| i)
                .collect(),
            Target::ClassWithin { id, class } => match self.index_of_id(id) {
                Some(container) => self
                    .elements
                    .iter()
                    .enumerate()
                    .filter(|(i, e)| e.has_class(class) && self.is_descendant(*i, container))
                    .map(|(i, _)| i)
                    .collect(),
                None => Vec::new(),
            },
        }
    }

    fn for_each(&mut self, target: &Target, mut f: impl FnMut(&mut MockElement)) {
        for index in self.resolve(target) {
            f(&mut self.elements[index]);
        }
    }
}

impl PageHost for MockPage {
    fn exists(&self, target: &Target) -> bool {
        !self.resolve(target).is_empty()
    }

    fn toggle_class(&mut self, target: &Target, class: &str, force: Option<bool>) {
        self.for_each(target, |e| {
            let present = e.has_class(class);
            let want = force.unwrap_or(!present);
            if want && !present {
                e.classes.push(class.to_string());
            } else if !want && present {
                e.classes.retain(|c| c != class);
            }
        });
    }

    fn has_class(&self, target: &Target, class: &str) -> bool {
        self.element(target).map(|e| e.has_class(class)).unwrap_or(false)
    }

    fn set_display(&mut self, target: &Target, display: Display) {
        self.for_each(target, |e| e.display = Some(display));
    }

    fn display(&self, target: &Target) -> Option<Display> {
        self.element(target).and_then(|e| e.display)
    }

    fn set_css_variable(&mut self, name: &str, value: &str) {
        self.css_variables.insert(name.to_string(), value.to_string());
    }

    fn inner_html(&self, target: &Target) -> Option<String> {
        self.element(target).map(|e| e.inner_html.clone())
    }

    fn set_inner_html(&mut self, target: &Target, html: &str) {
        let mut wrote = false;
        self.for_each(target, |e| {
            e.inner_html = html.to_string();
            wrote = true;
        });
        if wrote {
            self.inner_html_writes += 1;
        }
    }

    fn replace_options(&mut self, target: &Target, entries: &[DropdownEntry]) {
        let first = option_values(entries).first().map(|v| v.to_string()).unwrap_or_default();
        self.for_each(target, |e| {
            e.options = entries.to_vec();
            e.value = first.clone();
        });
    }

    fn select_value(&self, target: &Target) -> Option<String> {
        self.element(target).map(|e| e.value.clone())
    }

    fn set_select_value(&mut self, target: &Target, value: &str) {
        // A value matching no option deselects everything, as in browsers
        self.for_each(target, |e| {
            let offered = option_values(&e.options).contains(&value);
            e.value = if offered { value.to_string() } else { String::new() };
        });
    }

    fn is_checked(&self, target: &Target) -> Option<bool> {
        self.element(target).map(|e| e.checked)
    }

    fn set_checked(&mut self, target: &Target, checked: bool) {
        self.for_each(target, |e| e.checked = checked);
    }

    fn input_value(&self, target: &Target) -> Option<String> {
        self.element(target).map(|e| e.value.clone())
    }

    fn schedule_scroll_into_view(&mut self, target: &Target, delay_ms: u32) {
        if self.exists(target) {
            self.scheduled_scrolls.push((target.clone(), delay_ms));
        }
    }
}
