// Shared fixtures for the integration tests

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use text_viewer_wasm::host::{MockElement, MockPage};
use text_viewer_wasm::transliteration::{ConversionError, SchemeConverter};

/// Deterministic IAST -> Harvard-Kyoto stand-in that counts its calls
#[derive(Default)]
pub struct StubConverter {
    pub calls: Cell<usize>,
}

impl StubConverter {
    pub fn shared() -> Rc<StubConverter> {
        Rc::new(StubConverter::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

fn harvard_kyoto(c: char) -> &'static str {
    match c {
        'ā' => "A",
        'ī' => "I",
        'ū' => "U",
        'ṛ' => "R",
        'ṝ' => "RR",
        'ṃ' => "M",
        'ḥ' => "H",
        'ñ' => "J",
        'ṭ' => "T",
        'ḍ' => "D",
        'ṇ' => "N",
        'ś' => "z",
        'ṣ' => "S",
        _ => "",
    }
}

impl SchemeConverter for StubConverter {
    fn convert(&self, text: &str, from: &str, to: &str) -> Result<String, ConversionError> {
        self.calls.set(self.calls.get() + 1);
        if from != "iast" {
            return Err(ConversionError(format!("unexpected source scheme {}", from)));
        }
        match to {
            "hk" => Ok(text
                .chars()
                .map(|c| match harvard_kyoto(c) {
                    "" => c.to_string(),
                    mapped => mapped.to_string(),
                })
                .collect()),
            "fail" => Err(ConversionError("converter exploded".to_string())),
            other => Ok(format!("{}({})", other, text)),
        }
    }
}

/// Page with the transliteration controls and the given content
pub fn transliteration_page(content: &str) -> MockPage {
    MockPage::new()
        .with(MockElement::new("div").id("content").html(content))
        .with(MockElement::new("select").id("transliteration-scheme"))
        .with(MockElement::new("input").id("show-all-schemes-checkbox"))
}

/// Page with every element the viewer knows about
pub fn full_page(content: &str) -> MockPage {
    let mut page = transliteration_page(content);

    for id in ["toc", "metadata", "corrections-container"] {
        let panel = page.add(MockElement::new("section").id(id));
        page.add_child(panel, MockElement::new("h2"));
    }

    page.add(MockElement::new("div").class("button-container"));
    page.add(MockElement::new("img").id("controls-icon"));
    page.add(MockElement::new("button").id("close-button-container"));
    page.add(MockElement::new("a").id("show-corrections-link"));
    page.add(MockElement::new("input").id("width-slider").value("1"));
    page
}
