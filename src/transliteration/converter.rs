//! External script converter
//!
//! The viewer never converts text itself. In the browser the page loads
//! Sanscript and `SanscriptConverter` forwards to `Sanscript.t`.

use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// The converter rejected its input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ConversionError(pub String);

/// Converts text between two transliteration schemes
pub trait SchemeConverter {
    fn convert(&self, text: &str, from: &str, to: &str) -> Result<String, ConversionError>;
}

impl<T: SchemeConverter + ?Sized> SchemeConverter for Rc<T> {
    fn convert(&self, text: &str, from: &str, to: &str) -> Result<String, ConversionError> {
        (**self).convert(text, from, to)
    }
}

impl<T: SchemeConverter + ?Sized> SchemeConverter for Box<T> {
    fn convert(&self, text: &str, from: &str, to: &str) -> Result<String, ConversionError> {
        (**self).convert(text, from, to)
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Sanscript, js_name = t)]
    fn sanscript_t(text: &str, from: &str, to: &str) -> Result<String, JsValue>;
}

/// Converter backed by the page's global `Sanscript` object
#[derive(Clone, Copy, Debug, Default)]
pub struct SanscriptConverter;

impl SchemeConverter for SanscriptConverter {
    fn convert(&self, text: &str, from: &str, to: &str) -> Result<String, ConversionError> {
        sanscript_t(text, from, to).map_err(|e| {
            ConversionError(
                e.as_string()
                    .unwrap_or_else(|| format!("Sanscript.t threw {:?}", e)),
            )
        })
    }
}
