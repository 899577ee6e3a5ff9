//! Text-node rewriting over serialized content markup
//!
//! Content is handled as the markup string the host hands out. Tags,
//! comments and untouched text are copied through as raw bytes, so only
//! the text nodes the callback rewrites can differ from the input.

use quick_xml::escape::{partial_escape, unescape_with};
use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Result, ViewerError};

/// Entities a browser emits when serializing text content
fn resolve_entity(name: &str) -> Option<&'static str> {
    match name {
        "amp" => Some("&"),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "quot" => Some("\""),
        "apos" => Some("'"),
        "nbsp" => Some("\u{a0}"),
        _ => None,
    }
}

fn markup_error(position: usize, err: impl std::fmt::Display) -> ViewerError {
    ViewerError::Markup(format!("at byte {}: {}", position, err))
}

/// Walk every text node of `html` in document order
///
/// `rewrite` receives the decoded text of each node and returns `Some` with
/// replacement text, or `None` to keep the node byte-for-byte. Void HTML
/// elements (`<br>`) are tolerated because closing tags are not matched.
pub fn rewrite_text_nodes<F>(html: &str, mut rewrite: F) -> Result<String>
where
    F: FnMut(&str) -> Result<Option<String>>,
{
    let mut reader = Reader::from_str(html);
    reader.check_end_names(false);

    let mut writer = Writer::new(Vec::with_capacity(html.len()));

    loop {
        let position = reader.buffer_position();
        let event = reader.read_event().map_err(|e| markup_error(position, e))?;

        match event {
            Event::Eof => break,
            Event::Text(text) => {
                let replacement = {
                    let raw = std::str::from_utf8(&text).map_err(|e| markup_error(position, e))?;
                    let decoded = unescape_with(raw, resolve_entity)
                        .map_err(|e| markup_error(position, e))?;
                    rewrite(&decoded)?
                };

                match replacement {
                    Some(replacement) => {
                        let escaped = partial_escape(&replacement);
                        writer
                            .write_event(Event::Text(BytesText::from_escaped(escaped)))
                            .map_err(|e| markup_error(position, e))?;
                    }
                    None => writer
                        .write_event(Event::Text(text))
                        .map_err(|e| markup_error(position, e))?,
                }
            }
            other => writer
                .write_event(other)
                .map_err(|e| markup_error(position, e))?,
        }
    }

    String::from_utf8(writer.into_inner()).map_err(|e| markup_error(html.len(), e))
}

/// Decoded text of every text node, in document order
pub fn text_nodes(html: &str) -> Result<Vec<String>> {
    let mut nodes = Vec::new();
    rewrite_text_nodes(html, |text| {
        nodes.push(text.to_string());
        Ok(None)
    })?;
    Ok(nodes)
}
