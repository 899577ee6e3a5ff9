//! Human-readable labels for scheme identifiers

use std::collections::BTreeMap;

/// Labels shipped with the viewer for identifiers whose generic label reads badly
pub fn default_display_names() -> BTreeMap<String, String> {
    [
        ("iast", "IAST (Original)"),
        ("hk", "HK"),
        ("itrans", "ITRANS"),
        ("slp1", "SLP1"),
        ("velthuis", "Velthuis"),
        ("iso", "ISO 15919"),
        ("wx", "WX"),
    ]
    .into_iter()
    .map(|(id, label)| (id.to_string(), label.to_string()))
    .collect()
}

/// Generic label: underscores become spaces and every word starts upper-case
///
/// `tamil_grantha` -> `Tamil Grantha`, `devanagari` -> `Devanagari`.
/// Word boundaries follow ASCII word characters, so a letter following a
/// digit or another letter is left alone.
pub fn title_case(scheme: &str) -> String {
    let mut label = String::with_capacity(scheme.len());
    let mut at_boundary = true;

    for c in scheme.chars() {
        let c = if c == '_' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric();
        if at_boundary && is_word {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
        at_boundary = !is_word;
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_simple() {
        assert_eq!(title_case("devanagari"), "Devanagari");
        assert_eq!(title_case("tamil_grantha"), "Tamil Grantha");
    }

    #[test]
    fn test_title_case_leaves_inner_letters() {
        assert_eq!(title_case("slp1"), "Slp1");
        assert_eq!(title_case("gurmukhi_x"), "Gurmukhi X");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_default_names_cover_roman_schemes() {
        let names = default_display_names();
        assert_eq!(names["iast"], "IAST (Original)");
        assert_eq!(names["iso"], "ISO 15919");
        assert!(!names.contains_key("devanagari"));
    }
}
