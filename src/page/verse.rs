//! Verse layout controls: formatting toggle and spacing slider

use crate::config::ViewerConfig;
use crate::host::{Display, PageHost, Target};

pub const VERSE_SPACING_VAR: &str = "--verse-spacing";

/// Formatted verses, or the plain `simple-verse-style` layout
///
/// The spacing slider is only offered while formatting is on.
pub fn set_verse_formatting<H: PageHost>(host: &mut H, config: &ViewerConfig, formatted: bool) {
    host.toggle_class(&Target::Body, "simple-verse-style", Some(!formatted));
    host.set_display(
        &Target::Selector(format!(".{}", config.classes.verse_format_toggle)),
        if formatted { Display::Block } else { Display::None },
    );
}

/// Apply a slider value (in `em`) to the verse spacing variable
///
/// A spacing of exactly zero also drops verse padding.
pub fn apply_verse_spacing<H: PageHost>(host: &mut H, value: &str) {
    host.set_css_variable(VERSE_SPACING_VAR, &format!("{}em", value));

    let zero = value.trim().parse::<f64>().map(|v| v == 0.0).unwrap_or(false);
    host.toggle_class(&Target::Body, "no-verse-padding", Some(zero));
}

/// Bring the page in line with the controls' initial state
pub fn apply_initial_state<H: PageHost>(host: &mut H, config: &ViewerConfig) {
    let slider = Target::Id(config.elements.width_slider.clone());
    if let Some(value) = host.input_value(&slider) {
        apply_verse_spacing(host, &value);
    }

    let checkbox = Target::Selector(config.verse_format_checkbox.clone());
    if let Some(formatted) = host.is_checked(&checkbox) {
        set_verse_formatting(host, config, formatted);
    }
}
