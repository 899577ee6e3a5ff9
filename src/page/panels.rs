//! Panel, overlay and menu behaviors

use crate::config::ViewerConfig;
use crate::host::{Display, PageHost, Target};

pub const EXPANDED: &str = "expanded";

/// Expand or collapse a panel
pub fn toggle_panel<H: PageHost>(host: &mut H, id: &str) {
    host.toggle_class(&Target::Id(id.to_string()), EXPANDED, None);
}

/// Force a marker class on the content container (`show-breaks`, `show-line-breaks`)
pub fn set_content_class<H: PageHost>(host: &mut H, config: &ViewerConfig, class: &str, on: bool) {
    host.toggle_class(&config.content(), class, Some(on));
}

/// Flip location marker visibility; the checkbox state is not consulted
pub fn toggle_location_markers<H: PageHost>(host: &mut H, config: &ViewerConfig) {
    host.toggle_class(&config.content(), "hide-location-markers", None);
}

/// Simple view hides the side panels and every rich-text-only control
pub fn set_view_mode<H: PageHost>(host: &mut H, config: &ViewerConfig, simple: bool) {
    host.toggle_class(&Target::Body, "simple-view", Some(simple));

    let display = if simple { Display::None } else { Display::Block };
    host.set_display(&Target::Id(config.elements.toc.clone()), display);
    host.set_display(&Target::Id(config.elements.metadata.clone()), display);
    host.set_display(
        &Target::AllWithClass(config.classes.rich_text_toggle.clone()),
        display,
    );
}

/// Show either the pre-correction or the post-correction readings in the content
pub fn show_corrections<H: PageHost>(host: &mut H, config: &ViewerConfig, post_correction: bool) {
    let content = &config.elements.content;
    if !host.exists(&config.content()) {
        return;
    }

    let (ante, post) = if post_correction {
        (Display::None, Display::Inline)
    } else {
        (Display::Inline, Display::None)
    };

    host.set_display(
        &Target::ClassWithin {
            id: content.clone(),
            class: config.classes.ante_correction.clone(),
        },
        ante,
    );
    host.set_display(
        &Target::ClassWithin {
            id: content.clone(),
            class: config.classes.post_correction.clone(),
        },
        post,
    );
}

/// "Show corrections" link: reveal the corrections panel, or hide it again
///
/// Revealing also expands the panel and scrolls to it once the expand
/// transition has run.
pub fn toggle_corrections_link<H: PageHost>(host: &mut H, config: &ViewerConfig) {
    let container = Target::Id(config.elements.corrections_container.clone());
    if !host.exists(&container) {
        return;
    }

    if host.display(&container) == Some(Display::None) {
        host.set_display(&container, Display::Block);
        host.toggle_class(&container, EXPANDED, Some(true));
        host.schedule_scroll_into_view(&container, config.scroll_delay_ms);
    } else {
        host.set_display(&container, Display::None);
        host.toggle_class(&container, EXPANDED, Some(false));
    }
}

/// Mobile menu: the burger icon is hidden while the control container is open
pub fn toggle_button_container<H: PageHost>(host: &mut H, config: &ViewerConfig) {
    let container = Target::Selector(format!(".{}", config.classes.button_container));
    if !host.exists(&container) {
        log::debug!("No button container on this page");
        return;
    }

    log::debug!(
        "Button container expanded before toggle: {}",
        host.has_class(&container, EXPANDED)
    );
    host.toggle_class(&container, EXPANDED, None);
    let expanded = host.has_class(&container, EXPANDED);

    let icon = Target::Id(config.elements.controls_icon.clone());
    host.set_display(&icon, if expanded { Display::None } else { Display::Block });
    log::debug!(
        "Button container expanded after toggle: {}, burger icon {}",
        expanded,
        if expanded { "hidden" } else { "shown" }
    );
}
