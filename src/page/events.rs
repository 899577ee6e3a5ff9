//! Event subscriptions
//!
//! Handlers are plain data. The subscription list pairs each element with
//! the event it listens to and the [`Action`] the controller runs, so the
//! browser glue only has to forward events and tests can dispatch actions
//! directly.

use crate::config::ViewerConfig;
use crate::host::{PageHost, Target};

/// Collapsible panels with a clickable `h2` header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Toc,
    Metadata,
    Corrections,
}

impl Panel {
    pub fn element_id(self, config: &ViewerConfig) -> &str {
        match self {
            Panel::Toc => &config.elements.toc,
            Panel::Metadata => &config.elements.metadata,
            Panel::Corrections => &config.elements.corrections_container,
        }
    }
}

/// Page behavior triggered by an event
///
/// Checkbox behaviors wired through inline `onchange` attributes carry the
/// checkbox state with them; the others read what they need from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    TogglePanel(Panel),
    ToggleMenu,
    ShowCorrectionsLink,
    SchemeSelected,
    ShowAllToggled,
    WidthSliderMoved,
    Breaks(bool),
    LineBreaks(bool),
    LocationMarkers,
    ViewMode(bool),
    Corrections(bool),
    VerseFormatting(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Change,
    Input,
}

impl EventKind {
    /// DOM event name
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Change => "change",
            EventKind::Input => "input",
        }
    }
}

/// One (element, event, handler) triple
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subscription {
    pub target: Target,
    pub event: EventKind,
    pub action: Action,
    /// Suppress the browser's default handling (link navigation)
    pub prevent_default: bool,
}

impl Subscription {
    fn new(target: Target, event: EventKind, action: Action) -> Self {
        Self {
            target,
            event,
            action,
            prevent_default: false,
        }
    }
}

/// Subscriptions for every element present in the host
///
/// Scheme controls are only wired when transliteration is active.
pub fn subscriptions<H: PageHost>(
    host: &H,
    config: &ViewerConfig,
    transliteration: bool,
) -> Vec<Subscription> {
    let ids = &config.elements;
    let mut candidates = Vec::new();

    for panel in [Panel::Toc, Panel::Metadata, Panel::Corrections] {
        candidates.push(Subscription::new(
            Target::Heading(panel.element_id(config).to_string()),
            EventKind::Click,
            Action::TogglePanel(panel),
        ));
    }

    candidates.push(Subscription::new(
        Target::Id(ids.controls_icon.clone()),
        EventKind::Click,
        Action::ToggleMenu,
    ));
    candidates.push(Subscription::new(
        Target::Id(ids.close_button.clone()),
        EventKind::Click,
        Action::ToggleMenu,
    ));
    candidates.push(Subscription {
        prevent_default: true,
        ..Subscription::new(
            Target::Id(ids.show_corrections_link.clone()),
            EventKind::Click,
            Action::ShowCorrectionsLink,
        )
    });
    candidates.push(Subscription::new(
        Target::Id(ids.width_slider.clone()),
        EventKind::Input,
        Action::WidthSliderMoved,
    ));

    if transliteration {
        candidates.push(Subscription::new(
            config.scheme_select(),
            EventKind::Change,
            Action::SchemeSelected,
        ));
        candidates.push(Subscription::new(
            config.show_all_checkbox(),
            EventKind::Change,
            Action::ShowAllToggled,
        ));
    }

    candidates
        .into_iter()
        .filter(|s| {
            let present = host.exists(&s.target);
            if !present {
                log::debug!("No element for {:?}, skipping {:?}", s.target, s.action);
            }
            present
        })
        .collect()
}
