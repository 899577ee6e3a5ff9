// Panel, overlay and menu behaviors driven through the subscription list

mod common;

use common::{full_page, StubConverter};
use text_viewer_wasm::host::{Display, MockElement, PageHost};
use text_viewer_wasm::page::{Action, EventKind, Panel, Subscription};
use text_viewer_wasm::{MemoryStore, MockPage, PageController, Target, ViewerConfig};

type Controller = PageController<std::rc::Rc<StubConverter>, MemoryStore>;

fn attach(page: &mut MockPage) -> Controller {
    PageController::attach(
        page,
        ViewerConfig::default(),
        StubConverter::shared(),
        MemoryStore::new(),
    )
    .unwrap()
}

fn subscription_for(controller: &Controller, action: Action) -> Subscription {
    controller
        .subscriptions()
        .iter()
        .find(|s| s.action == action)
        .cloned()
        .unwrap_or_else(|| panic!("no subscription for {:?}", action))
}

#[test]
fn test_full_page_subscribes_everything() {
    let mut page = full_page("<p>rāma</p>");
    let controller = attach(&mut page);

    let subs = controller.subscriptions();
    assert_eq!(subs.len(), 9);
    assert_eq!(
        subs.iter().filter(|s| s.action == Action::ToggleMenu).count(),
        2
    );
    assert_eq!(
        subscription_for(&controller, Action::WidthSliderMoved).event,
        EventKind::Input
    );
    assert_eq!(
        subscription_for(&controller, Action::SchemeSelected).event,
        EventKind::Change
    );
}

#[test]
fn test_panel_headers_toggle_their_panels() {
    let mut page = full_page("<p>rāma</p>");
    let mut controller = attach(&mut page);

    for (panel, id) in [
        (Panel::Toc, "toc"),
        (Panel::Metadata, "metadata"),
        (Panel::Corrections, "corrections-container"),
    ] {
        let sub = subscription_for(&controller, Action::TogglePanel(panel));
        assert_eq!(sub.target, Target::Heading(id.to_string()));

        controller.dispatch(&mut page, &sub).unwrap();
        assert!(page.by_id(id).unwrap().has_class("expanded"));
        controller.dispatch(&mut page, &sub).unwrap();
        assert!(!page.by_id(id).unwrap().has_class("expanded"));
    }
}

#[test]
fn test_burger_and_close_button_share_the_toggle() {
    let mut page = full_page("<p>rāma</p>");
    let mut controller = attach(&mut page);
    let container = Target::Selector(".button-container".into());

    let menu: Vec<Subscription> = controller
        .subscriptions()
        .iter()
        .filter(|s| s.action == Action::ToggleMenu)
        .cloned()
        .collect();

    controller.dispatch(&mut page, &menu[0]).unwrap();
    assert!(page.has_class(&container, "expanded"));
    assert_eq!(page.by_id("controls-icon").unwrap().display, Some(Display::None));

    controller.dispatch(&mut page, &menu[1]).unwrap();
    assert!(!page.has_class(&container, "expanded"));
    assert_eq!(page.by_id("controls-icon").unwrap().display, Some(Display::Block));
}

#[test]
fn test_corrections_link_hides_visible_panel_first() {
    let mut page = full_page("<p>rāma</p>");
    let mut controller = attach(&mut page);
    let sub = subscription_for(&controller, Action::ShowCorrectionsLink);
    assert!(sub.prevent_default);

    // No inline display yet: the first click hides, the second reveals and scrolls
    controller.dispatch(&mut page, &sub).unwrap();
    assert_eq!(
        page.by_id("corrections-container").unwrap().display,
        Some(Display::None)
    );
    assert!(page.scheduled_scrolls.is_empty());

    controller.dispatch(&mut page, &sub).unwrap();
    let container = page.by_id("corrections-container").unwrap();
    assert_eq!(container.display, Some(Display::Block));
    assert!(container.has_class("expanded"));
    assert_eq!(page.scheduled_scrolls.len(), 1);
}

#[test]
fn test_content_toggles() {
    let mut page = full_page("<p>rāma</p>");
    let mut controller = attach(&mut page);
    let content = Target::Id("content".into());

    controller.handle(&mut page, Action::Breaks(true)).unwrap();
    controller.handle(&mut page, Action::LineBreaks(true)).unwrap();
    assert!(page.has_class(&content, "show-breaks"));
    assert!(page.has_class(&content, "show-line-breaks"));

    controller.handle(&mut page, Action::Breaks(false)).unwrap();
    assert!(!page.has_class(&content, "show-breaks"));
    assert!(page.has_class(&content, "show-line-breaks"));

    controller.handle(&mut page, Action::LocationMarkers).unwrap();
    assert!(page.has_class(&content, "hide-location-markers"));
}

#[test]
fn test_corrections_overlay_switches_readings() {
    let mut page = MockPage::new();
    let content = page.add(MockElement::new("div").id("content").html("<p>rāma</p>"));
    page.add_child(content, MockElement::new("span").class("ante-correction"));
    page.add_child(content, MockElement::new("span").class("post-correction"));
    page.add(MockElement::new("span").class("post-correction"));
    let mut controller = attach(&mut page);

    controller.handle(&mut page, Action::Corrections(true)).unwrap();
    let inside_post = Target::ClassWithin {
        id: "content".into(),
        class: "post-correction".into(),
    };
    let inside_ante = Target::ClassWithin {
        id: "content".into(),
        class: "ante-correction".into(),
    };
    assert_eq!(page.display(&inside_post), Some(Display::Inline));
    assert_eq!(page.display(&inside_ante), Some(Display::None));

    // The span outside the content is never touched
    let outside = page.elements(&Target::AllWithClass("post-correction".into()));
    assert_eq!(outside.iter().filter(|e| e.display.is_none()).count(), 1);

    controller.handle(&mut page, Action::Corrections(false)).unwrap();
    assert_eq!(page.display(&inside_post), Some(Display::None));
    assert_eq!(page.display(&inside_ante), Some(Display::Inline));
}

#[test]
fn test_view_mode_and_verse_formatting() {
    let mut page = full_page("<p>rāma</p>");
    page.add(MockElement::new("div").class("verse-format-toggle"));
    let mut controller = attach(&mut page);

    controller.handle(&mut page, Action::ViewMode(true)).unwrap();
    assert!(page.has_class(&Target::Body, "simple-view"));
    assert_eq!(page.by_id("toc").unwrap().display, Some(Display::None));

    controller.handle(&mut page, Action::VerseFormatting(false)).unwrap();
    assert!(page.has_class(&Target::Body, "simple-verse-style"));
    assert_eq!(
        page.display(&Target::Selector(".verse-format-toggle".into())),
        Some(Display::None)
    );
}

#[test]
fn test_slider_applies_on_attach_and_input() {
    let mut page = full_page("<p>rāma</p>");
    let mut controller = attach(&mut page);
    assert_eq!(page.css_variables["--verse-spacing"], "1em");

    page.by_id_mut("width-slider").unwrap().value = "0".to_string();
    let sub = subscription_for(&controller, Action::WidthSliderMoved);
    controller.dispatch(&mut page, &sub).unwrap();
    assert_eq!(page.css_variables["--verse-spacing"], "0em");
    assert!(page.has_class(&Target::Body, "no-verse-padding"));
}

#[test]
fn test_bare_page_has_no_subscriptions_and_survives_every_action() {
    let mut page = MockPage::new();
    let mut controller = attach(&mut page);
    assert!(controller.subscriptions().is_empty());

    for action in [
        Action::TogglePanel(Panel::Toc),
        Action::ToggleMenu,
        Action::ShowCorrectionsLink,
        Action::SchemeSelected,
        Action::ShowAllToggled,
        Action::WidthSliderMoved,
        Action::Breaks(true),
        Action::LineBreaks(true),
        Action::LocationMarkers,
        Action::ViewMode(true),
        Action::Corrections(true),
        Action::VerseFormatting(true),
    ] {
        controller.handle(&mut page, action).unwrap();
    }
    assert_eq!(page.inner_html_writes, 0);
}
