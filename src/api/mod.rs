//! Viewer WASM API
//!
//! `ViewerPage` is what a document page instantiates once its DOM is
//! ready. It attaches a [`PageController`] to the live document, wires the
//! controller's subscriptions to DOM listeners and exposes the handlers
//! the page's inline `onchange`/`onclick` attributes call.

pub mod helpers;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::ViewerConfig;
use crate::dropdown;
use crate::host::{LocalStore, WebPage};
use crate::page::{Action, PageController, Panel, Subscription};
use crate::transliteration::SanscriptConverter;

type BrowserController = PageController<SanscriptConverter, LocalStore>;

struct PageState {
    controller: BrowserController,
    host: WebPage,
}

fn dispatch(state: &RefCell<PageState>, action: Action) -> Result<(), JsValue> {
    // Handlers never re-enter, but a listener firing during one must not panic
    let Ok(mut guard) = state.try_borrow_mut() else {
        log::warn!("Ignoring {:?} raised while another handler runs", action);
        return Ok(());
    };
    let PageState { controller, host } = &mut *guard;
    controller.handle(host, action).map_err(helpers::viewer_error)
}

/// A document page with viewer behaviors attached
#[wasm_bindgen]
pub struct ViewerPage {
    state: Rc<RefCell<PageState>>,
}

#[wasm_bindgen]
impl ViewerPage {
    /// Attach to the current document
    ///
    /// `config` may be `undefined`, `null` or a partial configuration
    /// object; missing fields take the defaults of the generated pages.
    #[wasm_bindgen(js_name = attach)]
    pub fn attach(config: JsValue) -> Result<ViewerPage, JsValue> {
        let config: ViewerConfig = if config.is_undefined() || config.is_null() {
            ViewerConfig::default()
        } else {
            helpers::deserialize(config, "Invalid viewer config")?
        };

        let mut host =
            WebPage::from_window().ok_or_else(|| helpers::js_error("No document to attach to"))?;
        let controller = PageController::attach(
            &mut host,
            config,
            SanscriptConverter,
            LocalStore::from_window(),
        )
        .map_err(helpers::viewer_error)?;

        let page = ViewerPage {
            state: Rc::new(RefCell::new(PageState { controller, host })),
        };
        page.wire_subscriptions()?;
        Ok(page)
    }

    /// Display the content in `scheme` ("original" or the base scheme restores it)
    #[wasm_bindgen(js_name = transliterate)]
    pub fn transliterate(&self, scheme: &str) -> Result<(), JsValue> {
        let mut guard = self.state.borrow_mut();
        let PageState { controller, host } = &mut *guard;
        controller
            .transliterate(host, scheme)
            .map_err(helpers::viewer_error)
    }

    #[wasm_bindgen(js_name = populateSchemes)]
    pub fn populate_schemes(&self, show_all: bool) {
        let mut guard = self.state.borrow_mut();
        let PageState { controller, host } = &mut *guard;
        controller.populate_schemes(host, show_all);
    }

    /// Dropdown entries for the configured registry, as plain JS objects
    #[wasm_bindgen(js_name = schemeEntries)]
    pub fn scheme_entries(&self, show_all: bool) -> Result<JsValue, JsValue> {
        let state = self.state.borrow();
        let entries = dropdown::build_entries(state.controller.registry(), show_all);
        helpers::serialize(&entries, "Failed to serialize scheme entries")
    }

    /// The scheme last chosen by the user (or restored from storage)
    #[wasm_bindgen(js_name = currentScheme)]
    pub fn current_scheme(&self) -> String {
        self.state
            .borrow()
            .controller
            .preference()
            .selected_scheme
            .clone()
    }

    #[wasm_bindgen(js_name = toggleToc)]
    pub fn toggle_toc(&self) -> Result<(), JsValue> {
        dispatch(&self.state, Action::TogglePanel(Panel::Toc))
    }

    #[wasm_bindgen(js_name = toggleMetadata)]
    pub fn toggle_metadata(&self) -> Result<(), JsValue> {
        dispatch(&self.state, Action::TogglePanel(Panel::Metadata))
    }

    #[wasm_bindgen(js_name = toggleCorrectionsPanel)]
    pub fn toggle_corrections_panel(&self) -> Result<(), JsValue> {
        dispatch(&self.state, Action::TogglePanel(Panel::Corrections))
    }

    #[wasm_bindgen(js_name = toggleButtonContainer)]
    pub fn toggle_button_container(&self) -> Result<(), JsValue> {
        dispatch(&self.state, Action::ToggleMenu)
    }

    #[wasm_bindgen(js_name = toggleBreaks)]
    pub fn toggle_breaks(&self, checked: bool) -> Result<(), JsValue> {
        dispatch(&self.state, Action::Breaks(checked))
    }

    #[wasm_bindgen(js_name = toggleLineBreaks)]
    pub fn toggle_line_breaks(&self, checked: bool) -> Result<(), JsValue> {
        dispatch(&self.state, Action::LineBreaks(checked))
    }

    #[wasm_bindgen(js_name = toggleLocationMarkers)]
    pub fn toggle_location_markers(&self) -> Result<(), JsValue> {
        dispatch(&self.state, Action::LocationMarkers)
    }

    #[wasm_bindgen(js_name = toggleViewMode)]
    pub fn toggle_view_mode(&self, simple: bool) -> Result<(), JsValue> {
        dispatch(&self.state, Action::ViewMode(simple))
    }

    /// Checked shows the post-correction readings
    #[wasm_bindgen(js_name = toggleCorrections)]
    pub fn toggle_corrections(&self, checked: bool) -> Result<(), JsValue> {
        dispatch(&self.state, Action::Corrections(checked))
    }

    #[wasm_bindgen(js_name = toggleVerseFormatting)]
    pub fn toggle_verse_formatting(&self, checked: bool) -> Result<(), JsValue> {
        dispatch(&self.state, Action::VerseFormatting(checked))
    }
}

impl ViewerPage {
    /// Register a DOM listener per subscribed element; listeners live as long as the page
    fn wire_subscriptions(&self) -> Result<(), JsValue> {
        let state = self.state.borrow();
        let subscriptions: Vec<Subscription> = state.controller.subscriptions().to_vec();

        for subscription in subscriptions {
            for element in state.host.elements(&subscription.target) {
                let page_state = Rc::clone(&self.state);
                let action = subscription.action;
                let prevent_default = subscription.prevent_default;

                let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                    if prevent_default {
                        event.prevent_default();
                    }
                    // Errors are already logged; an event has nowhere to return them
                    let _ = dispatch(&page_state, action);
                });

                element.add_event_listener_with_callback(
                    subscription.event.as_str(),
                    listener.as_ref().unchecked_ref::<js_sys::Function>(),
                )?;
                listener.forget();
            }
        }

        log::debug!("Wired {} subscriptions", state.controller.subscriptions().len());
        Ok(())
    }
}
