//! Page controller
//!
//! One `PageController` exists per page view. It is attached when the
//! document is ready, owns every piece of mutable page state (the
//! transliteration snapshot and cache, the user's preferences, the
//! subscription list) and runs the [`Action`] behind every event.

pub mod events;
pub mod panels;
pub mod verse;

use crate::config::ViewerConfig;
use crate::dropdown;
use crate::error::Result;
use crate::host::PageHost;
use crate::preferences::{PreferenceStore, UserPreference};
use crate::schemes::SchemeRegistry;
use crate::transliteration::{SchemeConverter, Transliterator};

pub use events::{Action, EventKind, Panel, Subscription};

pub struct PageController<C, S> {
    config: ViewerConfig,
    registry: SchemeRegistry,
    /// `None` when the page lacks the content container or the scheme select
    transliterator: Option<Transliterator<C>>,
    store: S,
    preference: UserPreference,
    subscriptions: Vec<Subscription>,
}

impl<C: SchemeConverter, S: PreferenceStore> PageController<C, S> {
    /// Attach to a ready page
    ///
    /// Captures the original content, restores the stored preferences
    /// (re-transliterating if needed), applies the verse controls' initial
    /// state and builds the subscription list. Only an invalid scheme
    /// registry fails; missing elements just disable their features.
    pub fn attach<H: PageHost>(
        host: &mut H,
        config: ViewerConfig,
        converter: C,
        store: S,
    ) -> Result<Self> {
        let registry = config.registry()?;
        let preference = UserPreference::load(&store, &config.storage, &config.base_scheme);

        let transliterator = match host.inner_html(&config.content()) {
            Some(original) if host.exists(&config.scheme_select()) => Some(Transliterator::new(
                original,
                config.base_scheme.clone(),
                converter,
            )),
            _ => {
                log::info!("Transliteration disabled: content or scheme select missing");
                None
            }
        };

        let subscriptions = events::subscriptions(host, &config, transliterator.is_some());

        let mut controller = Self {
            config,
            registry,
            transliterator,
            store,
            preference,
            subscriptions,
        };

        controller.restore_preferences(host);
        verse::apply_initial_state(host, &controller.config);

        log::info!(
            "Page controller attached ({} subscriptions, scheme '{}', show_all={})",
            controller.subscriptions.len(),
            controller.preference.selected_scheme,
            controller.preference.show_all
        );
        Ok(controller)
    }

    fn restore_preferences<H: PageHost>(&mut self, host: &mut H) {
        if self.transliterator.is_none() {
            return;
        }

        let select = self.config.scheme_select();
        host.set_checked(&self.config.show_all_checkbox(), self.preference.show_all);
        let entries = dropdown::populate(host, &select, &self.registry, self.preference.show_all);

        let saved = self.preference.selected_scheme.clone();
        dropdown::select_or_first(host, &select, &entries, &saved);

        if !self.is_base(&saved) {
            if let Err(e) = self.transliterate(host, &saved) {
                log::error!("Could not restore transliteration '{}': {}", saved, e);
            }
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn registry(&self) -> &SchemeRegistry {
        &self.registry
    }

    pub fn preference(&self) -> &UserPreference {
        &self.preference
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transliterator(&self) -> Option<&Transliterator<C>> {
        self.transliterator.as_ref()
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    fn is_base(&self, scheme: &str) -> bool {
        self.transliterator
            .as_ref()
            .map(|t| t.is_base(scheme))
            .unwrap_or(true)
    }

    /// Display the content in `scheme`
    ///
    /// No-op when transliteration is disabled on this page.
    pub fn transliterate<H: PageHost>(&mut self, host: &mut H, scheme: &str) -> Result<()> {
        let Some(transliterator) = self.transliterator.as_mut() else {
            return Ok(());
        };
        let html = transliterator.render(scheme)?;
        host.set_inner_html(&self.config.content(), html);
        Ok(())
    }

    /// Rebuild the scheme dropdown, keeping the current selection when it is still offered
    pub fn populate_schemes<H: PageHost>(&self, host: &mut H, show_all: bool) {
        if self.transliterator.is_none() {
            return;
        }
        dropdown::populate(host, &self.config.scheme_select(), &self.registry, show_all);
    }

    /// Run the handler of a subscription
    pub fn dispatch<H: PageHost>(&mut self, host: &mut H, subscription: &Subscription) -> Result<()> {
        self.handle(host, subscription.action)
    }

    /// Run one page behavior
    pub fn handle<H: PageHost>(&mut self, host: &mut H, action: Action) -> Result<()> {
        log::debug!("Handling {:?}", action);
        match action {
            Action::TogglePanel(panel) => panels::toggle_panel(host, panel.element_id(&self.config)),
            Action::ToggleMenu => panels::toggle_button_container(host, &self.config),
            Action::ShowCorrectionsLink => panels::toggle_corrections_link(host, &self.config),
            Action::SchemeSelected => return self.scheme_selected(host),
            Action::ShowAllToggled => self.show_all_toggled(host),
            Action::WidthSliderMoved => {
                let slider = crate::host::Target::Id(self.config.elements.width_slider.clone());
                if let Some(value) = host.input_value(&slider) {
                    verse::apply_verse_spacing(host, &value);
                }
            }
            Action::Breaks(on) => panels::set_content_class(host, &self.config, "show-breaks", on),
            Action::LineBreaks(on) => {
                panels::set_content_class(host, &self.config, "show-line-breaks", on)
            }
            Action::LocationMarkers => panels::toggle_location_markers(host, &self.config),
            Action::ViewMode(simple) => panels::set_view_mode(host, &self.config, simple),
            Action::Corrections(post) => panels::show_corrections(host, &self.config, post),
            Action::VerseFormatting(on) => verse::set_verse_formatting(host, &self.config, on),
        }
        Ok(())
    }

    fn scheme_selected<H: PageHost>(&mut self, host: &mut H) -> Result<()> {
        let Some(scheme) = host.select_value(&self.config.scheme_select()) else {
            return Ok(());
        };

        if let Err(e) = self
            .preference
            .save_scheme(&mut self.store, &self.config.storage, &scheme)
        {
            log::warn!("Could not persist scheme '{}': {}", scheme, e);
        }
        self.transliterate(host, &scheme)
    }

    fn show_all_toggled<H: PageHost>(&mut self, host: &mut H) {
        let show_all = host
            .is_checked(&self.config.show_all_checkbox())
            .unwrap_or(false);

        if let Err(e) = self
            .preference
            .save_show_all(&mut self.store, &self.config.storage, show_all)
        {
            log::warn!("Could not persist show-all: {}", e);
        }
        self.populate_schemes(host, show_all);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MockElement, MockPage, Target};
    use crate::preferences::MemoryStore;
    use crate::transliteration::ConversionError;

    struct Tagging;

    impl SchemeConverter for Tagging {
        fn convert(&self, text: &str, _: &str, to: &str) -> std::result::Result<String, ConversionError> {
            Ok(format!("[{}]{}", to, text))
        }
    }

    fn page() -> MockPage {
        MockPage::new()
            .with(MockElement::new("div").id("content").html("<p>rāma</p>"))
            .with(MockElement::new("select").id("transliteration-scheme"))
            .with(MockElement::new("input").id("show-all-schemes-checkbox"))
    }

    #[test]
    fn test_attach_without_content_disables_transliteration() {
        let mut page = MockPage::new().with(MockElement::new("select").id("transliteration-scheme"));
        let controller =
            PageController::attach(&mut page, ViewerConfig::default(), Tagging, MemoryStore::new())
                .unwrap();
        assert!(controller.transliterator().is_none());
        assert!(controller.subscriptions().is_empty());
        assert!(page.by_id("transliteration-scheme").unwrap().options.is_empty());
    }

    #[test]
    fn test_attach_restores_stored_scheme() {
        let mut page = page();
        let store = MemoryStore::new().with("selectedTransliterationScheme", "hk");
        let controller =
            PageController::attach(&mut page, ViewerConfig::default(), Tagging, store).unwrap();

        assert_eq!(page.by_id("content").unwrap().inner_html, "<p>[hk]rāma</p>");
        assert_eq!(page.by_id("transliteration-scheme").unwrap().value, "hk");
        assert_eq!(controller.transliterator().unwrap().original(), "<p>rāma</p>");
    }

    #[test]
    fn test_invalid_registry_fails_attach() {
        let config = ViewerConfig {
            default_schemes: vec!["nope".to_string()],
            ..Default::default()
        };
        let result = PageController::attach(&mut page(), config, Tagging, MemoryStore::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_transliterate_without_content_is_noop() {
        let mut page = MockPage::new();
        let mut controller =
            PageController::attach(&mut page, ViewerConfig::default(), Tagging, MemoryStore::new())
                .unwrap();
        controller.transliterate(&mut page, "hk").unwrap();
        assert_eq!(page.inner_html_writes, 0);
    }

    #[test]
    fn test_slider_action_reads_slider() {
        let mut page = MockPage::new().with(MockElement::new("input").id("width-slider").value("2"));
        let mut controller =
            PageController::attach(&mut page, ViewerConfig::default(), Tagging, MemoryStore::new())
                .unwrap();

        page.by_id_mut("width-slider").unwrap().value = "0".to_string();
        controller.handle(&mut page, Action::WidthSliderMoved).unwrap();
        assert_eq!(page.css_variables["--verse-spacing"], "0em");
        assert!(page.has_class(&Target::Body, "no-verse-padding"));
    }
}
