//! Text Viewer WASM Module
//!
//! Page behaviors for the rich-text document viewer: collapsible panels,
//! correction overlays, verse layout controls and cached script
//! transliteration of the document content.

pub mod api;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod host;
pub mod page;
pub mod preferences;
pub mod schemes;
pub mod transliteration;

// Re-export commonly used types
pub use api::ViewerPage;
pub use config::ViewerConfig;
pub use error::{RegistryError, ViewerError};
pub use host::{MockElement, MockPage, PageHost, Target};
pub use page::{Action, PageController};
pub use preferences::{MemoryStore, PreferenceStore, UserPreference};
pub use schemes::{SchemeGroup, SchemeRegistry};
pub use transliteration::{SchemeConverter, Transliterator};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second initialization fails harmlessly; the first logger stays installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Text viewer WASM module initialized");
}
