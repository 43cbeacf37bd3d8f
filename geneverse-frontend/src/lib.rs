//! Browser entry point for the Geneverse pages.
//!
//! One wasm module serves every page. On DOM ready it looks for the elements
//! each feature needs and switches on only what is present: the genes table,
//! the traits table, the analytics charts and the chat panel. It also marks
//! the sidebar link for the current page.

pub mod api;
pub mod charts;
pub mod chat;
pub mod dom;
pub mod error;
pub mod tables;

use geneverse_core::nav::{ACTIVE_CLASS, NAV_LINK_SELECTOR};
use geneverse_core::table::TableKind;
use geneverse_core::{ids, is_active_link, PageConfig};
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

pub use error::UiError;

/// Defaults overridden by `GENEVERSE_API_BASE` / `GENEVERSE_SESSION_KEY`
/// globals, when the hosting page defines them.
pub fn page_config() -> PageConfig {
    let mut config = PageConfig::default();
    if let Some(base) = dom::read_global("GENEVERSE_API_BASE") {
        config = config.with_api_base(base);
    }
    if let Some(key) = dom::read_global("GENEVERSE_SESSION_KEY") {
        config = config.with_session_key(key);
    }
    config
}

fn highlight_nav() -> Result<(), UiError> {
    let path = dom::window()?.location().pathname()?;
    let links = dom::document()?.query_selector_all(NAV_LINK_SELECTOR)?;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let classes = link.class_list();
        classes.remove_1(ACTIVE_CLASS)?;
        if is_active_link(link.get_attribute("href").as_deref(), &path) {
            classes.add_1(ACTIVE_CLASS)?;
        }
    }
    Ok(())
}

/// Runs every feature whose trigger element is on the page.
pub fn activate_page() {
    let config = page_config();
    log::debug!("activating page with api base {}", config.api_base);

    if dom::has_element(ids::GENES_TABLE_BODY) {
        spawn_local(tables::load_table(config.clone(), TableKind::Genes));
    }
    if dom::has_element(ids::TRAITS_TABLE_BODY) {
        spawn_local(tables::load_table(config.clone(), TableKind::Traits));
    }
    if dom::has_element(ids::PIE_CHART) {
        spawn_local(charts::load_analytics_charts(config.clone()));
    }
    if dom::has_element(ids::CHAT_WINDOW) {
        if let Err(err) = chat::setup_chatbot(&config) {
            log::error!("could not set up chat panel: {err}");
        }
    }
    if let Err(err) = highlight_nav() {
        log::warn!("could not highlight navigation: {err}");
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn on_dom_ready(f: impl FnOnce() + 'static) -> Result<(), UiError> {
    let doc = dom::document()?;
    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let cb = Closure::once(f);
    doc.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging();
    on_dom_ready(activate_page)?;
    Ok(())
}
