use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use super::CityPage;
use crate::config::PageConfig;
use crate::constants::ATTR_CONFIG;
use crate::dependency::{dom, BrowserFormSink, LocalThemeStore};
use crate::error::PageResult;

thread_local! {
    static PAGE: RefCell<Option<CityPage>> = RefCell::new(None);
}

/// Mounts the page with the config from `<body data-city-config>`, or the
/// defaults when the attribute is missing or malformed.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    install_hooks();
    let document = dom::document()?;
    let config = body_config(&document);
    schedule(document, config);
    Ok(())
}

/// Mounts the page with a config object passed from JavaScript
#[wasm_bindgen]
pub fn boot_with_config(config: JsValue) -> Result<(), JsValue> {
    install_hooks();
    let document = dom::document()?;
    let config: PageConfig = if config.is_undefined() || config.is_null() {
        PageConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(crate::error::PageError::from)?
    };
    schedule(document, config);
    Ok(())
}

/// Unbinds every listener and cancels pending timers
#[wasm_bindgen]
pub fn teardown() {
    PAGE.with(|slot| slot.borrow_mut().take());
}

fn install_hooks() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed by an earlier boot
    console_log::init_with_level(log::Level::Info).ok();
}

fn body_config(document: &Document) -> PageConfig {
    let raw = document
        .body()
        .and_then(|body| body.get_attribute(ATTR_CONFIG));
    match raw.as_deref().map(PageConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            log::warn!("{err}, using defaults");
            PageConfig::default()
        }
        None => PageConfig::default(),
    }
}

fn schedule(document: Document, config: PageConfig) {
    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_| {
            mount(document, config);
        })
        .forget();
    } else {
        mount(document, config);
    }
}

fn mount(document: Document, config: PageConfig) {
    match start(document, config) {
        Ok(page) => PAGE.with(|slot| *slot.borrow_mut() = Some(page)),
        Err(err) => log::error!("city page failed to mount: {err}"),
    }
}

fn start(document: Document, config: PageConfig) -> PageResult<CityPage> {
    let store = Rc::new(LocalThemeStore::new(config.storage_key.clone()));
    let sink = Rc::new(BrowserFormSink::new(document.clone()));
    CityPage::mount(document, config, store, sink)
}
