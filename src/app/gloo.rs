//! WASM application implementation
//!
//! Attaches the two page flows to the browser document: one listener on the
//! add form and one delegated submit listener on `<body>`.

use std::rc::Rc;

use log::LevelFilter;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{DocumentReadyState, Element, Event};

use super::{claim_mount, AddStudent, DeleteConfirmation};
use crate::client::gloo::WasmClient;
use crate::config::PageConfig;
use crate::dom::web::WebPage;
use crate::error::{Error, ErrorKind, Result};
use crate::interface::HttpClient;
use crate::logging::init_logger;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logger(LevelFilter::Info);
}

/// Attach the page handlers, with an optional JSON configuration override
///
/// Waits for `DOMContentLoaded` if the document is still loading. Only the
/// first call with a valid configuration attaches anything; later calls log
/// a warning.
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> core::result::Result<(), JsValue> {
    let config = match config_json {
        Some(json) => PageConfig::from_json(&json).map_err(to_js)?,
        None => PageConfig::default(),
    };
    let page = WebPage::new().map_err(to_js)?;

    if !claim_mount() {
        log::warn!("page handlers are already mounted");
        return Ok(());
    }

    if page.document().ready_state() != DocumentReadyState::Loading {
        return attach(page, config).map_err(to_js);
    }

    let document = page.document().clone();
    let on_ready = Closure::once(move || {
        if let Err(e) = attach(page, config) {
            log::error!("failed to attach page handlers: {}", e);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

fn attach(page: WebPage, config: PageConfig) -> Result<()> {
    if let Some(form) = page.form(&config.dom.add_form) {
        let client = WasmClient::new("", &config.endpoints)?;
        let flow = Rc::new(AddStudent::new(client, config.clone()));
        let form_page = page.clone();

        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let flow = Rc::clone(&flow);
            let page = form_page.clone();
            spawn_local(async move {
                flow.submit(&page).await;
            });
        });
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();
    } else {
        log::debug!("no #{} on this page", config.dom.add_form);
    }

    let body = page
        .document()
        .body()
        .ok_or_else(|| ErrorKind::DomError("document has no body".to_string()))?;
    let confirmation = DeleteConfirmation::new(&config);
    let body_page = page.clone();

    let on_any_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if confirmation.on_submit(&body_page, &target).prevents_default() {
            event.prevent_default();
        }
    });
    body.add_event_listener_with_callback("submit", on_any_submit.as_ref().unchecked_ref())?;
    on_any_submit.forget();

    log::debug!("page handlers attached");
    Ok(())
}

fn to_js(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}
