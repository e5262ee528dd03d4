use crate::constants::LOADING_FADE_MS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const LOADING_SCREEN_ID: &str = "loading-screen";

fn loading_screen(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(LOADING_SCREEN_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Fade the loading overlay out, then take it out of layout.
pub fn dismiss_loading(document: &web::Document) {
    let Some(el) = loading_screen(document) else {
        return;
    };
    _ = el.style().set_property("opacity", "0");
    let hide = Closure::once_into_js(move || {
        _ = el.style().set_property("display", "none");
    });
    if let Some(window) = web::window() {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            hide.unchecked_ref(),
            LOADING_FADE_MS,
        );
    }
}

/// Dismiss the loading overlay once the page has fully loaded.
pub fn wire_loading_dismiss(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    if document.ready_state() == "complete" {
        dismiss_loading(document);
        return;
    }
    let doc = document.clone();
    let closure = Closure::once_into_js(move || {
        dismiss_loading(&doc);
    });
    _ = window.add_event_listener_with_callback("load", closure.unchecked_ref());
}
