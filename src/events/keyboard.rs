use super::NavWiring;
use crate::core::key_intent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, w: &NavWiring) {
    let key = ev.key();
    if let Some(intent) = key_intent(&key) {
        // navigation keys never scroll the page, even at the first/last section
        ev.prevent_default();
        w.navigate(intent);
    }
}

pub fn wire_keydown(w: &NavWiring) {
    if let Some(window) = web::window() {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &w);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
