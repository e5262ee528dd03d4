use super::NavWiring;
use crate::core::{wheel_intent, NavIntent, SwipeTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Listener options that allow `prevent_default` on scroll gestures.
fn non_passive() -> web::AddEventListenerOptions {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    opts
}

pub fn wire_wheel(w: &NavWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        if w.is_transitioning() {
            return;
        }
        if let Some(intent) = wheel_intent(ev.delta_y()) {
            w.navigate(intent);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &non_passive(),
    );
    closure.forget();
}

fn first_touch_y(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_y() as f32)
}

pub fn wire_touch(w: &NavWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let tracker = Rc::new(RefCell::new(SwipeTracker::default()));

    let tracker_start = tracker.clone();
    let start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(y) = first_touch_y(&ev) {
            tracker_start.borrow_mut().begin(y);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref());
    start.forget();

    let w = w.clone();
    let moved = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        if w.is_transitioning() {
            return;
        }
        let Some(y) = first_touch_y(&ev) else {
            return;
        };
        let intent = tracker.borrow_mut().moved(y);
        if let Some(intent) = intent {
            w.navigate(intent);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        moved.as_ref().unchecked_ref(),
        &non_passive(),
    );
    moved.forget();
}

pub fn wire_dots(w: &NavWiring) {
    for (index, dot) in w.dots.iter().enumerate() {
        let w_dot = w.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            if w_dot.navigate(NavIntent::Goto(index)) {
                log::debug!("[nav] dot {} clicked", index);
            }
        }) as Box<dyn FnMut(_)>);
        _ = dot.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
