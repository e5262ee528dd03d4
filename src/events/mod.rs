pub mod keyboard;
pub mod language;
pub mod pointer;

use crate::core::{NavIntent, SectionNavigator};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handles every navigation input adapter needs.
#[derive(Clone)]
pub struct NavWiring {
    pub navigator: Rc<RefCell<SectionNavigator>>,
    pub sections: Rc<Vec<web::HtmlElement>>,
    pub dots: Rc<Vec<web::HtmlElement>>,
}

impl NavWiring {
    /// Forward an intent to the navigator and, when accepted, mark the new
    /// section and its dot active right away. Styles follow from the frame loop.
    pub fn navigate(&self, intent: NavIntent) -> bool {
        let mut nav = self.navigator.borrow_mut();
        if !nav.handle(intent) {
            return false;
        }
        let current = nav.current_index();
        drop(nav);
        dom::set_exclusive_class(&self.dots, Some(current), "active");
        dom::set_exclusive_class(&self.sections, Some(current), "active");
        true
    }

    pub fn is_transitioning(&self) -> bool {
        self.navigator.borrow().is_transitioning()
    }
}

pub fn wire_navigation(w: &NavWiring) {
    keyboard::wire_keydown(w);
    pointer::wire_wheel(w);
    pointer::wire_touch(w);
    pointer::wire_dots(w);
}
