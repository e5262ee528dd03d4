use crate::core::LanguageSwitcher;
use crate::dom::DocumentText;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Language code of the `.lang-btn` the click landed on, if any.
fn clicked_language(ev: &web::MouseEvent) -> Option<String> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let btn = target.closest(".lang-btn").ok()??;
    btn.get_attribute("data-lang")
}

/// Delegate clicks from the `.language-switcher` container to the switcher.
pub fn wire_language_buttons(
    document: &web::Document,
    switcher: Rc<RefCell<LanguageSwitcher>>,
    text: Rc<RefCell<DocumentText>>,
) {
    let Ok(Some(container)) = document.query_selector(".language-switcher") else {
        log::warn!("[lang] no .language-switcher container");
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(code) = clicked_language(&ev) {
            switcher
                .borrow_mut()
                .select_language(&code, &mut *text.borrow_mut());
        }
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
