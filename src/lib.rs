#![cfg(target_arch = "wasm32")]
use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::core::{
    LanguageSwitcher, Layout, PageDriver, Scene, SceneMesh, SectionNavigator, TransitionStyle,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

/// Debounced resize: resync the canvas backing store and pick the shape layout.
fn wire_resize(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<Scene>>) {
    let Some(window) = web::window() else {
        return;
    };
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let canvas_resize = canvas.clone();
    let apply = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        scene
            .borrow_mut()
            .set_layout(Layout::for_viewport_width(dom::viewport_width()));
    }) as Box<dyn FnMut()>);

    let window_timer = window.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some(handle) = pending.take() {
            window_timer.clear_timeout_with_handle(handle);
        }
        match window_timer.set_timeout_with_callback_and_timeout_and_arguments_0(
            apply.as_ref().unchecked_ref(),
            RESIZE_DEBOUNCE_MS,
        ) {
            Ok(handle) => pending.set(Some(handle)),
            Err(e) => log::warn!("[scene] resize timer failed: {:?}", e),
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();
}

fn transition_style(document: &web::Document) -> TransitionStyle {
    let attr = document
        .body()
        .and_then(|b| b.get_attribute("data-transition"));
    TransitionStyle::from_attr(attr.as_deref())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    overlay::wire_loading_dismiss(&document);

    // Language switching touches only text, so it is wired before anything can fail.
    let switcher = Rc::new(RefCell::new(LanguageSwitcher::new()));
    let text = Rc::new(RefCell::new(dom::DocumentText::new(&document)));
    events::language::wire_language_buttons(&document, switcher, text);

    let sections = Rc::new(dom::query_all(&document, "section, footer"));
    let dots = Rc::new(dom::query_all(&document, ".nav-dot"));
    let style = transition_style(&document);
    let navigator = Rc::new(RefCell::new(SectionNavigator::new(sections.len(), style)));
    {
        let nav = navigator.borrow();
        dom::apply_sections(&sections, nav.sections(), nav.style());
        dom::set_exclusive_class(&dots, Some(nav.current_index()), "active");
    }
    log::info!(
        "[nav] sections={} dots={} style={:?}",
        sections.len(),
        dots.len(),
        style
    );

    events::wire_navigation(&events::NavWiring {
        navigator: navigator.clone(),
        sections: sections.clone(),
        dots,
    });

    // The loop runs without a canvas so navigation never waits on the GPU.
    let scene = Rc::new(RefCell::new(Scene::new(
        Layout::for_viewport_width(dom::viewport_width()),
        // fresh starfield per page load
        (js_sys::Math::random() * u32::MAX as f64) as u64,
    )));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver: PageDriver::new(navigator, scene.clone()),
        sections,
        canvas: None,
        gpu: None,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx.clone());

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("bg")
        .ok_or_else(|| anyhow::anyhow!("missing #bg"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);
    wire_resize(&canvas, scene.clone());
    frame_ctx.borrow_mut().canvas = Some(canvas.clone());

    // built up front so no scene borrow is held across the adapter await
    let (mesh, capacity) = {
        let scene = scene.borrow();
        let mesh = SceneMesh::new(&scene);
        let capacity = mesh.capacity(&scene);
        (mesh, capacity)
    };
    let gpu = frame::init_gpu(&canvas, mesh, capacity).await;
    frame_ctx.borrow_mut().gpu = gpu;
    Ok(())
}
