use crate::core::{MeshCapacity, PageDriver, SceneMesh};
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// State the display callback owns. The canvas and GPU arrive after the loop
/// is already running and stay `None` if they never become available.
pub struct FrameContext<'a> {
    pub driver: PageDriver,
    pub sections: Rc<Vec<web::HtmlElement>>,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    /// One display-frame callback. `now_ms` is the animation-frame timestamp.
    pub fn frame(&mut self, now_ms: f64) {
        let time_sec = self.started.elapsed().as_secs_f32();
        let Some(update) = self.driver.step(now_ms, time_sec) else {
            return;
        };

        if update.sections_changed {
            let nav = self.driver.navigator().borrow();
            dom::apply_sections(&self.sections, nav.sections(), nav.style());
        }

        if let (Some(g), Some(canvas)) = (&mut self.gpu, &self.canvas) {
            g.resize_if_needed(canvas.width(), canvas.height());
            let scene = self.driver.scene().borrow();
            if let Err(e) = g.render(&scene, &update.camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    mesh: SceneMesh,
    capacity: MeshCapacity,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, mesh, capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_ctx_tick.borrow_mut().frame(now_ms);
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
