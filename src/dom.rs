use crate::constants::MAX_PIXEL_RATIO;
use crate::core::navigator::Section;
use crate::core::{Language, TextSlot, TextSurface, TransitionStyle};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Every element matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Toggle `class` so that only `elements[active]` carries it.
pub fn set_exclusive_class(elements: &[web::HtmlElement], active: Option<usize>, class: &str) {
    for (i, el) in elements.iter().enumerate() {
        _ = el
            .class_list()
            .toggle_with_force(class, Some(i) == active);
    }
}

/// Write section visuals and active classes to their DOM regions.
pub fn apply_sections(elements: &[web::HtmlElement], sections: &[Section], style: TransitionStyle) {
    for (el, section) in elements.iter().zip(sections) {
        _ = el.class_list().toggle_with_force("active", section.active);
        let css = el.style();
        match style {
            TransitionStyle::Fade => {
                _ = css.set_property("opacity", &format!("{:.3}", section.visual.opacity));
                _ = css.set_property(
                    "visibility",
                    if section.visual.visible {
                        "visible"
                    } else {
                        "hidden"
                    },
                );
            }
            TransitionStyle::Slide => {
                _ = css.set_property(
                    "transform",
                    &format!("translateY({:.2}%)", section.visual.offset_pct),
                );
            }
        }
    }
}

/// Text targets for the language switcher, resolved once at startup.
pub struct DocumentText {
    body: Option<web::HtmlElement>,
    slots: Vec<(TextSlot, web::Element)>,
    buttons: Vec<(Language, web::HtmlElement)>,
}

fn slot_selector(slot: TextSlot) -> &'static str {
    match slot {
        TextSlot::Biography => "#whoami-text",
        TextSlot::ExperienceTitle => "#experience h2",
        TextSlot::ManagementTitle => "#experience .card:nth-child(1) h3",
        TextSlot::ManagementDescription => "#experience .card:nth-child(1) p",
        TextSlot::DevelopmentTitle => "#experience .card:nth-child(2) h3",
        TextSlot::DevelopmentDescription => "#experience .card:nth-child(2) p",
        TextSlot::ContactTitle => "#contact h2",
        TextSlot::ContactMessage => "#contact .card > p",
    }
}

impl DocumentText {
    pub fn new(document: &web::Document) -> Self {
        let slots = TextSlot::ALL
            .iter()
            .filter_map(|slot| match document.query_selector(slot_selector(*slot)) {
                Ok(Some(el)) => Some((*slot, el)),
                _ => {
                    log::warn!("[lang] missing text target {:?}", slot);
                    None
                }
            })
            .collect();
        let buttons = query_all(document, ".lang-btn")
            .into_iter()
            .filter_map(|btn| {
                let lang = btn.dataset().get("lang").and_then(|c| Language::from_code(&c))?;
                Some((lang, btn))
            })
            .collect();
        Self {
            body: document.body(),
            slots,
            buttons,
        }
    }
}

impl TextSurface for DocumentText {
    fn set_text(&mut self, slot: TextSlot, text: &str) {
        for (s, el) in &self.slots {
            if *s == slot {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_rtl(&mut self, rtl: bool) {
        if let Some(body) = &self.body {
            body.set_dir(if rtl { "rtl" } else { "ltr" });
        }
    }

    fn set_selector_active(&mut self, language: Language, active: bool) {
        for (l, btn) in &self.buttons {
            if *l == language {
                _ = btn.class_list().toggle_with_force("active", active);
            }
        }
    }
}
