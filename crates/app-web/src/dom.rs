//! Small DOM helpers shared by both subsystems.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

#[inline]
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Touch-primary probe: the cursor subsystem is disabled outright on such
/// devices rather than attempting hybrid touch+mouse handling.
pub fn is_touch_device() -> bool {
    match web::window() {
        Some(w) => {
            let has_touch_start =
                js_sys::Reflect::has(w.as_ref(), &"ontouchstart".into()).unwrap_or(false);
            has_touch_start && w.navigator().max_touch_points() > 0
        }
        None => false,
    }
}

/// Size the backing store to CSS size * devicePixelRatio and apply the
/// matching context scale, so draw code works in CSS pixels. Returns the CSS
/// size. Safe to call repeatedly: setting the canvas width resets the
/// context transform before the scale is applied.
pub fn sync_scaled_backing(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> (f32, f32) {
    let Some(w) = web::window() else {
        return (canvas.width() as f32, canvas.height() as f32);
    };
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    _ = ctx.scale(dpr, dpr);
    (rect.width() as f32, rect.height() as f32)
}

/// CSS-pixel size of an already-synced canvas.
pub fn css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .max(0.1);
    (
        (canvas.width() as f64 / dpr) as f32,
        (canvas.height() as f64 / dpr) as f32,
    )
}

/// Size a full-viewport overlay canvas 1:1 with the window, preserving any
/// existing drawing state owned by the caller.
pub fn sync_viewport_canvas(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let vw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let vh = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width(vw.max(1.0) as u32);
        canvas.set_height(vh.max(1.0) as u32);
    }
}

/// One-shot deferred callback on the next tick (or after `ms`).
pub fn set_timeout(f: impl FnOnce() + 'static, ms: i32) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

/// An event listener that deregisters itself when dropped. Subsystem handles
/// keep these alive for their mounted lifetime so teardown is synchronous
/// and leaves no callbacks behind.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        f: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
