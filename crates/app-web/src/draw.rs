//! Canvas2D style setters and tiny paint helpers.
//!
//! Styles go through `Reflect` so the same code works across web-sys
//! releases that renamed the fill/stroke style setters.

use wasm_bindgen::JsValue;
use web_sys as web;

pub fn fill_style(ctx: &web::CanvasRenderingContext2d, value: &str) {
    _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(value),
    );
}

pub fn stroke_style(ctx: &web::CanvasRenderingContext2d, value: &str) {
    _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(value),
    );
}

pub fn fill_style_gradient(ctx: &web::CanvasRenderingContext2d, gradient: &web::CanvasGradient) {
    _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        gradient.as_ref(),
    );
}

/// Stroke a single line segment with the current style.
pub fn line(ctx: &web::CanvasRenderingContext2d, x0: f64, y0: f64, x1: f64, y1: f64) {
    ctx.begin_path();
    ctx.move_to(x0, y0);
    ctx.line_to(x1, y1);
    ctx.stroke();
}

pub fn hsla(hue: f32, alpha: f32) -> String {
    format!("hsla({:.0}, 80%, 65%, {:.3})", hue, alpha.clamp(0.0, 1.0))
}
