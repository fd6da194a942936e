//! Cursor trail and click-spark wiring: a full-viewport overlay canvas, a
//! ship glyph at the pointer, and the project-target hit notification.

use crate::{dom, draw, frame};
use anyhow::anyhow;
use app_core::constants::DT_MAX_SEC;
use app_core::{spark_burst, step_sparks, Spark, TrailBuffer};
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const HIT_EVENT: &str = "laser-hit";
const TARGET_SELECTOR: &str = "[data-project-id]";
const TARGET_ATTR: &str = "data-project-id";
const SHAKE_CLASS: &str = "screen-shake";
const SHAKE_DURATION_MS: i32 = 100;
const CANVAS_STYLE: &str = "position:fixed;inset:0;z-index:99998;pointer-events:none;";

struct CursorShared {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    trail: RefCell<TrailBuffer>,
    sparks: RefCell<Vec<Spark>>,
    rng: RefCell<StdRng>,
    /// Pointer position for the ship glyph; None until the pointer enters
    /// the page (and again after it leaves).
    pointer: Cell<Option<Vec2>>,
    last_frame: Cell<Option<Instant>>,
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
}

/// Decorative cursor replacement. Inert on touch-primary devices: no
/// canvas, no listeners, no frame loop.
#[wasm_bindgen]
pub struct CursorFx {
    shared: Option<Rc<CursorShared>>,
    listeners: Vec<dom::Listener>,
}

#[wasm_bindgen]
impl CursorFx {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<CursorFx, JsValue> {
        if dom::is_touch_device() {
            log::info!("[cursor] touch-primary device; cursor effects disabled");
            return Ok(CursorFx {
                shared: None,
                listeners: Vec::new(),
            });
        }
        build().map_err(|e| {
            log::error!("[cursor] init failed: {e:?}");
            JsValue::from_str(&format!("{e:?}"))
        })
    }

    /// Synchronously deregister listeners, cancel the frame callback and
    /// remove the overlay canvas.
    pub fn destroy(&mut self) {
        self.listeners.clear();
        if let Some(shared) = self.shared.take() {
            shared.alive.set(false);
            frame::cancel_raf(&shared.raf_id);
            shared.canvas.remove();
            log::info!("[cursor] destroyed");
        }
    }
}

fn build() -> anyhow::Result<CursorFx> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {e:?}"))?
        .dyn_into()
        .map_err(|_| anyhow!("not a canvas"))?;
    _ = canvas.set_attribute("style", CANVAS_STYLE);
    body.append_child(&canvas)
        .map_err(|e| anyhow!("mount canvas: {e:?}"))?;
    dom::sync_viewport_canvas(&canvas);
    let ctx = dom::context_2d(&canvas).ok_or_else(|| anyhow!("no 2d context"))?;

    let shared = Rc::new(CursorShared {
        canvas,
        ctx,
        trail: RefCell::new(TrailBuffer::new()),
        sparks: RefCell::new(Vec::new()),
        rng: RefCell::new(StdRng::seed_from_u64(js_sys::Date::now() as u64)),
        pointer: Cell::new(None),
        last_frame: Cell::new(None),
        alive: Rc::new(Cell::new(true)),
        raf_id: Rc::new(Cell::new(0)),
    });

    let mut listeners = Vec::new();
    let win_target: &web::EventTarget = window.as_ref();
    let doc_target: &web::EventTarget = document.as_ref();

    {
        let s = shared.clone();
        listeners.push(dom::Listener::new(win_target, "mousemove", move |ev| {
            let ev: web::MouseEvent = ev.unchecked_into();
            let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            s.trail.borrow_mut().push_sample(pos);
            s.pointer.set(Some(pos));
        }));
    }
    {
        let s = shared.clone();
        listeners.push(dom::Listener::new(doc_target, "mouseleave", move |_| {
            s.pointer.set(None);
        }));
    }
    {
        let s = shared.clone();
        let doc = document.clone();
        listeners.push(dom::Listener::new(win_target, "click", move |ev| {
            let ev: web::MouseEvent = ev.unchecked_into();
            handle_click(&s, &doc, &ev);
        }));
    }
    {
        let s = shared.clone();
        listeners.push(dom::Listener::new(win_target, "resize", move |_| {
            // Reallocate the backing store; trail/spark state is preserved.
            dom::sync_viewport_canvas(&s.canvas);
        }));
    }

    start_loop(&shared);
    log::info!("[cursor] wired");

    Ok(CursorFx {
        shared: Some(shared),
        listeners,
    })
}

/// Click over a project target: shake, spark burst, then the bubbling hit
/// event one tick later so the target's own click handler runs first.
fn handle_click(shared: &Rc<CursorShared>, document: &web::Document, ev: &web::MouseEvent) {
    let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
    let Some(hit) = document.element_from_point(x, y) else {
        return;
    };
    let Some(target) = hit.closest(TARGET_SELECTOR).ok().flatten() else {
        return;
    };

    if let Some(body) = document.body() {
        _ = body.class_list().add_1(SHAKE_CLASS);
        let body = body.clone();
        dom::set_timeout(
            move || {
                _ = body.class_list().remove_1(SHAKE_CLASS);
            },
            SHAKE_DURATION_MS,
        );
    }

    let burst = spark_burst(&mut *shared.rng.borrow_mut(), Vec2::new(x, y));
    shared.sparks.borrow_mut().extend(burst);

    dom::set_timeout(
        move || {
            let Some(id) = target.get_attribute(TARGET_ATTR) else {
                return;
            };
            let init = web::CustomEventInit::new();
            init.set_bubbles(true);
            init.set_detail(&JsValue::from_str(&id));
            if let Ok(event) = web::CustomEvent::new_with_event_init_dict(HIT_EVENT, &init) {
                _ = target.dispatch_event(&event);
            }
        },
        0,
    );
}

fn start_loop(shared: &Rc<CursorShared>) {
    let s = shared.clone();
    frame::start_raf_loop(shared.alive.clone(), shared.raf_id.clone(), move || {
        let now = Instant::now();
        let dt = s
            .last_frame
            .get()
            .map(|prev| (now - prev).as_secs_f32())
            .unwrap_or(0.0)
            .min(DT_MAX_SEC);
        s.last_frame.set(Some(now));

        let ctx = &s.ctx;
        ctx.clear_rect(0.0, 0.0, s.canvas.width() as f64, s.canvas.height() as f64);

        {
            let mut trail = s.trail.borrow_mut();
            trail.decay(dt);
            for seg in trail.segments() {
                paint_trail_segment(ctx, &seg);
            }
        }
        {
            let mut sparks = s.sparks.borrow_mut();
            step_sparks(&mut sparks, dt);
            for spark in sparks.iter() {
                paint_spark(ctx, spark);
            }
        }
        if let Some(pos) = s.pointer.get() {
            paint_ship(ctx, pos);
        }
        true
    });
}

/// Two overlaid strokes per segment fake a glow without a compositing blur
/// pass: a wide soft bloom stroke under a narrow bright core.
fn paint_trail_segment(ctx: &web::CanvasRenderingContext2d, seg: &app_core::TrailSegment) {
    let alpha = seg.alpha;
    ctx.save();
    ctx.set_global_alpha(alpha as f64);
    ctx.set_line_cap("round");

    // Bloom
    ctx.set_shadow_color(&format!("rgba(232,121,249,{:.3})", alpha * 0.6));
    ctx.set_shadow_blur((10.0 + seg.taper * 6.0) as f64);
    draw::stroke_style(ctx, &format!("rgba(232,121,249,{:.3})", alpha));
    ctx.set_line_width((seg.width + 2.0) as f64);
    draw::line(
        ctx,
        seg.a.x as f64,
        seg.a.y as f64,
        seg.b.x as f64,
        seg.b.y as f64,
    );

    // Core
    ctx.set_shadow_blur(4.0);
    ctx.set_shadow_color(&format!("rgba(255,180,255,{:.3})", alpha * 0.5));
    draw::stroke_style(ctx, &format!("rgba(255,200,255,{:.3})", alpha * 0.9));
    ctx.set_line_width((seg.width * 0.5) as f64);
    draw::line(
        ctx,
        seg.a.x as f64,
        seg.a.y as f64,
        seg.b.x as f64,
        seg.b.y as f64,
    );

    ctx.restore();
}

/// Sparks render as short radial streaks trailing the velocity vector.
fn paint_spark(ctx: &web::CanvasRenderingContext2d, spark: &Spark) {
    let alpha = spark.life.max(0.0);
    let tail = spark.pos - spark.velocity().normalize_or_zero() * spark.streak_len();
    ctx.save();
    ctx.set_global_alpha(alpha as f64);
    ctx.set_shadow_color(&draw::hsla(spark.hue, alpha));
    ctx.set_shadow_blur(8.0);
    ctx.set_line_cap("round");
    ctx.set_line_width((spark.size * 0.8) as f64);
    draw::stroke_style(ctx, &draw::hsla(spark.hue, alpha));
    draw::line(
        ctx,
        spark.pos.x as f64,
        spark.pos.y as f64,
        tail.x as f64,
        tail.y as f64,
    );
    ctx.restore();
}

/// Ship-like glyph standing in for the native cursor (which the host page
/// hides via CSS).
fn paint_ship(ctx: &web::CanvasRenderingContext2d, pos: Vec2) {
    let (x, y) = ((pos.x - 10.0) as f64, (pos.y - 10.0) as f64);
    ctx.save();
    ctx.set_shadow_color("rgba(232,121,249,0.9)");
    ctx.set_shadow_blur(6.0);

    // Hull
    draw::fill_style(ctx, "rgba(232,121,249,0.7)");
    ctx.begin_path();
    ctx.move_to(x + 10.0, y + 1.0);
    ctx.line_to(x + 18.0, y + 20.0);
    ctx.line_to(x + 14.0, y + 17.0);
    ctx.line_to(x + 10.0, y + 22.0);
    ctx.line_to(x + 6.0, y + 17.0);
    ctx.line_to(x + 2.0, y + 20.0);
    ctx.close_path();
    ctx.fill();

    // Cockpit
    ctx.set_shadow_blur(0.0);
    draw::fill_style(ctx, "rgba(34,211,238,0.5)");
    ctx.begin_path();
    ctx.move_to(x + 10.0, y + 6.0);
    ctx.line_to(x + 13.0, y + 15.0);
    ctx.line_to(x + 7.0, y + 15.0);
    ctx.close_path();
    ctx.fill();

    ctx.restore();
}
