//! Drive simulation wiring: keyboard/scroll/resize listeners, the gated
//! frame loop, HUD republish and the host-facing `DriveSim` handle.

use crate::{dom, frame, hud, render};
use anyhow::anyhow;
use app_core::constants::DT_MAX_SEC;
use app_core::{DriveInput, SceneState, Theme, Viewport};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct DriveShared {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    /// Section whose bottom edge gates the scroll-pause; the canvas itself
    /// when no enclosing <section> exists.
    section: web::Element,
    scene: RefCell<SceneState>,
    key_left: Cell<bool>,
    key_right: Cell<bool>,
    theme: Cell<Theme>,
    last_frame: Cell<Option<Instant>>,
    /// True while a frame-callback chain is scheduled; the chain stops
    /// itself after one static paint when the scene leaves Running.
    loop_active: Cell<bool>,
    /// True only when the current pause was scroll-induced, so scrolling
    /// back never resumes a deliberately paused simulation.
    scroll_paused: Cell<bool>,
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    on_start: Option<js_sys::Function>,
    on_running_change: Option<js_sys::Function>,
}

impl DriveShared {
    /// Single unconditional paint entry point: used by the loop, the Intro
    /// first frame, and one-off repaints on resize/theme change.
    fn paint(&self) {
        let (w, h) = dom::css_size(&self.canvas);
        let scene = self.scene.borrow();
        render::paint(&self.ctx, &Viewport::new(w, h), &scene, self.theme.get());
    }

    fn notify_running(&self, running: bool) {
        if let Some(f) = &self.on_running_change {
            _ = f.call1(&JsValue::NULL, &JsValue::from_bool(running));
        }
    }
}

/// Restart the frame-callback chain if it is not already scheduled.
fn ensure_loop(shared: &Rc<DriveShared>) {
    if shared.loop_active.get() || !shared.alive.get() {
        return;
    }
    shared.loop_active.set(true);
    shared.last_frame.set(None);
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

        if s.scene.borrow().is_running() {
            let input = DriveInput {
                left: s.key_left.get(),
                right: s.key_right.get(),
            };
            let snapshot = s.scene.borrow_mut().step(dt, input);
            s.paint();
            if let Some(h) = snapshot {
                if let Some(doc) = dom::window_document() {
                    hud::update(&doc, h);
                }
            }
            true
        } else {
            // One final static frame; the chain stops until the next
            // transition back to Running.
            s.paint();
            s.loop_active.set(false);
            false
        }
    });
}

/// React to a Running/Paused flip reported by the scene.
fn on_phase_change(shared: &Rc<DriveShared>, changed: Option<bool>) {
    if let Some(running) = changed {
        log::info!("[drive] running={}", running);
        shared.notify_running(running);
        if running {
            ensure_loop(shared);
        }
    }
}

/// Pausable retro drive background bound to a host canvas.
///
/// The host supplies the canvas id, the initial theme flag and two optional
/// hooks: `on_start` fires once on the explicit Intro -> Running start, and
/// `on_running_change(bool)` fires on every Running/Paused flip.
#[wasm_bindgen]
pub struct DriveSim {
    shared: Rc<DriveShared>,
    listeners: Vec<dom::Listener>,
}

#[wasm_bindgen]
impl DriveSim {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        dark: bool,
        on_start: Option<js_sys::Function>,
        on_running_change: Option<js_sys::Function>,
    ) -> Result<DriveSim, JsValue> {
        build(canvas_id, dark, on_start, on_running_change).map_err(|e| {
            log::error!("[drive] init failed: {e:?}");
            JsValue::from_str(&format!("{e:?}"))
        })
    }

    /// Explicit Intro -> Running start (one-way).
    pub fn start(&self) {
        let started = self.shared.scene.borrow_mut().start();
        if started {
            log::info!("[drive] started");
            if let Some(f) = &self.shared.on_start {
                _ = f.call0(&JsValue::NULL);
            }
            self.shared.notify_running(true);
            ensure_loop(&self.shared);
        }
    }

    /// Running <-> Paused. A deliberate toggle always clears any
    /// scroll-induced pause bookkeeping.
    pub fn toggle(&self) {
        self.shared.scroll_paused.set(false);
        let changed = self.shared.scene.borrow_mut().toggle_pause();
        on_phase_change(&self.shared, changed);
    }

    pub fn is_running(&self) -> bool {
        self.shared.scene.borrow().is_running()
    }

    /// Theme flips repaint immediately even while static (Intro/Paused).
    pub fn set_theme(&self, dark: bool) {
        self.shared.theme.set(Theme::from_dark(dark));
        if !self.shared.loop_active.get() {
            self.shared.paint();
        }
    }

    /// Synchronously deregister listeners and cancel the frame callback.
    pub fn destroy(&mut self) {
        self.shared.alive.set(false);
        frame::cancel_raf(&self.shared.raf_id);
        self.listeners.clear();
        log::info!("[drive] destroyed");
    }
}

fn build(
    canvas_id: &str,
    dark: bool,
    on_start: Option<js_sys::Function>,
    on_running_change: Option<js_sys::Function>,
) -> anyhow::Result<DriveSim> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    let canvas =
        dom::canvas_by_id(&document, canvas_id).ok_or_else(|| anyhow!("missing #{canvas_id}"))?;
    let ctx = dom::context_2d(&canvas).ok_or_else(|| anyhow!("no 2d context"))?;
    dom::sync_scaled_backing(&canvas, &ctx);

    let section = canvas
        .closest("section")
        .ok()
        .flatten()
        .unwrap_or_else(|| canvas.clone().into());

    let seed = js_sys::Date::now() as u64;
    let shared = Rc::new(DriveShared {
        canvas,
        ctx,
        section,
        scene: RefCell::new(SceneState::new(seed)),
        key_left: Cell::new(false),
        key_right: Cell::new(false),
        theme: Cell::new(Theme::from_dark(dark)),
        last_frame: Cell::new(None),
        loop_active: Cell::new(false),
        scroll_paused: Cell::new(false),
        alive: Rc::new(Cell::new(true)),
        raf_id: Rc::new(Cell::new(0)),
        on_start,
        on_running_change,
    });

    let mut listeners = Vec::new();
    let win_target: &web::EventTarget = window.as_ref();

    {
        let s = shared.clone();
        listeners.push(dom::Listener::new(win_target, "keydown", move |ev| {
            let ev: web::KeyboardEvent = ev.unchecked_into();
            match ev.key().as_str() {
                "ArrowLeft" | "a" | "A" => s.key_left.set(true),
                "ArrowRight" | "d" | "D" => s.key_right.set(true),
                " " => {
                    s.scroll_paused.set(false);
                    let changed = s.scene.borrow_mut().toggle_pause();
                    if changed.is_some() {
                        ev.prevent_default();
                    }
                    on_phase_change(&s, changed);
                }
                _ => {}
            }
        }));
    }
    {
        let s = shared.clone();
        listeners.push(dom::Listener::new(win_target, "keyup", move |ev| {
            let ev: web::KeyboardEvent = ev.unchecked_into();
            match ev.key().as_str() {
                "ArrowLeft" | "a" | "A" => s.key_left.set(false),
                "ArrowRight" | "d" | "D" => s.key_right.set(false),
                _ => {}
            }
        }));
    }
    {
        // Pause when the hosting section scrolls out above the viewport;
        // resume only if this subsystem caused the pause.
        let s = shared.clone();
        listeners.push(dom::Listener::new(win_target, "scroll", move |_| {
            let scrolled_out = s.section.get_bounding_client_rect().bottom() <= 0.0;
            if scrolled_out {
                if s.scene.borrow().is_running() {
                    let changed = s.scene.borrow_mut().set_paused(true);
                    if changed.is_some() {
                        s.scroll_paused.set(true);
                    }
                    on_phase_change(&s, changed);
                }
            } else if s.scroll_paused.get() {
                s.scroll_paused.set(false);
                let changed = s.scene.borrow_mut().set_paused(false);
                on_phase_change(&s, changed);
            }
        }));
    }
    {
        let s = shared.clone();
        listeners.push(dom::Listener::new(win_target, "resize", move |_| {
            dom::sync_scaled_backing(&s.canvas, &s.ctx);
            if !s.loop_active.get() {
                s.paint();
            }
        }));
    }

    // Intro: one static paint at time 0.
    shared.paint();
    log::info!("[drive] wired to #{canvas_id}");

    Ok(DriveSim { shared, listeners })
}
