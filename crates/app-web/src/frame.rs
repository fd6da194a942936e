//! requestAnimationFrame loop with explicit cancellation and a cooperative
//! reschedule gate.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Start a frame loop. `tick` runs once per animation frame and returns
/// whether the loop should reschedule itself; returning false ends the
/// callback chain (the owner restarts it on the next state transition).
/// `alive` is the hard teardown gate and `raf_id` always holds the most
/// recent request id so the owner can cancel synchronously.
pub fn start_raf_loop(
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    mut tick: impl FnMut() -> bool + 'static,
) {
    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle_clone = handle.clone();
    let raf_for_tick = raf_id.clone();
    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive.get() || !tick() {
            return;
        }
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                handle_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_for_tick.set(id);
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(handle.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }
}

/// Cancel whatever frame request is currently pending.
pub fn cancel_raf(raf_id: &Cell<i32>) {
    if let Some(w) = web::window() {
        _ = w.cancel_animation_frame(raf_id.get());
    }
}
