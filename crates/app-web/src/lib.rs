#![cfg(target_arch = "wasm32")]
//! Web front-end for the portfolio animation core.
//!
//! Exposes two independent subsystems to the hosting page:
//! [`cursor::CursorFx`] (pointer trail + click sparks on a full-viewport
//! overlay canvas) and [`drive::DriveSim`] (the retro drive background on a
//! host-provided canvas). Both are leaf components; the page composes them
//! and supplies only mount points and a theme flag.

pub mod cursor;
pub mod dom;
pub mod draw;
pub mod drive;
pub mod frame;
pub mod hud;
pub mod render;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");
    Ok(())
}
