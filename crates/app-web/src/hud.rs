//! HUD readout elements owned by the host page. Missing elements are
//! ignored; the simulation does not require a HUD to run.

use app_core::HudSnapshot;
use web_sys as web;

pub const DISTANCE_ID: &str = "drive-distance";
pub const PASSED_ID: &str = "drive-passed";

pub fn update(document: &web::Document, hud: HudSnapshot) {
    if let Some(el) = document.get_element_by_id(DISTANCE_ID) {
        el.set_text_content(Some(&hud.distance.to_string()));
    }
    if let Some(el) = document.get_element_by_id(PASSED_ID) {
        el.set_text_content(Some(&hud.passed.to_string()));
    }
}
