//! Dashboard configuration for the browser
//!
//! The host page may set `window.DASHBOARD_CONFIG` to a TOML string; anything
//! missing or invalid falls back to the configuration embedded in `contracts`.

use contracts::shared::config::{load_config, DashboardConfig};
use wasm_bindgen::JsValue;

const OVERRIDE_GLOBAL: &str = "DASHBOARD_CONFIG";

fn override_from_window() -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(OVERRIDE_GLOBAL))
        .ok()
        .and_then(|value| value.as_string())
}

pub fn load_dashboard_config() -> DashboardConfig {
    let Some(text) = override_from_window() else {
        return DashboardConfig::embedded().clone();
    };
    match load_config(Some(&text)) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{} ignored, using embedded config: {:#}", OVERRIDE_GLOBAL, e);
            DashboardConfig::embedded().clone()
        }
    }
}
