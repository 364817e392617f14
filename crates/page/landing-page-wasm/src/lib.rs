use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use landing_page::{staggered_order, LinkClick, MobileNav as CoreNav, NavEffect, Throttle};

fn effects_to_js(effects: Vec<NavEffect>) -> Result<JsValue, JsError> {
    swb::to_value(&effects).map_err(|e| JsError::new(&format!("effects error: {e}")))
}

/// Mobile menu state; every method returns the list of effects to apply.
#[wasm_bindgen]
pub struct MobileNav {
    core: CoreNav,
}

#[wasm_bindgen]
impl MobileNav {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MobileNav {
        console_error_panic_hook::set_once();
        MobileNav {
            core: CoreNav::new(),
        }
    }

    #[wasm_bindgen(js_name = is_open)]
    pub fn is_open(&self) -> bool {
        self.core.is_open()
    }

    /// Icon class to show on the toggle button (`fa-bars` / `fa-times`).
    #[wasm_bindgen(js_name = icon_class)]
    pub fn icon_class(&self) -> String {
        self.core.icon().class().to_string()
    }

    #[wasm_bindgen]
    pub fn toggle(&mut self) -> Result<JsValue, JsError> {
        effects_to_js(self.core.toggle())
    }

    /// `section_top` is undefined when the href has no matching section.
    #[wasm_bindgen(js_name = click_link)]
    pub fn click_link(
        &mut self,
        href: String,
        section_top: Option<f64>,
        navbar_height: f64,
    ) -> Result<JsValue, JsError> {
        effects_to_js(self.core.click_link(&href, section_top, navbar_height))
    }

    #[wasm_bindgen(js_name = click_document)]
    pub fn click_document(&mut self, inside_navbar: bool) -> Result<JsValue, JsError> {
        effects_to_js(self.core.click_document(inside_navbar))
    }

    #[wasm_bindgen(js_name = key_down)]
    pub fn key_down(&mut self, key: String) -> Result<JsValue, JsError> {
        effects_to_js(self.core.key_down(&key))
    }
}

impl Default for MobileNav {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct Placement {
    index: usize,
    delay_s: f64,
}

/// Shuffle `len` positions and return `[{ index, delay_s }]`: `index` is the
/// original position of the node to append next, `delay_s` its animation delay.
#[wasm_bindgen(js_name = shuffle_order)]
pub fn shuffle_order(len: usize, step_s: f64) -> Result<JsValue, JsError> {
    let mut rng = rand::thread_rng();
    let order: Vec<Placement> = staggered_order((0..len).collect(), step_s, &mut rng)
        .into_iter()
        .map(|s| Placement {
            index: s.item,
            delay_s: s.delay_s,
        })
        .collect();
    swb::to_value(&order).map_err(|e| JsError::new(&format!("order error: {e}")))
}

/// Log a link click; returns `[scale, release_after_ms]` for the press effect.
#[wasm_bindgen(js_name = record_link_click)]
pub fn record_link_click(title: String, href: String) -> Array {
    let fb = LinkClick::new(title, href).record();
    Array::of2(&JsValue::from_f64(fb.scale), &JsValue::from_f64(fb.release_after_ms))
}

/// Throttle for scroll/resize handlers, driven by event timestamps.
#[wasm_bindgen(js_name = Throttle)]
pub struct JsThrottle {
    inner: Throttle,
}

#[wasm_bindgen(js_class = Throttle)]
impl JsThrottle {
    #[wasm_bindgen(constructor)]
    pub fn new(limit_ms: f64) -> JsThrottle {
        JsThrottle {
            inner: Throttle::new(limit_ms),
        }
    }

    #[wasm_bindgen(js_name = try_acquire)]
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        self.inner.try_acquire(now_ms)
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
