use js_sys::{Array, JSON};
use serde::Deserialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use landing_reveal::{
    parse_page_json, Config, Engine, HostVisibility, Outputs, Rect, RegionId, RevealError,
};

/// Browser-facing wrapper around the reveal engine.
///
/// The page script forwards `IntersectionObserver` entries (or bounding boxes)
/// and `requestAnimationFrame` timestamps; every call returns the
/// `{ changes, events }` to apply to the document.
#[wasm_bindgen]
pub struct LandingReveal {
    core: Engine,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn reveal_err(context: &str, e: RevealError) -> JsError {
    JsError::new(&format!("{context}: {e}"))
}

fn outputs_to_js(out: &Outputs) -> Result<JsValue, JsError> {
    swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
}

/// One `IntersectionObserver` entry reduced to what the engine needs.
#[derive(Deserialize)]
struct HostEntry {
    key: String,
    #[serde(alias = "isIntersecting")]
    is_intersecting: bool,
}

#[derive(Deserialize)]
struct RegionRect {
    key: String,
    rect: Rect,
}

#[wasm_bindgen]
impl LandingReveal {
    /// Build the engine from a page descriptor object and an optional config
    /// object (undefined/null for defaults). Example:
    ///   new LandingReveal({ regions: [...] }, { counter: { duration_ms: 1500 } })
    #[wasm_bindgen(constructor)]
    pub fn new(page: JsValue, config: JsValue) -> Result<LandingReveal, JsError> {
        console_error_panic_hook::set_once();

        if jsvalue_is_undefined_or_null(&page) {
            return Err(JsError::new("page descriptor is null/undefined"));
        }
        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        // Stringify the JS object so we can reuse the core parser (expects &str)
        let s = JSON::stringify(&page)
            .map_err(|e| JsError::new(&format!("page stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("page stringify produced non-string"))?;
        let spec = parse_page_json(&s).map_err(|e| reveal_err("page error", e))?;
        let core = Engine::from_page(cfg, &spec).map_err(|e| reveal_err("engine error", e))?;
        Ok(LandingReveal { core })
    }

    /// Keys of every tracked region, in document order.
    #[wasm_bindgen(js_name = region_keys)]
    pub fn region_keys(&self) -> Array {
        self.core
            .regions()
            .iter()
            .map(|r| JsValue::from_str(&r.key))
            .collect()
    }

    /// Forward a single visibility change for the region named `key`.
    #[wasm_bindgen(js_name = notify_visibility)]
    pub fn notify_visibility(
        &mut self,
        key: String,
        is_intersecting: bool,
    ) -> Result<JsValue, JsError> {
        let out = self
            .core
            .notify_visibility_by_key(&key, is_intersecting)
            .map_err(|e| reveal_err("notify_visibility", e))?;
        outputs_to_js(out)
    }

    /// Forward a batch of entries `[{ key, is_intersecting }]` as delivered by
    /// one observer callback. Unknown keys fail the whole batch.
    #[wasm_bindgen(js_name = notify_entries)]
    pub fn notify_entries(&mut self, entries: JsValue) -> Result<JsValue, JsError> {
        let entries: Vec<HostEntry> =
            swb::from_value(entries).map_err(|e| JsError::new(&format!("entries error: {e}")))?;
        let mut host = HostVisibility::new();
        for entry in entries {
            let region = self.lookup(&entry.key)?;
            host.push(region, entry.is_intersecting);
        }
        outputs_to_js(self.core.pump(&mut host))
    }

    /// Bounding-box fallback for hosts without an intersection primitive.
    /// `viewport` is `{ x, y, width, height }`, `rects` is `[{ key, rect }]`.
    #[wasm_bindgen(js_name = update_geometry)]
    pub fn update_geometry(&mut self, viewport: JsValue, rects: JsValue) -> Result<JsValue, JsError> {
        let viewport: Rect =
            swb::from_value(viewport).map_err(|e| JsError::new(&format!("viewport error: {e}")))?;
        let rects: Vec<RegionRect> =
            swb::from_value(rects).map_err(|e| JsError::new(&format!("rects error: {e}")))?;
        let mut placed = Vec::with_capacity(rects.len());
        for r in rects {
            placed.push((self.lookup(&r.key)?, r.rect));
        }
        outputs_to_js(self.core.update_geometry(viewport, &placed))
    }

    /// Run one render frame at `now_ms` (the requestAnimationFrame timestamp).
    #[wasm_bindgen]
    pub fn tick(&mut self, now_ms: f64) -> Result<JsValue, JsError> {
        outputs_to_js(self.core.tick(now_ms))
    }

    /// Reveal a region without waiting for visibility (page load hero).
    #[wasm_bindgen(js_name = reveal_immediately)]
    pub fn reveal_immediately(&mut self, key: String) -> Result<JsValue, JsError> {
        let out = self
            .core
            .reveal_immediately(&key)
            .map_err(|e| reveal_err("reveal_immediately", e))?;
        outputs_to_js(out)
    }

    /// True when no frame is pending; the host can stop requesting frames.
    #[wasm_bindgen(js_name = is_idle)]
    pub fn is_idle(&self) -> bool {
        self.core.is_idle()
    }

    #[wasm_bindgen(js_name = is_revealed)]
    pub fn is_revealed(&self, key: String) -> Result<bool, JsError> {
        let region = self.lookup(&key)?;
        Ok(self
            .core
            .region(region)
            .map(|r| r.is_revealed())
            .unwrap_or(false))
    }

    /// Current displayed value of the counter named `key`.
    #[wasm_bindgen(js_name = counter_value)]
    pub fn counter_value(&self, key: String) -> Result<f64, JsError> {
        self.core
            .counter_id(&key)
            .and_then(|id| self.core.counter(id))
            .map(|c| c.current() as f64)
            .ok_or_else(|| JsError::new(&format!("unknown counter '{key}'")))
    }
}

impl LandingReveal {
    fn lookup(&self, key: &str) -> Result<RegionId, JsError> {
        self.core.region_id(key).ok_or_else(|| {
            reveal_err(
                "lookup",
                RevealError::UnknownRegion {
                    key: key.to_string(),
                },
            )
        })
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
