#![cfg(target_arch = "wasm32")]
use js_sys::{Array, Reflect};
use landing_page_wasm::{abi_version, shuffle_order, JsThrottle, MobileNav};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn toggle_returns_effects() {
    let mut nav = MobileNav::new();
    let effects = Array::from(&nav.toggle().unwrap());
    assert_eq!(effects.length(), 2);
    assert!(nav.is_open());
    assert_eq!(nav.icon_class(), "fa-times");
    nav.key_down("Escape".into()).unwrap();
    assert!(!nav.is_open());
}

#[wasm_bindgen_test]
fn link_click_without_section_is_empty() {
    let mut nav = MobileNav::new();
    let effects = Array::from(&nav.click_link("#x".into(), None, 60.0).unwrap());
    assert_eq!(effects.length(), 0);
}

#[wasm_bindgen_test]
fn shuffle_covers_every_index() {
    let order = Array::from(&shuffle_order(6, 0.1).unwrap());
    assert_eq!(order.length(), 6);
    let mut seen = vec![false; 6];
    for item in order.iter() {
        let idx = Reflect::get(&item, &JsValue::from_str("index"))
            .unwrap()
            .as_f64()
            .unwrap() as usize;
        seen[idx] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[wasm_bindgen_test]
fn throttle_blocks_within_limit() {
    let mut t = JsThrottle::new(100.0);
    assert!(t.try_acquire(0.0));
    assert!(!t.try_acquire(10.0));
    assert!(t.try_acquire(100.0));
}
