// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for event-command-ui component tests.
//
// Provides mount/cleanup helpers and synthetic pointer events so that
// individual test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsCast;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

// ---------------------------------------------------------------------------
// Synthetic events
// ---------------------------------------------------------------------------

/// Dispatch a bubbling pointer event (e.g. "mouseenter", "mouseleave") on
/// the given element. Bubbling is forced so the event reaches Yew's
/// delegated listeners regardless of how the listener was registered.
pub fn dispatch_mouse_event(target: &web_sys::Element, kind: &str) {
    let init = web_sys::MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = web_sys::MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Native click on the first element matching `selector` under `mount`.
pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matching '{selector}'"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}
