// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the hover tooltip.
//
// These tests follow the same pattern used by the Yew framework's own test
// suite (packages/yew/tests/):
//
//   1. Configure `wasm_bindgen_test` to run in a real browser.
//   2. Create a mount-point `<div>` and attach it to `<body>`.
//   3. Render the component under test into that div.
//   4. Yield to the Yew scheduler with `sleep(Duration::ZERO).await`.
//   5. Query the DOM and assert on the rendered output.
//   6. Clean up the mount-point so tests don't leak into each other.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use std::time::Duration;

use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use event_command_ui::components::tooltip::{HoverTooltip, TooltipPosition};

mod support;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn tooltip_opens_on_pointer_enter_and_closes_on_leave() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <HoverTooltip content="Live Attribution Engine" details="More context">
                <button>{"trigger"}</button>
            </HoverTooltip>
        }
    }

    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    // Closed until the pointer enters the trigger region.
    assert!(mount.query_selector(".tooltip-bubble").unwrap().is_none());

    let anchor = mount.query_selector(".tooltip-anchor").unwrap().unwrap();
    support::dispatch_mouse_event(&anchor, "mouseenter");
    sleep(Duration::ZERO).await;

    let bubble = mount
        .query_selector(".tooltip-bubble")
        .unwrap()
        .expect("bubble should open on mouseenter");
    let content = bubble.query_selector(".tooltip-content").unwrap().unwrap();
    assert_eq!(content.text_content().unwrap(), "Live Attribution Engine");
    let details = bubble.query_selector(".tooltip-details").unwrap().unwrap();
    assert_eq!(details.text_content().unwrap(), "More context");

    // Leaving closes immediately, no delay.
    support::dispatch_mouse_event(&anchor, "mouseleave");
    sleep(Duration::ZERO).await;
    assert!(mount.query_selector(".tooltip-bubble").unwrap().is_none());

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn tooltip_without_details_renders_headline_only() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <HoverTooltip content="Just a headline">
                <span>{"trigger"}</span>
            </HoverTooltip>
        }
    }

    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let anchor = mount.query_selector(".tooltip-anchor").unwrap().unwrap();
    support::dispatch_mouse_event(&anchor, "mouseenter");
    sleep(Duration::ZERO).await;

    assert!(mount.query_selector(".tooltip-content").unwrap().is_some());
    assert!(mount.query_selector(".tooltip-details").unwrap().is_none());

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn tooltip_position_maps_to_placement_class() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <HoverTooltip content="positioned" position={TooltipPosition::Bottom}>
                <span>{"trigger"}</span>
            </HoverTooltip>
        }
    }

    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let anchor = mount.query_selector(".tooltip-anchor").unwrap().unwrap();
    support::dispatch_mouse_event(&anchor, "mouseenter");
    sleep(Duration::ZERO).await;

    let bubble = mount.query_selector(".tooltip-bubble").unwrap().unwrap();
    assert!(bubble.class_list().contains("tooltip-bubble-bottom"));

    support::cleanup(&mount);
}
