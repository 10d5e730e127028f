// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the channel breakdown card: single-select with
// toggle-off, selection dims the other bars instead of filtering them.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use event_command_telemetry::toggle_selection;
use event_command_ui::components::channel_breakdown::ChannelBreakdownCard;

mod support;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Stateful harness mirroring how the page owns the selection.
#[function_component(Wrapper)]
fn wrapper() -> Html {
    let selected = use_state(|| None::<usize>);
    let on_select = {
        let selected = selected.clone();
        Callback::from(move |i: usize| selected.set(toggle_selection(*selected, i)))
    };
    html! { <ChannelBreakdownCard selected={*selected} on_select={on_select} /> }
}

fn chip(mount: &web_sys::Element, index: u32) -> web_sys::HtmlElement {
    mount
        .query_selector_all(".channel-chip")
        .unwrap()
        .item(index)
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
}

fn bar_opacity(mount: &web_sys::Element, index: u32) -> String {
    mount
        .query_selector_all(".channel-bar")
        .unwrap()
        .item(index)
        .unwrap()
        .dyn_into::<web_sys::Element>()
        .unwrap()
        .get_attribute("opacity")
        .unwrap()
}

#[wasm_bindgen_test]
async fn all_bars_full_opacity_without_a_selection() {
    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert_eq!(mount.query_selector_all(".channel-bar").unwrap().length(), 4);
    for i in 0..4 {
        assert_eq!(bar_opacity(&mount, i), "1");
    }

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn selecting_a_channel_dims_the_others() {
    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    chip(&mount, 0).click();
    sleep(Duration::ZERO).await;

    assert!(chip(&mount, 0).class_list().contains("selected"));
    assert_eq!(bar_opacity(&mount, 0), "1");
    assert_eq!(bar_opacity(&mount, 1), "0.3");
    assert_eq!(bar_opacity(&mount, 3), "0.3");

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn reselecting_the_same_channel_clears_the_selection() {
    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    chip(&mount, 2).click();
    sleep(Duration::ZERO).await;
    assert!(chip(&mount, 2).class_list().contains("selected"));

    chip(&mount, 2).click();
    sleep(Duration::ZERO).await;
    assert!(!chip(&mount, 2).class_list().contains("selected"));
    for i in 0..4 {
        assert_eq!(bar_opacity(&mount, i), "1");
    }

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn selecting_another_channel_replaces_the_selection() {
    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    chip(&mount, 0).click();
    sleep(Duration::ZERO).await;
    chip(&mount, 1).click();
    sleep(Duration::ZERO).await;

    assert!(!chip(&mount, 0).class_list().contains("selected"));
    assert!(chip(&mount, 1).class_list().contains("selected"));
    assert_eq!(bar_opacity(&mount, 0), "0.3");
    assert_eq!(bar_opacity(&mount, 1), "1");

    support::cleanup(&mount);
}
