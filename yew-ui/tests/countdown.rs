// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Formatting and rendering tests for the spike countdown readout.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use std::time::Duration;

use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use event_command_ui::components::countdown::{format_countdown, SpikeCountdown};

mod support;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn formats_seconds_as_minutes_and_padded_seconds() {
    assert_eq!(format_countdown(245), "4:05");
    assert_eq!(format_countdown(300), "5:00");
    assert_eq!(format_countdown(61), "1:01");
    assert_eq!(format_countdown(59), "0:59");
    assert_eq!(format_countdown(0), "0:00");
}

#[wasm_bindgen_test]
async fn renders_the_formatted_value() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <SpikeCountdown secs={245} /> }
    }

    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let value = mount
        .query_selector(".spike-countdown-value")
        .unwrap()
        .unwrap();
    assert!(value.text_content().unwrap().contains("4:05"));

    support::cleanup(&mount);
}
