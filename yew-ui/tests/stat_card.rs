// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the headline stat tile.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use event_command_telemetry::Trend;
use event_command_ui::components::stat_card::StatCard;

mod support;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn renders_label_value_and_trend() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <StatCard
                label="Live Audience"
                value="18.4M"
                trend="+12.2%"
                trend_direction={Trend::Up}
                color="#fbbf24"
                icon={html! { <span>{"*"}</span> }}
            />
        }
    }

    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let label = mount.query_selector(".stat-card-label").unwrap().unwrap();
    assert_eq!(label.text_content().unwrap(), "Live Audience");
    let value = mount.query_selector(".stat-card-value").unwrap().unwrap();
    assert_eq!(value.text_content().unwrap(), "18.4M");

    let trend = mount
        .query_selector(".stat-card-trend")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    assert_eq!(trend.text_content().unwrap(), "+12.2%");
    assert!(trend.class_list().contains("stat-trend-up"));

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn neutral_trend_gets_the_neutral_class() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <StatCard
                label="Causal Gap"
                value="4.2s"
                trend="STABLE"
                trend_direction={Trend::Neutral}
                color="#3b82f6"
                icon={html! { <span>{"*"}</span> }}
            />
        }
    }

    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let trend = mount
        .query_selector(".stat-card-trend")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    assert!(trend.class_list().contains("stat-trend-neutral"));
    assert!(!trend.class_list().contains("stat-trend-up"));

    support::cleanup(&mount);
}
