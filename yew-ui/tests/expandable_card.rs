// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the expandable info card.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use std::time::Duration;

use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use event_command_ui::components::expandable_card::{CardDetails, ExpandableCard};

mod support;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn details() -> CardDetails {
    CardDetails {
        what: AttrValue::from("what"),
        why: AttrValue::from("why"),
        how: AttrValue::from("how"),
        value: AttrValue::from("value"),
    }
}

#[function_component(Wrapper)]
fn wrapper() -> Html {
    html! {
        <ExpandableCard
            title="Card"
            summary="Summary"
            color="#3b82f6"
            icon={html! { <span>{"*"}</span> }}
            details={details()}
        >
            <p class="card-body">{"body"}</p>
        </ExpandableCard>
    }
}

#[wasm_bindgen_test]
async fn children_render_while_collapsed_details_do_not() {
    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(mount.query_selector(".card-body").unwrap().is_some());
    assert!(mount.query_selector(".card-details").unwrap().is_none());

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn toggling_twice_returns_to_the_original_state() {
    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    support::click(&mount, ".expand-toggle");
    sleep(Duration::ZERO).await;
    assert!(
        mount.query_selector(".card-details").unwrap().is_some(),
        "first click should expand the details grid"
    );

    support::click(&mount, ".expand-toggle");
    sleep(Duration::ZERO).await;
    assert!(
        mount.query_selector(".card-details").unwrap().is_none(),
        "second click should collapse back to the original state"
    );

    support::cleanup(&mount);
}

#[wasm_bindgen_test]
async fn expanded_grid_shows_all_four_fields() {
    let mount = support::create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    support::click(&mount, ".expand-toggle");
    sleep(Duration::ZERO).await;

    let fields = mount.query_selector_all(".card-details-field").unwrap();
    assert_eq!(fields.length(), 4);

    support::cleanup(&mount);
}
