/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Card with an independently toggled what/why/how/value detail section.
//!
//! Each card owns its own expanded flag; expanding one never collapses
//! another.

use yew::prelude::*;

use crate::components::icons::status::InfoIcon;

/// The four narrative fields revealed on expansion.
#[derive(Clone, PartialEq)]
pub struct CardDetails {
    pub what: AttrValue,
    pub why: AttrValue,
    pub how: AttrValue,
    pub value: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct ExpandableCardProps {
    pub title: AttrValue,
    pub summary: AttrValue,
    /// Accent color for the title and icon backdrop.
    pub color: AttrValue,
    pub icon: Html,
    pub details: CardDetails,
    pub children: Children,
}

#[function_component(ExpandableCard)]
pub fn expandable_card(props: &ExpandableCardProps) -> Html {
    let expanded = use_state(|| false);

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    html! {
        <div class="expandable-card tactical-panel">
            <div class="expandable-card-head">
                <div class="expandable-card-ident">
                    <div class="expandable-card-glyph" style={format!("background-color: {}26;", props.color)}>
                        { props.icon.clone() }
                    </div>
                    <div>
                        <h4 class="expandable-card-title" style={format!("color: {};", props.color)}>
                            { props.title.clone() }
                        </h4>
                        <p class="expandable-card-summary">{ props.summary.clone() }</p>
                    </div>
                </div>
                <button class={classes!("expand-toggle", expanded.then_some("active"))} onclick={on_toggle}>
                    <InfoIcon size={14} />
                </button>
            </div>

            { for props.children.iter() }

            if *expanded {
                <div class="card-details">
                    <div class="card-details-field">
                        <span class="card-details-label card-details-what">{ "What It Is" }</span>
                        <p>{ props.details.what.clone() }</p>
                    </div>
                    <div class="card-details-field">
                        <span class="card-details-label card-details-why">{ "Why It Matters" }</span>
                        <p>{ props.details.why.clone() }</p>
                    </div>
                    <div class="card-details-field">
                        <span class="card-details-label card-details-how">{ "How It Works" }</span>
                        <p>{ props.details.how.clone() }</p>
                    </div>
                    <div class="card-details-field">
                        <span class="card-details-label card-details-value">{ "Business Value" }</span>
                        <p>{ props.details.value.clone() }</p>
                    </div>
                </div>
            }
        </div>
    }
}
