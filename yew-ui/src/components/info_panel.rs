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

//! Narrative panel with the four fixed explanation fields.

use yew::prelude::*;

use crate::components::icons::status::InfoIcon;

#[derive(Properties, PartialEq)]
pub struct InfoPanelProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub details: AttrValue,
    pub use_case: AttrValue,
    pub technical: AttrValue,
}

#[function_component(InfoPanel)]
pub fn info_panel(props: &InfoPanelProps) -> Html {
    html! {
        <div class="info-panel tactical-panel">
            <div class="info-panel-title">
                <InfoIcon size={16} class={classes!("info-panel-glyph")} />
                <h4>{ props.title.clone() }</h4>
            </div>
            <p class="info-panel-description">{ props.description.clone() }</p>
            <div class="info-panel-grid">
                <div class="info-panel-field">
                    <span class="info-panel-field-label">{ "Details" }</span>
                    <p>{ props.details.clone() }</p>
                </div>
                <div class="info-panel-field">
                    <span class="info-panel-field-label">{ "Use Case" }</span>
                    <p>{ props.use_case.clone() }</p>
                </div>
                <div class="info-panel-field info-panel-field-wide">
                    <span class="info-panel-field-label">{ "Technical" }</span>
                    <p>{ props.technical.clone() }</p>
                </div>
            </div>
        </div>
    }
}
