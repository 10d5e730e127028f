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

use event_command_telemetry::PanelStatus;
use yew::prelude::*;

use crate::components::icons::status::HelpCircleIcon;
use crate::components::tooltip::HoverTooltip;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub icon: Html,
    pub tooltip: AttrValue,
    #[prop_or_default]
    pub tooltip_details: Option<AttrValue>,
    #[prop_or(PanelStatus::Active)]
    pub status: PanelStatus,
    #[prop_or_default]
    pub on_info_click: Option<Callback<MouseEvent>>,
}

/// Panel heading with an icon trigger tooltip, a pulsing status dot and an
/// optional help button.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let dot_class = match props.status {
        PanelStatus::Active => "status-dot-active",
        PanelStatus::Stable => "status-dot-stable",
        PanelStatus::Warning => "status-dot-warning",
    };

    html! {
        <div class="section-header">
            <div class="section-header-main">
                <HoverTooltip content={props.tooltip.clone()} details={props.tooltip_details.clone()}>
                    <div class="section-header-icon">{ props.icon.clone() }</div>
                </HoverTooltip>
                <div>
                    <h4 class="section-header-title">
                        { props.title.clone() }
                        <div class={classes!("status-dot", dot_class)} />
                    </h4>
                    <p class="section-header-subtitle">{ props.subtitle.clone() }</p>
                </div>
            </div>
            if let Some(onclick) = props.on_info_click.clone() {
                <button class="section-header-help" {onclick}>
                    <HelpCircleIcon size={16} />
                </button>
            }
        </div>
    }
}
