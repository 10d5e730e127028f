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

//! Infrastructure status card with the show-regions disclosure.

use event_command_telemetry::feed::REGIONS;
use yew::prelude::*;

use crate::components::expandable_card::{CardDetails, ExpandableCard};
use crate::components::icons::symbols::GlobeIcon;
use crate::components::tooltip::HoverTooltip;

#[derive(Properties, PartialEq)]
pub struct GlobalDeploymentCardProps {
    pub show_regions: bool,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(GlobalDeploymentCard)]
pub fn global_deployment_card(props: &GlobalDeploymentCardProps) -> Html {
    let region_cells: Vec<Html> = REGIONS
        .iter()
        .map(|region| {
            html! {
                <div class="deployment-region">
                    <div class="deployment-region-dot" />
                    <span>{ region.region }</span>
                </div>
            }
        })
        .collect();

    html! {
        <ExpandableCard
            title="Global Deployment"
            summary="Infrastructure Status"
            color="#a855f7"
            icon={html! { <GlobeIcon size={16} class={classes!("glyph-purple")} /> }}
            details={CardDetails {
                what: AttrValue::from("Geographic distribution of processing infrastructure and current regional status."),
                why: AttrValue::from("Edge processing ensures low-latency attribution regardless of user location. Critical for real-time accuracy."),
                how: AttrValue::from("Distributed Kubernetes clusters across AWS regions with automatic failover and load balancing."),
                value: AttrValue::from("Global reach = no blind spots. Every conversion captured regardless of user geography."),
            }}
        >
            <div class="deployment-toggle">
                <HoverTooltip
                    content="Click to view regional status"
                    details="Opens detailed view of all processing regions, their health status, and current load distribution."
                >
                    <button class="deployment-toggle-btn" onclick={props.on_toggle.clone()}>
                        <GlobeIcon size={48} class={classes!("deployment-globe")} />
                        <span class="deployment-toggle-label">
                            { if props.show_regions { "Hide Details" } else { "View Regions" } }
                        </span>
                    </button>
                </HoverTooltip>
            </div>
            if props.show_regions {
                <div class="deployment-regions">
                    { for region_cells }
                </div>
            }
        </ExpandableCard>
    }
}
