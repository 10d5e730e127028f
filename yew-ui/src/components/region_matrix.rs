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

//! Geographic performance panel driven by the static region dataset.

use event_command_telemetry::feed::REGIONS;
use event_command_telemetry::PanelStatus;
use yew::prelude::*;

use crate::components::icons::symbols::{GlobeIcon, WifiIcon};
use crate::components::section_header::SectionHeader;
use crate::components::tooltip::HoverTooltip;

#[function_component(RegionMatrix)]
pub fn region_matrix() -> Html {
    let rows: Vec<Html> = REGIONS
        .iter()
        .map(|region| {
            let details = format!(
                "Handling {}% of traffic with {}ms average latency. Status: {}",
                region.traffic_pct,
                region.latency_ms,
                region.health.label(),
            );
            html! {
                <HoverTooltip content={format!("{} Region", region.region)} details={details}>
                    <div class="region-row">
                        <div class="region-row-dot" style={format!("background-color: {};", region.health.color())} />
                        <div class="region-row-body">
                            <div class="region-row-head">
                                <span class="region-row-name">{ region.region }</span>
                                <span class="region-row-health" style={format!("color: {};", region.health.color())}>
                                    { region.health.label() }
                                </span>
                            </div>
                            <div class="region-row-metrics">
                                <span><b>{ format!("{}%", region.traffic_pct) }</b>{ " traffic" }</span>
                                <span><b>{ format!("{}ms", region.latency_ms) }</b>{ " latency" }</span>
                            </div>
                        </div>
                        <WifiIcon size={14} class={classes!("region-row-signal")} />
                    </div>
                </HoverTooltip>
            }
        })
        .collect();

    let coverage_chips: Vec<Html> = REGIONS
        .iter()
        .map(|region| {
            html! {
                <div class="coverage-chip" style={format!("background-color: {}4d;", region.health.color())} />
            }
        })
        .collect();

    html! {
        <section class="sidebar-panel region-matrix">
            <SectionHeader
                title="Regional_Matrix"
                subtitle="Geographic Distribution"
                icon={html! { <GlobeIcon size={20} class={classes!("glyph-cyan")} /> }}
                tooltip="Regional Performance Breakdown"
                tooltip_details="Real-time view of attribution performance across geographic regions. Shows traffic distribution, latency, and conversion rates by location."
                status={PanelStatus::Active}
            />

            <div class="region-rows">
                { for rows }
            </div>

            <div class="coverage-summary">
                <div>
                    <div class="coverage-summary-label">{ "Global Coverage" }</div>
                    <div class="coverage-summary-value">{ format!("{} Regions", REGIONS.len()) }</div>
                </div>
                <div class="coverage-chips">
                    { for coverage_chips }
                </div>
            </div>
        </section>
    }
}
