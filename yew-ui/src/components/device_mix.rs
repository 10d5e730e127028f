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

//! Device composition card: share of converting users per device kind.

use event_command_telemetry::feed::DEVICES;
use event_command_telemetry::DeviceKind;
use yew::prelude::*;

use crate::components::expandable_card::{CardDetails, ExpandableCard};
use crate::components::icons::devices::{MonitorIcon, SmartphoneIcon, TabletIcon};
use crate::components::tooltip::HoverTooltip;

fn device_glyph(kind: DeviceKind) -> Html {
    match kind {
        DeviceKind::Mobile => html! { <SmartphoneIcon size={14} /> },
        DeviceKind::Desktop => html! { <MonitorIcon size={14} /> },
        DeviceKind::Tablet => html! { <TabletIcon size={14} /> },
    }
}

#[function_component(DeviceMixCard)]
pub fn device_mix_card() -> Html {
    let rows: Vec<Html> = DEVICES
        .iter()
        .map(|share| {
            let details = match share.device {
                DeviceKind::Mobile => AttrValue::from(
                    "Primary conversion device - users watching TV on one screen, converting on their phone.",
                ),
                _ => AttrValue::from(format!(
                    "Secondary device contributing {}% of conversions.",
                    share.pct
                )),
            };
            html! {
                <HoverTooltip content={format!("{}: {}%", share.device.label(), share.pct)} details={details}>
                    <div class="device-row">
                        <span class="device-row-glyph" style={format!("color: {};", share.color)}>
                            { device_glyph(share.device) }
                        </span>
                        <div class="meter-track device-row-track">
                            <div class="meter-fill" style={format!("width: {}%; background-color: {};", share.pct, share.color)} />
                        </div>
                        <span class="device-row-pct">{ format!("{}%", share.pct) }</span>
                    </div>
                </HoverTooltip>
            }
        })
        .collect();

    html! {
        <ExpandableCard
            title="Device Composition"
            summary="Platform Breakdown"
            color="#facc15"
            icon={html! { <SmartphoneIcon size={16} class={classes!("glyph-amber")} /> }}
            details={CardDetails {
                what: AttrValue::from("Distribution of converting users by device type - Mobile, Desktop, or Tablet."),
                why: AttrValue::from("82% mobile indicates 'second screen' behavior - users watching TV while browsing on phone. Classic live event pattern."),
                how: AttrValue::from("Device fingerprinting from user-agent strings and screen resolution data at conversion time."),
                value: AttrValue::from("Optimize landing pages for mobile-first. Consider mobile-specific CTAs for live event campaigns."),
            }}
        >
            <div class="device-rows">
                { for rows }
            </div>
        </ExpandableCard>
    }
}
