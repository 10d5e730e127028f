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

//! Channel attribution card wrapping the bar chart and its legend.
//!
//! The selection lives in the page so the chart and the legend chips stay
//! in sync; both funnel clicks through the same callback.

use event_command_telemetry::feed::CHANNELS;
use yew::prelude::*;

use crate::components::charts::ChannelBarChart;
use crate::components::expandable_card::{CardDetails, ExpandableCard};
use crate::components::icons::symbols::BarChartIcon;
use crate::components::tooltip::HoverTooltip;

#[derive(Properties, PartialEq)]
pub struct ChannelBreakdownCardProps {
    pub selected: Option<usize>,
    pub on_select: Callback<usize>,
}

#[function_component(ChannelBreakdownCard)]
pub fn channel_breakdown_card(props: &ChannelBreakdownCardProps) -> Html {
    let chips: Vec<Html> = CHANNELS
        .iter()
        .enumerate()
        .map(|(i, channel)| {
            let onclick = {
                let on_select = props.on_select.clone();
                Callback::from(move |_: MouseEvent| on_select.emit(i))
            };
            let selected = props.selected == Some(i);
            html! {
                <HoverTooltip content={channel.name} details={channel.description}>
                    <button class={classes!("channel-chip", selected.then_some("selected"))} {onclick}>
                        <div class="channel-chip-dot" style={format!("background-color: {};", channel.color)} />
                        <span>{ format!("{}%", channel.value) }</span>
                    </button>
                </HoverTooltip>
            }
        })
        .collect();

    html! {
        <ExpandableCard
            title="Channel Distribution"
            summary="Attribution by Source"
            color="#3b82f6"
            icon={html! { <BarChartIcon size={16} class={classes!("glyph-blue")} /> }}
            details={CardDetails {
                what: AttrValue::from("Breakdown of how credit is distributed across marketing channels for this live event."),
                why: AttrValue::from("Understand which channels drive incremental conversions vs. which just capture existing demand."),
                how: AttrValue::from("Uses Shapley value calculations to fairly distribute credit based on marginal contribution of each channel."),
                value: AttrValue::from("Optimize budget allocation - shift spend from low-impact to high-impact channels."),
            }}
        >
            <ChannelBarChart
                channels={CHANNELS.to_vec()}
                selected={props.selected}
                on_select={props.on_select.clone()}
                width={280}
                height={128}
            />
            <div class="channel-chips">
                { for chips }
            </div>
        </ExpandableCard>
    }
}
