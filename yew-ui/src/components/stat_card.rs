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

//! Headline metric tile.

use event_command_telemetry::Trend;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub trend: AttrValue,
    pub trend_direction: Trend,
    /// Accent color for the value and icon.
    pub color: AttrValue,
    pub icon: Html,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let trend_class = match props.trend_direction {
        Trend::Up => "stat-trend-up",
        Trend::Neutral => "stat-trend-neutral",
    };

    html! {
        <div class="stat-card tactical-panel">
            <div class="stat-card-top">
                <div class="stat-card-icon" style={format!("color: {};", props.color)}>
                    { props.icon.clone() }
                </div>
                <span class={classes!("stat-card-trend", trend_class)}>{ props.trend.clone() }</span>
            </div>
            <div class="stat-card-value" style={format!("color: {};", props.color)}>
                { props.value.clone() }
            </div>
            <div class="stat-card-label">{ props.label.clone() }</div>
        </div>
    }
}
