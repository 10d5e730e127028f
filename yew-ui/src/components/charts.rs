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

//! SVG chart wrappers for the dashboard.
//!
//! Everything renders straight to SVG primitives; the chart is "live" only
//! through the page's tick state, the series never changes after load.

use event_command_telemetry::feed::{ChannelShare, SPIKE_BAND_END, SPIKE_BAND_START};
use event_command_telemetry::TimeSeriesPoint;
use yew::prelude::*;

/// Fixed y-domain of the velocity chart, matching the designed data ranges.
const VELOCITY_MAX: f64 = 120.0;

#[derive(Properties, PartialEq)]
pub struct VelocityChartProps {
    pub data: Vec<TimeSeriesPoint>,
    pub width: u32,
    pub height: u32,
}

/// Conversion velocity: observed conversions as a filled area, the organic
/// baseline as a dashed line, and the ad-break band highlighted behind both.
#[function_component(VelocityChart)]
pub fn velocity_chart(props: &VelocityChartProps) -> Html {
    let VelocityChartProps {
        data,
        width,
        height,
    } = props;

    let chart_width = *width as f64;
    let chart_height = *height as f64;
    let margin = 8.0;
    let plot_width = chart_width - margin * 2.0;
    let plot_height = chart_height - margin * 2.0;

    if data.is_empty() {
        return html! {
            <div class="velocity-chart">
                <div class="no-data">{"No data available"}</div>
            </div>
        };
    }

    let data_len = data.len();
    let x_at = |i: f64| margin + i / (data_len.saturating_sub(1).max(1) as f64) * plot_width;
    let y_at = |v: f64| margin + plot_height - (v.clamp(0.0, VELOCITY_MAX) / VELOCITY_MAX) * plot_height;

    let conversion_points: String = data
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", x_at(i as f64), y_at(p.conversions)))
        .collect::<Vec<_>>()
        .join(" ");

    // Close the area polygon along the bottom edge.
    let area_points = format!(
        "{} {:.1},{:.1} {:.1},{:.1}",
        conversion_points,
        x_at((data_len - 1) as f64),
        margin + plot_height,
        x_at(0.0),
        margin + plot_height,
    );

    let baseline_points: String = data
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", x_at(i as f64), y_at(p.baseline)))
        .collect::<Vec<_>>()
        .join(" ");

    let band_x = x_at(SPIKE_BAND_START as f64);
    let band_width = x_at(SPIKE_BAND_END as f64) - band_x;

    html! {
        <div class="velocity-chart">
            <svg width={width.to_string()} height={height.to_string()} viewBox={format!("0 0 {width} {height}")} preserveAspectRatio="none">
                <defs>
                    <linearGradient id="spike-grad" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="5%" stop-color="#facc15" stop-opacity="0.3" />
                        <stop offset="95%" stop-color="#facc15" stop-opacity="0" />
                    </linearGradient>
                </defs>

                // Ad-break band behind the series
                <rect x={format!("{band_x:.1}")} y={margin.to_string()} width={format!("{band_width:.1}")} height={format!("{plot_height:.1}")} fill="rgba(250, 204, 21, 0.05)" />
                <text x={format!("{:.1}", band_x + band_width / 2.0)} y={(margin + 14.0).to_string()} fill="#facc15" font-size="10" font-weight="900" text-anchor="middle">{"AD_BREAK_SPIKE"}</text>

                <polygon points={area_points} fill="url(#spike-grad)" />
                <polyline points={conversion_points} fill="none" stroke="#facc15" stroke-width="4" />
                <polyline points={baseline_points} fill="none" stroke="#27272a" stroke-width="2" stroke-dasharray="5 5" />
            </svg>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChannelBarChartProps {
    pub channels: Vec<ChannelShare>,
    /// Currently emphasized channel, if any. Everything else is dimmed.
    pub selected: Option<usize>,
    pub on_select: Callback<usize>,
    pub width: u32,
    pub height: u32,
}

/// Horizontal attribution bars with single-select emphasis. Clicking a bar
/// toggles the selection through `on_select`; the chart itself holds no
/// state.
#[function_component(ChannelBarChart)]
pub fn channel_bar_chart(props: &ChannelBarChartProps) -> Html {
    let ChannelBarChartProps {
        channels,
        selected,
        on_select,
        width,
        height,
    } = props;

    if channels.is_empty() {
        return html! {
            <div class="channel-bar-chart">
                <div class="no-data">{"No data available"}</div>
            </div>
        };
    }

    let chart_width = *width as f64;
    let chart_height = *height as f64;
    let row_height = chart_height / channels.len() as f64;
    let bar_height = (row_height * 0.6).max(4.0);
    let max_value = channels.iter().map(|c| c.value).fold(1.0f64, f64::max);

    let bars: Vec<Html> = channels
        .iter()
        .enumerate()
        .map(|(i, channel)| {
            let y = i as f64 * row_height + (row_height - bar_height) / 2.0;
            let bar_width = channel.value / max_value * chart_width;
            let opacity = match selected {
                None => 1.0,
                Some(s) if *s == i => 1.0,
                Some(_) => 0.3,
            };
            let onclick = {
                let on_select = on_select.clone();
                Callback::from(move |_: MouseEvent| on_select.emit(i))
            };
            html! {
                <rect
                    x="0"
                    y={format!("{y:.1}")}
                    width={format!("{bar_width:.1}")}
                    height={format!("{bar_height:.1}")}
                    rx="3"
                    fill={channel.color}
                    opacity={opacity.to_string()}
                    class="channel-bar"
                    {onclick}
                />
            }
        })
        .collect();

    html! {
        <div class="channel-bar-chart">
            <svg width={width.to_string()} height={height.to_string()} viewBox={format!("0 0 {width} {height}")}>
                { for bars }
            </svg>
        </div>
    }
}
