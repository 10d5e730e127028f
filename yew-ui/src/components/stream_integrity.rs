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

//! Ingest-pipeline health panel: load gauge, metric tiles and utilization
//! rows. All figures are cosmetic constants.

use event_command_telemetry::PanelStatus;
use yew::prelude::*;

use crate::components::icons::symbols::{CpuIcon, ShieldIcon, TargetIcon, TimerIcon, ZapIcon};
use crate::components::section_header::SectionHeader;
use crate::components::tooltip::HoverTooltip;

const SYSTEM_LOAD_PCT: f64 = 67.0;

struct UtilizationRow {
    label: &'static str,
    value: &'static str,
    pct: f64,
    class: &'static str,
}

const UTILIZATION: [UtilizationRow; 3] = [
    UtilizationRow {
        label: "Ingest Load",
        value: "14.2K eps",
        pct: 65.0,
        class: "meter-amber",
    },
    UtilizationRow {
        label: "Cluster Sync",
        value: "99.9%",
        pct: 99.0,
        class: "meter-emerald",
    },
    UtilizationRow {
        label: "Buffer Depth",
        value: "12ms",
        pct: 15.0,
        class: "meter-cyan",
    },
];

#[function_component(StreamIntegrity)]
pub fn stream_integrity() -> Html {
    let rows: Vec<Html> = UTILIZATION
        .iter()
        .map(|row| {
            html! {
                <div class="utilization-row">
                    <div class="utilization-row-head">
                        <span class="utilization-label">{ row.label }</span>
                        <span class="utilization-value">{ row.value }</span>
                    </div>
                    <div class="meter-track">
                        <div class={classes!("meter-fill", row.class)} style={format!("width: {}%;", row.pct)} />
                    </div>
                </div>
            }
        })
        .collect();

    html! {
        <section class="sidebar-panel stream-integrity">
            <SectionHeader
                title="Stream_Integrity"
                subtitle="Ingest_Cluster_09"
                icon={html! { <CpuIcon size={20} class={classes!("glyph-amber")} /> }}
                tooltip="Data Pipeline Health Monitor"
                tooltip_details="Real-time monitoring of the event ingestion pipeline. Ensures all conversion events are captured, processed, and attributed without data loss or latency issues."
                status={PanelStatus::Active}
            />

            <div class="load-gauge">
                <div class="load-gauge-head">
                    <span class="load-gauge-label">{ "System Load" }</span>
                    <span class="load-gauge-value">{ format!("{SYSTEM_LOAD_PCT:.0}%") }</span>
                </div>
                <div class="load-gauge-track">
                    <div class="load-gauge-fill" style={format!("width: {SYSTEM_LOAD_PCT}%;")} />
                    <div class="load-gauge-mark load-gauge-warning" />
                    <div class="load-gauge-mark load-gauge-critical" />
                </div>
                <div class="load-gauge-scale">
                    <span>{ "0%" }</span>
                    <span class="load-gauge-scale-warning">{ "Warning: 80%" }</span>
                    <span class="load-gauge-scale-critical">{ "Critical: 90%" }</span>
                </div>
            </div>

            <div class="metric-tile-grid">
                <HoverTooltip content="Throughput" details="Current throughput: 14.2K events per second">
                    <div class="metric-tile glass-amber">
                        <div class="metric-tile-head"><ZapIcon size={12} /><span>{ "Throughput" }</span></div>
                        <div class="metric-tile-value">{ "14.2K" }<span class="metric-tile-unit">{ "eps" }</span></div>
                    </div>
                </HoverTooltip>
                <HoverTooltip content="Latency" details="Current ingest latency: 12ms">
                    <div class="metric-tile glass-cyan">
                        <div class="metric-tile-head"><TimerIcon size={12} /><span>{ "Latency" }</span></div>
                        <div class="metric-tile-value">{ "12" }<span class="metric-tile-unit">{ "ms" }</span></div>
                    </div>
                </HoverTooltip>
                <HoverTooltip content="Accuracy" details="Current attribution accuracy: 99.9%">
                    <div class="metric-tile glass-emerald">
                        <div class="metric-tile-head"><TargetIcon size={12} /><span>{ "Accuracy" }</span></div>
                        <div class="metric-tile-value">{ "99.9" }<span class="metric-tile-unit">{ "%" }</span></div>
                    </div>
                </HoverTooltip>
                <HoverTooltip content="Uptime" details="Current pipeline uptime: 99.99%">
                    <div class="metric-tile glass-purple">
                        <div class="metric-tile-head"><ShieldIcon size={12} /><span>{ "Uptime" }</span></div>
                        <div class="metric-tile-value">{ "99.99" }<span class="metric-tile-unit">{ "%" }</span></div>
                    </div>
                </HoverTooltip>
            </div>

            <div class="utilization-rows">
                { for rows }
            </div>

            <div class="panel-footnote">
                <p>
                    <span class="panel-footnote-lead">{ "Why this matters:" }</span>
                    { " Pipeline health = attribution accuracy. Dropped events mean understated ROI." }
                </p>
            </div>
        </section>
    }
}
