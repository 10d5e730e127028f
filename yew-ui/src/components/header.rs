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

//! Sticky command header: brand mark, display-mode toggle, pause control,
//! spike countdown and the report export button.

use yew::prelude::*;

use crate::components::countdown::SpikeCountdown;
use crate::components::icons::symbols::{DownloadIcon, EyeIcon, EyeOffIcon, PauseIcon, PlayIcon, ZapIcon};
use crate::components::tooltip::{HoverTooltip, TooltipPosition};
use crate::constants::STREAM_SYNC_LATENCY_MS;

#[derive(Properties, PartialEq)]
pub struct CommandHeaderProps {
    pub countdown_secs: u32,
    pub paused: bool,
    pub high_fidelity: bool,
    pub on_toggle_pause: Callback<MouseEvent>,
    pub on_toggle_high_fidelity: Callback<MouseEvent>,
    pub on_export: Callback<MouseEvent>,
}

#[function_component(CommandHeader)]
pub fn command_header(props: &CommandHeaderProps) -> Html {
    html! {
        <header class="command-header">
            <div class="command-header-inner">
                <div class="command-brand">
                    <HoverTooltip
                        content="Live Attribution Engine V4"
                        details="The core real-time attribution system that synchronizes TV broadcast signals with digital conversion events. Processes 14K+ events per second with sub-100ms latency."
                    >
                        <div class="command-brand-mark">
                            <ZapIcon size={24} />
                        </div>
                    </HoverTooltip>
                    <div>
                        <div class="command-brand-chips">
                            <HoverTooltip
                                content="Engine Version 4.0"
                                details="Fourth-generation attribution engine featuring mSPRT statistical testing, non-linear time-decay kernels, and distributed event processing."
                            >
                                <span class="command-brand-tag">{ "Live_Engine_V4" }</span>
                            </HoverTooltip>
                            <HoverTooltip
                                content="Stream Synchronization Latency"
                                details="Time between TV signal detection and digital event correlation. 87ms is optimal - under 100ms ensures accurate causal attribution without false positives from delayed responses."
                            >
                                <span class="command-sync">
                                    <div class="status-dot status-dot-active" />
                                    { format!("Stream_Sync: {STREAM_SYNC_LATENCY_MS}ms") }
                                </span>
                            </HoverTooltip>
                        </div>
                        <HoverTooltip
                            content="Netflix Event Command Center"
                            details="Real-time monitoring dashboard for the WWE Raw live event on Netflix. Tracks incremental conversions, causal attribution, and ROI measurement during broadcast."
                        >
                            <h1 class="command-title">
                                { "NETFLIX " }<span class="command-title-accent">{ "EVENT_COMMAND" }</span>
                            </h1>
                        </HoverTooltip>
                    </div>
                </div>

                <div class="command-controls">
                    <HoverTooltip
                        content={if props.high_fidelity { "High-Fidelity Mode Active" } else { "Enable High-Fidelity Analysis" }}
                        details={if props.high_fidelity {
                            "Currently showing granular user-level packet inspection with enhanced visual saturation. Click to return to standard aggregate view."
                        } else {
                            "Switch to detailed real-time analysis mode for packet-level inspection. Increases visual saturation to highlight active data flows."
                        }}
                    >
                        <button
                            class={classes!("hifi-toggle", props.high_fidelity.then_some("active"))}
                            onclick={props.on_toggle_high_fidelity.clone()}
                        >
                            if props.high_fidelity {
                                <EyeIcon size={14} />
                                { "HIGH_FIDELITY_ON" }
                            } else {
                                <EyeOffIcon size={14} />
                                { "STANDARD_VIEW" }
                            }
                        </button>
                    </HoverTooltip>

                    <HoverTooltip
                        content={if props.paused { "Resume Live Updates" } else { "Pause Live Updates" }}
                        details="Temporarily freeze all real-time data streams for detailed analysis. Does not affect actual data collection - only the UI refresh."
                    >
                        <button
                            class={classes!("pause-toggle", props.paused.then_some("paused"))}
                            onclick={props.on_toggle_pause.clone()}
                        >
                            if props.paused {
                                <PlayIcon size={14} />
                            } else {
                                <PauseIcon size={14} />
                            }
                        </button>
                    </HoverTooltip>

                    <div class="command-divider" />

                    <HoverTooltip
                        content="Next Commercial Spike Prediction"
                        details="AI-predicted time until next TV commercial break. Prepare for conversion spike - historical data shows 240% traffic increase within 15 seconds of ad exposure."
                    >
                        <SpikeCountdown secs={props.countdown_secs} />
                    </HoverTooltip>

                    <HoverTooltip
                        content="Export Attribution Report"
                        details="Generate a report including: causal attribution breakdown, incremental lift analysis, confidence intervals, and ROI calculations. Suitable for executive presentations and financial reconciliation."
                        position={TooltipPosition::Bottom}
                    >
                        <button class="export-btn" onclick={props.on_export.clone()}>
                            <DownloadIcon size={16} />
                            { "EXPORT_REPORT" }
                        </button>
                    </HoverTooltip>
                </div>
            </div>
        </header>
    }
}
