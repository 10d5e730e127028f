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

//! Rotating telemetry event feed with a highlighted active entry.

use event_command_telemetry::LogEntry;
use yew::prelude::*;

use crate::components::tooltip::HoverTooltip;

#[derive(Properties, PartialEq)]
pub struct TelemetryLogProps {
    pub entries: Vec<LogEntry>,
    /// Index of the entry the rotation currently points at.
    pub active: usize,
}

#[function_component(TelemetryLog)]
pub fn telemetry_log(props: &TelemetryLogProps) -> Html {
    let count = props.entries.len();

    let items: Vec<Html> = props
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_active = i == props.active;
            html! {
                <HoverTooltip content={entry.event.label()} details={entry.description}>
                    <div class={classes!("log-entry", is_active.then_some("active"))}>
                        <div class="log-entry-rail">
                            <div class={classes!("log-entry-dot", is_active.then_some("active"))} />
                            if i < count - 1 {
                                <div class="log-entry-connector" />
                            }
                        </div>
                        <div class="log-entry-body">
                            <div class="log-entry-meta">
                                <span class="log-entry-time">{ entry.time }</span>
                                <span class={classes!("log-entry-tag", is_active.then_some("active"))}>
                                    { entry.event.label() }
                                </span>
                                <span class="log-entry-status">{ entry.status.label() }</span>
                            </div>
                            <p class="log-entry-message">{ entry.message }</p>
                        </div>
                    </div>
                </HoverTooltip>
            }
        })
        .collect();

    html! {
        <div class="telemetry-log">
            { for items }
        </div>
    }
}
