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

//! Readout for the predicted commercial-spike countdown.
//!
//! The page owns the ticking state; this component only formats and renders
//! whatever value it is handed.

use yew::prelude::*;

use crate::components::icons::symbols::TimerIcon;

/// Format seconds as `m:ss`.
pub fn format_countdown(total_secs: u32) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes}:{seconds:02}")
}

#[derive(Properties, PartialEq)]
pub struct SpikeCountdownProps {
    pub secs: u32,
}

#[function_component(SpikeCountdown)]
pub fn spike_countdown(props: &SpikeCountdownProps) -> Html {
    html! {
        <div class="spike-countdown">
            <span class="spike-countdown-label">{ "Next_Commercial_Spike" }</span>
            <div class="spike-countdown-value">
                <TimerIcon size={24} />
                { format_countdown(props.secs) }
            </div>
        </div>
    }
}
