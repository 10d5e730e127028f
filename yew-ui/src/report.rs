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

//! Attribution report export.
//!
//! Serializes the datasets currently on screen and copies them to the
//! clipboard. The clipboard write is async; failures surface in the console
//! log rather than the page.

use anyhow::{Context, Result};
use event_command_telemetry::feed::{CHANNELS, DEVICES, EVENT_LOG, LIVE_SERIES, REGIONS};
use event_command_telemetry::{
    now_ms, ChannelShare, DeviceShare, LogEntry, RegionStatus, TimeSeriesPoint,
};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};

#[derive(Serialize)]
struct AttributionReport<'a> {
    generated_at_ms: u64,
    countdown_secs: u32,
    paused: bool,
    live_series: &'a [TimeSeriesPoint],
    channels: &'a [ChannelShare],
    devices: &'a [DeviceShare],
    regions: &'a [RegionStatus],
    event_log: &'a [LogEntry],
}

/// Serialize everything the page is currently showing.
pub fn build_report(countdown_secs: u32, paused: bool) -> Result<String> {
    let report = AttributionReport {
        generated_at_ms: now_ms(),
        countdown_secs,
        paused,
        live_series: LIVE_SERIES.as_slice(),
        channels: &CHANNELS,
        devices: &DEVICES,
        regions: &REGIONS,
        event_log: &EVENT_LOG,
    };
    serde_json::to_string_pretty(&report).context("serializing attribution report")
}

async fn copy_to_clipboard(text: String) -> Result<(), JsValue> {
    let clipboard = gloo_utils::window().navigator().clipboard();
    JsFuture::from(clipboard.write_text(&text)).await?;
    Ok(())
}

/// Build the report and copy it to the clipboard.
pub fn export_report(countdown_secs: u32, paused: bool) {
    let json = match build_report(countdown_secs, paused) {
        Ok(json) => json,
        Err(e) => {
            log::error!("failed to build attribution report: {e:?}");
            return;
        }
    };

    spawn_local(async move {
        match copy_to_clipboard(json).await {
            Ok(()) => log::info!("attribution report copied to clipboard"),
            Err(e) => log::error!("clipboard write failed: {e:?}"),
        }
    });
}
