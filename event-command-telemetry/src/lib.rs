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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Mock telemetry feed and tick-state model for the event-command dashboard.
//! Works on both native and `wasm32` targets so the state machines can be
//! unit-tested off-browser while the UI consumes the same crate.

pub mod disclosure;
pub mod feed;
pub mod ticker;

pub use disclosure::toggle_selection;
pub use feed::{
    ChannelShare, DeviceKind, DeviceShare, HeadlineStat, LogEntry, LogEventKind, LogStatus,
    PanelStatus, RegionHealth, RegionStatus, TimeSeriesPoint, Trend,
};
pub use ticker::TickerState;

// === Helper utilities ===

/// Current wall-clock time in milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
