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

use once_cell::sync::Lazy;

/// Cadence of the spike countdown timer.
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

/// Cadence of the telemetry log rotation.
pub const LOG_ROTATION_TICK_MS: u32 = 3_000;

/// Measured TV-to-digital synchronization latency shown in the header.
pub const STREAM_SYNC_LATENCY_MS: u32 = 87;

/// Deployment tag rendered in the footer.
pub const BUILD_TAG: &str = "4A.19.FC";

pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}

// This is read at compile time, please rebuild if you change these values.
pub static HIGH_FIDELITY_DEFAULT: Lazy<bool> =
    Lazy::new(|| truthy(std::option_env!("HIGH_FIDELITY_DEFAULT")));
