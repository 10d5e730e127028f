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

//! Mock datasets standing in for the real attribution pipeline.
//!
//! Everything here is either a compile-time constant or generated exactly
//! once at load through a [`Lazy`] static; the dashboard is "live" through
//! its tick timers, not through new data points.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::now_ms;

/// Number of points in the conversion velocity series.
pub const SERIES_LEN: u32 = 60;

/// Exclusive bounds of the ad-break window: ticks strictly inside the band
/// are drawn from the elevated distribution.
pub const SPIKE_BAND_START: u32 = 25;
pub const SPIKE_BAND_END: u32 = 45;

/// One sample of the conversion velocity chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Ordinal tick on the broadcast clock.
    pub time: u32,
    /// Observed conversions per second.
    pub conversions: f64,
    /// Expected conversions per second without the broadcast spot.
    pub baseline: f64,
    /// Model confidence in percent.
    pub confidence: f64,
}

/// Build the 60-point velocity series from the given RNG.
///
/// Inside the ad-break band conversions ride a sine swell over a high mean;
/// everywhere else they hug the organic baseline.
pub fn live_series_with(rng: &mut impl Rng) -> Vec<TimeSeriesPoint> {
    (0..SERIES_LEN)
        .map(|i| {
            let in_spike = i > SPIKE_BAND_START && i < SPIKE_BAND_END;
            let conversions = if in_spike {
                60.0 + (i as f64 * 0.5).sin() * 40.0 + rng.gen_range(0.0..20.0)
            } else {
                15.0 + rng.gen_range(0.0..10.0)
            };
            TimeSeriesPoint {
                time: i,
                conversions,
                baseline: 15.0 + rng.gen_range(0.0..5.0),
                confidence: 92.0 + rng.gen_range(0.0..4.0),
            }
        })
        .collect()
}

/// Conversion velocity series, generated once when first touched and
/// immutable for the lifetime of the page.
pub static LIVE_SERIES: Lazy<Vec<TimeSeriesPoint>> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(now_ms());
    live_series_with(&mut rng)
});

// === Channel attribution breakdown ===

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChannelShare {
    pub name: &'static str,
    /// Attributed share in percent. The shipped set sums to 100 by
    /// construction; nothing enforces it.
    pub value: f64,
    pub color: &'static str,
    pub description: &'static str,
}

pub const CHANNELS: [ChannelShare; 4] = [
    ChannelShare {
        name: "TV Broadcast",
        value: 40.0,
        color: "#facc15",
        description: "Primary ad spot during live event",
    },
    ChannelShare {
        name: "Social Organic",
        value: 25.0,
        color: "#3b82f6",
        description: "Viral mentions and shares",
    },
    ChannelShare {
        name: "Paid Social",
        value: 20.0,
        color: "#a855f7",
        description: "Retargeting and lookalike campaigns",
    },
    ChannelShare {
        name: "Direct Traffic",
        value: 15.0,
        color: "#10b981",
        description: "Brand recall and word-of-mouth",
    },
];

// === Telemetry event log ===

/// Category of a pipeline event. Closed set so styling resolves by `match`
/// instead of runtime string composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LogEventKind {
    TvDetection,
    IngestSpike,
    AttributionLink,
    ModelUpdate,
}

impl LogEventKind {
    pub fn label(&self) -> &'static str {
        match self {
            LogEventKind::TvDetection => "TV_DETECTION",
            LogEventKind::IngestSpike => "INGEST_SPIKE",
            LogEventKind::AttributionLink => "ATTR_LINK",
            LogEventKind::ModelUpdate => "MODEL_UPDATE",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LogStatus {
    Active,
    Syncd,
    Locked,
    Healthy,
}

impl LogStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LogStatus::Active => "ACTIVE",
            LogStatus::Syncd => "SYNCD",
            LogStatus::Locked => "LOCKED",
            LogStatus::Healthy => "HEALTHY",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LogEntry {
    pub time: &'static str,
    pub event: LogEventKind,
    pub message: &'static str,
    pub status: LogStatus,
    pub description: &'static str,
}

/// Static ordered sequence; the UI cycles an index into it.
pub const EVENT_LOG: [LogEntry; 4] = [
    LogEntry {
        time: "20:41:02",
        event: LogEventKind::TvDetection,
        message: "Ad Spot: WWE_HALFTIME_PRIME",
        status: LogStatus::Active,
        description: "Detected live TV advertisement fingerprint in broadcast stream",
    },
    LogEntry {
        time: "20:41:08",
        event: LogEventKind::IngestSpike,
        message: "Mobile Traffic Ingest +240% in US-East",
        status: LogStatus::Syncd,
        description: "Massive surge in mobile app opens correlating with ad exposure",
    },
    LogEntry {
        time: "20:41:45",
        event: LogEventKind::AttributionLink,
        message: "Resolved 4.2k causal links via Time-Decay",
        status: LogStatus::Locked,
        description: "Attribution model linked conversions to specific touchpoints",
    },
    LogEntry {
        time: "20:42:15",
        event: LogEventKind::ModelUpdate,
        message: "mSPRT boundaries stable (p=0.002)",
        status: LogStatus::Healthy,
        description: "Statistical test confirms significant lift above baseline",
    },
];

// === Device mix ===

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DeviceKind {
    Mobile,
    Desktop,
    Tablet,
}

impl DeviceKind {
    pub fn label(&self) -> &'static str {
        match self {
            DeviceKind::Mobile => "Mobile",
            DeviceKind::Desktop => "Desktop",
            DeviceKind::Tablet => "Tablet",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DeviceShare {
    pub device: DeviceKind,
    /// Share of converting users in percent. Not validated to sum to 100.
    pub pct: f64,
    pub color: &'static str,
}

pub const DEVICES: [DeviceShare; 3] = [
    DeviceShare {
        device: DeviceKind::Mobile,
        pct: 82.0,
        color: "#facc15",
    },
    DeviceShare {
        device: DeviceKind::Desktop,
        pct: 12.0,
        color: "#3b82f6",
    },
    DeviceShare {
        device: DeviceKind::Tablet,
        pct: 6.0,
        color: "#a855f7",
    },
];

// === Headline stats ===

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeadlineStat {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
    pub trend_direction: Trend,
    pub color: &'static str,
}

pub const HEADLINE_STATS: [HeadlineStat; 4] = [
    HeadlineStat {
        label: "Live Audience",
        value: "18.4M",
        trend: "+12.2%",
        trend_direction: Trend::Up,
        color: "#fbbf24",
    },
    HeadlineStat {
        label: "Incremental ROI",
        value: "3.14x",
        trend: "OPTIMAL",
        trend_direction: Trend::Up,
        color: "#10b981",
    },
    HeadlineStat {
        label: "Causal Gap",
        value: "4.2s",
        trend: "STABLE",
        trend_direction: Trend::Neutral,
        color: "#3b82f6",
    },
    HeadlineStat {
        label: "Model Health",
        value: "98.2%",
        trend: "ACTIVE",
        trend_direction: Trend::Up,
        color: "#a855f7",
    },
];

// === Regional matrix ===

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RegionHealth {
    Optimal,
    Good,
    Elevated,
}

impl RegionHealth {
    pub fn label(&self) -> &'static str {
        match self {
            RegionHealth::Optimal => "optimal",
            RegionHealth::Good => "good",
            RegionHealth::Elevated => "elevated",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RegionHealth::Optimal => "#10b981",
            RegionHealth::Good => "#3b82f6",
            RegionHealth::Elevated => "#f59e0b",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RegionStatus {
    pub region: &'static str,
    pub traffic_pct: f64,
    pub latency_ms: u32,
    pub health: RegionHealth,
}

pub const REGIONS: [RegionStatus; 4] = [
    RegionStatus {
        region: "US-East",
        traffic_pct: 42.0,
        latency_ms: 23,
        health: RegionHealth::Optimal,
    },
    RegionStatus {
        region: "US-West",
        traffic_pct: 28.0,
        latency_ms: 45,
        health: RegionHealth::Optimal,
    },
    RegionStatus {
        region: "EU-West",
        traffic_pct: 18.0,
        latency_ms: 89,
        health: RegionHealth::Good,
    },
    RegionStatus {
        region: "APAC",
        traffic_pct: 12.0,
        latency_ms: 142,
        health: RegionHealth::Elevated,
    },
];

// === Section status dots ===

/// Health dot shown next to a panel title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PanelStatus {
    Active,
    Stable,
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn series_has_sixty_points_in_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = live_series_with(&mut rng);
        assert_eq!(series.len(), SERIES_LEN as usize);
        for (i, point) in series.iter().enumerate() {
            assert_eq!(point.time, i as u32);
        }
    }

    #[test]
    fn spike_band_rides_above_the_organic_floor() {
        let mut rng = StdRng::seed_from_u64(42);
        let series = live_series_with(&mut rng);

        let spike: Vec<f64> = series
            .iter()
            .filter(|p| p.time > SPIKE_BAND_START && p.time < SPIKE_BAND_END)
            .map(|p| p.conversions)
            .collect();
        let organic: Vec<f64> = series
            .iter()
            .filter(|p| p.time <= SPIKE_BAND_START || p.time >= SPIKE_BAND_END)
            .map(|p| p.conversions)
            .collect();

        let spike_mean = spike.iter().sum::<f64>() / spike.len() as f64;
        let organic_mean = organic.iter().sum::<f64>() / organic.len() as f64;

        // Elevated distribution floor is 60 - 40 = 20; organic ceiling is 25.
        // The means are far apart for any seed.
        assert!(spike_mean > organic_mean + 10.0);
    }

    #[test]
    fn series_values_stay_in_designed_ranges() {
        let mut rng = StdRng::seed_from_u64(1312);
        for point in live_series_with(&mut rng) {
            assert!(point.conversions >= 0.0 && point.conversions <= 120.0);
            assert!(point.baseline >= 15.0 && point.baseline < 20.0);
            assert!(point.confidence >= 92.0 && point.confidence < 96.0);
        }
    }

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(live_series_with(&mut a), live_series_with(&mut b));
    }

    #[test]
    fn channel_shares_sum_to_one_hundred() {
        let total: f64 = CHANNELS.iter().map(|c| c.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn device_shares_sum_to_one_hundred() {
        // Not enforced anywhere, but the shipped dataset should.
        let total: f64 = DEVICES.iter().map(|d| d.pct).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn log_labels_match_wire_style_tags() {
        assert_eq!(EVENT_LOG[0].event.label(), "TV_DETECTION");
        assert_eq!(EVENT_LOG[3].status.label(), "HEALTHY");
        assert_eq!(EVENT_LOG.len(), 4);
    }
}
