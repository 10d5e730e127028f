pub mod channel_breakdown;
pub mod charts;
pub mod convergence;
pub mod countdown;
pub mod device_mix;
pub mod expandable_card;
pub mod footer;
pub mod global_deployment;
pub mod header;
pub mod icons;
pub mod info_panel;
pub mod quick_actions;
pub mod region_matrix;
pub mod section_header;
pub mod stat_card;
pub mod stream_integrity;
pub mod telemetry_log;
pub mod tooltip;
