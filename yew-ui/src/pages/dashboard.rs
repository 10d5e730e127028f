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

//! The event command page.
//!
//! Owns every piece of live state: the tick reducer, the display-mode and
//! disclosure flags, and the channel selection. Data flows down to the
//! presentation components as props; interaction comes back up as
//! callbacks.

use std::rc::Rc;

use event_command_telemetry::feed::{EVENT_LOG, HEADLINE_STATS, LIVE_SERIES};
use event_command_telemetry::{toggle_selection, PanelStatus, TickerState};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::channel_breakdown::ChannelBreakdownCard;
use crate::components::charts::VelocityChart;
use crate::components::convergence::ConvergenceCard;
use crate::components::device_mix::DeviceMixCard;
use crate::components::footer::CommandFooter;
use crate::components::global_deployment::GlobalDeploymentCard;
use crate::components::header::CommandHeader;
use crate::components::icons::status::{CheckCircleIcon, LockIcon};
use crate::components::icons::symbols::{
    ActivityIcon, DatabaseIcon, ShieldIcon, TrendingUpIcon, UsersIcon,
};
use crate::components::info_panel::InfoPanel;
use crate::components::quick_actions::QuickActions;
use crate::components::region_matrix::RegionMatrix;
use crate::components::section_header::SectionHeader;
use crate::components::stat_card::StatCard;
use crate::components::stream_integrity::StreamIntegrity;
use crate::components::telemetry_log::TelemetryLog;
use crate::components::tooltip::{HoverTooltip, TooltipPosition};
use crate::constants::{COUNTDOWN_TICK_MS, HIGH_FIDELITY_DEFAULT, LOG_ROTATION_TICK_MS};
use crate::report;

/// Reducer wrapper around the pure tick state. Every tick goes through
/// [`Reducible::reduce`], which always sees the current state, so a timer
/// closure can never act on a stale pause flag.
#[derive(Clone, PartialEq)]
struct DashboardTicker(TickerState);

enum TickerAction {
    Second,
    Log,
    TogglePause,
}

impl Reducible for DashboardTicker {
    type Action = TickerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TickerAction::Second => next.0.tick_second(),
            TickerAction::Log => next.0.tick_log(),
            TickerAction::TogglePause => next.0.toggle_paused(),
        }
        next.into()
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let mounted = use_state(|| false);
    let ticker = use_reducer(|| DashboardTicker(TickerState::new(EVENT_LOG.len())));
    let high_fidelity = use_state(|| *HIGH_FIDELITY_DEFAULT);
    let selected_channel = use_state(|| None::<usize>);
    let show_global_info = use_state(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            mounted.set(true);
            || ()
        });
    }

    {
        let dispatcher = ticker.dispatcher();
        use_effect_with((), move |_| {
            // Both timers run for the whole page lifetime. Pause never
            // cancels them, it only turns their reducer action into a
            // no-op. The destructor cancels both on unmount.
            let second_tick = {
                let dispatcher = dispatcher.clone();
                Interval::new(COUNTDOWN_TICK_MS, move || {
                    dispatcher.dispatch(TickerAction::Second)
                })
            };
            let log_tick = Interval::new(LOG_ROTATION_TICK_MS, move || {
                dispatcher.dispatch(TickerAction::Log)
            });
            move || {
                drop(second_tick);
                drop(log_tick);
            }
        });
    }

    let on_toggle_pause = {
        let ticker = ticker.clone();
        Callback::from(move |_: MouseEvent| ticker.dispatch(TickerAction::TogglePause))
    };
    let on_toggle_high_fidelity = {
        let high_fidelity = high_fidelity.clone();
        Callback::from(move |_: MouseEvent| high_fidelity.set(!*high_fidelity))
    };
    let on_select_channel = {
        let selected_channel = selected_channel.clone();
        Callback::from(move |i: usize| selected_channel.set(toggle_selection(*selected_channel, i)))
    };
    let on_toggle_global_info = {
        let show_global_info = show_global_info.clone();
        Callback::from(move |_: MouseEvent| show_global_info.set(!*show_global_info))
    };
    let on_export = {
        let ticker = ticker.clone();
        Callback::from(move |_: MouseEvent| {
            report::export_report(ticker.0.countdown_secs, ticker.0.paused)
        })
    };

    // Blank placeholder until the first client render completes.
    if !*mounted {
        return html! { <div class="page-shell" /> };
    }

    let stats = &HEADLINE_STATS;

    html! {
        <div class={classes!("page-shell", high_fidelity.then_some("high-fidelity"))}>
            <div class="ambient-grid" />
            <div class="scan-line" />

            <CommandHeader
                countdown_secs={ticker.0.countdown_secs}
                paused={ticker.0.paused}
                high_fidelity={*high_fidelity}
                on_toggle_pause={on_toggle_pause}
                on_toggle_high_fidelity={on_toggle_high_fidelity}
                on_export={on_export.clone()}
            />

            <main class="command-main">
                <section>
                    <InfoPanel
                        title="Live Correlation Protocol"
                        description="Real-time attribution synchronization for high-volume broadcast events. This system answers: 'Did this TV ad actually cause these conversions?'"
                        details="The system employs a non-linear time-decay kernel to resolve 'Second Screen' spikes. It assumes a 15-second primary window for TV-to-Mobile intent transfer, based on Nielsen research showing peak mobile activity 8-12 seconds post-exposure."
                        use_case="Measures the TRUE incremental lift of live halftime spots versus organic social trending. Separates correlation from causation - not all traffic during an ad is caused by the ad."
                        technical="Proprietary mSPRT (Mixture Sequential Probability Ratio Test) running on a distributed event loop with sub-100ms lag ingestion. Bayesian inference with Dirichlet priors for uncertainty quantification."
                    />
                </section>

                <div class="stat-grid">
                    <HoverTooltip
                        content="Current Live Audience Size"
                        details="Number of unique viewers currently watching the live event. This is the total addressable audience for TV attribution - not all viewers will see your ad or convert."
                        position={TooltipPosition::Bottom}
                    >
                        <StatCard
                            label={stats[0].label}
                            value={stats[0].value}
                            trend={stats[0].trend}
                            trend_direction={stats[0].trend_direction}
                            color={stats[0].color}
                            icon={html! { <UsersIcon size={18} /> }}
                        />
                    </HoverTooltip>
                    <HoverTooltip
                        content="Incremental Return on Investment"
                        details="For every $1 spent on this broadcast ad, you're generating $3.14 in incremental revenue. 'Incremental' means revenue that would NOT have occurred without the ad - excludes organic conversions."
                        position={TooltipPosition::Bottom}
                    >
                        <StatCard
                            label={stats[1].label}
                            value={stats[1].value}
                            trend={stats[1].trend}
                            trend_direction={stats[1].trend_direction}
                            color={stats[1].color}
                            icon={html! { <TrendingUpIcon size={18} /> }}
                        />
                    </HoverTooltip>
                    <HoverTooltip
                        content="Causal Attribution Gap"
                        details="Average time between TV exposure and attributed conversion action. 4.2 seconds indicates strong 'immediate intent' - users are acting on the ad quickly, suggesting high relevance and clear call-to-action."
                        position={TooltipPosition::Bottom}
                    >
                        <StatCard
                            label={stats[2].label}
                            value={stats[2].value}
                            trend={stats[2].trend}
                            trend_direction={stats[2].trend_direction}
                            color={stats[2].color}
                            icon={html! { <ActivityIcon size={18} /> }}
                        />
                    </HoverTooltip>
                    <HoverTooltip
                        content="Attribution Model Health Score"
                        details="Confidence in the model's statistical validity. 98.2% indicates: sufficient sample size, stable baseline, no data quality issues, and mSPRT convergence. Below 90% would trigger automated alerts."
                        position={TooltipPosition::Bottom}
                    >
                        <StatCard
                            label={stats[3].label}
                            value={stats[3].value}
                            trend={stats[3].trend}
                            trend_direction={stats[3].trend_direction}
                            color={stats[3].color}
                            icon={html! { <ShieldIcon size={18} /> }}
                        />
                    </HoverTooltip>
                </div>

                <div class="command-grid">
                    <section class="velocity-section tactical-panel">
                        <div class="velocity-head">
                            <div>
                                <HoverTooltip
                                    content="Conversion Velocity Chart"
                                    details="Real-time visualization of conversion events per second. The yellow area shows actual conversions; the dashed line shows expected baseline. The gap between them is your incremental lift."
                                >
                                    <h3 class="velocity-title">{ "Conversion Velocity" }</h3>
                                </HoverTooltip>
                                <div class="velocity-subtitle">
                                    <div class="status-dot status-dot-active" />
                                    <p>{ "Causal_Analysis::Active" }</p>
                                </div>
                            </div>
                            <div class="velocity-legend">
                                <HoverTooltip content="Impact Spike Zone" details="Highlighted area where conversions significantly exceed baseline - this is attributed to your TV ad.">
                                    <div class="legend-chip">
                                        <div class="legend-chip-dot legend-chip-spike" />
                                        <span>{ "IMPACT_SPIKE" }</span>
                                    </div>
                                </HoverTooltip>
                                <HoverTooltip content="Baseline Noise" details="Expected conversion rate without any TV ad exposure - organic traffic from SEO, direct, social, etc.">
                                    <div class="legend-chip">
                                        <div class="legend-chip-dot legend-chip-baseline" />
                                        <span>{ "BASELINE_NOISE" }</span>
                                    </div>
                                </HoverTooltip>
                            </div>
                        </div>

                        <VelocityChart data={LIVE_SERIES.clone()} width={1100} height={400} />

                        <div class="velocity-footer">
                            <HoverTooltip content="Peak Conversion Rate" details="Maximum conversions per second during the ad break spike - 4.2x higher than baseline.">
                                <div class="velocity-stat">
                                    <div class="velocity-stat-value velocity-stat-spike">{ "94.2" }</div>
                                    <div class="velocity-stat-label">{ "Peak Conv/Sec" }</div>
                                </div>
                            </HoverTooltip>
                            <HoverTooltip content="Total Incremental Conversions" details="Total conversions attributed to this ad break that would not have occurred organically.">
                                <div class="velocity-stat">
                                    <div class="velocity-stat-value velocity-stat-incremental">{ "4,247" }</div>
                                    <div class="velocity-stat-label">{ "Incremental Conv" }</div>
                                </div>
                            </HoverTooltip>
                            <HoverTooltip content="Statistical Confidence" details="Probability that observed lift is real and not due to random chance. 99.8% = extremely confident.">
                                <div class="velocity-stat">
                                    <div class="velocity-stat-value velocity-stat-confidence">{ "99.8%" }</div>
                                    <div class="velocity-stat-label">{ "Confidence" }</div>
                                </div>
                            </HoverTooltip>
                        </div>

                        <InfoPanel
                            title="Understanding This Chart"
                            description="This chart separates 'correlation' from 'causation' - the fundamental challenge in TV attribution."
                            details="The yellow area shows real conversion events. The dashed baseline shows what would have happened WITHOUT the TV ad. The shaded 'AD_BREAK_SPIKE' region is where we attribute conversions TO the TV ad."
                            use_case="When conversions spike above baseline during/after your ad, that's incremental lift. The area BETWEEN the yellow line and baseline = money your ad actually generated."
                            technical="Uses Dynamic Poisson modeling with adaptive latent parameters. Baseline calculated via 5-min rolling average with outlier rejection. Spike detection via 3-sigma threshold."
                        />
                    </section>

                    <div class="command-sidebar">
                        <StreamIntegrity />
                        <RegionMatrix />

                        <section class="sidebar-panel telemetry-panel">
                            <SectionHeader
                                title="Telemetry_Stream"
                                subtitle="Real-Time Event Log"
                                icon={html! { <DatabaseIcon size={20} class={classes!("glyph-purple")} /> }}
                                tooltip="Live System Events"
                                tooltip_details="Real-time feed of significant system events including TV ad detection, traffic spikes, attribution calculations, and model health updates."
                                status={PanelStatus::Active}
                            />

                            <TelemetryLog entries={EVENT_LOG.to_vec()} active={ticker.0.active_log} />

                            <div class="telemetry-panel-footer">
                                <HoverTooltip content="System Integrity" details="All automated diagnostics passing. Model convergence confirmed.">
                                    <div class="integrity-tile glass-emerald">
                                        <LockIcon size={14} />
                                        <span>{ "Locked" }</span>
                                    </div>
                                </HoverTooltip>
                                <HoverTooltip content="Alert Status" details="No active alerts. All thresholds within normal range.">
                                    <div class="integrity-tile glass-surface">
                                        <CheckCircleIcon size={14} />
                                        <span>{ "0 Alerts" }</span>
                                    </div>
                                </HoverTooltip>
                            </div>
                        </section>

                        <QuickActions on_export={on_export} />
                    </div>
                </div>

                <div class="card-grid">
                    <ChannelBreakdownCard
                        selected={*selected_channel}
                        on_select={on_select_channel}
                    />
                    <ConvergenceCard />
                    <DeviceMixCard />
                    <GlobalDeploymentCard
                        show_regions={*show_global_info}
                        on_toggle={on_toggle_global_info}
                    />
                </div>
            </main>

            <CommandFooter />
        </div>
    }
}
