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

use yew::prelude::*;

use crate::components::icons::status::AlertTriangleIcon;
use crate::components::icons::symbols::{DatabaseIcon, DownloadIcon, RefreshIcon};
use crate::components::tooltip::HoverTooltip;

#[derive(Properties, PartialEq)]
pub struct QuickActionsProps {
    /// Fired by the "Export CSV" shortcut; shares the header's export path.
    pub on_export: Callback<MouseEvent>,
}

#[function_component(QuickActions)]
pub fn quick_actions(props: &QuickActionsProps) -> Html {
    let on_refresh = Callback::from(|_: MouseEvent| {
        log::info!("quick action: refresh requested (datasets are fixed for the page lifetime)");
    });
    let on_view_logs = Callback::from(|_: MouseEvent| {
        log::info!("quick action: view logs requested");
    });
    let on_alerts = Callback::from(|_: MouseEvent| {
        log::info!("quick action: alerts requested, none active");
    });

    html! {
        <section class="sidebar-panel quick-actions">
            <div class="quick-actions-head">
                <RefreshIcon size={18} class={classes!("glyph-emerald")} />
                <h4>{ "Quick Actions" }</h4>
            </div>
            <div class="quick-actions-grid">
                <HoverTooltip content="Refresh Data" details="Click to refresh data">
                    <button class="quick-action-btn" onclick={on_refresh}>
                        <RefreshIcon size={14} class={classes!("glyph-emerald")} />
                        <span>{ "Refresh Data" }</span>
                    </button>
                </HoverTooltip>
                <HoverTooltip content="Export CSV" details="Click to export the attribution datasets">
                    <button class="quick-action-btn" onclick={props.on_export.clone()}>
                        <DownloadIcon size={14} class={classes!("glyph-blue")} />
                        <span>{ "Export CSV" }</span>
                    </button>
                </HoverTooltip>
                <HoverTooltip content="View Logs" details="Click to view logs">
                    <button class="quick-action-btn" onclick={on_view_logs}>
                        <DatabaseIcon size={14} class={classes!("glyph-purple")} />
                        <span>{ "View Logs" }</span>
                    </button>
                </HoverTooltip>
                <HoverTooltip content="Alerts" details="Click to view alerts">
                    <button class="quick-action-btn" onclick={on_alerts}>
                        <AlertTriangleIcon size={14} class={classes!("glyph-amber")} />
                        <span>{ "Alerts" }</span>
                    </button>
                </HoverTooltip>
            </div>
        </section>
    }
}
