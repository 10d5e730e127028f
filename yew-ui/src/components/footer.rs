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

use crate::components::tooltip::HoverTooltip;
use crate::constants::BUILD_TAG;

#[function_component(CommandFooter)]
pub fn command_footer() -> Html {
    html! {
        <footer class="command-footer">
            <div class="command-footer-inner">
                <div class="command-footer-status">
                    <HoverTooltip content="System Status" details="All systems operational. Real-time synchronization active with no detected issues.">
                        <div class="footer-sync">
                            <div class="status-dot status-dot-active" />
                            <span>{ "SYSTEM_SYNC_ACTIVE" }</span>
                        </div>
                    </HoverTooltip>
                    <HoverTooltip content="Build Version" details="Current deployment version. Format: Major.Minor.Commit">
                        <div class="footer-build">{ format!("BUILD::{BUILD_TAG}") }</div>
                    </HoverTooltip>
                </div>
                <div class="command-footer-sources">
                    <HoverTooltip content="Netflix Metrics Integration" details="Connected to Netflix's internal metrics API for audience size and viewing data.">
                        <span>{ "NETFLIX_METRICS_SERVER" }</span>
                    </HoverTooltip>
                    <HoverTooltip content="WWE Broadcast Hub" details="Real-time feed from WWE's broadcast truck for ad break timing and content detection.">
                        <span>{ "WWE_BROADCAST_HUB" }</span>
                    </HoverTooltip>
                </div>
                <HoverTooltip content="Marketing Science Engineering" details="Built by the Marketing Science team for premium attribution use cases.">
                    <div class="footer-credit">{ "MAR_SCI_ENGINEERING_PRM" }</div>
                </HoverTooltip>
            </div>
        </footer>
    }
}
