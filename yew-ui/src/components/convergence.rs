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

//! mSPRT convergence card. The R-Hat figure is a cosmetic constant.

use yew::prelude::*;

use crate::components::expandable_card::{CardDetails, ExpandableCard};
use crate::components::icons::status::CheckCircleIcon;
use crate::components::icons::symbols::TargetIcon;
use crate::components::tooltip::HoverTooltip;

#[function_component(ConvergenceCard)]
pub fn convergence_card() -> Html {
    html! {
        <ExpandableCard
            title="mSPRT Convergence"
            summary="Statistical Validity"
            color="#10b981"
            icon={html! { <TargetIcon size={16} class={classes!("glyph-emerald")} /> }}
            details={CardDetails {
                what: AttrValue::from("Mixture Sequential Probability Ratio Test - a statistical method for continuous hypothesis testing."),
                why: AttrValue::from("Tells you if your observed lift is statistically significant or just random noise. Critical for confident decision-making."),
                how: AttrValue::from("Continuously calculates likelihood ratio as data streams in. R-Hat near 1.0 indicates model chains have converged."),
                value: AttrValue::from("Avoid false positives - don't celebrate (or optimize for) 'lift' that's actually just variance."),
            }}
        >
            <div class="convergence-readout">
                <HoverTooltip
                    content="R-Hat Convergence Statistic"
                    details="Gelman-Rubin diagnostic. Values between 1.0-1.05 indicate excellent convergence. Your 1.02 means the model is stable and trustworthy."
                >
                    <div class="convergence-figure">
                        <div class="convergence-value">{ "1.02" }</div>
                        <span class="convergence-status">
                            <CheckCircleIcon size={12} />
                            { "R-Hat Optimal" }
                        </span>
                    </div>
                </HoverTooltip>
            </div>
            <div class="convergence-footer">
                <span>{ "p-value: 0.002" }</span>
                <span>{ "|" }</span>
                <span>{ "Power: 94%" }</span>
            </div>
        </ExpandableCard>
    }
}
