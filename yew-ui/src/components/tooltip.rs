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

//! Hover-activated tooltip bubble anchored to an arbitrary trigger element.
//!
//! Pointer-enter opens, pointer-leave closes immediately; there is no delay
//! or debounce and each instance owns only its own open flag.

use yew::prelude::*;

use crate::components::icons::status::InfoIcon;

#[derive(Clone, Copy, PartialEq)]
pub enum TooltipPosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipPosition {
    fn class(&self) -> &'static str {
        match self {
            TooltipPosition::Top => "tooltip-bubble-top",
            TooltipPosition::Bottom => "tooltip-bubble-bottom",
            TooltipPosition::Left => "tooltip-bubble-left",
            TooltipPosition::Right => "tooltip-bubble-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HoverTooltipProps {
    /// Headline of the bubble.
    pub content: AttrValue,
    /// Optional longer explanation under the headline.
    #[prop_or_default]
    pub details: Option<AttrValue>,
    #[prop_or(TooltipPosition::Top)]
    pub position: TooltipPosition,
    pub children: Children,
}

#[function_component(HoverTooltip)]
pub fn hover_tooltip(props: &HoverTooltipProps) -> Html {
    let open = use_state(|| false);

    let onmouseenter = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let onmouseleave = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    html! {
        <div class="tooltip-anchor" {onmouseenter} {onmouseleave}>
            { for props.children.iter() }
            if *open {
                <div class={classes!("tooltip-bubble", props.position.class())}>
                    <div class="tooltip-headline">
                        <InfoIcon size={14} class={classes!("tooltip-icon")} />
                        <p class="tooltip-content">{ props.content.clone() }</p>
                    </div>
                    if let Some(details) = &props.details {
                        <p class="tooltip-details">{ details.clone() }</p>
                    }
                    <div class="tooltip-arrow" />
                </div>
            }
        </div>
    }
}
