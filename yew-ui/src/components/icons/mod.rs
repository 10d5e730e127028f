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

//! Pure SVG glyph components shared across the dashboard.

pub mod devices;
pub mod status;
pub mod symbols;

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or(16)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}
