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

use event_command_ui::app::App;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    log::info!("starting event command UI");
    yew::Renderer::<App>::new().render();
}
