pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = shared::config::load_app_config();
    // логирование через крейт `log`
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    log::info!(
        "config: delay={}ms page_size={}",
        config.submission.delay_ms,
        config.list.page_size
    );
    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
