#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod highlight;
pub mod icons;
pub mod profile;
pub mod projects;
pub mod reveal;
pub mod schedule;
pub mod skills;
pub mod snippets;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a logger may already be installed on hot reload
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
