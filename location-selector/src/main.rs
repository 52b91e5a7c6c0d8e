//! Location Selector
//!
//! Three dependent dropdowns: a country, then a state of that country, then a
//! city of that state. Each list is fetched from the location service when its
//! parent changes; a summary appears once a city is chosen.
//!
//! Data flow:
//! 1. On mount, `LocationSelector` asks the controller to initialize, which
//!    issues the countries request.
//! 2. Every change event goes through `AppState::select`; the controller resets
//!    the dependent levels and hands back the next request, if any.
//! 3. Requests run as spawned tasks against the browser's `fetch`. Results that
//!    were superseded while in flight are dropped by the controller.

use dioxus::prelude::*;
use loc_core::ProviderConfig;
use loc_ui::components::LocationSelector;
use loc_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("location-selector-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = ProviderConfig::default();
        log::info!("Location service: {}", config.base_url);
        AppState::with_config(config)
    });

    rsx! {
        LocationSelector {}
    }
}
