//! The complete widget: three dependent dropdowns and the summary.

use crate::components::{ErrorDisplay, LevelSelector, SelectionSummary, SelectorHeader};
use crate::state::AppState;
use dioxus::prelude::*;
use loc_core::Level;

/// Expects an [`AppState`] in context. Loads countries on mount.
#[component]
pub fn LocationSelector() -> Element {
    let state = use_context::<AppState>();

    // Initialize on mount
    use_effect(move || {
        state.initialize();
    });

    let country_error = {
        let cascade = state.cascade.read();
        let country = &cascade.view().country;
        (!country.loading && country.has_error()).then(|| country.error.clone())
    };

    rsx! {
        div {
            class: "container",
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            SelectorHeader { title: "Select Location".to_string() }

            div {
                class: "row",
                style: "display: flex; gap: 12px;",
                for level in Level::ALL {
                    LevelSelector { key: "{level}", level: level }
                }
            }

            if let Some(message) = country_error {
                ErrorDisplay {
                    message: message,
                    on_retry: EventHandler::new(move |_| state.initialize()),
                }
            }

            SelectionSummary {}
        }
    }
}
