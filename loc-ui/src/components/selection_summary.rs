//! Summary line shown once a city is chosen.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SelectionSummary() -> Element {
    let state = use_context::<AppState>();
    let summary = state.cascade.read().summary();

    rsx! {
        if let Some(text) = summary {
            div {
                class: "selected-location",
                style: "margin-top: 16px;",
                p { "{text}" }
            }
        }
    }
}
