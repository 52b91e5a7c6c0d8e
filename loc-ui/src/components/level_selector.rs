//! Dropdown for one level of the cascade.

use crate::state::AppState;
use dioxus::prelude::*;
use loc_core::{Level, LevelView};

/// One dependent `<select>`.
///
/// Shows a loading placeholder while the level is fetching, the level's error
/// message after a failed fetch, and the fetched names otherwise. Disabled until
/// the parent level has a selection.
#[component]
pub fn LevelSelector(level: Level) -> Element {
    let state = use_context::<AppState>();
    let (selected, enabled, view) = {
        let cascade = state.cascade.read();
        (
            cascade.view().level(level).selected.clone(),
            cascade.is_enabled(level),
            cascade.view_of(level),
        )
    };

    let (notice, names) = match view {
        LevelView::Loading(text) => (Some(text), Vec::new()),
        LevelView::Error(message) => (Some(message), Vec::new()),
        LevelView::Options(names) => (None, names),
    };

    let on_change = move |evt: Event<FormData>| {
        state.select(level, evt.value());
    };

    let select_id = format!("{}-select", level);
    let placeholder = level.placeholder();

    rsx! {
        div {
            style: "margin: 8px 0;",
            select {
                id: "{select_id}",
                class: "form-select",
                disabled: !enabled,
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "{placeholder}"
                }
                if let Some(text) = notice {
                    option {
                        value: "",
                        disabled: true,
                        "{text}"
                    }
                }
                for name in names.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
