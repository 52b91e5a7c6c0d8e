//! Reusable Dioxus RSX components for the location selector.

mod error_display;
mod level_selector;
mod location_selector;
mod selection_summary;
mod selector_header;

pub use error_display::ErrorDisplay;
pub use level_selector::LevelSelector;
pub use location_selector::LocationSelector;
pub use selection_summary::SelectionSummary;
pub use selector_header::SelectorHeader;
