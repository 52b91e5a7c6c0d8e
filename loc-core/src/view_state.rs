//! The observable state of the widget.
//!
//! `ViewState` is a plain snapshot: front ends read it to render and never mutate
//! it directly. All changes go through [`crate::CascadeController`].

use crate::level::Level;
use serde::Serialize;

/// Everything shown for one level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LevelState {
    /// Fetched names, provider order.
    pub options: Vec<String>,
    /// Empty means no selection.
    pub selected: String,
    /// True only while a fetch for this level is in flight.
    pub loading: bool,
    /// Empty unless the latest fetch for this level failed.
    pub error: String,
}

impl LevelState {
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Drop list, selection, loading flag and error.
    pub(crate) fn reset(&mut self) {
        *self = LevelState::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub country: LevelState,
    pub state: LevelState,
    pub city: LevelState,
}

impl ViewState {
    pub fn level(&self, level: Level) -> &LevelState {
        match level {
            Level::Country => &self.country,
            Level::State => &self.state,
            Level::City => &self.city,
        }
    }

    pub(crate) fn level_mut(&mut self, level: Level) -> &mut LevelState {
        match level {
            Level::Country => &mut self.country,
            Level::State => &mut self.state,
            Level::City => &mut self.city,
        }
    }

    pub fn countries(&self) -> &[String] {
        &self.country.options
    }

    pub fn states(&self) -> &[String] {
        &self.state.options
    }

    pub fn cities(&self) -> &[String] {
        &self.city.options
    }

    pub fn selected_country(&self) -> &str {
        &self.country.selected
    }

    pub fn selected_state(&self) -> &str {
        &self.state.selected
    }

    pub fn selected_city(&self) -> &str {
        &self.city.selected
    }

    /// A level's control is usable only once its parent has a selection.
    pub fn is_enabled(&self, level: Level) -> bool {
        match level.parent() {
            Some(parent) => self.level(parent).has_selection(),
            None => true,
        }
    }

    /// What the level's control should display.
    ///
    /// Loading wins over an error, an error wins over the fetched list.
    pub fn view_of(&self, level: Level) -> LevelView {
        let state = self.level(level);
        if state.loading {
            LevelView::Loading(level.loading_text().to_string())
        } else if state.has_error() {
            LevelView::Error(state.error.clone())
        } else {
            LevelView::Options(state.options.clone())
        }
    }

    /// "You selected {city}, {state}, {country}" once a city is chosen.
    pub fn summary(&self) -> Option<String> {
        if !self.city.has_selection() {
            return None;
        }
        Some(format!(
            "You selected {}, {}, {}",
            self.city.selected, self.state.selected, self.country.selected
        ))
    }

    /// Any level still waiting on the provider.
    pub fn is_pending(&self) -> bool {
        Level::ALL.iter().any(|level| self.level(*level).loading)
    }
}

/// Rendering projection for one level's control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelView {
    Loading(String),
    Error(String),
    Options(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_takes_precedence_over_error() {
        let mut view = ViewState::default();
        view.state.loading = true;
        view.state.error = "Unable to load states for India.".to_string();
        assert_eq!(
            view.view_of(Level::State),
            LevelView::Loading("Loading states...".to_string())
        );

        view.state.loading = false;
        assert_eq!(
            view.view_of(Level::State),
            LevelView::Error("Unable to load states for India.".to_string())
        );
    }

    #[test]
    fn controls_enable_top_down() {
        let mut view = ViewState::default();
        assert!(view.is_enabled(Level::Country));
        assert!(!view.is_enabled(Level::State));
        assert!(!view.is_enabled(Level::City));

        view.country.selected = "India".to_string();
        assert!(view.is_enabled(Level::State));
        assert!(!view.is_enabled(Level::City));
    }

    #[test]
    fn summary_requires_a_city() {
        let mut view = ViewState::default();
        view.country.selected = "India".to_string();
        view.state.selected = "Karnataka".to_string();
        assert_eq!(view.summary(), None);

        view.city.selected = "Bengaluru".to_string();
        assert_eq!(
            view.summary().as_deref(),
            Some("You selected Bengaluru, Karnataka, India")
        );
    }
}
