//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the cascade controller in a Signal provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`,
//! read the controller's view to render, and route user input back through
//! [`AppState::select`]. Fetches run as spawned tasks that report their result
//! to the controller, which drops any that have been superseded.

use crate::fetch::BrowserProvider;
use dioxus::prelude::*;
use loc_core::{CascadeController, Completion, FetchRequest, Level, ProviderConfig};

/// Shared application state for the location selector.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Selection state machine and its view
    pub cascade: Signal<CascadeController>,
    /// Where lookups are sent
    pub config: Signal<ProviderConfig>,
}

impl AppState {
    /// Create a new AppState pointed at the default provider.
    pub fn new() -> Self {
        Self::with_config(ProviderConfig::default())
    }

    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            cascade: Signal::new(CascadeController::new()),
            config: Signal::new(config),
        }
    }

    /// Clear all selections and (re)load the country list.
    pub fn initialize(mut self) {
        let request = self.cascade.write().initialize();
        self.dispatch(request);
    }

    /// Route a change from one of the three controls.
    pub fn select(mut self, level: Level, value: String) {
        let request = {
            let mut cascade = self.cascade.write();
            match level {
                Level::Country => cascade.select_country(value),
                Level::State => cascade.select_state(value),
                Level::City => {
                    cascade.select_city(value);
                    None
                }
            }
        };
        if let Some(request) = request {
            self.dispatch(request);
        }
    }

    fn dispatch(self, request: FetchRequest) {
        let mut cascade = self.cascade;
        let provider = BrowserProvider::new(self.config.peek().clone());

        spawn(async move {
            let result = request.scope.fetch_from(&provider).await;
            if cascade.write().complete(request.ticket, result) == Completion::Stale {
                log::debug!("Dropped superseded result for {}", request.scope);
            }
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
