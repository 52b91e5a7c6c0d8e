//! The dependent-fetch state machine behind the widget.
//!
//! The controller performs no I/O. Selection methods update [`ViewState`]
//! synchronously and return the [`FetchRequest`] the caller should run; the
//! caller reports the outcome through [`CascadeController::complete`].
//!
//! Every level carries a generation counter. It is bumped whenever a fetch is
//! issued at that level and whenever a change above the level invalidates it.
//! A completion whose ticket no longer matches is dropped, so a slow response for
//! a country the user has already left can never overwrite newer state.

use crate::error::ProviderError;
use crate::level::Level;
use crate::provider::LocationProvider;
use crate::request::{FetchRequest, FetchTicket, Scope};
use crate::view_state::{LevelView, ViewState};
use log::{debug, warn};

/// What happened to a reported result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result belonged to the current fetch and was applied.
    Applied,
    /// The fetch had been superseded; nothing changed.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct CascadeController {
    view: ViewState,
    generations: [u64; 3],
    in_flight: [Option<Scope>; 3],
}

impl CascadeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_of(&self, level: Level) -> LevelView {
        self.view.view_of(level)
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.view.is_enabled(level)
    }

    pub fn summary(&self) -> Option<String> {
        self.view.summary()
    }

    /// Start (or restart) the widget: clear every selection and load countries.
    pub fn initialize(&mut self) -> FetchRequest {
        self.view.country.selected.clear();
        self.invalidate_below(Level::Country);
        self.begin(Scope::Countries)
    }

    /// Choose a country. An empty name clears the selection and issues no fetch.
    pub fn select_country(&mut self, name: impl Into<String>) -> Option<FetchRequest> {
        let name = name.into();
        self.view.country.selected = name.clone();
        self.invalidate_below(Level::Country);

        if name.is_empty() {
            return None;
        }
        Some(self.begin(Scope::States { country: name }))
    }

    /// Choose a state of the selected country.
    ///
    /// Without a selected country the name is not recorded, since a state cannot
    /// exist without its country; cities are still reset.
    pub fn select_state(&mut self, name: impl Into<String>) -> Option<FetchRequest> {
        let name = name.into();
        let country = self.view.country.selected.clone();

        if country.is_empty() && !name.is_empty() {
            warn!("Ignoring state {:?}: no country selected", name);
            self.view.state.selected.clear();
        } else {
            self.view.state.selected = name.clone();
        }
        self.invalidate_below(Level::State);

        if country.is_empty() || name.is_empty() {
            return None;
        }
        Some(self.begin(Scope::Cities {
            country,
            state: name,
        }))
    }

    /// Choose a city. Terminal level: nothing is fetched or reset.
    pub fn select_city(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.view.state.has_selection() && !name.is_empty() {
            warn!("Ignoring city {:?}: no state selected", name);
            return;
        }
        self.view.city.selected = name;
    }

    /// Whether `ticket` still identifies the fetch in flight at its level.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        let idx = ticket.level.index();
        self.generations[idx] == ticket.generation && self.in_flight[idx].is_some()
    }

    /// Apply the outcome of a fetch previously returned by this controller.
    ///
    /// Whatever the outcome, the selection at the fetched level and everything
    /// below it is cleared: a fresh list invalidates values chosen from the old one.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<String>, ProviderError>,
    ) -> Completion {
        if !self.is_current(ticket) {
            debug!(
                "Discarding stale {} result (generation {}, current {})",
                ticket.level,
                ticket.generation,
                self.generations[ticket.level.index()]
            );
            return Completion::Stale;
        }

        let idx = ticket.level.index();
        let scope = self.in_flight[idx].take();
        let state = self.view.level_mut(ticket.level);
        state.loading = false;
        state.selected.clear();

        match result {
            Ok(names) => {
                debug!("Loaded {} {} option(s)", names.len(), ticket.level);
                state.options = names;
                state.error.clear();
            }
            Err(err) => {
                let message = scope
                    .map(|scope| scope.failure().to_string())
                    .unwrap_or_else(|| format!("Unable to load {} options.", ticket.level));
                warn!("{} ({})", message, err);
                state.options.clear();
                state.error = message;
            }
        }

        self.invalidate_below(ticket.level);
        Completion::Applied
    }

    /// Run `request` against `provider` and apply the result.
    ///
    /// Holds the controller for the whole round trip, so it suits sequential
    /// callers such as the CLI. Interactive front ends should run the fetch
    /// themselves and call [`Self::complete`] when it settles.
    pub async fn drive<P>(&mut self, request: FetchRequest, provider: &P) -> Completion
    where
        P: LocationProvider + ?Sized,
    {
        let result = request.scope.fetch_from(provider).await;
        self.complete(request.ticket, result)
    }

    fn begin(&mut self, scope: Scope) -> FetchRequest {
        let level = scope.level();
        let idx = level.index();
        self.generations[idx] += 1;
        self.in_flight[idx] = Some(scope.clone());

        let state = self.view.level_mut(level);
        state.loading = true;
        state.error.clear();

        debug!("Fetching {} (generation {})", scope, self.generations[idx]);
        FetchRequest {
            ticket: FetchTicket {
                level,
                generation: self.generations[idx],
            },
            scope,
        }
    }

    /// Reset every level below `level` and orphan any fetch still running there.
    fn invalidate_below(&mut self, level: Level) {
        for below in level.descendants() {
            let idx = below.index();
            if self.in_flight[idx].take().is_some() {
                self.generations[idx] += 1;
            }
            self.view.level_mut(below).reset();
        }
    }
}
