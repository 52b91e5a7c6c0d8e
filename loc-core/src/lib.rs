//! Core of the cascading location selector.
//!
//! A user picks a country, then a state of that country, then a city of that
//! state. Each level is filled by a remote lookup keyed on the selections above it.
//!
//! This crate provides:
//! - `controller`: the sans-IO [`CascadeController`] state machine
//! - `view_state`: the observable [`ViewState`] snapshot consumed by front ends
//! - `request`: fetch scopes, tickets and endpoint paths
//! - `provider`: the [`LocationProvider`] capability the controller's requests are fed to
//! - `config`: provider base URL and timeout
//! - `http` (feature `api`): a reqwest-backed provider for native targets

pub mod config;
pub mod controller;
pub mod error;
pub mod level;
pub mod provider;
pub mod request;
pub mod view_state;

#[cfg(feature = "api")]
pub mod http;

pub use config::ProviderConfig;
pub use controller::{CascadeController, Completion};
pub use error::{FetchFailure, ProviderError};
pub use level::Level;
pub use provider::LocationProvider;
pub use request::{FetchRequest, FetchTicket, Scope};
pub use view_state::{LevelState, LevelView, ViewState};
