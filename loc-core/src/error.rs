//! Error types for provider lookups and the inline messages shown per level.

use crate::level::Level;
use thiserror::Error;

/// Why a provider lookup failed.
///
/// The controller never shows these to the user directly: every variant turns
/// into the same [`FetchFailure`] for the affected level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// A failed fetch at one level, carrying the scope it was fetched for.
///
/// The `Display` output is the user-facing inline message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("Unable to load countries. Please reload to try again.")]
    Countries,
    #[error("Unable to load states for {country}.")]
    States { country: String },
    #[error("Unable to load cities for {state}, {country}.")]
    Cities { country: String, state: String },
}

impl FetchFailure {
    pub fn level(&self) -> Level {
        match self {
            FetchFailure::Countries => Level::Country,
            FetchFailure::States { .. } => Level::State,
            FetchFailure::Cities { .. } => Level::City,
        }
    }
}
