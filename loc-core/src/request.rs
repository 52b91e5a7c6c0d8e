//! What the controller asks the provider for.
//!
//! A [`FetchRequest`] pairs the lookup [`Scope`] with a [`FetchTicket`]. The ticket
//! is handed back to [`crate::CascadeController::complete`] so a result that
//! arrives after the user has moved on can be recognized and dropped.

use crate::error::{FetchFailure, ProviderError};
use crate::level::Level;
use crate::provider::LocationProvider;
use serde::Serialize;
use std::fmt;

/// Identifies one fetch at one level.
///
/// `generation` is the level's counter at the moment the fetch was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FetchTicket {
    pub level: Level,
    pub generation: u64,
}

/// The lookup to perform, with the selections it is keyed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Scope {
    Countries,
    States { country: String },
    Cities { country: String, state: String },
}

impl Scope {
    /// The level whose option list this lookup fills.
    pub fn level(&self) -> Level {
        match self {
            Scope::Countries => Level::Country,
            Scope::States { .. } => Level::State,
            Scope::Cities { .. } => Level::City,
        }
    }

    /// Endpoint path relative to the provider's base URL, path parameters encoded.
    pub fn path(&self) -> String {
        match self {
            Scope::Countries => "countries".to_string(),
            Scope::States { country } => {
                format!("country={}/states", urlencoding::encode(country))
            }
            Scope::Cities { country, state } => format!(
                "country={}/state={}/cities",
                urlencoding::encode(country),
                urlencoding::encode(state)
            ),
        }
    }

    /// The inline message shown when this lookup fails.
    pub fn failure(&self) -> FetchFailure {
        match self {
            Scope::Countries => FetchFailure::Countries,
            Scope::States { country } => FetchFailure::States {
                country: country.clone(),
            },
            Scope::Cities { country, state } => FetchFailure::Cities {
                country: country.clone(),
                state: state.clone(),
            },
        }
    }

    /// Run the matching provider lookup.
    pub async fn fetch_from<P>(&self, provider: &P) -> Result<Vec<String>, ProviderError>
    where
        P: LocationProvider + ?Sized,
    {
        match self {
            Scope::Countries => provider.countries().await,
            Scope::States { country } => provider.states(country).await,
            Scope::Cities { country, state } => provider.cities(country, state).await,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Countries => write!(f, "countries"),
            Scope::States { country } => write!(f, "states of {}", country),
            Scope::Cities { country, state } => write!(f, "cities of {}, {}", state, country),
        }
    }
}

/// A fetch the controller wants performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub scope: Scope,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_provider_layout() {
        assert_eq!(Scope::Countries.path(), "countries");
        assert_eq!(
            Scope::States {
                country: "India".to_string()
            }
            .path(),
            "country=India/states"
        );
        assert_eq!(
            Scope::Cities {
                country: "India".to_string(),
                state: "Karnataka".to_string()
            }
            .path(),
            "country=India/state=Karnataka/cities"
        );
    }

    #[test]
    fn path_parameters_are_encoded() {
        let scope = Scope::Cities {
            country: "United States".to_string(),
            state: "New York/NJ".to_string(),
        };
        assert_eq!(
            scope.path(),
            "country=United%20States/state=New%20York%2FNJ/cities"
        );
    }

    #[test]
    fn scope_level_matches_failure_level() {
        let scopes = [
            Scope::Countries,
            Scope::States {
                country: "India".to_string(),
            },
            Scope::Cities {
                country: "India".to_string(),
                state: "Goa".to_string(),
            },
        ];
        for scope in scopes {
            assert_eq!(scope.level(), scope.failure().level());
        }
    }
}
