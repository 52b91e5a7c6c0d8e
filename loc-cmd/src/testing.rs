//! In-memory provider for command tests.

use async_trait::async_trait;
use loc_core::{LocationProvider, ProviderError};
use std::collections::HashMap;

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Answers from fixed tables; anything missing is a server error.
#[derive(Default)]
pub struct StubProvider {
    pub countries: Option<Vec<String>>,
    pub states: HashMap<String, Vec<String>>,
    pub cities: HashMap<(String, String), Vec<String>>,
}

impl StubProvider {
    pub fn india() -> Self {
        let mut provider = StubProvider {
            countries: Some(names(&["India", "USA"])),
            ..StubProvider::default()
        };
        provider
            .states
            .insert("India".to_string(), names(&["Karnataka", "Maharashtra"]));
        provider.cities.insert(
            ("India".to_string(), "Karnataka".to_string()),
            names(&["Bengaluru", "Mysuru"]),
        );
        provider
    }
}

fn server_error() -> ProviderError {
    ProviderError::Status { status: 500 }
}

#[async_trait(?Send)]
impl LocationProvider for StubProvider {
    async fn countries(&self) -> Result<Vec<String>, ProviderError> {
        self.countries.clone().ok_or_else(server_error)
    }

    async fn states(&self, country: &str) -> Result<Vec<String>, ProviderError> {
        self.states.get(country).cloned().ok_or_else(server_error)
    }

    async fn cities(&self, country: &str, state: &str) -> Result<Vec<String>, ProviderError> {
        self.cities
            .get(&(country.to_string(), state.to_string()))
            .cloned()
            .ok_or_else(server_error)
    }
}
