//! The remote source of location names.

use crate::error::ProviderError;
use async_trait::async_trait;

/// Read-only lookups against a location data service.
///
/// Each method returns names in the provider's order. Implementations must treat
/// any non-success response as an error rather than an empty list.
///
/// Futures are not required to be `Send`: the browser implementation awaits
/// JS promises, and every caller drives the controller from a single thread.
#[async_trait(?Send)]
pub trait LocationProvider {
    async fn countries(&self) -> Result<Vec<String>, ProviderError>;

    async fn states(&self, country: &str) -> Result<Vec<String>, ProviderError>;

    async fn cities(&self, country: &str, state: &str) -> Result<Vec<String>, ProviderError>;
}
