//! Location lookups through the browser's `fetch`.
//!
//! reqwest is kept out of the WASM build; the browser already has an HTTP
//! client, reached here through `web-sys` and awaited with `wasm-bindgen-futures`.

use async_trait::async_trait;
use loc_core::{LocationProvider, ProviderConfig, ProviderError, Scope};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserProvider {
    config: ProviderConfig,
}

impl BrowserProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    async fn get_names(&self, scope: &Scope) -> Result<Vec<String>, ProviderError> {
        let url = self.config.url_for(scope);
        log::info!("GET {}", url);

        let window = web_sys::window()
            .ok_or_else(|| ProviderError::Transport("no browser window".to_string()))?;

        let init = RequestInit::new();
        init.set_method("GET");
        let request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(js_error)?;

        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = value.dyn_into().map_err(js_error)?;

        if !response.ok() {
            log::warn!("Bad response status for {}: {}", scope, response.status());
            return Err(ProviderError::Status {
                status: response.status(),
            });
        }

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let body = text
            .as_string()
            .ok_or_else(|| ProviderError::Decode("response body is not text".to_string()))?;
        parse_names(&body)
    }
}

#[async_trait(?Send)]
impl LocationProvider for BrowserProvider {
    async fn countries(&self) -> Result<Vec<String>, ProviderError> {
        self.get_names(&Scope::Countries).await
    }

    async fn states(&self, country: &str) -> Result<Vec<String>, ProviderError> {
        self.get_names(&Scope::States {
            country: country.to_string(),
        })
        .await
    }

    async fn cities(&self, country: &str, state: &str) -> Result<Vec<String>, ProviderError> {
        self.get_names(&Scope::Cities {
            country: country.to_string(),
            state: state.to_string(),
        })
        .await
    }
}

/// Decode a provider body: a JSON array of names.
pub fn parse_names(body: &str) -> Result<Vec<String>, ProviderError> {
    serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))
}

fn js_error(value: JsValue) -> ProviderError {
    ProviderError::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_in_order() {
        let names = parse_names(r#"["India","USA","Brazil"]"#).unwrap();
        assert_eq!(names, vec!["India", "USA", "Brazil"]);
    }

    #[test]
    fn rejects_non_array_body() {
        let err = parse_names(r#"{"message":"Internal Server Error"}"#).unwrap_err();
        assert!(matches!(err, ProviderError::Decode(_)));
    }
}
