//! Walk the cascade the way a user would in the widget.

use anyhow::bail;
use loc_core::{CascadeController, Level, LocationProvider, ViewState};
use log::{info, warn};

/// Drive the controller through country, then optionally state and city.
///
/// Stops with an error carrying the level's inline message as soon as a fetch
/// fails. Names missing from a fetched list are only warned about: the service
/// is the authority on what it can answer.
pub async fn walk<P>(
    provider: &P,
    country: &str,
    state: Option<&str>,
    city: Option<&str>,
) -> anyhow::Result<ViewState>
where
    P: LocationProvider + ?Sized,
{
    let mut controller = CascadeController::new();

    let request = controller.initialize();
    controller.drive(request, provider).await;
    ensure_loaded(&controller, Level::Country)?;
    warn_if_unlisted(controller.view().countries(), country, Level::Country);

    if let Some(request) = controller.select_country(country) {
        controller.drive(request, provider).await;
    }
    ensure_loaded(&controller, Level::State)?;

    if let Some(state) = state {
        warn_if_unlisted(controller.view().states(), state, Level::State);
        if let Some(request) = controller.select_state(state) {
            controller.drive(request, provider).await;
        }
        ensure_loaded(&controller, Level::City)?;

        if let Some(city) = city {
            warn_if_unlisted(controller.view().cities(), city, Level::City);
            controller.select_city(city);
        }
    }

    Ok(controller.view().clone())
}

pub async fn run_select<P>(
    provider: &P,
    country: &str,
    state: Option<&str>,
    city: Option<&str>,
    json: bool,
) -> anyhow::Result<()>
where
    P: LocationProvider + ?Sized,
{
    let view = walk(provider, country, state, city).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    match view.summary() {
        Some(summary) => println!("{}", summary),
        None => {
            // Show what the next control would offer.
            let next = if view.state.has_selection() {
                Level::City
            } else {
                Level::State
            };
            for name in &view.level(next).options {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

fn ensure_loaded(controller: &CascadeController, level: Level) -> anyhow::Result<()> {
    let state = controller.view().level(level);
    if state.has_error() {
        bail!("{}", state.error);
    }
    info!("{} {} option(s) available", state.options.len(), level);
    Ok(())
}

fn warn_if_unlisted(options: &[String], name: &str, level: Level) {
    if !name.is_empty() && !options.iter().any(|option| option == name) {
        warn!("{:?} is not among the fetched {} options", name, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubProvider;

    #[tokio::test]
    async fn walks_to_summary() {
        let provider = StubProvider::india();
        let view = walk(&provider, "India", Some("Karnataka"), Some("Bengaluru"))
            .await
            .unwrap();
        assert_eq!(
            view.summary().as_deref(),
            Some("You selected Bengaluru, Karnataka, India")
        );
        assert_eq!(view.cities(), ["Bengaluru", "Mysuru"]);
    }

    #[tokio::test]
    async fn country_only_lists_states() {
        let provider = StubProvider::india();
        let view = walk(&provider, "India", None, None).await.unwrap();
        assert_eq!(view.selected_country(), "India");
        assert_eq!(view.states(), ["Karnataka", "Maharashtra"]);
        assert!(view.cities().is_empty());
        assert_eq!(view.summary(), None);
    }

    #[tokio::test]
    async fn states_failure_reports_country() {
        let provider = StubProvider::india();
        let err = walk(&provider, "USA", Some("Texas"), None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("USA"));
    }

    #[tokio::test]
    async fn countries_failure_stops_the_walk() {
        let provider = StubProvider::default();
        let err = walk(&provider, "India", None, None).await.unwrap_err();
        assert!(err.to_string().contains("countries"));
    }
}
