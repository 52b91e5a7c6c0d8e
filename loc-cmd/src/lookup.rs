//! Single lookups: one request, one name per line.

use loc_core::{LocationProvider, Scope};
use log::info;

/// Fetch `scope` and return its names, or the level's inline message as an error.
pub async fn lookup<P>(provider: &P, scope: &Scope) -> anyhow::Result<Vec<String>>
where
    P: LocationProvider + ?Sized,
{
    match scope.fetch_from(provider).await {
        Ok(names) => {
            info!("Fetched {} {}", names.len(), scope);
            Ok(names)
        }
        Err(err) => anyhow::bail!("{} ({})", scope.failure(), err),
    }
}

fn print_names(names: &[String]) {
    for name in names {
        println!("{}", name);
    }
}

pub async fn run_countries<P>(provider: &P) -> anyhow::Result<()>
where
    P: LocationProvider + ?Sized,
{
    print_names(&lookup(provider, &Scope::Countries).await?);
    Ok(())
}

pub async fn run_states<P>(provider: &P, country: &str) -> anyhow::Result<()>
where
    P: LocationProvider + ?Sized,
{
    let scope = Scope::States {
        country: country.to_string(),
    };
    print_names(&lookup(provider, &scope).await?);
    Ok(())
}

pub async fn run_cities<P>(provider: &P, country: &str, state: &str) -> anyhow::Result<()>
where
    P: LocationProvider + ?Sized,
{
    let scope = Scope::Cities {
        country: country.to_string(),
        state: state.to_string(),
    };
    print_names(&lookup(provider, &scope).await?);
    Ok(())
}
