//! Command implementations for the location selector CLI.
//!
//! Single lookups print one name per line; `select` walks the full
//! country -> state -> city cascade through the same controller the web
//! widget uses.

use clap::{Args, Subcommand};
use loc_core::config::DEFAULT_BASE_URL;
use loc_core::http::HttpProvider;
use loc_core::ProviderConfig;
use std::time::Duration;

pub mod lookup;
pub mod select;

#[cfg(test)]
mod testing;

/// Where to send lookups.
#[derive(Args, Debug, Clone)]
pub struct ProviderArgs {
    /// Base URL of the location service
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl ProviderArgs {
    pub fn config(&self) -> ProviderConfig {
        ProviderConfig::new(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all countries
    Countries,

    /// List the states of a country
    States {
        #[arg(short = 'c', long)]
        country: String,
    },

    /// List the cities of a state
    Cities {
        #[arg(short = 'c', long)]
        country: String,

        #[arg(short = 's', long)]
        state: String,
    },

    /// Walk the cascade and print the resulting selection
    Select {
        #[arg(short = 'c', long)]
        country: String,

        /// Stop after listing states when omitted
        #[arg(short = 's', long)]
        state: Option<String>,

        /// Stop after listing cities when omitted
        #[arg(short = 't', long, requires = "state")]
        city: Option<String>,

        /// Print the full view state as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command, provider_args: &ProviderArgs) -> anyhow::Result<()> {
    let provider = HttpProvider::new(provider_args.config())?;

    match command {
        Command::Countries => lookup::run_countries(&provider).await,
        Command::States { country } => lookup::run_states(&provider, &country).await,
        Command::Cities { country, state } => {
            lookup::run_cities(&provider, &country, &state).await
        }
        Command::Select {
            country,
            state,
            city,
            json,
        } => {
            select::run_select(
                &provider,
                &country,
                state.as_deref(),
                city.as_deref(),
                json,
            )
            .await
        }
    }
}
