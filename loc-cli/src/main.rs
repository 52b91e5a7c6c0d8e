//! loc-cli - Command line tool for the cascading location service.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "loc-cli",
    version,
    about = "Browse countries, states and cities from the location service"
)]
struct Cli {
    #[command(flatten)]
    provider: loc_cmd::ProviderArgs,

    #[command(subcommand)]
    command: loc_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    loc_cmd::run(cli.command, &cli.provider).await
}
