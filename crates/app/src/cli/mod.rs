use clap::{Parser, Subcommand};

mod migrate;
mod sync;
mod top_up;

#[derive(Debug, Parser)]
#[command(name = "otomax-app", about = "Otomax CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Apply database migrations
    Migrate(migrate::MigrateArgs),

    /// Run one catalog sync against a provider
    Sync(sync::SyncCommandArgs),

    /// Place a single top-up order with Digiflazz
    TopUp(top_up::TopUpArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Migrate(args) => migrate::run(args).await,
            Commands::Sync(args) => sync::run(args).await,
            Commands::TopUp(args) => top_up::run(args).await,
        }
    }
}
