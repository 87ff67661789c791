use std::sync::Arc;

use clap::Args;
use otomax_app::{
    config::{DigiflazzArgs, PricingArgs, SyncArgs},
    database::{self, Db},
    domain::{
        categories::PgCategoriesService,
        sync::{CatalogSyncService, SyncService, models::SyncOutcome, reconcile::PgReconciler},
    },
    integrations::digiflazz::{DIGIFLAZZ_SLUG, DigiflazzClient},
};

#[derive(Debug, Args)]
pub(crate) struct SyncCommandArgs {
    /// Provider slug
    #[arg(long, default_value = DIGIFLAZZ_SLUG)]
    provider: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[command(flatten)]
    digiflazz: DigiflazzArgs,

    #[command(flatten)]
    pricing: PricingArgs,

    #[command(flatten)]
    sync: SyncArgs,
}

pub(crate) async fn run(args: SyncCommandArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let db = Db::new(pool);

    let service = CatalogSyncService::new(
        vec![Arc::new(DigiflazzClient::new(args.digiflazz.to_config()))],
        Arc::new(PgCategoriesService::new(db.clone())),
        Arc::new(PgReconciler::new(db)),
        args.pricing.policy(),
    );

    let report = service
        .run_sync(&args.provider, args.sync.options())
        .await
        .map_err(|error| format!("sync failed: {error}"))?;

    for outcome in &report.outcomes {
        match outcome {
            SyncOutcome::Reconciled { .. } => {}
            SyncOutcome::Skipped { sku, reason } => println!("skipped {sku}: {reason}"),
            SyncOutcome::Failed { sku, error } => println!("failed {sku}: {error}"),
        }
    }

    println!(
        "{}: fetched {}, reconciled {}, skipped {}, failed {}",
        report.provider,
        report.fetched,
        report.count(),
        report.skipped(),
        report.failed()
    );

    Ok(())
}
