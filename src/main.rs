use log::{error, info};
use migration::{Migrator, MigratorTrait};
use service::config::{self, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = Config::from_env()?;
    let db = config::connect(&config).await?;

    if let Err(e) = Migrator::up(&db, None).await {
        error!("Migrations failed on schema {}: {e}", config.schema);
        return Err(e.into());
    }
    let applied = Migrator::get_applied_migrations(&db).await?;
    info!(
        "Schema {} is up to date ({} migrations applied)",
        config.schema,
        applied.len()
    );
    Ok(())
}
