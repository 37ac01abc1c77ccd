use entity::schema::current_schema;
use log::{info, LevelFilter};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::error::ServiceError;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    /// Schema holding every table, taken from `DB_SCHEMA` at process start.
    pub schema: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ServiceError> {
        dotenvy::dotenv().ok();
        let database_url = std::env::var(DATABASE_URL_VAR)
            .map_err(|_| ServiceError::MissingConfig(DATABASE_URL_VAR))?;
        Ok(Self {
            database_url,
            schema: current_schema().to_owned(),
        })
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.database_url.clone());
        opt.sqlx_logging(true);
        opt.sqlx_logging_level(LevelFilter::Debug);
        if self.is_postgres() {
            opt.set_schema_search_path(self.schema.clone());
        }
        opt
    }

    fn is_postgres(&self) -> bool {
        self.database_url.starts_with("postgres://") || self.database_url.starts_with("postgresql://")
    }
}

pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    info!("Connecting to database using schema {}", config.schema);
    Database::connect(config.connect_options()).await
}
