use lazy_static::lazy_static;

pub const SCHEMA_VAR: &str = "DB_SCHEMA";
pub const DEFAULT_SCHEMA: &str = "dev";

lazy_static! {
    static ref CURRENT_SCHEMA: String = {
        dotenvy::dotenv().ok();
        resolve(std::env::var(SCHEMA_VAR).ok())
    };
}

/// Schema every table lives in, read from `DB_SCHEMA` the first time it is asked for.
pub fn current_schema() -> &'static str {
    &CURRENT_SCHEMA
}

fn resolve(configured: Option<String>) -> String {
    configured
        .map(|schema| schema.trim().to_owned())
        .filter(|schema| !schema.is_empty())
        .unwrap_or_else(|| DEFAULT_SCHEMA.to_owned())
}
