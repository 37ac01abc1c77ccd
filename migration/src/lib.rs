pub use sea_orm_migration::prelude::*;
mod enums;
mod m20240101_000001_create_core_tables;
mod m20240101_000002_create_club_admins_and_settings;
mod m20240102_000001_create_match_requests;
mod m20240103_000001_create_tournaments;
mod macros;
mod schema;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_core_tables::Migration),
            Box::new(m20240101_000002_create_club_admins_and_settings::Migration),
            Box::new(m20240102_000001_create_match_requests::Migration),
            Box::new(m20240103_000001_create_tournaments::Migration),
        ]
    }
}
