use entity::schema::current_schema;
use sea_orm::{ConnectionTrait, DbBackend};
use sea_orm_migration::prelude::*;

use crate::enums::Timestamps;

/// Table reference inside the configured schema. SQLite has no schemas, so
/// there the bare table name is used.
pub(crate) fn qualified<T>(manager: &SchemaManager, table: T) -> TableRef
where
    T: IntoIden + 'static,
{
    match manager.get_database_backend() {
        DbBackend::Postgres => (Alias::new(current_schema()), table).into_table_ref(),
        DbBackend::MySql | DbBackend::Sqlite => table.into_table_ref(),
    }
}

pub(crate) async fn ensure_schema(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    if manager.get_database_backend() == DbBackend::Postgres {
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE SCHEMA IF NOT EXISTS \"{}\"",
                current_schema()
            ))
            .await?;
    }
    Ok(())
}

pub(crate) fn with_timestamps(table: &mut TableCreateStatement) -> &mut TableCreateStatement {
    table
        .col(
            ColumnDef::new(Timestamps::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Timestamps::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
}
