use sea_orm_migration::prelude::*;

use crate::enums::*;
use crate::macros::*;
use crate::schema::{qualified, with_timestamps};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                with_timestamps(
                    Table::create()
                        .table(qualified(manager, ClubAdmin::Table))
                        .col(ColumnDef::new(ClubAdmin::Id).uuid().not_null().primary_key())
                        .col(
                            ColumnDef::new(ClubAdmin::Username)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(ClubAdmin::Password).string().not_null())
                        .col(
                            ColumnDef::new(ClubAdmin::Email)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(ClubAdmin::FirstName).string())
                        .col(ColumnDef::new(ClubAdmin::LastName).string())
                        .col(ColumnDef::new(ClubAdmin::ClubId).uuid().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_club_admins_club")
                                .from(qualified(manager, ClubAdmin::Table), ClubAdmin::ClubId)
                                .to(qualified(manager, Club::Table), Club::Id),
                        )
                        .col(
                            ColumnDef::new(ClubAdmin::IsSuperAdmin)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(ClubAdmin::LastLogin).timestamp_with_time_zone()),
                )
                .to_owned(),
            )
            .await?;

        manager
            .create_table(
                with_timestamps(
                    Table::create()
                        .table(qualified(manager, MatchmakingSettings::Table))
                        .col(
                            ColumnDef::new(MatchmakingSettings::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(MatchmakingSettings::ClubId).uuid().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_matchmaking_settings_club")
                                .from(
                                    qualified(manager, MatchmakingSettings::Table),
                                    MatchmakingSettings::ClubId,
                                )
                                .to(qualified(manager, Club::Table), Club::Id),
                        )
                        .col(
                            ColumnDef::new(MatchmakingSettings::MinSkillDifference)
                                .double()
                                .not_null()
                                .default(2.0),
                        )
                        .col(
                            ColumnDef::new(MatchmakingSettings::MaxSkillDifference)
                                .double()
                                .not_null()
                                .default(5.0),
                        )
                        .col(
                            ColumnDef::new(MatchmakingSettings::MinMatchesForTrueskill)
                                .integer()
                                .not_null()
                                .default(10),
                        )
                        .col(
                            ColumnDef::new(MatchmakingSettings::ConsiderPreferredSide)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(MatchmakingSettings::ConsiderGender)
                                .boolean()
                                .not_null()
                                .default(false),
                        ),
                )
                .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(MatchmakingSettings, manager);
        drop_table!(ClubAdmin, manager);
        Ok(())
    }
}
