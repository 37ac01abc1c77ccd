use sea_orm_migration::prelude::*;

use crate::enums::*;
use crate::schema::{ensure_schema, qualified, with_timestamps};

/// Clubs, players, matches and events belong to the wider application. They are
/// only created when missing so a fresh database can satisfy every foreign key,
/// and rolling back never drops them.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        ensure_schema(manager).await?;

        manager
            .create_table(
                with_timestamps(
                    Table::create()
                        .table(qualified(manager, Club::Table))
                        .if_not_exists()
                        .col(ColumnDef::new(Club::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Club::Name).string().not_null())
                        .col(ColumnDef::new(Club::NameFep).string().not_null())
                        .col(ColumnDef::new(Club::SearchKey).string().not_null())
                        .col(ColumnDef::new(Club::Logo).string())
                        .col(ColumnDef::new(Club::Url).string())
                        .col(ColumnDef::new(Club::Email).string())
                        .col(ColumnDef::new(Club::PhoneNumber).string())
                        .col(ColumnDef::new(Club::PostalCode).string_len(5))
                        .col(
                            ColumnDef::new(Club::IsPremium)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Club::IsPartner)
                                .boolean()
                                .not_null()
                                .default(false),
                        ),
                )
                .to_owned(),
            )
            .await?;

        manager
            .create_table(
                with_timestamps(
                    Table::create()
                        .table(qualified(manager, Player::Table))
                        .if_not_exists()
                        .col(ColumnDef::new(Player::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Player::PhoneNumber).string().not_null())
                        .col(ColumnDef::new(Player::Name).string())
                        .col(ColumnDef::new(Player::ClubId).uuid())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_players_club")
                                .from(qualified(manager, Player::Table), Player::ClubId)
                                .to(qualified(manager, Club::Table), Club::Id),
                        )
                        .col(ColumnDef::new(Player::Mu).double().not_null())
                        .col(ColumnDef::new(Player::Sigma).double().not_null())
                        .col(ColumnDef::new(Player::Trueskill).double().not_null())
                        .col(ColumnDef::new(Player::PreferredSide).string())
                        .col(ColumnDef::new(Player::Sex).string())
                        .col(
                            ColumnDef::new(Player::MatchesPlayed)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Player::MatchesWon)
                                .integer()
                                .not_null()
                                .default(0),
                        ),
                )
                .to_owned(),
            )
            .await?;

        manager
            .create_table(
                with_timestamps(
                    Table::create()
                        .table(qualified(manager, Match::Table))
                        .if_not_exists()
                        .col(ColumnDef::new(Match::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Match::ClubId).uuid())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_matches_club")
                                .from(qualified(manager, Match::Table), Match::ClubId)
                                .to(qualified(manager, Club::Table), Club::Id),
                        )
                        .col(ColumnDef::new(Match::CreatedById).uuid().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_matches_created_by")
                                .from(qualified(manager, Match::Table), Match::CreatedById)
                                .to(qualified(manager, Player::Table), Player::Id),
                        )
                        .col(
                            ColumnDef::new(Match::IsResultValidated)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Match::PlayedOn).timestamp_with_time_zone())
                        .col(ColumnDef::new(Match::Result).json_binary()),
                )
                .to_owned(),
            )
            .await?;

        manager
            .create_table(
                with_timestamps(
                    Table::create()
                        .table(qualified(manager, Event::Table))
                        .if_not_exists()
                        .col(ColumnDef::new(Event::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Event::ClubId).uuid().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_events_club")
                                .from(qualified(manager, Event::Table), Event::ClubId)
                                .to(qualified(manager, Club::Table), Club::Id),
                        )
                        .col(ColumnDef::new(Event::EventType).string().not_null())
                        .col(ColumnDef::new(Event::Title).string().not_null())
                        .col(ColumnDef::new(Event::Description).string().not_null())
                        .col(ColumnDef::new(Event::Price).double().not_null())
                        .col(
                            ColumnDef::new(Event::StartDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Event::EndDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Event::RegistrationDeadline)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Event::TotalSlots).integer().not_null()),
                )
                .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
