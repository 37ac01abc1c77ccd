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
                        .table(qualified(manager, EventParticipant::Table))
                        .col(ColumnDef::new(EventParticipant::EventId).uuid().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_event_participants_event")
                                .from(
                                    qualified(manager, EventParticipant::Table),
                                    EventParticipant::EventId,
                                )
                                .to(qualified(manager, Event::Table), Event::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .col(ColumnDef::new(EventParticipant::PlayerId).uuid().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_event_participants_player")
                                .from(
                                    qualified(manager, EventParticipant::Table),
                                    EventParticipant::PlayerId,
                                )
                                .to(qualified(manager, Player::Table), Player::Id),
                        )
                        .col(
                            ColumnDef::new(EventParticipant::Status)
                                .string()
                                .not_null()
                                .default("registered"),
                        )
                        .primary_key(
                            Index::create()
                                .col(EventParticipant::EventId)
                                .col(EventParticipant::PlayerId),
                        ),
                )
                .to_owned(),
            )
            .await?;

        // The tournament id is the event id: primary key and cascading foreign key at once.
        manager
            .create_table(
                with_timestamps(
                    Table::create()
                        .table(qualified(manager, Tournament::Table))
                        .col(ColumnDef::new(Tournament::Id).uuid().not_null().primary_key())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_tournaments_event")
                                .from(qualified(manager, Tournament::Table), Tournament::Id)
                                .to(qualified(manager, Event::Table), Event::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .col(ColumnDef::new(Tournament::Format).string().not_null())
                        .col(
                            ColumnDef::new(Tournament::Rounds)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .col(
                            ColumnDef::new(Tournament::PlayersPerMatch)
                                .integer()
                                .not_null()
                                .default(4),
                        ),
                )
                .to_owned(),
            )
            .await?;

        manager
            .create_table(
                with_timestamps(
                    Table::create()
                        .table(qualified(manager, TournamentMatch::Table))
                        .col(
                            ColumnDef::new(TournamentMatch::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(TournamentMatch::TournamentId).uuid().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_tournament_matches_tournament")
                                .from(
                                    qualified(manager, TournamentMatch::Table),
                                    TournamentMatch::TournamentId,
                                )
                                .to(qualified(manager, Tournament::Table), Tournament::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .col(ColumnDef::new(TournamentMatch::MatchId).uuid().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_tournament_matches_match")
                                .from(
                                    qualified(manager, TournamentMatch::Table),
                                    TournamentMatch::MatchId,
                                )
                                .to(qualified(manager, Match::Table), Match::Id),
                        )
                        .col(ColumnDef::new(TournamentMatch::Round).integer().not_null())
                        .col(ColumnDef::new(TournamentMatch::Position).integer().not_null())
                        .index(
                            Index::create()
                                .name("unique_tournament_round_position")
                                .col(TournamentMatch::TournamentId)
                                .col(TournamentMatch::Round)
                                .col(TournamentMatch::Position)
                                .unique(),
                        ),
                )
                .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(TournamentMatch, manager);
        drop_table!(Tournament, manager);
        drop_table!(EventParticipant, manager);
        Ok(())
    }
}
