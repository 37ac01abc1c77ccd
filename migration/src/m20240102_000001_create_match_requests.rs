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
                        .table(qualified(manager, PlayerAvailability::Table))
                        .col(
                            ColumnDef::new(PlayerAvailability::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(PlayerAvailability::PlayerId).uuid().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_player_availability_player")
                                .from(
                                    qualified(manager, PlayerAvailability::Table),
                                    PlayerAvailability::PlayerId,
                                )
                                .to(qualified(manager, Player::Table), Player::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .col(
                            ColumnDef::new(PlayerAvailability::DayOfWeek)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PlayerAvailability::StartTime).time().not_null())
                        .col(ColumnDef::new(PlayerAvailability::EndTime).time().not_null()),
                )
                .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_availability_player")
                    .table(qualified(manager, PlayerAvailability::Table))
                    .col(PlayerAvailability::PlayerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                with_timestamps(
                    Table::create()
                        .table(qualified(manager, MatchRequest::Table))
                        .col(ColumnDef::new(MatchRequest::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(MatchRequest::ClubId).uuid().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_match_requests_club")
                                .from(qualified(manager, MatchRequest::Table), MatchRequest::ClubId)
                                .to(qualified(manager, Club::Table), Club::Id),
                        )
                        .col(ColumnDef::new(MatchRequest::RequestedById).uuid().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_match_requests_requested_by")
                                .from(
                                    qualified(manager, MatchRequest::Table),
                                    MatchRequest::RequestedById,
                                )
                                .to(qualified(manager, Player::Table), Player::Id),
                        )
                        .col(
                            ColumnDef::new(MatchRequest::Status)
                                .string()
                                .not_null()
                                .default("pending"),
                        )
                        .col(ColumnDef::new(MatchRequest::PreferredDate).timestamp_with_time_zone())
                        .col(ColumnDef::new(MatchRequest::Notes).text())
                        .col(ColumnDef::new(MatchRequest::MatchId).uuid())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_match_requests_match")
                                .from(qualified(manager, MatchRequest::Table), MatchRequest::MatchId)
                                .to(qualified(manager, Match::Table), Match::Id),
                        ),
                )
                .to_owned(),
            )
            .await?;

        manager
            .create_table(
                with_timestamps(
                    Table::create()
                        .table(qualified(manager, MatchRequestPlayer::Table))
                        .col(
                            ColumnDef::new(MatchRequestPlayer::MatchRequestId)
                                .uuid()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_match_request_players_request")
                                .from(
                                    qualified(manager, MatchRequestPlayer::Table),
                                    MatchRequestPlayer::MatchRequestId,
                                )
                                .to(qualified(manager, MatchRequest::Table), MatchRequest::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .col(ColumnDef::new(MatchRequestPlayer::PlayerId).uuid().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_match_request_players_player")
                                .from(
                                    qualified(manager, MatchRequestPlayer::Table),
                                    MatchRequestPlayer::PlayerId,
                                )
                                .to(qualified(manager, Player::Table), Player::Id),
                        )
                        .col(
                            ColumnDef::new(MatchRequestPlayer::Status)
                                .string()
                                .not_null()
                                .default("invited"),
                        )
                        .primary_key(
                            Index::create()
                                .col(MatchRequestPlayer::MatchRequestId)
                                .col(MatchRequestPlayer::PlayerId),
                        ),
                )
                .to_owned(),
            )
            .await?;

        let mut suggestions = Table::create();
        suggestions
            .table(qualified(manager, MatchmakingSuggestion::Table))
            .col(
                ColumnDef::new(MatchmakingSuggestion::Id)
                    .uuid()
                    .not_null()
                    .primary_key(),
            )
            .col(ColumnDef::new(MatchmakingSuggestion::ClubId).uuid().not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_matchmaking_suggestions_club")
                    .from(
                        qualified(manager, MatchmakingSuggestion::Table),
                        MatchmakingSuggestion::ClubId,
                    )
                    .to(qualified(manager, Club::Table), Club::Id),
            );
        for (seat, column) in [
            MatchmakingSuggestion::Player1Id,
            MatchmakingSuggestion::Player2Id,
            MatchmakingSuggestion::Player3Id,
            MatchmakingSuggestion::Player4Id,
        ]
        .into_iter()
        .enumerate()
        {
            suggestions
                .col(ColumnDef::new(column).uuid().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name(format!("fk_matchmaking_suggestions_player{}", seat + 1))
                        .from(qualified(manager, MatchmakingSuggestion::Table), column)
                        .to(qualified(manager, Player::Table), Player::Id),
                );
        }
        suggestions
            .col(
                ColumnDef::new(MatchmakingSuggestion::Team1Skill)
                    .double()
                    .not_null(),
            )
            .col(
                ColumnDef::new(MatchmakingSuggestion::Team2Skill)
                    .double()
                    .not_null(),
            )
            .col(
                ColumnDef::new(MatchmakingSuggestion::BalanceScore)
                    .double()
                    .not_null(),
            )
            .col(
                ColumnDef::new(MatchmakingSuggestion::Status)
                    .string()
                    .not_null()
                    .default("pending"),
            )
            .col(ColumnDef::new(MatchmakingSuggestion::MatchId).uuid())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_matchmaking_suggestions_match")
                    .from(
                        qualified(manager, MatchmakingSuggestion::Table),
                        MatchmakingSuggestion::MatchId,
                    )
                    .to(qualified(manager, Match::Table), Match::Id),
            );
        manager
            .create_table(with_timestamps(&mut suggestions).to_owned())
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table!(MatchmakingSuggestion, manager);
        drop_table!(MatchRequestPlayer, manager);
        drop_table!(MatchRequest, manager);
        drop_table!(PlayerAvailability, manager);
        Ok(())
    }
}
