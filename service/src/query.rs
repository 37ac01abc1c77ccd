use entity::prelude::*;
use entity::{
    club_admin, event_participant, match_request, matchmaking_settings, matchmaking_suggestion,
    player_availability, tournament_match,
};
use sea_orm::prelude::Uuid;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::dto::{MatchRequestStatus, SuggestionStatus};

pub async fn club_admin_by_username(
    db: &impl ConnectionTrait,
    username: &str,
) -> Result<Option<club_admin::Model>, DbErr> {
    ClubAdmin::find()
        .filter(club_admin::Column::Username.eq(username))
        .one(db)
        .await
}

pub async fn settings_for_club(
    db: &impl ConnectionTrait,
    club_id: Uuid,
) -> Result<Option<matchmaking_settings::Model>, DbErr> {
    MatchmakingSettings::find()
        .filter(matchmaking_settings::Column::ClubId.eq(club_id))
        .order_by_asc(matchmaking_settings::Column::CreatedAt)
        .one(db)
        .await
}

/// A player's weekly windows, Sunday first, earliest start first within a day.
pub async fn availability_for_player(
    db: &impl ConnectionTrait,
    player_id: Uuid,
) -> Result<Vec<player_availability::Model>, DbErr> {
    PlayerAvailability::find()
        .filter(player_availability::Column::PlayerId.eq(player_id))
        .order_by_asc(player_availability::Column::DayOfWeek)
        .order_by_asc(player_availability::Column::StartTime)
        .all(db)
        .await
}

pub async fn club_match_requests(
    db: &impl ConnectionTrait,
    club_id: Uuid,
    status: Option<MatchRequestStatus>,
) -> Result<Vec<match_request::Model>, DbErr> {
    let mut query = MatchRequest::find().filter(match_request::Column::ClubId.eq(club_id));
    if let Some(status) = status {
        query = query.filter(match_request::Column::Status.eq(status.to_string()));
    }
    query
        .order_by_desc(match_request::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn pending_suggestions(
    db: &impl ConnectionTrait,
    club_id: Uuid,
) -> Result<Vec<matchmaking_suggestion::Model>, DbErr> {
    MatchmakingSuggestion::find()
        .filter(matchmaking_suggestion::Column::ClubId.eq(club_id))
        .filter(matchmaking_suggestion::Column::Status.eq(SuggestionStatus::Pending.to_string()))
        .order_by_asc(matchmaking_suggestion::Column::BalanceScore)
        .all(db)
        .await
}

pub async fn event_participants(
    db: &impl ConnectionTrait,
    event_id: Uuid,
) -> Result<Vec<event_participant::Model>, DbErr> {
    EventParticipant::find()
        .filter(event_participant::Column::EventId.eq(event_id))
        .order_by_asc(event_participant::Column::CreatedAt)
        .all(db)
        .await
}

/// Bracket slots of a tournament by round, then position within the round.
pub async fn tournament_bracket(
    db: &impl ConnectionTrait,
    tournament_id: Uuid,
) -> Result<Vec<tournament_match::Model>, DbErr> {
    TournamentMatch::find()
        .filter(tournament_match::Column::TournamentId.eq(tournament_id))
        .order_by_asc(tournament_match::Column::Round)
        .order_by_asc(tournament_match::Column::Position)
        .all(db)
        .await
}

pub async fn event_exists(db: &impl ConnectionTrait, event_id: Uuid) -> Result<bool, DbErr> {
    Ok(Event::find_by_id(event_id).one(db).await?.is_some())
}
