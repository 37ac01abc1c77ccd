use entity::prelude::*;
use entity::{
    event_participant, match_request, match_request_player, matchmaking_settings,
    matchmaking_suggestion,
};
use log::{info, warn};
use sea_orm::prelude::Uuid;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter,
};

use crate::dto::{
    parse_status, InvitationStatus, MatchRequestStatus, ParticipantStatus, SettingsUpdate,
    SuggestionStatus,
};
use crate::error::ServiceError;
use crate::query::settings_for_club;

/// Confirmed invitees needed before a request can turn into a match.
pub const CONFIRMED_PLAYERS_PER_MATCH: u64 = 4;

/// Returns the club's settings, creating a row with the default thresholds on first use.
pub async fn settings_or_default(
    db: &impl ConnectionTrait,
    club_id: Uuid,
) -> Result<matchmaking_settings::Model, ServiceError> {
    if let Some(settings) = settings_for_club(db, club_id).await? {
        return Ok(settings);
    }
    let settings = matchmaking_settings::ActiveModel {
        club_id: Set(club_id),
        ..Default::default()
    }
    .insert(db)
    .await?;
    info!("Created default matchmaking settings for club {club_id}");
    Ok(settings)
}

pub async fn update_settings(
    db: &impl ConnectionTrait,
    club_id: Uuid,
    update: SettingsUpdate,
) -> Result<matchmaking_settings::Model, ServiceError> {
    update.validate()?;
    let settings = settings_or_default(db, club_id).await?;
    if update.is_empty() {
        return Ok(settings);
    }
    let mut settings = settings.into_active_model();
    update.apply(&mut settings);
    Ok(settings.update(db).await?)
}

pub async fn remove_availability(db: &impl ConnectionTrait, id: Uuid) -> Result<bool, ServiceError> {
    let res = PlayerAvailability::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

async fn match_request_by_id(
    db: &impl ConnectionTrait,
    id: Uuid,
) -> Result<match_request::Model, ServiceError> {
    MatchRequest::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound("match request"))
}

fn request_transition(
    request: &match_request::Model,
    next: MatchRequestStatus,
) -> Result<(), ServiceError> {
    let current: MatchRequestStatus = parse_status("match request", &request.status)?;
    if current.can_become(next) {
        Ok(())
    } else {
        Err(ServiceError::InvalidStatusTransition {
            entity: "match request",
            from: current.to_string(),
            to: next.to_string(),
        })
    }
}

pub async fn set_match_request_status(
    db: &impl ConnectionTrait,
    id: Uuid,
    status: MatchRequestStatus,
) -> Result<match_request::Model, ServiceError> {
    let request = match_request_by_id(db, id).await?;
    request_transition(&request, status)?;
    let mut request = request.into_active_model();
    request.status = Set(status.to_string());
    Ok(request.update(db).await?)
}

/// Links the match that was scheduled for the request and marks it `completed`.
/// Exactly four invitees must have confirmed.
pub async fn complete_match_request(
    db: &impl ConnectionTrait,
    id: Uuid,
    match_id: Uuid,
) -> Result<match_request::Model, ServiceError> {
    let request = match_request_by_id(db, id).await?;
    request_transition(&request, MatchRequestStatus::Completed)?;
    let confirmed = MatchRequestPlayer::find()
        .filter(match_request_player::Column::MatchRequestId.eq(id))
        .filter(match_request_player::Column::Status.eq(InvitationStatus::Confirmed.to_string()))
        .count(db)
        .await?;
    if confirmed != CONFIRMED_PLAYERS_PER_MATCH {
        warn!("Match request {id} has {confirmed} confirmed players");
        return Err(ServiceError::NotEnoughConfirmed {
            needed: CONFIRMED_PLAYERS_PER_MATCH,
            confirmed,
        });
    }
    let mut request = request.into_active_model();
    request.status = Set(MatchRequestStatus::Completed.to_string());
    request.match_id = Set(Some(match_id));
    let request = request.update(db).await?;
    info!("Match request {} completed with match {match_id}", request.id);
    Ok(request)
}

pub async fn cancel_match_request(
    db: &impl ConnectionTrait,
    id: Uuid,
) -> Result<match_request::Model, ServiceError> {
    set_match_request_status(db, id, MatchRequestStatus::Cancelled).await
}

/// Deletes the request; its invitations go with it.
pub async fn delete_match_request(db: &impl ConnectionTrait, id: Uuid) -> Result<bool, ServiceError> {
    let res = MatchRequest::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

/// Invites a player to a request. Inviting someone twice returns the existing invitation.
pub async fn invite_player(
    db: &impl ConnectionTrait,
    match_request_id: Uuid,
    player_id: Uuid,
) -> Result<match_request_player::Model, ServiceError> {
    if let Some(existing) = MatchRequestPlayer::find_by_id((match_request_id, player_id))
        .one(db)
        .await?
    {
        return Ok(existing);
    }
    let invitee = match_request_player::ActiveModel {
        match_request_id: Set(match_request_id),
        player_id: Set(player_id),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(invitee)
}

pub async fn respond_to_invitation(
    db: &impl ConnectionTrait,
    match_request_id: Uuid,
    player_id: Uuid,
    status: InvitationStatus,
) -> Result<match_request_player::Model, ServiceError> {
    let invitee = MatchRequestPlayer::find_by_id((match_request_id, player_id))
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound("invitation"))?;
    let current: InvitationStatus = parse_status("invitation", &invitee.status)?;
    if !current.can_become(status) {
        return Err(ServiceError::InvalidStatusTransition {
            entity: "invitation",
            from: current.to_string(),
            to: status.to_string(),
        });
    }
    let mut invitee = invitee.into_active_model();
    invitee.status = Set(status.to_string());
    Ok(invitee.update(db).await?)
}

async fn pending_suggestion(
    db: &impl ConnectionTrait,
    id: Uuid,
    next: SuggestionStatus,
) -> Result<matchmaking_suggestion::ActiveModel, ServiceError> {
    let suggestion = MatchmakingSuggestion::find_by_id(id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound("suggestion"))?;
    let current: SuggestionStatus = parse_status("suggestion", &suggestion.status)?;
    if current != SuggestionStatus::Pending {
        warn!("Suggestion {id} is already {current}");
        return Err(ServiceError::InvalidStatusTransition {
            entity: "suggestion",
            from: current.to_string(),
            to: next.to_string(),
        });
    }
    Ok(suggestion.into_active_model())
}

pub async fn accept_suggestion(
    db: &impl ConnectionTrait,
    id: Uuid,
    match_id: Uuid,
) -> Result<matchmaking_suggestion::Model, ServiceError> {
    let mut suggestion = pending_suggestion(db, id, SuggestionStatus::Accepted).await?;
    suggestion.status = Set(SuggestionStatus::Accepted.to_string());
    suggestion.match_id = Set(Some(match_id));
    Ok(suggestion.update(db).await?)
}

pub async fn reject_suggestion(
    db: &impl ConnectionTrait,
    id: Uuid,
) -> Result<matchmaking_suggestion::Model, ServiceError> {
    let mut suggestion = pending_suggestion(db, id, SuggestionStatus::Rejected).await?;
    suggestion.status = Set(SuggestionStatus::Rejected.to_string());
    Ok(suggestion.update(db).await?)
}

/// Registers a player for an event while slots remain. Registering twice
/// returns the existing row.
pub async fn register_participant(
    db: &impl ConnectionTrait,
    event_id: Uuid,
    player_id: Uuid,
) -> Result<event_participant::Model, ServiceError> {
    if let Some(existing) = EventParticipant::find_by_id((event_id, player_id))
        .one(db)
        .await?
    {
        return Ok(existing);
    }
    let event = Event::find_by_id(event_id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound("event"))?;
    let registered = EventParticipant::find()
        .filter(event_participant::Column::EventId.eq(event_id))
        .count(db)
        .await?;
    if registered >= u64::try_from(event.total_slots).unwrap_or(0) {
        warn!("Event {event_id} is full ({registered}/{} slots)", event.total_slots);
        return Err(ServiceError::EventFull(event_id));
    }
    let participant = event_participant::ActiveModel {
        event_id: Set(event_id),
        player_id: Set(player_id),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(participant)
}

pub async fn set_participant_status(
    db: &impl ConnectionTrait,
    event_id: Uuid,
    player_id: Uuid,
    status: ParticipantStatus,
) -> Result<event_participant::Model, ServiceError> {
    let participant = EventParticipant::find_by_id((event_id, player_id))
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound("event participant"))?;
    let mut participant = participant.into_active_model();
    participant.status = Set(status.to_string());
    Ok(participant.update(db).await?)
}

pub async fn remove_participant(
    db: &impl ConnectionTrait,
    event_id: Uuid,
    player_id: Uuid,
) -> Result<bool, ServiceError> {
    let res = EventParticipant::delete_by_id((event_id, player_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected > 0)
}

/// Deletes an event together with its participants, its tournament and the tournament's bracket.
pub async fn delete_event(db: &impl ConnectionTrait, id: Uuid) -> Result<bool, ServiceError> {
    let res = Event::delete_by_id(id).exec(db).await?;
    if res.rows_affected > 0 {
        info!("Deleted event {id}");
    }
    Ok(res.rows_affected > 0)
}
