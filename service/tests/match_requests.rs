mod common;

use sea_orm::prelude::Uuid;
use sea_orm::EntityTrait;
use serde_json::{json, Value};
use service::dto::{InvitationStatus, MatchRequestStatus, NewMatchRequest};
use service::entity::prelude::*;
use service::entity::{club, match_request, match_request_player, Fetched, ToDict};
use service::error::ServiceError;
use service::{find_with, load_each, Load};

fn request_by(club: &club::Model, requester: Uuid, invited: Vec<Uuid>) -> NewMatchRequest {
    NewMatchRequest {
        club_id: club.id,
        requested_by_id: requester,
        preferred_date: Some(common::at(3, 19)),
        notes: Some("Pista 4 si puede ser".to_owned()),
        invited_player_ids: invited,
    }
}

#[tokio::test]
async fn pending_request_with_two_invitees() {
    let db = common::db().await;
    let club = common::club(&db).await;
    let players = common::players(&db, &club, 3).await;

    let record = request_by(&club, players[0].id, vec![players[1].id, players[2].id])
        .insert(&db)
        .await
        .unwrap();

    let dict = record.to_dict();
    assert_eq!(dict["status"], "pending");
    let invitees = dict["players"].as_array().unwrap();
    assert_eq!(invitees.len(), 2);
    assert!(invitees.iter().all(|p| p["status"] == "invited"));
    assert!(dict.get("club").is_none());
    assert!(dict.get("requested_by").is_none());
}

#[tokio::test]
async fn requester_and_duplicates_are_not_invited() {
    let db = common::db().await;
    let club = common::club(&db).await;
    let players = common::players(&db, &club, 2).await;

    let record = request_by(
        &club,
        players[0].id,
        vec![players[1].id, players[0].id, players[1].id],
    )
    .insert(&db)
    .await
    .unwrap();

    let invitees = record.players.loaded().unwrap();
    assert_eq!(invitees.len(), 1);
    assert_eq!(invitees[0].model.player_id, players[1].id);
}

#[tokio::test]
async fn loading_fills_only_requested_relations() {
    let db = common::db().await;
    let club = common::club(&db).await;
    let players = common::players(&db, &club, 2).await;
    let created = request_by(&club, players[0].id, vec![players[1].id])
        .insert(&db)
        .await
        .unwrap();

    let plain = find_with::<match_request::Record, _>(&db, created.model.id, &[])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(plain.model, created.model);
    assert!(!plain.players.is_loaded());
    assert!(plain.to_dict().get("players").is_none());

    let mut full = find_with::<match_request::Record, _>(
        &db,
        created.model.id,
        &[
            match_request::Relation::RequestedBy,
            match_request::Relation::Match,
            match_request::Relation::Players,
        ],
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(full.r#match, Fetched::Loaded(None));

    let invitees = full.players.loaded_mut().unwrap();
    load_each(&db, invitees.as_mut_slice(), match_request_player::Relation::Player)
        .await
        .unwrap();

    let dict = full.to_dict();
    assert_eq!(dict["match"], Value::Null);
    assert_eq!(dict["requested_by"]["phone_number"], players[0].phone_number);
    assert_eq!(dict["players"][0]["player"]["id"], json!(players[1].id.to_string()));
    assert!(dict.get("club").is_none());
}

#[tokio::test]
async fn deleting_a_request_removes_its_invitations() {
    let db = common::db().await;
    let club = common::club(&db).await;
    let players = common::players(&db, &club, 3).await;
    let record = request_by(&club, players[0].id, vec![players[1].id, players[2].id])
        .insert(&db)
        .await
        .unwrap();
    assert_eq!(MatchRequestPlayer::find().all(&db).await.unwrap().len(), 2);

    assert!(service::delete_match_request(&db, record.model.id).await.unwrap());
    assert!(MatchRequestPlayer::find().all(&db).await.unwrap().is_empty());
    assert!(!service::delete_match_request(&db, record.model.id).await.unwrap());
}

#[tokio::test]
async fn request_lifecycle() {
    let db = common::db().await;
    let club = common::club(&db).await;
    let players = common::players(&db, &club, 5).await;
    let record = request_by(&club, players[0].id, vec![])
        .insert(&db)
        .await
        .unwrap();
    assert_eq!(record.players, Fetched::Loaded(vec![]));
    let id = record.model.id;

    let invite = service::invite_player(&db, id, players[1].id).await.unwrap();
    let again = service::invite_player(&db, id, players[1].id).await.unwrap();
    assert_eq!(invite, again);

    let processing = service::set_match_request_status(&db, id, MatchRequestStatus::Processing)
        .await
        .unwrap();
    assert_eq!(processing.status, "processing");

    for player in &players[1..] {
        service::invite_player(&db, id, player.id).await.unwrap();
        let confirmed =
            service::respond_to_invitation(&db, id, player.id, InvitationStatus::Confirmed)
                .await
                .unwrap();
        assert_eq!(confirmed.status, "confirmed");
    }

    let game = common::played_match(&db, &players[0]).await;
    let completed = service::complete_match_request(&db, id, game.id).await.unwrap();
    assert_eq!(completed.status, "completed");
    assert_eq!(completed.match_id, Some(game.id));

    let err = service::cancel_match_request(&db, id).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidStatusTransition { .. }));

    let open = service::club_match_requests(&db, club.id, Some(MatchRequestStatus::Pending))
        .await
        .unwrap();
    assert!(open.is_empty());
    let done = service::club_match_requests(&db, club.id, Some(MatchRequestStatus::Completed))
        .await
        .unwrap();
    assert_eq!(done.len(), 1);
}

#[tokio::test]
async fn completing_needs_exactly_four_confirmed_players() {
    let db = common::db().await;
    let club = common::club(&db).await;
    let players = common::players(&db, &club, 6).await;
    let invited = players[1..].iter().map(|p| p.id).collect();
    let record = request_by(&club, players[0].id, invited)
        .insert(&db)
        .await
        .unwrap();
    let id = record.model.id;
    let game = common::played_match(&db, &players[0]).await;

    let err = service::complete_match_request(&db, id, game.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotEnoughConfirmed { needed: 4, confirmed: 0 }
    ));

    for player in &players[1..] {
        service::respond_to_invitation(&db, id, player.id, InvitationStatus::Confirmed)
            .await
            .unwrap();
    }
    let err = service::complete_match_request(&db, id, game.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotEnoughConfirmed { confirmed: 5, .. }
    ));

    let stored = MatchRequest::find_by_id(id).one(&db).await.unwrap().unwrap();
    assert_eq!(stored.status, "pending");
    assert_eq!(stored.match_id, None);
}

#[tokio::test]
async fn invitations_are_answered_once() {
    let db = common::db().await;
    let club = common::club(&db).await;
    let players = common::players(&db, &club, 2).await;
    let record = request_by(&club, players[0].id, vec![players[1].id])
        .insert(&db)
        .await
        .unwrap();
    let id = record.model.id;

    service::respond_to_invitation(&db, id, players[1].id, InvitationStatus::Rejected)
        .await
        .unwrap();
    for status in [InvitationStatus::Invited, InvitationStatus::Confirmed] {
        let err = service::respond_to_invitation(&db, id, players[1].id, status)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidStatusTransition { .. }));
    }

    let stored = MatchRequestPlayer::find_by_id((id, players[1].id))
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, "rejected");
}

#[tokio::test]
async fn invitation_to_unknown_request_is_rejected_by_storage() {
    let db = common::db().await;
    let club = common::club(&db).await;
    let player = common::player(&db, &club, "611223344").await;

    let err = service::invite_player(&db, Uuid::new_v4(), player.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Db(_)));
}

#[tokio::test]
async fn invitee_does_not_load_its_parent_request() {
    let db = common::db().await;
    let club = common::club(&db).await;
    let players = common::players(&db, &club, 2).await;
    let record = request_by(&club, players[0].id, vec![players[1].id])
        .insert(&db)
        .await
        .unwrap();

    let mut invitee = record.players.into_loaded().unwrap().remove(0);
    let before = invitee.to_dict();
    invitee
        .load(&db, match_request_player::Relation::MatchRequest)
        .await
        .unwrap();
    assert_eq!(invitee.to_dict(), before);
    assert!(!invitee.player.is_loaded());

    invitee
        .load(&db, match_request_player::Relation::Player)
        .await
        .unwrap();
    assert!(invitee.player.is_loaded());
}
