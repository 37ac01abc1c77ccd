mod common;

use chrono::NaiveTime;
use sea_orm::prelude::Uuid;
use service::dto::{AdminLogin, NewAvailability, NewClubAdmin, NewSuggestion, SettingsUpdate};
use service::entity::{club_admin, matchmaking_settings, matchmaking_suggestion, ToDict};
use service::error::ServiceError;
use service::find_with;

fn hour(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn admin(club_id: Uuid) -> NewClubAdmin {
    NewClubAdmin {
        username: "recepcion".to_owned(),
        password: "bandeja-y-vibora".to_owned(),
        email: "recepcion@padelnorte.es".to_owned(),
        first_name: Some("Lucía".to_owned()),
        last_name: None,
        club_id,
        is_super_admin: false,
    }
}

#[tokio::test]
async fn admin_password_is_hashed_and_never_serialized() {
    let db = common::db().await;
    let club = common::club(&db).await;

    let created = admin(club.id).insert_with_cost(&db, 4).await.unwrap();
    assert_ne!(created.password, "bandeja-y-vibora");
    assert!(created.password.starts_with("$2"));

    let record = find_with::<club_admin::Record, _>(&db, created.id, &[club_admin::Relation::Club])
        .await
        .unwrap()
        .unwrap();
    let dict = record.to_dict();
    assert!(dict.get("password").is_none());
    assert_eq!(dict["last_login"], serde_json::Value::Null);
    assert_eq!(dict["club"]["name"], "Padel Indoor Norte");

    let duplicate = admin(club.id).insert_with_cost(&db, 4).await.unwrap_err();
    assert!(matches!(duplicate, ServiceError::Db(_)));
}

#[tokio::test]
async fn login_checks_password_and_stamps_last_login() {
    let db = common::db().await;
    let club = common::club(&db).await;
    admin(club.id).insert_with_cost(&db, 4).await.unwrap();

    let wrong = AdminLogin {
        username: "recepcion".to_owned(),
        password: "globo".to_owned(),
    };
    assert!(matches!(
        wrong.authenticate(&db).await,
        Err(ServiceError::WrongCredentials)
    ));

    let unknown = AdminLogin {
        username: "nadie".to_owned(),
        password: "bandeja-y-vibora".to_owned(),
    };
    assert!(matches!(
        unknown.authenticate(&db).await,
        Err(ServiceError::WrongCredentials)
    ));

    let right = AdminLogin {
        username: "recepcion".to_owned(),
        password: "bandeja-y-vibora".to_owned(),
    };
    let logged_in = right.authenticate(&db).await.unwrap();
    assert!(logged_in.last_login.is_some());
}

#[tokio::test]
async fn settings_are_created_with_defaults_then_updated() {
    let db = common::db().await;
    let club = common::club(&db).await;
    assert!(service::settings_for_club(&db, club.id).await.unwrap().is_none());

    let settings = service::settings_or_default(&db, club.id).await.unwrap();
    assert_eq!(settings.min_skill_difference, matchmaking_settings::DEFAULT_MIN_SKILL_DIFFERENCE);
    assert_eq!(settings.max_skill_difference, matchmaking_settings::DEFAULT_MAX_SKILL_DIFFERENCE);
    assert!(settings.consider_preferred_side);
    assert!(!settings.consider_gender);

    let same = service::settings_or_default(&db, club.id).await.unwrap();
    assert_eq!(same.id, settings.id);

    let updated = service::update_settings(
        &db,
        club.id,
        SettingsUpdate {
            max_skill_difference: Some(7.5),
            consider_gender: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.id, settings.id);
    assert_eq!(updated.max_skill_difference, 7.5);
    assert_eq!(updated.min_skill_difference, settings.min_skill_difference);
    assert!(updated.consider_gender);
    assert!(updated.updated_at >= settings.updated_at);

    let err = service::update_settings(
        &db,
        club.id,
        SettingsUpdate {
            min_matches_for_trueskill: Some(-1),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidSettings(_)));
    let stored = service::settings_for_club(&db, club.id).await.unwrap().unwrap();
    assert_eq!(
        stored.min_matches_for_trueskill,
        matchmaking_settings::DEFAULT_MIN_MATCHES_FOR_TRUESKILL
    );
}

#[tokio::test]
async fn availability_is_listed_by_day_then_start() {
    let db = common::db().await;
    let club = common::club(&db).await;
    let player = common::player(&db, &club, "644555666").await;

    let windows = [
        (3, hour(19, 0), hour(21, 0)),
        (0, hour(10, 30), hour(12, 0)),
        (3, hour(8, 0), hour(9, 30)),
    ];
    for (day, start_time, end_time) in windows {
        NewAvailability {
            player_id: player.id,
            day_of_week: day,
            start_time,
            end_time,
        }
        .insert(&db)
        .await
        .unwrap();
    }

    let invalid = NewAvailability {
        player_id: player.id,
        day_of_week: 2,
        start_time: hour(20, 0),
        end_time: hour(20, 0),
    }
    .insert(&db)
    .await;
    assert!(matches!(invalid, Err(ServiceError::InvalidAvailability(_))));

    let slots = service::availability_for_player(&db, player.id).await.unwrap();
    let order: Vec<(i32, NaiveTime)> = slots.iter().map(|s| (s.day_of_week, s.start_time)).collect();
    assert_eq!(order, [(0, hour(10, 30)), (3, hour(8, 0)), (3, hour(19, 0))]);
    assert_eq!(slots[0].to_dict()["start_time"], "10:30:00");

    assert!(service::remove_availability(&db, slots[0].id).await.unwrap());
    assert_eq!(service::availability_for_player(&db, player.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn suggestion_keeps_skills_and_moves_out_of_pending_once() {
    let db = common::db().await;
    let club = common::club(&db).await;
    let players = common::players(&db, &club, 4).await;
    let seats = [players[0].id, players[1].id, players[2].id, players[3].id];

    let duplicate = NewSuggestion {
        club_id: club.id,
        players: [seats[0], seats[1], seats[2], seats[0]],
        team1_skill: 25.3,
        team2_skill: 24.8,
        balance_score: None,
    }
    .insert(&db)
    .await;
    assert!(matches!(duplicate, Err(ServiceError::DuplicatePlayers)));

    let suggestion = NewSuggestion {
        club_id: club.id,
        players: seats,
        team1_skill: 25.3,
        team2_skill: 24.8,
        balance_score: None,
    }
    .insert(&db)
    .await
    .unwrap();
    assert_eq!(suggestion.status, matchmaking_suggestion::STATUS_PENDING);
    assert_eq!(suggestion.player_ids(), seats);

    let mut record = find_with::<matchmaking_suggestion::Record, _>(
        &db,
        suggestion.id,
        &[
            matchmaking_suggestion::Relation::Player1,
            matchmaking_suggestion::Relation::Match,
        ],
    )
    .await
    .unwrap()
    .unwrap();
    let dict = record.to_dict();
    assert_eq!(dict["team1_skill"], 25.3);
    assert_eq!(dict["team2_skill"], 24.8);
    assert_eq!(dict["player1"]["id"], seats[0].to_string());
    assert!(dict["match"].is_null());
    assert!(dict.get("player2").is_none());

    let pending = service::pending_suggestions(&db, club.id).await.unwrap();
    assert_eq!(pending.len(), 1);

    let game = common::played_match(&db, &players[0]).await;
    let accepted = service::accept_suggestion(&db, suggestion.id, game.id)
        .await
        .unwrap();
    assert_eq!(accepted.status, "accepted");
    assert_eq!(accepted.match_id, Some(game.id));

    let err = service::reject_suggestion(&db, suggestion.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidStatusTransition { .. }));
    assert!(service::pending_suggestions(&db, club.id).await.unwrap().is_empty());

    record.model = accepted;
    assert_eq!(record.to_dict()["status"], "accepted");
}
