#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection};
use service::entity::{club, event, matches, player};

/// Fresh in-memory database with every migration applied. A single connection
/// keeps the whole test on the same in-memory file.
pub async fn db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrations apply");
    db
}

pub fn at(day: u32, hour: u32) -> DateTimeWithTimeZone {
    Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0)
        .unwrap()
        .into()
}

pub async fn club(db: &DatabaseConnection) -> club::Model {
    club::ActiveModel {
        name: Set("Padel Indoor Norte".to_owned()),
        name_fep: Set("PADEL INDOOR NORTE".to_owned()),
        search_key: Set("padelindoornorte".to_owned()),
        postal_code: Set(Some("28034".to_owned())),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn player(db: &DatabaseConnection, club: &club::Model, phone: &str) -> player::Model {
    player::ActiveModel {
        phone_number: Set(phone.to_owned()),
        name: Set(Some(format!("Player {phone}"))),
        club_id: Set(Some(club.id)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn players(db: &DatabaseConnection, club: &club::Model, n: usize) -> Vec<player::Model> {
    let mut players = Vec::with_capacity(n);
    for i in 0..n {
        players.push(player(db, club, &format!("60000000{i}")).await);
    }
    players
}

pub async fn played_match(db: &DatabaseConnection, by: &player::Model) -> matches::Model {
    matches::ActiveModel {
        club_id: Set(by.club_id),
        created_by_id: Set(by.id),
        played_on: Set(Some(at(2, 19))),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn event(db: &DatabaseConnection, club: &club::Model) -> event::Model {
    event_with_slots(db, club, 16).await
}

pub async fn event_with_slots(
    db: &DatabaseConnection,
    club: &club::Model,
    total_slots: i32,
) -> event::Model {
    event::ActiveModel {
        club_id: Set(club.id),
        event_type: Set("tournament".to_owned()),
        title: Set("Torneo de verano".to_owned()),
        description: Set("Americano mixto".to_owned()),
        price: Set(15.0),
        start_date: Set(at(15, 9)),
        end_date: Set(at(15, 14)),
        registration_deadline: Set(at(13, 23)),
        total_slots: Set(total_slots),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
