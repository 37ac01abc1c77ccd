use sea_orm::entity::prelude::*;
use serde_json::json;

use crate::dict::{self, object, put_one, ToDict};
use crate::macros::timestamped_behavior;
use crate::Fetched;

pub const STATUS_REGISTERED: &str = "registered";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event_participants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub player_id: Uuid,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id"
    )]
    Player,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

timestamped_behavior!(
    status: STATUS_REGISTERED.to_owned(),
);

impl ToDict for Model {
    fn to_dict(&self) -> dict::Dict {
        object(json!({
            "event_id": dict::id(&self.event_id),
            "player_id": dict::id(&self.player_id),
            "status": self.status,
        }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub model: Model,
    pub event: Fetched<Option<super::event::Model>>,
    pub player: Fetched<Option<super::player::Model>>,
}

impl From<Model> for Record {
    fn from(model: Model) -> Self {
        Self {
            model,
            event: Fetched::Unloaded,
            player: Fetched::Unloaded,
        }
    }
}

impl ToDict for Record {
    fn to_dict(&self) -> dict::Dict {
        let mut participant = self.model.to_dict();
        put_one(&mut participant, "event", &self.event);
        put_one(&mut participant, "player", &self.player);
        participant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::Value;

    fn participant() -> Model {
        let now: DateTimeWithTimeZone = Utc::now().into();
        Model {
            event_id: Uuid::new_v4(),
            player_id: Uuid::new_v4(),
            status: STATUS_REGISTERED.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn unloaded_event_and_player_are_omitted() {
        let dict = Record::from(participant()).to_dict();

        let mut keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["event_id", "player_id", "status"]);
        assert_eq!(dict["status"], "registered");
    }

    #[test]
    fn each_relation_is_guarded_on_its_own() {
        let mut record = Record::from(participant());
        record.player = Fetched::Loaded(None);

        let dict = record.to_dict();
        assert_eq!(dict["player"], Value::Null);
        assert!(dict.get("event").is_none());
    }
}
