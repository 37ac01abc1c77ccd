use sea_orm::entity::prelude::*;
use serde_json::json;

use crate::dict::{self, object, put_many, put_one, ToDict};
use crate::macros::timestamped_behavior;
use crate::Fetched;

pub const DEFAULT_ROUNDS: i32 = 1;
pub const DEFAULT_PLAYERS_PER_MATCH: i32 = 4;

/// Bracket data of an event. The primary key is the event's own id, so the row
/// cannot outlive or precede its event.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tournaments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// `knockout`, `round-robin` or `groups`.
    pub format: String,
    pub rounds: i32,
    pub players_per_match: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::Id",
        to = "super::event::Column::Id",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(has_many = "super::tournament_match::Entity")]
    Matches,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::tournament_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matches.def()
    }
}

timestamped_behavior!(
    rounds: DEFAULT_ROUNDS,
    players_per_match: DEFAULT_PLAYERS_PER_MATCH,
);

impl ToDict for Model {
    fn to_dict(&self) -> dict::Dict {
        object(json!({
            "id": dict::id(&self.id),
            "format": self.format,
            "rounds": self.rounds,
            "players_per_match": self.players_per_match,
        }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub model: Model,
    pub event: Fetched<Option<super::event::Model>>,
    pub matches: Fetched<Vec<super::tournament_match::Record>>,
}

impl From<Model> for Record {
    fn from(model: Model) -> Self {
        Self {
            model,
            event: Fetched::Unloaded,
            matches: Fetched::Unloaded,
        }
    }
}

impl ToDict for Record {
    fn to_dict(&self) -> dict::Dict {
        let mut tournament = self.model.to_dict();
        put_one(&mut tournament, "event", &self.event);
        put_many(&mut tournament, "matches", &self.matches);
        tournament
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tournament() -> Model {
        let now: DateTimeWithTimeZone = Utc::now().into();
        Model {
            id: Uuid::new_v4(),
            format: "round-robin".to_owned(),
            rounds: DEFAULT_ROUNDS,
            players_per_match: DEFAULT_PLAYERS_PER_MATCH,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn unloaded_event_and_bracket_are_omitted() {
        let dict = Record::from(tournament()).to_dict();

        let mut keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["format", "id", "players_per_match", "rounds"]);
    }

    #[test]
    fn empty_bracket_renders_as_empty_list() {
        let mut record = Record::from(tournament());
        record.matches = Fetched::Loaded(Vec::new());

        let dict = record.to_dict();
        assert_eq!(dict["matches"], json!([]));
        assert!(dict.get("event").is_none());
    }
}
