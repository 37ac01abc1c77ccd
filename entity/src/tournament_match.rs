use sea_orm::entity::prelude::*;
use serde_json::json;

use crate::dict::{self, object, put_one, ToDict};
use crate::macros::timestamped_behavior;
use crate::Fetched;

/// Where a match sits in a tournament bracket.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tournament_matches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub match_id: Uuid,
    pub round: i32,
    pub position: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournament::Entity",
        from = "Column::TournamentId",
        to = "super::tournament::Column::Id",
        on_delete = "Cascade"
    )]
    Tournament,
    #[sea_orm(
        belongs_to = "super::matches::Entity",
        from = "Column::MatchId",
        to = "super::matches::Column::Id"
    )]
    Match,
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

timestamped_behavior!(
    id: Uuid::new_v4(),
);

impl ToDict for Model {
    fn to_dict(&self) -> dict::Dict {
        object(json!({
            "id": dict::id(&self.id),
            "tournament_id": dict::id(&self.tournament_id),
            "match_id": dict::id(&self.match_id),
            "round": self.round,
            "position": self.position,
        }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub model: Model,
    /// Boxed since a loaded tournament may in turn hold its bracket slots.
    pub tournament: Fetched<Option<Box<super::tournament::Record>>>,
    pub r#match: Fetched<Option<super::matches::Model>>,
}

impl From<Model> for Record {
    fn from(model: Model) -> Self {
        Self {
            model,
            tournament: Fetched::Unloaded,
            r#match: Fetched::Unloaded,
        }
    }
}

impl ToDict for Record {
    fn to_dict(&self) -> dict::Dict {
        let mut slot = self.model.to_dict();
        put_one(&mut slot, "tournament", &self.tournament);
        put_one(&mut slot, "match", &self.r#match);
        slot
    }
}
