use sea_orm::entity::prelude::*;
use serde_json::json;

use crate::dict::{self, object, put_one, ToDict};
use crate::macros::timestamped_behavior;
use crate::Fetched;

pub const STATUS_INVITED: &str = "invited";

/// A player invited to a match request: `invited`, then `confirmed` or `rejected`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "match_request_players")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub match_request_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub player_id: Uuid,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::match_request::Entity",
        from = "Column::MatchRequestId",
        to = "super::match_request::Column::Id",
        on_delete = "Cascade"
    )]
    MatchRequest,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id"
    )]
    Player,
}

impl Related<super::match_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchRequest.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

timestamped_behavior!(
    status: STATUS_INVITED.to_owned(),
);

impl ToDict for Model {
    fn to_dict(&self) -> dict::Dict {
        object(json!({
            "match_request_id": dict::id(&self.match_request_id),
            "player_id": dict::id(&self.player_id),
            "status": self.status,
        }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub model: Model,
    pub player: Fetched<Option<super::player::Model>>,
}

impl From<Model> for Record {
    fn from(model: Model) -> Self {
        Self {
            model,
            player: Fetched::Unloaded,
        }
    }
}

impl ToDict for Record {
    fn to_dict(&self) -> dict::Dict {
        let mut invitee = self.model.to_dict();
        put_one(&mut invitee, "player", &self.player);
        invitee
    }
}
