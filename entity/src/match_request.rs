use sea_orm::entity::prelude::*;
use serde_json::json;

use crate::dict::{self, object, put_many, put_one, ToDict};
use crate::macros::timestamped_behavior;
use crate::Fetched;

pub const STATUS_PENDING: &str = "pending";

/// A player asking the club to put a match together. Moves through
/// `pending`, `processing`, `completed` or `cancelled`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "match_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub club_id: Uuid,
    pub requested_by_id: Uuid,
    pub status: String,
    pub preferred_date: Option<DateTimeWithTimeZone>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub match_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::club::Entity",
        from = "Column::ClubId",
        to = "super::club::Column::Id"
    )]
    Club,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::RequestedById",
        to = "super::player::Column::Id"
    )]
    RequestedBy,
    #[sea_orm(
        belongs_to = "super::matches::Entity",
        from = "Column::MatchId",
        to = "super::matches::Column::Id"
    )]
    Match,
    #[sea_orm(has_many = "super::match_request_player::Entity")]
    Players,
}

impl Related<super::match_request_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Players.def()
    }
}

timestamped_behavior!(
    id: Uuid::new_v4(),
    status: STATUS_PENDING.to_owned(),
);

impl ToDict for Model {
    fn to_dict(&self) -> dict::Dict {
        object(json!({
            "id": dict::id(&self.id),
            "club_id": dict::id(&self.club_id),
            "requested_by_id": dict::id(&self.requested_by_id),
            "status": self.status,
            "preferred_date": dict::optional_timestamp(&self.preferred_date),
            "notes": self.notes,
            "match_id": dict::optional_id(&self.match_id),
        }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub model: Model,
    pub club: Fetched<Option<super::club::Model>>,
    pub requested_by: Fetched<Option<super::player::Model>>,
    pub r#match: Fetched<Option<super::matches::Model>>,
    /// Invitees, removed together with the request.
    pub players: Fetched<Vec<super::match_request_player::Record>>,
}

impl From<Model> for Record {
    fn from(model: Model) -> Self {
        Self {
            model,
            club: Fetched::Unloaded,
            requested_by: Fetched::Unloaded,
            r#match: Fetched::Unloaded,
            players: Fetched::Unloaded,
        }
    }
}

impl ToDict for Record {
    fn to_dict(&self) -> dict::Dict {
        let mut request = self.model.to_dict();
        put_one(&mut request, "club", &self.club);
        put_one(&mut request, "requested_by", &self.requested_by);
        put_one(&mut request, "match", &self.r#match);
        put_many(&mut request, "players", &self.players);
        request
    }
}
