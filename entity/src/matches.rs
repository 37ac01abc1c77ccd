use sea_orm::entity::prelude::*;
use serde_json::json;

use crate::dict::{self, object, ToDict};
use crate::macros::timestamped_behavior;

/// A played game. Requests, suggestions and bracket slots point at it once it exists.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub club_id: Option<Uuid>,
    pub created_by_id: Uuid,
    pub is_result_validated: bool,
    pub played_on: Option<DateTimeWithTimeZone>,
    pub result: Option<Json>,
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
        from = "Column::CreatedById",
        to = "super::player::Column::Id"
    )]
    CreatedBy,
}

timestamped_behavior!(
    id: Uuid::new_v4(),
    is_result_validated: false,
);

impl ToDict for Model {
    fn to_dict(&self) -> dict::Dict {
        object(json!({
            "id": dict::id(&self.id),
            "club_id": dict::optional_id(&self.club_id),
            "created_by_id": dict::id(&self.created_by_id),
            "is_result_validated": self.is_result_validated,
            "played_on": dict::optional_timestamp(&self.played_on),
            "result": self.result,
        }))
    }
}
