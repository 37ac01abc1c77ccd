use sea_orm::entity::prelude::*;
use serde_json::json;

use crate::dict::{self, object, put_one, ToDict};
use crate::macros::timestamped_behavior;
use crate::Fetched;

/// One recurring weekly window in which a player can play.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player_availability")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub player_id: Uuid,
    /// 0 = Sunday through 6 = Saturday.
    pub day_of_week: i32,
    pub start_time: Time,
    pub end_time: Time,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

timestamped_behavior!(
    id: Uuid::new_v4(),
);

impl ToDict for Model {
    fn to_dict(&self) -> dict::Dict {
        object(json!({
            "id": dict::id(&self.id),
            "player_id": dict::id(&self.player_id),
            "day_of_week": self.day_of_week,
            "start_time": dict::time_of_day(&self.start_time),
            "end_time": dict::time_of_day(&self.end_time),
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
        let mut availability = self.model.to_dict();
        put_one(&mut availability, "player", &self.player);
        availability
    }
}
