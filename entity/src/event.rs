use sea_orm::entity::prelude::*;
use serde_json::json;

use crate::dict::{self, object, ToDict};
use crate::macros::timestamped_behavior;

/// Any schedulable happening at a club. Tournaments add their bracket data on top
/// of an event row under the same id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub club_id: Uuid,
    #[sea_orm(column_name = "type")]
    pub event_type: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
    pub registration_deadline: DateTimeWithTimeZone,
    pub total_slots: i32,
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
    #[sea_orm(has_many = "super::event_participant::Entity")]
    Participants,
    #[sea_orm(has_one = "super::tournament::Entity")]
    Tournament,
}

impl Related<super::event_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participants.def()
    }
}

impl Related<super::tournament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tournament.def()
    }
}

timestamped_behavior!(
    id: Uuid::new_v4(),
);

impl ToDict for Model {
    fn to_dict(&self) -> dict::Dict {
        object(json!({
            "id": dict::id(&self.id),
            "club_id": dict::id(&self.club_id),
            "type": self.event_type,
            "title": self.title,
            "description": self.description,
            "price": self.price,
            "start_date": dict::timestamp(&self.start_date),
            "end_date": dict::timestamp(&self.end_date),
            "registration_deadline": dict::timestamp(&self.registration_deadline),
            "total_slots": self.total_slots,
        }))
    }
}
