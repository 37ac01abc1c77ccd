use sea_orm::entity::prelude::*;
use serde_json::json;

use crate::dict::{self, object, ToDict};
use crate::macros::timestamped_behavior;
use crate::rating::{INITIAL_MU, INITIAL_SIGMA, INITIAL_TRUESKILL};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub phone_number: String,
    pub name: Option<String>,
    pub club_id: Option<Uuid>,
    pub mu: f64,
    pub sigma: f64,
    pub trueskill: f64,
    pub preferred_side: Option<String>,
    pub sex: Option<String>,
    pub matches_played: i32,
    pub matches_won: i32,
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
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

timestamped_behavior!(
    id: Uuid::new_v4(),
    mu: INITIAL_MU,
    sigma: INITIAL_SIGMA,
    trueskill: INITIAL_TRUESKILL,
    matches_played: 0,
    matches_won: 0,
);

impl ToDict for Model {
    fn to_dict(&self) -> dict::Dict {
        object(json!({
            "id": dict::id(&self.id),
            "phone_number": self.phone_number,
            "name": self.name,
            "club_id": dict::optional_id(&self.club_id),
            "mu": self.mu,
            "sigma": self.sigma,
            "trueskill": self.trueskill,
            "preferred_side": self.preferred_side,
            "sex": self.sex,
            "matches_played": self.matches_played,
            "matches_won": self.matches_won,
        }))
    }
}
