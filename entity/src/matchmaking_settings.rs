use sea_orm::entity::prelude::*;
use serde_json::json;

use crate::dict::{self, object, put_one, ToDict};
use crate::macros::timestamped_behavior;
use crate::Fetched;

pub const DEFAULT_MIN_SKILL_DIFFERENCE: f64 = 2.0;
pub const DEFAULT_MAX_SKILL_DIFFERENCE: f64 = 5.0;
pub const DEFAULT_MIN_MATCHES_FOR_TRUESKILL: i32 = 10;

/// Per-club thresholds read by the matchmaker.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "matchmaking_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub club_id: Uuid,
    pub min_skill_difference: f64,
    pub max_skill_difference: f64,
    /// Below this many played matches a player's rating is not trusted yet.
    pub min_matches_for_trueskill: i32,
    pub consider_preferred_side: bool,
    pub consider_gender: bool,
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
    min_skill_difference: DEFAULT_MIN_SKILL_DIFFERENCE,
    max_skill_difference: DEFAULT_MAX_SKILL_DIFFERENCE,
    min_matches_for_trueskill: DEFAULT_MIN_MATCHES_FOR_TRUESKILL,
    consider_preferred_side: true,
    consider_gender: false,
);

impl ToDict for Model {
    fn to_dict(&self) -> dict::Dict {
        object(json!({
            "id": dict::id(&self.id),
            "club_id": dict::id(&self.club_id),
            "min_skill_difference": self.min_skill_difference,
            "max_skill_difference": self.max_skill_difference,
            "min_matches_for_trueskill": self.min_matches_for_trueskill,
            "consider_preferred_side": self.consider_preferred_side,
            "consider_gender": self.consider_gender,
        }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub model: Model,
    pub club: Fetched<Option<super::club::Model>>,
}

impl From<Model> for Record {
    fn from(model: Model) -> Self {
        Self {
            model,
            club: Fetched::Unloaded,
        }
    }
}

impl ToDict for Record {
    fn to_dict(&self) -> dict::Dict {
        let mut settings = self.model.to_dict();
        put_one(&mut settings, "club", &self.club);
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn unloaded_club_is_omitted() {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let settings = Model {
            id: Uuid::new_v4(),
            club_id: Uuid::new_v4(),
            min_skill_difference: DEFAULT_MIN_SKILL_DIFFERENCE,
            max_skill_difference: DEFAULT_MAX_SKILL_DIFFERENCE,
            min_matches_for_trueskill: DEFAULT_MIN_MATCHES_FOR_TRUESKILL,
            consider_preferred_side: true,
            consider_gender: false,
            created_at: now,
            updated_at: now,
        };
        let dict = Record::from(settings).to_dict();

        let mut keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "club_id",
                "consider_gender",
                "consider_preferred_side",
                "id",
                "max_skill_difference",
                "min_matches_for_trueskill",
                "min_skill_difference"
            ]
        );
        assert_eq!(dict["min_skill_difference"], 2.0);
        assert_eq!(dict["min_matches_for_trueskill"], 10);
    }
}
