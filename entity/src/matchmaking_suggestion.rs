use sea_orm::entity::prelude::*;
use serde_json::json;

use crate::dict::{self, object, put_one, ToDict};
use crate::macros::timestamped_behavior;
use crate::Fetched;

pub const STATUS_PENDING: &str = "pending";

/// A proposed doubles match: players 1 and 2 form team one, 3 and 4 team two.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "matchmaking_suggestions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub club_id: Uuid,
    pub player1_id: Uuid,
    pub player2_id: Uuid,
    pub player3_id: Uuid,
    pub player4_id: Uuid,
    pub team1_skill: f64,
    pub team2_skill: f64,
    pub balance_score: f64,
    pub status: String,
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
        from = "Column::Player1Id",
        to = "super::player::Column::Id"
    )]
    Player1,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::Player2Id",
        to = "super::player::Column::Id"
    )]
    Player2,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::Player3Id",
        to = "super::player::Column::Id"
    )]
    Player3,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::Player4Id",
        to = "super::player::Column::Id"
    )]
    Player4,
    #[sea_orm(
        belongs_to = "super::matches::Entity",
        from = "Column::MatchId",
        to = "super::matches::Column::Id"
    )]
    Match,
}

impl Related<super::club::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Club.def()
    }
}

timestamped_behavior!(
    id: Uuid::new_v4(),
    status: STATUS_PENDING.to_owned(),
);

impl Model {
    pub fn player_ids(&self) -> [Uuid; 4] {
        [
            self.player1_id,
            self.player2_id,
            self.player3_id,
            self.player4_id,
        ]
    }
}

impl ToDict for Model {
    fn to_dict(&self) -> dict::Dict {
        object(json!({
            "id": dict::id(&self.id),
            "club_id": dict::id(&self.club_id),
            "player1_id": dict::id(&self.player1_id),
            "player2_id": dict::id(&self.player2_id),
            "player3_id": dict::id(&self.player3_id),
            "player4_id": dict::id(&self.player4_id),
            "team1_skill": self.team1_skill,
            "team2_skill": self.team2_skill,
            "balance_score": self.balance_score,
            "status": self.status,
            "match_id": dict::optional_id(&self.match_id),
        }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub model: Model,
    pub club: Fetched<Option<super::club::Model>>,
    pub player1: Fetched<Option<super::player::Model>>,
    pub player2: Fetched<Option<super::player::Model>>,
    pub player3: Fetched<Option<super::player::Model>>,
    pub player4: Fetched<Option<super::player::Model>>,
    pub r#match: Fetched<Option<super::matches::Model>>,
}

impl From<Model> for Record {
    fn from(model: Model) -> Self {
        Self {
            model,
            club: Fetched::Unloaded,
            player1: Fetched::Unloaded,
            player2: Fetched::Unloaded,
            player3: Fetched::Unloaded,
            player4: Fetched::Unloaded,
            r#match: Fetched::Unloaded,
        }
    }
}

impl ToDict for Record {
    fn to_dict(&self) -> dict::Dict {
        let mut suggestion = self.model.to_dict();
        put_one(&mut suggestion, "club", &self.club);
        put_one(&mut suggestion, "player1", &self.player1);
        put_one(&mut suggestion, "player2", &self.player2);
        put_one(&mut suggestion, "player3", &self.player3);
        put_one(&mut suggestion, "player4", &self.player4);
        put_one(&mut suggestion, "match", &self.r#match);
        suggestion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player;
    use chrono::Utc;

    fn suggestion() -> Model {
        let now = Utc::now().into();
        Model {
            id: Uuid::new_v4(),
            club_id: Uuid::new_v4(),
            player1_id: Uuid::new_v4(),
            player2_id: Uuid::new_v4(),
            player3_id: Uuid::new_v4(),
            player4_id: Uuid::new_v4(),
            team1_skill: 25.3,
            team2_skill: 24.8,
            balance_score: 0.5,
            status: STATUS_PENDING.to_owned(),
            match_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn skills_pass_through_unchanged() {
        let dict = Record::from(suggestion()).to_dict();
        assert_eq!(dict["team1_skill"].as_f64(), Some(25.3));
        assert_eq!(dict["team2_skill"].as_f64(), Some(24.8));
        assert_eq!(dict.len(), 11);
    }

    #[test]
    fn only_loaded_players_are_nested() {
        let model = suggestion();
        let now = Utc::now().into();
        let first = player::Model {
            id: model.player1_id,
            phone_number: "600000001".to_owned(),
            name: Some("Ana".to_owned()),
            club_id: Some(model.club_id),
            mu: 25.0,
            sigma: 8.3,
            trueskill: 0.1,
            preferred_side: Some("drive".to_owned()),
            sex: None,
            matches_played: 3,
            matches_won: 2,
            created_at: now,
            updated_at: now,
        };
        let mut record = Record::from(model);
        record.player1 = Fetched::Loaded(Some(first));

        let dict = record.to_dict();
        assert_eq!(dict["player1"]["name"], "Ana");
        assert!(!dict.contains_key("player2"));
        assert!(!dict.contains_key("match"));
    }
}
