use sea_orm::entity::prelude::*;
use serde_json::json;

use crate::dict::{self, object, put_one, ToDict};
use crate::macros::timestamped_behavior;
use crate::Fetched;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "club_admins")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    /// bcrypt hash, never serialized.
    pub password: String,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub club_id: Uuid,
    pub is_super_admin: bool,
    pub last_login: Option<DateTimeWithTimeZone>,
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
    is_super_admin: false,
);

impl ToDict for Model {
    fn to_dict(&self) -> dict::Dict {
        object(json!({
            "id": dict::id(&self.id),
            "username": self.username,
            "email": self.email,
            "first_name": self.first_name,
            "last_name": self.last_name,
            "club_id": dict::id(&self.club_id),
            "is_super_admin": self.is_super_admin,
            "last_login": dict::optional_timestamp(&self.last_login),
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
        let mut admin = self.model.to_dict();
        put_one(&mut admin, "club", &self.club);
        admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::Value;

    fn admin() -> Model {
        let now: DateTimeWithTimeZone = Utc::now().into();
        Model {
            id: Uuid::new_v4(),
            username: "recepcion".to_owned(),
            password: "$2b$04$notarealhash".to_owned(),
            email: "recepcion@padel.es".to_owned(),
            first_name: None,
            last_name: Some("García".to_owned()),
            club_id: Uuid::new_v4(),
            is_super_admin: false,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn unloaded_club_is_omitted_and_password_never_shown() {
        let dict = Record::from(admin()).to_dict();

        let mut keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "club_id",
                "email",
                "first_name",
                "id",
                "is_super_admin",
                "last_login",
                "last_name",
                "username"
            ]
        );
        assert_eq!(dict["first_name"], Value::Null);
    }

    #[test]
    fn missing_club_renders_as_null() {
        let mut record = Record::from(admin());
        record.club = Fetched::Loaded(None);

        let dict = record.to_dict();
        assert_eq!(dict["club"], Value::Null);
        assert!(dict.get("password").is_none());
    }
}
