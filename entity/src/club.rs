use sea_orm::entity::prelude::*;
use serde_json::json;

use crate::dict::{self, object, ToDict};
use crate::macros::timestamped_behavior;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clubs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub name_fep: String,
    pub search_key: String,
    pub logo: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub postal_code: Option<String>,
    pub is_premium: bool,
    pub is_partner: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

timestamped_behavior!(
    id: Uuid::new_v4(),
    is_premium: false,
    is_partner: false,
);

impl ToDict for Model {
    fn to_dict(&self) -> dict::Dict {
        object(json!({
            "id": dict::id(&self.id),
            "name": self.name,
            "name_fep": self.name_fep,
            "search_key": self.search_key,
            "logo": self.logo,
            "url": self.url,
            "email": self.email,
            "phone_number": self.phone_number,
            "postal_code": self.postal_code,
            "is_premium": self.is_premium,
            "is_partner": self.is_partner,
        }))
    }
}
