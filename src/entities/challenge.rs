use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A donation opportunity posted by a donator.
///
/// `hardware_provided` and `duration` are free text supplied by the donor
/// form. `donator_id` is a declared reference only; nothing validates it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "challenges")]
#[schema(as = Challenge)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i64,
    pub donator_id: i64,
    pub name: String,
    pub description: String,
    pub laptop_type: String,
    pub amount: i64,
    pub hardware_provided: String,
    pub duration: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::donator::Entity",
        from = "Column::DonatorId",
        to = "super::donator::Column::Id"
    )]
    Donator,
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
}

impl Related<super::donator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Donator.def()
    }
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Default for Model {
    fn default() -> Self {
        Self {
            id: 0,
            donator_id: 0,
            name: String::new(),
            description: String::new(),
            laptop_type: String::new(),
            amount: 0,
            hardware_provided: String::new(),
            duration: String::new(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
            deleted_at: None,
        }
    }
}
