use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A volunteer seeking hardware assistance.
///
/// `authenticated` is an opaque status string set by an external reviewer
/// call; the API never interprets it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "techfugees")]
#[schema(as = Techfugee)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub skills: String,
    pub city: String,
    pub introduction: String,
    pub authenticated: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Zero-value row returned by lookups that report "not found" silently.
impl Default for Model {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            email: String::new(),
            skills: String::new(),
            city: String::new(),
            introduction: String::new(),
            authenticated: String::new(),
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
            deleted_at: None,
        }
    }
}
