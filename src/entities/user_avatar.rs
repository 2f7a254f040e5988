//! User avatar entity - Selectable avatar images, many per user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User avatar database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_avatars")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owning user, indexed for per-user listings
    #[sea_orm(indexed)]
    pub user_id: String,
    /// Avatar image
    pub image_url: String,
    /// The avatar used when a catch does not pick one
    pub is_default: bool,
    /// Uploaded by the user rather than picked from the stock set
    pub is_uploaded: bool,
    /// When the row was created
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
