//! Catch album entity - A user-curated collection of catches.
//!
//! Membership is stored in `album_catches`. An album may be tied to a session,
//! in which case deleting the session deletes the album too.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catch album database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "catch_albums")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owner of the album
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Visible to other members
    pub is_public: bool,
    /// Session this album was created from, if any
    pub session_id: Option<i32>,
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
    #[sea_orm(
        belongs_to = "super::fishing_session::Entity",
        from = "Column::SessionId",
        to = "super::fishing_session::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FishingSession,
    #[sea_orm(has_many = "super::album_catch::Entity")]
    AlbumCatches,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::fishing_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FishingSession.def()
    }
}

impl Related<super::album_catch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AlbumCatches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
