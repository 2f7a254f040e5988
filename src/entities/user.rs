//! User entity - Stand-in for the identity store.
//!
//! Every per-user row in the schema references `users.id`. The identity
//! subsystem itself (passwords, roles, logins) lives elsewhere; only the key
//! and a few display fields are kept here so foreign keys have a target.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Identity-provider user id (opaque string)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Login email
    #[sea_orm(unique)]
    pub email: String,
    /// Name shown to other members
    pub display_name: String,
    /// When the user was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user has at most one Smart Catch profile
    #[sea_orm(has_one = "super::smart_catch_profile::Entity")]
    SmartCatchProfile,
    /// One user has many avatars
    #[sea_orm(has_many = "super::user_avatar::Entity")]
    UserAvatars,
    /// One user has many fishing sessions
    #[sea_orm(has_many = "super::fishing_session::Entity")]
    FishingSessions,
    /// One user has many albums
    #[sea_orm(has_many = "super::catch_album::Entity")]
    CatchAlbums,
}

impl Related<super::smart_catch_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SmartCatchProfile.def()
    }
}

impl Related<super::user_avatar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAvatars.def()
    }
}

impl Related<super::fishing_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FishingSessions.def()
    }
}

impl Related<super::catch_album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CatchAlbums.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
