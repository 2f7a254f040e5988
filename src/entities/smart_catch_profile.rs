//! Smart Catch profile entity - One profile per user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Subscription level of a profile
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum SubscriptionTier {
    #[sea_orm(string_value = "Free")]
    Free,
    #[sea_orm(string_value = "Premium")]
    Premium,
    #[sea_orm(string_value = "Pro")]
    Pro,
}

/// Smart Catch profile database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "smart_catch_profiles")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owning user; at most one profile per user
    #[sea_orm(unique)]
    pub user_id: String,
    /// Paid tier, Free by default
    pub subscription_tier: SubscriptionTier,
    /// "imperial" or "metric"
    pub preferred_units: String,
    /// Whether new catches default to public
    pub share_catches_publicly: bool,
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
