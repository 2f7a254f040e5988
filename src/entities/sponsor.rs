//! Sponsor entity - Brands that sponsor catalog items.
//!
//! Catalog items keep an optional link to their sponsor which is set to NULL
//! when the sponsor is deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sponsor database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sponsors")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name
    pub name: String,
    /// Sponsor website
    pub website_url: Option<String>,
    /// Sponsor logo
    pub logo_url: Option<String>,
    /// Inactive sponsors are hidden
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::avatar_pose::Entity")]
    AvatarPoses,
    #[sea_orm(has_many = "super::background::Entity")]
    Backgrounds,
    #[sea_orm(has_many = "super::outfit::Entity")]
    Outfits,
    #[sea_orm(has_many = "super::fishing_equipment::Entity")]
    FishingEquipment,
    #[sea_orm(has_many = "super::bait_lure::Entity")]
    BaitsLures,
}

impl Related<super::avatar_pose::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AvatarPoses.def()
    }
}

impl Related<super::background::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Backgrounds.def()
    }
}

impl Related<super::outfit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Outfits.def()
    }
}

impl Related<super::fishing_equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FishingEquipment.def()
    }
}

impl Related<super::bait_lure::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BaitsLures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
