//! Catch entity - One recorded fish within a session.
//!
//! The session link cascades. Every other link (species, avatar, pose,
//! background, outfit) uses NO ACTION, so the referenced row cannot be deleted
//! while a catch still points at it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catch database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "catches")]
pub struct Model {
    /// Unique identifier for the catch
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Session the fish was caught in
    pub session_id: i32,
    /// Species caught
    pub species_id: i32,
    /// Length in inches, decimal(5,2)
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub length: Option<f64>,
    /// Weight in pounds, decimal(5,2)
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub weight: Option<f64>,
    /// Original photo
    pub photo_url: Option<String>,
    /// Photo composed with avatar, pose, background and outfit
    pub composed_photo_url: Option<String>,
    /// When the fish was caught
    pub caught_at: DateTimeUtc,
    /// Air temperature at catch time
    pub temperature: Option<f64>,
    /// Barometric pressure at catch time, decimal(7,2)
    #[sea_orm(column_type = "Decimal(Some((7, 2)))", nullable)]
    pub barometric_pressure: Option<f64>,
    /// Free-form weather description
    pub weather_conditions: Option<String>,
    /// Avatar used in the composed photo
    pub avatar_id: Option<i32>,
    /// Catalog pose used in the composed photo
    pub pose_id: Option<i32>,
    /// Catalog background used in the composed photo
    pub background_id: Option<i32>,
    /// Catalog outfit used in the composed photo
    pub outfit_id: Option<i32>,
    /// Catch and release
    pub is_released: bool,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Defines relationships between Catch and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each catch belongs to one session
    #[sea_orm(
        belongs_to = "super::fishing_session::Entity",
        from = "Column::SessionId",
        to = "super::fishing_session::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FishingSession,
    #[sea_orm(
        belongs_to = "super::fish_species::Entity",
        from = "Column::SpeciesId",
        to = "super::fish_species::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    FishSpecies,
    #[sea_orm(
        belongs_to = "super::user_avatar::Entity",
        from = "Column::AvatarId",
        to = "super::user_avatar::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    UserAvatar,
    #[sea_orm(
        belongs_to = "super::avatar_pose::Entity",
        from = "Column::PoseId",
        to = "super::avatar_pose::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    AvatarPose,
    #[sea_orm(
        belongs_to = "super::background::Entity",
        from = "Column::BackgroundId",
        to = "super::background::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Background,
    #[sea_orm(
        belongs_to = "super::outfit::Entity",
        from = "Column::OutfitId",
        to = "super::outfit::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Outfit,
    /// Album memberships of this catch
    #[sea_orm(has_many = "super::album_catch::Entity")]
    AlbumCatches,
}

impl Related<super::fishing_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FishingSession.def()
    }
}

impl Related<super::fish_species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FishSpecies.def()
    }
}

impl Related<super::album_catch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AlbumCatches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
