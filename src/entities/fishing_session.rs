//! Fishing session entity - One outing by a user.
//!
//! A session owns its catches (deleting the session deletes them) and may tie
//! albums to itself. Location and weather are captured as a snapshot at the
//! time the session is logged.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::fish_species::WaterType;

/// Fishing session database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fishing_sessions")]
pub struct Model {
    /// Unique identifier for the session
    #[sea_orm(primary_key)]
    pub id: i32,
    /// User who went fishing
    pub user_id: String,
    /// Day of the outing
    pub session_date: Date,
    /// Water fished on this outing
    pub water_type: WaterType,
    /// Free-form place name (e.g., "Lake Travis")
    pub location_name: Option<String>,
    /// Latitude, decimal(10,8)
    #[sea_orm(column_type = "Decimal(Some((10, 8)))", nullable)]
    pub latitude: Option<f64>,
    /// Longitude, decimal(11,8)
    #[sea_orm(column_type = "Decimal(Some((11, 8)))", nullable)]
    pub longitude: Option<f64>,
    /// Air temperature in degrees Fahrenheit
    pub temperature: Option<f64>,
    /// Barometric pressure, decimal(6,2)
    #[sea_orm(column_type = "Decimal(Some((6, 2)))", nullable)]
    pub barometric_pressure: Option<f64>,
    /// Wind speed in mph
    pub wind_speed: Option<f64>,
    /// Short weather description (e.g., "Overcast")
    pub weather_conditions: Option<String>,
    /// Rod/reel used; cleared when the equipment row is deleted
    pub equipment_id: Option<i32>,
    /// Bait or lure used; cleared when the bait row is deleted
    pub bait_lure_id: Option<i32>,
    /// Free-form notes
    pub notes: Option<String>,
    /// When the row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `FishingSession` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each session belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::fishing_equipment::Entity",
        from = "Column::EquipmentId",
        to = "super::fishing_equipment::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    FishingEquipment,
    #[sea_orm(
        belongs_to = "super::bait_lure::Entity",
        from = "Column::BaitLureId",
        to = "super::bait_lure::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    BaitLure,
    /// One session has many catches
    #[sea_orm(has_many = "super::catch::Entity")]
    Catches,
    /// Albums tied to this session
    #[sea_orm(has_many = "super::catch_album::Entity")]
    CatchAlbums,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::catch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Catches.def()
    }
}

impl Related<super::catch_album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CatchAlbums.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
