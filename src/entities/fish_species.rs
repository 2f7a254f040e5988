//! Fish species entity - Reference catalog of species.
//!
//! Rows are created once by the species seeder and are rarely mutated.
//! Catches reference species with a no-action policy, so a species that has
//! been caught cannot be deleted.

use sea_orm::{Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

/// Kind of water a species (or a session) belongs to
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum WaterType {
    /// Lakes, rivers and ponds
    #[sea_orm(string_value = "Fresh")]
    Fresh,
    /// Ocean and brackish water
    #[sea_orm(string_value = "Salt")]
    Salt,
    /// Found in both
    #[sea_orm(string_value = "Both")]
    Both,
}

impl WaterType {
    /// Whether a species of this water type can be found in `water`.
    #[must_use]
    pub fn matches(self, water: Self) -> bool {
        self == Self::Both || water == Self::Both || self == water
    }
}

/// Fish species database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fish_species")]
pub struct Model {
    /// Unique identifier for the species
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Common name (e.g., "Largemouth Bass")
    pub common_name: String,
    /// Latin name (e.g., "Micropterus salmoides")
    pub scientific_name: Option<String>,
    /// Where the species lives
    pub water_type: WaterType,
    /// Region the species is typically found in
    pub region: Option<String>,
    /// Typical minimum size in inches, decimal(5,2)
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub min_size: Option<f64>,
    /// Typical maximum size in inches, decimal(5,2)
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub max_size: Option<f64>,
    /// First month of the season (1-12)
    pub season_start_month: Option<i32>,
    /// Last month of the season (1-12)
    pub season_end_month: Option<i32>,
    /// Free-form regulation notes
    pub regulations: Option<String>,
    /// Hidden from pickers when false
    pub is_active: bool,
}

/// Defines relationships between `FishSpecies` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One species appears in many catches
    #[sea_orm(has_many = "super::catch::Entity")]
    Catches,
}

impl Related<super::catch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Catches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            is_active: Set(true),
            ..ActiveModelTrait::default()
        }
    }
}
