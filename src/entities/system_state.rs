//! System state entity - Stores key-value pairs for one-time markers.
//!
//! The species seeder writes its "already seeded" marker here. `key` is unique
//! so two seeders racing on the same marker cannot both commit.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// System state database model - stores key-value marker pairs
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "system_state")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Marker key (e.g., `"fish_species_seeded"`)
    #[sea_orm(unique)]
    pub key: String,
    /// Marker value stored as string
    pub value: String,
    /// When this marker was last written
    pub updated_at: DateTimeUtc,
}

/// `SystemState` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
