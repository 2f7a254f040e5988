//! Color variable entity - CSS custom properties seeded from the stylesheet.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Color variable database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "color_variables")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Property name including the leading `--` (e.g., `--brand-blue`)
    #[sea_orm(unique)]
    pub name: String,
    /// Hex value including the leading `#` (e.g., `#1a2b3c`)
    pub value: String,
}

/// `ColorVariable` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
