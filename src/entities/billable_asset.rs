//! Billable asset entity - A plot or slip that can be invoiced.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "billable_assets")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Plot identifier, unique across all assets
    #[sea_orm(unique)]
    pub plot_id: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Current holder; cleared when that user is deleted
    pub owner_user_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerUserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Owner,
}

impl ActiveModelBehavior for ActiveModel {}
