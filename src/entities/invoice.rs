//! Invoice entity - Minimal view of the invoicing subsystem.
//!
//! Only the columns the rest of the schema relies on are mapped here.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Invoice database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Billed user
    pub user_id: String,
    /// Human facing invoice number
    #[sea_orm(unique)]
    pub invoice_number: String,
    /// Total in dollars, decimal(10,2)
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount: f64,
    /// When the invoice was issued
    pub issued_at: DateTimeUtc,
    /// Whether the invoice has been paid
    pub is_paid: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
    #[sea_orm(has_many = "super::background_removal_usage::Entity")]
    BackgroundRemovalUsage,
}

impl Related<super::background_removal_usage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BackgroundRemovalUsage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
