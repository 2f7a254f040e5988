//! Admin task entity - A recurring monthly chore.
//!
//! Each month gets its own [`super::admin_task_instance`] row; deleting the
//! task deletes all of its instances.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Admin task database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_tasks")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Short task title
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Inactive tasks get no new instances
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::admin_task_instance::Entity")]
    Instances,
}

impl Related<super::admin_task_instance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
