//! Admin task instance entity - One task for one calendar month.
//!
//! (`task_id`, `year`, `month`) is unique. Assigned and completing users are
//! optional links that are cleared when the user is deleted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Progress of a monthly task
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum TaskStatus {
    #[sea_orm(string_value = "Open")]
    Open,
    #[sea_orm(string_value = "InProgress")]
    InProgress,
    #[sea_orm(string_value = "Completed")]
    Completed,
}

/// Admin task instance database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_task_instances")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Task this instance belongs to
    pub task_id: i32,
    /// Calendar year of the period
    pub year: i32,
    /// Calendar month (1-12)
    pub month: i32,
    /// Progress of this instance
    pub status: TaskStatus,
    /// User working on it; cleared when the user is deleted
    pub assigned_user_id: Option<String>,
    /// User who completed it; cleared when the user is deleted
    pub completed_by_user_id: Option<String>,
    /// When it was completed
    pub completed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::admin_task::Entity",
        from = "Column::TaskId",
        to = "super::admin_task::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AdminTask,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssignedUserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    AssignedUser,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CompletedByUserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    CompletedByUser,
}

impl Related<super::admin_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdminTask.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
