//! Recurring admin tasks and their monthly instances.
//!
//! A task has at most one instance per (year, month); the unique index on
//! `admin_task_instances` enforces it even if two callers race.

use crate::{
    core::{users::require_user, validation},
    entities::{AdminTask, AdminTaskInstance, TaskStatus, admin_task, admin_task_instance},
    errors::{Error, Result, is_unique_violation},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{debug, instrument};

/// Creates an active admin task.
pub async fn create_admin_task(
    db: &DatabaseConnection,
    title: &str,
    description: Option<String>,
) -> Result<admin_task::Model> {
    validation::check_not_blank("title", title)?;
    let task = admin_task::ActiveModel {
        title: Set(title.trim().to_string()),
        description: Set(description),
        is_active: Set(true),
        ..Default::default()
    };
    task.insert(db).await.map_err(Into::into)
}

/// Active tasks ordered by title.
pub async fn get_active_tasks(db: &DatabaseConnection) -> Result<Vec<admin_task::Model>> {
    AdminTask::find()
        .filter(admin_task::Column::IsActive.eq(true))
        .order_by_asc(admin_task::Column::Title)
        .all(db)
        .await
        .map_err(Into::into)
}

async fn find_instance(
    db: &DatabaseConnection,
    task_id: i32,
    year: i32,
    month: i32,
) -> Result<Option<admin_task_instance::Model>> {
    AdminTaskInstance::find()
        .filter(admin_task_instance::Column::TaskId.eq(task_id))
        .filter(admin_task_instance::Column::Year.eq(year))
        .filter(admin_task_instance::Column::Month.eq(month))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns the task's instance for the period, creating an open one if needed.
#[instrument(skip(db))]
pub async fn ensure_task_instance(
    db: &DatabaseConnection,
    task_id: i32,
    year: i32,
    month: i32,
) -> Result<admin_task_instance::Model> {
    validation::check_month("month", month)?;

    if let Some(instance) = find_instance(db, task_id, year, month).await? {
        return Ok(instance);
    }
    if AdminTask::find_by_id(task_id).one(db).await?.is_none() {
        return Err(Error::not_found("admin task", task_id));
    }

    let instance = admin_task_instance::ActiveModel {
        task_id: Set(task_id),
        year: Set(year),
        month: Set(month),
        status: Set(TaskStatus::Open),
        assigned_user_id: Set(None),
        completed_by_user_id: Set(None),
        completed_at: Set(None),
        ..Default::default()
    };

    match instance.insert(db).await {
        Ok(instance) => {
            debug!(instance_id = instance.id, "Created task instance");
            Ok(instance)
        }
        // Lost a race with another writer; theirs is the instance
        Err(e) if is_unique_violation(&e) => find_instance(db, task_id, year, month)
            .await?
            .ok_or_else(|| Error::not_found("task instance", format!("{task_id}/{year}-{month}"))),
        Err(e) => Err(e.into()),
    }
}

async fn get_instance(db: &DatabaseConnection, instance_id: i32) -> Result<admin_task_instance::Model> {
    AdminTaskInstance::find_by_id(instance_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("task instance", instance_id))
}

/// Assigns an instance to `user_id` and marks it in progress.
pub async fn assign_task_instance(
    db: &DatabaseConnection,
    instance_id: i32,
    user_id: &str,
) -> Result<admin_task_instance::Model> {
    require_user(db, user_id).await?;
    let instance = get_instance(db, instance_id).await?;

    let mut active_model: admin_task_instance::ActiveModel = instance.into();
    active_model.assigned_user_id = Set(Some(user_id.to_string()));
    active_model.status = Set(TaskStatus::InProgress);
    active_model.update(db).await.map_err(Into::into)
}

/// Marks an instance completed by `user_id`.
pub async fn complete_task_instance(
    db: &DatabaseConnection,
    instance_id: i32,
    user_id: &str,
) -> Result<admin_task_instance::Model> {
    require_user(db, user_id).await?;
    let instance = get_instance(db, instance_id).await?;
    if instance.status == TaskStatus::Completed {
        return Err(Error::Conflict {
            message: format!("task instance {instance_id} is already completed"),
        });
    }

    let mut active_model: admin_task_instance::ActiveModel = instance.into();
    active_model.status = Set(TaskStatus::Completed);
    active_model.completed_by_user_id = Set(Some(user_id.to_string()));
    active_model.completed_at = Set(Some(Utc::now()));
    active_model.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_ensure_task_instance_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let task = create_admin_task(&db, "Review uploads", None).await?;

        let first = ensure_task_instance(&db, task.id, 2024, 3).await?;
        let second = ensure_task_instance(&db, task.id, 2024, 3).await?;
        assert_eq!(first.id, second.id);
        assert_eq!(first.status, TaskStatus::Open);

        ensure_task_instance(&db, task.id, 2024, 4).await?;
        assert_eq!(AdminTaskInstance::find().count(&db).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_period_unique_index_enforced() -> Result<()> {
        let db = setup_test_db().await?;
        let task = create_admin_task(&db, "Review uploads", None).await?;
        ensure_task_instance(&db, task.id, 2024, 3).await?;

        let duplicate = admin_task_instance::ActiveModel {
            task_id: Set(task.id),
            year: Set(2024),
            month: Set(3),
            status: Set(TaskStatus::Open),
            assigned_user_id: Set(None),
            completed_by_user_id: Set(None),
            completed_at: Set(None),
            ..Default::default()
        };
        let err = duplicate.insert(&db).await.unwrap_err();
        assert!(is_unique_violation(&err), "unexpected error: {err}");
        Ok(())
    }

    #[tokio::test]
    async fn test_ensure_task_instance_validation() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(matches!(
            ensure_task_instance(&db, 1, 2024, 0).await,
            Err(Error::Validation { .. })
        ));
        assert!(matches!(
            ensure_task_instance(&db, 1, 2024, 5).await,
            Err(Error::NotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_complete_and_user_links_set_null() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "admin").await?;
        let task = create_admin_task(&db, "Reconcile invoices", None).await?;
        let instance = ensure_task_instance(&db, task.id, 2024, 3).await?;

        let assigned = assign_task_instance(&db, instance.id, "admin").await?;
        assert_eq!(assigned.status, TaskStatus::InProgress);
        let done = complete_task_instance(&db, instance.id, "admin").await?;
        assert_eq!(done.status, TaskStatus::Completed);
        assert!(done.completed_at.is_some());
        assert!(matches!(
            complete_task_instance(&db, instance.id, "admin").await,
            Err(Error::Conflict { .. })
        ));

        crate::core::users::delete_user(&db, "admin").await?;
        let after = get_instance(&db, instance.id).await?;
        assert_eq!(after.assigned_user_id, None);
        assert_eq!(after.completed_by_user_id, None);
        assert_eq!(after.status, TaskStatus::Completed);
        Ok(())
    }

    #[tokio::test]
    async fn test_task_delete_cascades_instances() -> Result<()> {
        let db = setup_test_db().await?;
        let task = create_admin_task(&db, "Review uploads", None).await?;
        ensure_task_instance(&db, task.id, 2024, 3).await?;

        AdminTask::delete_by_id(task.id).exec(&db).await?;
        assert_eq!(AdminTaskInstance::find().count(&db).await?, 0);
        assert!(get_active_tasks(&db).await?.is_empty());
        Ok(())
    }
}
