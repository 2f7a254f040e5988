//! Invoicing, metered background-removal usage, billable plots and status
//! messages. Small tables, kept together.

use crate::{
    core::{users::require_user, validation},
    entities::{
        BackgroundRemovalUsage, BillableAsset, Invoice, TaskStatusMessage, background_removal_usage,
        billable_asset, invoice, task_status_message,
    },
    errors::{Error, Result, is_unique_violation},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Issues an unpaid invoice.
///
/// # Errors
/// * [`Error::Validation`] - negative amount or more than two decimals
/// * [`Error::Conflict`] - `invoice_number` is already used
pub async fn create_invoice(
    db: &DatabaseConnection,
    user_id: &str,
    invoice_number: &str,
    amount: f64,
) -> Result<invoice::Model> {
    validation::check_not_blank("invoice_number", invoice_number)?;
    validation::check_decimal("amount", amount, validation::AMOUNT)?;
    if amount < 0.0 {
        return Err(Error::validation("amount", "must not be negative"));
    }
    require_user(db, user_id).await?;

    let invoice = invoice::ActiveModel {
        user_id: Set(user_id.to_string()),
        invoice_number: Set(invoice_number.to_string()),
        amount: Set(amount),
        issued_at: Set(Utc::now()),
        is_paid: Set(false),
        ..Default::default()
    };
    let invoice = invoice.insert(db).await.map_err(|e| {
        if is_unique_violation(&e) {
            Error::Conflict {
                message: format!("invoice number {invoice_number} already exists"),
            }
        } else {
            e.into()
        }
    })?;

    info!(invoice_number, amount, "Issued invoice");
    Ok(invoice)
}

/// Flags an invoice as paid.
pub async fn mark_invoice_paid(db: &DatabaseConnection, invoice_id: i32) -> Result<invoice::Model> {
    let invoice = Invoice::find_by_id(invoice_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("invoice", invoice_id))?;
    let mut active_model: invoice::ActiveModel = invoice.into();
    active_model.is_paid = Set(true);
    active_model.update(db).await.map_err(Into::into)
}

/// Records `image_count` background removals, optionally already invoiced.
pub async fn record_background_removal_usage(
    db: &DatabaseConnection,
    user_id: &str,
    image_count: i32,
    invoice_id: Option<i32>,
) -> Result<background_removal_usage::Model> {
    if image_count <= 0 {
        return Err(Error::validation("image_count", "must be positive"));
    }
    require_user(db, user_id).await?;
    if let Some(invoice_id) = invoice_id {
        if Invoice::find_by_id(invoice_id).one(db).await?.is_none() {
            return Err(Error::not_found("invoice", invoice_id));
        }
    }

    let usage = background_removal_usage::ActiveModel {
        user_id: Set(user_id.to_string()),
        invoice_id: Set(invoice_id),
        image_count: Set(image_count),
        used_at: Set(Utc::now()),
        ..Default::default()
    };
    usage.insert(db).await.map_err(Into::into)
}

/// Usage rows not yet attached to an invoice.
pub async fn get_uninvoiced_usage(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<background_removal_usage::Model>> {
    BackgroundRemovalUsage::find()
        .filter(background_removal_usage::Column::UserId.eq(user_id))
        .filter(background_removal_usage::Column::InvoiceId.is_null())
        .order_by_asc(background_removal_usage::Column::UsedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Registers a plot. Plot ids are unique.
pub async fn register_billable_asset(
    db: &DatabaseConnection,
    plot_id: &str,
    description: Option<String>,
    owner_user_id: Option<String>,
) -> Result<billable_asset::Model> {
    validation::check_not_blank("plot_id", plot_id)?;
    if let Some(owner) = owner_user_id.as_deref() {
        require_user(db, owner).await?;
    }

    let asset = billable_asset::ActiveModel {
        plot_id: Set(plot_id.trim().to_string()),
        description: Set(description),
        owner_user_id: Set(owner_user_id),
        ..Default::default()
    };
    asset.insert(db).await.map_err(|e| {
        if is_unique_violation(&e) {
            Error::Conflict {
                message: format!("plot {plot_id} is already registered"),
            }
        } else {
            e.into()
        }
    })
}

/// Looks up a billable asset by plot id.
pub async fn get_billable_asset(db: &DatabaseConnection, plot_id: &str) -> Result<Option<billable_asset::Model>> {
    BillableAsset::find()
        .filter(billable_asset::Column::PlotId.eq(plot_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Stores a status message for `user_id`.
pub async fn post_task_status_message(
    db: &DatabaseConnection,
    user_id: &str,
    message: &str,
) -> Result<task_status_message::Model> {
    validation::check_not_blank("message", message)?;
    require_user(db, user_id).await?;

    let status = task_status_message::ActiveModel {
        user_id: Set(user_id.to_string()),
        message: Set(message.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    status.insert(db).await.map_err(Into::into)
}

/// Status messages for a user, newest first.
pub async fn get_task_status_messages(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<task_status_message::Model>> {
    TaskStatusMessage::find()
        .filter(task_status_message::Column::UserId.eq(user_id))
        .order_by_desc(task_status_message::Column::CreatedAt)
        .order_by_desc(task_status_message::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::users::delete_user;
    use crate::test_utils::*;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_invoice_number_unique_and_amount_checked() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "u-1").await?;

        let invoice = create_invoice(&db, "u-1", "INV-0001", 1234.56).await?;
        assert_eq!(invoice.amount, 1234.56);
        assert!(!invoice.is_paid);

        assert!(matches!(
            create_invoice(&db, "u-1", "INV-0001", 1.0).await,
            Err(Error::Conflict { .. })
        ));
        assert!(matches!(
            create_invoice(&db, "u-1", "INV-0002", 1.005).await,
            Err(Error::Validation { .. })
        ));
        assert!(matches!(
            create_invoice(&db, "u-1", "INV-0003", -5.0).await,
            Err(Error::Validation { .. })
        ));

        assert!(mark_invoice_paid(&db, invoice.id).await?.is_paid);
        Ok(())
    }

    #[tokio::test]
    async fn test_invoice_delete_sets_usage_link_null() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "u-1").await?;
        let invoice = create_invoice(&db, "u-1", "INV-0001", 10.0).await?;

        let usage = record_background_removal_usage(&db, "u-1", 3, Some(invoice.id)).await?;
        assert!(get_uninvoiced_usage(&db, "u-1").await?.is_empty());

        Invoice::delete_by_id(invoice.id).exec(&db).await?;

        let orphaned = get_uninvoiced_usage(&db, "u-1").await?;
        assert_eq!(orphaned.len(), 1);
        assert_eq!(orphaned[0].id, usage.id);
        assert_eq!(orphaned[0].invoice_id, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_usage_and_messages_removed_with_user() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "u-1").await?;
        record_background_removal_usage(&db, "u-1", 2, None).await?;
        post_task_status_message(&db, "u-1", "Background removal finished").await?;
        assert_eq!(get_task_status_messages(&db, "u-1").await?.len(), 1);

        delete_user(&db, "u-1").await?;
        assert_eq!(BackgroundRemovalUsage::find().count(&db).await?, 0);
        assert_eq!(TaskStatusMessage::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_billable_asset_plot_unique_and_owner_set_null() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "u-1").await?;

        register_billable_asset(&db, "PLOT-7", None, Some("u-1".to_string())).await?;
        assert!(matches!(
            register_billable_asset(&db, "PLOT-7", None, None).await,
            Err(Error::Conflict { .. })
        ));

        delete_user(&db, "u-1").await?;
        let asset = get_billable_asset(&db, "PLOT-7").await?.unwrap();
        assert_eq!(asset.owner_user_id, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_usage_requires_positive_count() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "u-1").await?;
        assert!(matches!(
            record_background_removal_usage(&db, "u-1", 0, None).await,
            Err(Error::Validation { .. })
        ));
        assert!(matches!(
            record_background_removal_usage(&db, "u-1", 1, Some(99)).await,
            Err(Error::NotFound { .. })
        ));
        Ok(())
    }
}
