//! Fishing buddies - directed friendship edges between two users.

use crate::{
    core::users::require_user,
    entities::{BuddyStatus, FishingBuddy, fishing_buddy},
    errors::{Error, Result, is_unique_violation},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a pending buddy request from `owner_user_id` to `buddy_user_id`.
///
/// # Errors
/// * [`Error::Validation`] - a user cannot befriend themselves
/// * [`Error::Conflict`] - the pair already exists
pub async fn send_buddy_request(
    db: &DatabaseConnection,
    owner_user_id: &str,
    buddy_user_id: &str,
) -> Result<fishing_buddy::Model> {
    if owner_user_id == buddy_user_id {
        return Err(Error::validation("buddy_user_id", "cannot add yourself as a buddy"));
    }
    require_user(db, owner_user_id).await?;
    require_user(db, buddy_user_id).await?;

    let request = fishing_buddy::ActiveModel {
        owner_user_id: Set(owner_user_id.to_string()),
        buddy_user_id: Set(buddy_user_id.to_string()),
        status: Set(BuddyStatus::Pending),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    request.insert(db).await.map_err(|e| {
        if is_unique_violation(&e) {
            Error::Conflict {
                message: format!("{owner_user_id} already has {buddy_user_id} as a buddy"),
            }
        } else {
            e.into()
        }
    })
}

/// Changes the status of an existing buddy pair.
pub async fn set_buddy_status(
    db: &DatabaseConnection,
    owner_user_id: &str,
    buddy_user_id: &str,
    status: BuddyStatus,
) -> Result<fishing_buddy::Model> {
    let buddy = FishingBuddy::find()
        .filter(fishing_buddy::Column::OwnerUserId.eq(owner_user_id))
        .filter(fishing_buddy::Column::BuddyUserId.eq(buddy_user_id))
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("buddy", format!("{owner_user_id}->{buddy_user_id}")))?;

    let mut active_model: fishing_buddy::ActiveModel = buddy.into();
    active_model.status = Set(status);
    active_model.update(db).await.map_err(Into::into)
}

/// Buddies of `owner_user_id`, optionally limited to one status.
pub async fn get_buddies(
    db: &DatabaseConnection,
    owner_user_id: &str,
    status: Option<BuddyStatus>,
) -> Result<Vec<fishing_buddy::Model>> {
    let mut query = FishingBuddy::find().filter(fishing_buddy::Column::OwnerUserId.eq(owner_user_id));
    if let Some(status) = status {
        query = query.filter(fishing_buddy::Column::Status.eq(status));
    }
    query
        .order_by_asc(fishing_buddy::Column::CreatedAt)
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

    async fn two_users() -> Result<DatabaseConnection> {
        let db = setup_test_db().await?;
        create_test_user(&db, "alice").await?;
        create_test_user(&db, "bob").await?;
        Ok(db)
    }

    #[tokio::test]
    async fn test_send_and_accept_request() -> Result<()> {
        let db = two_users().await?;

        let request = send_buddy_request(&db, "alice", "bob").await?;
        assert_eq!(request.status, BuddyStatus::Pending);

        set_buddy_status(&db, "alice", "bob", BuddyStatus::Accepted).await?;
        let accepted = get_buddies(&db, "alice", Some(BuddyStatus::Accepted)).await?;
        assert_eq!(accepted.len(), 1);
        assert!(get_buddies(&db, "alice", Some(BuddyStatus::Pending)).await?.is_empty());
        assert_eq!(get_buddies(&db, "alice", None).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_pair_is_unique_but_direction_matters() -> Result<()> {
        let db = two_users().await?;
        send_buddy_request(&db, "alice", "bob").await?;

        assert!(matches!(
            send_buddy_request(&db, "alice", "bob").await,
            Err(Error::Conflict { .. })
        ));
        send_buddy_request(&db, "bob", "alice").await?;
        assert_eq!(FishingBuddy::find().count(&db).await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_self_buddy_rejected() -> Result<()> {
        let db = two_users().await?;
        assert!(matches!(
            send_buddy_request(&db, "alice", "alice").await,
            Err(Error::Validation { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_pair_status_change() -> Result<()> {
        let db = two_users().await?;
        assert!(matches!(
            set_buddy_status(&db, "alice", "bob", BuddyStatus::Blocked).await,
            Err(Error::NotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_buddy_rows_removed_with_either_user() -> Result<()> {
        let db = two_users().await?;
        create_test_user(&db, "carol").await?;
        send_buddy_request(&db, "alice", "bob").await?;
        send_buddy_request(&db, "carol", "alice").await?;
        send_buddy_request(&db, "bob", "carol").await?;

        delete_user(&db, "alice").await?;
        let remaining = FishingBuddy::find().all(&db).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].owner_user_id, "bob");
        Ok(())
    }
}
