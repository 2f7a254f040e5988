//! Users - Minimal identity-store operations.
//!
//! Real accounts come from the identity provider; these functions exist so the
//! fishing log has rows to hang its foreign keys on.

use crate::{
    entities::{User, user},
    errors::{Error, Result, is_foreign_key_violation, is_unique_violation},
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};

/// Registers a user known to the identity provider.
pub async fn create_user(
    db: &DatabaseConnection,
    id: &str,
    email: &str,
    display_name: &str,
) -> Result<user::Model> {
    crate::core::validation::check_not_blank("id", id)?;
    crate::core::validation::check_not_blank("email", email)?;

    let user = user::ActiveModel {
        id: Set(id.to_string()),
        email: Set(email.trim().to_lowercase()),
        display_name: Set(display_name.trim().to_string()),
        created_at: Set(Utc::now()),
    };

    user.insert(db).await.map_err(|e| {
        if is_unique_violation(&e) {
            Error::Conflict {
                message: format!("user {id} or email {email} already exists"),
            }
        } else {
            e.into()
        }
    })
}

/// Retrieves a user by id.
pub async fn get_user_by_id<C>(db: &C, user_id: &str) -> Result<Option<user::Model>>
where
    C: ConnectionTrait,
{
    User::find_by_id(user_id.to_string())
        .one(db)
        .await
        .map_err(Into::into)
}

/// Fails with [`Error::NotFound`] unless the user exists.
pub async fn require_user<C>(db: &C, user_id: &str) -> Result<user::Model>
where
    C: ConnectionTrait,
{
    get_user_by_id(db, user_id)
        .await?
        .ok_or_else(|| Error::not_found("user", user_id))
}

/// Deletes a user and, through cascades, their profile, avatars, sessions,
/// albums, buddies, usage rows and status messages.
///
/// Invoices are kept for accounting, so a user with any invoice cannot be
/// deleted and the call fails with [`Error::ReferencedRow`].
pub async fn delete_user(db: &DatabaseConnection, user_id: &str) -> Result<()> {
    match User::delete_by_id(user_id.to_string()).exec(db).await {
        Ok(result) if result.rows_affected == 0 => Err(Error::not_found("user", user_id)),
        Ok(_) => Ok(()),
        Err(e) if is_foreign_key_violation(&e) => Err(Error::ReferencedRow {
            entity: "user",
            id: user_id.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_and_get_user() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_user(&db, "u-1", "Angler@Example.com ", " Sam ").await?;
        assert_eq!(user.email, "angler@example.com");
        assert_eq!(user.display_name, "Sam");

        assert_eq!(get_user_by_id(&db, "u-1").await?.unwrap(), user);
        assert!(get_user_by_id(&db, "u-2").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_user_is_conflict() -> Result<()> {
        let db = setup_test_db().await?;
        create_user(&db, "u-1", "a@example.com", "A").await?;

        let result = create_user(&db, "u-1", "b@example.com", "B").await;
        assert!(matches!(result, Err(Error::Conflict { .. })));

        let result = create_user(&db, "u-2", "a@example.com", "B").await;
        assert!(matches!(result, Err(Error::Conflict { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_user() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "u-1").await?;

        delete_user(&db, "u-1").await?;
        assert!(get_user_by_id(&db, "u-1").await?.is_none());
        assert!(matches!(
            delete_user(&db, "u-1").await,
            Err(Error::NotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_user_with_invoice_is_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "u-1").await?;
        let invoice = crate::core::billing::create_invoice(&db, "u-1", "INV-1", 10.0).await?;

        let result = delete_user(&db, "u-1").await;
        assert!(matches!(
            result,
            Err(Error::ReferencedRow { entity: "user", .. })
        ));

        // Neither row was touched
        assert!(get_user_by_id(&db, "u-1").await?.is_some());
        assert!(
            crate::entities::Invoice::find_by_id(invoice.id)
                .one(&db)
                .await?
                .is_some()
        );
        Ok(())
    }
}
