//! Smart Catch profile logic - exactly one profile per user.

use crate::{
    core::users::require_user,
    entities::{SmartCatchProfile, SubscriptionTier, smart_catch_profile},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};

/// Retrieves the profile of `user_id`, if one was created.
pub async fn get_profile_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Option<smart_catch_profile::Model>> {
    SmartCatchProfile::find()
        .filter(smart_catch_profile::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns the user's profile, creating a free-tier one on first use.
pub async fn get_or_create_profile(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<smart_catch_profile::Model> {
    if let Some(profile) = get_profile_for_user(db, user_id).await? {
        return Ok(profile);
    }
    require_user(db, user_id).await?;

    let profile = smart_catch_profile::ActiveModel {
        user_id: Set(user_id.to_string()),
        subscription_tier: Set(SubscriptionTier::Free),
        preferred_units: Set("imperial".to_string()),
        share_catches_publicly: Set(false),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    profile.insert(db).await.map_err(Into::into)
}

/// Moves the user to another subscription tier.
pub async fn update_subscription_tier(
    db: &DatabaseConnection,
    user_id: &str,
    tier: SubscriptionTier,
) -> Result<smart_catch_profile::Model> {
    let profile = get_profile_for_user(db, user_id)
        .await?
        .ok_or_else(|| Error::not_found("profile", user_id))?;

    let mut active_model: smart_catch_profile::ActiveModel = profile.into();
    active_model.subscription_tier = Set(tier);
    active_model.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::is_unique_violation;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_get_or_create_profile_is_stable() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "u-1").await?;

        let first = get_or_create_profile(&db, "u-1").await?;
        let second = get_or_create_profile(&db, "u-1").await?;
        assert_eq!(first.id, second.id);
        assert_eq!(first.subscription_tier, SubscriptionTier::Free);
        assert_eq!(SmartCatchProfile::find().all(&db).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_profile_for_unknown_user() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(matches!(
            get_or_create_profile(&db, "ghost").await,
            Err(Error::NotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_second_profile_for_user_violates_unique_key() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "u-1").await?;
        get_or_create_profile(&db, "u-1").await?;

        let duplicate = smart_catch_profile::ActiveModel {
            user_id: Set("u-1".to_string()),
            subscription_tier: Set(SubscriptionTier::Pro),
            preferred_units: Set("metric".to_string()),
            share_catches_publicly: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let err = duplicate.insert(&db).await.unwrap_err();
        assert!(is_unique_violation(&err), "unexpected error: {err}");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_subscription_tier() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "u-1").await?;
        get_or_create_profile(&db, "u-1").await?;

        let updated = update_subscription_tier(&db, "u-1", SubscriptionTier::Premium).await?;
        assert_eq!(updated.subscription_tier, SubscriptionTier::Premium);
        Ok(())
    }

    #[tokio::test]
    async fn test_profile_removed_with_user() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "u-1").await?;
        get_or_create_profile(&db, "u-1").await?;

        crate::core::users::delete_user(&db, "u-1").await?;
        assert!(get_profile_for_user(&db, "u-1").await?.is_none());
        Ok(())
    }
}
