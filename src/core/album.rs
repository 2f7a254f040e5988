//! Catch albums - user-curated collections of catches.
//!
//! Membership lives in `album_catches`, keyed by (`album_id`, `catch_id`).
//! Deleting an album removes its memberships; deleting a catch goes through
//! [`crate::core::catch::delete_catch`].

use crate::{
    core::{catch::get_catch_by_id, session::get_session_by_id, users::require_user, validation},
    entities::{AlbumCatch, Catch, CatchAlbum, album_catch, catch, catch_album},
    errors::{Error, Result, is_unique_violation},
};
use chrono::Utc;
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use tracing::debug;

/// Creates an album. When `session_id` is given the album is tied to that
/// session and is deleted with it.
pub async fn create_album(
    db: &DatabaseConnection,
    user_id: &str,
    name: &str,
    session_id: Option<i32>,
) -> Result<catch_album::Model> {
    validation::check_not_blank("name", name)?;
    require_user(db, user_id).await?;

    if let Some(session_id) = session_id {
        let session = get_session_by_id(db, session_id)
            .await?
            .ok_or_else(|| Error::not_found("session", session_id))?;
        if session.user_id != user_id {
            return Err(Error::Conflict {
                message: format!("session {session_id} belongs to another user"),
            });
        }
    }

    let album = catch_album::ActiveModel {
        user_id: Set(user_id.to_string()),
        name: Set(name.trim().to_string()),
        description: Set(None),
        is_public: Set(false),
        session_id: Set(session_id),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    album.insert(db).await.map_err(Into::into)
}

/// Retrieves an album by id.
pub async fn get_album_by_id(db: &DatabaseConnection, album_id: i32) -> Result<Option<catch_album::Model>> {
    CatchAlbum::find_by_id(album_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Albums owned by `user_id`, ordered by name.
pub async fn get_albums_for_user(db: &DatabaseConnection, user_id: &str) -> Result<Vec<catch_album::Model>> {
    CatchAlbum::find()
        .filter(catch_album::Column::UserId.eq(user_id))
        .order_by_asc(catch_album::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Adds a catch to an album owned by the same user.
///
/// # Errors
/// * [`Error::NotFound`] - album or catch missing
/// * [`Error::Conflict`] - the catch is already in the album, or belongs to
///   someone else
pub async fn add_catch_to_album(
    db: &DatabaseConnection,
    album_id: i32,
    catch_id: i32,
) -> Result<album_catch::Model> {
    let album = get_album_by_id(db, album_id)
        .await?
        .ok_or_else(|| Error::not_found("album", album_id))?;
    let catch = get_catch_by_id(db, catch_id)
        .await?
        .ok_or_else(|| Error::not_found("catch", catch_id))?;
    let session = get_session_by_id(db, catch.session_id)
        .await?
        .ok_or_else(|| Error::not_found("session", catch.session_id))?;

    if session.user_id != album.user_id {
        return Err(Error::Conflict {
            message: format!("catch {catch_id} does not belong to the owner of album {album_id}"),
        });
    }

    let membership = album_catch::ActiveModel {
        album_id: Set(album_id),
        catch_id: Set(catch_id),
        added_at: Set(Utc::now()),
    };
    let membership = membership.insert(db).await.map_err(|e| {
        if is_unique_violation(&e) {
            Error::Conflict {
                message: format!("catch {catch_id} is already in album {album_id}"),
            }
        } else {
            e.into()
        }
    })?;
    debug!(album_id, catch_id, "Added catch to album");
    Ok(membership)
}

/// Removes one membership. The catch itself is kept.
pub async fn remove_catch_from_album(db: &DatabaseConnection, album_id: i32, catch_id: i32) -> Result<()> {
    let result = AlbumCatch::delete_by_id((album_id, catch_id)).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("album membership", format!("{album_id}/{catch_id}")));
    }
    Ok(())
}

/// Catches in an album, most recently added first.
pub async fn get_catches_for_album(db: &DatabaseConnection, album_id: i32) -> Result<Vec<catch::Model>> {
    Catch::find()
        .inner_join(AlbumCatch)
        .filter(album_catch::Column::AlbumId.eq(album_id))
        .order_by_desc(album_catch::Column::AddedAt)
        .order_by_asc(catch::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes an album. Its catches are untouched.
pub async fn delete_album(db: &DatabaseConnection, album_id: i32) -> Result<()> {
    let result = CatchAlbum::delete_by_id(album_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("album", album_id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::session::delete_session;
    use crate::test_utils::*;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_add_and_list_album_catches() -> Result<()> {
        let (db, user, species, session) = setup_with_session().await?;
        let first = create_test_catch(&db, session.id, species.id).await?;
        let second = create_test_catch(&db, session.id, species.id).await?;
        let album = create_album(&db, &user.id, "Summer", None).await?;

        add_catch_to_album(&db, album.id, first.id).await?;
        add_catch_to_album(&db, album.id, second.id).await?;

        let catches = get_catches_for_album(&db, album.id).await?;
        assert_eq!(catches.len(), 2);
        assert_eq!(get_albums_for_user(&db, &user.id).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_membership_is_conflict() -> Result<()> {
        let (db, user, species, session) = setup_with_session().await?;
        let catch = create_test_catch(&db, session.id, species.id).await?;
        let album = create_album(&db, &user.id, "Summer", None).await?;

        add_catch_to_album(&db, album.id, catch.id).await?;
        assert!(matches!(
            add_catch_to_album(&db, album.id, catch.id).await,
            Err(Error::Conflict { .. })
        ));
        assert_eq!(AlbumCatch::find().count(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_cross_user_catch_is_rejected() -> Result<()> {
        let (db, _user, species, session) = setup_with_session().await?;
        let catch = create_test_catch(&db, session.id, species.id).await?;
        create_test_user(&db, "u-other").await?;
        let theirs = create_album(&db, "u-other", "Not yours", None).await?;

        assert!(matches!(
            add_catch_to_album(&db, theirs.id, catch.id).await,
            Err(Error::Conflict { .. })
        ));
        assert!(matches!(
            create_album(&db, "u-other", "Stolen session", Some(session.id)).await,
            Err(Error::Conflict { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_catch_from_album() -> Result<()> {
        let (db, user, species, session) = setup_with_session().await?;
        let catch = create_test_catch(&db, session.id, species.id).await?;
        let album = create_album(&db, &user.id, "Summer", None).await?;
        add_catch_to_album(&db, album.id, catch.id).await?;

        remove_catch_from_album(&db, album.id, catch.id).await?;
        assert!(get_catches_for_album(&db, album.id).await?.is_empty());
        assert!(get_catch_by_id(&db, catch.id).await?.is_some());
        assert!(matches!(
            remove_catch_from_album(&db, album.id, catch.id).await,
            Err(Error::NotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_album_cascades_memberships_only() -> Result<()> {
        let (db, user, species, session) = setup_with_session().await?;
        let catch = create_test_catch(&db, session.id, species.id).await?;
        let album = create_album(&db, &user.id, "Summer", None).await?;
        add_catch_to_album(&db, album.id, catch.id).await?;

        delete_album(&db, album.id).await?;
        assert_eq!(AlbumCatch::find().count(&db).await?, 0);
        assert!(get_catch_by_id(&db, catch.id).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_session_album_deleted_with_session() -> Result<()> {
        let (db, user, species, session) = setup_with_session().await?;
        let catch = create_test_catch(&db, session.id, species.id).await?;
        let album = create_album(&db, &user.id, "Trip", Some(session.id)).await?;
        add_catch_to_album(&db, album.id, catch.id).await?;

        delete_session(&db, session.id).await?;
        assert!(get_album_by_id(&db, album.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_blank_album_name_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "u-1").await?;
        assert!(matches!(
            create_album(&db, "u-1", "  ", None).await,
            Err(Error::Validation { .. })
        ));
        Ok(())
    }
}
