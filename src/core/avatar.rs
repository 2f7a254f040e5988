//! User avatars. A user may keep several; at most one is the default.

use crate::{
    core::{users::require_user, validation},
    entities::{UserAvatar, user_avatar},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*, sea_query::Expr};

/// Adds an avatar. The user's first avatar becomes the default.
pub async fn add_avatar(
    db: &DatabaseConnection,
    user_id: &str,
    image_url: &str,
    is_uploaded: bool,
) -> Result<user_avatar::Model> {
    validation::check_not_blank("image_url", image_url)?;
    require_user(db, user_id).await?;

    let has_default = UserAvatar::find()
        .filter(user_avatar::Column::UserId.eq(user_id))
        .filter(user_avatar::Column::IsDefault.eq(true))
        .one(db)
        .await?
        .is_some();

    let avatar = user_avatar::ActiveModel {
        user_id: Set(user_id.to_string()),
        image_url: Set(image_url.to_string()),
        is_default: Set(!has_default),
        is_uploaded: Set(is_uploaded),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    avatar.insert(db).await.map_err(Into::into)
}

/// Avatars of `user_id`, oldest first.
pub async fn get_avatars_for_user(db: &DatabaseConnection, user_id: &str) -> Result<Vec<user_avatar::Model>> {
    UserAvatar::find()
        .filter(user_avatar::Column::UserId.eq(user_id))
        .order_by_asc(user_avatar::Column::CreatedAt)
        .order_by_asc(user_avatar::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Makes `avatar_id` the user's only default avatar.
pub async fn set_default_avatar(
    db: &DatabaseConnection,
    user_id: &str,
    avatar_id: i32,
) -> Result<user_avatar::Model> {
    let txn = db.begin().await?;

    let avatar = UserAvatar::find_by_id(avatar_id)
        .one(&txn)
        .await?
        .filter(|avatar| avatar.user_id == user_id)
        .ok_or_else(|| Error::not_found("avatar", avatar_id))?;

    UserAvatar::update_many()
        .col_expr(user_avatar::Column::IsDefault, Expr::value(false))
        .filter(user_avatar::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;

    let mut active_model: user_avatar::ActiveModel = avatar.into();
    active_model.is_default = Set(true);
    let avatar = active_model.update(&txn).await?;

    txn.commit().await?;
    Ok(avatar)
}
