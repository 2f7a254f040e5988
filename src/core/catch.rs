//! Catch logic - Recording, listing and deleting catches.
//!
//! A catch always belongs to a session; its owner is the session's user.
//! Species and avatar-composition links use no-action deletes, so a
//! referenced species or avatar cannot be removed from under a catch.

use crate::{
    core::{session::get_session_by_id, validation},
    entities::{
        AlbumCatch, Catch, FishSpecies, FishingSession, UserAvatar, album_catch, catch,
        fishing_session,
    },
    errors::{Error, Result, is_foreign_key_violation},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};
use tracing::{debug, instrument};

/// Input for [`record_catch`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewCatch {
    /// Session the catch belongs to
    pub session_id: i32,
    /// Species caught
    pub species_id: i32,
    /// Length, decimal(5,2)
    pub length: Option<f64>,
    /// Weight, decimal(5,2)
    pub weight: Option<f64>,
    /// Original photo
    pub photo_url: Option<String>,
    /// Photo composed with avatar and background
    pub composed_photo_url: Option<String>,
    /// Defaults to now
    pub caught_at: Option<DateTime<Utc>>,
    /// Air temperature at the time of the catch
    pub temperature: Option<f64>,
    /// Pressure at the time of the catch, decimal(7,2)
    pub barometric_pressure: Option<f64>,
    /// Free-form weather description
    pub weather_conditions: Option<String>,
    /// Avatar of the session owner used in the composed photo
    pub avatar_id: Option<i32>,
    /// Catalog pose
    pub pose_id: Option<i32>,
    /// Catalog background
    pub background_id: Option<i32>,
    /// Catalog outfit
    pub outfit_id: Option<i32>,
    /// Catch and release
    pub is_released: bool,
    /// Free-form notes
    pub notes: Option<String>,
}

impl NewCatch {
    /// Catch with only its session and species set.
    #[must_use]
    pub const fn new(session_id: i32, species_id: i32) -> Self {
        Self {
            session_id,
            species_id,
            length: None,
            weight: None,
            photo_url: None,
            composed_photo_url: None,
            caught_at: None,
            temperature: None,
            barometric_pressure: None,
            weather_conditions: None,
            avatar_id: None,
            pose_id: None,
            background_id: None,
            outfit_id: None,
            is_released: false,
            notes: None,
        }
    }
}

/// Records a catch in an existing session.
///
/// # Errors
/// * [`Error::Validation`] - a measurement is out of range, or a catalog item
///   does not exist
/// * [`Error::NotFound`] - the session, species or avatar does not exist
/// * [`Error::Conflict`] - the avatar belongs to another user
#[instrument(skip(db, new), fields(session_id = new.session_id, species_id = new.species_id))]
pub async fn record_catch(db: &DatabaseConnection, new: NewCatch) -> Result<catch::Model> {
    validation::check_measurement("length", new.length, validation::SIZE)?;
    validation::check_measurement("weight", new.weight, validation::SIZE)?;
    if let Some(pressure) = new.barometric_pressure {
        validation::check_decimal("barometric_pressure", pressure, validation::CATCH_PRESSURE)?;
    }

    let session = get_session_by_id(db, new.session_id)
        .await?
        .ok_or_else(|| Error::not_found("session", new.session_id))?;
    if FishSpecies::find_by_id(new.species_id).one(db).await?.is_none() {
        return Err(Error::not_found("species", new.species_id));
    }
    if let Some(avatar_id) = new.avatar_id {
        let avatar = UserAvatar::find_by_id(avatar_id)
            .one(db)
            .await?
            .ok_or_else(|| Error::not_found("avatar", avatar_id))?;
        if avatar.user_id != session.user_id {
            return Err(Error::Conflict {
                message: format!("avatar {avatar_id} belongs to another user"),
            });
        }
    }

    let model = catch::ActiveModel {
        session_id: Set(new.session_id),
        species_id: Set(new.species_id),
        length: Set(new.length),
        weight: Set(new.weight),
        photo_url: Set(new.photo_url),
        composed_photo_url: Set(new.composed_photo_url),
        caught_at: Set(new.caught_at.unwrap_or_else(Utc::now)),
        temperature: Set(new.temperature),
        barometric_pressure: Set(new.barometric_pressure),
        weather_conditions: Set(new.weather_conditions),
        avatar_id: Set(new.avatar_id),
        pose_id: Set(new.pose_id),
        background_id: Set(new.background_id),
        outfit_id: Set(new.outfit_id),
        is_released: Set(new.is_released),
        notes: Set(new.notes),
        ..Default::default()
    };

    let catch = model.insert(db).await.map_err(|e| {
        if is_foreign_key_violation(&e) {
            Error::validation("catalog", "pose, background or outfit does not exist")
        } else {
            e.into()
        }
    })?;
    debug!(catch_id = catch.id, "Recorded catch");
    Ok(catch)
}

/// Retrieves a catch by id.
pub async fn get_catch_by_id<C>(db: &C, catch_id: i32) -> Result<Option<catch::Model>>
where
    C: ConnectionTrait,
{
    Catch::find_by_id(catch_id).one(db).await.map_err(Into::into)
}

/// Catches of one session in the order they were caught.
pub async fn get_catches_for_session(
    db: &DatabaseConnection,
    session_id: i32,
) -> Result<Vec<catch::Model>> {
    Catch::find()
        .filter(catch::Column::SessionId.eq(session_id))
        .order_by_asc(catch::Column::CaughtAt)
        .order_by_asc(catch::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// All catches across the user's sessions, newest first.
pub async fn get_catches_for_user(db: &DatabaseConnection, user_id: &str) -> Result<Vec<catch::Model>> {
    Catch::find()
        .inner_join(FishingSession)
        .filter(fishing_session::Column::UserId.eq(user_id))
        .order_by_desc(catch::Column::CaughtAt)
        .order_by_desc(catch::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a catch and its album memberships in one transaction.
pub async fn delete_catch(db: &DatabaseConnection, catch_id: i32) -> Result<()> {
    let txn = db.begin().await?;

    AlbumCatch::delete_many()
        .filter(album_catch::Column::CatchId.eq(catch_id))
        .exec(&txn)
        .await?;
    let result = Catch::delete_by_id(catch_id).exec(&txn).await?;
    if result.rows_affected == 0 {
        txn.rollback().await?;
        return Err(Error::not_found("catch", catch_id));
    }

    txn.commit().await?;
    Ok(())
}
