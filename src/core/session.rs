//! Fishing session logic - create, list and delete a user's outings.

use crate::{
    core::{users::require_user, validation},
    entities::{AlbumCatch, Catch, FishingSession, WaterType, album_catch, catch, fishing_session},
    errors::{Error, Result, is_foreign_key_violation},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{QueryOrder, QuerySelect, QueryTrait, Set, TransactionTrait, prelude::*};
use tracing::{debug, instrument};

/// Input for [`create_session`]. Optional fields default to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    /// Owner of the session
    pub user_id: String,
    /// Day of the outing
    pub session_date: NaiveDate,
    /// Fresh or salt water
    pub water_type: WaterType,
    /// Human readable spot name
    pub location_name: Option<String>,
    /// Latitude, decimal(10,8); set together with `longitude`
    pub latitude: Option<f64>,
    /// Longitude, decimal(11,8); set together with `latitude`
    pub longitude: Option<f64>,
    /// Air temperature
    pub temperature: Option<f64>,
    /// Pressure, decimal(6,2)
    pub barometric_pressure: Option<f64>,
    /// Non-negative wind speed
    pub wind_speed: Option<f64>,
    /// Free-form weather description
    pub weather_conditions: Option<String>,
    /// Catalog equipment used
    pub equipment_id: Option<i32>,
    /// Catalog bait or lure used
    pub bait_lure_id: Option<i32>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl NewSession {
    /// Session with only the required fields set.
    #[must_use]
    pub fn new(user_id: impl Into<String>, session_date: NaiveDate, water_type: WaterType) -> Self {
        Self {
            user_id: user_id.into(),
            session_date,
            water_type,
            location_name: None,
            latitude: None,
            longitude: None,
            temperature: None,
            barometric_pressure: None,
            wind_speed: None,
            weather_conditions: None,
            equipment_id: None,
            bait_lure_id: None,
            notes: None,
        }
    }

    fn validate(&self) -> Result<()> {
        validation::check_coordinates(self.latitude, self.longitude)?;
        if let Some(pressure) = self.barometric_pressure {
            validation::check_decimal("barometric_pressure", pressure, validation::SESSION_PRESSURE)?;
        }
        if self.wind_speed.is_some_and(|wind| !wind.is_finite() || wind < 0.0) {
            return Err(Error::validation("wind_speed", "must be a non-negative number"));
        }
        Ok(())
    }
}

/// Creates a new fishing session for an existing user.
#[instrument(skip(db, new), fields(user_id = %new.user_id))]
pub async fn create_session(db: &DatabaseConnection, new: NewSession) -> Result<fishing_session::Model> {
    new.validate()?;
    require_user(db, &new.user_id).await?;

    let session = fishing_session::ActiveModel {
        user_id: Set(new.user_id),
        session_date: Set(new.session_date),
        water_type: Set(new.water_type),
        location_name: Set(new.location_name),
        latitude: Set(new.latitude),
        longitude: Set(new.longitude),
        temperature: Set(new.temperature),
        barometric_pressure: Set(new.barometric_pressure),
        wind_speed: Set(new.wind_speed),
        weather_conditions: Set(new.weather_conditions),
        equipment_id: Set(new.equipment_id),
        bait_lure_id: Set(new.bait_lure_id),
        notes: Set(new.notes),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let session = session.insert(db).await.map_err(|e| {
        if is_foreign_key_violation(&e) {
            Error::validation("equipment_id", "equipment or bait does not exist")
        } else {
            e.into()
        }
    })?;
    debug!(session_id = session.id, "Created fishing session");
    Ok(session)
}

/// Retrieves a session by id.
pub async fn get_session_by_id<C>(db: &C, session_id: i32) -> Result<Option<fishing_session::Model>>
where
    C: ConnectionTrait,
{
    FishingSession::find_by_id(session_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Sessions of `user_id`, newest first.
pub async fn get_sessions_for_user(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Vec<fishing_session::Model>> {
    FishingSession::find()
        .filter(fishing_session::Column::UserId.eq(user_id))
        .order_by_desc(fishing_session::Column::SessionDate)
        .order_by_desc(fishing_session::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a session together with its catches and albums.
///
/// Album memberships of the session's catches are removed first, in the same
/// transaction, since they would otherwise block the catch cascade.
#[instrument(skip(db))]
pub async fn delete_session(db: &DatabaseConnection, session_id: i32) -> Result<()> {
    let txn = db.begin().await?;

    let session_catches = Catch::find()
        .select_only()
        .column(catch::Column::Id)
        .filter(catch::Column::SessionId.eq(session_id))
        .into_query();
    AlbumCatch::delete_many()
        .filter(album_catch::Column::CatchId.in_subquery(session_catches))
        .exec(&txn)
        .await?;

    let result = match FishingSession::delete_by_id(session_id).exec(&txn).await {
        Ok(result) => result,
        Err(e) if is_foreign_key_violation(&e) => {
            txn.rollback().await?;
            return Err(Error::ReferencedRow {
                entity: "session",
                id: session_id.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    if result.rows_affected == 0 {
        txn.rollback().await?;
        return Err(Error::not_found("session", session_id));
    }

    txn.commit().await?;
    Ok(())
}
