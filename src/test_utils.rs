//! Shared test utilities for Fish-Smart.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test rows with sensible defaults.

use crate::{
    config::species::SpeciesSeed,
    core::{catalog, catch, session, species, users},
    entities::{self, WaterType},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized and
/// foreign keys enforced. This is the standard setup for all tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::config::database::create_connection("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test user whose email and display name derive from `id`.
pub async fn create_test_user(db: &DatabaseConnection, id: &str) -> Result<entities::user::Model> {
    users::create_user(db, id, &format!("{id}@example.com"), id).await
}

/// Creates an active freshwater species with no size or season data.
pub async fn create_test_species(
    db: &DatabaseConnection,
    common_name: &str,
) -> Result<entities::fish_species::Model> {
    let seed = SpeciesSeed {
        common_name: common_name.to_string(),
        scientific_name: None,
        water_type: WaterType::Fresh,
        region: None,
        min_size: None,
        max_size: None,
        season_start_month: None,
        season_end_month: None,
        regulations: None,
    };
    species::create_species(db, &seed).await
}

/// Creates a freshwater session dated 2024-06-15 for `user_id`.
pub async fn create_test_session(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entities::fishing_session::Model> {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default();
    session::create_session(db, session::NewSession::new(user_id, date, WaterType::Fresh)).await
}

/// Creates a catch with no measurements.
pub async fn create_test_catch(
    db: &DatabaseConnection,
    session_id: i32,
    species_id: i32,
) -> Result<entities::catch::Model> {
    catch::record_catch(db, catch::NewCatch::new(session_id, species_id)).await
}

/// Creates a non-premium, unsponsored piece of equipment.
pub async fn create_test_equipment(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::fishing_equipment::Model> {
    catalog::create_equipment(db, &catalog::NewCatalogItem::new(name, "rod")).await
}

/// Sets up a complete test environment with a user, a species and a session.
/// Returns (db, user, species, session) for catch-related tests.
pub async fn setup_with_session() -> Result<(
    DatabaseConnection,
    entities::user::Model,
    entities::fish_species::Model,
    entities::fishing_session::Model,
)> {
    let db = setup_test_db().await?;
    let user = create_test_user(&db, "test_user").await?;
    let species = create_test_species(&db, "Largemouth Bass").await?;
    let session = create_test_session(&db, &user.id).await?;
    Ok((db, user, species, session))
}
