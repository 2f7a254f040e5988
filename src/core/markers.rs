//! One-time markers stored in the `system_state` table.
//!
//! Seed steps record that they ran by writing a marker row. Because `key` is
//! unique, two processes trying to create the same marker cannot both commit.

use crate::{
    entities::{SystemState, system_state},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};

/// Retrieves a marker by key.
///
/// # Returns
/// * `Ok(Some(model))` - The marker exists
/// * `Ok(None)` - No marker recorded under this key
pub async fn get_marker<C>(db: &C, key: &str) -> Result<Option<system_state::Model>>
where
    C: ConnectionTrait,
{
    SystemState::find()
        .filter(system_state::Column::Key.eq(key))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Writes a marker, updating the value if the key already exists.
pub async fn set_marker<C>(db: &C, key: &str, value: &str) -> Result<()>
where
    C: ConnectionTrait,
{
    let now = Utc::now();

    if let Some(state) = get_marker(db, key).await? {
        // Update existing record
        let mut active_model: system_state::ActiveModel = state.into();
        active_model.value = Set(value.to_string());
        active_model.updated_at = Set(now);
        active_model.update(db).await?;
    } else {
        // Insert new record
        let new_state = system_state::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };
        new_state.insert(db).await?;
    }

    Ok(())
}
