//! Fish species business logic - Reference catalog queries and seeding.
//!
//! The species table is populated once from the embedded reference data. The
//! seeder only runs against an empty table; it is not a merge.

use crate::{
    config::species::{SpeciesSeed, load_embedded_species},
    core::{markers, validation},
    entities::{FishSpecies, WaterType, fish_species},
    errors::{Error, Result, is_foreign_key_violation},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument, warn};

/// Marker written together with the seeded rows
pub const FISH_SPECIES_SEEDED_KEY: &str = "fish_species_seeded";

fn to_active_model(seed: &SpeciesSeed) -> fish_species::ActiveModel {
    fish_species::ActiveModel {
        common_name: Set(seed.common_name.trim().to_string()),
        scientific_name: Set(seed.scientific_name.clone()),
        water_type: Set(seed.water_type),
        region: Set(seed.region.clone()),
        min_size: Set(seed.min_size),
        max_size: Set(seed.max_size),
        season_start_month: Set(seed.season_start_month),
        season_end_month: Set(seed.season_end_month),
        regulations: Set(seed.regulations.clone()),
        is_active: Set(true),
        ..Default::default()
    }
}

/// Seeds the embedded reference species if the table is empty.
///
/// # Returns
/// The number of rows inserted; 0 when any species row already existed.
pub async fn seed_fish_species(db: &DatabaseConnection) -> Result<usize> {
    let seeds = load_embedded_species()?;
    seed_fish_species_from(db, &seeds).await
}

/// Seeds `seeds` if the species table is empty.
///
/// Nothing is validated or written when any species row exists. Otherwise all
/// rows are validated, then inserted in one batch inside one transaction
/// together with the [`FISH_SPECIES_SEEDED_KEY`] marker.
#[instrument(skip(db, seeds), fields(rows = seeds.len()))]
pub async fn seed_fish_species_from(db: &DatabaseConnection, seeds: &[SpeciesSeed]) -> Result<usize> {
    if seeds.is_empty() {
        warn!("No species reference data to seed");
        return Ok(0);
    }

    let txn = db.begin().await?;

    let existing = FishSpecies::find().count(&txn).await?;
    if existing > 0 {
        txn.rollback().await?;
        info!(existing, "Fish species already present, skipping seed");
        return Ok(0);
    }

    if let Err(e) = seeds.iter().try_for_each(validation::validate_species) {
        txn.rollback().await?;
        return Err(e);
    }

    FishSpecies::insert_many(seeds.iter().map(to_active_model))
        .exec(&txn)
        .await?;
    markers::set_marker(&txn, FISH_SPECIES_SEEDED_KEY, &seeds.len().to_string()).await?;
    txn.commit().await?;

    info!(inserted = seeds.len(), "Fish species seeded");
    Ok(seeds.len())
}

/// Creates one species after validating it.
pub async fn create_species(db: &DatabaseConnection, seed: &SpeciesSeed) -> Result<fish_species::Model> {
    validation::validate_species(seed)?;
    to_active_model(seed).insert(db).await.map_err(Into::into)
}

/// Retrieves all active species ordered by common name.
pub async fn get_active_species(db: &DatabaseConnection) -> Result<Vec<fish_species::Model>> {
    FishSpecies::find()
        .filter(fish_species::Column::IsActive.eq(true))
        .order_by_asc(fish_species::Column::CommonName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a species by id, active or not.
pub async fn get_species_by_id(
    db: &DatabaseConnection,
    species_id: i32,
) -> Result<Option<fish_species::Model>> {
    FishSpecies::find_by_id(species_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Active species that can be found in `water`. Species marked `Both` match
/// any water, and asking for `Both` returns every active species.
pub async fn get_species_by_water_type(
    db: &DatabaseConnection,
    water: WaterType,
) -> Result<Vec<fish_species::Model>> {
    let mut query = FishSpecies::find().filter(fish_species::Column::IsActive.eq(true));
    if water != WaterType::Both {
        query = query.filter(fish_species::Column::WaterType.is_in([water, WaterType::Both]));
    }
    query
        .order_by_asc(fish_species::Column::CommonName)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Whether `month` falls inside the season of `species`.
///
/// Seasons may wrap past December (start 10, end 4 covers Oct-Apr). A species
/// without a season is always in season.
#[must_use]
pub fn is_in_season(species: &fish_species::Model, month: i32) -> bool {
    match (species.season_start_month, species.season_end_month) {
        (Some(start), Some(end)) if start <= end => (start..=end).contains(&month),
        (Some(start), Some(end)) => month >= start || month <= end,
        _ => true,
    }
}

/// Active species in season during `month` (1-12).
pub async fn get_species_in_season(
    db: &DatabaseConnection,
    month: i32,
) -> Result<Vec<fish_species::Model>> {
    validation::check_month("month", month)?;
    Ok(get_active_species(db)
        .await?
        .into_iter()
        .filter(|species| is_in_season(species, month))
        .collect())
}

/// Hides a species from pickers without deleting it.
pub async fn deactivate_species(db: &DatabaseConnection, species_id: i32) -> Result<fish_species::Model> {
    let species = get_species_by_id(db, species_id)
        .await?
        .ok_or_else(|| Error::not_found("species", species_id))?;
    let mut active_model: fish_species::ActiveModel = species.into();
    active_model.is_active = Set(false);
    active_model.update(db).await.map_err(Into::into)
}

/// Deletes a species. Fails with [`Error::ReferencedRow`] while any catch
/// still references it.
pub async fn delete_species(db: &DatabaseConnection, species_id: i32) -> Result<()> {
    match FishSpecies::delete_by_id(species_id).exec(db).await {
        Ok(result) if result.rows_affected == 0 => Err(Error::not_found("species", species_id)),
        Ok(_) => Ok(()),
        Err(e) if is_foreign_key_violation(&e) => Err(Error::ReferencedRow {
            entity: "species",
            id: species_id.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}
