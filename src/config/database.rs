//! Database configuration module for the Fish-Smart data core.
//!
//! This module handles the database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, which carries every column type, decimal
//! precision and foreign-key delete policy declared on the entities. Indexes
//! that `SeaORM` cannot derive from column attributes (composite unique keys and
//! lookup indexes) are declared here explicitly.

use crate::entities::{
    AdminTask, AdminTaskInstance, AlbumCatch, AvatarPose, Background, BackgroundRemovalUsage,
    BaitLure, BillableAsset, Catch, CatchAlbum, ColorVariable, FishSpecies, FishingBuddy,
    FishingEquipment, FishingSession, Invoice, Outfit, SmartCatchProfile, Sponsor, SystemState,
    TaskStatusMessage, User, UserAvatar, admin_task_instance, catch, catch_album, fishing_buddy,
    fishing_session,
};
use crate::errors::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, EntityTrait, Schema,
    sea_query::{Index, IndexCreateStatement},
};
use tracing::{debug, info, instrument};

/// Default connection string used when neither `config.toml` nor `DATABASE_URL` set one.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/fish_smart.sqlite?mode=rwc";

/// Establishes a connection to the database at `database_url`.
///
/// For `SQLite` the connection additionally switches on foreign-key
/// enforcement, without which none of the cascade / set-null / no-action
/// policies take effect.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Opening database connection");
    let db = Database::connect(database_url).await?;

    if db.get_database_backend() == DatabaseBackend::Sqlite {
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
    }

    Ok(db)
}

/// Creates every table and index of the schema if they do not exist yet.
///
/// Parents are created before their children so the statements also work on
/// engines that validate foreign-key targets at creation time.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let schema = Schema::new(db.get_database_backend());

    // Identity, catalog and reference tables
    create_entity_table(db, &schema, User).await?;
    create_entity_table(db, &schema, Sponsor).await?;
    create_entity_table(db, &schema, AvatarPose).await?;
    create_entity_table(db, &schema, Background).await?;
    create_entity_table(db, &schema, Outfit).await?;
    create_entity_table(db, &schema, FishingEquipment).await?;
    create_entity_table(db, &schema, BaitLure).await?;
    create_entity_table(db, &schema, FishSpecies).await?;
    create_entity_table(db, &schema, ColorVariable).await?;
    create_entity_table(db, &schema, SystemState).await?;

    // Per-user fishing log
    create_entity_table(db, &schema, SmartCatchProfile).await?;
    create_entity_table(db, &schema, UserAvatar).await?;
    create_entity_table(db, &schema, FishingSession).await?;
    create_entity_table(db, &schema, Catch).await?;
    create_entity_table(db, &schema, CatchAlbum).await?;
    create_entity_table(db, &schema, AlbumCatch).await?;
    create_entity_table(db, &schema, FishingBuddy).await?;

    // Invoicing and task tracking
    create_entity_table(db, &schema, Invoice).await?;
    create_entity_table(db, &schema, BillableAsset).await?;
    create_entity_table(db, &schema, AdminTask).await?;
    create_entity_table(db, &schema, AdminTaskInstance).await?;
    create_entity_table(db, &schema, BackgroundRemovalUsage).await?;
    create_entity_table(db, &schema, TaskStatusMessage).await?;

    let builder = db.get_database_backend();
    for index in explicit_indexes() {
        db.execute(builder.build(&index)).await?;
    }

    info!("Database tables and indexes ensured");
    Ok(())
}

async fn create_entity_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait + Copy,
{
    let builder = db.get_database_backend();

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(builder.build(&table)).await?;

    // Column-level `indexed` attributes
    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(builder.build(&index)).await?;
    }

    debug!(table = entity.table_name(), "Table ensured");
    Ok(())
}

/// Indexes spanning several columns, plus lookup indexes on hot foreign keys.
fn explicit_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .name("ux_fishing_buddies_owner_buddy")
            .table(FishingBuddy)
            .col(fishing_buddy::Column::OwnerUserId)
            .col(fishing_buddy::Column::BuddyUserId)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("ux_admin_task_instances_task_period")
            .table(AdminTaskInstance)
            .col(admin_task_instance::Column::TaskId)
            .col(admin_task_instance::Column::Year)
            .col(admin_task_instance::Column::Month)
            .unique()
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("ix_fishing_sessions_user_id")
            .table(FishingSession)
            .col(fishing_session::Column::UserId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("ix_catches_session_id")
            .table(Catch)
            .col(catch::Column::SessionId)
            .if_not_exists()
            .to_owned(),
        Index::create()
            .name("ix_catch_albums_user_id")
            .table(CatchAlbum)
            .col(catch_album::Column::UserId)
            .if_not_exists()
            .to_owned(),
    ]
}
