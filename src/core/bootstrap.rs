//! Startup seeding.
//!
//! Runs the species seeder, then the color seeder. A failing seeder is logged
//! and recorded in the [`SeedSummary`]; it never stops the other one or the
//! caller.

use crate::{
    config::app::AppConfig,
    core::{colors, species},
};
use sea_orm::DatabaseConnection;
use std::fmt;
use tracing::{error, info, warn};

/// Result of one seed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The step ran and inserted this many rows (possibly 0)
    Inserted(usize),
    /// The step did not run
    Skipped(String),
    /// The step failed and was rolled back
    Failed(String),
}

impl SeedOutcome {
    /// Whether the step failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted(count) => write!(f, "inserted {count}"),
            Self::Skipped(reason) => write!(f, "skipped ({reason})"),
            Self::Failed(reason) => write!(f, "failed ({reason})"),
        }
    }
}

/// Outcome of every seed step of one [`run_seeders`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    /// Fish species seeder
    pub species: SeedOutcome,
    /// Color variable seeder
    pub colors: SeedOutcome,
}

impl SeedSummary {
    /// Whether any seeder failed.
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.species.is_failed() || self.colors.is_failed()
    }
}

/// Runs every seeder in order and reports what each one did.
pub async fn run_seeders(db: &DatabaseConnection, config: &AppConfig) -> SeedSummary {
    let species = match species::seed_fish_species(db).await {
        Ok(count) => SeedOutcome::Inserted(count),
        Err(e) => {
            error!("Fish species seeding failed: {}", e);
            SeedOutcome::Failed(e.to_string())
        }
    };

    let path = &config.stylesheet_path;
    let colors = if path.is_file() {
        match colors::seed_color_variables_from_file(db, path).await {
            Ok(count) => SeedOutcome::Inserted(count),
            Err(e) => {
                error!("Color variable seeding from {} failed: {}", path.display(), e);
                SeedOutcome::Failed(e.to_string())
            }
        }
    } else {
        warn!("Stylesheet {} not found, skipping color variables", path.display());
        SeedOutcome::Skipped(format!("{} not found", path.display()))
    };

    let summary = SeedSummary { species, colors };
    info!(species = %summary.species, colors = %summary.colors, "Seeding finished");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Result;
    use crate::test_utils::setup_test_db;
    use sea_orm::ConnectionTrait;
    use std::path::PathBuf;

    fn config_with_stylesheet(path: PathBuf) -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".to_string(),
            stylesheet_path: path,
            seed_reference_data: true,
        }
    }

    fn write_stylesheet(name: &str, css: &str) -> Result<PathBuf> {
        let path = std::env::temp_dir().join(format!("{name}-{}.css", uuid::Uuid::new_v4()));
        std::fs::write(&path, css)?;
        Ok(path)
    }

    #[tokio::test]
    async fn test_run_seeders_then_rerun() -> Result<()> {
        let db = setup_test_db().await?;
        let path = write_stylesheet(
            "bootstrap",
            ".a { color: var(--brand-blue, #1a73e8); }\n.b { color: var(--brand-red, #d93025); }",
        )?;
        let config = config_with_stylesheet(path.clone());

        let first = run_seeders(&db, &config).await;
        assert_eq!(first.species, SeedOutcome::Inserted(45));
        assert_eq!(first.colors, SeedOutcome::Inserted(2));
        assert!(!first.has_failures());

        let second = run_seeders(&db, &config).await;
        assert_eq!(second.species, SeedOutcome::Inserted(0));
        assert_eq!(second.colors, SeedOutcome::Inserted(0));

        std::fs::remove_file(path)?;
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_stylesheet_is_skipped() -> Result<()> {
        let db = setup_test_db().await?;
        let config = config_with_stylesheet(std::env::temp_dir().join("no-such-stylesheet.css"));

        let summary = run_seeders(&db, &config).await;
        assert_eq!(summary.species, SeedOutcome::Inserted(45));
        assert!(matches!(summary.colors, SeedOutcome::Skipped(_)));
        assert!(!summary.has_failures());
        Ok(())
    }

    #[tokio::test]
    async fn test_failure_is_recorded_not_propagated() -> Result<()> {
        let db = setup_test_db().await?;
        db.execute_unprepared("DROP TABLE color_variables;").await?;
        let path = write_stylesheet("broken", "a { color: var(--x, #fff); }")?;

        let summary = run_seeders(&db, &config_with_stylesheet(path.clone())).await;
        assert_eq!(summary.species, SeedOutcome::Inserted(45));
        assert!(summary.colors.is_failed());
        assert!(summary.has_failures());

        std::fs::remove_file(path)?;
        Ok(())
    }
}
