//! Color variable seeding from the site stylesheet.
//!
//! The stylesheet declares its palette as `var(--name, #hex)` fallbacks. Every
//! `--name, #hex)` pair found in the text is stored in `color_variables` unless
//! a row with the same name already exists. Existing names are read once and
//! the new rows are written in a single batch, so the cost does not grow with
//! one query per candidate.

use crate::{
    entities::{ColorVariable, color_variable},
    errors::Result,
};
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::{QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};
use std::{collections::HashSet, path::Path};
use tracing::{debug, info, instrument};

static COLOR_VARIABLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(--[\w-]+),\s*(#[0-9A-Fa-f]{3,6})\)").expect("color variable pattern is valid")
});

/// Extracts `(name, value)` pairs from stylesheet text.
///
/// Names keep their leading `--` and values their leading `#`. When a name
/// appears more than once, the first occurrence wins.
#[must_use]
pub fn extract_color_variables(css: &str) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    COLOR_VARIABLE_REGEX
        .captures_iter(css)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str();
            let value = caps.get(2)?.as_str();
            seen.insert(name.to_string())
                .then(|| (name.to_string(), value.to_string()))
        })
        .collect()
}

/// Inserts every color variable from `css` that is not stored yet.
///
/// # Returns
/// The number of rows inserted. Zero matches is not an error.
#[instrument(skip(db, css), fields(css_len = css.len()))]
pub async fn seed_color_variables(db: &DatabaseConnection, css: &str) -> Result<usize> {
    let candidates = extract_color_variables(css);
    if candidates.is_empty() {
        debug!("No color variables found in stylesheet");
        return Ok(0);
    }

    let txn = db.begin().await?;

    let existing: HashSet<String> = ColorVariable::find()
        .select_only()
        .column(color_variable::Column::Name)
        .into_tuple::<String>()
        .all(&txn)
        .await?
        .into_iter()
        .collect();

    let new_rows: Vec<color_variable::ActiveModel> = candidates
        .into_iter()
        .filter(|(name, _)| !existing.contains(name))
        .map(|(name, value)| color_variable::ActiveModel {
            name: Set(name),
            value: Set(value),
            ..Default::default()
        })
        .collect();

    let inserted = new_rows.len();
    if inserted > 0 {
        ColorVariable::insert_many(new_rows).exec(&txn).await?;
    }
    txn.commit().await?;

    info!(inserted, existing = existing.len(), "Color variables seeded");
    Ok(inserted)
}

/// Reads the stylesheet at `path` and seeds its color variables.
pub async fn seed_color_variables_from_file<P: AsRef<Path>>(
    db: &DatabaseConnection,
    path: P,
) -> Result<usize> {
    let path = path.as_ref();
    debug!("Reading stylesheet from {}", path.display());
    let css = std::fs::read_to_string(path)?;
    seed_color_variables(db, &css).await
}

/// Retrieves all stored color variables ordered by name.
pub async fn get_color_variables(db: &DatabaseConnection) -> Result<Vec<color_variable::Model>> {
    ColorVariable::find()
        .order_by_asc(color_variable::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}
