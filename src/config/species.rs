//! Fish species reference data loading from `data/fish_species.toml`
//!
//! The file is embedded into the binary at compile time so the seeder has no
//! runtime file dependency. Each `[[species]]` table becomes one row.

use crate::entities::WaterType;
use crate::errors::{Error, Result};
use serde::Deserialize;

/// Raw text of the embedded species data file
pub const EMBEDDED_SPECIES_DATA: &str = include_str!("../../data/fish_species.toml");

/// Configuration structure representing the whole species data file
#[derive(Debug, Deserialize)]
pub struct SpeciesData {
    /// Species rows to seed
    pub species: Vec<SpeciesSeed>,
}

/// One reference species row
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SpeciesSeed {
    /// Name shown to anglers
    pub common_name: String,
    #[serde(default)]
    pub scientific_name: Option<String>,
    /// Where the species lives
    pub water_type: WaterType,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub min_size: Option<f64>,
    #[serde(default)]
    pub max_size: Option<f64>,
    #[serde(default)]
    pub season_start_month: Option<i32>,
    #[serde(default)]
    pub season_end_month: Option<i32>,
    #[serde(default)]
    pub regulations: Option<String>,
}

/// Parses species reference data from TOML text
///
/// # Errors
/// Returns [`Error::Config`] if the TOML syntax is invalid or required fields are missing.
pub fn parse_species_data(contents: &str) -> Result<Vec<SpeciesSeed>> {
    let data: SpeciesData = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse species data: {e}"),
    })?;
    Ok(data.species)
}

/// Loads the species reference data embedded in the crate.
pub fn load_embedded_species() -> Result<Vec<SpeciesSeed>> {
    parse_species_data(EMBEDDED_SPECIES_DATA)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_embedded_data_parses() {
        let species = load_embedded_species().unwrap();
        assert_eq!(species.len(), 45);

        let names: HashSet<&str> = species.iter().map(|s| s.common_name.as_str()).collect();
        assert_eq!(names.len(), species.len(), "duplicate common names");
        assert!(names.contains("Largemouth Bass"));
        assert!(names.contains("Redfish"));
    }

    #[test]
    fn test_parse_species_minimal_row() {
        let toml_str = r#"
            [[species]]
            common_name = "Bluegill"
            water_type = "Fresh"
        "#;

        let species = parse_species_data(toml_str).unwrap();
        assert_eq!(species.len(), 1);
        assert_eq!(species[0].water_type, WaterType::Fresh);
        assert!(species[0].min_size.is_none());
        assert!(species[0].regulations.is_none());
    }

    #[test]
    fn test_parse_species_rejects_unknown_water_type() {
        let toml_str = r#"
            [[species]]
            common_name = "Axolotl"
            water_type = "Brackish"
        "#;

        assert!(matches!(
            parse_species_data(toml_str),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_sizes_parse_as_decimals() {
        let species = load_embedded_species().unwrap();
        let bass = species
            .iter()
            .find(|s| s.common_name == "Largemouth Bass")
            .unwrap();
        assert_eq!(bass.min_size, Some(10.0));
        assert_eq!(bass.max_size, Some(29.5));
    }
}
