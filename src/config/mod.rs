/// Application settings loaded from `config.toml` and the environment
pub mod app;

/// Database configuration, connection management and schema creation
pub mod database;

/// Fish species reference data loading from the embedded TOML file
pub mod species;
