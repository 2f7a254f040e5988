//! Core business logic for Fish-Smart.
//!
//! Every module here talks to the database through `SeaORM` and returns
//! [`crate::errors::Result`]. Relationships are walked with explicit query
//! functions rather than lazily loaded navigation properties.

/// Catch albums and their memberships
pub mod album;
/// User avatars
pub mod avatar;
/// Invoices, metered usage, billable plots and status messages
pub mod billing;
/// Startup seeding
pub mod bootstrap;
/// Fishing buddies
pub mod buddy;
/// Avatar-composition catalog and sponsors
pub mod catalog;
/// Catches
pub mod catch;
/// Color variable seeding from the stylesheet
pub mod colors;
/// File name and URL path helpers for uploads
pub mod file_names;
/// One-time markers in `system_state`
pub mod markers;
/// Smart Catch profiles
pub mod profile;
/// Fishing sessions
pub mod session;
/// Fish species seeding and queries
pub mod species;
/// Admin tasks and monthly instances
pub mod tasks;
/// Users
pub mod users;
/// Bounds checks applied before writes
pub mod validation;
