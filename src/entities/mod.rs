//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships,
//! including every foreign-key delete policy of the schema.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod admin_task;
pub mod admin_task_instance;
pub mod album_catch;
pub mod avatar_pose;
pub mod background;
pub mod background_removal_usage;
pub mod bait_lure;
pub mod billable_asset;
pub mod catch;
pub mod catch_album;
pub mod color_variable;
pub mod fish_species;
pub mod fishing_buddy;
pub mod fishing_equipment;
pub mod fishing_session;
pub mod invoice;
pub mod outfit;
pub mod smart_catch_profile;
pub mod sponsor;
pub mod system_state;
pub mod task_status_message;
pub mod user;
pub mod user_avatar;

// Re-export specific types to avoid conflicts
pub use admin_task::Entity as AdminTask;
pub use admin_task_instance::{Entity as AdminTaskInstance, TaskStatus};
pub use album_catch::Entity as AlbumCatch;
pub use avatar_pose::Entity as AvatarPose;
pub use background::Entity as Background;
pub use background_removal_usage::Entity as BackgroundRemovalUsage;
pub use bait_lure::Entity as BaitLure;
pub use billable_asset::Entity as BillableAsset;
pub use catch::{Column as CatchColumn, Entity as Catch, Model as CatchModel};
pub use catch_album::{Column as CatchAlbumColumn, Entity as CatchAlbum, Model as CatchAlbumModel};
pub use color_variable::{Entity as ColorVariable, Model as ColorVariableModel};
pub use fish_species::{
    Column as FishSpeciesColumn, Entity as FishSpecies, Model as FishSpeciesModel, WaterType,
};
pub use fishing_buddy::{BuddyStatus, Entity as FishingBuddy, Model as FishingBuddyModel};
pub use fishing_equipment::Entity as FishingEquipment;
pub use fishing_session::{
    Column as FishingSessionColumn, Entity as FishingSession, Model as FishingSessionModel,
};
pub use invoice::Entity as Invoice;
pub use outfit::Entity as Outfit;
pub use smart_catch_profile::{
    Entity as SmartCatchProfile, Model as SmartCatchProfileModel, SubscriptionTier,
};
pub use sponsor::Entity as Sponsor;
pub use system_state::{Column as SystemStateColumn, Entity as SystemState};
pub use task_status_message::Entity as TaskStatusMessage;
pub use user::{Entity as User, Model as UserModel};
pub use user_avatar::{Entity as UserAvatar, Model as UserAvatarModel};
