//! Avatar-composition catalog and its sponsors.
//!
//! Poses, backgrounds, outfits, equipment and baits share one shape: a name, a
//! category, an optional image, a premium flag and an optional sponsor. Removing
//! a sponsor clears the link on every item it sponsored.

use crate::{
    core::validation,
    entities::{
        AvatarPose, Background, BaitLure, FishingEquipment, Outfit, Sponsor, avatar_pose, background,
        bait_lure, fishing_equipment, outfit, sponsor,
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::{Deserialize, Serialize};

/// Fields shared by every catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCatalogItem {
    /// Display name
    pub name: String,
    /// Grouping shown in pickers
    pub category: String,
    /// Preview image
    pub image_url: Option<String>,
    /// Only offered to paid tiers
    pub is_premium: bool,
    /// Sponsor that placed the item
    pub sponsor_id: Option<i32>,
}

impl NewCatalogItem {
    /// Item with the given name and category; free and unsponsored.
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            image_url: None,
            is_premium: false,
            sponsor_id: None,
        }
    }

    fn validate(&self) -> Result<()> {
        validation::check_not_blank("name", &self.name)?;
        validation::check_not_blank("category", &self.category)
    }
}

/// Everything a sponsor has placed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SponsorCatalog {
    /// The sponsor itself
    pub sponsor: sponsor::Model,
    /// Sponsored avatar poses
    pub poses: Vec<avatar_pose::Model>,
    /// Sponsored backgrounds
    pub backgrounds: Vec<background::Model>,
    /// Sponsored outfits
    pub outfits: Vec<outfit::Model>,
    /// Sponsored fishing equipment
    pub equipment: Vec<fishing_equipment::Model>,
    /// Sponsored baits and lures
    pub baits_lures: Vec<bait_lure::Model>,
}

/// Creates an active sponsor.
pub async fn create_sponsor(
    db: &DatabaseConnection,
    name: &str,
    website_url: Option<String>,
) -> Result<sponsor::Model> {
    validation::check_not_blank("name", name)?;
    let sponsor = sponsor::ActiveModel {
        name: Set(name.trim().to_string()),
        website_url: Set(website_url),
        logo_url: Set(None),
        is_active: Set(true),
        ..Default::default()
    };
    sponsor.insert(db).await.map_err(Into::into)
}

/// Deletes a sponsor; sponsored items stay, unsponsored.
pub async fn delete_sponsor(db: &DatabaseConnection, sponsor_id: i32) -> Result<()> {
    let result = Sponsor::delete_by_id(sponsor_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("sponsor", sponsor_id));
    }
    Ok(())
}

/// Adds an avatar pose to the catalog.
pub async fn create_pose(db: &DatabaseConnection, item: &NewCatalogItem) -> Result<avatar_pose::Model> {
    item.validate()?;
    avatar_pose::ActiveModel {
        name: Set(item.name.clone()),
        category: Set(item.category.clone()),
        image_url: Set(item.image_url.clone()),
        is_premium: Set(item.is_premium),
        sponsor_id: Set(item.sponsor_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Adds a photo background to the catalog.
pub async fn create_background(db: &DatabaseConnection, item: &NewCatalogItem) -> Result<background::Model> {
    item.validate()?;
    background::ActiveModel {
        name: Set(item.name.clone()),
        category: Set(item.category.clone()),
        image_url: Set(item.image_url.clone()),
        is_premium: Set(item.is_premium),
        sponsor_id: Set(item.sponsor_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Adds an outfit to the catalog.
pub async fn create_outfit(db: &DatabaseConnection, item: &NewCatalogItem) -> Result<outfit::Model> {
    item.validate()?;
    outfit::ActiveModel {
        name: Set(item.name.clone()),
        category: Set(item.category.clone()),
        image_url: Set(item.image_url.clone()),
        is_premium: Set(item.is_premium),
        sponsor_id: Set(item.sponsor_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Adds a piece of fishing equipment to the catalog.
pub async fn create_equipment(
    db: &DatabaseConnection,
    item: &NewCatalogItem,
) -> Result<fishing_equipment::Model> {
    item.validate()?;
    fishing_equipment::ActiveModel {
        name: Set(item.name.clone()),
        category: Set(item.category.clone()),
        image_url: Set(item.image_url.clone()),
        is_premium: Set(item.is_premium),
        sponsor_id: Set(item.sponsor_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Adds a bait or lure to the catalog.
pub async fn create_bait_lure(db: &DatabaseConnection, item: &NewCatalogItem) -> Result<bait_lure::Model> {
    item.validate()?;
    bait_lure::ActiveModel {
        name: Set(item.name.clone()),
        category: Set(item.category.clone()),
        image_url: Set(item.image_url.clone()),
        is_premium: Set(item.is_premium),
        sponsor_id: Set(item.sponsor_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Lists one catalog table by name, hiding premium items unless asked.
async fn list_items<E>(
    db: &DatabaseConnection,
    premium: E::Column,
    name: E::Column,
    include_premium: bool,
) -> Result<Vec<E::Model>>
where
    E: EntityTrait,
{
    let mut query = E::find();
    if !include_premium {
        query = query.filter(premium.eq(false));
    }
    query.order_by_asc(name).all(db).await.map_err(Into::into)
}

/// Avatar poses, premium ones only when `include_premium`.
pub async fn get_poses(db: &DatabaseConnection, include_premium: bool) -> Result<Vec<avatar_pose::Model>> {
    list_items::<AvatarPose>(
        db,
        avatar_pose::Column::IsPremium,
        avatar_pose::Column::Name,
        include_premium,
    )
    .await
}

/// Backgrounds, premium ones only when `include_premium`.
pub async fn get_backgrounds(db: &DatabaseConnection, include_premium: bool) -> Result<Vec<background::Model>> {
    list_items::<Background>(
        db,
        background::Column::IsPremium,
        background::Column::Name,
        include_premium,
    )
    .await
}

/// Outfits, premium ones only when `include_premium`.
pub async fn get_outfits(db: &DatabaseConnection, include_premium: bool) -> Result<Vec<outfit::Model>> {
    list_items::<Outfit>(db, outfit::Column::IsPremium, outfit::Column::Name, include_premium).await
}

/// Equipment, premium items only when `include_premium`.
pub async fn get_equipment(
    db: &DatabaseConnection,
    include_premium: bool,
) -> Result<Vec<fishing_equipment::Model>> {
    list_items::<FishingEquipment>(
        db,
        fishing_equipment::Column::IsPremium,
        fishing_equipment::Column::Name,
        include_premium,
    )
    .await
}

/// Baits and lures, premium ones only when `include_premium`.
pub async fn get_baits_lures(db: &DatabaseConnection, include_premium: bool) -> Result<Vec<bait_lure::Model>> {
    list_items::<BaitLure>(
        db,
        bait_lure::Column::IsPremium,
        bait_lure::Column::Name,
        include_premium,
    )
    .await
}

/// Collects every item linked to a sponsor.
pub async fn get_items_for_sponsor(db: &DatabaseConnection, sponsor_id: i32) -> Result<SponsorCatalog> {
    let sponsor = Sponsor::find_by_id(sponsor_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("sponsor", sponsor_id))?;

    Ok(SponsorCatalog {
        poses: sponsor.find_related(AvatarPose).all(db).await?,
        backgrounds: sponsor.find_related(Background).all(db).await?,
        outfits: sponsor.find_related(Outfit).all(db).await?,
        equipment: sponsor.find_related(FishingEquipment).all(db).await?,
        baits_lures: sponsor.find_related(BaitLure).all(db).await?,
        sponsor,
    })
}
