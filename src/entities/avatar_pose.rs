//! Avatar pose entity - Stock poses an avatar can take in a composed catch photo.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "avatar_poses")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name
    pub name: String,
    /// Grouping shown in pickers
    pub category: String,
    /// Preview image
    pub image_url: Option<String>,
    /// Only available to paid subscription tiers
    pub is_premium: bool,
    /// Optional sponsor; cleared when the sponsor is deleted
    pub sponsor_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sponsor::Entity",
        from = "Column::SponsorId",
        to = "super::sponsor::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Sponsor,
}

impl Related<super::sponsor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sponsor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
