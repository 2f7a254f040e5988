//! Album/catch join entity, keyed by (`album_id`, `catch_id`).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "album_catches")]
pub struct Model {
    /// Album side of the membership
    #[sea_orm(primary_key, auto_increment = false)]
    pub album_id: i32,
    /// Catch side of the membership
    #[sea_orm(primary_key, auto_increment = false)]
    pub catch_id: i32,
    /// When the catch was added to the album
    pub added_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::catch_album::Entity",
        from = "Column::AlbumId",
        to = "super::catch_album::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CatchAlbum,
    #[sea_orm(
        belongs_to = "super::catch::Entity",
        from = "Column::CatchId",
        to = "super::catch::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Catch,
}

impl Related<super::catch_album::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CatchAlbum.def()
    }
}

impl Related<super::catch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Catch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
