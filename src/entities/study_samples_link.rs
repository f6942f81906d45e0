//! Join table between studies and samples.
//!
//! Links refer to the logical `internal_id` of each side rather than a row
//! key, so they survive new versions of either record being added.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "study_samples")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub study_internal_id: i64,
    pub sample_internal_id: i64,
    pub is_current: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
