use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "study")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub internal_id: i64,
    pub name: Option<String>,
    pub accession_number: Option<String>,
    pub study_type: Option<String>,
    pub description: Option<String>,
    pub study_title: Option<String>,
    pub study_visibility: Option<String>,
    pub faculty_sponsor: Option<String>,
    pub is_current: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
