use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sample")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub internal_id: i64,
    pub name: Option<String>,
    pub accession_number: Option<String>,
    pub organism: Option<String>,
    pub common_name: Option<String>,
    pub taxon_id: Option<i64>,
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
    pub cohort: Option<String>,
    pub country_of_origin: Option<String>,
    pub geographical_region: Option<String>,
    pub is_current: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
