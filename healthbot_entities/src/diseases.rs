use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "diseases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub symptom1: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub symptom2: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub symptom3: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::precautions::Entity")]
    Precautions,
}

impl Related<super::precautions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Precautions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
