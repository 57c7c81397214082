use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "precautions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub disease_id: i32,
    #[sea_orm(column_type = "Text")]
    pub precaution_text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::diseases::Entity",
        from = "Column::DiseaseId",
        to = "super::diseases::Column::Id"
    )]
    Disease,
}

impl Related<super::diseases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Disease.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
