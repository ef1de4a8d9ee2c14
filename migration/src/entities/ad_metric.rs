use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "ad_metrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub page_name: String,
    pub views: i64,
    pub visits: i64,
    pub expenses: i64,
    pub request_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
