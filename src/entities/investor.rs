use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "investors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::funding_round::Entity")]
    FundingRound,
}

impl Related<super::funding_round::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FundingRound.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
