use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub country: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub problem_statement: Option<String>,
    pub business_model: Option<String>,
    pub industry: Option<String>,
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

// Founders are reached through the join table.
impl Related<super::founder::Entity> for Entity {
    fn to() -> RelationDef {
        super::founders_to_companies::Relation::Founder.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::founders_to_companies::Relation::Company.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
