use sea_orm::entity::prelude::*;

/// The investment edge: one company, one investor, one event.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "funding_rounds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    pub company_id: i32,
    pub investor_id: i32,
    pub amount_usd: Option<i64>, // whole dollars
    pub stage: Option<String>,
    pub announced_at: Option<Date>,
    pub source_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id",
        on_delete = "Restrict"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::investor::Entity",
        from = "Column::InvestorId",
        to = "super::investor::Column::Id",
        on_delete = "Restrict"
    )]
    Investor,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::investor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Investor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
