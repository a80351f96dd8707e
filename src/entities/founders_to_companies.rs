use sea_orm::entity::prelude::*;

/// The founded-by edge. Composite primary key keeps each
/// (founder, company) pair unique at the storage layer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "founders_to_companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub founder_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub company_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::founder::Entity",
        from = "Column::FounderId",
        to = "super::founder::Column::Id",
        on_delete = "Cascade"
    )]
    Founder,
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id",
        on_delete = "Cascade"
    )]
    Company,
}

impl Related<super::founder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Founder.def()
    }
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
