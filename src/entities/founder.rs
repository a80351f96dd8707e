use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "founders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,
    // Not unique: two founders may share a name
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        super::founders_to_companies::Relation::Company.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::founders_to_companies::Relation::Founder.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
