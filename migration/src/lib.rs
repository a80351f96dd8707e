pub use sea_orm_migration::prelude::*;

mod m20250603_091242_create_entity_tables;
mod m20250603_094807_create_edge_tables;
// Add other migration modules here if you have more

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250603_091242_create_entity_tables::Migration),
            Box::new(m20250603_094807_create_edge_tables::Migration),
        ]
    }
}
