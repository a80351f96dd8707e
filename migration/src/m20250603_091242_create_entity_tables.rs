use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Companies::Name)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Companies::Country).string_len(100))
                    .col(ColumnDef::new(Companies::ProblemStatement).text())
                    .col(ColumnDef::new(Companies::BusinessModel).string_len(256))
                    .col(ColumnDef::new(Companies::Industry).string_len(100))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Investors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Investors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Investors::Name)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Founders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Founders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Founder names are intentionally not unique
                    .col(ColumnDef::new(Founders::Name).string_len(256).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Founders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Investors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Companies {
    Table,
    Id,
    Name,
    Country,
    ProblemStatement,
    BusinessModel,
    Industry,
}

#[derive(DeriveIden)]
pub enum Investors {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Founders {
    Table,
    Id,
    Name,
}
