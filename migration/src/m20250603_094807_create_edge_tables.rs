use sea_orm_migration::prelude::*;

use crate::m20250603_091242_create_entity_tables::{Companies, Founders, Investors};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Founder <-> Company join table. Composite primary key so a pair can
        // never appear twice; deleting either endpoint removes the link row,
        // never the other endpoint.
        manager
            .create_table(
                Table::create()
                    .table(FoundersToCompanies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoundersToCompanies::FounderId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FoundersToCompanies::CompanyId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(FoundersToCompanies::FounderId)
                            .col(FoundersToCompanies::CompanyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_founders_to_companies_founder")
                            .from(FoundersToCompanies::Table, FoundersToCompanies::FounderId)
                            .to(Founders::Table, Founders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_founders_to_companies_company")
                            .from(FoundersToCompanies::Table, FoundersToCompanies::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Investment edge. RESTRICT on both parents: a company or investor
        // with recorded rounds cannot be deleted out from under them.
        manager
            .create_table(
                Table::create()
                    .table(FundingRounds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FundingRounds::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FundingRounds::CompanyId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FundingRounds::InvestorId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FundingRounds::AmountUsd).big_integer(), // Whole dollars; late rounds overflow 32 bits
                    )
                    .col(ColumnDef::new(FundingRounds::Stage).string_len(50))
                    .col(ColumnDef::new(FundingRounds::AnnouncedAt).date())
                    .col(ColumnDef::new(FundingRounds::SourceUrl).string_len(512))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_funding_rounds_company")
                            .from(FundingRounds::Table, FundingRounds::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_funding_rounds_investor")
                            .from(FundingRounds::Table, FundingRounds::InvestorId)
                            .to(Investors::Table, Investors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FundingRounds::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FoundersToCompanies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FoundersToCompanies {
    Table,
    FounderId,
    CompanyId,
}

#[derive(DeriveIden)]
enum FundingRounds {
    Table,
    Id,
    CompanyId,
    InvestorId,
    AmountUsd,
    Stage,
    AnnouncedAt,
    SourceUrl,
}
