use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::EntityTrait;
use std::env;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use venturegraph::entities::{Company, Founder, FoundersToCompanies, FundingRound, Investor};
use venturegraph::store::{GraphStore, NewCompany, NewFundingRound};

/// Loads a small sample graph so the API has something to serve locally.
/// Wipes the existing rows first, so never point it at real data.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise tracing (INFO level)
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load .env (if present) so DATABASE_URL from file is visible
    let _ = dotenv();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let store = GraphStore::open(&db_url).await?;
    Migrator::up(store.connection(), None).await?;

    info!("Seeding database...");

    // Clear existing data to prevent duplicates; edges first so the
    // RESTRICT foreign keys never fire.
    let conn = store.connection();
    FundingRound::delete_many().exec(conn).await?;
    FoundersToCompanies::delete_many().exec(conn).await?;
    Company::delete_many().exec(conn).await?;
    Investor::delete_many().exec(conn).await?;
    Founder::delete_many().exec(conn).await?;
    info!("Cleared existing data.");

    let bev = store.create_investor("Breakthrough Energy Ventures").await?;
    let s2g = store.create_investor("S2G Ventures").await?;
    let lowercarbon = store.create_investor("Lowercarbon Capital").await?;

    let terra = store
        .create_company(NewCompany {
            name: "Terra CO2 Technology".to_owned(),
            country: Some("USA".to_owned()),
            problem_statement: Some("High emissions from cement.".to_owned()),
            business_model: Some("Hardware, B2B".to_owned()),
            industry: Some("Industry".to_owned()),
        })
        .await?;
    let verdego = store
        .create_company(NewCompany {
            name: "VerdeGo".to_owned(),
            country: Some("USA".to_owned()),
            problem_statement: Some("Inefficient water use in farming.".to_owned()),
            business_model: Some("SaaS".to_owned()),
            industry: Some("Food & Agriculture".to_owned()),
        })
        .await?;
    let sunspark = store
        .create_company(NewCompany {
            name: "SunSpark Homes".to_owned(),
            country: Some("Germany".to_owned()),
            problem_statement: Some("High cost of residential solar.".to_owned()),
            business_model: Some("B2C".to_owned()),
            industry: Some("Energy".to_owned()),
        })
        .await?;
    info!("Seeded Companies and Investors.");

    let rivera = store.create_founder("Elena Rivera").await?;
    let okafor = store.create_founder("Sam Okafor").await?;
    let lindqvist = store.create_founder("Mia Lindqvist").await?;

    store.associate_founder(rivera.id, terra.id).await?;
    store.associate_founder(okafor.id, terra.id).await?;
    store.associate_founder(okafor.id, verdego.id).await?;
    store.associate_founder(lindqvist.id, sunspark.id).await?;
    info!("Seeded Founders and their company links.");

    let rounds = [
        (terra.id, bev.id, 82_000_000, "Series B", "2025-03-04", "https://example.com/1"),
        (verdego.id, s2g.id, 12_000_000, "Series A", "2025-02-18", "https://example.com/2"),
        (sunspark.id, lowercarbon.id, 25_000_000, "Series A", "2025-01-20", "https://example.com/3"),
        (terra.id, lowercarbon.id, 150_000_000, "Series C", "2025-05-10", "https://example.com/4"),
    ];
    for (company_id, investor_id, amount_usd, stage, announced_at, source_url) in rounds {
        store
            .create_funding_round(NewFundingRound {
                company_id,
                investor_id,
                amount_usd: Some(amount_usd),
                stage: Some(stage.to_owned()),
                announced_at: Some(announced_at.parse()?),
                source_url: Some(source_url.to_owned()),
            })
            .await?;
    }
    info!("Seeded Funding Rounds.");

    info!("Database seeding complete!");
    store.close().await?;
    Ok(())
}
