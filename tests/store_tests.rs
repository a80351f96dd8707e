use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, EntityTrait, PaginatorTrait};

use venturegraph::entities::{FoundersToCompanies, FundingRound};
use venturegraph::store::{GraphStore, NewCompany, NewFundingRound, StoreError};

/// Fresh in-memory store with the schema applied. One pooled connection so
/// the whole test sees the same SQLite database.
async fn test_store() -> GraphStore {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1).min_connections(1);
    let conn = Database::connect(opts).await.unwrap();
    Migrator::up(&conn, None).await.unwrap();
    GraphStore::from_connection(conn)
}

fn widget_inc() -> NewCompany {
    NewCompany {
        name: "Widget Inc".to_owned(),
        country: Some("US".to_owned()),
        problem_statement: Some("Widgets are scarce.".to_owned()),
        business_model: Some("B2B hardware sales".to_owned()),
        industry: Some("Hardware".to_owned()),
    }
}

#[tokio::test]
async fn company_create_get_round_trip() {
    let store = test_store().await;

    let created = store.create_company(widget_inc()).await.unwrap();
    let graph = store.get_company(created.id).await.unwrap();

    assert_eq!(graph.company.id, created.id);
    assert_eq!(graph.company.name, "Widget Inc");
    assert_eq!(graph.company.country.as_deref(), Some("US"));
    assert_eq!(
        graph.company.problem_statement.as_deref(),
        Some("Widgets are scarce.")
    );
    assert_eq!(
        graph.company.business_model.as_deref(),
        Some("B2B hardware sales")
    );
    assert_eq!(graph.company.industry.as_deref(), Some("Hardware"));
    assert!(graph.founders.is_empty());
    assert!(graph.funding_rounds.is_empty());
}

#[tokio::test]
async fn duplicate_company_name_is_rejected() {
    let store = test_store().await;

    store.create_company(widget_inc()).await.unwrap();
    let err = store.create_company(widget_inc()).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::DuplicateName {
            entity: "company",
            ..
        }
    ));

    // Exactly one row with that name survives
    let companies = store.list_companies().await.unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].name, "Widget Inc");
}

#[tokio::test]
async fn duplicate_investor_name_is_rejected() {
    let store = test_store().await;

    store.create_investor("Acme Ventures").await.unwrap();
    let err = store.create_investor("Acme Ventures").await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::DuplicateName {
            entity: "investor",
            ..
        }
    ));
    assert_eq!(store.list_investors().await.unwrap().len(), 1);
}

#[tokio::test]
async fn founders_may_share_a_name() {
    let store = test_store().await;

    let first = store.create_founder("Alex Kim").await.unwrap();
    let second = store.create_founder("Alex Kim").await.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(store.list_founders().await.unwrap().len(), 2);
}

#[tokio::test]
async fn funding_round_requires_existing_company_and_investor() {
    let store = test_store().await;
    let investor = store.create_investor("Acme Ventures").await.unwrap();

    let err = store
        .create_funding_round(NewFundingRound {
            company_id: 999,
            investor_id: investor.id,
            amount_usd: Some(1_000_000),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound {
            entity: "company",
            id: 999
        }
    ));

    let company = store.create_company(widget_inc()).await.unwrap();
    let err = store
        .create_funding_round(NewFundingRound {
            company_id: company.id,
            investor_id: 999,
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound {
            entity: "investor",
            id: 999
        }
    ));

    // Neither failed write left a row behind
    assert!(store.list_funding_rounds().await.unwrap().is_empty());
}

#[tokio::test]
async fn founder_appears_only_in_associated_companies() {
    let store = test_store().await;

    let a = store
        .create_company(NewCompany {
            name: "Alpha Robotics".to_owned(),
            ..Default::default()
        })
        .await
        .unwrap();
    let b = store
        .create_company(NewCompany {
            name: "Beta Biotech".to_owned(),
            ..Default::default()
        })
        .await
        .unwrap();
    let c = store
        .create_company(NewCompany {
            name: "Gamma Grid".to_owned(),
            ..Default::default()
        })
        .await
        .unwrap();

    let founder = store.create_founder("Dana Whitfield").await.unwrap();
    store.associate_founder(founder.id, a.id).await.unwrap();
    store.associate_founder(founder.id, b.id).await.unwrap();

    let graph_a = store.get_company(a.id).await.unwrap();
    assert_eq!(graph_a.founders.len(), 1);
    assert_eq!(graph_a.founders[0].id, founder.id);

    let graph_b = store.get_company(b.id).await.unwrap();
    assert_eq!(graph_b.founders.len(), 1);

    let graph_c = store.get_company(c.id).await.unwrap();
    assert!(graph_c.founders.is_empty());
}

#[tokio::test]
async fn double_association_never_duplicates_the_row() {
    let store = test_store().await;

    let company = store.create_company(widget_inc()).await.unwrap();
    let founder = store.create_founder("Dana Whitfield").await.unwrap();

    store.associate_founder(founder.id, company.id).await.unwrap();
    let err = store
        .associate_founder(founder.id, company.id)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::AlreadyAssociated { .. }));

    let rows = FoundersToCompanies::find()
        .count(store.connection())
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn associate_requires_both_endpoints() {
    let store = test_store().await;
    let company = store.create_company(widget_inc()).await.unwrap();

    let err = store.associate_founder(42, company.id).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound {
            entity: "founder",
            id: 42
        }
    ));

    let founder = store.create_founder("Dana Whitfield").await.unwrap();
    let err = store.associate_founder(founder.id, 42).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound {
            entity: "company",
            id: 42
        }
    ));
}

#[tokio::test]
async fn investor_and_company_share_the_round() {
    let store = test_store().await;

    let investor = store.create_investor("Acme Ventures").await.unwrap();
    let company = store.create_company(widget_inc()).await.unwrap();

    store
        .create_funding_round(NewFundingRound {
            company_id: company.id,
            investor_id: investor.id,
            amount_usd: Some(500_000),
            stage: Some("Seed".to_owned()),
            ..Default::default()
        })
        .await
        .unwrap();

    let investor_graph = store.get_investor(investor.id).await.unwrap();
    assert_eq!(investor_graph.investor.name, "Acme Ventures");
    assert_eq!(investor_graph.funding_rounds.len(), 1);
    let round = &investor_graph.funding_rounds[0];
    assert_eq!(round.amount_usd, Some(500_000));
    assert_eq!(round.stage.as_deref(), Some("Seed"));

    let company_graph = store.get_company(company.id).await.unwrap();
    assert_eq!(company_graph.funding_rounds.len(), 1);
    assert_eq!(company_graph.funding_rounds[0].id, round.id);
}

#[tokio::test]
async fn delete_is_blocked_while_rounds_reference_the_entity() {
    let store = test_store().await;

    let investor = store.create_investor("Acme Ventures").await.unwrap();
    let company = store.create_company(widget_inc()).await.unwrap();
    let founder = store.create_founder("Dana Whitfield").await.unwrap();
    store.associate_founder(founder.id, company.id).await.unwrap();
    store
        .create_funding_round(NewFundingRound {
            company_id: company.id,
            investor_id: investor.id,
            amount_usd: Some(500_000),
            ..Default::default()
        })
        .await
        .unwrap();

    let err = store.delete_company(company.id).await.unwrap_err();
    assert!(matches!(err, StoreError::ConstraintConflict(_)));
    let err = store.delete_investor(investor.id).await.unwrap_err();
    assert!(matches!(err, StoreError::ConstraintConflict(_)));

    // Both still present
    assert_eq!(store.list_companies().await.unwrap().len(), 1);
    assert_eq!(store.list_investors().await.unwrap().len(), 1);

    // Once the rounds are gone the delete goes through and takes the
    // association rows with it.
    FundingRound::delete_many()
        .exec(store.connection())
        .await
        .unwrap();
    store.delete_company(company.id).await.unwrap();
    assert!(store.list_companies().await.unwrap().is_empty());

    let links = FoundersToCompanies::find()
        .count(store.connection())
        .await
        .unwrap();
    assert_eq!(links, 0);

    store.delete_investor(investor.id).await.unwrap();
    assert!(store.list_investors().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_founder_removes_their_links() {
    let store = test_store().await;

    let company = store.create_company(widget_inc()).await.unwrap();
    let founder = store.create_founder("Dana Whitfield").await.unwrap();
    store.associate_founder(founder.id, company.id).await.unwrap();

    store.delete_founder(founder.id).await.unwrap();

    let graph = store.get_company(company.id).await.unwrap();
    assert!(graph.founders.is_empty());
    assert!(store.list_founders().await.unwrap().is_empty());

    let err = store.delete_founder(founder.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "founder", .. }));
}

#[tokio::test]
async fn field_validation_rejects_bad_input() {
    let store = test_store().await;

    let err = store
        .create_company(NewCompany {
            name: "   ".to_owned(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let err = store
        .create_company(NewCompany {
            name: "x".repeat(257),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let err = store
        .create_company(NewCompany {
            name: "Widget Inc".to_owned(),
            country: Some("c".repeat(101)),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let err = store.create_investor("").await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let err = store.create_founder("").await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    // Nothing was written by any of the rejected calls
    assert!(store.list_companies().await.unwrap().is_empty());
    assert!(store.list_investors().await.unwrap().is_empty());
    assert!(store.list_founders().await.unwrap().is_empty());
}

#[tokio::test]
async fn negative_amount_is_rejected_before_any_write() {
    let store = test_store().await;

    let investor = store.create_investor("Acme Ventures").await.unwrap();
    let company = store.create_company(widget_inc()).await.unwrap();

    let err = store
        .create_funding_round(NewFundingRound {
            company_id: company.id,
            investor_id: investor.id,
            amount_usd: Some(-1),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let err = store
        .create_funding_round(NewFundingRound {
            company_id: company.id,
            investor_id: investor.id,
            stage: Some("s".repeat(51)),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    assert!(store.list_funding_rounds().await.unwrap().is_empty());
}

#[tokio::test]
async fn listings_are_ordered_by_id() {
    let store = test_store().await;

    for name in ["Zeta Labs", "Apex AI", "Mango Motors"] {
        store
            .create_company(NewCompany {
                name: name.to_owned(),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let companies = store.list_companies().await.unwrap();
    let ids: Vec<i32> = companies.iter().map(|c| c.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(companies.len(), 3);

    // Re-querying yields the same sequence
    let again = store.list_companies().await.unwrap();
    assert_eq!(
        again.iter().map(|c| c.id).collect::<Vec<_>>(),
        ids
    );
}

#[tokio::test]
async fn round_keeps_optional_metadata() {
    let store = test_store().await;

    let investor = store.create_investor("Acme Ventures").await.unwrap();
    let company = store.create_company(widget_inc()).await.unwrap();

    let round = store
        .create_funding_round(NewFundingRound {
            company_id: company.id,
            investor_id: investor.id,
            amount_usd: Some(500_000),
            stage: Some("Seed".to_owned()),
            announced_at: Some("2025-03-04".parse().unwrap()),
            source_url: Some("https://example.com/announcement".to_owned()),
        })
        .await
        .unwrap();

    let graph = store.get_company(company.id).await.unwrap();
    let stored = &graph.funding_rounds[0];
    assert_eq!(stored.id, round.id);
    assert_eq!(stored.announced_at.map(|d| d.to_string()).as_deref(), Some("2025-03-04"));
    assert_eq!(
        stored.source_url.as_deref(),
        Some("https://example.com/announcement")
    );
}
