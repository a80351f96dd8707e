//! The graph store: four entity types, two attribute edges, and the access
//! layer that enforces the domain's integrity rules.
//!
//! Uniqueness and referential integrity live in the database schema (UNIQUE
//! keys, foreign keys, the join table's composite primary key); this module
//! pre-validates field constraints, wraps each logical operation in a single
//! transaction, and translates driver errors into [`StoreError`] variants.

mod error;

pub use error::StoreError;

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, Database, DatabaseConnection,
    DatabaseTransaction, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
    TransactionTrait,
};

use crate::entities::{company, founder, founders_to_companies, funding_round, investor};

const MAX_NAME_LEN: usize = 256;
const MAX_COUNTRY_LEN: usize = 100;
const MAX_BUSINESS_MODEL_LEN: usize = 256;
const MAX_INDUSTRY_LEN: usize = 100;
const MAX_STAGE_LEN: usize = 50;
const MAX_SOURCE_URL_LEN: usize = 512;

/// Input for [`GraphStore::create_company`]. Only `name` is required.
#[derive(Debug, Clone, Default)]
pub struct NewCompany {
    pub name: String,
    pub country: Option<String>,
    pub problem_statement: Option<String>,
    pub business_model: Option<String>,
    pub industry: Option<String>,
}

/// Input for [`GraphStore::create_funding_round`].
#[derive(Debug, Clone, Default)]
pub struct NewFundingRound {
    pub company_id: i32,
    pub investor_id: i32,
    pub amount_usd: Option<i64>,
    pub stage: Option<String>,
    pub announced_at: Option<chrono::NaiveDate>,
    pub source_url: Option<String>,
}

/// A company with its relationships resolved: the founders behind it and the
/// rounds it has raised.
#[derive(Debug, Clone)]
pub struct CompanyGraph {
    pub company: company::Model,
    pub founders: Vec<founder::Model>,
    pub funding_rounds: Vec<funding_round::Model>,
}

/// An investor with every round it has participated in.
#[derive(Debug, Clone)]
pub struct InvestorGraph {
    pub investor: investor::Model,
    pub funding_rounds: Vec<funding_round::Model>,
}

/// Handle to the persistent graph. Explicitly constructed and passed to
/// whoever needs it; there is no global connection.
#[derive(Clone)]
pub struct GraphStore {
    conn: DatabaseConnection,
}

impl GraphStore {
    /// Connect to the store identified by `url` (any SeaORM-supported
    /// connection string).
    pub async fn open(url: &str) -> Result<Self, StoreError> {
        let conn = Database::connect(ConnectOptions::new(url.to_owned()))
            .await
            .map_err(StoreError::from_db)?;
        Ok(Self { conn })
    }

    /// Wrap an already-established connection (used by tests and the seeder).
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Close the underlying connection pool.
    pub async fn close(self) -> Result<(), StoreError> {
        self.conn.close().await.map_err(StoreError::from_db)
    }

    #[tracing::instrument(skip(self, new), fields(name = %new.name))]
    pub async fn create_company(&self, new: NewCompany) -> Result<company::Model, StoreError> {
        validate_required_name("company", &new.name)?;
        validate_optional_len("country", new.country.as_deref(), MAX_COUNTRY_LEN)?;
        validate_optional_len(
            "business_model",
            new.business_model.as_deref(),
            MAX_BUSINESS_MODEL_LEN,
        )?;
        validate_optional_len("industry", new.industry.as_deref(), MAX_INDUSTRY_LEN)?;

        let name = new.name.clone();
        let model = company::ActiveModel {
            name: Set(new.name),
            country: Set(new.country),
            problem_statement: Set(new.problem_statement),
            business_model: Set(new.business_model),
            industry: Set(new.industry),
            ..Default::default()
        };

        let created = model.insert(&self.conn).await.map_err(|err| {
            if is_unique_violation(&err) {
                tracing::warn!(%name, "rejected duplicate company name");
                StoreError::DuplicateName {
                    entity: "company",
                    name: name.clone(),
                }
            } else {
                StoreError::from_db(err)
            }
        })?;

        tracing::info!(id = created.id, "created company");
        Ok(created)
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_investor(&self, name: &str) -> Result<investor::Model, StoreError> {
        validate_required_name("investor", name)?;

        let model = investor::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        };

        let created = model.insert(&self.conn).await.map_err(|err| {
            if is_unique_violation(&err) {
                tracing::warn!(%name, "rejected duplicate investor name");
                StoreError::DuplicateName {
                    entity: "investor",
                    name: name.to_owned(),
                }
            } else {
                StoreError::from_db(err)
            }
        })?;

        tracing::info!(id = created.id, "created investor");
        Ok(created)
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_founder(&self, name: &str) -> Result<founder::Model, StoreError> {
        validate_required_name("founder", name)?;

        let model = founder::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        };

        let created = model.insert(&self.conn).await.map_err(StoreError::from_db)?;
        tracing::info!(id = created.id, "created founder");
        Ok(created)
    }

    /// Record that `founder_id` founded `company_id`. Both sides must exist;
    /// associating the same pair twice is a reported conflict, and the
    /// composite primary key guarantees a second row can never appear even
    /// under concurrent calls.
    #[tracing::instrument(skip(self))]
    pub async fn associate_founder(
        &self,
        founder_id: i32,
        company_id: i32,
    ) -> Result<(), StoreError> {
        let txn = self.conn.begin().await.map_err(StoreError::from_db)?;

        require_founder(&txn, founder_id).await?;
        require_company(&txn, company_id).await?;

        let link = founders_to_companies::ActiveModel {
            founder_id: Set(founder_id),
            company_id: Set(company_id),
        };

        founders_to_companies::Entity::insert(link)
            .exec_without_returning(&txn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    StoreError::AlreadyAssociated {
                        founder_id,
                        company_id,
                    }
                } else {
                    StoreError::from_db(err)
                }
            })?;

        txn.commit().await.map_err(StoreError::from_db)?;
        tracing::info!("associated founder with company");
        Ok(())
    }

    /// Insert an investment edge. The company and investor must already
    /// exist; nothing is ever created implicitly.
    #[tracing::instrument(skip(self, new), fields(company_id = new.company_id, investor_id = new.investor_id))]
    pub async fn create_funding_round(
        &self,
        new: NewFundingRound,
    ) -> Result<funding_round::Model, StoreError> {
        if let Some(amount) = new.amount_usd {
            if amount < 0 {
                return Err(StoreError::Validation(format!(
                    "amount_usd must not be negative (got {amount})"
                )));
            }
        }
        validate_optional_len("stage", new.stage.as_deref(), MAX_STAGE_LEN)?;
        validate_optional_len("source_url", new.source_url.as_deref(), MAX_SOURCE_URL_LEN)?;

        let txn = self.conn.begin().await.map_err(StoreError::from_db)?;

        require_company(&txn, new.company_id).await?;
        require_investor(&txn, new.investor_id).await?;

        let model = funding_round::ActiveModel {
            company_id: Set(new.company_id),
            investor_id: Set(new.investor_id),
            amount_usd: Set(new.amount_usd),
            stage: Set(new.stage),
            announced_at: Set(new.announced_at),
            source_url: Set(new.source_url),
            ..Default::default()
        };

        let created = model.insert(&txn).await.map_err(StoreError::from_db)?;
        txn.commit().await.map_err(StoreError::from_db)?;

        tracing::info!(id = created.id, "created funding round");
        Ok(created)
    }

    /// Read a company together with its founders and funding history. Each
    /// relationship is resolved with one joined query inside the same
    /// transaction; callers never chase the edges themselves.
    #[tracing::instrument(skip(self))]
    pub async fn get_company(&self, id: i32) -> Result<CompanyGraph, StoreError> {
        let txn = self.conn.begin().await.map_err(StoreError::from_db)?;

        let company = company::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(StoreError::from_db)?
            .ok_or(StoreError::NotFound {
                entity: "company",
                id,
            })?;

        let founders = company
            .find_related(founder::Entity)
            .order_by_asc(founder::Column::Id)
            .all(&txn)
            .await
            .map_err(StoreError::from_db)?;

        let funding_rounds = company
            .find_related(funding_round::Entity)
            .order_by_asc(funding_round::Column::Id)
            .all(&txn)
            .await
            .map_err(StoreError::from_db)?;

        txn.commit().await.map_err(StoreError::from_db)?;

        Ok(CompanyGraph {
            company,
            founders,
            funding_rounds,
        })
    }

    /// Read an investor together with every round it has participated in.
    #[tracing::instrument(skip(self))]
    pub async fn get_investor(&self, id: i32) -> Result<InvestorGraph, StoreError> {
        let txn = self.conn.begin().await.map_err(StoreError::from_db)?;

        let investor = investor::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(StoreError::from_db)?
            .ok_or(StoreError::NotFound {
                entity: "investor",
                id,
            })?;

        let funding_rounds = investor
            .find_related(funding_round::Entity)
            .order_by_asc(funding_round::Column::Id)
            .all(&txn)
            .await
            .map_err(StoreError::from_db)?;

        txn.commit().await.map_err(StoreError::from_db)?;

        Ok(InvestorGraph {
            investor,
            funding_rounds,
        })
    }

    pub async fn list_companies(&self) -> Result<Vec<company::Model>, StoreError> {
        company::Entity::find()
            .order_by_asc(company::Column::Id)
            .all(&self.conn)
            .await
            .map_err(StoreError::from_db)
    }

    pub async fn list_investors(&self) -> Result<Vec<investor::Model>, StoreError> {
        investor::Entity::find()
            .order_by_asc(investor::Column::Id)
            .all(&self.conn)
            .await
            .map_err(StoreError::from_db)
    }

    pub async fn list_founders(&self) -> Result<Vec<founder::Model>, StoreError> {
        founder::Entity::find()
            .order_by_asc(founder::Column::Id)
            .all(&self.conn)
            .await
            .map_err(StoreError::from_db)
    }

    pub async fn list_funding_rounds(&self) -> Result<Vec<funding_round::Model>, StoreError> {
        funding_round::Entity::find()
            .order_by_asc(funding_round::Column::Id)
            .all(&self.conn)
            .await
            .map_err(StoreError::from_db)
    }

    /// Delete a company. Fails with `ConstraintConflict` while any funding
    /// round references it; its rows in the founders join table go with it.
    #[tracing::instrument(skip(self))]
    pub async fn delete_company(&self, id: i32) -> Result<(), StoreError> {
        let txn = self.conn.begin().await.map_err(StoreError::from_db)?;
        require_company(&txn, id).await?;

        let referencing = funding_round::Entity::find()
            .filter(funding_round::Column::CompanyId.eq(id))
            .count(&txn)
            .await
            .map_err(StoreError::from_db)?;
        if referencing > 0 {
            return Err(StoreError::ConstraintConflict(format!(
                "company {id} is referenced by {referencing} funding round(s)"
            )));
        }

        // The join table cascades; only the funding-round FK restricts.
        founders_to_companies::Entity::delete_many()
            .filter(founders_to_companies::Column::CompanyId.eq(id))
            .exec(&txn)
            .await
            .map_err(StoreError::from_db)?;
        company::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|err| map_fk_violation(err, "company", id))?;

        txn.commit().await.map_err(StoreError::from_db)?;
        tracing::info!("deleted company");
        Ok(())
    }

    /// Delete an investor. Fails with `ConstraintConflict` while any funding
    /// round references it.
    #[tracing::instrument(skip(self))]
    pub async fn delete_investor(&self, id: i32) -> Result<(), StoreError> {
        let txn = self.conn.begin().await.map_err(StoreError::from_db)?;
        require_investor(&txn, id).await?;

        let referencing = funding_round::Entity::find()
            .filter(funding_round::Column::InvestorId.eq(id))
            .count(&txn)
            .await
            .map_err(StoreError::from_db)?;
        if referencing > 0 {
            return Err(StoreError::ConstraintConflict(format!(
                "investor {id} is referenced by {referencing} funding round(s)"
            )));
        }

        investor::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|err| map_fk_violation(err, "investor", id))?;

        txn.commit().await.map_err(StoreError::from_db)?;
        tracing::info!("deleted investor");
        Ok(())
    }

    /// Delete a founder. Association rows disappear with it; nothing else
    /// references founders.
    #[tracing::instrument(skip(self))]
    pub async fn delete_founder(&self, id: i32) -> Result<(), StoreError> {
        let txn = self.conn.begin().await.map_err(StoreError::from_db)?;
        require_founder(&txn, id).await?;

        founders_to_companies::Entity::delete_many()
            .filter(founders_to_companies::Column::FounderId.eq(id))
            .exec(&txn)
            .await
            .map_err(StoreError::from_db)?;
        founder::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(StoreError::from_db)?;

        txn.commit().await.map_err(StoreError::from_db)?;
        tracing::info!("deleted founder");
        Ok(())
    }
}

async fn require_company(txn: &DatabaseTransaction, id: i32) -> Result<(), StoreError> {
    let found = company::Entity::find_by_id(id)
        .count(txn)
        .await
        .map_err(StoreError::from_db)?;
    if found == 0 {
        return Err(StoreError::NotFound {
            entity: "company",
            id,
        });
    }
    Ok(())
}

async fn require_investor(txn: &DatabaseTransaction, id: i32) -> Result<(), StoreError> {
    let found = investor::Entity::find_by_id(id)
        .count(txn)
        .await
        .map_err(StoreError::from_db)?;
    if found == 0 {
        return Err(StoreError::NotFound {
            entity: "investor",
            id,
        });
    }
    Ok(())
}

async fn require_founder(txn: &DatabaseTransaction, id: i32) -> Result<(), StoreError> {
    let found = founder::Entity::find_by_id(id)
        .count(txn)
        .await
        .map_err(StoreError::from_db)?;
    if found == 0 {
        return Err(StoreError::NotFound {
            entity: "founder",
            id,
        });
    }
    Ok(())
}

fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn map_fk_violation(err: sea_orm::DbErr, entity: &'static str, id: i32) -> StoreError {
    if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
        StoreError::ConstraintConflict(format!(
            "{entity} {id} is still referenced by funding rounds"
        ))
    } else {
        StoreError::from_db(err)
    }
}

fn validate_required_name(entity: &'static str, name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation(format!(
            "{entity} name must not be empty"
        )));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(StoreError::Validation(format!(
            "{entity} name exceeds {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_optional_len(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), StoreError> {
    if let Some(value) = value {
        if value.chars().count() > max {
            return Err(StoreError::Validation(format!(
                "{field} exceeds {max} characters"
            )));
        }
    }
    Ok(())
}
